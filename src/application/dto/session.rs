use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;

#[derive(Debug)]
pub struct SessionDTO {
    pub id: String,
    pub max_lifetime: i64,
    pub idle_timeout: i64,
}

#[derive(Debug, Clone)]
pub enum SessionValidationResult {
    Valid(Id<User>),
    Expired,
    Invalid,
}
