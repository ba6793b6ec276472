use crate::domain::entities::id::Id;

/// Public part of an account, as it is embedded into profile responses.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Id<User>,
    pub name: String,
    pub avatar: Option<String>,
}
