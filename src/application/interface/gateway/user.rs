use crate::{
    application::app_error::AppResult,
    domain::entities::{
        id::Id,
        user::User
    }
};
use async_trait::async_trait;

#[async_trait]
pub trait UserWriter: Send + Sync {
    async fn delete(&self, user_id: &Id<User>) -> AppResult<()>;
}
