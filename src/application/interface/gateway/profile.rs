use async_trait::async_trait;

use crate::application::app_error::AppResult;
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::{Profile, ProfileView};
use crate::domain::entities::user::User;

#[async_trait]
pub trait ProfileWriter: Send + Sync {
    async fn insert(&self, profile: Profile) -> AppResult<Id<Profile>>;
    async fn update(&self, profile: Profile) -> AppResult<()>;
    async fn delete_by_user_id(&self, user_id: &Id<User>) -> AppResult<()>;
}

#[async_trait]
pub trait ProfileReader: Send + Sync {
    async fn find_by_user_id(&self, user_id: &Id<User>) -> AppResult<Option<Profile>>;
    async fn get_view(&self, user_id: &Id<User>) -> AppResult<Option<ProfileView>>;
    async fn get_all_views(&self) -> AppResult<Vec<ProfileView>>;
}
