use async_trait::async_trait;
use futures::FutureExt;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::user::UserWriter;
use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;

#[derive(Clone)]
pub struct UserGateway {
    session: SqlxSession,
}

impl UserGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl UserWriter for UserGateway {
    async fn delete(&self, user_id: &Id<User>) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                async move {
                    sqlx::query("DELETE FROM users WHERE id = $1")
                        .bind(user_id)
                        .execute(tx.as_mut())
                        .await?;
                    Ok(())
                }
                .boxed()
            })
            .await
    }
}
