use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::FutureExt;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::session::{SessionReader, SessionWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::session::Session;
use crate::domain::entities::user::User;

/// Sessions are created by the account service; this gateway only looks them up,
/// tracks activity and removes them.
pub struct SessionGateway {
    session: SqlxSession,
}

impl SessionGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }

    fn get_session(row: &PgRow) -> AppResult<Session> {
        Ok(Session {
            id: Id::new(row.try_get("id")?),
            user_id: Id::new(row.try_get("user_id")?),
            created_at: row.try_get("created_at")?,
            last_activity: row.try_get("last_activity")?,
        })
    }
}

#[async_trait]
impl SessionWriter for SessionGateway {
    async fn update_activity(&self, session_id: &Id<Session>, now: DateTime<Utc>) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let session_id = session_id.value;
                async move {
                    sqlx::query("UPDATE sessions SET last_activity = $2 WHERE id = $1")
                        .bind(session_id)
                        .bind(now)
                        .execute(tx.as_mut())
                        .await?;
                    Ok(())
                }
                .boxed()
            })
            .await
    }

    async fn delete(&self, session_id: &Id<Session>) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let session_id = session_id.value;
                async move {
                    sqlx::query("DELETE FROM sessions WHERE id = $1")
                        .bind(session_id)
                        .execute(tx.as_mut())
                        .await?;
                    Ok(())
                }
                .boxed()
            })
            .await
    }

    async fn delete_by_user_id(&self, user_id: &Id<User>) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                async move {
                    sqlx::query("DELETE FROM sessions WHERE user_id = $1")
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

#[async_trait]
impl SessionReader for SessionGateway {
    async fn find_by_id(&self, session_id: &Id<Session>) -> AppResult<Option<Session>> {
        self.session
            .with_tx(|tx| {
                let session_id = session_id.value;
                async move {
                    let row = sqlx::query(
                        r#"
                            SELECT id, user_id, created_at, last_activity
                            FROM sessions
                            WHERE id = $1
                        "#,
                    )
                    .bind(session_id)
                    .fetch_optional(tx.as_mut())
                    .await?;

                    row.as_ref().map(Self::get_session).transpose()
                }
                .boxed()
            })
            .await
    }
}
