use crate::{
    application::{
        app_error::AppResult,
        dto::session::{SessionDTO, SessionValidationResult},
        interface::{
            db::DBSession,
            gateway::session::{SessionReader, SessionWriter},
        },
    },
    domain::entities::{id::Id, session::Session},
};
use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct ValidateSessionInteractor {
    db_session: Arc<dyn DBSession>,
    session_reader: Arc<dyn SessionReader>,
    session_writer: Arc<dyn SessionWriter>,
}

impl ValidateSessionInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        session_reader: Arc<dyn SessionReader>,
        session_writer: Arc<dyn SessionWriter>,
    ) -> Self {
        Self {
            db_session,
            session_reader,
            session_writer,
        }
    }

    pub async fn execute(&self, dto: SessionDTO) -> AppResult<SessionValidationResult> {
        let session_id: Id<Session> = match dto.id.try_into() {
            Ok(id) => id,
            Err(_) => return Ok(SessionValidationResult::Invalid),
        };
        let session = match self.session_reader.find_by_id(&session_id).await? {
            Some(s) => s,
            None => return Ok(SessionValidationResult::Invalid),
        };

        let now = Utc::now();
        let max_lifetime = Duration::seconds(dto.max_lifetime);
        let idle_timeout = Duration::seconds(dto.idle_timeout);

        if session.is_expired(now, max_lifetime, idle_timeout) {
            self.session_writer.delete(&session.id).await?;
            self.db_session.commit().await?;
            info!("Session {} of user {} expired", session.id.value, session.user_id.value);
            return Ok(SessionValidationResult::Expired);
        }

        self.session_writer.update_activity(&session.id, now).await?;
        self.db_session.commit().await?;
        Ok(SessionValidationResult::Valid(session.user_id))
    }
}
