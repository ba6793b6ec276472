use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use sqlx::{Pool, Postgres};

use crate::adapter::db::gateway::profile::ProfileGateway;
use crate::adapter::db::gateway::session::SessionGateway;
use crate::adapter::db::gateway::user::UserGateway;
use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::{AppError, AppResult};
use crate::application::interactors::profile::{
    AddEducationInteractor, AddExperienceInteractor, DeleteAccountInteractor, GetOwnProfileInteractor,
    GetProfileByUserInteractor, GetProfileListInteractor, RemoveEducationInteractor, RemoveExperienceInteractor,
    UpsertProfileInteractor,
};
use crate::application::interactors::session::ValidateSessionInteractor;
use crate::infra::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: Pool<Postgres>,
    pub config: Arc<AppConfig>,
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

#[async_trait]
pub trait FromAppState: Sized {
    async fn from_app_state(state: &AppState) -> AppResult<Self>;
}

// Every interactor is built per request from a fresh lazy session.
macro_rules! interactor_extractor {
    ($($interactor:ty),+ $(,)?) => {
        $(
            impl<S> FromRequestParts<S> for $interactor
            where
                S: Send + Sync,
                AppState: FromRef<S>,
            {
                type Rejection = AppError;

                async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
                    let app_state = AppState::from_ref(state);
                    <$interactor>::from_app_state(&app_state).await
                }
            }
        )+
    };
}

interactor_extractor!(
    ValidateSessionInteractor,
    GetOwnProfileInteractor,
    UpsertProfileInteractor,
    GetProfileListInteractor,
    GetProfileByUserInteractor,
    DeleteAccountInteractor,
    AddExperienceInteractor,
    RemoveExperienceInteractor,
    AddEducationInteractor,
    RemoveEducationInteractor,
);

// ValidateSessionInteractor
#[async_trait]
impl FromAppState for ValidateSessionInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let session_gateway = Arc::new(SessionGateway::new(session.clone()));

        Ok(ValidateSessionInteractor::new(
            Arc::new(session),
            session_gateway.clone(),
            session_gateway,
        ))
    }
}

// GetOwnProfileInteractor
#[async_trait]
impl FromAppState for GetOwnProfileInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = Arc::new(ProfileGateway::new(session));

        Ok(GetOwnProfileInteractor::new(profile_gateway))
    }
}

// UpsertProfileInteractor
#[async_trait]
impl FromAppState for UpsertProfileInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = Arc::new(ProfileGateway::new(session.clone()));

        Ok(UpsertProfileInteractor::new(
            Arc::new(session),
            profile_gateway.clone(),
            profile_gateway,
        ))
    }
}

// GetProfileListInteractor
#[async_trait]
impl FromAppState for GetProfileListInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = Arc::new(ProfileGateway::new(session));

        Ok(GetProfileListInteractor::new(profile_gateway))
    }
}

// GetProfileByUserInteractor
#[async_trait]
impl FromAppState for GetProfileByUserInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = Arc::new(ProfileGateway::new(session));

        Ok(GetProfileByUserInteractor::new(profile_gateway))
    }
}

// DeleteAccountInteractor
#[async_trait]
impl FromAppState for DeleteAccountInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());

        Ok(DeleteAccountInteractor::new(
            Arc::new(session.clone()),
            Arc::new(ProfileGateway::new(session.clone())),
            Arc::new(SessionGateway::new(session.clone())),
            Arc::new(UserGateway::new(session)),
        ))
    }
}

// AddExperienceInteractor
#[async_trait]
impl FromAppState for AddExperienceInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = Arc::new(ProfileGateway::new(session.clone()));

        Ok(AddExperienceInteractor::new(
            Arc::new(session),
            profile_gateway.clone(),
            profile_gateway,
        ))
    }
}

// RemoveExperienceInteractor
#[async_trait]
impl FromAppState for RemoveExperienceInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = Arc::new(ProfileGateway::new(session.clone()));

        Ok(RemoveExperienceInteractor::new(
            Arc::new(session),
            profile_gateway.clone(),
            profile_gateway,
        ))
    }
}

// AddEducationInteractor
#[async_trait]
impl FromAppState for AddEducationInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = Arc::new(ProfileGateway::new(session.clone()));

        Ok(AddEducationInteractor::new(
            Arc::new(session),
            profile_gateway.clone(),
            profile_gateway,
        ))
    }
}

// RemoveEducationInteractor
#[async_trait]
impl FromAppState for RemoveEducationInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = Arc::new(ProfileGateway::new(session.clone()));

        Ok(RemoveEducationInteractor::new(
            Arc::new(session),
            profile_gateway.clone(),
            profile_gateway,
        ))
    }
}
