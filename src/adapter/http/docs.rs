use std::sync::Arc;

use axum::{extract::State, response::Html, Json};
use utoipa::{
    openapi::{
        security::{ApiKey, ApiKeyValue, SecurityScheme},
        OpenApi as OpenApiDoc,
    }, Modify,
    OpenApi,
};

use crate::adapter::http::{
    app_error_impl::{ErrorResponse, FieldError, ValidationErrorResponse},
    routes::profile,
    schema::{
        message::MessageResponse,
        profile::{
            AddEducationRequest, AddExperienceRequest, EducationResponse, ExperienceResponse, ProfileResponse,
            ProfileUserResponse, SocialResponse, UpsertProfileRequest,
        },
    },
};
use crate::infra::config::{AppConfig, SessionConfig};

pub struct SecurityAddon {
    cookie_name: String,
}

impl SecurityAddon {
    pub fn new(session: &SessionConfig) -> Self {
        Self {
            cookie_name: session.cookie_name.clone(),
        }
    }
}

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut OpenApiDoc) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "cookieAuth",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(self.cookie_name.as_str()))),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        profile::get_own_profile,
        profile::upsert_profile,
        profile::get_profiles,
        profile::get_profile_by_user,
        profile::delete_account,
        profile::add_experience,
        profile::remove_experience,
        profile::add_education,
        profile::remove_education
    ),
    components(
        schemas(
            ErrorResponse,
            FieldError,
            ValidationErrorResponse,
            MessageResponse,
            UpsertProfileRequest,
            AddExperienceRequest,
            AddEducationRequest,
            ProfileResponse,
            ProfileUserResponse,
            SocialResponse,
            ExperienceResponse,
            EducationResponse
        )
    ),
    tags((name = "Profile", description = "Developer profiles with experience and education"))
)]
pub struct ApiDoc;

pub async fn openapi_json(State(config): State<Arc<AppConfig>>) -> Json<OpenApiDoc> {
    let mut doc = ApiDoc::openapi();
    SecurityAddon::new(&config.session).modify(&mut doc);
    Json(doc)
}

pub async fn docs_ui() -> Html<&'static str> {
    Html(
        r#"
            <!doctype html>
            <html>
              <head>
                <title>Profile API docs</title>
                <meta charset="utf-8">
                <meta name="viewport" content="width=device-width, initial-scale=1">
                <script src="https://unpkg.com/@stoplight/elements/web-components.min.js"></script>
                <link rel="stylesheet" href="https://unpkg.com/@stoplight/elements/styles.min.css">
              </head>
              <body style="height: 100%; margin: 0;">
                <elements-api
                  apiDescriptionUrl="openapi.json"
                  basePath="/"
                  router="hash"
                />
              </body>
            </html>
        "#,
    )
}
