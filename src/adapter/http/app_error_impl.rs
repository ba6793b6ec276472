use crate::application::app_error::AppError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use validator::ValidationErrors;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub msg: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FieldError {
    pub msg: String,
    pub param: String,
    pub location: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldError>,
}

// Request fields whose JSON name differs from the Rust field name.
const WIRE_NAMES: &[(&str, &str)] = &[("field_of_study", "fieldofstudy"), ("github_username", "githubusername")];

fn wire_param(field: &str) -> &str {
    WIRE_NAMES
        .iter()
        .find(|(rust_name, _)| *rust_name == field)
        .map_or(field, |(_, wire_name)| *wire_name)
}

impl From<&ValidationErrors> for ValidationErrorResponse {
    fn from(errors: &ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(param, field_errors)| {
                field_errors.iter().map(move |error| FieldError {
                    msg: error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {}", param)),
                    param: wire_param(&param).to_string(),
                    location: "body".to_string(),
                })
            })
            .collect();
        // HashMap iteration order is unstable
        fields.sort_by(|a, b| a.param.cmp(&b.param));

        Self { errors: fields }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(errors) => {
                let body = ValidationErrorResponse::from(errors);
                return (StatusCode::BAD_REQUEST, Json(body)).into_response();
            }
            AppError::InvalidId(_)
            | AppError::InvalidJson(_)
            | AppError::NoProfile
            | AppError::ProfileNotFound
            | AppError::ExperienceNotFound
            | AppError::EducationNotFound => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let msg = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "Request failed");
            "Server error".to_string()
        } else {
            match &self {
                AppError::InvalidCredentials => "No valid session, authorization denied".to_string(),
                other => other.to_string(),
            }
        };

        (status, Json(ErrorResponse { msg })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use http_body_util::BodyExt;
    use rstest::rstest;
    use serde_json::Value;
    use validator::{ValidationError, ValidationErrors};

    use crate::application::app_error::AppError;

    async fn into_parts(error: AppError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[rstest]
    #[case(AppError::NoProfile, StatusCode::BAD_REQUEST, "This user does not have a profile")]
    #[case(AppError::ProfileNotFound, StatusCode::BAD_REQUEST, "Profile not found")]
    #[case(AppError::ExperienceNotFound, StatusCode::BAD_REQUEST, "Experience not found")]
    #[case(AppError::EducationNotFound, StatusCode::BAD_REQUEST, "Education not found")]
    #[case(AppError::DatabaseError(sqlx::Error::RowNotFound), StatusCode::INTERNAL_SERVER_ERROR, "Server error")]
    #[tokio::test]
    async fn test_error_status_and_message(#[case] error: AppError, #[case] status: StatusCode, #[case] msg: &str) {
        let (actual_status, body) = into_parts(error).await;

        assert_eq!(actual_status, status);
        assert_eq!(body["msg"], msg);
    }

    #[tokio::test]
    async fn test_invalid_credentials_is_unauthorized() {
        let (status, body) = into_parts(AppError::InvalidCredentials).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body["msg"].is_string());
    }

    #[tokio::test]
    async fn test_validation_errors_are_listed_per_field() {
        let mut errors = ValidationErrors::new();
        errors.add("status", ValidationError::new("required").with_message("Status is required".into()));
        errors.add("skills", ValidationError::new("required").with_message("Skills are required".into()));

        let (status, body) = into_parts(AppError::Validation(errors)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let list = body["errors"].as_array().expect("errors array");
        assert_eq!(list.len(), 2);
        assert_eq!(list[0]["param"], "skills");
        assert_eq!(list[0]["msg"], "Skills are required");
        assert_eq!(list[1]["param"], "status");
        assert_eq!(list[1]["location"], "body");
    }

    #[tokio::test]
    async fn test_validation_param_uses_json_field_name() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "field_of_study",
            ValidationError::new("required").with_message("Field of Study is required".into()),
        );
        errors.add(
            "github_username",
            ValidationError::new("length").with_message("GitHub username is too long".into()),
        );

        let (_, body) = into_parts(AppError::Validation(errors)).await;

        let list = body["errors"].as_array().expect("errors array");
        assert_eq!(list[0]["param"], "fieldofstudy");
        assert_eq!(list[1]["param"], "githubusername");
    }
}
