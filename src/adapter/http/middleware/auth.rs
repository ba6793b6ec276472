use crate::{
    adapter::http::middleware::extractor::AuthUser,
    application::{
        app_error::{AppError, AppResult},
        dto::session::{SessionDTO, SessionValidationResult},
        interactors::session::ValidateSessionInteractor,
    },
    infra::config::AppConfig,
};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

pub async fn auth_middleware(
    State(config): State<Arc<AppConfig>>,
    interactor: ValidateSessionInteractor,
    mut request: Request,
    next: Next,
) -> AppResult<Response> {
    let config_session = &config.session;
    let session_id = extract_session_id(&request, &config_session.cookie_name)?;
    let dto = SessionDTO {
        id: session_id,
        max_lifetime: config_session.max_lifetime,
        idle_timeout: config_session.idle_timeout,
    };
    match interactor.execute(dto).await? {
        SessionValidationResult::Valid(user_id) => {
            request.extensions_mut().insert(AuthUser {
                user_id: user_id.value.to_string(),
            });
        }
        SessionValidationResult::Expired | SessionValidationResult::Invalid => {
            return Err(AppError::InvalidCredentials);
        }
    }

    Ok(next.run(request).await)
}

fn extract_session_id(request: &Request, cookie_name: &str) -> AppResult<String> {
    let cookie_header = request
        .headers()
        .get(axum::http::header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::InvalidCredentials)?;

    for cookie in cookie_header.split(';') {
        let cookie = cookie.trim();
        if let Some(value) = cookie.strip_prefix(&format!("{}=", cookie_name)) {
            return Ok(value.to_string());
        }
    }

    Err(AppError::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use rstest::rstest;

    use crate::adapter::http::middleware::auth::extract_session_id;
    use crate::application::app_error::AppError;

    fn request_with_cookie(cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/api/profile/me");
        if let Some(cookie) = cookie {
            builder = builder.header("cookie", cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[rstest]
    #[case("session_id=abc", "abc")]
    #[case("theme=dark; session_id=abc", "abc")]
    #[case("theme=dark;session_id=abc ; lang=en", "abc")]
    fn test_extract_session_id_finds_cookie(#[case] header: &str, #[case] expected: &str) {
        let request = request_with_cookie(Some(header));

        let session_id = extract_session_id(&request, "session_id").expect("cookie present");

        assert_eq!(session_id, expected);
    }

    #[rstest]
    #[case(None)]
    #[case(Some("theme=dark"))]
    #[case(Some("other_session_id=abc"))]
    fn test_extract_session_id_missing_cookie(#[case] header: Option<&str>) {
        let request = request_with_cookie(header);

        let result = extract_session_id(&request, "session_id");

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }
}
