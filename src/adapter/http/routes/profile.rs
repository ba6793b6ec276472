use crate::{
    adapter::http::{
        middleware::extractor::AuthUser,
        schema::{
            message::MessageResponse,
            profile::{AddEducationRequest, AddExperienceRequest, ProfileResponse, UpsertProfileRequest},
        },
        validation::ValidJson,
    },
    application::{
        app_error::AppResult,
        dto::{
            id::IdDTO,
            profile::{AddEducationDTO, AddExperienceDTO, RemoveEducationDTO, RemoveExperienceDTO, UpsertProfileDTO},
        },
        interactors::profile::{
            AddEducationInteractor, AddExperienceInteractor, DeleteAccountInteractor, GetOwnProfileInteractor,
            GetProfileByUserInteractor, GetProfileListInteractor, RemoveEducationInteractor,
            RemoveExperienceInteractor, UpsertProfileInteractor,
        },
    },
};
#[allow(unused_imports)]
use crate::adapter::http::app_error_impl::{ErrorResponse, ValidationErrorResponse};
use axum::{extract::Path, http::StatusCode, response::IntoResponse, Json};
#[allow(unused_imports)]
use serde_json::json;

#[utoipa::path(
    get,
    path = "/api/profile/me",
    tag = "Profile",
    responses(
        (status = 200, description = "Profile of the current user", body = ProfileResponse),
        (
            status = 400,
            description = "Current user has no profile",
            body = ErrorResponse,
            example = json!({ "msg": "This user does not have a profile" })
        ),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
            example = json!({ "msg": "Server error" })
        )
    ),
    security(("cookieAuth" = []))
)]
pub async fn get_own_profile(
    auth_user: AuthUser,
    interactor: GetOwnProfileInteractor,
) -> AppResult<impl IntoResponse> {
    let dto = IdDTO {
        id: auth_user.user_id,
    };
    let profile = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(profile))))
}

#[utoipa::path(
    post,
    path = "/api/profile",
    tag = "Profile",
    request_body = UpsertProfileRequest,
    responses(
        (status = 200, description = "Profile created or updated", body = ProfileResponse),
        (
            status = 400,
            description = "Validation error",
            body = ValidationErrorResponse,
            example = json!({ "errors": [{ "msg": "Status is required", "param": "status", "location": "body" }] })
        ),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("cookieAuth" = []))
)]
pub async fn upsert_profile(
    auth_user: AuthUser,
    interactor: UpsertProfileInteractor,
    ValidJson(payload): ValidJson<UpsertProfileRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = UpsertProfileDTO {
        user_id: auth_user.user_id,
        company: payload.company,
        website: payload.website,
        location: payload.location,
        status: payload.status.unwrap_or_default(),
        skills: payload.skills.unwrap_or_default(),
        bio: payload.bio,
        github_username: payload.github_username,
        youtube: payload.youtube,
        twitter: payload.twitter,
        facebook: payload.facebook,
        instagram: payload.instagram,
    };
    let profile = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(profile))))
}

#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "Profile",
    responses(
        (status = 200, description = "All profiles", body = Vec<ProfileResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_profiles(interactor: GetProfileListInteractor) -> AppResult<impl IntoResponse> {
    let profiles = interactor.execute().await?;
    let response: Vec<ProfileResponse> = profiles.into_iter().map(ProfileResponse::from).collect();
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/profile/user/{user_id}",
    tag = "Profile",
    params(("user_id" = String, Path, description = "Id of the profile owner")),
    responses(
        (status = 200, description = "Profile of the given user", body = ProfileResponse),
        (
            status = 400,
            description = "Profile not found",
            body = ErrorResponse,
            example = json!({ "msg": "Profile not found" })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_profile_by_user(
    interactor: GetProfileByUserInteractor,
    Path(user_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let profile = interactor.execute(IdDTO { id: user_id }).await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(profile))))
}

#[utoipa::path(
    delete,
    path = "/api/profile",
    tag = "Profile",
    responses(
        (
            status = 200,
            description = "Profile, sessions and user removed",
            body = MessageResponse,
            example = json!({ "msg": "User deleted" })
        ),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("cookieAuth" = []))
)]
pub async fn delete_account(
    auth_user: AuthUser,
    interactor: DeleteAccountInteractor,
) -> AppResult<impl IntoResponse> {
    interactor
        .execute(IdDTO {
            id: auth_user.user_id,
        })
        .await?;
    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            msg: "User deleted".to_string(),
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/api/profile/experience",
    tag = "Profile",
    request_body = AddExperienceRequest,
    responses(
        (status = 200, description = "Experience added to the front of the list", body = ProfileResponse),
        (status = 400, description = "Validation error or no profile", body = ValidationErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("cookieAuth" = []))
)]
pub async fn add_experience(
    auth_user: AuthUser,
    interactor: AddExperienceInteractor,
    ValidJson(payload): ValidJson<AddExperienceRequest>,
) -> AppResult<impl IntoResponse> {
    let (from, to) = payload.period()?;
    let dto = AddExperienceDTO {
        user_id: auth_user.user_id,
        title: payload.title.unwrap_or_default(),
        company: payload.company.unwrap_or_default(),
        location: payload.location,
        from,
        to,
        current: payload.current,
        description: payload.description,
    };
    let profile = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(profile))))
}

#[utoipa::path(
    delete,
    path = "/api/profile/experience/{exp_id}",
    tag = "Profile",
    params(("exp_id" = String, Path, description = "Id of the experience record")),
    responses(
        (status = 200, description = "Experience removed", body = ProfileResponse),
        (
            status = 400,
            description = "Experience not found",
            body = ErrorResponse,
            example = json!({ "msg": "Experience not found" })
        ),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("cookieAuth" = []))
)]
pub async fn remove_experience(
    auth_user: AuthUser,
    interactor: RemoveExperienceInteractor,
    Path(exp_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let dto = RemoveExperienceDTO {
        user_id: auth_user.user_id,
        experience_id: exp_id,
    };
    let profile = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(profile))))
}

#[utoipa::path(
    put,
    path = "/api/profile/education",
    tag = "Profile",
    request_body = AddEducationRequest,
    responses(
        (status = 200, description = "Education added to the front of the list", body = ProfileResponse),
        (status = 400, description = "Validation error or no profile", body = ValidationErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("cookieAuth" = []))
)]
pub async fn add_education(
    auth_user: AuthUser,
    interactor: AddEducationInteractor,
    ValidJson(payload): ValidJson<AddEducationRequest>,
) -> AppResult<impl IntoResponse> {
    let (from, to) = payload.period()?;
    let dto = AddEducationDTO {
        user_id: auth_user.user_id,
        school: payload.school.unwrap_or_default(),
        degree: payload.degree.unwrap_or_default(),
        field_of_study: payload.field_of_study.unwrap_or_default(),
        from,
        to,
        current: payload.current,
        description: payload.description,
    };
    let profile = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(profile))))
}

#[utoipa::path(
    delete,
    path = "/api/profile/education/{edu_id}",
    tag = "Profile",
    params(("edu_id" = String, Path, description = "Id of the education record")),
    responses(
        (status = 200, description = "Education removed", body = ProfileResponse),
        (
            status = 400,
            description = "Education not found",
            body = ErrorResponse,
            example = json!({ "msg": "Education not found" })
        ),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("cookieAuth" = []))
)]
pub async fn remove_education(
    auth_user: AuthUser,
    interactor: RemoveEducationInteractor,
    Path(edu_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let dto = RemoveEducationDTO {
        user_id: auth_user.user_id,
        education_id: edu_id,
    };
    let profile = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(profile))))
}
