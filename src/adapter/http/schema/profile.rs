use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::profile::{EducationDTO, ExperienceDTO, ProfileDTO, ProfileUserDTO, SocialDTO};

const DATE_FORMAT: &str = "%Y-%m-%d";
const FROM_REQUIRED: &str = "From date is required";

// Blank values are reported by the `required`/`length` rules, not here.
fn valid_date(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok() {
        return Ok(());
    }
    Err(ValidationError::new("date"))
}

fn date_error(param: &'static str, message: &'static str) -> AppError {
    let mut errors = ValidationErrors::new();
    errors.add(param, ValidationError::new("date").with_message(message.into()));
    AppError::Validation(errors)
}

fn parse_date(param: &'static str, raw: Option<&str>) -> AppResult<Option<NaiveDate>> {
    match raw {
        None | Some("") => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Some)
            .map_err(|_| date_error(param, "Date must be formatted as YYYY-MM-DD")),
    }
}

fn parse_period(from: Option<&str>, to: Option<&str>) -> AppResult<(NaiveDate, Option<NaiveDate>)> {
    let from = parse_date("from", from)?.ok_or_else(|| date_error("from", FROM_REQUIRED))?;
    Ok((from, parse_date("to", to)?))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "company": "Acme",
    "website": "https://acme.dev",
    "location": "Berlin",
    "status": "Developer",
    "skills": "rust, sql, docker",
    "bio": "Backend engineer",
    "githubusername": "octocat",
    "twitter": "https://twitter.com/octocat"
}))]
pub struct UpsertProfileRequest {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    #[validate(
        required(message = "Status is required"),
        length(min = 1, message = "Status is required")
    )]
    #[schema(example = "Developer")]
    pub status: Option<String>,
    #[validate(
        required(message = "Skills are required"),
        length(min = 1, message = "Skills are required")
    )]
    #[schema(example = "rust, sql, docker")]
    pub skills: Option<String>,
    pub bio: Option<String>,
    #[serde(rename = "githubusername")]
    pub github_username: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "title": "Senior Developer",
    "company": "Acme",
    "location": "Berlin",
    "from": "2020-01-01",
    "current": true
}))]
pub struct AddExperienceRequest {
    #[validate(
        required(message = "Title is required"),
        length(min = 1, message = "Title is required")
    )]
    pub title: Option<String>,
    #[validate(
        required(message = "Company is required"),
        length(min = 1, message = "Company is required")
    )]
    pub company: Option<String>,
    pub location: Option<String>,
    #[schema(example = "2020-01-01")]
    #[validate(
        required(message = "From date is required"),
        length(min = 1, message = "From date is required"),
        custom(function = "valid_date", message = "Date must be formatted as YYYY-MM-DD")
    )]
    pub from: Option<String>,
    #[validate(custom(function = "valid_date", message = "Date must be formatted as YYYY-MM-DD"))]
    pub to: Option<String>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "school": "TU Berlin",
    "degree": "MSc",
    "fieldofstudy": "Computer Science",
    "from": "2014-10-01",
    "to": "2016-09-30"
}))]
pub struct AddEducationRequest {
    #[validate(
        required(message = "School is required"),
        length(min = 1, message = "School is required")
    )]
    pub school: Option<String>,
    #[validate(
        required(message = "Degree is required"),
        length(min = 1, message = "Degree is required")
    )]
    pub degree: Option<String>,
    #[serde(rename = "fieldofstudy")]
    #[validate(
        required(message = "Field of Study is required"),
        length(min = 1, message = "Field of Study is required")
    )]
    pub field_of_study: Option<String>,
    #[schema(example = "2020-01-01")]
    #[validate(
        required(message = "From date is required"),
        length(min = 1, message = "From date is required"),
        custom(function = "valid_date", message = "Date must be formatted as YYYY-MM-DD")
    )]
    pub from: Option<String>,
    #[validate(custom(function = "valid_date", message = "Date must be formatted as YYYY-MM-DD"))]
    pub to: Option<String>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

impl AddExperienceRequest {
    /// Parsed `from` and `to` of a validated request.
    pub fn period(&self) -> AppResult<(NaiveDate, Option<NaiveDate>)> {
        parse_period(self.from.as_deref(), self.to.as_deref())
    }
}

impl AddEducationRequest {
    pub fn period(&self) -> AppResult<(NaiveDate, Option<NaiveDate>)> {
        parse_period(self.from.as_deref(), self.to.as_deref())
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileUserResponse {
    #[schema(example = "019c47ec-183d-744e-b11d-cd409015bf14")]
    pub id: String,
    #[schema(example = "Jane Doe")]
    pub name: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SocialResponse {
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ExperienceResponse {
    #[schema(example = "019c47ec-183d-744e-b11d-cd409015bf20")]
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EducationResponse {
    #[schema(example = "019c47ec-183d-744e-b11d-cd409015bf21")]
    pub id: String,
    pub school: String,
    pub degree: String,
    #[serde(rename = "fieldofstudy")]
    pub field_of_study: String,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[schema(example = json!({
    "id": "019c47ec-183d-744e-b11d-cd409015bf13",
    "user": {
        "id": "019c47ec-183d-744e-b11d-cd409015bf14",
        "name": "Jane Doe",
        "avatar": null
    },
    "company": "Acme",
    "website": null,
    "location": "Berlin",
    "status": "Developer",
    "bio": null,
    "githubusername": "octocat",
    "skills": ["rust", "sql"],
    "social": { "youtube": null, "twitter": null, "facebook": null, "instagram": null },
    "experience": [],
    "education": [],
    "created_at": "2026-01-01T00:00:00Z",
    "updated_at": "2026-01-01T00:00:00Z"
}))]
pub struct ProfileResponse {
    pub id: String,
    pub user: ProfileUserResponse,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub bio: Option<String>,
    #[serde(rename = "githubusername")]
    pub github_username: Option<String>,
    pub skills: Vec<String>,
    pub social: SocialResponse,
    pub experience: Vec<ExperienceResponse>,
    pub education: Vec<EducationResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProfileUserDTO> for ProfileUserResponse {
    fn from(user: ProfileUserDTO) -> Self {
        Self {
            id: user.id,
            name: user.name,
            avatar: user.avatar,
        }
    }
}

impl From<SocialDTO> for SocialResponse {
    fn from(social: SocialDTO) -> Self {
        Self {
            youtube: social.youtube,
            twitter: social.twitter,
            facebook: social.facebook,
            instagram: social.instagram,
        }
    }
}

impl From<ExperienceDTO> for ExperienceResponse {
    fn from(experience: ExperienceDTO) -> Self {
        Self {
            id: experience.id,
            title: experience.title,
            company: experience.company,
            location: experience.location,
            from: experience.from,
            to: experience.to,
            current: experience.current,
            description: experience.description,
        }
    }
}

impl From<EducationDTO> for EducationResponse {
    fn from(education: EducationDTO) -> Self {
        Self {
            id: education.id,
            school: education.school,
            degree: education.degree,
            field_of_study: education.field_of_study,
            from: education.from,
            to: education.to,
            current: education.current,
            description: education.description,
        }
    }
}

impl From<ProfileDTO> for ProfileResponse {
    fn from(profile: ProfileDTO) -> Self {
        Self {
            id: profile.id,
            user: profile.user.into(),
            company: profile.company,
            website: profile.website,
            location: profile.location,
            status: profile.status,
            bio: profile.bio,
            github_username: profile.github_username,
            skills: profile.skills,
            social: profile.social.into(),
            experience: profile.experience.into_iter().map(ExperienceResponse::from).collect(),
            education: profile.education.into_iter().map(EducationResponse::from).collect(),
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}
