use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid id: {0}")]
    InvalidId(String),
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("Invalid request body: {0}")]
    InvalidJson(String),
    #[error("This user does not have a profile")]
    NoProfile,
    #[error("Profile not found")]
    ProfileNotFound,
    #[error("Experience not found")]
    ExperienceNotFound,
    #[error("Education not found")]
    EducationNotFound,
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

pub type AppResult<T> = Result<T, AppError>;
