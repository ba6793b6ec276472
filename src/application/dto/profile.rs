use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::entities::profile::{Education, Experience, ProfileView, Social};

#[derive(Debug, Clone, Default)]
pub struct UpsertProfileDTO {
    pub user_id: String,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub skills: String,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AddExperienceDTO {
    pub user_id: String,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RemoveExperienceDTO {
    pub user_id: String,
    pub experience_id: String,
}

#[derive(Debug, Clone)]
pub struct AddEducationDTO {
    pub user_id: String,
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RemoveEducationDTO {
    pub user_id: String,
    pub education_id: String,
}

#[derive(Debug, Clone)]
pub struct ProfileUserDTO {
    pub id: String,
    pub name: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SocialDTO {
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ExperienceDTO {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct EducationDTO {
    pub id: String,
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ProfileDTO {
    pub id: String,
    pub user: ProfileUserDTO,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub skills: Vec<String>,
    pub social: SocialDTO,
    pub experience: Vec<ExperienceDTO>,
    pub education: Vec<EducationDTO>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Social> for SocialDTO {
    fn from(social: Social) -> Self {
        Self {
            youtube: social.youtube,
            twitter: social.twitter,
            facebook: social.facebook,
            instagram: social.instagram,
        }
    }
}

impl From<Experience> for ExperienceDTO {
    fn from(experience: Experience) -> Self {
        Self {
            id: experience.id.value.to_string(),
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

impl From<Education> for EducationDTO {
    fn from(education: Education) -> Self {
        Self {
            id: education.id.value.to_string(),
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

impl From<ProfileView> for ProfileDTO {
    fn from(view: ProfileView) -> Self {
        let ProfileView { profile, user } = view;
        Self {
            id: profile.id.value.to_string(),
            user: ProfileUserDTO {
                id: user.id.value.to_string(),
                name: user.name,
                avatar: user.avatar,
            },
            company: profile.company,
            website: profile.website,
            location: profile.location,
            status: profile.status,
            bio: profile.bio,
            github_username: profile.github_username,
            skills: profile.skills,
            social: profile.social.into(),
            experience: profile.experience.into_iter().map(ExperienceDTO::from).collect(),
            education: profile.education.into_iter().map(EducationDTO::from).collect(),
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}
