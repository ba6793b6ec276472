use std::sync::Arc;

use tracing::info;

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::id::IdDTO;
use crate::application::dto::profile::{
    AddEducationDTO, AddExperienceDTO, ProfileDTO, RemoveEducationDTO, RemoveExperienceDTO, UpsertProfileDTO,
};
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::profile::{ProfileReader, ProfileWriter};
use crate::application::interface::gateway::session::SessionWriter;
use crate::application::interface::gateway::user::UserWriter;
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::{
    parse_skills, Education, Experience, Profile, ProfileFields, Social,
};
use crate::domain::entities::user::User;

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl From<UpsertProfileDTO> for ProfileFields {
    fn from(dto: UpsertProfileDTO) -> Self {
        Self {
            company: non_empty(dto.company),
            website: non_empty(dto.website),
            location: non_empty(dto.location),
            status: non_empty(Some(dto.status)),
            bio: non_empty(dto.bio),
            github_username: non_empty(dto.github_username),
            skills: non_empty(Some(dto.skills)).map(|raw| parse_skills(&raw)),
            social: Social {
                youtube: non_empty(dto.youtube),
                twitter: non_empty(dto.twitter),
                facebook: non_empty(dto.facebook),
                instagram: non_empty(dto.instagram),
            },
        }
    }
}

// Reads the populated profile back inside the current transaction, then commits it.
async fn commit_and_view(
    db_session: &Arc<dyn DBSession>,
    profile_reader: &Arc<dyn ProfileReader>,
    user_id: &Id<User>,
) -> AppResult<ProfileDTO> {
    let view = profile_reader
        .get_view(user_id)
        .await?
        .ok_or(AppError::NoProfile)?;
    db_session.commit().await?;
    Ok(view.into())
}

#[derive(Clone)]
pub struct GetOwnProfileInteractor {
    profile_reader: Arc<dyn ProfileReader>,
}

impl GetOwnProfileInteractor {
    pub fn new(profile_reader: Arc<dyn ProfileReader>) -> Self {
        Self { profile_reader }
    }

    pub async fn execute(&self, dto: IdDTO) -> AppResult<ProfileDTO> {
        let user_id: Id<User> = dto.id.try_into()?;
        let view = self
            .profile_reader
            .get_view(&user_id)
            .await?
            .ok_or(AppError::NoProfile)?;
        Ok(view.into())
    }
}

#[derive(Clone)]
pub struct UpsertProfileInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl UpsertProfileInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_reader: Arc<dyn ProfileReader>,
        profile_writer: Arc<dyn ProfileWriter>,
    ) -> Self {
        Self {
            db_session,
            profile_reader,
            profile_writer,
        }
    }

    pub async fn execute(&self, dto: UpsertProfileDTO) -> AppResult<ProfileDTO> {
        let user_id: Id<User> = dto.user_id.clone().try_into()?;
        let fields = ProfileFields::from(dto);

        match self.profile_reader.find_by_user_id(&user_id).await? {
            Some(mut profile) => {
                profile.apply(fields);
                self.profile_writer.update(profile).await?;
                info!("Profile updated for user {}", user_id.value);
            }
            None => {
                let profile = Profile::new(user_id.clone(), fields);
                self.profile_writer.insert(profile).await?;
                info!("Profile created for user {}", user_id.value);
            }
        }

        commit_and_view(&self.db_session, &self.profile_reader, &user_id).await
    }
}

#[derive(Clone)]
pub struct GetProfileListInteractor {
    profile_reader: Arc<dyn ProfileReader>,
}

impl GetProfileListInteractor {
    pub fn new(profile_reader: Arc<dyn ProfileReader>) -> Self {
        Self { profile_reader }
    }

    pub async fn execute(&self) -> AppResult<Vec<ProfileDTO>> {
        let views = self.profile_reader.get_all_views().await?;
        Ok(views.into_iter().map(ProfileDTO::from).collect())
    }
}

#[derive(Clone)]
pub struct GetProfileByUserInteractor {
    profile_reader: Arc<dyn ProfileReader>,
}

impl GetProfileByUserInteractor {
    pub fn new(profile_reader: Arc<dyn ProfileReader>) -> Self {
        Self { profile_reader }
    }

    pub async fn execute(&self, dto: IdDTO) -> AppResult<ProfileDTO> {
        // A malformed id cannot match any profile.
        let user_id: Id<User> = dto.id.try_into().map_err(|_| AppError::ProfileNotFound)?;
        let view = self
            .profile_reader
            .get_view(&user_id)
            .await?
            .ok_or(AppError::ProfileNotFound)?;
        Ok(view.into())
    }
}

#[derive(Clone)]
pub struct DeleteAccountInteractor {
    db_session: Arc<dyn DBSession>,
    profile_writer: Arc<dyn ProfileWriter>,
    session_writer: Arc<dyn SessionWriter>,
    user_writer: Arc<dyn UserWriter>,
}

impl DeleteAccountInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_writer: Arc<dyn ProfileWriter>,
        session_writer: Arc<dyn SessionWriter>,
        user_writer: Arc<dyn UserWriter>,
    ) -> Self {
        Self {
            db_session,
            profile_writer,
            session_writer,
            user_writer,
        }
    }

    /// Profile, sessions and user go away in one transaction or not at all.
    pub async fn execute(&self, dto: IdDTO) -> AppResult<()> {
        let user_id: Id<User> = dto.id.try_into()?;

        self.profile_writer.delete_by_user_id(&user_id).await?;
        self.session_writer.delete_by_user_id(&user_id).await?;
        self.user_writer.delete(&user_id).await?;
        self.db_session.commit().await?;

        info!("Account {} deleted", user_id.value);
        Ok(())
    }
}

#[derive(Clone)]
pub struct AddExperienceInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl AddExperienceInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_reader: Arc<dyn ProfileReader>,
        profile_writer: Arc<dyn ProfileWriter>,
    ) -> Self {
        Self {
            db_session,
            profile_reader,
            profile_writer,
        }
    }

    pub async fn execute(&self, dto: AddExperienceDTO) -> AppResult<ProfileDTO> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let mut profile = self
            .profile_reader
            .find_by_user_id(&user_id)
            .await?
            .ok_or(AppError::NoProfile)?;

        profile.add_experience(Experience::new(
            dto.title,
            dto.company,
            non_empty(dto.location),
            dto.from,
            dto.to,
            dto.current,
            non_empty(dto.description),
        ));
        self.profile_writer.update(profile).await?;

        commit_and_view(&self.db_session, &self.profile_reader, &user_id).await
    }
}

#[derive(Clone)]
pub struct RemoveExperienceInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl RemoveExperienceInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_reader: Arc<dyn ProfileReader>,
        profile_writer: Arc<dyn ProfileWriter>,
    ) -> Self {
        Self {
            db_session,
            profile_reader,
            profile_writer,
        }
    }

    pub async fn execute(&self, dto: RemoveExperienceDTO) -> AppResult<ProfileDTO> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let experience_id: Id<Experience> = dto
            .experience_id
            .try_into()
            .map_err(|_| AppError::ExperienceNotFound)?;

        let mut profile = self
            .profile_reader
            .find_by_user_id(&user_id)
            .await?
            .ok_or(AppError::NoProfile)?;

        profile
            .remove_experience(&experience_id)
            .ok_or(AppError::ExperienceNotFound)?;
        self.profile_writer.update(profile).await?;

        commit_and_view(&self.db_session, &self.profile_reader, &user_id).await
    }
}

#[derive(Clone)]
pub struct AddEducationInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl AddEducationInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_reader: Arc<dyn ProfileReader>,
        profile_writer: Arc<dyn ProfileWriter>,
    ) -> Self {
        Self {
            db_session,
            profile_reader,
            profile_writer,
        }
    }

    pub async fn execute(&self, dto: AddEducationDTO) -> AppResult<ProfileDTO> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let mut profile = self
            .profile_reader
            .find_by_user_id(&user_id)
            .await?
            .ok_or(AppError::NoProfile)?;

        profile.add_education(Education::new(
            dto.school,
            dto.degree,
            dto.field_of_study,
            dto.from,
            dto.to,
            dto.current,
            non_empty(dto.description),
        ));
        self.profile_writer.update(profile).await?;

        commit_and_view(&self.db_session, &self.profile_reader, &user_id).await
    }
}

#[derive(Clone)]
pub struct RemoveEducationInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl RemoveEducationInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_reader: Arc<dyn ProfileReader>,
        profile_writer: Arc<dyn ProfileWriter>,
    ) -> Self {
        Self {
            db_session,
            profile_reader,
            profile_writer,
        }
    }

    pub async fn execute(&self, dto: RemoveEducationDTO) -> AppResult<ProfileDTO> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let education_id: Id<Education> = dto
            .education_id
            .try_into()
            .map_err(|_| AppError::EducationNotFound)?;

        let mut profile = self
            .profile_reader
            .find_by_user_id(&user_id)
            .await?
            .ok_or(AppError::NoProfile)?;

        profile
            .remove_education(&education_id)
            .ok_or(AppError::EducationNotFound)?;
        self.profile_writer.update(profile).await?;

        commit_and_view(&self.db_session, &self.profile_reader, &user_id).await
    }
}
