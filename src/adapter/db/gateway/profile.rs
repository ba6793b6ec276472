use async_trait::async_trait;
use futures::FutureExt;
use sqlx::Row;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use uuid::Uuid;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::profile::{ProfileReader, ProfileWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::{Education, Experience, Profile, ProfileView, Social};
use crate::domain::entities::user::User;

#[derive(Clone)]
pub struct ProfileGateway {
    session: SqlxSession,
}

impl ProfileGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }

    fn get_profile(row: &PgRow) -> AppResult<Profile> {
        let social: Json<Social> = row.try_get("social")?;
        let experience: Json<Vec<Experience>> = row.try_get("experience")?;
        let education: Json<Vec<Education>> = row.try_get("education")?;

        Ok(Profile {
            id: Id::new(row.try_get("id")?),
            user_id: Id::new(row.try_get("user_id")?),
            company: row.try_get("company")?,
            website: row.try_get("website")?,
            location: row.try_get("location")?,
            status: row.try_get("status")?,
            bio: row.try_get("bio")?,
            github_username: row.try_get("github_username")?,
            skills: row.try_get("skills")?,
            social: social.0,
            experience: experience.0,
            education: education.0,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    fn get_profile_view(row: &PgRow) -> AppResult<ProfileView> {
        let profile = Self::get_profile(row)?;
        let user = User {
            id: profile.user_id.clone(),
            name: row.try_get("user_name")?,
            avatar: row.try_get("user_avatar")?,
        };

        Ok(ProfileView { profile, user })
    }
}

#[async_trait]
impl ProfileWriter for ProfileGateway {
    async fn insert(&self, profile: Profile) -> AppResult<Id<Profile>> {
        self.session
            .with_tx(|tx| {
                let profile = profile.clone();
                async move {
                    let row = sqlx::query(
                        r#"
                            INSERT INTO profiles
                                (
                                    id,
                                    user_id,
                                    company,
                                    website,
                                    location,
                                    status,
                                    bio,
                                    github_username,
                                    skills,
                                    social,
                                    experience,
                                    education,
                                    created_at,
                                    updated_at
                                )
                            VALUES
                                ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
                            ON CONFLICT (user_id) DO UPDATE
                            SET
                                company = COALESCE(EXCLUDED.company, profiles.company),
                                website = COALESCE(EXCLUDED.website, profiles.website),
                                location = COALESCE(EXCLUDED.location, profiles.location),
                                status = COALESCE(EXCLUDED.status, profiles.status),
                                bio = COALESCE(EXCLUDED.bio, profiles.bio),
                                github_username = COALESCE(EXCLUDED.github_username, profiles.github_username),
                                skills = EXCLUDED.skills,
                                social = EXCLUDED.social,
                                updated_at = EXCLUDED.updated_at
                            RETURNING id
                        "#,
                    )
                    .bind(profile.id.value)
                    .bind(profile.user_id.value)
                    .bind(profile.company)
                    .bind(profile.website)
                    .bind(profile.location)
                    .bind(profile.status)
                    .bind(profile.bio)
                    .bind(profile.github_username)
                    .bind(profile.skills)
                    .bind(Json(profile.social))
                    .bind(Json(profile.experience))
                    .bind(Json(profile.education))
                    .bind(profile.created_at)
                    .bind(profile.updated_at)
                    .fetch_one(tx.as_mut())
                    .await?;

                    let id: Uuid = row.try_get("id")?;
                    Ok(Id::new(id))
                }
                .boxed()
            })
            .await
    }

    async fn update(&self, profile: Profile) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let profile = profile.clone();
                async move {
                    sqlx::query(
                        r#"
                            UPDATE profiles
                            SET
                                company = $2,
                                website = $3,
                                location = $4,
                                status = $5,
                                bio = $6,
                                github_username = $7,
                                skills = $8,
                                social = $9,
                                experience = $10,
                                education = $11,
                                updated_at = $12
                            WHERE
                                user_id = $1
                        "#,
                    )
                    .bind(profile.user_id.value)
                    .bind(profile.company)
                    .bind(profile.website)
                    .bind(profile.location)
                    .bind(profile.status)
                    .bind(profile.bio)
                    .bind(profile.github_username)
                    .bind(profile.skills)
                    .bind(Json(profile.social))
                    .bind(Json(profile.experience))
                    .bind(Json(profile.education))
                    .bind(profile.updated_at)
                    .execute(tx.as_mut())
                    .await?;
                    Ok(())
                }
                .boxed()
            })
            .await
    }

    async fn delete_by_user_id(&self, user_id: &Id<User>) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                async move {
                    sqlx::query("DELETE FROM profiles WHERE user_id = $1")
                        .bind(user_id)
                        .execute(tx.as_mut())
                        .await?;
                    Ok(())
                }
                .boxed()
            })
            .await
    }
}

#[async_trait]
impl ProfileReader for ProfileGateway {
    async fn find_by_user_id(&self, user_id: &Id<User>) -> AppResult<Option<Profile>> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT
                                id, user_id, company, website, location, status, bio, github_username,
                                skills, social, experience, education, created_at, updated_at
                            FROM
                                profiles
                            WHERE
                                user_id = $1
                        "#,
                    )
                    .bind(user_id)
                    .fetch_optional(tx.as_mut())
                    .await?;

                    result.as_ref().map(Self::get_profile).transpose()
                }
                .boxed()
            })
            .await
    }

    async fn get_view(&self, user_id: &Id<User>) -> AppResult<Option<ProfileView>> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT
                                p.id, p.user_id, p.company, p.website, p.location, p.status, p.bio,
                                p.github_username, p.skills, p.social, p.experience, p.education,
                                p.created_at, p.updated_at,
                                u.name AS user_name,
                                u.avatar AS user_avatar
                            FROM
                                profiles p
                                JOIN users u ON u.id = p.user_id
                            WHERE
                                p.user_id = $1
                        "#,
                    )
                    .bind(user_id)
                    .fetch_optional(tx.as_mut())
                    .await?;

                    result.as_ref().map(Self::get_profile_view).transpose()
                }
                .boxed()
            })
            .await
    }

    async fn get_all_views(&self) -> AppResult<Vec<ProfileView>> {
        self.session
            .with_tx(|tx| {
                async move {
                    let rows = sqlx::query(
                        r#"
                            SELECT
                                p.id, p.user_id, p.company, p.website, p.location, p.status, p.bio,
                                p.github_username, p.skills, p.social, p.experience, p.education,
                                p.created_at, p.updated_at,
                                u.name AS user_name,
                                u.avatar AS user_avatar
                            FROM
                                profiles p
                                JOIN users u ON u.id = p.user_id
                            ORDER BY
                                p.created_at
                        "#,
                    )
                    .fetch_all(tx.as_mut())
                    .await?;

                    rows.iter().map(Self::get_profile_view).collect()
                }
                .boxed()
            })
            .await
    }
}
