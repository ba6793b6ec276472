use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    id::Id,
    user::User
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Social {
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub id: Id<Experience>,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

impl Experience {
    pub fn new(
        title: String,
        company: String,
        location: Option<String>,
        from: NaiveDate,
        to: Option<NaiveDate>,
        current: bool,
        description: Option<String>,
    ) -> Self {
        Self {
            id: Id::generate(),
            title,
            company,
            location,
            from,
            to,
            current,
            description,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub id: Id<Education>,
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

impl Education {
    pub fn new(
        school: String,
        degree: String,
        field_of_study: String,
        from: NaiveDate,
        to: Option<NaiveDate>,
        current: bool,
        description: Option<String>,
    ) -> Self {
        Self {
            id: Id::generate(),
            school,
            degree,
            field_of_study,
            from,
            to,
            current,
            description,
        }
    }
}

/// Sparse set of top-level profile fields. `None` means "leave as is".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileFields {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub skills: Option<Vec<String>>,
    pub social: Social,
}

#[derive(Debug, Clone)]
pub struct Profile {
    pub id: Id<Profile>,
    pub user_id: Id<User>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub skills: Vec<String>,
    pub social: Social,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(user_id: Id<User>, fields: ProfileFields) -> Self {
        let now = Utc::now();
        Self {
            id: Id::generate(),
            user_id,
            company: fields.company,
            website: fields.website,
            location: fields.location,
            status: fields.status,
            bio: fields.bio,
            github_username: fields.github_username,
            skills: fields.skills.unwrap_or_default(),
            social: fields.social,
            experience: Vec::new(),
            education: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Social links are replaced as a whole, every other field only when present.
    pub fn apply(&mut self, fields: ProfileFields) {
        fn set(target: &mut Option<String>, value: Option<String>) {
            if value.is_some() {
                *target = value;
            }
        }

        set(&mut self.company, fields.company);
        set(&mut self.website, fields.website);
        set(&mut self.location, fields.location);
        set(&mut self.status, fields.status);
        set(&mut self.bio, fields.bio);
        set(&mut self.github_username, fields.github_username);
        if let Some(skills) = fields.skills {
            self.skills = skills;
        }
        self.social = fields.social;
        self.touch();
    }

    pub fn add_experience(&mut self, experience: Experience) {
        self.experience.insert(0, experience);
        self.touch();
    }

    pub fn remove_experience(&mut self, experience_id: &Id<Experience>) -> Option<Experience> {
        let index = self.experience.iter().position(|e| &e.id == experience_id)?;
        self.touch();
        Some(self.experience.remove(index))
    }

    pub fn add_education(&mut self, education: Education) {
        self.education.insert(0, education);
        self.touch();
    }

    pub fn remove_education(&mut self, education_id: &Id<Education>) -> Option<Education> {
        let index = self.education.iter().position(|e| &e.id == education_id)?;
        self.touch();
        Some(self.education.remove(index))
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// A profile together with the public part of its owner's account.
#[derive(Debug, Clone)]
pub struct ProfileView {
    pub profile: Profile,
    pub user: User,
}

pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',').map(|skill| skill.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rstest::{fixture, rstest};

    use crate::domain::entities::id::Id;
    use crate::domain::entities::profile::{
        parse_skills, Education, Experience, Profile, ProfileFields, Social,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn experience(title: &str) -> Experience {
        Experience::new(
            title.to_string(),
            "Acme".to_string(),
            None,
            date(2020, 1, 1),
            None,
            true,
            None,
        )
    }

    fn education(school: &str) -> Education {
        Education::new(
            school.to_string(),
            "BSc".to_string(),
            "Computer Science".to_string(),
            date(2012, 9, 1),
            Some(date(2016, 6, 30)),
            false,
            None,
        )
    }

    #[fixture]
    fn fields() -> ProfileFields {
        ProfileFields {
            company: Some("Acme".to_string()),
            status: Some("Developer".to_string()),
            skills: Some(vec!["rust".to_string(), "sql".to_string()]),
            social: Social {
                twitter: Some("https://twitter.com/acme".to_string()),
                ..Social::default()
            },
            ..ProfileFields::default()
        }
    }

    #[rstest]
    #[case("a, b , c", vec!["a", "b", "c"])]
    #[case("rust", vec!["rust"])]
    #[case(" html ,css,  javascript ", vec!["html", "css", "javascript"])]
    fn test_parse_skills(#[case] raw: &str, #[case] expected: Vec<&str>) {
        assert_eq!(parse_skills(raw), expected);
    }

    #[rstest]
    fn test_new_profile_takes_fields(fields: ProfileFields) {
        let profile = Profile::new(Id::generate(), fields);

        assert_eq!(profile.company.as_deref(), Some("Acme"));
        assert_eq!(profile.status.as_deref(), Some("Developer"));
        assert_eq!(profile.skills, vec!["rust", "sql"]);
        assert!(profile.website.is_none());
        assert!(profile.experience.is_empty());
        assert!(profile.education.is_empty());
    }

    #[rstest]
    fn test_apply_keeps_absent_fields(fields: ProfileFields) {
        let mut profile = Profile::new(Id::generate(), fields);
        profile.bio = Some("Old bio".to_string());

        profile.apply(ProfileFields {
            status: Some("Lead".to_string()),
            ..ProfileFields::default()
        });

        assert_eq!(profile.status.as_deref(), Some("Lead"));
        assert_eq!(profile.company.as_deref(), Some("Acme"));
        assert_eq!(profile.bio.as_deref(), Some("Old bio"));
        assert_eq!(profile.skills, vec!["rust", "sql"]);
        assert_eq!(profile.social, Social::default());
    }

    #[rstest]
    fn test_apply_twice_is_stable(fields: ProfileFields) {
        let mut profile = Profile::new(Id::generate(), ProfileFields::default());

        profile.apply(fields.clone());
        let first = (profile.company.clone(), profile.status.clone(), profile.skills.clone(), profile.social.clone());
        profile.apply(fields);
        let second = (profile.company.clone(), profile.status.clone(), profile.skills.clone(), profile.social.clone());

        assert_eq!(first, second);
    }

    #[rstest]
    fn test_add_experience_prepends() {
        let mut profile = Profile::new(Id::generate(), ProfileFields::default());
        profile.add_experience(experience("Junior"));
        profile.add_experience(experience("Senior"));

        let titles: Vec<&str> = profile.experience.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Senior", "Junior"]);
    }

    #[rstest]
    fn test_remove_experience_by_id() {
        let mut profile = Profile::new(Id::generate(), ProfileFields::default());
        let first = experience("First");
        let first_id = first.id.clone();
        profile.add_experience(first);
        profile.add_experience(experience("Second"));

        let removed = profile.remove_experience(&first_id).unwrap();

        assert_eq!(removed.title, "First");
        assert_eq!(profile.experience.len(), 1);
        assert_eq!(profile.experience[0].title, "Second");
    }

    #[rstest]
    fn test_remove_unknown_experience_is_none() {
        let mut profile = Profile::new(Id::generate(), ProfileFields::default());
        profile.add_experience(experience("Only"));

        assert!(profile.remove_experience(&Id::generate()).is_none());
        assert_eq!(profile.experience.len(), 1);
    }

    #[rstest]
    fn test_education_prepend_and_remove() {
        let mut profile = Profile::new(Id::generate(), ProfileFields::default());
        let school = education("MIT");
        let school_id = school.id.clone();
        profile.add_education(school);
        profile.add_education(education("Stanford"));

        assert_eq!(profile.education[0].school, "Stanford");
        assert!(profile.remove_education(&Id::generate()).is_none());
        assert_eq!(profile.remove_education(&school_id).unwrap().school, "MIT");
        assert_eq!(profile.education.len(), 1);
    }
}
