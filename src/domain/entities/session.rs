use crate::domain::entities::{
    id::Id,
    user::User
};
use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone)]
pub struct Session {
    pub id: Id<Session>,
    pub user_id: Id<User>,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>, max_lifetime: Duration, idle_timeout: Duration) -> bool {
        now - self.created_at > max_lifetime || now - self.last_activity > idle_timeout
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use rstest::rstest;

    use crate::domain::entities::id::Id;
    use crate::domain::entities::session::Session;

    fn session(age: i64, idle: i64) -> Session {
        let now = Utc::now();
        Session {
            id: Id::generate(),
            user_id: Id::generate(),
            created_at: now - Duration::seconds(age),
            last_activity: now - Duration::seconds(idle),
        }
    }

    #[rstest]
    #[case(10, 5, false)]
    #[case(120, 5, true)]
    #[case(10, 45, true)]
    fn test_session_expiration(#[case] age: i64, #[case] idle: i64, #[case] expired: bool) {
        let session = session(age, idle);
        let result = session.is_expired(Utc::now(), Duration::seconds(60), Duration::seconds(30));
        assert_eq!(result, expired);
    }
}
