use crate::application::app_error::AppError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::marker::PhantomData;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Id<T> {
    pub value: Uuid,
    _marker: PhantomData<T>
}

impl<T> Id<T> {
    pub fn new(value: Uuid) -> Self {
        Self {
            value,
            _marker: PhantomData
        }
    }

    pub fn generate() -> Id<T> {
        Id::new(Uuid::now_v7())
    }
}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl <T> TryFrom<String> for Id<T> {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let uuid = Uuid::from_str(&value)
            .map_err(|e| AppError::InvalidId(format!("Invalid UUID: {}", e)))?;
        Ok(Id::new(uuid))
    }
}

// Embedded records are persisted inside JSONB documents, so ids serialize as bare UUIDs.
impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Uuid::deserialize(deserializer).map(Id::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::entities::id::Id;
    use uuid::Uuid;

    #[derive(Debug, Clone)]
    struct TestEntity;

    #[test]
    fn test_id_new() {
        let uuid = Uuid::now_v7();
        let id: Id<TestEntity> = Id::new(uuid);
        assert_eq!(id.value, uuid)
    }

    #[test]
    fn test_id_generate() {
        let id1: Id<TestEntity> = Id::generate();
        let id2: Id<TestEntity> = Id::generate();
        assert_ne!(id1.value, id2.value);
    }

    #[test]
    fn test_id_try_from_valid_uuid() {
        let uuid = Uuid::now_v7();
        let id: Id<TestEntity> = uuid.to_string().try_into().unwrap();
        assert_eq!(id.value, uuid);
    }

    #[test]
    fn test_id_try_from_invalid_uuid() {
        let result: Result<Id<TestEntity>, _> = "invalid".to_owned().try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_id_equality_ignores_marker() {
        let uuid = Uuid::now_v7();
        let a: Id<TestEntity> = Id::new(uuid);
        let b: Id<TestEntity> = Id::new(uuid);
        assert_eq!(a, b);
        assert_ne!(a, Id::generate());
    }

    #[test]
    fn test_id_serializes_as_plain_uuid() {
        let uuid = Uuid::now_v7();
        let id: Id<TestEntity> = Id::new(uuid);

        let json = serde_json::to_value(&id).unwrap();
        assert_eq!(json, serde_json::json!(uuid.to_string()));

        let back: Id<TestEntity> = serde_json::from_value(json).unwrap();
        assert_eq!(back, id);
    }
}
