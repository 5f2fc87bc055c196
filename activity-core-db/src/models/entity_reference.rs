use activity_core_api::{ActivityError, ActivityResult};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::trackable::Trackable;

/// Maximum length of an entity type name stored in a reference
pub const ENTITY_TYPE_MAX_LEN: usize = 50;

/// # Documentation
/// Polymorphic (type, id) pointer to an entity.
/// Used for the trackable, owner and recipient of an activity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityReference {
    /// Type name of the referenced entity, e.g. "article"
    pub entity_type: HeaplessString<ENTITY_TYPE_MAX_LEN>,

    /// Identifier of the referenced entity
    pub entity_id: Uuid,
}

impl EntityReference {
    pub fn new(entity_type: &str, entity_id: Uuid) -> ActivityResult<Self> {
        let entity_type = HeaplessString::try_from(entity_type).map_err(|_| {
            ActivityError::ValidationError(format!(
                "Entity type '{entity_type}' is too long (max {ENTITY_TYPE_MAX_LEN} chars)"
            ))
        })?;
        Ok(Self {
            entity_type,
            entity_id,
        })
    }

    /// Builds the reference pointing at a trackable entity.
    pub fn of<T: Trackable>(entity: &T) -> ActivityResult<Self> {
        Self::new(T::trackable_type(), entity.get_id())
    }

    pub fn entity_type(&self) -> &str {
        self.entity_type.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_reference() {
        let id = Uuid::new_v4();
        let reference = EntityReference::new("article", id).unwrap();
        assert_eq!(reference.entity_type(), "article");
        assert_eq!(reference.entity_id, id);
    }

    #[test]
    fn test_type_name_too_long() {
        let name = "x".repeat(ENTITY_TYPE_MAX_LEN + 1);
        let result = EntityReference::new(&name, Uuid::new_v4());
        assert!(matches!(result, Err(ActivityError::ValidationError(_))));
    }
}
