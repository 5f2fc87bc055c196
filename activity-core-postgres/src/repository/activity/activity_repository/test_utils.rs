use activity_core_db::models::{activity::ActivityModel, entity_reference::EntityReference};
use uuid::Uuid;

pub fn create_test_reference(entity_type: &str) -> EntityReference {
    EntityReference::new(entity_type, Uuid::new_v4()).unwrap()
}

pub fn create_test_activity(key: &str, trackable: &EntityReference) -> ActivityModel {
    ActivityModel::new(key, trackable.clone()).unwrap()
}
