use activity_core_api::{ActivityError, ActivityResult};
use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::models::entity_reference::EntityReference;
use crate::models::identifiable::Identifiable;

/// Maximum length of an activity key
pub const ACTIVITY_KEY_MAX_LEN: usize = 100;

/// Free-form parameters attached to an activity
pub type ActivityParameters = Map<String, Value>;

/// # Documentation
/// One recorded event on a trackable entity.
/// Immutable once written; identity is the generated `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityModel {
    pub id: Uuid,

    /// Dotted key describing the event, e.g. "article.create"
    pub key: HeaplessString<ACTIVITY_KEY_MAX_LEN>,

    /// Entity the activity is about
    pub trackable: EntityReference,

    /// Actor that performed the activity, if any
    pub owner: Option<EntityReference>,

    /// Entity the activity is addressed to, if any
    pub recipient: Option<EntityReference>,

    pub parameters: ActivityParameters,

    pub created_at: DateTime<Utc>,
}

impl ActivityModel {
    /// Creates a new activity with a fresh id and the current timestamp.
    pub fn new(key: &str, trackable: EntityReference) -> ActivityResult<Self> {
        Ok(Self {
            id: Uuid::new_v4(),
            key: parse_key(key)?,
            trackable,
            owner: None,
            recipient: None,
            parameters: ActivityParameters::new(),
            created_at: Utc::now(),
        })
    }

    pub fn with_owner(mut self, owner: Option<EntityReference>) -> Self {
        self.owner = owner;
        self
    }

    pub fn with_recipient(mut self, recipient: Option<EntityReference>) -> Self {
        self.recipient = recipient;
        self
    }

    pub fn with_parameters(mut self, parameters: ActivityParameters) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn key(&self) -> &str {
        self.key.as_str()
    }
}

impl Identifiable for ActivityModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

/// Converts a key into its bounded representation.
pub fn parse_key(key: &str) -> ActivityResult<HeaplessString<ACTIVITY_KEY_MAX_LEN>> {
    HeaplessString::try_from(key).map_err(|_| {
        ActivityError::ValidationError(format!(
            "Activity key '{key}' is too long (max {ACTIVITY_KEY_MAX_LEN} chars)"
        ))
    })
}
