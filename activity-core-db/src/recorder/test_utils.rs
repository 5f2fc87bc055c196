use std::sync::Arc;
use uuid::Uuid;

use super::ActivityRecorder;
use crate::models::{identifiable::Identifiable, trackable::Trackable};
use crate::repository::in_memory::InMemoryActivityRepository;
use crate::tracking::{registry::TrackingRegistry, switches::ActivitySwitches};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: Uuid,
    pub name: String,
    pub published: bool,
}

impl Identifiable for Article {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Trackable for Article {
    fn trackable_type() -> &'static str {
        "article"
    }
}

#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
}

impl Identifiable for User {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Trackable for User {
    fn trackable_type() -> &'static str {
        "user"
    }
}

pub struct TestContext {
    pub recorder: ActivityRecorder<InMemoryActivityRepository>,
    pub registry: Arc<TrackingRegistry>,
    pub switches: Arc<ActivitySwitches>,
    pub store: Arc<InMemoryActivityRepository>,
}

pub fn setup_test_context() -> TestContext {
    let store = Arc::new(InMemoryActivityRepository::new());
    let registry = Arc::new(TrackingRegistry::default());
    let switches = Arc::new(ActivitySwitches::default());
    let recorder = ActivityRecorder::new(store.clone(), registry.clone(), switches.clone());
    TestContext {
        recorder,
        registry,
        switches,
        store,
    }
}

pub fn create_test_article(name: &str) -> Article {
    Article {
        id: Uuid::new_v4(),
        name: name.to_string(),
        published: false,
    }
}

pub fn create_test_user() -> User {
    User { id: Uuid::new_v4() }
}
