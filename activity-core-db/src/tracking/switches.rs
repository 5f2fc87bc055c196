use parking_lot::RwLock;
use std::any::TypeId;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::models::trackable::Trackable;
use crate::settings::ActivitySettings;

/// Global and per-type on/off flags for activity recording.
///
/// Type flags are keyed by the Rust type, like the tracking registry, so two
/// types sharing a `trackable_type` name are switched independently.
///
/// Shared by reference with the recorder. Flipping a flag while activities
/// are being recorded on another thread is not coordinated.
#[derive(Debug)]
pub struct ActivitySwitches {
    initially_enabled: bool,
    enabled: AtomicBool,
    disabled_types: RwLock<HashSet<TypeId>>,
}

impl Default for ActivitySwitches {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ActivitySwitches {
    pub fn new(enabled: bool) -> Self {
        Self {
            initially_enabled: enabled,
            enabled: AtomicBool::new(enabled),
            disabled_types: RwLock::new(HashSet::new()),
        }
    }

    pub fn from_settings(settings: &ActivitySettings) -> Self {
        Self::new(settings.enabled)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    pub fn enable(&self) {
        self.set_enabled(true);
    }

    pub fn disable(&self) {
        self.set_enabled(false);
    }

    pub fn is_enabled_for<M: Trackable>(&self) -> bool {
        !self.disabled_types.read().contains(&TypeId::of::<M>())
    }

    pub fn enable_for<M: Trackable>(&self) {
        self.disabled_types.write().remove(&TypeId::of::<M>());
    }

    pub fn disable_for<M: Trackable>(&self) {
        self.disabled_types.write().insert(TypeId::of::<M>());
    }

    /// True when both the global flag and the type flag are on.
    pub fn is_recording<M: Trackable>(&self) -> bool {
        self.is_enabled() && self.is_enabled_for::<M>()
    }

    /// Back to the initial global flag with every type enabled.
    pub fn reset(&self) {
        self.set_enabled(self.initially_enabled);
        self.disabled_types.write().clear();
    }

    /// Turns recording off globally until the guard is dropped.
    pub fn suspend(&self) -> SuspendGuard<'_> {
        let previous = self.enabled.swap(false, Ordering::SeqCst);
        SuspendGuard {
            switches: self,
            scope: SuspendScope::Global { previous },
        }
    }

    /// Turns recording off for `M` until the guard is dropped.
    pub fn suspend_for<M: Trackable>(&self) -> SuspendGuard<'_> {
        let was_enabled = self.disabled_types.write().insert(TypeId::of::<M>());
        SuspendGuard {
            switches: self,
            scope: SuspendScope::Type {
                type_id: TypeId::of::<M>(),
                was_enabled,
            },
        }
    }
}

enum SuspendScope {
    Global { previous: bool },
    Type { type_id: TypeId, was_enabled: bool },
}

/// Restores the suspended flag on drop
pub struct SuspendGuard<'a> {
    switches: &'a ActivitySwitches,
    scope: SuspendScope,
}

impl Drop for SuspendGuard<'_> {
    fn drop(&mut self) {
        match self.scope {
            SuspendScope::Global { previous } => self.switches.set_enabled(previous),
            SuspendScope::Type { type_id, was_enabled } => {
                if was_enabled {
                    self.switches.disabled_types.write().remove(&type_id);
                }
            }
        }
    }
}
