use activity_core_api::{ActivityError, ActivityResult, TrackedAction};

use super::ActivityRecorder;
use crate::models::{activity::ActivityModel, trackable::Trackable};
use crate::repository::ActivityStore;
use crate::tracking::context::ActivityContext;

impl<S: ActivityStore + ?Sized> ActivityRecorder<S> {
    /// Records `action` on `model`.
    ///
    /// Returns `Ok(None)` when recording is switched off globally or for the
    /// type, or when the hook of the action returns `false`. Switching off
    /// leaves staged instance options untouched; a hook veto or hook error
    /// consumes them like a recorded event does.
    pub async fn record<M: Trackable>(
        &self,
        model: &M,
        action: TrackedAction,
        context: &ActivityContext,
    ) -> ActivityResult<Option<ActivityModel>> {
        let config = self.tracking_config::<M>()?;
        if !self.switches.is_recording::<M>() {
            tracing::debug!(
                trackable_type = M::trackable_type(),
                %action,
                "Activity recording disabled"
            );
            return Ok(None);
        }

        if let Some(hook) = config.get_hook(action.as_str()) {
            let allowed = hook(model, context).map_err(|source| {
                self.clear_instance_options(model);
                ActivityError::HookFailed {
                    action: action.to_string(),
                    source,
                }
            })?;
            if !allowed {
                self.clear_instance_options(model);
                tracing::debug!(
                    trackable_type = M::trackable_type(),
                    trackable_id = %model.get_id(),
                    %action,
                    "Activity vetoed by hook"
                );
                return Ok(None);
            }
        }

        self.create_activity_impl(model, &config, Some(action.as_str()), context)
            .await
            .map(Some)
    }

    pub async fn after_create<M: Trackable>(
        &self,
        model: &M,
        context: &ActivityContext,
    ) -> ActivityResult<Option<ActivityModel>> {
        self.on_lifecycle(model, TrackedAction::Create, context).await
    }

    pub async fn after_update<M: Trackable>(
        &self,
        model: &M,
        context: &ActivityContext,
    ) -> ActivityResult<Option<ActivityModel>> {
        self.on_lifecycle(model, TrackedAction::Update, context).await
    }

    pub async fn before_destroy<M: Trackable>(
        &self,
        model: &M,
        context: &ActivityContext,
    ) -> ActivityResult<Option<ActivityModel>> {
        self.on_lifecycle(model, TrackedAction::Destroy, context).await
    }

    // Types that are not tracked, or do not instrument the action, have no callback.
    async fn on_lifecycle<M: Trackable>(
        &self,
        model: &M,
        action: TrackedAction,
        context: &ActivityContext,
    ) -> ActivityResult<Option<ActivityModel>> {
        match self.registry.config::<M>() {
            Some(config) if config.is_instrumented(action) => self.record(model, action, context).await,
            _ => Ok(None),
        }
    }
}
