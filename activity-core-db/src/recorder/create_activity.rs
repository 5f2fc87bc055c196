use activity_core_api::{ActivityError, ActivityResult};

use super::ActivityRecorder;
use crate::models::{activity::ActivityModel, entity_reference::EntityReference, trackable::Trackable};
use crate::repository::ActivityStore;
use crate::tracking::{config::TrackingConfig, context::ActivityContext};

impl<S: ActivityStore + ?Sized> ActivityRecorder<S> {
    /// Records an activity outside the lifecycle callbacks.
    ///
    /// The key comes from the staged instance options or the type-level key;
    /// without either this fails with `NoKeyProvided`. Returns `Ok(None)` when
    /// recording is switched off for the type.
    pub async fn create_activity<M: Trackable>(
        &self,
        model: &M,
        context: &ActivityContext,
    ) -> ActivityResult<Option<ActivityModel>> {
        let config = self.tracking_config::<M>()?;
        if !self.switches.is_recording::<M>() {
            return Ok(None);
        }
        self.create_activity_impl(model, &config, None, context).await.map(Some)
    }

    /// Records a named custom event, e.g. "publish", whose default key is
    /// rendered from the key template.
    pub async fn create_custom_activity<M: Trackable>(
        &self,
        model: &M,
        action: &str,
        context: &ActivityContext,
    ) -> ActivityResult<Option<ActivityModel>> {
        let config = self.tracking_config::<M>()?;
        if !self.switches.is_recording::<M>() {
            return Ok(None);
        }
        self.create_activity_impl(model, &config, Some(action), context)
            .await
            .map(Some)
    }

    pub(super) async fn create_activity_impl<M: Trackable>(
        &self,
        model: &M,
        config: &TrackingConfig<M>,
        action: Option<&str>,
        context: &ActivityContext,
    ) -> ActivityResult<ActivityModel> {
        let trackable = EntityReference::of(model)?;
        let options = self.instance_options(model).unwrap_or_default();

        let key = match options.key {
            Some(key) => key,
            None => config
                .default_key(model, action, context)
                .ok_or_else(|| ActivityError::NoKeyProvided(M::trackable_type().to_string()))?,
        };
        let owner = options.owner.or_else(|| config.default_owner(model, context));
        let recipient = options
            .recipient
            .or_else(|| config.default_recipient(model, context));
        let parameters = options
            .params
            .unwrap_or_else(|| config.default_params(model, context));

        let activity = ActivityModel::new(&key, trackable.clone())?
            .with_owner(owner)
            .with_recipient(recipient)
            .with_parameters(parameters);

        if let Some(opposite_key) = options.opposite_key.as_deref() {
            let deleted = self
                .store
                .delete_by_trackable_key(&trackable, opposite_key)
                .await
                .map_err(ActivityError::PersistenceError)?;
            tracing::debug!(
                opposite_key,
                deleted,
                trackable_type = trackable.entity_type(),
                trackable_id = %trackable.entity_id,
                "Removed opposite activities"
            );
        }

        let activity = self
            .store
            .create(activity)
            .await
            .map_err(ActivityError::PersistenceError)?;
        self.clear_instance_options(model);

        tracing::info!(
            activity_key = activity.key(),
            trackable_type = trackable.entity_type(),
            trackable_id = %trackable.entity_id,
            "Recorded activity"
        );
        Ok(activity)
    }
}
