use std::fmt;
use std::sync::Arc;

use super::context::ActivityContext;

/// A type-level default that is either fixed or computed from the model and
/// context when an activity is recorded.
pub enum DynamicValue<M, T> {
    Static(T),
    Computed(Arc<dyn Fn(&M, &ActivityContext) -> T + Send + Sync>),
}

impl<M, T: Clone> DynamicValue<M, T> {
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&M, &ActivityContext) -> T + Send + Sync + 'static,
    {
        DynamicValue::Computed(Arc::new(f))
    }

    pub fn resolve(&self, model: &M, context: &ActivityContext) -> T {
        match self {
            DynamicValue::Static(value) => value.clone(),
            DynamicValue::Computed(f) => f(model, context),
        }
    }
}

impl<M, T: Clone> Clone for DynamicValue<M, T> {
    fn clone(&self) -> Self {
        match self {
            DynamicValue::Static(value) => DynamicValue::Static(value.clone()),
            DynamicValue::Computed(f) => DynamicValue::Computed(Arc::clone(f)),
        }
    }
}

impl<M, T: fmt::Debug> fmt::Debug for DynamicValue<M, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DynamicValue::Static(value) => f.debug_tuple("Static").field(value).finish(),
            DynamicValue::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Post {
        title: String,
    }

    #[test]
    fn test_static_value() {
        let value: DynamicValue<Post, String> = DynamicValue::Static("fixed".to_string());
        let post = Post { title: "Hello".to_string() };
        assert_eq!(value.resolve(&post, &ActivityContext::new()), "fixed");
    }

    #[test]
    fn test_computed_value_sees_model_and_context() {
        let value: DynamicValue<Post, String> = DynamicValue::computed(|post: &Post, ctx| {
            format!("{}:{}", post.title, ctx.value("controller").cloned().unwrap_or_default())
        });
        let post = Post { title: "Hello".to_string() };
        let ctx = ActivityContext::new().with_value("controller", json!(10));
        assert_eq!(value.resolve(&post, &ctx), "Hello:10");
    }
}
