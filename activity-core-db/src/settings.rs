use serde::{Deserialize, Serialize};

/// Placeholder replaced by the tracked type name in key templates
pub const TYPE_PLACEHOLDER: &str = "{type}";

/// Placeholder replaced by the action name in key templates
pub const ACTION_PLACEHOLDER: &str = "{action}";

pub const DEFAULT_KEY_TEMPLATE: &str = "{type}.{action}";

/// Process-level settings for activity recording
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySettings {
    /// Initial value of the global enable flag
    pub enabled: bool,

    /// Template for default activity keys
    pub key_template: String,
}

impl Default for ActivitySettings {
    fn default() -> Self {
        Self {
            enabled: true,
            key_template: DEFAULT_KEY_TEMPLATE.to_string(),
        }
    }
}

impl ActivitySettings {
    /// Reads `ACTIVITY_ENABLED` and `ACTIVITY_KEY_TEMPLATE`, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let enabled = std::env::var("ACTIVITY_ENABLED")
            .ok()
            .and_then(|value| parse_flag(&value))
            .unwrap_or(defaults.enabled);
        let key_template = std::env::var("ACTIVITY_KEY_TEMPLATE")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(defaults.key_template);
        Self {
            enabled,
            key_template,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Renders a key template for the given type and action.
pub fn render_key_template(template: &str, entity_type: &str, action: &str) -> String {
    template
        .replace(TYPE_PLACEHOLDER, entity_type)
        .replace(ACTION_PLACEHOLDER, action)
}
