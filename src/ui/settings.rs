use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub ui_scale: f32,
    pub llm: LlmSettings,
    pub images: ImageSettings,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            ui_scale: 1.0,
            llm: LlmSettings::default(),
            images: ImageSettings::default(),
        }
    }
}

/// OpenAI-compatible chat completion endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,

    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    pub timeout_secs: u64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".into(),
            model: "gpt-4o-mini".into(),
            temperature: 0.9,
            max_tokens: 3000,
            api_key_env: "OPENAI_API_KEY".into(),
            timeout_secs: 60,
        }
    }
}

/// Unsplash random photo endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSettings {
    pub api_url: String,
    pub orientation: String,
    pub access_key_env: String,
    pub timeout_secs: u64,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            api_url: "https://api.unsplash.com/photos/random".into(),
            orientation: "landscape".into(),
            access_key_env: "UNSPLASH_ACCESS_KEY".into(),
            timeout_secs: 15,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: AppSettings =
            serde_json::from_str(r#"{ "ui_scale": 1.5, "llm": { "model": "gpt-4o" } }"#).unwrap();

        assert_eq!(settings.ui_scale, 1.5);
        assert_eq!(settings.llm.model, "gpt-4o");
        assert_eq!(settings.llm.base_url, "https://api.openai.com/v1");
        assert_eq!(settings.llm.max_tokens, 3000);
        assert_eq!(settings.images, ImageSettings::default());
    }

    #[test]
    fn image_lookup_defaults_to_landscape() {
        assert_eq!(ImageSettings::default().orientation, "landscape");
    }
}
