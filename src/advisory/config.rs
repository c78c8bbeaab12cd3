//! Advisory backend configuration

pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisoryConfig {
    /// `None` disables the advisory without any network traffic
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.into(),
            model: DEFAULT_MODEL.into(),
        }
    }
}

impl AdvisoryConfig {
    pub fn with_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: non_empty(Some(api_key.into())),
            ..Default::default()
        }
    }

    pub fn has_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Read configuration from the process environment
    ///
    /// Key: GEMINI_API_KEY, falling back to API_KEY
    /// Optional: ROTUNDA_AI_URL, ROTUNDA_AI_MODEL
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok();
        Self::from_vars(
            var("GEMINI_API_KEY"),
            var("API_KEY"),
            var("ROTUNDA_AI_URL"),
            var("ROTUNDA_AI_MODEL"),
        )
    }

    /// Browsers have no process environment; values are baked in at build time
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        let var = |value: Option<&str>| value.map(str::to_string);
        Self::from_vars(
            var(option_env!("GEMINI_API_KEY")),
            var(option_env!("API_KEY")),
            var(option_env!("ROTUNDA_AI_URL")),
            var(option_env!("ROTUNDA_AI_MODEL")),
        )
    }

    fn from_vars(
        gemini_key: Option<String>,
        fallback_key: Option<String>,
        api_url: Option<String>,
        model: Option<String>,
    ) -> Self {
        let api_key = non_empty(gemini_key).or_else(|| non_empty(fallback_key));
        let config = Self {
            api_key,
            api_url: non_empty(api_url).unwrap_or_else(|| DEFAULT_API_URL.into()),
            model: non_empty(model).unwrap_or_else(|| DEFAULT_MODEL.into()),
        };
        if !config.has_key() {
            log::info!("No AI key configured, advisory will return placeholders");
        }
        config
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
