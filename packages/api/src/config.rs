/// Backend the app talks to when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://educational-app-backend-13s7.onrender.com";

const BASE_URL_VAR: &str = "API_BASE_URL";

/// Where the effective base URL came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Runtime,
    BuildTime,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    source: ConfigSource,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize(&base_url.into()),
            source: ConfigSource::Runtime,
        }
    }

    /// Resolve the base URL from the process environment, then from the value
    /// baked in at compile time, then [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        Self::resolve(
            std::env::var(BASE_URL_VAR).ok(),
            option_env!("API_BASE_URL").map(str::to_string),
        )
    }

    fn resolve(runtime: Option<String>, build_time: Option<String>) -> Self {
        let pick = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        if let Some(url) = pick(runtime) {
            return Self {
                base_url: normalize(&url),
                source: ConfigSource::Runtime,
            };
        }
        if let Some(url) = pick(build_time) {
            return Self {
                base_url: normalize(&url),
                source: ConfigSource::BuildTime,
            };
        }
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            source: ConfigSource::Default,
        }
    }

    pub fn source(&self) -> ConfigSource {
        self.source
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

fn normalize(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Load `.env` for local development. Missing files are fine.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

#[cfg(target_arch = "wasm32")]
pub fn load_dotenv() {}
