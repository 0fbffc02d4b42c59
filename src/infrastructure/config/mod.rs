use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Startup refuses to proceed on any of these; everything optional
/// degrades by skipping its provider instead.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {name}: {value}")]
    InvalidVar { name: &'static str, value: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Search providers
    pub youtube_api_key: String,
    pub spotify_token: Option<String>,
    pub tmdb_api_key: Option<String>,
    pub omdb_api_key: Option<String>,
    pub search_region: String,
    pub search_language: String,
    // Chat providers
    pub gemini_api_key: Option<String>,
    // Speech providers
    pub elevenlabs_api_key: Option<String>,
    pub elevenlabs_voice_id: Option<String>,
    pub speech_language: String,
    pub speech_slow: bool,
    pub temp_audio_dir: PathBuf,
    pub artifact_max_age_hours: i64,
    // Persona
    pub assistant_name: String,
    pub companion_name: String,
    // Outbound call timeouts (seconds)
    pub chat_timeout_secs: u64,
    pub search_timeout_secs: u64,
    pub speech_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

fn optional_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn required_var(name: &'static str) -> Result<String, ConfigError> {
    optional_var(name).ok_or(ConfigError::MissingVar(name))
}

fn parsed_var<T: std::str::FromStr>(name: &'static str, default: &str) -> Result<T, ConfigError> {
    let value = optional_var(name).unwrap_or_else(|| default.to_string());
    value.parse().map_err(|_| ConfigError::InvalidVar {
        name,
        value,
    })
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: optional_var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parsed_var("PORT", "8080")?,
            environment: match optional_var("ENVIRONMENT").as_deref() {
                Some("production") => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match optional_var("LOG_FORMAT").as_deref() {
                Some("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            youtube_api_key: required_var("YOUTUBE_API_KEY")?,
            spotify_token: optional_var("SPOTIFY_TOKEN"),
            tmdb_api_key: optional_var("TMDB_API_KEY"),
            omdb_api_key: optional_var("OMDB_API_KEY"),
            search_region: optional_var("SEARCH_REGION").unwrap_or_else(|| "IR".to_string()),
            search_language: optional_var("SEARCH_LANGUAGE")
                .unwrap_or_else(|| "fa-IR".to_string()),
            gemini_api_key: optional_var("GEMINI_API_KEY"),
            elevenlabs_api_key: optional_var("ELEVENLABS_API_KEY"),
            elevenlabs_voice_id: optional_var("ELEVENLABS_VOICE_ID"),
            speech_language: optional_var("SPEECH_LANGUAGE").unwrap_or_else(|| "fa".to_string()),
            speech_slow: optional_var("SPEECH_SLOW")
                .map(|v| v.to_lowercase() == "true")
                .unwrap_or(false),
            temp_audio_dir: optional_var("TEMP_AUDIO_DIR")
                .unwrap_or_else(|| "temp_audio".to_string())
                .into(),
            artifact_max_age_hours: parsed_var("ARTIFACT_MAX_AGE_HOURS", "24")?,
            assistant_name: optional_var("ASSISTANT_NAME").unwrap_or_else(|| "امیر".to_string()),
            companion_name: optional_var("COMPANION_NAME")
                .unwrap_or_else(|| "بهنوش".to_string()),
            chat_timeout_secs: parsed_var("CHAT_TIMEOUT_SECS", "30")?,
            search_timeout_secs: parsed_var("SEARCH_TIMEOUT_SECS", "10")?,
            speech_timeout_secs: parsed_var("SPEECH_TIMEOUT_SECS", "30")?,
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    /// A Gemini key only counts when it looks like a real one
    pub fn has_gemini_api(&self) -> bool {
        self.gemini_api_key
            .as_deref()
            .map(|k| k.starts_with("AIzaSy"))
            .unwrap_or(false)
    }

    /// Voice cloning needs both the key and a cloned voice id
    pub fn has_voice_cloning(&self) -> bool {
        self.elevenlabs_api_key.is_some() && self.elevenlabs_voice_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            host: "0.0.0.0".to_string(),
            port: 8080,
            environment: Environment::Development,
            log_format: LogFormat::Pretty,
            youtube_api_key: "yt-key".to_string(),
            spotify_token: None,
            tmdb_api_key: None,
            omdb_api_key: None,
            search_region: "IR".to_string(),
            search_language: "fa-IR".to_string(),
            gemini_api_key: None,
            elevenlabs_api_key: None,
            elevenlabs_voice_id: None,
            speech_language: "fa".to_string(),
            speech_slow: false,
            temp_audio_dir: "temp_audio".into(),
            artifact_max_age_hours: 24,
            assistant_name: "امیر".to_string(),
            companion_name: "بهنوش".to_string(),
            chat_timeout_secs: 30,
            search_timeout_secs: 10,
            speech_timeout_secs: 30,
        }
    }

    #[test]
    fn test_gemini_key_must_be_well_formed() {
        let mut config = base_config();
        assert!(!config.has_gemini_api());

        config.gemini_api_key = Some("not-a-real-key".to_string());
        assert!(!config.has_gemini_api());

        config.gemini_api_key = Some("AIzaSyABCDEF".to_string());
        assert!(config.has_gemini_api());
    }

    #[test]
    fn test_voice_cloning_requires_key_and_voice_id() {
        let mut config = base_config();
        assert!(!config.has_voice_cloning());

        config.elevenlabs_api_key = Some("xi-key".to_string());
        assert!(!config.has_voice_cloning());

        config.elevenlabs_voice_id = Some("voice".to_string());
        assert!(config.has_voice_cloning());
    }
}
