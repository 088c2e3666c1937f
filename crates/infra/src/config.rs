use tracing::{info, warn};

const DEFAULT_PORT: usize = 5000;
const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Api key for generating campaign template parameters with Gemini.
    /// When it is missing the plain job values are used instead.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
}

impl Config {
    pub fn new() -> Self {
        let port = match std::env::var("PORT") {
            Ok(port) => match port.parse::<usize>() {
                Ok(port) => port,
                Err(_) => {
                    warn!(
                        "The given PORT: {} is not valid, falling back to the default port: {}.",
                        port, DEFAULT_PORT
                    );
                    DEFAULT_PORT
                }
            },
            Err(_) => DEFAULT_PORT,
        };
        let gemini_api_key = match std::env::var("GEMINI_API_KEY") {
            Ok(key) if !key.trim().is_empty() => Some(key),
            _ => {
                warn!("Did not find GEMINI_API_KEY environment variable. Campaign template parameters will use the job values.");
                None
            }
        };
        let gemini_model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| {
            info!(
                "Did not find GEMINI_MODEL environment variable. Using {}.",
                DEFAULT_GEMINI_MODEL
            );
            DEFAULT_GEMINI_MODEL.to_string()
        });
        Self {
            port,
            gemini_api_key,
            gemini_model,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
