//! Process configuration from environment variables.

/// Everything the service needs from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub store_url: String,
    pub store_key: String,
    /// Generation API credential; summarization is disabled when absent.
    pub google_api_key: Option<String>,
}

impl Config {
    /// Read config from the environment. Store credentials are required;
    /// the process must refuse to serve without them.
    pub fn from_env() -> Result<Self, String> {
        let store_url = std::env::var("SUPABASE_URL")
            .map_err(|_| "Missing SUPABASE_URL".to_string())?;
        let store_key = std::env::var("SUPABASE_ANON_KEY")
            .map_err(|_| "Missing SUPABASE_ANON_KEY".to_string())?;

        let port: u16 = std::env::var("MEMO_SERVICE_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(9103);

        let google_api_key = std::env::var("GOOGLE_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        Ok(Self {
            port,
            store_url: store_url.trim_end_matches('/').to_string(),
            store_key,
            google_api_key,
        })
    }
}
