use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub bos_base_url: String,
    pub bos_api_key: String,
    pub bos_secret: String,
    pub bos_origin: String,
    pub bos_report_id: String,
    /// Static source IP whitelisted by the BOS provider. This value is signed
    /// into every outbound request; it is never derived from the caller.
    pub bos_source_ip: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            bos_base_url: std::env::var("BOS_BASE_URL")
                .map_err(|_| anyhow::anyhow!("BOS_BASE_URL environment variable required"))
                .and_then(|url| {
                    if url.trim().is_empty() {
                        anyhow::bail!("BOS_BASE_URL cannot be empty");
                    }
                    if !url.starts_with("http://") && !url.starts_with("https://") {
                        anyhow::bail!("BOS_BASE_URL must start with http:// or https://");
                    }
                    Ok(url)
                })?,
            bos_api_key: std::env::var("BOS_API_KEY")
                .map_err(|_| anyhow::anyhow!("BOS_API_KEY environment variable required"))
                .and_then(|key| {
                    if key.trim().is_empty() {
                        anyhow::bail!("BOS_API_KEY cannot be empty");
                    }
                    Ok(key)
                })?,
            bos_secret: std::env::var("BOS_SECRET")
                .map_err(|_| anyhow::anyhow!("BOS_SECRET environment variable required"))
                .and_then(|secret| {
                    if secret.trim().is_empty() {
                        anyhow::bail!("BOS_SECRET cannot be empty");
                    }
                    Ok(secret)
                })?,
            bos_origin: std::env::var("BOS_ORIGIN")
                .map_err(|_| anyhow::anyhow!("BOS_ORIGIN environment variable required"))
                .and_then(|origin| {
                    if origin.trim().is_empty() {
                        anyhow::bail!("BOS_ORIGIN cannot be empty");
                    }
                    Ok(origin)
                })?,
            bos_report_id: std::env::var("BOS_REPORT_ID")
                .map_err(|_| anyhow::anyhow!("BOS_REPORT_ID environment variable required"))
                .and_then(|id| {
                    if id.trim().is_empty() {
                        anyhow::bail!("BOS_REPORT_ID cannot be empty");
                    }
                    Ok(id)
                })?,
            bos_source_ip: std::env::var("BOS_SOURCE_IP")
                .map_err(|_| anyhow::anyhow!("BOS_SOURCE_IP environment variable required"))
                .and_then(|ip| {
                    if ip.trim().is_empty() {
                        anyhow::bail!("BOS_SOURCE_IP cannot be empty");
                    }
                    Ok(ip)
                })?,
        };

        // Log successful configuration load (without sensitive values)
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("BOS Base URL: {}", config.bos_base_url);
        tracing::debug!("BOS Origin: {}", config.bos_origin);
        tracing::debug!("BOS Report ID: {}", config.bos_report_id);
        tracing::debug!("BOS Source IP: {}", config.bos_source_ip);
        tracing::debug!("Server Port: {}", config.port);

        Ok(config)
    }
}
