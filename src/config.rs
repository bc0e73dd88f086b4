use chrono::FixedOffset;
use chrono_tz::Tz;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// Root of the Nexus API, e.g. "http://nexus:8080".
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

/// Zone used to cut days and hours. Set at most one key; neither = host local zone.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplayConfig {
    /// IANA zone name, e.g. "Europe/Berlin". Follows DST.
    pub timezone: Option<String>,
    /// Constant offset east of UTC.
    pub utc_offset_minutes: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayZone {
    Named(Tz),
    Fixed(FixedOffset),
    Local,
}

impl DisplayConfig {
    pub fn zone(&self) -> DisplayZone {
        if let Some(tz) = self.timezone.as_deref().and_then(|name| name.parse::<Tz>().ok()) {
            return DisplayZone::Named(tz);
        }
        match self.utc_offset_minutes.and_then(|m| FixedOffset::east_opt(m * 60)) {
            Some(offset) => DisplayZone::Fixed(offset),
            None => DisplayZone::Local,
        }
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            !self.server.host.is_empty(),
            "server.host must be non-empty"
        );
        anyhow::ensure!(
            self.upstream.base_url.starts_with("http://")
                || self.upstream.base_url.starts_with("https://"),
            "upstream.base_url must start with http:// or https://, got {:?}",
            self.upstream.base_url
        );
        anyhow::ensure!(
            self.upstream.timeout_secs > 0,
            "upstream.timeout_secs must be > 0, got {}",
            self.upstream.timeout_secs
        );
        anyhow::ensure!(
            self.display.timezone.is_none() || self.display.utc_offset_minutes.is_none(),
            "display.timezone and display.utc_offset_minutes are mutually exclusive"
        );
        if let Some(name) = &self.display.timezone {
            anyhow::ensure!(
                name.parse::<Tz>().is_ok(),
                "display.timezone must be an IANA zone name, got {:?}",
                name
            );
        }
        if let Some(minutes) = self.display.utc_offset_minutes {
            anyhow::ensure!(
                minutes.abs() < 24 * 60,
                "display.utc_offset_minutes must be within +/-1439, got {}",
                minutes
            );
        }
        Ok(())
    }
}
