use anyhow::{Context, Result, anyhow};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub jwt_secret: String,
    pub session_ttl_minutes: i64,
    pub session_sweep_seconds: u64,
    pub menu_file: Option<PathBuf>,
    pub cookie_secure: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        let jwt_secret =
            std::env::var("JWT_SECRET").context("Missing environment variable: JWT_SECRET")?;
        let port_str = std::env::var("PORT").context("Missing environment variable: PORT")?;

        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let session_ttl_minutes = match std::env::var("SESSION_TTL_MINUTES") {
            Ok(value) => value
                .parse::<i64>()
                .context("SESSION_TTL_MINUTES must be a valid integer")?,
            Err(_) => 30,
        };

        if session_ttl_minutes <= 0 {
            return Err(anyhow!(
                "SESSION_TTL_MINUTES must be positive, got '{}'",
                session_ttl_minutes
            ));
        }

        let session_sweep_seconds = match std::env::var("SESSION_SWEEP_SECONDS") {
            Ok(value) => value
                .parse::<u64>()
                .context("SESSION_SWEEP_SECONDS must be a valid u64 integer")?,
            Err(_) => 60,
        };

        let menu_file = std::env::var("MENU_FILE").ok().map(PathBuf::from);

        let cookie_secure = match std::env::var("COOKIE_SECURE") {
            Ok(value) => parse_bool("COOKIE_SECURE", &value)?,
            Err(_) => true,
        };

        Ok(Self {
            port,
            jwt_secret,
            session_ttl_minutes,
            session_sweep_seconds,
            menu_file,
            cookie_secure,
        })
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(anyhow!("{} must be 'true' or 'false', got '{}'", name, other)),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_bool;

    #[test]
    fn parses_boolean_flags() {
        assert!(parse_bool("COOKIE_SECURE", "true").unwrap());
        assert!(!parse_bool("COOKIE_SECURE", "0").unwrap());
        assert!(parse_bool("COOKIE_SECURE", "yes").is_err());
    }
}
