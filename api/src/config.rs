use std::env;

use anyhow::Context;
use maxwritings_seo::ScoringProfile;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Public site URL, used for sitemap entries
    pub site_url: String,
    /// Admin created or re-keyed at startup when both are set
    pub admin_username: Option<String>,
    pub admin_api_key: Option<String>,
    /// Origin allowed by CORS; any origin when unset
    pub cors_allow_origin: Option<String>,
    pub scoring_profile: ScoringProfile,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            site_url: env::var("SITE_URL")
                .unwrap_or_else(|_| "https://maxwritings.com".to_string())
                .trim_end_matches('/')
                .to_string(),
            admin_username: env::var("ADMIN_USERNAME").ok().filter(|v| !v.is_empty()),
            admin_api_key: env::var("ADMIN_API_KEY").ok().filter(|v| !v.is_empty()),
            cors_allow_origin: env::var("CORS_ALLOW_ORIGIN").ok().filter(|v| !v.is_empty()),
            scoring_profile: ScoringProfile {
                track_tables: env_flag("SEO_TRACK_TABLES", true),
                track_transitions: env_flag("SEO_TRACK_TRANSITIONS", true),
            },
        })
    }

    /// Bootstrap admin credentials, if configured
    pub fn bootstrap_admin(&self) -> Option<(&str, &str)> {
        match (&self.admin_username, &self.admin_api_key) {
            (Some(username), Some(key)) => Some((username, key)),
            _ => None,
        }
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .map(|v| parse_flag(&v, default))
        .unwrap_or(default)
}

fn parse_flag(value: &str, default: bool) -> bool {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_flag_values() {
        assert!(parse_flag("TRUE", false));
        assert!(parse_flag(" yes ", false));
        assert!(!parse_flag("0", true));
        assert!(!parse_flag("off", true));
        assert!(parse_flag("maybe", true));
        assert!(!parse_flag("maybe", false));
    }
}
