//! Site configuration: built-in defaults overlaid by environment variables
//! (after `.env` is loaded), extracted with figment.
//!
//! Flat variables (`BIND_ADDR`, `DATABASE_URL`, ...) map to top-level keys.
//! `SMTP_*` and `CONTACT_*` map into `smtp`, `CMS_*` into `cms`:
//! `SMTP_PORT` -> `smtp.port`, `CONTACT_TO` -> `smtp.to`, `CMS_USE_CDN` -> `cms.use_cdn`.

use crate::error::ConfigError;
use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Top-level keys read from unprefixed environment variables.
const TOP_LEVEL_KEYS: &[&str] = &[
    "bind_addr",
    "database_url",
    "db_max_connections",
    "company_upstream_url",
    "http_timeout_secs",
    "body_limit_bytes",
];

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SmtpSecurity {
    /// Plain connection upgraded with STARTTLS.
    StartTls,
    /// Implicit TLS (usually port 465).
    Tls,
    None,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    /// Empty means unauthenticated.
    pub user: String,
    pub password: String,
    pub tls: SmtpSecurity,
    pub timeout_secs: u64,
    pub from: String,
    pub to: String,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: "localhost".into(),
            port: 587,
            user: String::new(),
            password: String::new(),
            tls: SmtpSecurity::StartTls,
            timeout_secs: 10,
            from: "website@localhost".into(),
            to: "sales@localhost".into(),
        }
    }
}

impl SmtpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// `(user, password)` when both are set.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        if self.user.is_empty() || self.password.is_empty() {
            return None;
        }
        Some((&self.user, &self.password))
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct CmsConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    /// Empty means anonymous reads.
    pub token: String,
    pub use_cdn: bool,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            project_id: "local".into(),
            dataset: "production".into(),
            api_version: "2023-05-03".into(),
            token: String::new(),
            use_cdn: true,
        }
    }
}

impl CmsConfig {
    /// Query endpoint, e.g. `https://abc123.apicdn.sanity.io/v2023-05-03/data/query/production`.
    pub fn query_url(&self) -> String {
        let host = if self.use_cdn { "apicdn" } else { "api" };
        format!(
            "https://{}.{}.sanity.io/v{}/data/query/{}",
            self.project_id, host, self.api_version, self.dataset
        )
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    pub bind_addr: String,
    pub database_url: String,
    pub db_max_connections: u32,
    pub smtp: SmtpConfig,
    pub company_upstream_url: String,
    pub http_timeout_secs: u64,
    pub cms: CmsConfig,
    pub body_limit_bytes: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".into(),
            database_url: "postgres://localhost/campus_intake".into(),
            db_max_connections: 5,
            smtp: SmtpConfig::default(),
            company_upstream_url: "http://localhost:8080/api/companies".into(),
            http_timeout_secs: 10,
            cms: CmsConfig::default(),
            body_limit_bytes: 64 * 1024,
        }
    }
}

impl SiteConfig {
    /// Loads `.env` (if present) into the process environment, then extracts.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Defaults, then environment variables (highest priority).
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Env::raw().only(TOP_LEVEL_KEYS))
            .merge(Env::prefixed("SMTP_").map(|k| format!("smtp.{}", k).into()))
            .merge(Env::prefixed("CONTACT_").map(|k| format!("smtp.{}", k).into()))
            .merge(Env::prefixed("CMS_").map(|k| format!("cms.{}", k).into()))
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_extract_without_environment() {
        let cfg: SiteConfig = Figment::from(Serialized::defaults(SiteConfig::default()))
            .extract()
            .unwrap();
        assert_eq!(cfg.bind_addr, "0.0.0.0:3000");
        assert_eq!(cfg.smtp.port, 587);
        assert_eq!(cfg.smtp.tls, SmtpSecurity::StartTls);
        assert!(cfg.smtp.credentials().is_none());
        assert_eq!(cfg.http_timeout(), Duration::from_secs(10));
        assert_eq!(cfg.body_limit_bytes, 65536);
    }

    #[test]
    fn environment_overrides_nested_sections() {
        Jail::expect_with(|jail| {
            jail.set_env("SMTP_PORT", "2525");
            jail.set_env("SMTP_TLS", "none");
            jail.set_env("SMTP_USER", "relay");
            jail.set_env("SMTP_PASSWORD", "secret");
            jail.set_env("CONTACT_TO", "ops@example.com");
            jail.set_env("HTTP_TIMEOUT_SECS", "3");
            let cfg: SiteConfig = SiteConfig::figment().extract()?;
            assert_eq!(cfg.smtp.port, 2525);
            assert_eq!(cfg.smtp.tls, SmtpSecurity::None);
            assert_eq!(cfg.smtp.credentials(), Some(("relay", "secret")));
            assert_eq!(cfg.smtp.to, "ops@example.com");
            assert_eq!(cfg.http_timeout(), Duration::from_secs(3));
            Ok(())
        });
    }

    #[test]
    fn rejects_unknown_tls_mode() {
        Jail::expect_with(|jail| {
            jail.set_env("SMTP_TLS", "ssl3");
            assert!(SiteConfig::figment().extract::<SiteConfig>().is_err());
            Ok(())
        });
    }

    #[test]
    fn rejects_non_numeric_port() {
        Jail::expect_with(|jail| {
            jail.set_env("SMTP_PORT", "smtp");
            let err = SiteConfig::figment()
                .extract::<SiteConfig>()
                .map_err(ConfigError::from)
                .unwrap_err();
            assert!(matches!(err, ConfigError::Figment(_)));
            Ok(())
        });
    }

    #[test]
    fn cms_query_url_respects_cdn_flag() {
        Jail::expect_with(|jail| {
            jail.set_env("CMS_PROJECT_ID", "abc123");
            jail.set_env("CMS_USE_CDN", "false");
            jail.set_env("CMS_API_VERSION", "2024-01-01");
            let cfg: SiteConfig = SiteConfig::figment().extract()?;
            assert_eq!(
                cfg.cms.query_url(),
                "https://abc123.api.sanity.io/v2024-01-01/data/query/production"
            );
            Ok(())
        });
    }
}
