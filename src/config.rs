use std::path::PathBuf;

use anyhow::Context;
use time::Month;

use crate::users::dto::ReportParams;

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub filter: String,
    pub json: bool,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub users_file: Option<PathBuf>,
    pub report: ReportParams,
    pub log: LogConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup, so tests need not touch the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let birthday_month = match lookup("BIRTHDAY_MONTH") {
            Some(raw) => parse_month(&raw)?,
            None => Month::April,
        };
        let report = ReportParams {
            birthday_month,
            email_domain: lookup("EMAIL_DOMAIN").unwrap_or_else(|| "gmail.com".into()),
            lookup_email: lookup("LOOKUP_EMAIL").filter(|v| !v.is_empty()),
        };
        let log = LogConfig {
            filter: lookup("RUST_LOG").unwrap_or_else(|| "user_queries=debug".into()),
            json: lookup("LOG_FORMAT").map(|v| v == "json").unwrap_or(false),
        };
        Ok(Self {
            users_file: lookup("USERS_FILE")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            report,
            log,
        })
    }
}

fn parse_month(raw: &str) -> anyhow::Result<Month> {
    let number = raw
        .trim()
        .parse::<u8>()
        .with_context(|| format!("BIRTHDAY_MONTH must be a number, got {raw:?}"))?;
    Month::try_from(number).with_context(|| format!("BIRTHDAY_MONTH out of range 1-12: {number}"))
}
