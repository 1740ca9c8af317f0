use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use time::Date;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// User record held by the in-memory dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,               // unique key
    pub first_name: String,
    pub last_name: String,
    pub email: String,         // exactly one '@'
    pub balance: BigDecimal,   // arbitrary precision
    #[serde(with = "iso_date")]
    pub birth_day: Date,
    #[serde(with = "iso_date")]
    pub created_on: Date,
}

impl User {
    /// Text after the first `@`, or an empty string if the email has none.
    pub fn email_domain(&self) -> &str {
        self.email
            .split_once('@')
            .map(|(_, domain)| domain)
            .unwrap_or("")
    }
}
