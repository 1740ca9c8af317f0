use std::collections::HashSet;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use bigdecimal::BigDecimal;
use time::macros::date;
use tracing::{debug, info, warn};

use crate::users::errors::DatasetError;
use crate::users::repo_types::User;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// The four-user dataset the report falls back to when no file is configured.
pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            first_name: "Justin".into(),
            last_name: "Butler".into(),
            email: "justin.butler@gmail.com".into(),
            balance: BigDecimal::from(172966_i64),
            birth_day: date!(2003 - 04 - 17),
            created_on: date!(2016 - 06 - 13),
        },
        User {
            id: 2,
            first_name: "Olivia".into(),
            last_name: "Cardenas".into(),
            email: "cardenas@mail.com".into(),
            balance: BigDecimal::from(38029_i64),
            birth_day: date!(1930 - 01 - 19),
            created_on: date!(2014 - 06 - 21),
        },
        User {
            id: 3,
            first_name: "Nolan".into(),
            last_name: "Donovan".into(),
            email: "nolandonovan@gmail.com".into(),
            balance: BigDecimal::from(13889_i64),
            birth_day: date!(1925 - 04 - 19),
            created_on: date!(2011 - 03 - 10),
        },
        User {
            id: 4,
            first_name: "Lucas".into(),
            last_name: "Lynn".into(),
            email: "lucas.lynn@yahoo.com".into(),
            balance: BigDecimal::from(16980_i64),
            birth_day: date!(1987 - 05 - 25),
            created_on: date!(2009 - 03 - 05),
        },
    ]
}

/// Parse a JSON array of users and validate their emails.
///
/// An email is accepted when it has exactly one `@` with non-empty text on
/// both sides and no whitespace anywhere; whitespace is rejected even though
/// the queries themselves would tolerate it. Balances keep every digit given.
pub fn parse_users(json: &str) -> Result<Vec<User>, DatasetError> {
    let users: Vec<User> = serde_json::from_str(json)?;

    if let Some(bad) = users.iter().find(|u| !is_valid_email(&u.email)) {
        return Err(DatasetError::InvalidEmail {
            id: bad.id,
            email: bad.email.clone(),
        });
    }

    let mut seen = HashSet::with_capacity(users.len());
    for user in &users {
        if !seen.insert(user.id) {
            warn!(id = user.id, "duplicate user id; lookups by id keep the last record");
        }
    }

    debug!(count = users.len(), "users parsed");
    Ok(users)
}

pub fn load_users(path: &Path) -> Result<Vec<User>, DatasetError> {
    let raw = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let users = parse_users(&raw)?;
    info!(path = %path.display(), count = users.len(), "dataset loaded");
    Ok(users)
}
