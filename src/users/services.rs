use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use bigdecimal::{BigDecimal, Zero};
use time::Month;

use crate::users::errors::QueryError;
use crate::users::repo_types::User;

/// Read-only queries over a borrowed user collection.
///
/// Every operation is computed eagerly from the collection on each call and
/// returns references into it; nothing is cached or copied.
#[derive(Debug, Clone, Copy)]
pub struct UserQueryService<'a> {
    users: &'a [User],
}

impl<'a> UserQueryService<'a> {
    pub fn new(users: &'a [User]) -> Self {
        Self { users }
    }

    pub fn users(&self) -> &'a [User] {
        self.users
    }

    /// User with the highest balance. On ties the first one in collection
    /// order wins.
    pub fn find_richest_user(&self) -> Option<&'a User> {
        self.users
            .iter()
            .reduce(|best, user| if user.balance > best.balance { user } else { best })
    }

    pub fn find_users_by_birthday_month(&self, month: Month) -> Vec<&'a User> {
        self.users
            .iter()
            .filter(|user| user.birth_day.month() == month)
            .collect()
    }

    /// Users grouped by the text after the first `@` of their email.
    /// Keys keep first-occurrence order, groups keep collection order.
    pub fn group_users_by_email_domain(&self) -> IndexMap<&'a str, Vec<&'a User>> {
        let mut groups: IndexMap<&'a str, Vec<&'a User>> = IndexMap::new();
        for user in self.users {
            groups.entry(user.email_domain()).or_default().push(user);
        }
        groups
    }

    /// Exact sum of every balance; zero for an empty collection.
    pub fn calculate_total_balance(&self) -> BigDecimal {
        self.users
            .iter()
            .fold(BigDecimal::zero(), |total, user| total + &user.balance)
    }

    /// Stable sort by first name, then last name (byte-wise comparison).
    pub fn sort_by_first_and_last_names(&self) -> Vec<&'a User> {
        let mut sorted: Vec<&'a User> = self.users.iter().collect();
        sorted.sort_by(|a, b| {
            a.first_name
                .cmp(&b.first_name)
                .then_with(|| a.last_name.cmp(&b.last_name))
        });
        sorted
    }

    /// Literal suffix match on the whole email, so `"mail.com"` also matches
    /// `"x@gmail.com"`.
    pub fn contains_user_with_email_domain(&self, email_domain: &str) -> bool {
        self.users
            .iter()
            .any(|user| user.email.ends_with(email_domain))
    }

    pub fn get_balance_by_email(&self, email: &str) -> Result<&'a BigDecimal, QueryError> {
        self.users
            .iter()
            .find(|user| user.email == email)
            .map(|user| &user.balance)
            .ok_or_else(|| QueryError::user_by_email(email))
    }

    /// Index of users by id. With duplicate ids the last user wins.
    pub fn collect_users_by_id(&self) -> HashMap<i64, &'a User> {
        self.users.iter().map(|user| (user.id, user)).collect()
    }

    pub fn group_first_names_by_last_names(&self) -> HashMap<&'a str, HashSet<&'a str>> {
        let mut names: HashMap<&'a str, HashSet<&'a str>> = HashMap::new();
        for user in self.users {
            names
                .entry(user.last_name.as_str())
                .or_default()
                .insert(user.first_name.as_str());
        }
        names
    }
}
