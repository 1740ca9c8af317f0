use std::collections::{BTreeMap, BTreeSet};

use indexmap::IndexMap;
use bigdecimal::BigDecimal;
use serde::Serialize;
use time::Month;

use crate::users::repo_types::User;
use crate::users::services::UserQueryService;

/// Inputs for the parameterized queries of a report.
#[derive(Debug, Clone)]
pub struct ReportParams {
    pub birthday_month: Month,
    pub email_domain: String,
    pub lookup_email: Option<String>,
}

/// Result of probing the collection for an email suffix.
#[derive(Debug, Serialize)]
pub struct DomainProbe {
    pub domain: String,
    pub present: bool,
}

/// Outcome of a balance lookup; a miss carries the error message.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum BalanceLookup {
    Found { email: String, balance: BigDecimal },
    Missing { email: String, error: String },
}

/// Snapshot of every query over one collection.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserReport<'a> {
    pub user_count: usize,
    pub richest_user: Option<&'a User>,
    pub birthday_month: u8,
    pub users_by_birthday_month: Vec<&'a User>,
    pub users_by_email_domain: IndexMap<&'a str, Vec<&'a User>>,
    pub total_balance: BigDecimal,
    pub sorted_users: Vec<&'a User>,
    pub email_domain_probe: DomainProbe,
    pub balance_lookup: Option<BalanceLookup>,
    pub users_by_id: BTreeMap<i64, &'a User>,
    pub first_names_by_last_name: BTreeMap<&'a str, BTreeSet<&'a str>>,
}

impl<'a> UserReport<'a> {
    pub fn build(service: &UserQueryService<'a>, params: &ReportParams) -> Self {
        let balance_lookup = params.lookup_email.as_deref().map(|email| {
            match service.get_balance_by_email(email) {
                Ok(balance) => BalanceLookup::Found {
                    email: email.to_string(),
                    balance: balance.clone(),
                },
                Err(e) => BalanceLookup::Missing {
                    email: email.to_string(),
                    error: e.to_string(),
                },
            }
        });

        // Hash-based results are re-collected into ordered maps for stable output.
        let users_by_id = service.collect_users_by_id().into_iter().collect();
        let first_names_by_last_name = service
            .group_first_names_by_last_names()
            .into_iter()
            .map(|(last, firsts)| (last, firsts.into_iter().collect()))
            .collect();

        Self {
            user_count: service.users().len(),
            richest_user: service.find_richest_user(),
            birthday_month: u8::from(params.birthday_month),
            users_by_birthday_month: service.find_users_by_birthday_month(params.birthday_month),
            users_by_email_domain: service.group_users_by_email_domain(),
            total_balance: service.calculate_total_balance(),
            sorted_users: service.sort_by_first_and_last_names(),
            email_domain_probe: DomainProbe {
                domain: params.email_domain.clone(),
                present: service.contains_user_with_email_domain(&params.email_domain),
            },
            balance_lookup,
            users_by_id,
            first_names_by_last_name,
        }
    }
}
