use anyhow::Context;
use user_queries::config::AppConfig;
use user_queries::users::dto::UserReport;
use user_queries::users::repo::{load_users, seed_users};
use user_queries::users::UserQueryService;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;

    if config.log.json {
        tracing_subscriber::fmt()
            .with_env_filter(config.log.filter.as_str())
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(config.log.filter.as_str())
            .with_writer(std::io::stderr)
            .init();
    }

    let users = match &config.users_file {
        Some(path) => load_users(path).context("load users dataset")?,
        None => {
            tracing::info!("USERS_FILE not set; using seed dataset");
            seed_users()
        }
    };

    let service = UserQueryService::new(&users);
    let report = UserReport::build(&service, &config.report);
    tracing::debug!(
        users = report.user_count,
        domains = report.users_by_email_domain.len(),
        total_balance = %report.total_balance,
        "report built"
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
