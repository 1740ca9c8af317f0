use std::path::Path;

use bigdecimal::BigDecimal;
use rstest::{fixture, rstest};
use time::Month;
use user_queries::users::repo::{load_users, parse_users, seed_users};
use user_queries::users::{User, UserQueryService};

const SEED_JSON: &str = r#"[
  {"id":1,"firstName":"Justin","lastName":"Butler","email":"justin.butler@gmail.com","balance":"172966","birthDay":"2003-04-17","createdOn":"2016-06-13"},
  {"id":2,"firstName":"Olivia","lastName":"Cardenas","email":"cardenas@mail.com","balance":"38029","birthDay":"1930-01-19","createdOn":"2014-06-21"},
  {"id":3,"firstName":"Nolan","lastName":"Donovan","email":"nolandonovan@gmail.com","balance":"13889","birthDay":"1925-04-19","createdOn":"2011-03-10"},
  {"id":4,"firstName":"Lucas","lastName":"Lynn","email":"lucas.lynn@yahoo.com","balance":"16980","birthDay":"1987-05-25","createdOn":"2009-03-05"}
]"#;

#[fixture]
fn users() -> Vec<User> {
    parse_users(SEED_JSON).expect("seed json parses")
}

fn ids(users: &[&User]) -> Vec<i64> {
    users.iter().map(|u| u.id).collect()
}

#[rstest]
fn json_dataset_matches_built_in_seed(users: Vec<User>) {
    assert_eq!(users, seed_users());
}

#[rstest]
fn seed_scenario(users: Vec<User>) {
    let service = UserQueryService::new(&users);

    assert_eq!(service.find_richest_user().map(|u| u.first_name.as_str()), Some("Justin"));
    assert_eq!(ids(&service.find_users_by_birthday_month(Month::April)), vec![1, 3]);
    assert_eq!(service.calculate_total_balance(), BigDecimal::from(241864_i64));

    let groups = service.group_users_by_email_domain();
    assert_eq!(groups.len(), 3);
    assert_eq!(ids(&groups["gmail.com"]), vec![1, 3]);
    assert_eq!(ids(&groups["mail.com"]), vec![2]);
    assert_eq!(ids(&groups["yahoo.com"]), vec![4]);

    assert_eq!(ids(&service.sort_by_first_and_last_names()), vec![1, 4, 3, 2]);

    assert!(service.contains_user_with_email_domain("gmail.com"));
    assert!(service.contains_user_with_email_domain("yahoo.com"));
    assert!(!service.contains_user_with_email_domain("blr.by"));

    assert_eq!(service.get_balance_by_email("cardenas@mail.com"), Ok(&BigDecimal::from(38029_i64)));
    let err = service.get_balance_by_email("fake@mail.com").unwrap_err();
    assert_eq!(err.to_string(), "Cannot find User by email=fake@mail.com");

    let by_id = service.collect_users_by_id();
    for user in &users {
        assert_eq!(by_id[&user.id], user);
    }

    let names = service.group_first_names_by_last_names();
    assert_eq!(names.len(), 4);
    assert!(names["Butler"].contains("Justin"));
    assert_eq!(names["Butler"].len(), 1);
}

#[test]
fn bundled_dataset_file_loads_as_seed() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/users.json");
    let users = load_users(&path).expect("bundled dataset loads");
    assert_eq!(users, seed_users());

    let service = UserQueryService::new(&users);
    assert_eq!(service.calculate_total_balance(), BigDecimal::from(241864_i64));
}
