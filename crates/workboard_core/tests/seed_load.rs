use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use workboard_core::db::open_db_in_memory;
use workboard_core::seed::{BIDS_FILE, PEOPLE_FILE, WORK_ORDERS_FILE};
use workboard_core::{
    load_seed_dir, seed_from_dir, BidService, PersonDraft, PersonService, RepoError, SeedError,
    SqliteBidRepository, SqlitePersonRepository, SqliteWorkOrderRepository, WorkOrderService,
};

const PEOPLE: &str = r#"[
    {"id": 1, "first_name": "Ann", "last_name": "Lee", "age": 34, "email": "ann@example.com", "role": "customer", "phone": "+15550001"},
    {"id": 2, "first_name": "Bo", "last_name": "Park", "age": 41, "email": "bo@example.com", "role": "executor", "phone": "+15550002"}
]"#;

const WORK_ORDERS: &str = r#"[
    {"id": 1, "name": "Fence", "description": "Paint the fence", "start_date": "02/09/2021", "end_date": "03/01/2021", "address": "1 Oak Lane", "price": 3000, "customer_id": 1, "executor_id": 2}
]"#;

const BIDS: &str = r#"[
    {"id": 1, "order_id": 1, "executor_id": 2}
]"#;

fn write_seed(dir: &Path, people: &str, work_orders: &str, bids: &str) {
    fs::write(dir.join(PEOPLE_FILE), people).unwrap();
    fs::write(dir.join(WORK_ORDERS_FILE), work_orders).unwrap();
    fs::write(dir.join(BIDS_FILE), bids).unwrap();
}

#[test]
fn load_seed_dir_parses_month_first_dates() {
    let dir = tempfile::tempdir().unwrap();
    write_seed(dir.path(), PEOPLE, WORK_ORDERS, BIDS);

    let seed = load_seed_dir(dir.path()).unwrap();
    assert_eq!(seed.people.len(), 2);
    assert_eq!(seed.people[0].id, Some(1));
    assert_eq!(seed.people[0].draft.role.as_deref(), Some("customer"));

    let order = &seed.work_orders[0].draft;
    assert_eq!(order.start_date, NaiveDate::from_ymd_opt(2021, 2, 9));
    assert_eq!(order.end_date, NaiveDate::from_ymd_opt(2021, 3, 1));
    assert_eq!(seed.bids[0].draft.order_id, Some(1));
}

#[test]
fn seeding_twice_yields_identical_records() {
    let dir = tempfile::tempdir().unwrap();
    write_seed(dir.path(), PEOPLE, WORK_ORDERS, BIDS);
    let mut conn = open_db_in_memory().unwrap();

    let first = seed_from_dir(&mut conn, dir.path()).unwrap();
    let people_first = PersonService::new(SqlitePersonRepository::new(&conn))
        .list()
        .unwrap();
    let orders_first = WorkOrderService::new(SqliteWorkOrderRepository::new(&conn))
        .list()
        .unwrap();

    let second = seed_from_dir(&mut conn, dir.path()).unwrap();
    let people_second = PersonService::new(SqlitePersonRepository::new(&conn))
        .list()
        .unwrap();
    let orders_second = WorkOrderService::new(SqliteWorkOrderRepository::new(&conn))
        .list()
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(first.people, 2);
    assert_eq!(first.work_orders, 1);
    assert_eq!(first.bids, 1);
    assert_eq!(people_first, people_second);
    assert_eq!(orders_first, orders_second);
}

#[test]
fn seeding_replaces_records_created_at_runtime() {
    let dir = tempfile::tempdir().unwrap();
    write_seed(dir.path(), PEOPLE, WORK_ORDERS, BIDS);
    let mut conn = open_db_in_memory().unwrap();

    PersonService::new(SqlitePersonRepository::new(&conn))
        .create(&PersonDraft::new("Temp", "Row"))
        .unwrap();
    seed_from_dir(&mut conn, dir.path()).unwrap();

    let people = PersonService::new(SqlitePersonRepository::new(&conn))
        .list()
        .unwrap();
    assert_eq!(people.len(), 2);
    assert!(people.iter().all(|person| person.first_name != "Temp"));

    let next = PersonService::new(SqlitePersonRepository::new(&conn))
        .create(&PersonDraft::new("Cy", "Moss"))
        .unwrap();
    assert_eq!(next.id, 3);
}

#[test]
fn rows_without_ids_get_assigned_ones() {
    let dir = tempfile::tempdir().unwrap();
    write_seed(
        dir.path(),
        r#"[{"first_name": "Ann", "last_name": "Lee"}]"#,
        "[]",
        "[]",
    );
    let mut conn = open_db_in_memory().unwrap();

    let summary = seed_from_dir(&mut conn, dir.path()).unwrap();
    assert_eq!(summary.people, 1);

    let people = PersonService::new(SqlitePersonRepository::new(&conn))
        .list()
        .unwrap();
    assert_eq!(people[0].id, 1);
}

#[test]
fn missing_seed_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(PEOPLE_FILE), PEOPLE).unwrap();

    let err = load_seed_dir(dir.path()).unwrap_err();
    assert!(matches!(err, SeedError::Io { path, .. } if path.ends_with(WORK_ORDERS_FILE)));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    write_seed(dir.path(), "{not json", WORK_ORDERS, BIDS);

    let err = load_seed_dir(dir.path()).unwrap_err();
    assert!(matches!(err, SeedError::Parse { path, .. } if path.ends_with(PEOPLE_FILE)));
}

#[test]
fn iso_date_in_seed_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write_seed(
        dir.path(),
        PEOPLE,
        r#"[{"name": "Fence", "description": "Paint", "start_date": "2021-02-09"}]"#,
        BIDS,
    );

    let err = load_seed_dir(dir.path()).unwrap_err();
    assert!(matches!(
        err,
        SeedError::InvalidDate {
            field: "start_date",
            ..
        }
    ));
}

#[test]
fn failed_seed_keeps_previous_state() {
    let good = tempfile::tempdir().unwrap();
    write_seed(good.path(), PEOPLE, WORK_ORDERS, BIDS);
    let dangling = tempfile::tempdir().unwrap();
    write_seed(
        dangling.path(),
        PEOPLE,
        WORK_ORDERS,
        r#"[{"id": 1, "order_id": 99, "executor_id": 2}]"#,
    );
    let mut conn = open_db_in_memory().unwrap();
    seed_from_dir(&mut conn, good.path()).unwrap();

    let err = seed_from_dir(&mut conn, dangling.path()).unwrap_err();
    assert!(matches!(err, SeedError::Store(RepoError::Reference { .. })));

    let bids = BidService::new(SqliteBidRepository::new(&conn))
        .list()
        .unwrap();
    assert_eq!(bids.len(), 1);
    assert_eq!(bids[0].order_id, 1);
}
