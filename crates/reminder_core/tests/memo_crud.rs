use chrono::{NaiveDate, NaiveTime};
use reminder_core::db::open_db_in_memory;
use reminder_core::{Memo, MemoRepository, MemoValidationError, RepoError, SqliteMemoRepository};

fn memo(user: &str, org: &str, title: &str, date: (i32, u32, u32), time: (u32, u32)) -> Memo {
    Memo::new(
        user,
        org,
        title,
        Some(format!("Contrat concerné : {title}")),
        NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        NaiveTime::from_hms_opt(time.0, time.1, 0).unwrap(),
    )
}

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMemoRepository::new(&conn);

    let created = memo("user-1", "org-1", "Suivi du rachat", (2026, 10, 16), (14, 5));
    let id = repo.create_memo(&created).unwrap();
    assert_eq!(id, created.id);

    let loaded = repo.get_memo(id).unwrap().unwrap();
    assert_eq!(loaded, created);
}

#[test]
fn stores_due_date_and_time_in_wire_format() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMemoRepository::new(&conn);

    let created = memo("user-1", "org-1", "RIA", (2026, 1, 5), (7, 3));
    repo.create_memo(&created).unwrap();

    let (due_date, due_time): (String, String) = conn
        .query_row(
            "SELECT due_date, due_time FROM memos WHERE id = ?1;",
            [created.id.to_string()],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(due_date, "2026-01-05");
    assert_eq!(due_time, "07:03");
}

#[test]
fn get_missing_memo_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMemoRepository::new(&conn);

    assert!(repo.get_memo(uuid::Uuid::new_v4()).unwrap().is_none());
}

#[test]
fn create_rejects_invalid_memo_before_sql() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMemoRepository::new(&conn);

    let invalid = memo("", "org-1", "Titre", (2026, 10, 16), (9, 0));
    let err = repo.create_memo(&invalid).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(MemoValidationError::EmptyUserId)
    ));

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM memos;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn duplicate_id_is_a_db_error() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMemoRepository::new(&conn);

    let created = memo("user-1", "org-1", "Titre", (2026, 10, 16), (9, 0));
    repo.create_memo(&created).unwrap();
    let err = repo.create_memo(&created).unwrap_err();
    assert!(matches!(err, RepoError::Db(_)));
}

#[test]
fn list_is_scoped_to_owner_and_sorted_by_due() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMemoRepository::new(&conn);

    let later = memo("user-1", "org-1", "later", (2026, 11, 6), (9, 0));
    let today_late = memo("user-1", "org-1", "today late", (2026, 10, 16), (18, 30));
    let today_early = memo("user-1", "org-1", "today early", (2026, 10, 16), (8, 15));
    let other_org = memo("user-1", "org-2", "other org", (2026, 10, 1), (8, 0));
    let other_user = memo("user-2", "org-1", "other user", (2026, 10, 1), (8, 0));
    for item in [&later, &today_late, &today_early, &other_org, &other_user] {
        repo.create_memo(item).unwrap();
    }

    let titles: Vec<String> = repo
        .list_memos("user-1", "org-1")
        .unwrap()
        .into_iter()
        .map(|item| item.title)
        .collect();
    assert_eq!(titles, vec!["today early", "today late", "later"]);
}

#[test]
fn corrupted_row_is_rejected_on_read() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMemoRepository::new(&conn);

    let created = memo("user-1", "org-1", "Titre", (2026, 10, 16), (9, 0));
    repo.create_memo(&created).unwrap();
    conn.execute(
        "UPDATE memos SET due_time = '9h' WHERE id = ?1;",
        [created.id.to_string()],
    )
    .unwrap();

    let err = repo.get_memo(created.id).unwrap_err();
    match err {
        RepoError::InvalidData(message) => assert!(message.contains("memos.due_time")),
        other => panic!("unexpected error: {other}"),
    }
}
