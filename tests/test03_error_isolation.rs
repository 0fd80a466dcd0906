use sqlite_batch_core::prelude::*;

#[test]
fn syntax_error_reports_message_and_later_entries_run() {
    let conn = open_in_memory().unwrap();

    let results = execute_batch(
        &conn,
        &[
            StatementEntry::new_without_params("CREATE TABLE t(a)"),
            StatementEntry::new_without_params("SELEKT * FROM t"),
            StatementEntry::positional("INSERT INTO t VALUES(?)", vec![ScalarValue::Number(1.0)]),
        ],
    );

    let message = results[1].error_message().unwrap();
    assert!(!message.is_empty());

    // The failed entry left the change counter untouched: the insert after it
    // still reports exactly one cumulative change.
    let insert = results[2].as_write().unwrap();
    assert_eq!(insert.rows_affected, 1);
    assert_eq!(insert.total_changes, 1);
}

#[test]
fn missing_table_fails_at_prepare_time() {
    let conn = open_in_memory().unwrap();

    let results = execute_batch(
        &conn,
        &[
            StatementEntry::new_without_params("SELECT * FROM nowhere"),
            StatementEntry::new_without_params("CREATE TABLE nowhere(a)"),
            StatementEntry::new_without_params("SELECT * FROM nowhere"),
        ],
    );

    assert!(results[0].error_message().is_some());
    assert!(results[1].as_write().is_some());
    // Once the table exists, the same SELECT succeeds (empty result set
    // reports the write shape with nothing changed).
    let empty = results[2].as_write().unwrap();
    assert_eq!(empty.rows_affected, 0);
}

#[test]
fn constraint_violation_fails_at_step_time() {
    let conn = open_in_memory().unwrap();

    let results = execute_batch(
        &conn,
        &[
            StatementEntry::new_without_params("CREATE TABLE u(a UNIQUE)"),
            StatementEntry::positional("INSERT INTO u VALUES(?)", vec![ScalarValue::Number(1.0)]),
            StatementEntry::positional("INSERT INTO u VALUES(?)", vec![ScalarValue::Number(1.0)]),
            StatementEntry::positional("INSERT INTO u VALUES(?)", vec![ScalarValue::Number(2.0)]),
        ],
    );

    assert_eq!(results[1].as_write().unwrap().rows_affected, 1);
    // The duplicate prepares and binds fine; the failure surfaces on step.
    let message = results[2].error_message().unwrap();
    assert!(message.contains("UNIQUE"));
    // And the batch kept going.
    let after = results[3].as_write().unwrap();
    assert_eq!(after.rows_affected, 1);
    assert_eq!(after.total_changes, 2);
}

#[test]
fn empty_select_reports_write_shape() {
    let conn = open_in_memory().unwrap();

    let results = execute_batch(
        &conn,
        &[
            StatementEntry::new_without_params("CREATE TABLE t(a)"),
            StatementEntry::new_without_params("SELECT * FROM t"),
        ],
    );

    // No row was ever produced, so the entry completes on the write path.
    let empty = results[1].as_write().unwrap();
    assert_eq!(empty.rows_affected, 0);
}

#[test]
fn update_and_delete_report_rows_affected() {
    let conn = open_in_memory().unwrap();

    let results = execute_batch(
        &conn,
        &[
            StatementEntry::new_without_params("CREATE TABLE t(a)"),
            StatementEntry::new_without_params("INSERT INTO t VALUES(1), (2), (3)"),
            StatementEntry::positional(
                "UPDATE t SET a = a + 10 WHERE a < ?",
                vec![ScalarValue::Number(3.0)],
            ),
            StatementEntry::new_without_params("DELETE FROM t"),
        ],
    );

    assert_eq!(results[1].as_write().unwrap().rows_affected, 3);
    let update = results[2].as_write().unwrap();
    assert_eq!(update.rows_affected, 2);
    assert_eq!(update.total_changes, 5);
    let delete = results[3].as_write().unwrap();
    assert_eq!(delete.rows_affected, 3);
    assert_eq!(delete.total_changes, 8);
}

#[test]
fn last_insert_rowid_tracks_most_recent_insert() {
    let conn = open_in_memory().unwrap();

    let results = execute_batch(
        &conn,
        &[
            StatementEntry::new_without_params("CREATE TABLE t(a)"),
            StatementEntry::positional("INSERT INTO t VALUES(?)", vec![ScalarValue::Number(1.0)]),
            StatementEntry::positional("INSERT INTO t VALUES(?)", vec![ScalarValue::Number(2.0)]),
        ],
    );

    assert_eq!(results[1].as_write().unwrap().last_insert_rowid, 1);
    assert_eq!(results[2].as_write().unwrap().last_insert_rowid, 2);
}
