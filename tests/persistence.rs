//! End-to-end persistence scenario (S5): insert a row, close, reopen the
//! same file, and confirm `select_all` still returns it.

use bptree_db::storage::{Row, Table};
use tempfile::NamedTempFile;

#[test]
fn close_then_reopen_preserves_inserted_rows() {
    let file = NamedTempFile::new().unwrap();

    {
        let mut table = Table::open(file.path()).unwrap();
        table
            .insert(&Row::new(7, "seven", "seven@x").unwrap())
            .unwrap();
        table.close().unwrap();
    }

    let mut reopened = Table::open(file.path()).unwrap();
    let rows = reopened.select_all().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, 7);
    assert_eq!(rows[0].username_str(), "seven");
    assert_eq!(rows[0].email_str(), "seven@x");
}

#[test]
fn inserting_past_one_leaf_worth_of_rows_keeps_ascending_order_after_reopen() {
    let file = NamedTempFile::new().unwrap();
    let ids: Vec<u32> = (0..40).collect();

    {
        let mut table = Table::open(file.path()).unwrap();
        for &id in ids.iter().rev() {
            table
                .insert(&Row::new(id, "u", "e@e").unwrap())
                .unwrap();
        }
        table.close().unwrap();
    }

    let mut reopened = Table::open(file.path()).unwrap();
    let rows = reopened.select_all().unwrap();
    let got: Vec<u32> = rows.iter().map(|r| r.id).collect();
    assert_eq!(got, ids);
}
