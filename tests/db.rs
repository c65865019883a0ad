mod common;

#[test]
fn pool_connects_to_migrated_db() {
    let test_db = common::TestDb::new();
    let pool = test_db.pool();
    let conn = pool.get();
    assert!(conn.is_ok());
}
