// fixtures/mod.rs - Database fixtures
//
// A fixture is the SQL that brings a table into a known state. The DB
// tests, the `connection_test` binary and the server's first-run seeding
// all execute the same statements, so every one of them sees the same rows.

pub mod tables;

/// A table that can be created and populated from scratch
pub trait TestTable {
    /// The SQL commands to create and populate this table
    /// Returns a slice of SQL strings that should be executed in order
    fn setup_sql() -> &'static [&'static str];

    /// The SQL commands that remove the table again
    fn teardown_sql() -> &'static [&'static str];
}
