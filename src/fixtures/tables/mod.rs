// fixtures/tables/mod.rs
//
// One module per fixture table, each implementing `TestTable`.

pub mod manufacturers;

pub use manufacturers::ManufacturersTable;
