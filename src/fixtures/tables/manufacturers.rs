// fixtures/tables/manufacturers.rs
//
// The `shop.manufacturers` table with a small catalogue of publishers and
// manufacturers. `created_at` values are distinct so "newest first" has a
// single correct order.

use crate::fixtures::TestTable;

/// Schema the admin queries read from
pub const SCHEMA: &str = "shop";

/// Number of rows inserted by `setup_sql`
pub const SEED_ROWS: i64 = 14;

/// Rows whose name contains "books" (case-insensitive)
pub const SEED_ROWS_MATCHING_BOOKS: i64 = 4;

/// Rows whose name contains "acme" (case-insensitive)
pub const SEED_ROWS_MATCHING_ACME: i64 = 2;

/// Name of the most recently created seed row
pub const NEWEST_SEED_NAME: &str = "Northwind Audio";

/// Creates the schema the admin queries read from
pub const CREATE_SCHEMA: &str = "CREATE SCHEMA IF NOT EXISTS shop";

/// Creates the manufacturers table
pub const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS shop.manufacturers (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        slug VARCHAR(255) NOT NULL UNIQUE,
        description TEXT,
        website VARCHAR(255),
        is_approved BOOLEAN NOT NULL DEFAULT false,
        products_count INTEGER NOT NULL DEFAULT 0,
        created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
    "#;

/// Index for the default ordering
pub const CREATE_INDEX: &str = r#"
    CREATE INDEX IF NOT EXISTS manufacturers_created_at_idx
    ON shop.manufacturers (created_at DESC)
    "#;

/// Inserts the demo rows; rows already present are left alone
pub const INSERT_SEED_ROWS: &str = r#"
    INSERT INTO shop.manufacturers
        (name, slug, description, website, is_approved, products_count, created_at, updated_at)
    VALUES
        ('Penguin Books', 'penguin-books', 'Paperback publisher founded in 1935', 'https://www.penguin.co.uk', true, 42, '2024-01-03 09:00:00', '2024-01-03 09:00:00'),
        ('Acme Tools', 'acme-tools', 'Hand and power tools', 'https://acme.example', true, 17, '2024-01-10 10:30:00', '2024-02-01 08:00:00'),
        ('Harper Books', 'harper-books', 'General trade publisher', 'https://harper.example', true, 25, '2024-02-14 12:00:00', '2024-02-14 12:00:00'),
        ('Acme Kitchen', 'acme-kitchen', 'Cookware and small appliances', NULL, false, 3, '2024-03-01 15:45:00', '2024-03-01 15:45:00'),
        ('Blue Finch Press', 'blue-finch-press', 'Independent poetry press', NULL, true, 8, '2024-03-22 08:15:00', '2024-03-22 08:15:00'),
        ('Orbit Electronics', 'orbit-electronics', 'Consumer electronics', 'https://orbit.example', true, 61, '2024-04-05 11:00:00', '2024-05-01 09:30:00'),
        ('Little Owl Books', 'little-owl-books', 'Children''s picture books', NULL, false, 0, '2024-04-19 16:20:00', '2024-04-19 16:20:00'),
        ('Granite Outdoor', 'granite-outdoor', 'Camping and hiking gear', 'https://granite.example', true, 33, '2024-05-07 07:50:00', '2024-05-07 07:50:00'),
        ('Vellum House', 'vellum-house', 'Academic publisher', NULL, true, 12, '2024-05-30 13:10:00', '2024-05-30 13:10:00'),
        ('Pixel Forge', 'pixel-forge', 'Gaming peripherals', 'https://pixelforge.example', false, 5, '2024-06-11 10:00:00', '2024-06-11 10:00:00'),
        ('Redleaf Books', 'redleaf-books', 'Cookbooks and food writing', NULL, true, 19, '2024-07-02 09:40:00', '2024-07-02 09:40:00'),
        ('Summit Apparel', 'summit-apparel', 'Outdoor clothing', 'https://summit.example', true, 28, '2024-07-25 14:05:00', '2024-07-25 14:05:00'),
        ('Tidewater Ceramics', 'tidewater-ceramics', 'Handmade tableware', NULL, false, 2, '2024-08-18 17:30:00', '2024-08-18 17:30:00'),
        ('Northwind Audio', 'northwind-audio', 'Headphones and speakers', 'https://northwind.example', true, 14, '2024-09-09 08:00:00', '2024-09-09 08:00:00')
    ON CONFLICT (slug) DO NOTHING
    "#;

const DDL: [&str; 3] = [CREATE_SCHEMA, CREATE_TABLE, CREATE_INDEX];
const SETUP: [&str; 4] = [CREATE_SCHEMA, CREATE_TABLE, CREATE_INDEX, INSERT_SEED_ROWS];

pub struct ManufacturersTable;

impl ManufacturersTable {
    /// Schema, table and index, without data
    pub fn ddl_sql() -> &'static [&'static str] {
        &DDL
    }

    pub fn seed_sql() -> &'static str {
        INSERT_SEED_ROWS
    }
}

impl TestTable for ManufacturersTable {
    fn setup_sql() -> &'static [&'static str] {
        &SETUP
    }

    fn teardown_sql() -> &'static [&'static str] {
        &["DROP TABLE IF EXISTS shop.manufacturers CASCADE"]
    }
}
