// web_app/pages/mod.rs - Page components module
//
// - ManufacturersPage: searchable, paginated manufacturer list of a shop

pub mod manufacturers;

pub use manufacturers::ManufacturersPage;
