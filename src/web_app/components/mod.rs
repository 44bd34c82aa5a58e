// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Loader, ErrorMessage, Card, etc.)
// - search.rs: Search box
// - manufacturer.rs: Manufacturer table and pagination
// - layout.rs: Shop layout and the permission gate

pub mod common;
pub mod layout;
pub mod manufacturer;
pub mod search;

// Re-export commonly used components for convenience
pub use common::*;
pub use layout::*;
pub use manufacturer::*;
pub use search::*;
