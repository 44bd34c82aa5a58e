// web_app/state/mod.rs - Page view-models
//
// Plain Rust state machines driven by command messages. They hold no
// signals, so they are tested without a Leptos runtime; the page
// components wrap them in a signal and perform the requests they return.

pub mod manufacturer_list;
pub mod query_cache;

pub use manufacturer_list::{Command, FetchRequest, FetchStatus, ManufacturerListState};
pub use query_cache::QueryCache;
