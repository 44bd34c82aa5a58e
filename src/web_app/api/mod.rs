// web_app/api/mod.rs - API module for server-side logic
//
// This module contains the database pool and the manufacturer queries
// behind the server functions.

pub mod queries;

pub mod db;
