//! Query layer over the three relational tables: `users`, `items`, and
//! `warehouse_items` (see DESIGN.md for the expected schema). One function
//! per operation; write paths map SQLSTATE integrity errors to client
//! errors, read paths propagate storage failures as-is.

pub mod items;
pub mod pool;
pub mod users;
pub mod warehouse;

pub use pool::create_pool;
