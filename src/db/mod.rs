//! Database module: the storage accessor for quotes.
//!
//! Layout:
//! - `schema.rs`: SQL DDL applied at startup
//! - `models.rs`: the `quotes` row
//! - `create.rs`: insert payload
//! - `page.rs`: validated offset/limit window
//! - `store.rs`: `QuoteStore` trait and its SQLite implementation

pub mod models;
pub mod schema;
pub mod store;

mod create;
mod page;

pub use create::QuoteCreate;
pub use models::DbQuote;
pub use page::{MAX_PAGE_LIMIT, Page};
pub use schema::SQLITE_INIT;
pub use store::{QuoteStore, SqliteQuoteStore};
