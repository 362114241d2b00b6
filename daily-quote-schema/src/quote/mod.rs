//! Wire shapes for the `/quotes` resource.
//!
//! These types describe only what crosses the HTTP boundary. They are deliberately
//! independent from the storage row so that either side can evolve on its own.

mod query;
mod request;
mod response;

pub use query::ListQuotesQuery;
pub use request::CreateQuoteRequest;
pub use response::QuoteResponse;
