pub mod quote;

pub use quote::{CreateQuoteRequest, ListQuotesQuery, QuoteResponse};
