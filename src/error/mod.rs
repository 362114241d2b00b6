mod quote;
mod validation;

pub use quote::{ApiErrorBody, ApiErrorObject, QuoteError};
pub use validation::ValidationError;
