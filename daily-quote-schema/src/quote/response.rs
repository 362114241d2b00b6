use serde::{Deserialize, Serialize};

/// A stored quote as returned by both `POST /quotes` and each element of `GET /quotes`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuoteResponse {
    pub id: i64,
    pub author: String,
    pub text: String,
}
