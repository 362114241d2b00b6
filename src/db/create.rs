use daily_quote_schema::CreateQuoteRequest;

/// Columns supplied by the caller when inserting a quote. `id` is always assigned by SQLite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteCreate {
    pub author: String,
    pub text: String,
}

impl From<CreateQuoteRequest> for QuoteCreate {
    fn from(req: CreateQuoteRequest) -> Self {
        let CreateQuoteRequest { author, text } = req;
        QuoteCreate { author, text }
    }
}
