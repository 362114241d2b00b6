use daily_quote_schema::QuoteResponse;
use sqlx::FromRow;

/// A row of the `quotes` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct DbQuote {
    pub id: i64,
    pub author: String,
    pub text: String,
}

impl From<DbQuote> for QuoteResponse {
    fn from(row: DbQuote) -> Self {
        let DbQuote { id, author, text } = row;
        QuoteResponse { id, author, text }
    }
}
