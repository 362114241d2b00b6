use super::extract::{PageQuery, QuoteBody};
use crate::error::QuoteError;
use crate::server::router::QuoteState;
use axum::{Json, extract::State};
use daily_quote_schema::QuoteResponse;
use tracing::debug;

/// POST /quotes
pub async fn create_quote(
    State(state): State<QuoteState>,
    QuoteBody(body): QuoteBody,
) -> Result<Json<QuoteResponse>, QuoteError> {
    let created = state.store.insert(body.into()).await?;
    debug!(id = created.id, "quote created");
    Ok(Json(created.into()))
}

/// GET /quotes
///
/// A zero `limit` is answered without touching storage.
pub async fn list_quotes(
    State(state): State<QuoteState>,
    PageQuery(page): PageQuery,
) -> Result<Json<Vec<QuoteResponse>>, QuoteError> {
    if page.is_empty() {
        return Ok(Json(Vec::new()));
    }

    let rows = state.store.list(page).await?;
    Ok(Json(rows.into_iter().map(QuoteResponse::from).collect()))
}
