use crate::db::Page;
use crate::error::{QuoteError, ValidationError};
use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::{header::CONTENT_TYPE, request::Parts},
};
use daily_quote_schema::{CreateQuoteRequest, ListQuotesQuery};

/// Body of `POST /quotes`, rejected with 422 when it is not a JSON object carrying
/// string `author` and `text`.
///
/// A request without `Content-Type` is still parsed as JSON; any other non-JSON content
/// type is rejected.
pub struct QuoteBody(pub CreateQuoteRequest);

impl<S> FromRequest<S> for QuoteBody
where
    S: Send + Sync,
{
    type Rejection = QuoteError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if req.headers().contains_key(CONTENT_TYPE) {
            let Json(body) = Json::<CreateQuoteRequest>::from_request(req, state)
                .await
                .map_err(ValidationError::from)?;
            return Ok(QuoteBody(body));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(ValidationError::from)?;
        let Json(body) =
            Json::<CreateQuoteRequest>::from_bytes(&bytes).map_err(ValidationError::from)?;
        Ok(QuoteBody(body))
    }
}

/// `offset`/`limit` of `GET /quotes`, defaulted and checked against the page ceiling.
pub struct PageQuery(pub Page);

impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = QuoteError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<ListQuotesQuery>::from_request_parts(parts, state)
            .await
            .map_err(ValidationError::from)?;
        Ok(PageQuery(Page::new(query.offset, query.limit)?))
    }
}
