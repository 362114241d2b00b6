use crate::server::router::QuoteState;
use axum::{Router, routing::get};

pub mod extract;
pub mod handlers;

pub fn router() -> Router<QuoteState> {
    Router::new().route(
        "/quotes",
        get(handlers::list_quotes).post(handlers::create_quote),
    )
}
