use crate::models::{PriceSnapshot, NO_DATA_MESSAGE};
use crate::render;
use crate::state::AppState;
use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PriceResponse {
    pub current_price: f64,
    pub average_price_last_ten_minutes: f64,
    pub price_history: Vec<f64>,
}

#[derive(Debug, Serialize)]
pub struct NoDataResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PriceBody {
    Data(PriceResponse),
    NoData(NoDataResponse),
}

/// Browsers get the HTML page, everything else gets JSON. Both are 200 even
/// before the first fetch; the empty state is a message, not an error.
pub async fn get_price(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let snapshot = state.snapshot().await;

    if wants_html(&headers) {
        Html(render::price_page(&snapshot)).into_response()
    } else {
        Json(json_body(&snapshot)).into_response()
    }
}

fn wants_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .map(|accept| accept.contains("text/html"))
        .unwrap_or(false)
}

fn json_body(snapshot: &PriceSnapshot) -> PriceBody {
    match (snapshot.current_price, snapshot.average_price) {
        (Some(current_price), Some(average)) => PriceBody::Data(PriceResponse {
            current_price,
            average_price_last_ten_minutes: average,
            price_history: snapshot.history.clone(),
        }),
        _ => PriceBody::NoData(NoDataResponse {
            message: NO_DATA_MESSAGE,
        }),
    }
}
