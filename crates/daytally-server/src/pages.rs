//! Counter page routes.
//!
//! Every route increments its own kind for today, then reads all three
//! counts and renders the same page.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};
use chrono::NaiveDate;

use daytally_core::error::DayTallyError;
use daytally_core::EventKind;

use crate::app_state::AppState;
use crate::error::HttpError;

#[derive(Debug, Template)]
#[template(path = "index.html")]
pub struct CounterPage {
    pub date: NaiveDate,
    pub visits: u64,
    pub comments: u64,
    pub likes: u64,
}

impl IntoResponse for CounterPage {
    fn into_response(self) -> Response {
        match self.render() {
            Ok(body) => Html(body).into_response(),
            Err(e) => HttpError::from(DayTallyError::Internal(format!("render failed: {e}")))
                .into_response(),
        }
    }
}

/// `GET /`
pub async fn index(State(state): State<AppState>) -> Result<CounterPage, HttpError> {
    tally(&state, EventKind::Visit).await
}

/// `GET /comment/`
pub async fn comment(State(state): State<AppState>) -> Result<CounterPage, HttpError> {
    tally(&state, EventKind::Comment).await
}

/// `GET /like/`
pub async fn like(State(state): State<AppState>) -> Result<CounterPage, HttpError> {
    tally(&state, EventKind::Like).await
}

/// Increment `kind` for today, then read back all three of today's counts.
async fn tally(state: &AppState, kind: EventKind) -> Result<CounterPage, HttpError> {
    let today = state.today();
    state.metrics().page_requests.inc(&[("kind", kind.as_str())]);

    state.record_and_increment(kind, today).await?;

    let page = CounterPage {
        date: today,
        visits: state.get_count(EventKind::Visit, today).await?,
        comments: state.get_count(EventKind::Comment, today).await?,
        likes: state.get_count(EventKind::Like, today).await?,
    };
    tracing::info!(%kind, date = %today, visits = page.visits, comments = page.comments, likes = page.likes, "page served");
    Ok(page)
}
