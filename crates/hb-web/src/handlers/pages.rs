//! Page listing handler

use axum::{extract::State, response::Json};
use hb_core::Page;
use serde::Serialize;
use std::sync::Arc;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PageSummary {
    pub id: Page,
    pub title: &'static str,
    pub heading: String,
}

#[derive(Debug, Serialize)]
pub struct PagesResponse {
    pub organization: String,
    pub pages: Vec<PageSummary>,
}

/// GET /api/pages - The five client-side views, in navigation order
pub async fn list_pages_handler(State(state): State<Arc<AppState>>) -> Json<PagesResponse> {
    let pages = Page::ALL
        .into_iter()
        .map(|page| PageSummary {
            id: page,
            title: page.title(),
            heading: state.content.page_copy(page).heading.clone(),
        })
        .collect();

    Json(PagesResponse {
        organization: state.content.organization.name.clone(),
        pages,
    })
}
