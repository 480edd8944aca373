use askama::Template;
use axum::{extract::State, response::Html, Json};

use crate::postings::{JobPosting, Stats};

use super::{error::DashboardError, state::AppState};


#[derive(Template)]
#[template(path = "dashboard.html")]
pub(crate) struct DashboardPage {
    /// Already escaped for use inside a script tag
    pub(crate) jobs_json: String,
    pub(crate) stats: Stats
}


/// Json that cannot close the surrounding script tag.
///
/// `<` only ever appears inside json strings, where `\u003c` means the same thing.
fn script_json(jobs: &[JobPosting]) -> serde_json::Result<String> {
    Ok(serde_json::to_string(jobs)?.replace('<', "\\u003c"))
}


pub(crate) async fn index(State(state): State<AppState>) -> Result<Html<String>, DashboardError> {
    let jobs = state.jobs().await;
    let page = DashboardPage {
        jobs_json: script_json(&jobs)?,
        stats: Stats::from_jobs(&jobs)
    };
    Ok(Html(page.render()?))
}


pub(crate) async fn jobs(State(state): State<AppState>) -> Json<Vec<JobPosting>> {
    Json(state.jobs().await)
}


pub(crate) async fn stats(State(state): State<AppState>) -> Json<Stats> {
    Json(Stats::from_jobs(&state.jobs().await))
}


pub(crate) async fn livez() {
    tracing::debug!("service is live");
}
