use std::{path::PathBuf, sync::Arc};

use crate::{postings::JobPosting, store};


/// Only knows where the job list lives. Every request reads it again, so a new scrape
/// shows up without restarting the server.
#[derive(Debug, Clone)]
pub(crate) struct AppState {
    pub(crate) jobs_path: Arc<PathBuf>
}


impl AppState {
    pub(crate) fn new(jobs_path: PathBuf) -> Self {
        Self { jobs_path: Arc::new(jobs_path) }
    }

    pub(crate) async fn jobs(&self) -> Vec<JobPosting> {
        let path = self.jobs_path.clone();
        tokio_rayon::spawn(move || store::load_jobs_or_placeholder(&path)).await
    }
}
