use std::{fs::File, io::{BufReader, BufWriter, Write}, path::Path};

use thiserror::Error;

use crate::postings::JobPosting;


#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error("{path} does not exist. Run a scrape first")]
    Missing { path: String },
    #[error("failed to access {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error
    },
    #[error("{path} is not a valid job list")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error
    },
    #[error("failed to write {path}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error
    }
}


fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
    move |source| StoreError::Io { path: path.display().to_string(), source }
}


/// Replaces whatever is at `path` with the full job list as pretty printed json
pub(crate) fn save_json(jobs: &[JobPosting], path: &Path) -> Result<(), StoreError> {
    let file = File::create(path).map_err(io_error(path))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, jobs)
        .map_err(|source| StoreError::Json { path: path.display().to_string(), source })?;
    writer.flush().map_err(io_error(path))
}


/// Writes a csv copy of the job list. Returns false and writes nothing when there are no jobs.
pub(crate) fn save_csv(jobs: &[JobPosting], path: &Path) -> Result<bool, StoreError> {
    if jobs.is_empty() {
        return Ok(false);
    }
    let csv_error = |source| StoreError::Csv { path: path.display().to_string(), source };
    let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;
    for job in jobs {
        writer.serialize(job).map_err(csv_error)?;
    }
    writer.flush().map_err(io_error(path))?;
    Ok(true)
}


/// Reads the job list, failing if it is missing or unreadable
pub(crate) fn load_jobs(path: &Path) -> Result<Vec<JobPosting>, StoreError> {
    if !path.exists() {
        return Err(StoreError::Missing { path: path.display().to_string() });
    }
    let file = File::open(path).map_err(io_error(path))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|source| StoreError::Json { path: path.display().to_string(), source })
}


/// Reads the job list for display, never failing.
///
/// A missing file yields the single placeholder posting and an unreadable one yields
/// nothing. Both cases are logged.
pub(crate) fn load_jobs_or_placeholder(path: &Path) -> Vec<JobPosting> {
    match load_jobs(path) {
        Ok(jobs) => jobs,
        Err(StoreError::Missing { .. }) => {
            tracing::warn!("{} not found, serving placeholder data", path.display());
            vec![JobPosting::placeholder()]
        }
        Err(e) => {
            tracing::warn!("Error loading jobs data: {e}");
            Vec::new()
        }
    }
}


#[cfg(test)]
mod tests {
    use crate::postings::posting;

    use super::*;

    #[test]
    fn saved_json_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.json");
        let jobs = vec![posting("acme", "Backend Engineer", "NY"), posting("acme", "Backend Engineer", "NY")];

        save_json(&jobs, &path).unwrap();

        assert_eq!(load_jobs(&path).unwrap(), jobs);
    }

    #[test]
    fn saving_replaces_the_previous_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.json");
        save_json(&[posting("acme", "SDE", "NY"), posting("globex", "SDE", "NY")], &path).unwrap();
        save_json(&[posting("initech", "SDE", "NY")], &path).unwrap();

        let jobs = load_jobs(&path).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].company, "initech");
    }

    #[test]
    fn missing_file_is_a_placeholder_for_display_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        assert!(matches!(load_jobs(&path), Err(StoreError::Missing { .. })));
        assert_eq!(load_jobs_or_placeholder(&path), vec![JobPosting::placeholder()]);
    }

    #[test]
    fn corrupt_file_is_empty_for_display_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.json");
        std::fs::write(&path, "[{\"company\": ").unwrap();

        assert!(matches!(load_jobs(&path), Err(StoreError::Json { .. })));
        assert!(load_jobs_or_placeholder(&path).is_empty());
    }

    #[test]
    fn csv_has_a_header_and_one_row_per_job() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.csv");
        let jobs = vec![posting("acme", "Engineer, Platform", "New York, NY")];

        assert!(save_csv(&jobs, &path).unwrap());

        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("company,title,location,url,scraped_from"));
        assert!(lines.next().unwrap().starts_with("acme,\"Engineer, Platform\",\"New York, NY\","));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn csv_is_skipped_without_jobs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.csv");
        assert!(!save_csv(&[], &path).unwrap());
        assert!(!path.exists());
    }
}
