use fxhash::FxHashSet;
use serde::{Deserialize, Serialize};


/// A single engineering job found on a company's job page.
///
/// Every field is plain text. `url` is always absolute, relative links are resolved
/// against the job board's base URL during extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct JobPosting {
    pub(crate) company: String,
    pub(crate) title: String,
    pub(crate) location: String,
    /// Where to apply
    pub(crate) url: String,
    /// The company page this posting was read from
    pub(crate) scraped_from: String
}


impl JobPosting {
    /// The record served by the dashboard when no scrape has been persisted yet.
    pub(crate) fn placeholder() -> Self {
        Self {
            company: "Example Company".into(),
            title: "Software Engineer".into(),
            location: "San Francisco, CA".into(),
            url: "https://example.com/job".into(),
            scraped_from: "https://jobs.a16z.com/jobs/example".into()
        }
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Stats {
    pub(crate) total_jobs: usize,
    pub(crate) total_companies: usize,
    pub(crate) total_locations: usize
}


impl Stats {
    pub(crate) fn from_jobs(jobs: &[JobPosting]) -> Self {
        let companies: FxHashSet<&str> = jobs.iter().map(|job| job.company.as_str()).collect();
        let locations: FxHashSet<&str> = jobs.iter().map(|job| job.location.as_str()).collect();
        Self {
            total_jobs: jobs.len(),
            total_companies: companies.len(),
            total_locations: locations.len()
        }
    }
}


/// Job counts per company, highest first. Ties keep the order companies were first seen in.
pub(crate) fn jobs_by_company(jobs: &[JobPosting]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for job in jobs {
        match counts.iter_mut().find(|(company, _)| *company == job.company) {
            Some((_, count)) => *count += 1,
            None => counts.push((job.company.clone(), 1))
        }
    }
    // sort_by is stable
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}


#[cfg(test)]
pub(crate) fn posting(company: &str, title: &str, location: &str) -> JobPosting {
    JobPosting {
        company: company.into(),
        title: title.into(),
        location: location.into(),
        url: format!("https://jobs.example.com/{company}/apply"),
        scraped_from: format!("https://jobs.example.com/jobs/{company}")
    }
}
