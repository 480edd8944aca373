use thiserror::Error;

use crate::{
    config::ScrapeConfig,
    page_scrapers::{enumerate_companies, extract_jobs, CompanyPage, PageFetcher, TitleClassifier},
    postings::{jobs_by_company, JobPosting}
};


#[derive(Debug, Error)]
pub(crate) enum ScrapeError {
    #[error("failed to load the company listing at {url}")]
    Listing {
        url: String,
        #[source]
        source: anyhow::Error
    },
    #[error("no companies found at {0}. The page structure might have changed")]
    NoCompanies(String),
    #[error("invalid keyword list")]
    Keywords(#[from] regex::Error)
}


/// Scrapes every company listed on the job board, one after another.
///
/// Companies whose page fails to load contribute no jobs. The politeness delay is slept
/// after every company, independently of any waiting the fetcher does.
pub(crate) fn scrape_all_jobs<F: PageFetcher>(fetcher: &F, config: &ScrapeConfig) -> Result<Vec<JobPosting>, ScrapeError> {
    let classifier = TitleClassifier::new(&config.keywords)?;

    tracing::info!("Fetching companies list...");
    let listing_url = config.companies_url();
    let listing = fetcher
        .fetch(&listing_url)
        .map_err(|source| ScrapeError::Listing { url: listing_url.clone(), source })?;
    let companies = enumerate_companies(&listing, &config.company_path);
    if companies.is_empty() {
        return Err(ScrapeError::NoCompanies(listing_url));
    }
    tracing::info!("Found {} companies", companies.len());

    let mut all_jobs = Vec::new();
    for company in &companies {
        let jobs = scrape_company_jobs(fetcher, config, &classifier, company);
        tracing::info!("Found {} SDE jobs at {company}", jobs.len());
        all_jobs.extend(jobs);
        std::thread::sleep(config.politeness_delay());
    }
    Ok(all_jobs)
}


fn scrape_company_jobs<F: PageFetcher>(
    fetcher: &F,
    config: &ScrapeConfig,
    classifier: &TitleClassifier,
    company: &str
) -> Vec<JobPosting> {
    tracing::info!("Scraping jobs for {company}...");
    let url = config.company_url(company);
    match fetcher.fetch(&url) {
        Ok(html) => {
            let page = CompanyPage { company, url: &url, html: &html };
            extract_jobs(&page, &config.base_url, classifier)
        }
        Err(e) => {
            tracing::warn!("Error scraping {company}: {e:#}");
            Vec::new()
        }
    }
}


/// The console report printed once a scrape finishes
pub(crate) fn summary(jobs: &[JobPosting]) -> String {
    let rule = "=".repeat(60);
    let mut out = format!("\n{rule}\nSUMMARY: Found {} total SDE jobs\n{rule}\n", jobs.len());

    out.push_str("\nJobs by company:\n");
    for (company, count) in jobs_by_company(jobs) {
        out.push_str(&format!("  {company}: {count} jobs\n"));
    }

    if !jobs.is_empty() {
        out.push_str("\nExample jobs:\n");
    }
    for job in jobs.iter().take(5) {
        out.push_str(&format!(
            "\n  Company: {}\n  Title: {}\n  Location: {}\n  URL: {}\n",
            job.company, job.title, job.location, job.url
        ));
    }
    out
}
