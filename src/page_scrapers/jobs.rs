use scraper::{ElementRef, Html};
use thiserror::Error;
use url::Url;

use crate::postings::JobPosting;

use super::{class_contains, element_text, find_descendant, first_match, TitleClassifier, DEFAULT_STRATEGIES};

const TITLE_TAGS: [&str; 4] = ["h2", "h3", "h4", "a"];
const LOCATION_CLASSES: [&str; 2] = ["location", "city"];
const UNKNOWN_LOCATION: &str = "Not specified";


/// Why a single job element could not be turned into a posting
#[derive(Debug, Error)]
pub(crate) enum ExtractError {
    #[error("link {href:?} does not resolve to a valid url: {source}")]
    InvalidUrl {
        href: String,
        #[source]
        source: url::ParseError
    }
}


/// The rendered job page of a single company
pub(crate) struct CompanyPage<'a> {
    pub(crate) company: &'a str,
    /// Where the html came from
    pub(crate) url: &'a str,
    pub(crate) html: &'a str
}


/// Every engineering job on a company page.
///
/// Elements that fail to extract are logged and skipped, the rest of the page is still used.
pub(crate) fn extract_jobs(page: &CompanyPage, base_url: &str, classifier: &TitleClassifier) -> Vec<JobPosting> {
    let document = Html::parse_document(page.html);
    let Some((strategy, elements)) = first_match(&document, &DEFAULT_STRATEGIES) else {
        tracing::debug!("No job-like elements found for {}", page.company);
        return Vec::new();
    };
    tracing::debug!("Matched {} <{strategy}> elements for {}", elements.len(), page.company);

    let mut jobs = Vec::new();
    for element in elements {
        match extract_posting(&element, page, base_url, classifier) {
            Ok(Some(job)) => {
                tracing::info!("  Found: {}", job.title);
                jobs.push(job);
            }
            Ok(None) => {}
            Err(e) => tracing::warn!("  Error parsing job element for {}: {e}", page.company)
        }
    }
    jobs
}


/// Ok(None) means the element is not an engineering job
fn extract_posting(
    element: &ElementRef,
    page: &CompanyPage,
    base_url: &str,
    classifier: &TitleClassifier
) -> Result<Option<JobPosting>, ExtractError> {
    let Some(title) = find_descendant(element, |x| TITLE_TAGS.contains(&x.value().name())) else {
        return Ok(None);
    };
    let title = element_text(&title);
    if !classifier.is_engineering(&title) {
        return Ok(None);
    }

    let location = find_descendant(element, |x| class_contains(x, &LOCATION_CLASSES))
        .map(|x| element_text(&x))
        .unwrap_or_else(|| UNKNOWN_LOCATION.to_string());

    let href = find_descendant(element, |x| x.value().name() == "a")
        .and_then(|x| x.value().attr("href"))
        .unwrap_or(page.url);
    let url = absolute_url(href, base_url);
    Url::parse(&url).map_err(|source| ExtractError::InvalidUrl { href: href.to_string(), source })?;

    Ok(Some(JobPosting {
        company: page.company.to_string(),
        title,
        location,
        url,
        scraped_from: page.url.to_string()
    }))
}


/// Links that do not start with `http` are appended to `base_url` as is
pub(crate) fn absolute_url(href: &str, base_url: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else {
        format!("{base_url}{href}")
    }
}
