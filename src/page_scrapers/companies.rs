use fxhash::FxHashSet;
use scraper::{ElementRef, Html};


/// Company identifiers linked from the portfolio listing page.
///
/// An identifier is whatever follows the last `company_path` in an anchor's href, e.g.
/// `acme` for `https://jobs.a16z.com/jobs/acme`. The result keeps the order companies first
/// appear in and holds no duplicates. An empty result means the page had nothing to scrape.
pub(crate) fn enumerate_companies(html: &str, company_path: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut seen = FxHashSet::default();
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|x| x.value().name() == "a")
        .filter_map(|x| x.value().attr("href"))
        .filter_map(|href| company_id(href, company_path))
        .filter(|id| seen.insert(id.clone()))
        .collect()
}


fn company_id(href: &str, company_path: &str) -> Option<String> {
    let (_, id) = href.rsplit_once(company_path)?;
    let id = id.trim_end_matches('/');
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}
