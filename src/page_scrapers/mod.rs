use scraper::{ElementRef, Html};

pub(crate) use self::browser::{BrowserSession, PageFetcher};
pub(crate) use self::companies::enumerate_companies;
pub(crate) use self::jobs::{extract_jobs, CompanyPage};
pub(crate) use self::keywords::TitleClassifier;

mod browser;
mod companies;
mod jobs;
mod keywords;


/// Element kinds tried on a company page, in priority order.
///
/// Job boards vary a lot in markup, so each kind is a guess at what wraps a single
/// posting. The first guess that finds anything wins.
pub(super) const DEFAULT_STRATEGIES: [ClassContains; 3] = [
    ClassContains { tag: "div", needle: "job" },
    ClassContains { tag: "a", needle: "job" },
    ClassContains { tag: "li", needle: "job" },
];


pub(super) trait ExtractionStrategy {
    fn name(&self) -> &'static str;

    /// Every element in `document` this strategy considers a job listing, in document order.
    ///
    /// An empty result means the strategy does not apply to this page.
    fn select<'a>(&self, document: &'a Html) -> Vec<ElementRef<'a>>;
}


/// Matches elements of one tag whose class attribute contains a substring, ignoring case
#[derive(Debug, Clone, Copy)]
pub(super) struct ClassContains {
    pub(super) tag: &'static str,
    pub(super) needle: &'static str
}


impl ExtractionStrategy for ClassContains {
    fn name(&self) -> &'static str {
        self.tag
    }

    fn select<'a>(&self, document: &'a Html) -> Vec<ElementRef<'a>> {
        document
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|x| x.value().name() == self.tag && class_contains(x, &[self.needle]))
            .collect()
    }
}


/// Runs each strategy in order and returns the first non-empty selection
pub(super) fn first_match<'a, S: ExtractionStrategy>(
    document: &'a Html,
    strategies: &[S]
) -> Option<(&'static str, Vec<ElementRef<'a>>)> {
    strategies
        .iter()
        .map(|x| (x.name(), x.select(document)))
        .find(|(_, selected)| !selected.is_empty())
}


pub(super) fn class_contains(element: &ElementRef, needles: &[&str]) -> bool {
    let Some(class) = element.value().attr("class") else {
        return false;
    };
    let class = class.to_lowercase();
    needles.iter().any(|x| class.contains(x))
}


/// Text of an element with each text node trimmed and blank ones dropped
pub(super) fn element_text(element: &ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|x| !x.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}


/// The first strict descendant of `element` (not `element` itself) that satisfies `predicate`
pub(super) fn find_descendant<'a>(
    element: &ElementRef<'a>,
    predicate: impl Fn(&ElementRef<'a>) -> bool
) -> Option<ElementRef<'a>> {
    element
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|x| predicate(x))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_non_empty_strategy_wins() {
        let document = Html::parse_document(r#"
            <ul>
                <li class="job-row">One</li>
                <li class="job-row">Two</li>
            </ul>
            <a class="JobLink" href="/x">Three</a>
        "#);
        let (name, selected) = first_match(&document, &DEFAULT_STRATEGIES).unwrap();
        assert_eq!(name, "a");
        assert_eq!(selected.len(), 1);
    }

    #[test]
    fn divs_take_priority_over_list_items() {
        let document = Html::parse_document(r#"
            <li class="job"><div class="jobs-card">A</div></li>
        "#);
        let (name, _) = first_match(&document, &DEFAULT_STRATEGIES).unwrap();
        assert_eq!(name, "div");
    }

    #[test]
    fn nothing_matches_without_job_classes() {
        let document = Html::parse_document("<div class=\"card\"><a href=\"/a\">A</a></div>");
        assert!(first_match(&document, &DEFAULT_STRATEGIES).is_none());
    }

    #[test]
    fn descendant_search_skips_the_element_itself() {
        let document = Html::parse_document(r#"<div class="job"> <span> Staff </span><span>Engineer</span></div>"#);
        let card = DEFAULT_STRATEGIES[0].select(&document)[0];
        assert!(find_descendant(&card, |x| x.value().name() == "div").is_none());
        assert!(find_descendant(&card, |x| x.value().name() == "span").is_some());
        assert_eq!(element_text(&card), "Staff Engineer");
    }
}
