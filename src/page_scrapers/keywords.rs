use regex::{Regex, RegexBuilder};


/// Decides whether a job title names an engineering role.
///
/// A title matches when it contains any of the keywords as a substring, ignoring case.
/// There is no word-boundary check, so "Sales Engineer" counts as well.
#[derive(Debug, Clone)]
pub(crate) struct TitleClassifier {
    /// None when there are no keywords, which matches nothing
    pattern: Option<Regex>
}


impl TitleClassifier {
    pub(crate) fn new<S: AsRef<str>>(keywords: &[S]) -> Result<Self, regex::Error> {
        let alternatives: Vec<String> = keywords
            .iter()
            .map(|x| x.as_ref().trim())
            .filter(|x| !x.is_empty())
            .map(regex::escape)
            .collect();
        if alternatives.is_empty() {
            return Ok(Self { pattern: None });
        }
        let pattern = RegexBuilder::new(&alternatives.join("|"))
            .case_insensitive(true)
            .build()?;
        Ok(Self { pattern: Some(pattern) })
    }

    pub(crate) fn is_engineering(&self, title: &str) -> bool {
        self.pattern.as_ref().is_some_and(|x| x.is_match(title))
    }
}


#[cfg(test)]
mod tests {
    use crate::config::ScrapeConfig;

    use super::*;

    fn default_classifier() -> TitleClassifier {
        TitleClassifier::new(&ScrapeConfig::default().keywords).unwrap()
    }

    #[test]
    fn accepts_titles_with_a_keyword() {
        let classifier = default_classifier();
        for title in [
            "Backend Engineer",
            "Senior SOFTWARE Engineer, Payments",
            "Full Stack Developer",
            "full-stack generalist",
            "FullStack Lead",
            "SDE II",
            "Frontend Platform",
        ] {
            assert!(classifier.is_engineering(title), "{title}");
        }
    }

    #[test]
    fn rejects_titles_without_a_keyword() {
        let classifier = default_classifier();
        for title in ["Sales Rep", "Account Executive", "Head of Design", ""] {
            assert!(!classifier.is_engineering(title), "{title}");
        }
    }

    #[test]
    fn keywords_are_injectable_and_literal() {
        let classifier = TitleClassifier::new(&["c++", "data"]).unwrap();
        assert!(classifier.is_engineering("C++ Programmer"));
        assert!(classifier.is_engineering("Data Scientist"));
        assert!(!classifier.is_engineering("Backend Engineer"));
    }

    #[test]
    fn no_keywords_matches_nothing() {
        let classifier = TitleClassifier::new::<&str>(&[]).unwrap();
        assert!(!classifier.is_engineering("Software Engineer"));
    }
}
