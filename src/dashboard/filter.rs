use crate::postings::JobPosting;


/// The dashboard's search box and dropdowns.
///
/// The page runs the same predicate in the browser, this copy backs the `list` command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct JobFilter {
    /// Matched against title and company, ignoring case. Empty matches everything.
    pub(crate) search: String,
    /// Exact company, or empty for all
    pub(crate) company: String,
    /// Exact location, or empty for all
    pub(crate) location: String
}


impl JobFilter {
    pub(crate) fn matches(&self, job: &JobPosting) -> bool {
        let search = self.search.to_lowercase();
        let matches_search = job.title.to_lowercase().contains(&search)
            || job.company.to_lowercase().contains(&search);
        let matches_company = self.company.is_empty() || job.company == self.company;
        let matches_location = self.location.is_empty() || job.location == self.location;
        matches_search && matches_company && matches_location
    }

    pub(crate) fn apply<'a>(&self, jobs: &'a [JobPosting]) -> Vec<&'a JobPosting> {
        jobs.iter().filter(|x| self.matches(x)).collect()
    }
}
