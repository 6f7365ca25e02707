/// Selector value meaning "search every repository".
pub const ALL_REPOSITORIES: &str = "all-repositories";

pub const REPOSITORIES: &[&str] = &[
    "partner-portal-ui",
    "partner-portal-api",
    "partner-onboarding-service",
    "partner-billing-service",
    "partner-data-pipeline",
    "partner-reporting",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoFilter {
    All,
    Named(&'static str),
}

impl RepoFilter {
    pub fn options() -> Vec<RepoFilter> {
        std::iter::once(RepoFilter::All)
            .chain(REPOSITORIES.iter().copied().map(RepoFilter::Named))
            .collect()
    }

    pub fn from_value(value: &str) -> Option<RepoFilter> {
        if value == ALL_REPOSITORIES {
            return Some(RepoFilter::All);
        }
        REPOSITORIES
            .iter()
            .copied()
            .find(|name| *name == value)
            .map(RepoFilter::Named)
    }

    /// Value sent as `repoName`; `None` for the sentinel.
    pub fn repo_name(&self) -> Option<&'static str> {
        match self {
            RepoFilter::All => None,
            RepoFilter::Named(name) => Some(name),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RepoFilter::All => "All repositories",
            RepoFilter::Named(name) => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_start_with_sentinel() {
        let options = RepoFilter::options();
        assert_eq!(options[0], RepoFilter::All);
        assert_eq!(options.len(), REPOSITORIES.len() + 1);
        assert_eq!(options[1], RepoFilter::Named(REPOSITORIES[0]));
    }

    #[test]
    fn sentinel_has_no_repo_name() {
        assert_eq!(RepoFilter::All.repo_name(), None);
        assert_eq!(
            RepoFilter::Named("partner-reporting").repo_name(),
            Some("partner-reporting")
        );
    }

    #[test]
    fn resolves_selector_values() {
        assert_eq!(RepoFilter::from_value(ALL_REPOSITORIES), Some(RepoFilter::All));
        assert_eq!(
            RepoFilter::from_value("partner-portal-api"),
            Some(RepoFilter::Named("partner-portal-api"))
        );
        assert_eq!(RepoFilter::from_value("not-a-repo"), None);
    }

    #[test]
    fn every_option_resolves_from_its_name() {
        for option in RepoFilter::options() {
            let value = option.repo_name().unwrap_or(ALL_REPOSITORIES);
            assert_eq!(RepoFilter::from_value(value), Some(option));
        }
    }
}
