use std::time::{Duration, Instant};

use crate::api::{Match, SearchRequest, SearchResponse};
use crate::format::format_code;
use crate::repos::RepoFilter;

/// How long the "Copied!" indicator stays up after a successful copy.
pub const COPIED_INDICATOR: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestPhase {
    #[default]
    Idle,
    InFlight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: Level::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: Level::Error, message: message.into() }
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    KeywordChanged(String),
    RepoSelected(RepoFilter),
    Submit,
    SearchSucceeded(SearchResponse),
    SearchFailed(String),
    OpenMatch(usize),
    CloseOverlay,
    CopyCode,
    CopySucceeded { at: Instant },
    CopyFailed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Notify(Notification),
    Search(SearchRequest),
    Copy(String),
}

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub keyword: String,
    pub repo: Option<RepoFilter>,
    pub response: Option<SearchResponse>,
    pub request: RequestPhase,
    pub selected: Option<Match>,
    pub overlay_open: bool,
    pub copied_until: Option<Instant>,
}

impl ViewState {
    pub fn apply(mut self, action: Action) -> (Self, Vec<Effect>) {
        let mut effects = Vec::new();

        match action {
            Action::KeywordChanged(keyword) => self.keyword = keyword,
            Action::RepoSelected(repo) => self.repo = Some(repo),
            Action::Submit => {
                if self.request == RequestPhase::InFlight {
                    return (self, effects);
                }
                let keyword = self.keyword.trim();
                if keyword.is_empty() {
                    effects.push(Effect::Notify(Notification::error(
                        "Please enter a keyword to search",
                    )));
                    return (self, effects);
                }
                let repo_name = self.repo.and_then(|repo| repo.repo_name());
                let request = SearchRequest::new(keyword, repo_name);
                self.request = RequestPhase::InFlight;
                effects.push(Effect::Search(request));
            }
            Action::SearchSucceeded(response) => {
                let count = response.matches.len();
                self.response = Some(response);
                self.request = RequestPhase::Idle;
                effects.push(Effect::Notify(Notification::success(format!(
                    "Found {}",
                    pluralize_matches(count)
                ))));
            }
            Action::SearchFailed(reason) => {
                self.request = RequestPhase::Idle;
                effects.push(Effect::Notify(Notification::error(format!(
                    "Search failed: {}",
                    reason
                ))));
            }
            Action::OpenMatch(index) => {
                let picked = self
                    .response
                    .as_ref()
                    .and_then(|response| response.matches.get(index))
                    .cloned();
                if let Some(picked) = picked {
                    self.selected = Some(picked);
                    self.overlay_open = true;
                    self.copied_until = None;
                }
            }
            Action::CloseOverlay => {
                self.overlay_open = false;
                self.selected = None;
                self.copied_until = None;
            }
            Action::CopyCode => {
                if let Some(code) = self.overlay().and_then(|m| m.code.as_deref()) {
                    effects.push(Effect::Copy(format_code(code)));
                }
            }
            Action::CopySucceeded { at } => {
                self.copied_until = Some(at + COPIED_INDICATOR);
                effects.push(Effect::Notify(Notification::success(
                    "Code copied to clipboard",
                )));
            }
            Action::CopyFailed(reason) => {
                effects.push(Effect::Notify(Notification::error(format!(
                    "Failed to copy code: {}",
                    reason
                ))));
            }
        }

        (self, effects)
    }

    pub fn can_submit(&self) -> bool {
        self.request == RequestPhase::Idle
    }

    pub fn is_loading(&self) -> bool {
        self.request == RequestPhase::InFlight
    }

    pub fn match_count(&self) -> usize {
        self.response.as_ref().map_or(0, |r| r.matches.len())
    }

    pub fn show_copied(&self, now: Instant) -> bool {
        self.copied_until.is_some_and(|until| now < until)
    }

    pub fn overlay(&self) -> Option<&Match> {
        if self.overlay_open {
            self.selected.as_ref()
        } else {
            None
        }
    }
}

pub fn pluralize_matches(count: usize) -> String {
    if count == 1 {
        "1 match".to_string()
    } else {
        format!("{} matches", count)
    }
}
