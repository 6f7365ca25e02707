use eframe::egui;
use std::sync::mpsc::{self, TryRecvError};
use std::sync::Arc;
use std::time::Instant;

use crate::api::{SearchClient, SearchRequest, SearchResponse};
use crate::clipboard::copy_to_clipboard;
use crate::error::SearchError;
use crate::repos::RepoFilter;
use crate::state::{Action, Effect, ViewState};
use crate::ui::{detail_window, result_list, SearchFormState, Toasts};

type SearchOutcome = Result<SearchResponse, SearchError>;

pub struct PartnerSearchApp {
    state: ViewState,
    form: SearchFormState,
    toasts: Toasts,

    client: Arc<dyn SearchClient>,
    pending: Option<mpsc::Receiver<SearchOutcome>>,
}

impl PartnerSearchApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        client: Arc<dyn SearchClient>,
        initial_repo: Option<RepoFilter>,
    ) -> Self {
        Self {
            state: ViewState {
                repo: initial_repo,
                ..ViewState::default()
            },
            form: SearchFormState::new(),
            toasts: Toasts::default(),
            client,
            pending: None,
        }
    }

    fn poll_pending(&mut self, actions: &mut Vec<Action>) {
        let Some(rx) = &self.pending else {
            return;
        };

        if let Some(action) = outcome_action(rx.try_recv()) {
            self.pending = None;
            actions.push(action);
        }
    }

    fn dispatch(&mut self, ctx: &egui::Context, action: Action) {
        let (state, effects) = std::mem::take(&mut self.state).apply(action);
        self.state = state;

        for effect in effects {
            self.run(ctx, effect);
        }
    }

    fn run(&mut self, ctx: &egui::Context, effect: Effect) {
        match effect {
            Effect::Notify(notification) => {
                self.toasts.push(notification, Instant::now());
            }
            Effect::Search(request) => {
                log::info!("Searching for {:?} in {:?}", request.pr, request.repo_name);
                self.pending = Some(spawn_search(self.client.clone(), request, ctx.clone()));
            }
            Effect::Copy(text) => match copy_to_clipboard(&text) {
                Ok(()) => {
                    log::info!("Copied {} bytes to clipboard", text.len());
                    self.dispatch(ctx, Action::CopySucceeded { at: Instant::now() });
                }
                Err(e) => {
                    log::error!("Failed to copy to clipboard: {}", e);
                    self.dispatch(ctx, Action::CopyFailed(e.to_string()));
                }
            },
        }
    }
}

impl eframe::App for PartnerSearchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let mut actions = Vec::new();

        self.poll_pending(&mut actions);

        egui::CentralPanel::default().show(ctx, |ui| {
            actions.extend(self.form.show(ui, &self.state));
            ui.add_space(10.0);
            ui.separator();
            ui.add_space(10.0);
            actions.extend(result_list::show(ui, &self.state));
        });

        if let Some(selected) = self.state.overlay() {
            actions.extend(detail_window::show(ctx, selected, self.state.show_copied(now)));
        }

        self.toasts.show(ctx, now);

        for action in actions {
            self.dispatch(ctx, action);
        }

        if let Some(until) = self.state.copied_until {
            if until > now {
                ctx.request_repaint_after(until - now);
            }
        }
    }
}

/// Maps a poll of the search channel to the action it completes, if any.
/// A worker that hangs up without answering counts as a failed search.
pub fn outcome_action(received: Result<SearchOutcome, TryRecvError>) -> Option<Action> {
    match received {
        Ok(Ok(response)) => {
            log::info!(
                "Search for {:?} returned {} matches",
                response.keyword,
                response.matches.len()
            );
            Some(Action::SearchSucceeded(response))
        }
        Ok(Err(e)) => {
            log::error!("Search failed: {}", e);
            Some(Action::SearchFailed(e.to_string()))
        }
        Err(TryRecvError::Empty) => None,
        Err(TryRecvError::Disconnected) => {
            log::error!("Search worker exited without a result");
            Some(Action::SearchFailed("search worker stopped unexpectedly".into()))
        }
    }
}

/// Runs one search on a worker thread. The outcome arrives on the returned
/// channel and a repaint is requested so the next frame picks it up.
pub fn spawn_search(
    client: Arc<dyn SearchClient>,
    request: SearchRequest,
    ctx: egui::Context,
) -> mpsc::Receiver<SearchOutcome> {
    let (tx, rx) = mpsc::channel();

    std::thread::spawn(move || {
        let outcome = client.search(&request);
        let _ = tx.send(outcome);
        ctx.request_repaint();
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Match;
    use crate::state::RequestPhase;
    use std::sync::Mutex;

    struct FakeClient {
        seen: Mutex<Vec<SearchRequest>>,
        status: Option<u16>,
    }

    impl SearchClient for FakeClient {
        fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
            self.seen.lock().unwrap().push(request.clone());
            match self.status {
                Some(status) => Err(SearchError::Status { status }),
                None => Ok(SearchResponse {
                    keyword: request.pr.clone(),
                    matches: vec![Match {
                        file: None,
                        repo: "r1".into(),
                        code: None,
                        explanation: None,
                        summary: Some("S".into()),
                    }],
                }),
            }
        }
    }

    #[test]
    fn spawned_search_delivers_response() {
        let client = Arc::new(FakeClient { seen: Mutex::new(Vec::new()), status: None });
        let rx = spawn_search(
            client.clone(),
            SearchRequest::new("X", Some("partner-reporting")),
            egui::Context::default(),
        );

        let response = rx.recv().unwrap().unwrap();
        assert_eq!(response.keyword, "X");
        assert_eq!(response.matches.len(), 1);
        assert_eq!(
            client.seen.lock().unwrap().as_slice(),
            &[SearchRequest::new("X", Some("partner-reporting"))]
        );
    }

    #[test]
    fn spawned_search_delivers_errors() {
        let client = Arc::new(FakeClient { seen: Mutex::new(Vec::new()), status: Some(404) });
        let rx = spawn_search(client, SearchRequest::new("X", None), egui::Context::default());

        let err = rx.recv().unwrap().unwrap_err();
        assert!(matches!(err, SearchError::Status { status: 404 }));
    }

    fn in_flight() -> ViewState {
        let (state, _) = ViewState::default().apply(Action::KeywordChanged("X".into()));
        let (state, _) = state.apply(Action::Submit);
        assert_eq!(state.request, RequestPhase::InFlight);
        state
    }

    #[test]
    fn pending_channel_yields_nothing() {
        let (_tx, rx) = mpsc::channel::<SearchOutcome>();
        assert!(outcome_action(rx.try_recv()).is_none());
    }

    #[test]
    fn received_response_completes_search() {
        let response = SearchResponse { keyword: "X".into(), matches: Vec::new() };
        let action = outcome_action(Ok(Ok(response.clone())));
        assert!(matches!(action, Some(Action::SearchSucceeded(r)) if r == response));
    }

    #[test]
    fn received_error_fails_search() {
        let action = outcome_action(Ok(Err(SearchError::Status { status: 503 })));
        assert!(matches!(
            action,
            Some(Action::SearchFailed(reason)) if reason == "service returned HTTP 503"
        ));
    }

    #[test]
    fn worker_hang_up_unlocks_submit() {
        let (tx, rx) = mpsc::channel::<SearchOutcome>();
        drop(tx);

        let action = outcome_action(rx.try_recv()).unwrap();
        assert!(matches!(action, Action::SearchFailed(_)));

        let (state, effects) = in_flight().apply(action);
        assert!(state.can_submit());
        assert_eq!(effects.len(), 1);
    }
}
