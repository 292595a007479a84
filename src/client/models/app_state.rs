use std::sync::Arc;

use iced::widget::image;
use iced::Command;
use log::{debug, info, warn};

use crate::client::models::messages::Message;
use crate::client::services::recipe_service::{check_image, RecipeProvider};
use crate::common::models::{Query, Recipe};
use crate::common::palette::CardColors;
use crate::error::FetchError;

/// Placeholder blocks shown while a lookup is in flight.
pub const SKELETON_COUNT: usize = 9;

/// Tag carried by every lookup; only the highest one issued may change state.
pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub id: RequestId,
    pub query: Query,
}

#[derive(Debug, Clone)]
pub enum ImageSlot {
    Loading,
    Loaded(image::Handle),
    Broken,
}

/// One result plus what its card needs to render.
#[derive(Debug, Clone)]
pub struct CardModel {
    pub recipe: Recipe,
    pub colors: CardColors,
    pub image: ImageSlot,
}

impl CardModel {
    fn new(recipe: Recipe) -> Self {
        let image = if recipe.image.trim().is_empty() { ImageSlot::Broken } else { ImageSlot::Loading };
        Self { recipe, colors: CardColors::random(), image }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    Idle,
    Loading,
    Error,
}

#[derive(Debug)]
pub enum ResultsRegion<'a> {
    Skeletons(usize),
    Cards(&'a [CardModel]),
}

#[derive(Debug, Clone, Default)]
pub struct SearchAppState {
    pub search_input: String,
    pub results: Vec<CardModel>,
    pub loading: bool,
    pub error_message: Option<String>,
    latest_request: RequestId,
}

impl SearchAppState {
    /// Fresh state plus the automatic first lookup, if one is configured.
    pub fn startup(preload_query: Option<&str>) -> (Self, Option<SearchRequest>) {
        let mut state = Self::default();
        let request = preload_query.and_then(|q| state.submit(q));
        (state, request)
    }

    /// Validates the raw input and, when it is usable, enters Loading.
    ///
    /// Returns the request to run; `None` means no network call may happen.
    pub fn submit(&mut self, raw: &str) -> Option<SearchRequest> {
        let query = match Query::parse(raw) {
            Ok(q) => q,
            Err(e) => {
                self.error_message = Some(e.to_string());
                return None;
            }
        };

        self.latest_request += 1;
        self.loading = true;
        self.results.clear();
        self.error_message = None;
        info!("🔍 Searching recipes for '{}' (request #{})", query, self.latest_request);
        Some(SearchRequest { id: self.latest_request, query })
    }

    /// Applies a lookup outcome. Outcomes of superseded requests are dropped
    /// and leave the state untouched. Returns whether the outcome was applied.
    pub fn finish_lookup(&mut self, request_id: RequestId, outcome: Result<Vec<Recipe>, FetchError>) -> bool {
        if request_id != self.latest_request {
            debug!(
                "Discarding outcome of request #{} (latest is #{})",
                request_id, self.latest_request
            );
            return false;
        }

        match outcome {
            Ok(recipes) => {
                info!("✅ Request #{} returned {} recipes", request_id, recipes.len());
                self.results = recipes.into_iter().map(CardModel::new).collect();
                self.error_message = None;
            }
            Err(e) => {
                self.results.clear();
                self.error_message = Some(e.user_message().to_string());
            }
        }
        self.loading = false;
        true
    }

    pub fn apply_image(&mut self, request_id: RequestId, index: usize, outcome: Result<Vec<u8>, FetchError>) {
        if request_id != self.latest_request || self.loading {
            return;
        }
        let Some(card) = self.results.get_mut(index) else {
            return;
        };
        card.image = match outcome.and_then(|bytes| check_image(&bytes).map(|_| bytes)) {
            Ok(bytes) => ImageSlot::Loaded(image::Handle::from_memory(bytes)),
            Err(e) => {
                debug!("Image for '{}' unavailable: {}", card.recipe.label, e);
                ImageSlot::Broken
            }
        };
    }

    /// Cards still waiting for their image, as (index, url).
    pub fn pending_images(&self) -> Vec<(usize, String)> {
        self.results
            .iter()
            .enumerate()
            .filter(|(_, card)| matches!(card.image, ImageSlot::Loading))
            .map(|(i, card)| (i, card.recipe.image.clone()))
            .collect()
    }

    pub fn phase(&self) -> ViewPhase {
        if self.loading {
            ViewPhase::Loading
        } else if self.error_message.is_some() {
            ViewPhase::Error
        } else {
            ViewPhase::Idle
        }
    }

    pub fn results_region(&self) -> ResultsRegion<'_> {
        if self.loading {
            ResultsRegion::Skeletons(SKELETON_COUNT)
        } else {
            ResultsRegion::Cards(&self.results)
        }
    }

    pub fn latest_request(&self) -> RequestId {
        self.latest_request
    }

    pub fn update(&mut self, message: Message, provider: &Arc<dyn RecipeProvider>) -> Command<Message> {
        match message {
            Message::SearchInputChanged(text) => {
                self.search_input = text;
            }
            Message::SubmitSearch => {
                let raw = self.search_input.clone();
                if let Some(request) = self.submit(&raw) {
                    return lookup_command(provider.clone(), request);
                }
            }
            Message::LookupFinished { request_id, outcome } => {
                if self.finish_lookup(request_id, outcome) {
                    return Command::batch(
                        self.pending_images()
                            .into_iter()
                            .map(|(index, url)| image_command(provider.clone(), request_id, index, url)),
                    );
                }
            }
            Message::ImageLoaded { request_id, index, outcome } => {
                self.apply_image(request_id, index, outcome);
            }
            Message::OpenRecipe(url) => {
                if let Err(e) = open::that(&url) {
                    warn!("Could not open {} in the browser: {}", url, e);
                }
            }
        }
        Command::none()
    }
}

/// Runs one lookup and wraps the outcome for the update loop.
pub async fn run_lookup(provider: Arc<dyn RecipeProvider>, request: SearchRequest) -> Message {
    let outcome = provider.lookup(&request.query).await;
    if let Err(e) = &outcome {
        warn!("❌ Lookup #{} for '{}' failed: {}", request.id, request.query, e);
    }
    Message::LookupFinished { request_id: request.id, outcome }
}

pub fn lookup_command(provider: Arc<dyn RecipeProvider>, request: SearchRequest) -> Command<Message> {
    Command::perform(run_lookup(provider, request), |msg| msg)
}

fn image_command(provider: Arc<dyn RecipeProvider>, request_id: RequestId, index: usize, url: String) -> Command<Message> {
    Command::perform(
        async move {
            let outcome = provider.fetch_image(&url).await;
            Message::ImageLoaded { request_id, index, outcome }
        },
        |msg| msg,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EMPTY_QUERY_MESSAGE, FETCH_FAILED_MESSAGE};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records every query and answers from a canned outcome.
    struct MockProvider {
        calls: Mutex<Vec<String>>,
        outcome: Result<Vec<Recipe>, FetchError>,
    }

    impl MockProvider {
        fn new(outcome: Result<Vec<Recipe>, FetchError>) -> Arc<Self> {
            Arc::new(Self { calls: Mutex::new(Vec::new()), outcome })
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RecipeProvider for MockProvider {
        async fn lookup(&self, query: &Query) -> Result<Vec<Recipe>, FetchError> {
            self.calls.lock().unwrap().push(query.as_str().to_string());
            self.outcome.clone()
        }

        async fn fetch_image(&self, _url: &str) -> Result<Vec<u8>, FetchError> {
            Err(FetchError::Status(404))
        }
    }

    fn recipe(label: &str) -> Recipe {
        Recipe {
            label: label.to_string(),
            image: format!("http://img.test/{}.jpg", label),
            url: format!("http://recipes.test/{}", label),
            source: "Test Kitchen".to_string(),
            ..Default::default()
        }
    }

    const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR";

    fn labels(state: &SearchAppState) -> Vec<&str> {
        state.results.iter().map(|c| c.recipe.label.as_str()).collect()
    }

    /// Same path the update loop takes for `SubmitSearch`.
    async fn search(state: &mut SearchAppState, provider: &Arc<MockProvider>, raw: &str) {
        if let Some(request) = state.submit(raw) {
            let provider: Arc<dyn RecipeProvider> = provider.clone();
            match run_lookup(provider, request).await {
                Message::LookupFinished { request_id, outcome } => {
                    state.finish_lookup(request_id, outcome);
                }
                other => panic!("unexpected message {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn blank_submit_sets_error_without_calling_provider() {
        let provider = MockProvider::new(Ok(vec![recipe("X")]));
        let mut state = SearchAppState::default();

        for raw in ["", "   ", "\n\t "] {
            search(&mut state, &provider, raw).await;
            assert_eq!(state.phase(), ViewPhase::Error);
            assert_eq!(state.error_message.as_deref(), Some(EMPTY_QUERY_MESSAGE));
        }
        assert!(provider.calls().is_empty());
        assert_eq!(state.latest_request(), 0);
    }

    #[test]
    fn blank_submit_keeps_current_results() {
        let mut state = SearchAppState::default();
        let req = state.submit("soup").unwrap();
        state.finish_lookup(req.id, Ok(vec![recipe("X")]));

        assert!(state.submit("  ").is_none());
        assert_eq!(labels(&state), ["X"]);
        assert!(!state.loading);
    }

    #[test]
    fn valid_submit_clears_stale_state_before_resolution() {
        let mut state = SearchAppState::default();
        let req = state.submit("soup").unwrap();
        state.finish_lookup(req.id, Ok(vec![recipe("X"), recipe("Y")]));
        assert!(state.submit("").is_none());
        assert!(state.error_message.is_some());

        let req = state.submit("  pasta  ").unwrap();
        assert_eq!(req.query.as_str(), "pasta");
        assert!(state.results.is_empty());
        assert!(state.error_message.is_none());
        assert!(state.loading);
        assert_eq!(state.phase(), ViewPhase::Loading);
    }

    #[tokio::test]
    async fn success_populates_results_in_order() {
        let provider = MockProvider::new(Ok(vec![recipe("X"), recipe("Y")]));
        let mut state = SearchAppState::default();

        search(&mut state, &provider, "chicken").await;

        assert_eq!(labels(&state), ["X", "Y"]);
        assert!(state.error_message.is_none());
        assert!(!state.loading);
        assert_eq!(state.phase(), ViewPhase::Idle);
        assert_eq!(provider.calls(), ["chicken"]);
    }

    #[tokio::test]
    async fn empty_hits_render_nothing() {
        let provider = MockProvider::new(Ok(Vec::new()));
        let mut state = SearchAppState::default();

        search(&mut state, &provider, "nothing-matches").await;

        assert!(state.results.is_empty());
        assert!(state.error_message.is_none());
        assert!(matches!(state.results_region(), ResultsRegion::Cards(cards) if cards.is_empty()));
    }

    #[tokio::test]
    async fn failure_sets_generic_error_and_clears_loading() {
        let provider = MockProvider::new(Err(FetchError::Transport("connection reset".into())));
        let mut state = SearchAppState::default();

        search(&mut state, &provider, "chicken").await;

        assert_eq!(state.error_message.as_deref(), Some(FETCH_FAILED_MESSAGE));
        assert!(state.results.is_empty());
        assert!(!state.loading);
        assert_eq!(state.phase(), ViewPhase::Error);
    }

    #[tokio::test]
    async fn error_status_is_reported_like_any_failure() {
        let provider = MockProvider::new(Err(FetchError::Status(429)));
        let mut state = SearchAppState::default();

        search(&mut state, &provider, "chicken").await;

        assert_eq!(state.error_message.as_deref(), Some(FETCH_FAILED_MESSAGE));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn startup_issues_one_lookup_for_default_query() {
        let provider = MockProvider::new(Ok(vec![recipe("Roast chicken")]));
        let (mut state, request) = SearchAppState::startup(Some("chicken"));
        let request = request.expect("preload request");
        assert!(state.loading);

        let provider_dyn: Arc<dyn RecipeProvider> = provider.clone();
        if let Message::LookupFinished { request_id, outcome } = run_lookup(provider_dyn, request).await {
            state.finish_lookup(request_id, outcome);
        }

        assert_eq!(provider.calls(), ["chicken"]);
        assert_eq!(labels(&state), ["Roast chicken"]);
    }

    #[test]
    fn startup_without_preload_is_idle() {
        let (state, request) = SearchAppState::startup(None);
        assert!(request.is_none());
        assert!(!state.loading);
        assert_eq!(state.phase(), ViewPhase::Idle);
    }

    #[test]
    fn loading_shows_nine_skeletons_and_no_cards() {
        let mut state = SearchAppState::default();
        let req = state.submit("soup").unwrap();
        state.finish_lookup(req.id, Ok(vec![recipe("A"), recipe("B"), recipe("C")]));

        state.submit("stew").unwrap();

        match state.results_region() {
            ResultsRegion::Skeletons(n) => assert_eq!(n, SKELETON_COUNT),
            ResultsRegion::Cards(cards) => panic!("rendered {} cards while loading", cards.len()),
        }
        assert_eq!(SKELETON_COUNT, 9);
    }

    #[test]
    fn stale_outcome_is_discarded() {
        let mut state = SearchAppState::default();
        let first = state.submit("soup").unwrap();
        let second = state.submit("stew").unwrap();
        assert!(second.id > first.id);

        // Newer request resolves first, then the older one straggles in
        assert!(state.finish_lookup(second.id, Ok(vec![recipe("Stew")])));
        assert!(!state.finish_lookup(first.id, Err(FetchError::Transport("late".into()))));

        assert_eq!(labels(&state), ["Stew"]);
        assert!(state.error_message.is_none());
        assert!(!state.loading);
    }

    #[test]
    fn stale_outcome_does_not_end_loading_of_newer_request() {
        let mut state = SearchAppState::default();
        let first = state.submit("soup").unwrap();
        let _second = state.submit("stew").unwrap();

        assert!(!state.finish_lookup(first.id, Ok(vec![recipe("Soup")])));

        assert!(state.loading);
        assert!(state.results.is_empty());
    }

    #[test]
    fn images_follow_their_request() {
        let mut state = SearchAppState::default();
        let req = state.submit("soup").unwrap();
        let mut no_image = recipe("Plain");
        no_image.image.clear();
        state.finish_lookup(req.id, Ok(vec![recipe("A"), no_image]));

        assert!(matches!(state.results[1].image, ImageSlot::Broken));
        assert_eq!(state.pending_images(), vec![(0, "http://img.test/A.jpg".to_string())]);

        state.apply_image(req.id, 0, Ok(PNG_HEADER.to_vec()));
        assert!(matches!(state.results[0].image, ImageSlot::Loaded(_)));
        assert!(state.pending_images().is_empty());

        // An image from an older request must not land on the new cards
        let newer = state.submit("stew").unwrap();
        state.finish_lookup(newer.id, Ok(vec![recipe("B")]));
        state.apply_image(req.id, 0, Ok(vec![9]));
        assert!(matches!(state.results[0].image, ImageSlot::Loading));

        state.apply_image(newer.id, 0, Err(FetchError::Status(404)));
        assert!(matches!(state.results[0].image, ImageSlot::Broken));
    }

    #[test]
    fn non_image_bytes_show_broken_placeholder() {
        let mut state = SearchAppState::default();
        let req = state.submit("soup").unwrap();
        state.finish_lookup(req.id, Ok(vec![recipe("A"), recipe("B")]));

        state.apply_image(req.id, 0, Ok(b"<html>403 Forbidden</html>".to_vec()));
        state.apply_image(req.id, 1, Ok(Vec::new()));

        assert!(matches!(state.results[0].image, ImageSlot::Broken));
        assert!(matches!(state.results[1].image, ImageSlot::Broken));
        assert!(state.pending_images().is_empty());
    }

    #[test]
    fn update_tracks_input_and_ignores_blank_submit() {
        let provider: Arc<dyn RecipeProvider> = MockProvider::new(Ok(Vec::new()));
        let mut state = SearchAppState::default();

        let _ = state.update(Message::SearchInputChanged("   ".into()), &provider);
        assert_eq!(state.search_input, "   ");

        let _ = state.update(Message::SubmitSearch, &provider);
        assert_eq!(state.error_message.as_deref(), Some(EMPTY_QUERY_MESSAGE));
        assert_eq!(state.latest_request(), 0);
        assert!(!state.loading);
    }
}
