use crate::client::models::app_state::RequestId;
use crate::common::models::Recipe;
use crate::error::FetchError;

#[derive(Debug, Clone)]
pub enum Message {
    // Search form
    SearchInputChanged(String),
    SubmitSearch,
    // Async results
    LookupFinished { request_id: RequestId, outcome: Result<Vec<Recipe>, FetchError> },
    ImageLoaded { request_id: RequestId, index: usize, outcome: Result<Vec<u8>, FetchError> },
    // Card actions
    OpenRecipe(String),
}
