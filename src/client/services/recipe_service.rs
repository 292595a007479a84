use async_trait::async_trait;
use log::debug;

use crate::common::models::{Query, Recipe, SearchResponse};
use crate::config::ClientConfig;
use crate::error::FetchError;

const USER_AGENT: &str = concat!("recipe-finder/", env!("CARGO_PKG_VERSION"));

/// Rejects bodies that are not a known image format, e.g. a CDN error page.
pub fn check_image(bytes: &[u8]) -> Result<(), FetchError> {
    image::guess_format(bytes)
        .map(|_| ())
        .map_err(|e| FetchError::Decode(format!("not an image: {}", e)))
}

/// Anything that can answer a recipe search.
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// One GET against the provider. Provider order is preserved.
    async fn lookup(&self, query: &Query) -> Result<Vec<Recipe>, FetchError>;

    /// Raw bytes behind a result's image reference.
    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Edamam Recipe Search v2 client.
#[derive(Debug, Clone)]
pub struct EdamamService {
    client: reqwest::Client,
    api_url: String,
    app_id: String,
    app_key: String,
}

impl EdamamService {
    pub fn new(cfg: &ClientConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(cfg.http_timeout)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            api_url: cfg.api_url.clone(),
            app_id: cfg.app_id.clone(),
            app_key: cfg.app_key.clone(),
        })
    }

    /// Full request URL, with the secret key redacted for logging.
    fn redacted_url(&self, query: &Query) -> String {
        format!("{}?type=public&q={}&app_id={}&app_key=***", self.api_url, query, self.app_id)
    }

    fn decode(body: &[u8]) -> Result<SearchResponse, FetchError> {
        serde_json::from_slice(body).map_err(|e| FetchError::Decode(e.to_string()))
    }

    /// Like `lookup`, but also returns the provider's total match count.
    pub async fn lookup_with_count(&self, query: &Query) -> Result<(Vec<Recipe>, Option<u64>), FetchError> {
        debug!("GET {}", self.redacted_url(query));
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("type", "public"),
                ("q", query.as_str()),
                ("app_id", self.app_id.as_str()),
                ("app_key", self.app_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let resp = Self::decode(&body)?;
        let count = resp.count;
        let recipes = resp.into_recipes();
        debug!("📥 Provider returned {} recipes for '{}'", recipes.len(), query);
        Ok((recipes, count))
    }
}

#[async_trait]
impl RecipeProvider for EdamamService {
    async fn lookup(&self, query: &Query) -> Result<Vec<Recipe>, FetchError> {
        self.lookup_with_count(query).await.map(|(recipes, _)| recipes)
    }

    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        let bytes = response.bytes().await?;
        check_image(&bytes)?;
        Ok(bytes.to_vec())
    }
}
