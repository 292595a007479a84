use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;

/// A trimmed, non-empty search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyQuery);
        }
        Ok(Query(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Treats an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(d).map(Option::unwrap_or_default)
}

/// Top-level body of a recipe search response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hits: Vec<Hit>,
}

impl SearchResponse {
    pub fn into_recipes(self) -> Vec<Recipe> {
        self.hits.into_iter().map(|hit| hit.recipe).collect()
    }
}

/// Envelope the provider wraps around each recipe.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Hit {
    #[serde(default, deserialize_with = "null_as_default")]
    pub recipe: Recipe,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    /// Link to the recipe on the publisher's site.
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    /// Publisher name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cuisine_type: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub meal_type: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dish_type: Vec<String>,
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default, rename = "yield")]
    pub servings: Option<f64>,
    /// Minutes; the provider reports 0 when unknown.
    #[serde(default)]
    pub total_time: Option<f64>,
}

impl Recipe {
    pub fn calories_per_serving(&self) -> Option<f64> {
        match (self.calories, self.servings) {
            (Some(cal), Some(servings)) if servings > 0.0 => Some(cal / servings),
            _ => None,
        }
    }

    pub fn total_minutes(&self) -> Option<u32> {
        self.total_time.filter(|t| *t > 0.0).map(|t| t.round() as u32)
    }
}
