//! Nutritionix natural-language lookup
//!
//! Sends "<quantity> of <ingredient>" to the natural nutrients endpoint and
//! reduces the returned foods to a single record.

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::config::NutritionixConfig;
use crate::error::Result;
use crate::models::{Ingredient, NutritionRecord};

/// Result of asking a nutrition database about one ingredient
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(NutritionRecord),
    /// The service answered but had nothing usable
    NoData { status: u16 },
}

/// A source of measured nutrition data
pub trait NutritionLookup {
    fn lookup(&self, ingredient: &Ingredient) -> Result<LookupOutcome>;
}

#[derive(Serialize)]
struct NutrientsQuery<'a> {
    query: &'a str,
}

#[derive(Debug, Deserialize)]
struct NutrientsResponse {
    #[serde(default)]
    foods: Vec<FoodNutrients>,
}

#[derive(Debug, Deserialize)]
struct FoodNutrients {
    #[serde(default)]
    food_name: Option<String>,
    #[serde(default)]
    nf_calories: Option<f64>,
    #[serde(default)]
    nf_protein: Option<f64>,
    #[serde(default)]
    nf_total_fat: Option<f64>,
    #[serde(default)]
    nf_total_carbohydrate: Option<f64>,
}

impl FoodNutrients {
    fn to_record(&self) -> NutritionRecord {
        NutritionRecord::new(
            self.nf_calories.unwrap_or(0.0),
            self.nf_protein.unwrap_or(0.0),
            self.nf_total_fat.unwrap_or(0.0),
            self.nf_total_carbohydrate.unwrap_or(0.0),
        )
    }
}

/// Blocking Nutritionix client with header authentication
pub struct NutritionixClient {
    client: Client,
    endpoint: String,
    app_id: String,
    api_key: String,
}

impl NutritionixClient {
    pub fn new(config: &NutritionixConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            app_id: config.app_id.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

impl NutritionLookup for NutritionixClient {
    fn lookup(&self, ingredient: &Ingredient) -> Result<LookupOutcome> {
        let query = ingredient.query();
        tracing::debug!("Nutritionix query: {}", query);

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-app-id", &self.app_id)
            .header("x-app-key", &self.api_key)
            .json(&NutrientsQuery { query: &query })
            .send()?;

        let status = response.status();
        let body = response.text()?;
        classify_response(status, &body)
    }
}

/// Turn a status and body into a lookup outcome
///
/// Only HTTP 200 carries data. A 200 whose payload lists no foods is treated
/// the same as a non-200 answer.
pub fn classify_response(status: StatusCode, body: &str) -> Result<LookupOutcome> {
    if status != StatusCode::OK {
        return Ok(LookupOutcome::NoData {
            status: status.as_u16(),
        });
    }

    let parsed: NutrientsResponse = serde_json::from_str(body)?;
    if parsed.foods.is_empty() {
        return Ok(LookupOutcome::NoData {
            status: status.as_u16(),
        });
    }

    for food in &parsed.foods {
        tracing::debug!(
            "Nutritionix matched '{}'",
            food.food_name.as_deref().unwrap_or("?")
        );
    }

    Ok(LookupOutcome::Found(
        parsed.foods.iter().map(FoodNutrients::to_record).sum(),
    ))
}
