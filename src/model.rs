use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FetchError;

/// Number of positional `strIngredientN` slots in a meal payload
pub const INGREDIENT_SLOTS: usize = 20;

/// A validated recipe, built from one successful attempt
///
/// Immutable once constructed; all five string fields were present in the
/// source payload or construction fails with a [`FetchError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub category: String,
    pub instructions: String,
    pub thumbnail_url: String,
    /// Positional ingredient slots in payload order; empty strings are kept
    pub ingredients: Vec<String>,
}

impl Recipe {
    /// Ingredients with the empty slots filtered out, order preserved
    pub fn non_empty_ingredients(&self) -> Vec<&str> {
        self.ingredients
            .iter()
            .filter(|ingredient| !ingredient.is_empty())
            .map(String::as_str)
            .collect()
    }
}

impl TryFrom<&Value> for Recipe {
    type Error = FetchError;

    fn try_from(meal: &Value) -> Result<Self, Self::Error> {
        // Absent or non-string slots are skipped, not an error
        let ingredients = (1..=INGREDIENT_SLOTS)
            .filter_map(|slot| {
                meal.get(format!("strIngredient{slot}"))
                    .and_then(Value::as_str)
            })
            .map(str::to_owned)
            .collect();

        Ok(Recipe {
            id: required_str(meal, "idMeal")?,
            name: required_str(meal, "strMeal")?,
            category: required_str(meal, "strCategory")?,
            instructions: required_str(meal, "strInstructions")?,
            thumbnail_url: required_str(meal, "strMealThumb")?,
            ingredients,
        })
    }
}

fn required_str(meal: &Value, field: &'static str) -> Result<String, FetchError> {
    meal.get(field)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(FetchError::MissingField(field))
}

/// Top-level response shape of the random-meal endpoint
///
/// The API answers `{"meals": null}` rather than an empty array when it has
/// nothing to say, hence the `Option`.
#[derive(Debug, Deserialize)]
struct MealsEnvelope {
    #[serde(default)]
    meals: Option<Vec<Value>>,
}

/// Parse one response body into a [`Recipe`]
///
/// Only the first element of the `meals` array is used; each call to the
/// endpoint returns a fresh random meal.
pub(crate) fn parse_meal(body: &[u8]) -> Result<Recipe, FetchError> {
    let envelope: MealsEnvelope = serde_json::from_slice(body)?;
    let meals = envelope.meals.unwrap_or_default();
    let meal = meals.first().ok_or(FetchError::NoMeals)?;
    Recipe::try_from(meal)
}

/// Aggregated outcome of one batch of fetch attempts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    /// Recipes in attempt-completion order
    pub recipes: Vec<Recipe>,
    /// `false` once any attempt failed at the transport level; sticky
    pub reachable: bool,
}

impl FetchResult {
    pub fn new() -> Self {
        FetchResult {
            recipes: Vec::new(),
            reachable: true,
        }
    }

    /// An empty result for a batch that never got off the ground
    pub fn unreachable() -> Self {
        FetchResult {
            recipes: Vec::new(),
            reachable: false,
        }
    }

    /// Fold one attempt outcome into the aggregate
    ///
    /// Transport failures flip `reachable` and contribute nothing; payload
    /// failures are dropped silently; successes are appended. Returns the
    /// appended recipe so callers can forward it to an observer.
    pub(crate) fn absorb(&mut self, outcome: Result<Recipe, FetchError>) -> Option<&Recipe> {
        match outcome {
            Ok(recipe) => {
                self.recipes.push(recipe);
                self.recipes.last()
            }
            Err(err) if err.is_transport() => {
                warn!("Fetch attempt failed: {err}");
                self.reachable = false;
                None
            }
            Err(err) => {
                debug!("Dropping unusable payload: {err}");
                None
            }
        }
    }
}

impl Default for FetchResult {
    fn default() -> Self {
        Self::new()
    }
}
