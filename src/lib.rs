pub mod config;
pub mod error;
pub mod fetcher;
pub mod model;

pub use config::{FetcherConfig, DEFAULT_ENDPOINT};
pub use error::FetchError;
pub use fetcher::RecipeFetcher;
pub use model::{FetchResult, Recipe, INGREDIENT_SLOTS};

/// Fetch up to `batch_size` random recipes from the default endpoint
///
/// Convenience over [`RecipeFetcher::fetch_recipes`]; best-effort and
/// infallible, partial failure is reported through the result's
/// `reachable` flag and list length.
pub async fn fetch_recipes(batch_size: usize) -> FetchResult {
    RecipeFetcher::new().fetch_recipes(batch_size).await
}
