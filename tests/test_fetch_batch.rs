use mealdb_fetch::RecipeFetcher;

fn meal_body(id: &str, name: &str) -> String {
    format!(
        r#"{{
            "meals": [{{
                "idMeal": "{id}",
                "strMeal": "{name}",
                "strCategory": "Beef",
                "strInstructions": "Simmer gently for two hours.",
                "strMealThumb": "https://example.com/{id}.jpg",
                "strIngredient1": "Beef",
                "strIngredient2": "Onion",
                "strIngredient3": ""
            }}]
        }}"#
    )
}

#[tokio::test]
async fn full_batch_collects_every_attempt() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/random.php")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(meal_body("52874", "Beef and Mustard Pie"))
        .expect(10)
        .create_async()
        .await;

    let fetcher = RecipeFetcher::with_endpoint(format!("{}/random.php", server.url()));
    let result = fetcher.fetch_recipes(10).await;

    assert_eq!(result.recipes.len(), 10);
    assert!(result.reachable);
    for recipe in &result.recipes {
        assert_eq!(recipe.id, "52874");
        assert_eq!(recipe.name, "Beef and Mustard Pie");
        assert_eq!(recipe.ingredients, vec!["Beef", "Onion", ""]);
        assert_eq!(recipe.non_empty_ingredients(), vec!["Beef", "Onion"]);
    }

    // Exactly one request per attempt, no retries
    mock.assert_async().await;
}

#[tokio::test]
async fn sequential_batches_are_independent() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/random.php")
        .with_status(200)
        .with_body(meal_body("53013", "Big Mac"))
        .expect(6)
        .create_async()
        .await;

    let fetcher = RecipeFetcher::with_endpoint(format!("{}/random.php", server.url()));

    let first = fetcher.fetch_recipes(3).await;
    let second = fetcher.fetch_recipes(3).await;

    // No accumulation across calls
    assert_eq!(first.recipes.len(), 3);
    assert_eq!(second.recipes.len(), 3);
    assert!(second.reachable);
}

#[tokio::test]
async fn single_attempt_batch() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/random.php")
        .with_status(200)
        .with_body(meal_body("52772", "Teriyaki Chicken Casserole"))
        .create_async()
        .await;

    let fetcher = RecipeFetcher::with_endpoint(format!("{}/random.php", server.url()));
    let result = fetcher.fetch_recipes(1).await;

    assert_eq!(result.recipes.len(), 1);
    assert!(result.reachable);
}
