// tests/server_fn_tests.rs
// Test suite for Leptos server functions
//
// The server functions read a process-wide client, so everything runs in one
// test to keep the override stable.

mod common;

use serde_json::json;

use allergy_lens::web_app::api::backend;
use allergy_lens::web_app::model::*;
use allergy_lens::web_app::pages::allergy::server_error_text;
use allergy_lens::web_app::server_fns::*;
use common::{FakeBackend, Reply};

#[actix_web::test]
async fn test_server_functions_comprehensive() -> anyhow::Result<()> {
    let healthy = FakeBackend::start(
        Reply::Json(json!({
            "products": [
                { "brand": "Oatly", "title": "Oat Drink Barista", "url": "https://shop.example/p/oatly-barista" }
            ]
        })),
        Reply::Json(json!({ "allergies": ["oats"], "image": "https://cdn.example/oatly.png" })),
    )
    .await?;
    backend::set_test_client(healthy.client());

    // 1. query_products forwards the input and returns the product list
    println!("Testing query_products...");
    let products = query_products("oat milk".to_string())
        .await
        .map_err(|e| anyhow::anyhow!("query_products failed: {}", e))?;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].brand, "Oatly");

    // 2. compute_allergy wraps the backend answer in a report for the product
    println!("Testing compute_allergy for {}...", products[0].url);
    let report = compute_allergy(products[0].clone())
        .await
        .map_err(|e| anyhow::anyhow!("compute_allergy failed: {}", e))?;
    assert_eq!(report.product, products[0]);
    assert_eq!(report.result, AllergyResult::Found(vec!["oats".to_string()]));
    assert_eq!(report.image.as_deref(), Some("https://cdn.example/oatly.png"));

    assert_eq!(
        healthy.requests(),
        vec![
            ("search".to_string(), json!({ "input": "oat milk" })),
            ("compute".to_string(), json!({ "url": "https://shop.example/p/oatly-barista" })),
        ]
    );
    healthy.stop().await;

    // 3. Empty allergy list becomes the sentinel
    let clean = FakeBackend::start(
        Reply::Json(json!({ "products": [] })),
        Reply::Json(json!({ "allergies": [] })),
    )
    .await?;
    backend::set_test_client(clean.client());

    let product = ProductSummary {
        brand: String::new(),
        title: "Sparkling Water".to_string(),
        url: "https://shop.example/p/sparkling-water".to_string(),
    };
    let report = compute_allergy(product)
        .await
        .map_err(|e| anyhow::anyhow!("compute_allergy failed: {}", e))?;
    assert_eq!(report.result, AllergyResult::NoneFound);
    assert!(report.image.is_none());
    clean.stop().await;

    // 4. Backend failures surface the raw response text
    let broken = FakeBackend::start(
        Reply::Status(500, "Error: scraping failed"),
        Reply::Status(502, "Bad Gateway"),
    )
    .await?;
    backend::set_test_client(broken.client());

    let err = query_products("nutella".to_string()).await.unwrap_err();
    assert_eq!(server_error_text(&err), "Error: scraping failed");

    let mut state = ViewState::new();
    assert!(state.begin_request());
    state.fail(server_error_text(&err));
    assert_eq!(state.error.as_deref(), Some("Error: scraping failed"));
    assert!(!state.loading);

    let err = compute_allergy(ProductSummary {
        url: "https://shop.example/p/nutella".to_string(),
        ..ProductSummary::default()
    })
    .await
    .unwrap_err();
    assert_eq!(server_error_text(&err), "Bad Gateway");
    broken.stop().await;

    Ok(())
}
