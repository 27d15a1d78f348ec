// web_app/server_fns.rs - Leptos server function declarations
//
// These are compiled for both client (WASM) and server (native Rust). The
// #[server] macro generates:
// - On server: The actual function, which forwards to the analysis backend
// - On client: A stub that makes HTTP POST requests to the server
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;
use crate::web_app::model::*;

#[cfg(feature = "ssr")]
fn client() -> Result<crate::web_app::api::backend::BackendClient, ServerFnError> {
    crate::web_app::api::backend::get_client()
        .ok_or_else(|| ServerFnError::new("Analysis backend not configured"))
}

/// Search the analysis backend for products by name
#[server(QueryProducts, "/api")]
pub async fn query_products(input: String) -> Result<Vec<ProductSummary>, ServerFnError> {
    let request_id = uuid::Uuid::new_v4();
    tracing::info!(%request_id, "Product search: input='{}'", input);

    let client = client()?;

    match client.search(&input).await {
        Ok(products) => {
            tracing::info!(%request_id, "Product search returned {} products", products.len());
            Ok(products)
        }
        Err(e) => {
            tracing::error!(%request_id, "Product search failed: {}", e);
            Err(ServerFnError::new(e.raw_response()))
        }
    }
}

/// Ask the analysis backend which ingredients of a product are allergens
#[server(ComputeAllergy, "/api")]
pub async fn compute_allergy(product: ProductSummary) -> Result<AllergyReport, ServerFnError> {
    let request_id = uuid::Uuid::new_v4();
    tracing::info!(%request_id, "Allergy check: url='{}'", product.url);

    let client = client()?;

    match client.compute(&product.url).await {
        Ok(response) => {
            let report = AllergyReport::new(product, response);
            tracing::info!(%request_id, "Allergy check found {} allergens", report.result.count());
            Ok(report)
        }
        Err(e) => {
            tracing::error!(%request_id, "Allergy check failed: {}", e);
            Err(ServerFnError::new(e.raw_response()))
        }
    }
}
