// web_app/components/product.rs - Product display components
//
// - ProductCard: One search result, click to check it for allergens
// - ProductList: Vertical list of search results

use leptos::prelude::*;
use crate::web_app::model::ProductSummary;

/// Product card for the search results list
#[component]
pub fn ProductCard(
    product: ProductSummary,
    /// Called with the product when the card is clicked
    on_select: Callback<ProductSummary>,
) -> impl IntoView {
    let brand = product.brand.clone();
    let title = display_title(&product);
    let url = product.url.clone();

    view! {
        <button
            type="button"
            class="group w-full text-left bg-white rounded-xl shadow-sm hover:shadow-lg \
                   transition-all border border-gray-100 p-5 flex flex-col gap-1"
            on:click=move |_| on_select.run(product.clone())
        >
            {(!brand.is_empty()).then(|| view! {
                <span class="text-xs font-semibold uppercase tracking-wider text-gray-500">{brand}</span>
            })}
            <h3 class="font-bold text-gray-900 text-lg group-hover:text-emerald-600 transition-colors">
                {title}
            </h3>
            <span class="text-xs text-gray-400 truncate">{url}</span>
        </button>
    }
}

/// Title to show for a product, falling back to its URL
pub fn display_title(product: &ProductSummary) -> String {
    if product.title.trim().is_empty() {
        product.url.clone()
    } else {
        product.title.clone()
    }
}

/// List of search results
#[component]
pub fn ProductList(
    #[prop(into)]
    products: Signal<Vec<ProductSummary>>,
    on_select: Callback<ProductSummary>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !products.get().is_empty()
            fallback=|| view! {
                <div class="text-center py-16 text-gray-500">
                    <span class="text-4xl block mb-4">"🥜"</span>
                    <p>"Search for a product or paste a product page URL to check it for allergens."</p>
                </div>
            }
        >
            <div class="flex flex-col gap-3">
                // Keyed by url, which is the product identifier
                <For
                    each=move || products.get()
                    key=|product| product.url.clone()
                    children=move |product| view! {
                        <ProductCard product=product on_select=on_select />
                    }
                />
            </div>
        </Show>
    }
}
