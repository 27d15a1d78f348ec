// web_app/components/allergy.rs - Allergy result components
//
// - AllergyPanel: Product header, image and the flagged ingredients
// - ProductImage: Backend image with a placeholder when there is none

use leptos::prelude::*;
use crate::web_app::model::{AllergyReport, AllergyResult};
use super::common::{Badge, SecondaryButton};
use super::product::display_title;

/// Heading summarising the result
pub fn result_heading(result: &AllergyResult) -> String {
    match result.count() {
        0 => "No allergens detected".to_string(),
        1 => "1 allergen detected".to_string(),
        n => format!("{} allergens detected", n),
    }
}

#[component]
pub fn ProductImage(
    image: Option<String>,
    alt: String,
) -> impl IntoView {
    match image {
        Some(src) => view! {
            <img src=src alt=alt class="w-32 h-32 object-contain rounded-xl bg-white border border-gray-100" />
        }.into_any(),
        None => view! {
            <div class="w-32 h-32 rounded-xl bg-gray-100 flex items-center justify-center text-gray-300">
                <span class="text-4xl">"📦"</span>
            </div>
        }.into_any(),
    }
}

/// Allergy result panel
#[component]
pub fn AllergyPanel(
    report: AllergyReport,
    /// Back to the product list
    on_back: Callback<()>,
) -> impl IntoView {
    let title = display_title(&report.product);
    let brand = report.product.brand.clone();
    let heading = result_heading(&report.result);
    let found = matches!(report.result, AllergyResult::Found(_));
    let lines = report.result.display_lines();
    let checked_at = report.checked_at.format("%Y-%m-%d %H:%M UTC").to_string();

    view! {
        <div class="bg-white rounded-2xl shadow-sm border border-gray-100 p-6">
            <div class="flex gap-6 items-start mb-6">
                <ProductImage image=report.image.clone() alt=title.clone() />
                <div class="min-w-0 flex-1">
                    {(!brand.is_empty()).then(|| view! {
                        <span class="text-xs font-semibold uppercase tracking-wider text-gray-500">{brand}</span>
                    })}
                    <h2 class="text-2xl font-bold text-gray-900 mb-2">{title}</h2>
                    {if found {
                        view! { <Badge variant="red">{heading}</Badge> }.into_any()
                    } else {
                        view! { <Badge variant="green">{heading}</Badge> }.into_any()
                    }}
                    <p class="text-xs text-gray-400 mt-2">"Checked " {checked_at}</p>
                </div>
            </div>

            <ul class="flex flex-col gap-3 mb-6">
                {lines.into_iter().map(|line| view! {
                    <li class="bg-gray-50 rounded-xl px-5 py-4 border border-gray-100">
                        <h3 class="text-lg font-semibold text-gray-800">{line}</h3>
                    </li>
                }).collect_view()}
            </ul>

            <SecondaryButton on_click=on_back>"← Back to products"</SecondaryButton>
        </div>
    }
}
