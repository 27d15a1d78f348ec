// web_app/pages/allergy.rs - Allergy checker page
//
// Composes the search bar, product list and allergy panel around a single
// `ViewState` signal. Requests go out as actions; their results are folded
// back into the state by effects.

use leptos::prelude::*;
use crate::web_app::model::*;
use crate::web_app::model::Submission;
use crate::web_app::components::*;
use crate::web_app::server_fns::{compute_allergy, query_products};

/// Text for the error dialog, unwrapping the backend's raw message
pub fn server_error_text(error: &ServerFnError) -> String {
    match error {
        ServerFnError::ServerError(message) => message.clone(),
        other => other.to_string(),
    }
}

/// Main page component
#[component]
pub fn AllergyPage() -> impl IntoView {
    let state = RwSignal::new(ViewState::new());

    let search_action = Action::new(|input: &String| {
        let input = input.clone();
        async move { query_products(input).await }
    });

    let compute_action = Action::new(|product: &ProductSummary| {
        let product = product.clone();
        async move { compute_allergy(product).await }
    });

    Effect::new(move || {
        if let Some(result) = search_action.value().get() {
            state.update(|s| match result {
                Ok(products) => s.apply_search(products),
                Err(e) => s.fail(server_error_text(&e)),
            });
        }
    });

    Effect::new(move || {
        if let Some(result) = compute_action.value().get() {
            state.update(|s| match result {
                Ok(report) => s.apply_report(report),
                Err(e) => s.fail(server_error_text(&e)),
            });
        }
    });

    let on_submit = Callback::new(move |input: String| {
        let mut submission = None;
        state.update(|s| submission = s.start_submission(&input));

        match submission {
            Some(Submission::Search(text)) => {
                search_action.dispatch(text);
            }
            Some(Submission::Compute(product)) => {
                compute_action.dispatch(product);
            }
            None => {}
        }
    });

    let on_select = Callback::new(move |product: ProductSummary| {
        let mut started = false;
        state.update(|s| {
            if s.begin_request() {
                s.select_product(product.clone());
                started = true;
            }
        });
        if started {
            compute_action.dispatch(product);
        }
    });

    let on_mode_change = Callback::new(move |mode: SearchMode| {
        state.update(|s| s.set_search_mode(mode));
    });
    let on_back = Callback::new(move |()| state.update(|s| s.back_to_products()));
    let on_close_error = Callback::new(move |()| state.update(|s| s.dismiss_error()));

    let mode = Signal::derive(move || state.with(|s| s.search_mode));
    let loading = Signal::derive(move || state.with(|s| s.loading));
    let products = Signal::derive(move || state.with(|s| s.products.clone()));

    view! {
        <div class="min-h-screen bg-gray-50 font-sans text-gray-900">
            <header class="bg-white shadow-sm sticky top-0 z-40 border-b border-gray-200">
                <div class="max-w-3xl mx-auto px-4 h-16 flex items-center gap-2">
                    <span class="text-2xl">"🥜"</span>
                    <h1 class="text-xl font-bold text-emerald-700">"Allergy Lens"</h1>
                </div>
            </header>

            <main class="max-w-3xl mx-auto px-4 py-8">
                <section class="bg-white rounded-2xl shadow-sm p-6 mb-8 border border-gray-100">
                    <SearchBar
                        mode=mode
                        loading=loading
                        on_mode_change=on_mode_change
                        on_submit=on_submit
                    />
                </section>

                {move || {
                    let (display_mode, report) = state.with(|s| (s.display_mode, s.report.clone()));
                    match (display_mode, report) {
                        (DisplayMode::AllergyResult, Some(report)) => view! {
                            <AllergyPanel report=report on_back=on_back />
                        }.into_any(),
                        _ => view! {
                            <ProductList products=products on_select=on_select />
                        }.into_any(),
                    }
                }}
            </main>

            <Show when=move || loading.get()>
                <div class="fixed inset-0 z-40 bg-white/60 flex items-center justify-center">
                    <Loading message="Loading..." />
                </div>
            </Show>

            {move || {
                state.with(|s| s.error.clone()).map(|message| view! {
                    <ErrorModal message=message on_close=on_close_error />
                })
            }}
        </div>
    }
}
