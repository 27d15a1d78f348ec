// web_app/components/search.rs - Search-related UI components
//
// - SearchBar: Input field with submit button and mode toggle
// - SearchModeToggle: Radio buttons for product name / product URL

use leptos::prelude::*;
use crate::web_app::model::SearchMode;

pub const SEARCH_MODES: [(SearchMode, &str, &str); 2] = [
    (SearchMode::Query, "Product name", "Find a product, then pick it"),
    (SearchMode::Filter, "Product URL", "Check a product page directly"),
];

/// Search bar component
///
/// Submits the typed text and clears the field. Disabled while a request
/// is in flight.
#[component]
pub fn SearchBar(
    /// Current search mode
    #[prop(into)]
    mode: Signal<SearchMode>,
    /// Whether a request is in flight
    #[prop(into)]
    loading: Signal<bool>,
    /// Called when the user switches modes
    on_mode_change: Callback<SearchMode>,
    /// Called with the raw input on submit
    on_submit: Callback<String>,
) -> impl IntoView {
    let input = RwSignal::new(String::new());

    let submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let value = input.get_untracked();
        input.set(String::new());
        on_submit.run(value);
    };

    view! {
        <form on:submit=submit class="w-full">
            <div class="flex gap-4 mb-4">
                <div class="relative flex-1">
                    <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                        <span class="text-gray-400">"🔍"</span>
                    </div>
                    <input
                        type="text"
                        placeholder=move || mode.get().placeholder()
                        class="w-full pl-10 pr-4 py-3 border-2 border-gray-200 rounded-xl \
                               focus:ring-4 focus:ring-emerald-100 focus:border-emerald-500 \
                               outline-none text-lg transition-all shadow-sm disabled:bg-gray-100"
                        disabled=move || loading.get()
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                    />
                </div>
                <button
                    type="submit"
                    disabled=move || loading.get()
                    class="px-8 py-3 bg-emerald-600 text-white rounded-xl \
                           hover:bg-emerald-700 active:bg-emerald-800 transition-all \
                           font-semibold shadow-md disabled:bg-gray-400 disabled:cursor-not-allowed"
                >
                    "Search"
                </button>
            </div>

            <SearchModeToggle mode=mode on_change=on_mode_change />
        </form>
    }
}

/// Search mode toggle (product name / product URL)
#[component]
pub fn SearchModeToggle(
    #[prop(into)]
    mode: Signal<SearchMode>,
    on_change: Callback<SearchMode>,
) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-6">
            {SEARCH_MODES.into_iter().map(|(mode_value, label, description)| {
                let is_selected = move || mode.get() == mode_value;
                view! {
                    <label class="flex items-center gap-3 cursor-pointer group">
                        <input
                            type="radio"
                            name="search_mode"
                            checked=is_selected
                            on:change=move |_| on_change.run(mode_value)
                            class="h-4 w-4 text-emerald-600 focus:ring-emerald-500"
                        />
                        <div class="flex flex-col">
                            <span class=move || {
                                if is_selected() {
                                    "text-emerald-700 font-bold"
                                } else {
                                    "text-gray-700 font-medium group-hover:text-gray-900"
                                }
                            }>
                                {label}
                            </span>
                            <span class="text-xs text-gray-500">{description}</span>
                        </div>
                    </label>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_modes_cover_every_variant() {
        assert_eq!(SEARCH_MODES.len(), 2);
        assert_eq!(SEARCH_MODES[0].0, SearchMode::Query);
        assert_eq!(SEARCH_MODES[1].0, SearchMode::Filter);
        for (mode, label, _) in SEARCH_MODES {
            assert_eq!(mode.to_string(), label);
        }
    }

    #[test]
    fn test_placeholders_differ_per_mode() {
        assert_ne!(SearchMode::Query.placeholder(), SearchMode::Filter.placeholder());
        assert!(SearchMode::Filter.placeholder().contains("URL"));
    }
}
