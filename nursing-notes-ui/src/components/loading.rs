//! Loading Component
//!
//! Loading spinners and skeleton states.

use leptos::*;

/// Full-page loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="h-8 w-8 animate-spin rounded-full border-2 border-slate-300 border-t-slate-900" />
        </div>
    }
}

/// Skeleton loader for note cards
#[component]
pub fn CardSkeleton(
    #[prop(default = 3)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
            {(0..count).map(|_| view! {
                <div class="rounded-lg border border-slate-200 bg-white p-4 animate-pulse">
                    <div class="h-5 bg-slate-200 rounded w-1/3 mb-3" />
                    <div class="h-4 bg-slate-200 rounded w-1/2 mb-4" />
                    <div class="h-4 bg-slate-200 rounded w-2/3" />
                </div>
            }).collect_view()}
        </div>
    }
}
