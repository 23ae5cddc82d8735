//! Note Card Component
//!
//! Presents one nursing note. All fallbacks (unnamed patient, missing or
//! malformed date, unknown labels) are resolved by `NoteCardView`; this
//! component only lays the fields out.

use leptos::*;
use nursing_notes::display::class_names;
use nursing_notes::notes::{Badge, NoteCardView, NoteRecord};
use web_sys::MouseEvent;

const CARD_CLASS: &str =
    "rounded-lg border border-slate-200 bg-white p-4 shadow-sm transition-shadow hover:shadow-md";
const BADGE_BASE: &str = "inline-flex items-center rounded-full px-2.5 py-0.5 font-medium";

#[component]
pub fn NoteCard(
    note: NoteRecord,
    /// Passed straight to the card's click handler
    #[prop(optional, into)]
    on_click: Option<Callback<MouseEvent>>,
    #[prop(optional, into)]
    selected: MaybeSignal<bool>,
) -> impl IntoView {
    let card = NoteCardView::render(&note);
    let clickable = on_click.is_some();

    let class = move || {
        class_names([
            CARD_CLASS,
            if clickable { "cursor-pointer" } else { "" },
            if selected.get() { "ring-2 ring-slate-900" } else { "" },
        ])
    };

    let secondary = (!card.secondary_line.is_empty()).then(|| {
        view! { <p class="text-sm text-slate-500">{card.secondary_line.clone()}</p> }
    });
    let diagnosis = card.diagnosis.clone().map(|d| {
        view! { <p class="mt-3 text-sm text-slate-700 line-clamp-2">{d}</p> }
    });

    view! {
        <article
            class=class
            on:click=move |ev| {
                if let Some(on_click) = on_click {
                    on_click.call(ev);
                }
            }
        >
            <div class="flex items-start justify-between gap-3">
                <div class="min-w-0">
                    <h3 class="truncate font-semibold text-slate-900">{card.name.clone()}</h3>
                    {secondary}
                </div>
                <div class="flex shrink-0 gap-1">
                    <BadgeView badge=card.priority.clone() />
                    <BadgeView badge=card.status.clone() />
                </div>
            </div>
            {diagnosis}
            <p class="mt-3 text-xs text-slate-400">{card.date.clone()}</p>
        </article>
    }
}

#[component]
fn BadgeView(badge: Badge) -> impl IntoView {
    view! {
        <span class=class_names([BADGE_BASE, badge.class.as_str()])>{badge.label}</span>
    }
}
