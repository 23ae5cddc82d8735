//! Summary toast
//!
//! Corner toast for the notice board; clicking it dismisses it early.

use leptos::*;

use crate::state::notice::{use_notice_board, Notice};

#[component]
pub fn Toast() -> impl IntoView {
    let board = use_notice_board();

    view! {
        <div class="fixed bottom-6 right-4 z-50">
            {move || board.current.get().map(|notice| view! {
                <NoticeView notice=notice on_dismiss=move || board.dismiss() />
            })}
        </div>
    }
}

#[component]
fn NoticeView<F>(notice: Notice, on_dismiss: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    let (icon, tone) = if notice.is_error() {
        ("✕", "bg-red-600")
    } else {
        ("✓", "bg-emerald-600")
    };

    view! {
        <button
            type="button"
            class=format!("flex max-w-sm items-start gap-3 rounded-lg px-4 py-3 text-left text-white shadow-lg {tone}")
            on:click=move |_| on_dismiss()
        >
            <span class="text-lg leading-none">{icon}</span>
            <span class="text-sm font-medium">{notice.text()}</span>
        </button>
    }
}
