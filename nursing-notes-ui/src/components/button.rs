//! Button Component
//!
//! Design-system button; classes come from the shared `button_class`.

use leptos::*;
use nursing_notes::display::{button_class, ButtonSize, ButtonVariant};
use web_sys::MouseEvent;

#[component]
pub fn Button(
    #[prop(optional, into)]
    variant: MaybeSignal<ButtonVariant>,
    #[prop(optional)]
    size: ButtonSize,
    /// Extra classes appended after the variant and size
    #[prop(optional, into)]
    class: Option<String>,
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    #[prop(optional, into)]
    on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let classes = move || button_class(variant.get(), size, class.as_deref());

    view! {
        <button
            type="button"
            class=classes
            disabled=move || disabled.get()
            on:click=move |ev| {
                if let Some(on_click) = on_click {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
