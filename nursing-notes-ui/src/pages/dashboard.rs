//! Dashboard Page
//!
//! Note cards for every nursing note; selecting a card opens the summary
//! panel for that patient.

use leptos::*;
use nursing_notes::display::{ButtonSize, ButtonVariant};
use nursing_notes::notes::{NoteCardView, NoteRecord};

use crate::api;
use crate::components::{Button, CardSkeleton, NoteCard, SummaryPanel};
use crate::state::query::{create_query, use_query_client};

const NOTES_KEY: &str = "notes";

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let client = use_query_client();
    let notes = create_query::<Vec<NoteRecord>, _, _>(NOTES_KEY, api::fetch_notes);
    let selected = create_rw_signal(None::<usize>);

    let selected_note = move || {
        let index = selected.get()?;
        notes.data.get().and_then(|list| list.get(index).cloned())
    };

    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"護理紀錄"</h1>
                    <p class="text-slate-500 mt-1">"急診護理紀錄與 AI 摘要"</p>
                </div>

                <Button
                    variant=ButtonVariant::Outline
                    size=ButtonSize::Sm
                    on_click=move |_| client.invalidate(NOTES_KEY)
                >
                    "重新整理"
                </Button>
            </div>

            {move || {
                if let Some(list) = notes.data.get() {
                    if list.is_empty() {
                        return view! {
                            <p class="py-12 text-center text-slate-500">"目前沒有護理紀錄"</p>
                        }.into_view();
                    }

                    return view! {
                        <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
                            {list.iter().cloned().enumerate().map(|(i, note)| view! {
                                <NoteCard
                                    note=note
                                    selected=Signal::derive(move || selected.get() == Some(i))
                                    on_click=move |_| selected.set(Some(i))
                                />
                            }).collect_view()}
                        </div>
                    }.into_view();
                }

                if let Some(error) = notes.error.get() {
                    return view! {
                        <div class="rounded-lg border border-red-200 bg-red-50 p-6 text-center">
                            <p class="text-red-700 mb-4">{format!("無法載入護理紀錄：{}", error)}</p>
                            <Button
                                variant=ButtonVariant::Secondary
                                on_click=move |_| client.invalidate(NOTES_KEY)
                            >
                                "重試"
                            </Button>
                        </div>
                    }.into_view();
                }

                view! { <CardSkeleton count=6 /> }.into_view()
            }}

            {move || {
                selected_note().map(|note| match summary_target(&note) {
                    Some((patient_id, patient_name)) => view! {
                        <SummaryPanel patient_id=patient_id patient_name=patient_name />
                    }.into_view(),
                    None => view! {
                        <p class="text-sm text-slate-500">"此筆紀錄沒有病歷號，無法生成摘要"</p>
                    }.into_view(),
                })
            }}
        </div>
    }
}

/// Patient id and display name for the summary panel; `None` without an id
fn summary_target(note: &NoteRecord) -> Option<(String, String)> {
    let patient_id = note.patient_id.as_deref().map(str::trim).filter(|id| !id.is_empty())?;
    Some((patient_id.to_string(), NoteCardView::render(note).name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_target_uses_card_name() {
        let named = NoteRecord::new().patient_id("A123").patient_name("王小明");
        let blank = NoteRecord::new().patient_id(" A123 ").patient_name("  ");

        assert_eq!(summary_target(&named), Some(("A123".into(), "王小明".into())));
        assert_eq!(summary_target(&blank), Some(("A123".into(), "未命名病人".into())));
    }

    #[test]
    fn test_summary_target_needs_patient_id() {
        assert_eq!(summary_target(&NoteRecord::new().patient_name("王小明")), None);
        assert_eq!(summary_target(&NoteRecord::new().patient_id("   ")), None);
    }
}
