//! Summary Panel Component
//!
//! Template picker and generated summary for the selected patient.

use leptos::*;
use nursing_notes::display::{ButtonSize, ButtonVariant};

use crate::api::{self, SummaryResult, TemplateListResponse};
use crate::components::{Button, Loading};
use crate::state::notice::{use_notice_board, Notice};
use crate::state::query::create_query;

const DEFAULT_TEMPLATE: &str = "general";

#[component]
pub fn SummaryPanel(
    #[prop(into)]
    patient_id: String,
    /// Panel subtitle, as resolved for the note card
    #[prop(into)]
    patient_name: String,
) -> impl IntoView {
    let notices = use_notice_board();
    let templates = create_query::<TemplateListResponse, _, _>("templates", api::fetch_templates);

    let template = create_rw_signal(DEFAULT_TEMPLATE.to_string());
    let result = create_rw_signal(None::<SummaryResult>);
    let generating = create_rw_signal(false);

    let available = move || {
        templates
            .data
            .get()
            .map(|t| t.summarizer_available)
            .unwrap_or(false)
    };

    let patient = store_value(patient_id);
    let generate = move |_: web_sys::MouseEvent| {
        let patient_id = patient.get_value();
        let key = template.get_untracked();
        generating.set(true);

        spawn_local(async move {
            match api::generate_summary(&patient_id, &key).await {
                Ok(summary) => {
                    notices.post(Notice::ready(&summary));
                    result.set(Some(summary));
                }
                Err(failure) => {
                    web_sys::console::error_1(
                        &format!("Failed to generate summary: {}", failure).into(),
                    );
                    notices.post(Notice::SummaryFailed(failure));
                }
            }
            generating.set(false);
        });
    };

    view! {
        <section class="rounded-lg border border-slate-200 bg-white p-6 shadow-sm">
            <div class="mb-4">
                <h2 class="text-xl font-semibold">"AI 病程摘要"</h2>
                <p class="text-sm text-slate-500">{patient_name}</p>
            </div>

            <div class="flex flex-wrap gap-2 mb-4">
                {move || {
                    templates.data.get().map(|list| {
                        list.templates.iter().map(|t| {
                            let key = t.key.clone();
                            let label = t.label.clone();
                            let is_active = {
                                let key = key.clone();
                                move || template.get() == key
                            };
                            view! {
                                <Button
                                    size=ButtonSize::Sm
                                    variant=Signal::derive(move || {
                                        if is_active() { ButtonVariant::Default } else { ButtonVariant::Outline }
                                    })
                                    on_click=move |_| template.set(key.clone())
                                >
                                    {label}
                                </Button>
                            }
                        }).collect_view()
                    })
                }}
            </div>

            <Button
                on_click=generate
                disabled=Signal::derive(move || generating.get() || !available())
            >
                {move || if generating.get() { "生成中..." } else { "生成摘要" }}
            </Button>

            {move || (!templates.loading.get() && !available()).then(|| view! {
                <p class="mt-2 text-xs text-slate-500">"摘要服務未設定 API 金鑰"</p>
            })}

            <div class="mt-6">
                {move || {
                    if generating.get() {
                        view! { <Loading /> }.into_view()
                    } else {
                        result.get().map(|summary| view! {
                            <div class="space-y-2">
                                <p class="text-xs text-slate-400">
                                    {format!(
                                        "{} · {} · {} 筆資料 · {}",
                                        summary.template_label, summary.patient_id, summary.record_count, summary.model
                                    )}
                                </p>
                                <pre class="whitespace-pre-wrap rounded-md bg-slate-50 p-4 text-sm leading-relaxed">
                                    {summary.summary}
                                </pre>
                            </div>
                        }).into_view()
                    }
                }}
            </div>
        </section>
    }
}
