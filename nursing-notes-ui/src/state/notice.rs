//! Summary notices
//!
//! One notice is shown at a time. A newer notice replaces the current one,
//! and a dismissal timer only clears the notice it was started for.

use leptos::*;

use crate::api::{ApiFailure, SummaryResult};

const READY_DISMISS_MS: u32 = 4000;
const FAILED_DISMISS_MS: u32 = 8000;

/// Outcome of a summary request, as shown in the corner toast
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    SummaryReady {
        template_label: String,
        patient_id: String,
        record_count: usize,
    },
    SummaryFailed(ApiFailure),
}

impl Notice {
    pub fn ready(summary: &SummaryResult) -> Self {
        Notice::SummaryReady {
            template_label: summary.template_label.clone(),
            patient_id: summary.patient_id.clone(),
            record_count: summary.record_count,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::SummaryFailed(_))
    }

    pub fn text(&self) -> String {
        match self {
            Notice::SummaryReady {
                template_label,
                patient_id,
                record_count,
            } => format!("{template_label}已生成（{patient_id}，{record_count} 筆資料）"),
            Notice::SummaryFailed(failure) => failure_text(failure),
        }
    }

    fn dismiss_after_ms(&self) -> u32 {
        if self.is_error() {
            FAILED_DISMISS_MS
        } else {
            READY_DISMISS_MS
        }
    }
}

/// Nurse-facing wording for the server's summary error codes
fn failure_text(failure: &ApiFailure) -> String {
    match failure.code.as_deref() {
        Some("NO_DATA") => "此病人沒有可摘要的病程資料".to_string(),
        Some("SUMMARIZER_UNAVAILABLE") => "摘要服務未設定或暫時無法連線".to_string(),
        Some("SUMMARIZER_TIMEOUT") => "摘要服務回應逾時，請稍後再試".to_string(),
        Some("SUMMARIZER_ERROR") => format!("摘要服務錯誤：{}", failure.message),
        Some("INVALID_WINDOW") => "時間區間格式錯誤".to_string(),
        _ => format!("摘要生成失敗：{}", failure.message),
    }
}

/// The notice currently on screen
#[derive(Clone, Copy)]
pub struct NoticeBoard {
    pub current: RwSignal<Option<Notice>>,
    serial: RwSignal<u64>,
}

/// Provide the notice board to the component tree
pub fn provide_notice_board() {
    provide_context(NoticeBoard {
        current: create_rw_signal(None),
        serial: create_rw_signal(0),
    });
}

pub fn use_notice_board() -> NoticeBoard {
    use_context::<NoticeBoard>().expect("NoticeBoard not found")
}

impl NoticeBoard {
    /// Show `notice`, replacing whatever is on screen
    pub fn post(&self, notice: Notice) {
        let delay = notice.dismiss_after_ms();
        let id = self.serial.get_untracked() + 1;
        self.serial.set(id);
        self.current.set(Some(notice));

        let board = *self;
        gloo_timers::callback::Timeout::new(delay, move || {
            if board.serial.get_untracked() == id {
                board.current.set(None);
            }
        })
        .forget();
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(code: Option<&str>, message: &str) -> Notice {
        Notice::SummaryFailed(ApiFailure {
            code: code.map(str::to_string),
            message: message.to_string(),
        })
    }

    #[test]
    fn test_ready_notice_carries_outcome() {
        let notice = Notice::SummaryReady {
            template_label: "ISBAR 交班報告".to_string(),
            patient_id: "A123".to_string(),
            record_count: 12,
        };

        assert!(!notice.is_error());
        assert_eq!(notice.text(), "ISBAR 交班報告已生成（A123，12 筆資料）");
        assert_eq!(notice.dismiss_after_ms(), READY_DISMISS_MS);
    }

    #[test]
    fn test_failure_text_follows_error_code() {
        assert_eq!(failure(Some("NO_DATA"), "x").text(), "此病人沒有可摘要的病程資料");
        assert_eq!(
            failure(Some("SUMMARIZER_TIMEOUT"), "x").text(),
            "摘要服務回應逾時，請稍後再試"
        );
        assert_eq!(
            failure(Some("SUMMARIZER_ERROR"), "status 429").text(),
            "摘要服務錯誤：status 429"
        );
    }

    #[test]
    fn test_failure_without_code_shows_message() {
        let notice = failure(None, "Network error: offline");
        assert!(notice.is_error());
        assert_eq!(notice.text(), "摘要生成失敗：Network error: offline");
        assert_eq!(notice.dismiss_after_ms(), FAILED_DISMISS_MS);
    }
}
