//! State Management
//!
//! Summary notices and the shared query cache.

pub mod notice;
pub mod query;

pub use notice::{provide_notice_board, use_notice_board, Notice, NoticeBoard};
pub use query::{create_query, provide_query_client, use_query_client, Query, QueryClient};
