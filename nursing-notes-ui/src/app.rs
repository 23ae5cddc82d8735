//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::Toast;
use crate::pages::Dashboard;
use crate::state::notice::provide_notice_board;
use crate::state::query::provide_query_client;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_notice_board();
    provide_query_client();

    view! {
        <Router>
            <div class="min-h-screen bg-slate-50 text-slate-900">
                <main class="container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"找不到頁面"</h1>
            <p class="text-slate-500 mb-6">"您要找的頁面不存在。"</p>
            <A
                href="/"
                class="px-6 py-3 bg-slate-900 text-white hover:bg-slate-800 rounded-lg font-medium transition-colors"
            >
                "回到儀表板"
            </A>
        </div>
    }
}
