pub mod center;
pub mod global_context;
pub mod left;
pub mod tabs;
pub mod top_header;

use center::tabs::Tabs;
use global_context::AppGlobalContext;
use left::Sidebar;
use leptos::prelude::*;
use top_header::TopHeader;

/// Каркас консоли: шапка, навигация слева, вкладки справа.
///
/// ```text
/// +---------------------------+
/// |         TopHeader         |
/// +---------------------------+
/// |  Sidebar  |     Tabs      |
/// +---------------------------+
/// ```
///
/// Reads the active tab from the URL once on mount.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    ctx.init_router_integration();

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <aside data-zone="left" class="left" class:hidden=move || !ctx.left_open.get()>
                    <Sidebar />
                </aside>
                <main data-zone="center" class="app-main app-tabs">
                    <Tabs />
                </main>
            </div>
        </div>
    }
}
