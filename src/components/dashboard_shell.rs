//! Dashboard Shell
//!
//! Vertical navigation plus the page content.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::routes::Route;
use crate::views::render_layout;

#[component]
pub fn DashboardShell(route: Route, children: Children) -> impl IntoView {
    let ctx = use_app_context();
    let layout = render_layout(route);
    let icon_class = |active: bool| if active { "nav-icon active-icon" } else { "nav-icon" };

    view! {
        <div class="page-layout">
            <nav class="vertical-navbar">
                <div class=layout.title_class data-testid="title">"Billed"</div>
                <div
                    id="layout-icon1"
                    data-testid="icon-window"
                    class=icon_class(layout.window_active)
                    on:click=move |_| ctx.navigate(Route::Bills)
                >
                    "🗂"
                </div>
                <div
                    id="layout-icon2"
                    data-testid="icon-mail"
                    class=icon_class(layout.mail_active)
                    on:click=move |_| ctx.navigate(Route::NewBill)
                >
                    "✉"
                </div>
            </nav>
            <main class="content">{children()}</main>
        </div>
    }
}
