//! Loading and Error Pages

use leptos::prelude::*;

use crate::views::{ErrorPage, LoadingPage};

#[component]
pub fn LoadingPlaceholder(page: LoadingPage) -> impl IntoView {
    view! {
        <div id=page.id class="loading">{page.text}</div>
    }
}

#[component]
pub fn ErrorMessage(page: ErrorPage) -> impl IntoView {
    view! {
        <div class="error-page">
            <div data-testid=page.test_id class="error-message">{page.title}</div>
            {page.detail.map(|detail| view! { <p class="error-detail">{detail}</p> })}
        </div>
    }
}
