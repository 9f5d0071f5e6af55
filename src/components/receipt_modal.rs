//! Receipt Modal
//!
//! Shows the receipt of the bill whose eye icon was clicked.

use leptos::html;
use leptos::prelude::*;

use crate::store::{store_close_receipt, use_app_store, AppStateStoreFields};

#[component]
pub fn ReceiptModal(body_ref: NodeRef<html::Div>) -> impl IntoView {
    let store = use_app_store();
    let is_open = move || store.receipt().read().is_some();

    view! {
        <div
            class=move || if is_open() { "modal open" } else { "modal" }
            id="modaleFile"
            data-testid="modal"
            aria-hidden=move || if is_open() { "false" } else { "true" }
        >
            <div class="modal-header">
                <h5 class="modal-title">"Justificatif"</h5>
                <button type="button" class="close" on:click=move |_| store_close_receipt(&store)>
                    "×"
                </button>
            </div>
            <div class="modal-body" node_ref=body_ref>
                {move || store.receipt().get().map(|preview| match preview.url {
                    Some(url) => view! {
                        <img
                            width=preview.width.to_string()
                            src=url
                            alt=preview.file_name.unwrap_or_else(|| "Bill".to_string())
                        />
                    }.into_any(),
                    None => view! {
                        <p class="no-receipt">"Aucun justificatif pour cette note de frais"</p>
                    }.into_any(),
                })}
            </div>
        </div>
    }
}
