//! Bills Screen
//!
//! The employee's bills, newest first, with receipt preview.

use std::rc::Rc;

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DashboardShell, ErrorMessage, LoadingPlaceholder, ReceiptModal};
use crate::context::use_app_context;
use crate::routes::Route;
use crate::store::{
    store_open_receipt, store_reset_bills_page, store_set_bills, use_app_store, AppStateStoreFields,
};
use crate::views::{render_bills, BillRow, BillsPage, BillsView};

/// Used when the modal has not been laid out yet
const FALLBACK_MODAL_WIDTH: f64 = 800.0;

#[component]
pub fn BillsScreen() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let container = StoredValue::new_local(Rc::new(ctx.bills_container()));
    let modal_body = NodeRef::<html::Div>::new();

    // Load bills on mount
    Effect::new(move |_| {
        store_reset_bills_page(&store);
        let container = container.get_value();
        let loads = ctx.bill_loads();
        let ticket = loads.begin();
        spawn_local(async move {
            let view = container.load_bills().await;
            if loads.is_current(ticket) {
                store_set_bills(&store, view);
            } else {
                log::debug!("[Bills] dropping stale load {}", ticket);
            }
        });
    });

    let open_receipt = move |id: String| {
        let guard = store.bills().read();
        let BillsView::Ready(bills) = &*guard else { return };
        let Some(bill) = bills.iter().find(|b| b.bill.id == id) else {
            log::warn!("[Bills] no bill with id {}", id);
            return;
        };
        let width = modal_body
            .get()
            .map(|el| el.client_width() as f64)
            .filter(|w| *w > 0.0)
            .unwrap_or(FALLBACK_MODAL_WIDTH);
        let preview = container.get_value().handle_click_icon_eye(&bill.bill, width);
        // release the read lock before writing to the store
        drop(guard);
        store_open_receipt(&store, preview);
    };

    let new_bill = move |_| container.get_value().handle_click_new_bill();

    view! {
        <DashboardShell route=Route::Bills>
            <div class="content-header">
                <div class="content-title">"Mes notes de frais"</div>
                <button type="button" data-testid="btn-new-bill" class="btn btn-primary" on:click=new_bill>
                    "Nouvelle note de frais"
                </button>
            </div>
            {move || match render_bills(&store.bills().get()) {
                BillsPage::Loading(page) => view! { <LoadingPlaceholder page=page /> }.into_any(),
                BillsPage::Error(page) => view! { <ErrorMessage page=page /> }.into_any(),
                BillsPage::List(table) => view! {
                    <table id="example" class="table table-striped">
                        <thead>
                            <tr>
                                <th>"Type"</th>
                                <th>"Nom"</th>
                                <th>"Date"</th>
                                <th>"Montant"</th>
                                <th>"Statut"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody data-testid="tbody">
                            {table.rows.into_iter().map(|row| bill_row(row, open_receipt)).collect_view()}
                        </tbody>
                    </table>
                }.into_any(),
            }}
            <ReceiptModal body_ref=modal_body />
        </DashboardShell>
    }
}

fn bill_row(row: BillRow, open_receipt: impl Fn(String) + Copy + 'static) -> impl IntoView {
    let id = row.id.clone();
    view! {
        <tr>
            <td>{row.expense_type}</td>
            <td>{row.name}</td>
            <td>{row.date}</td>
            <td>{row.amount}</td>
            <td>{row.status}</td>
            <td>
                <div class="icon-actions">
                    <div
                        data-testid="icon-eye"
                        class:disabled=!row.has_receipt
                        on:click=move |_| open_receipt(id.clone())
                    >
                        "👁"
                    </div>
                </div>
            </td>
        </tr>
    }
}
