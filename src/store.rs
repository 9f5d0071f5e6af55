//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::containers::{Attachment, NewBillContainer, ReceiptPreview, SubmitState};
use crate::views::BillsView;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Bills page: loading, error or the fetched list
    pub bills: BillsView,
    /// Receipt shown in the modal, if open
    pub receipt: Option<ReceiptPreview>,
    /// Mirror of the new bill container state
    pub attachment: Attachment,
    pub submit: SubmitState,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_bills(store: &AppStore, view: BillsView) {
    *store.bills().write() = view;
}

/// Fresh bills page: loading, no receipt open
pub fn store_reset_bills_page(store: &AppStore) {
    store_set_bills(store, BillsView::Loading);
    store_close_receipt(store);
}

pub fn store_open_receipt(store: &AppStore, preview: ReceiptPreview) {
    *store.receipt().write() = Some(preview);
}

pub fn store_close_receipt(store: &AppStore) {
    *store.receipt().write() = None;
}

/// Keep the store in step with a new bill container
pub fn store_follow_new_bill(store: AppStore, container: &NewBillContainer) {
    container.subscribe(std::rc::Rc::new(move |attachment: &Attachment, submit: &SubmitState| {
        *store.attachment().write() = attachment.clone();
        *store.submit().write() = submit.clone();
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_closes_receipt() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(AppState::default());
            store_set_bills(&store, BillsView::Ready(Vec::new()));
            store_open_receipt(
                &store,
                ReceiptPreview {
                    url: Some("https://localhost/a.png".to_string()),
                    file_name: Some("a.png".to_string()),
                    width: 400,
                },
            );
            assert!(store.receipt().get_untracked().is_some());

            store_reset_bills_page(&store);
            assert_eq!(store.receipt().get_untracked(), None);
            assert_eq!(store.bills().get_untracked(), BillsView::Loading);
        });
    }
}
