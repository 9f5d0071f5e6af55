//! UI Components
//!
//! Leptos components rendering the view models.

mod bills_screen;
mod dashboard_shell;
mod new_bill_screen;
mod receipt_modal;
mod status_pages;

pub use bills_screen::BillsScreen;
pub use dashboard_shell::DashboardShell;
pub use new_bill_screen::NewBillScreen;
pub use receipt_modal::ReceiptModal;
pub use status_pages::{ErrorMessage, LoadingPlaceholder};
