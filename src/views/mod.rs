//! View Renderers
//!
//! Pure functions from typed view-state to render models. Components only
//! turn these models into markup.

mod bills;
mod layout;
mod new_bill;
mod pages;

pub use bills::{render_bills, sort_newest_first, BillRow, BillsPage, BillsTable, BillsView};
pub use layout::{render_layout, VerticalLayout};
pub use new_bill::{render_new_bill, AttachmentNotice, NewBillPage};
pub use pages::{render_error, ErrorPage, LoadingPage};
