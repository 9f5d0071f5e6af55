//! Containers
//!
//! Page logic behind the components: fetch, validate, submit, navigate.
//! Containers are plain structs so they can be driven without a DOM.

pub mod bills;
pub mod new_bill;

use std::rc::Rc;

use crate::routes::Route;

/// Navigation callback handed to every container
pub type Navigate = Rc<dyn Fn(Route)>;

/// Blocking user notification (`window.alert` in the browser)
pub type Alert = Rc<dyn Fn(&str)>;

pub use bills::{BillsContainer, DisplayBill, LoadSequence, ReceiptPreview};
pub use new_bill::{AttachedReceipt, Attachment, Listener, NewBillContainer, NewBillForm, SubmitState};
