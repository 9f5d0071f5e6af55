//! Bills Container
//!
//! Loads the employee's bills and handles the list actions.

use std::cell::Cell;
use std::rc::Rc;

use chrono::NaiveDate;

use super::Navigate;
use crate::commands::BillStore;
use crate::config::AppConfig;
use crate::format::{format_date, parse_iso_date, status_label};
use crate::models::Bill;
use crate::routes::Route;
use crate::views::BillsView;

/// Bill prepared for the list: parsed date plus display strings
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayBill {
    pub bill: Bill,
    /// `None` when the stored date is corrupted
    pub parsed_date: Option<NaiveDate>,
    pub date: String,
    pub status: &'static str,
}

impl From<Bill> for DisplayBill {
    fn from(bill: Bill) -> Self {
        let status = status_label(bill.status);
        match parse_iso_date(&bill.date) {
            Some(parsed) => DisplayBill {
                date: format_date(parsed),
                parsed_date: Some(parsed),
                status,
                bill,
            },
            None => {
                log::warn!("[Bills] unparsable date {:?} for bill {}", bill.date, bill.id);
                DisplayBill {
                    date: bill.date.clone(),
                    parsed_date: None,
                    status,
                    bill,
                }
            }
        }
    }
}

/// Receipt shown in the modal after clicking the eye icon
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptPreview {
    pub url: Option<String>,
    pub file_name: Option<String>,
    pub width: u32,
}

/// Numbers bill loads so that only the latest one publishes its result
#[derive(Debug, Default)]
pub struct LoadSequence {
    latest: Cell<u64>,
}

impl LoadSequence {
    /// Start a load and return its ticket
    pub fn begin(&self) -> u64 {
        let ticket = self.latest.get() + 1;
        self.latest.set(ticket);
        ticket
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.get() == ticket
    }
}

pub struct BillsContainer {
    store: Rc<dyn BillStore>,
    navigate: Navigate,
    receipt_scale: f64,
}

impl BillsContainer {
    pub fn new(store: Rc<dyn BillStore>, navigate: Navigate, config: &AppConfig) -> Self {
        Self {
            store,
            navigate,
            receipt_scale: config.receipt_scale,
        }
    }

    /// Fetch and format; the view decides the order
    pub async fn load_bills(&self) -> BillsView {
        match self.store.get().await {
            Ok(bills) => {
                log::info!("[Bills] loaded {} bills", bills.len());
                BillsView::Ready(bills.into_iter().map(DisplayBill::from).collect())
            }
            Err(e) => {
                log::error!("[Bills] fetch failed ({:?}): {}", e.kind, e.message);
                BillsView::Error(e)
            }
        }
    }

    pub fn handle_click_new_bill(&self) {
        (self.navigate)(Route::NewBill);
    }

    pub fn handle_click_icon_eye(&self, bill: &Bill, modal_width: f64) -> ReceiptPreview {
        let width = (modal_width.max(0.0) * self.receipt_scale).floor() as u32;
        if bill.file_url.is_none() {
            log::warn!("[Bills] bill {} has no receipt", bill.id);
        }
        ReceiptPreview {
            url: bill.file_url.clone(),
            file_name: bill.file_name.clone(),
            width,
        }
    }
}
