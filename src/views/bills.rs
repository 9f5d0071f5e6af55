use std::cmp::Ordering;

use crate::containers::DisplayBill;
use crate::error::StoreError;
use crate::format::format_amount;

use super::pages::{render_error, ErrorPage, LoadingPage};

/// State of the bills page
#[derive(Debug, Clone, PartialEq, Default)]
pub enum BillsView {
    #[default]
    Loading,
    Error(StoreError),
    Ready(Vec<DisplayBill>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BillRow {
    pub id: String,
    pub expense_type: &'static str,
    pub name: String,
    pub date: String,
    pub amount: String,
    pub status: &'static str,
    pub has_receipt: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BillsTable {
    pub title: &'static str,
    pub rows: Vec<BillRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BillsPage {
    Loading(LoadingPage),
    Error(ErrorPage),
    List(BillsTable),
}

/// Newest first by calendar date; undated records last, in input order
pub fn sort_newest_first(bills: &mut [DisplayBill]) {
    bills.sort_by(|a, b| match (a.parsed_date, b.parsed_date) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

pub fn render_bills(view: &BillsView) -> BillsPage {
    match view {
        BillsView::Loading => BillsPage::Loading(LoadingPage::default()),
        BillsView::Error(e) => BillsPage::Error(render_error(e)),
        BillsView::Ready(bills) => {
            let mut bills = bills.clone();
            sort_newest_first(&mut bills);
            let rows = bills
                .into_iter()
                .map(|b| BillRow {
                    expense_type: b.bill.expense_type.label(),
                    amount: format_amount(b.bill.amount),
                    has_receipt: b.bill.is_complete(),
                    id: b.bill.id,
                    name: b.bill.name,
                    date: b.date,
                    status: b.status,
                })
                .collect();
            BillsPage::List(BillsTable {
                title: "Mes notes de frais",
                rows,
            })
        }
    }
}
