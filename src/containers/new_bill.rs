//! New Bill Container
//!
//! Receipt selection and form submission.
//!
//! Attachment lifecycle: `Empty -> Validating -> Attached | Rejected`.
//! Selecting a file re-enters `Validating` from any state, unless an upload
//! is still in flight. A rejected file leaves no attachment reference.
//!
//! Submitting updates the pending record created by the upload when there is
//! one, and creates a new record otherwise.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::{Alert, Navigate};
use crate::commands::BillStore;
use crate::config::AppConfig;
use crate::error::NewBillError;
use crate::format::parse_iso_date;
use crate::models::{Bill, BillStatus, BillUpdate, ExpenseType, NewBillRecord, ReceiptFile};
use crate::routes::Route;
use crate::session::Session;

#[derive(Debug, Clone, PartialEq)]
pub struct AttachedReceipt {
    pub file_url: String,
    pub file_name: String,
    /// Key of the pending record created by the upload
    pub bill_id: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Attachment {
    #[default]
    Empty,
    Validating { file_name: String },
    Attached(AttachedReceipt),
    Rejected { file_name: String },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Failed(NewBillError),
    Done(Bill),
}

/// Raw form values, as read from the inputs
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewBillForm {
    pub expense_type: String,
    pub name: String,
    pub amount: String,
    pub date: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
}

fn parse_number(field: &'static str, value: &str) -> Result<Option<f64>, NewBillError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    match value.replace(',', ".").parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => Ok(Some(n)),
        _ => Err(NewBillError::InvalidNumber {
            field,
            value: value.to_string(),
        }),
    }
}

impl NewBillForm {
    /// Build the payload: numbers parsed, status pending, email from session
    pub fn into_record(
        self,
        session: &Session,
        receipt: Option<&AttachedReceipt>,
        default_pct: f64,
    ) -> Result<NewBillRecord, NewBillError> {
        let expense_type = ExpenseType::from_label(self.expense_type.trim())
            .ok_or(NewBillError::MissingField("type"))?;
        let amount = parse_number("amount", &self.amount)?.ok_or(NewBillError::MissingField("amount"))?;
        let date = self.date.trim();
        if date.is_empty() {
            return Err(NewBillError::MissingField("date"));
        }
        if parse_iso_date(date).is_none() {
            return Err(NewBillError::InvalidDate(date.to_string()));
        }
        let vat = parse_number("vat", &self.vat)?;
        let pct = parse_number("pct", &self.pct)?.unwrap_or(default_pct);

        Ok(NewBillRecord {
            email: session.email.clone(),
            expense_type,
            name: self.name.trim().to_string(),
            amount,
            date: date.to_string(),
            vat,
            pct,
            commentary: self.commentary,
            file_url: receipt.map(|r| r.file_url.clone()),
            file_name: receipt.map(|r| r.file_name.clone()),
            status: BillStatus::Pending,
        })
    }
}

/// Called after every attachment or submit state change
pub type Listener = Rc<dyn Fn(&Attachment, &SubmitState)>;

pub struct NewBillContainer {
    store: Rc<dyn BillStore>,
    session: Session,
    navigate: Navigate,
    alert: Alert,
    config: AppConfig,
    attachment: RefCell<Attachment>,
    submit_state: RefCell<SubmitState>,
    uploading: Cell<bool>,
    submitting: Cell<bool>,
    listener: RefCell<Option<Listener>>,
}

impl NewBillContainer {
    pub fn new(
        store: Rc<dyn BillStore>,
        session: Session,
        navigate: Navigate,
        alert: Alert,
        config: AppConfig,
    ) -> Self {
        Self {
            store,
            session,
            navigate,
            alert,
            config,
            attachment: RefCell::new(Attachment::Empty),
            submit_state: RefCell::new(SubmitState::Idle),
            uploading: Cell::new(false),
            submitting: Cell::new(false),
            listener: RefCell::new(None),
        }
    }

    pub fn subscribe(&self, listener: Listener) {
        *self.listener.borrow_mut() = Some(listener);
        self.notify();
    }

    fn notify(&self) {
        let listener = self.listener.borrow().clone();
        if let Some(listener) = listener {
            listener(&self.attachment(), &self.submit_state());
        }
    }

    pub fn attachment(&self) -> Attachment {
        self.attachment.borrow().clone()
    }

    pub fn attached(&self) -> Option<AttachedReceipt> {
        match &*self.attachment.borrow() {
            Attachment::Attached(receipt) => Some(receipt.clone()),
            _ => None,
        }
    }

    pub fn submit_state(&self) -> SubmitState {
        self.submit_state.borrow().clone()
    }

    pub fn is_busy(&self) -> bool {
        self.uploading.get() || self.submitting.get()
    }

    fn set_attachment(&self, attachment: Attachment) {
        *self.attachment.borrow_mut() = attachment;
        self.notify();
    }

    fn set_submit_state(&self, state: SubmitState) {
        *self.submit_state.borrow_mut() = state;
        self.notify();
    }

    /// Validate the extension, then upload and keep the returned reference
    pub async fn handle_change_file(&self, file: ReceiptFile) -> Result<AttachedReceipt, NewBillError> {
        if self.is_busy() {
            log::warn!("[NewBill] request in flight, ignoring {}", file.name);
            return Err(NewBillError::Busy);
        }
        self.set_attachment(Attachment::Validating {
            file_name: file.name.clone(),
        });

        let accepted = file
            .extension()
            .is_some_and(|ext| self.config.allows_extension(&ext));
        if !accepted {
            let err = NewBillError::InvalidExtension {
                file_name: file.name.clone(),
            };
            log::warn!("[NewBill] {}", err);
            (self.alert)(&err.to_string());
            self.set_attachment(Attachment::Rejected { file_name: file.name });
            return Err(err);
        }

        self.uploading.set(true);
        let result = self.store.upload_file(&file, &self.session.email).await;
        self.uploading.set(false);

        match result {
            Ok(uploaded) => {
                let receipt = AttachedReceipt {
                    file_url: uploaded.file_url,
                    file_name: file.name,
                    bill_id: uploaded.key,
                };
                log::info!("[NewBill] receipt {} uploaded as {}", receipt.file_name, receipt.bill_id);
                self.set_attachment(Attachment::Attached(receipt.clone()));
                Ok(receipt)
            }
            Err(e) => {
                log::error!("[NewBill] upload of {} failed: {}", file.name, e);
                self.set_attachment(Attachment::Empty);
                Err(e.into())
            }
        }
    }

    /// Create or update the bill, then go back to the list
    pub async fn handle_submit(&self, form: NewBillForm) -> Result<Bill, NewBillError> {
        if self.is_busy() {
            log::warn!("[NewBill] request in flight, submit ignored");
            return Err(NewBillError::Busy);
        }

        let receipt = self.attached();
        let record = match form.into_record(&self.session, receipt.as_ref(), self.config.default_pct) {
            Ok(record) => record,
            Err(e) => {
                self.set_submit_state(SubmitState::Failed(e.clone()));
                return Err(e);
            }
        };

        self.submitting.set(true);
        self.set_submit_state(SubmitState::Submitting);
        let result = match receipt {
            Some(receipt) => {
                let update = BillUpdate {
                    id: receipt.bill_id,
                    record,
                };
                self.store.update(&update).await
            }
            None => self.store.post(&record).await,
        };
        self.submitting.set(false);

        match result {
            Ok(bill) => {
                log::info!("[NewBill] bill {} submitted", bill.id);
                self.set_submit_state(SubmitState::Done(bill.clone()));
                (self.navigate)(Route::Bills);
                Ok(bill)
            }
            Err(e) => {
                log::error!("[NewBill] submit failed: {}", e);
                let err = NewBillError::Store(e);
                self.set_submit_state(SubmitState::Failed(err.clone()));
                Err(err)
            }
        }
    }
}
