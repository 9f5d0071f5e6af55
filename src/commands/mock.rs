//! In-memory store for tests
//!
//! Seeded with four fixture bills. Failures can be queued per operation and
//! every call is recorded for assertions.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use super::BillStore;
use crate::error::StoreError;
use crate::models::{Bill, BillStatus, BillUpdate, NewBillRecord, ReceiptFile, UploadedFile};

pub const FIXTURE_BILLS: &str = r#"[
  {
    "id": "47qAXb6fIm2zOKkLzMro",
    "vat": "80",
    "fileUrl": "https://test.storage.tld/v0/b/billable-677b6.a/preview-facture-free-201801-pdf-1.jpg",
    "status": "pending",
    "type": "Hôtel et logement",
    "commentary": "séminaire billed",
    "name": "encore",
    "fileName": "preview-facture-free-201801-pdf-1.jpg",
    "date": "2004-04-04",
    "amount": 400,
    "commentAdmin": "ok",
    "email": "a@a",
    "pct": 20
  },
  {
    "id": "BeKy5Mo4jkmdfPGYpTxZ",
    "vat": "",
    "amount": 100,
    "name": "test1",
    "fileName": "1592770761.jpeg",
    "commentary": "plop",
    "pct": 20,
    "type": "Transports",
    "email": "a@a",
    "fileUrl": "https://test.storage.tld/v0/b/billable-677b6.a/1592770761.jpeg",
    "date": "2001-01-01",
    "status": "refused",
    "commentAdmin": "en fait non"
  },
  {
    "id": "UIUZtnPQvnbFnB0ozvJh",
    "name": "test3",
    "email": "a@a",
    "type": "Services en ligne",
    "vat": "60",
    "pct": 20,
    "commentAdmin": "bon bah d'accord",
    "amount": 300,
    "status": "accepted",
    "date": "2003-03-03",
    "commentary": "",
    "fileName": "facture-client-php-exportee-dans-document-pdf-enregistre-sur-disque-dur.png",
    "fileUrl": "https://test.storage.tld/v0/b/billable-677b6.a/facture-client-php-exportee-dans-document-pdf-enregistre-sur-disque-dur.png"
  },
  {
    "id": "qcCK3SzECmaZAGRrHjaC",
    "status": "refused",
    "pct": 20,
    "amount": 200,
    "email": "a@a",
    "name": "test2",
    "vat": "40",
    "fileName": "preview-facture-free-201801-pdf-1.jpg",
    "date": "2002-02-02",
    "commentAdmin": "pas la bonne facture",
    "commentary": "test2",
    "type": "Restaurants et bars",
    "fileUrl": "https://test.storage.tld/v0/b/billable-677b6.a/preview-facture-free-201801-pdf-1.jpg"
  }
]"#;

pub fn fixture_bills() -> Vec<Bill> {
    serde_json::from_str(FIXTURE_BILLS).expect("fixture bills are valid JSON")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Get,
    Post,
    Update,
    Upload,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Get,
    Post(NewBillRecord),
    Update(BillUpdate),
    Upload { file_name: String, email: String },
}

#[derive(Default)]
pub struct MockStore {
    bills: RefCell<Vec<Bill>>,
    failures: RefCell<Vec<(Op, StoreError)>>,
    calls: RefCell<Vec<Call>>,
    next_id: Cell<u32>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::with_bills(fixture_bills())
    }

    pub fn with_bills(bills: Vec<Bill>) -> Self {
        Self {
            bills: RefCell::new(bills),
            ..Default::default()
        }
    }

    /// Make the next call of `op` fail with `error`
    pub fn fail_once(&self, op: Op, error: StoreError) {
        self.failures.borrow_mut().push((op, error));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, op: Op) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| {
                matches!(
                    (op, c),
                    (Op::Get, Call::Get)
                        | (Op::Post, Call::Post(_))
                        | (Op::Update, Call::Update(_))
                        | (Op::Upload, Call::Upload { .. })
                )
            })
            .count()
    }

    pub fn bills(&self) -> Vec<Bill> {
        self.bills.borrow().clone()
    }

    async fn enter(&self, op: Op, call: Call) -> Result<(), StoreError> {
        self.calls.borrow_mut().push(call);
        // Suspend once so overlapping handler calls can be observed
        tokio::task::yield_now().await;
        let mut failures = self.failures.borrow_mut();
        match failures.iter().position(|(o, _)| *o == op) {
            Some(index) => Err(failures.remove(index).1),
            None => Ok(()),
        }
    }

    fn next_id(&self, prefix: &str) -> String {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        format!("{}-{}", prefix, id)
    }
}

fn to_bill(id: String, record: &NewBillRecord) -> Bill {
    Bill {
        id,
        email: record.email.clone(),
        expense_type: record.expense_type,
        name: record.name.clone(),
        amount: Some(record.amount),
        date: record.date.clone(),
        vat: record.vat,
        pct: Some(record.pct),
        commentary: Some(record.commentary.clone()),
        file_url: record.file_url.clone(),
        file_name: record.file_name.clone(),
        status: record.status,
        comment_admin: None,
    }
}

#[async_trait(?Send)]
impl BillStore for MockStore {
    async fn get(&self) -> Result<Vec<Bill>, StoreError> {
        self.enter(Op::Get, Call::Get).await?;
        Ok(self.bills())
    }

    async fn post(&self, record: &NewBillRecord) -> Result<Bill, StoreError> {
        self.enter(Op::Post, Call::Post(record.clone())).await?;
        let bill = to_bill(self.next_id("bill"), record);
        self.bills.borrow_mut().push(bill.clone());
        Ok(bill)
    }

    async fn update(&self, update: &BillUpdate) -> Result<Bill, StoreError> {
        self.enter(Op::Update, Call::Update(update.clone())).await?;
        let mut bills = self.bills.borrow_mut();
        let slot = bills
            .iter_mut()
            .find(|b| b.id == update.id)
            .ok_or_else(|| StoreError::from_status(404, ""))?;
        *slot = to_bill(update.id.clone(), &update.record);
        Ok(slot.clone())
    }

    async fn upload_file(&self, file: &ReceiptFile, email: &str) -> Result<UploadedFile, StoreError> {
        self.enter(
            Op::Upload,
            Call::Upload {
                file_name: file.name.clone(),
                email: email.to_string(),
            },
        )
        .await?;
        let key = self.next_id("upload");
        let file_url = format!("https://localhost:3456/images/{}", file.name);
        self.bills.borrow_mut().push(Bill {
            id: key.clone(),
            email: email.to_string(),
            expense_type: crate::models::ExpenseType::Other,
            name: String::new(),
            amount: None,
            date: String::new(),
            vat: None,
            pct: None,
            commentary: None,
            file_url: Some(file_url.clone()),
            file_name: Some(file.name.clone()),
            status: BillStatus::Pending,
            comment_admin: None,
        });
        Ok(UploadedFile { file_url, key })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[tokio::test]
    async fn test_fetches_fixture_bills() {
        let store = MockStore::new();
        let bills = store.get().await.unwrap();
        assert_eq!(bills.len(), 4);
        assert_eq!(store.count(Op::Get), 1);
    }

    #[tokio::test]
    async fn test_failure_is_consumed_once() {
        let store = MockStore::new();
        store.fail_once(Op::Get, StoreError::from_message("Erreur 404"));

        let err = store.get().await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert!(store.get().await.is_ok());
    }

    #[tokio::test]
    async fn test_post_assigns_id() {
        let store = MockStore::with_bills(Vec::new());
        let record = NewBillRecord {
            email: "a@a".into(),
            expense_type: crate::models::ExpenseType::OnlineServices,
            name: "test3".into(),
            amount: 300.0,
            date: "2003-03-03".into(),
            vat: Some(60.0),
            pct: 20.0,
            commentary: String::new(),
            file_url: None,
            file_name: None,
            status: BillStatus::Pending,
        };
        let created = store.post(&record).await.unwrap();
        assert_eq!(created.id, "bill-1");
        assert_eq!(store.bills().len(), 1);
    }
}
