//! Store Client
//!
//! Frontend bindings to the bills API, behind a trait so containers can be
//! driven by an in-memory store in tests.

mod api;
#[cfg(test)]
pub mod mock;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{Bill, BillUpdate, NewBillRecord, ReceiptFile, UploadedFile};

pub use api::ApiStore;

#[async_trait(?Send)]
pub trait BillStore {
    /// All bills visible to the signed-in user
    async fn get(&self) -> Result<Vec<Bill>, StoreError>;

    async fn post(&self, record: &NewBillRecord) -> Result<Bill, StoreError>;

    async fn update(&self, update: &BillUpdate) -> Result<Bill, StoreError>;

    /// Upload a receipt; the returned `key` identifies the pending bill
    async fn upload_file(&self, file: &ReceiptFile, email: &str) -> Result<UploadedFile, StoreError>;
}
