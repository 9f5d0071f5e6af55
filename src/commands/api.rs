//! HTTP Store
//!
//! `BillStore` over the REST API (`/bills`).

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::BillStore;
use crate::error::{ErrorKind, StoreError};
use crate::models::{Bill, BillUpdate, NewBillRecord, ReceiptFile, UploadedFile};

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

pub struct ApiStore {
    client: Client,
    base_url: String,
    jwt: Option<String>,
}

impl ApiStore {
    pub fn new(base_url: impl Into<String>, jwt: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            jwt,
        }
    }

    fn bills_url(&self) -> String {
        format!("{}/bills", self.base_url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.jwt {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, StoreError> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(StoreError::network)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        log::warn!("[ApiStore] {} -> {}", status, body);
        Err(StoreError::from_status(status.as_u16(), &body))
    }

    async fn read<T: DeserializeOwned>(response: Response) -> Result<T, StoreError> {
        response.json::<T>().await.map_err(StoreError::decode)
    }
}

#[async_trait(?Send)]
impl BillStore for ApiStore {
    async fn get(&self) -> Result<Vec<Bill>, StoreError> {
        let response = self.send(self.client.get(self.bills_url())).await?;
        let envelope: Envelope<Vec<Bill>> = Self::read(response).await?;
        log::debug!("[ApiStore] fetched {} bills", envelope.data.len());
        Ok(envelope.data)
    }

    async fn post(&self, record: &NewBillRecord) -> Result<Bill, StoreError> {
        let response = self
            .send(self.client.post(self.bills_url()).json(record))
            .await?;
        let envelope: Envelope<Bill> = Self::read(response).await?;
        Ok(envelope.data)
    }

    async fn update(&self, update: &BillUpdate) -> Result<Bill, StoreError> {
        let url = format!("{}/{}", self.bills_url(), update.id);
        let response = self.send(self.client.patch(url).json(update)).await?;
        let envelope: Envelope<Bill> = Self::read(response).await?;
        Ok(envelope.data)
    }

    async fn upload_file(&self, file: &ReceiptFile, email: &str) -> Result<UploadedFile, StoreError> {
        let mime = if file.mime.is_empty() {
            "application/octet-stream"
        } else {
            file.mime.as_str()
        };
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(mime)
            .map_err(|e| StoreError::new(ErrorKind::Unknown, e.to_string()))?;
        let form = Form::new()
            .part("file", part)
            .text("email", email.to_string());
        let response = self
            .send(self.client.post(self.bills_url()).multipart(form))
            .await?;
        Self::read(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::mock::FIXTURE_BILLS;
    use crate::models::{BillStatus, ExpenseType};

    #[test]
    fn test_list_envelope() {
        let body = format!(r#"{{"data": {}}}"#, FIXTURE_BILLS);
        let envelope: Envelope<Vec<Bill>> = serde_json::from_str(&body).unwrap();
        assert_eq!(envelope.data.len(), 4);
        assert_eq!(envelope.data[0].id, "47qAXb6fIm2zOKkLzMro");
        assert_eq!(envelope.data[1].vat, None);
        assert_eq!(envelope.data[2].status, BillStatus::Accepted);
    }

    #[test]
    fn test_single_bill_envelope() {
        let body = r#"{"data": {
            "id": "1234",
            "type": "Transports",
            "name": "test",
            "amount": 100,
            "date": "2020-12-01",
            "vat": 10,
            "pct": 20,
            "status": "pending",
            "fileUrl": "https://localhost:3456/images/test.jpg",
            "fileName": "test.jpg"
        }}"#;
        let envelope: Envelope<Bill> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data.id, "1234");
        assert_eq!(envelope.data.expense_type, ExpenseType::Transports);
        assert_eq!(envelope.data.amount, Some(100.0));
        assert!(envelope.data.is_complete());
    }

    #[test]
    fn test_missing_envelope_is_rejected() {
        let bare = r#"[{"id": "1234", "type": "Transports"}]"#;
        assert!(serde_json::from_str::<Envelope<Vec<Bill>>>(bare).is_err());
    }

    #[test]
    fn test_bill_urls() {
        let store = ApiStore::new("http://localhost:5678", None);
        assert_eq!(store.bills_url(), "http://localhost:5678/bills");
    }
}
