//! Frontend Models
//!
//! Data structures exchanged with the bills API.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Review status of a bill (set by administrators)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    #[default]
    Pending,
    Accepted,
    Refused,
}

/// Expense category, serialized with the labels shown in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExpenseType {
    #[serde(rename = "Transports")]
    Transports,
    #[serde(rename = "Restaurants et bars")]
    Restaurants,
    #[serde(rename = "Hôtel et logement")]
    Hotel,
    #[serde(rename = "Services en ligne")]
    OnlineServices,
    #[serde(rename = "IT et électronique")]
    It,
    #[serde(rename = "Equipement et matériel")]
    Equipment,
    #[serde(rename = "Fournitures de bureau")]
    OfficeSupplies,
    #[default]
    #[serde(other)]
    Other,
}

impl ExpenseType {
    /// Categories offered by the new bill form, in display order
    pub const ALL: [ExpenseType; 7] = [
        ExpenseType::Transports,
        ExpenseType::Restaurants,
        ExpenseType::Hotel,
        ExpenseType::OnlineServices,
        ExpenseType::It,
        ExpenseType::Equipment,
        ExpenseType::OfficeSupplies,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExpenseType::Transports => "Transports",
            ExpenseType::Restaurants => "Restaurants et bars",
            ExpenseType::Hotel => "Hôtel et logement",
            ExpenseType::OnlineServices => "Services en ligne",
            ExpenseType::It => "IT et électronique",
            ExpenseType::Equipment => "Equipement et matériel",
            ExpenseType::OfficeSupplies => "Fournitures de bureau",
            ExpenseType::Other => "Autre",
        }
    }

    /// Inverse of `label` for the form select; `Other` is never offered
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

/// Bill record as stored by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: String,
    #[serde(rename = "type", default, deserialize_with = "lenient_expense_type")]
    pub expense_type: ExpenseType,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub amount: Option<f64>,
    /// Raw date as stored; parsed for display and sorting
    #[serde(default, deserialize_with = "lenient_text")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub vat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub pct: Option<f64>,
    #[serde(default, deserialize_with = "lenient_optional_text")]
    pub commentary: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional_text")]
    pub file_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional_text")]
    pub file_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: BillStatus,
    #[serde(default, deserialize_with = "lenient_optional_text")]
    pub comment_admin: Option<String>,
}

impl Bill {
    /// A bill is complete once its receipt has been uploaded
    pub fn is_complete(&self) -> bool {
        self.file_url.is_some() && self.file_name.is_some()
    }
}

/// A scalar field of a stored record; anything else is ignored
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Number(serde_json::Number),
    Text(String),
    Other(IgnoredAny),
}

/// Strings as-is, numbers as their JSON text, everything else `None`
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Text(s)) => Some(s),
        Some(Scalar::Number(n)) => Some(n.to_string()),
        Some(Scalar::Other(_)) | None => None,
    })
}

/// Older records carry numbers as strings ("80"), newer ones as numbers
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(deserializer)?.and_then(|s| s.trim().parse::<f64>().ok()))
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(deserializer)?.unwrap_or_default())
}

fn lenient_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    scalar_text(deserializer)
}

fn lenient_expense_type<'de, D>(deserializer: D) -> Result<ExpenseType, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(deserializer)?
        .and_then(|label| ExpenseType::from_label(&label))
        .unwrap_or_default())
}

/// Unknown or missing statuses count as pending
fn lenient_status<'de, D>(deserializer: D) -> Result<BillStatus, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match scalar_text(deserializer)?.as_deref() {
        Some("accepted") => BillStatus::Accepted,
        Some("refused") => BillStatus::Refused,
        _ => BillStatus::Pending,
    })
}

/// Payload built from the new bill form
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBillRecord {
    pub email: String,
    #[serde(rename = "type")]
    pub expense_type: ExpenseType,
    pub name: String,
    pub amount: f64,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat: Option<f64>,
    pub pct: f64,
    pub commentary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    pub status: BillStatus,
}

/// Update of an existing record, addressed by id
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillUpdate {
    pub id: String,
    #[serde(flatten)]
    pub record: NewBillRecord,
}

/// Receipt chosen in the file input
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ReceiptFile {
    /// Lowercased extension after the last dot, if any
    pub fn extension(&self) -> Option<String> {
        let (_, ext) = self.name.rsplit_once('.')?;
        if ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }
}

/// Answer of the upload endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub file_url: String,
    pub key: String,
}

/// Account kind stored in the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Employee,
    Admin,
}
