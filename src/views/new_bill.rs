use crate::containers::{Attachment, SubmitState};
use crate::models::ExpenseType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachmentNotice {
    None,
    Uploading(String),
    Attached(String),
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewBillPage {
    pub title: &'static str,
    pub categories: Vec<&'static str>,
    pub attachment: AttachmentNotice,
    /// Submit button disabled while a request is pending
    pub busy: bool,
    pub error: Option<String>,
}

pub fn render_new_bill(attachment: &Attachment, submit: &SubmitState) -> NewBillPage {
    let notice = match attachment {
        Attachment::Empty => AttachmentNotice::None,
        Attachment::Validating { file_name } => AttachmentNotice::Uploading(file_name.clone()),
        Attachment::Attached(receipt) => AttachmentNotice::Attached(receipt.file_name.clone()),
        Attachment::Rejected { file_name } => AttachmentNotice::Rejected(file_name.clone()),
    };
    let busy = matches!(submit, SubmitState::Submitting)
        || matches!(attachment, Attachment::Validating { .. });
    let error = match submit {
        SubmitState::Failed(e) => Some(e.to_string()),
        _ => None,
    };
    NewBillPage {
        title: "Envoyer une note de frais",
        categories: ExpenseType::ALL.iter().map(|t| t.label()).collect(),
        attachment: notice,
        busy,
        error,
    }
}
