use crate::error::{ErrorKind, StoreError};

/// Placeholder shown while a fetch is pending
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingPage {
    pub id: &'static str,
    pub text: &'static str,
}

impl Default for LoadingPage {
    fn default() -> Self {
        Self {
            id: "loading",
            text: "Loading...",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPage {
    pub test_id: &'static str,
    pub title: String,
    pub detail: Option<String>,
}

pub fn render_error(error: &StoreError) -> ErrorPage {
    let (title, detail) = match error.kind {
        ErrorKind::NotFound => ("Erreur 404".to_string(), None),
        ErrorKind::ServerError => ("Erreur 500".to_string(), None),
        ErrorKind::Network => (
            "Erreur réseau".to_string(),
            Some("Le serveur est injoignable, réessayez plus tard.".to_string()),
        ),
        ErrorKind::Decode => (
            "Erreur de lecture".to_string(),
            Some(error.message.clone()),
        ),
        ErrorKind::Unknown => (error.message.clone(), None),
    };
    ErrorPage {
        test_id: "error-message",
        title,
        detail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_titles() {
        let page = render_error(&StoreError::from_message("Erreur 404"));
        assert!(page.title.contains("Erreur 404"));
        let page = render_error(&StoreError::from_status(502, "bad gateway"));
        assert!(page.title.contains("Erreur 500"));
        let page = render_error(&StoreError::from_message("jwt malformed"));
        assert_eq!(page.title, "jwt malformed");
        assert_eq!(page.test_id, "error-message");
    }

    #[test]
    fn test_loading_identity() {
        let page = LoadingPage::default();
        assert_eq!(page.id, "loading");
        assert_eq!(page.text, "Loading...");
    }
}
