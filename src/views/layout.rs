use crate::routes::Route;

/// Dashboard shell: title plus the vertical navigation icons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerticalLayout {
    pub title_class: &'static str,
    /// Bills icon
    pub window_active: bool,
    /// New bill icon
    pub mail_active: bool,
}

pub fn render_layout(route: Route) -> VerticalLayout {
    VerticalLayout {
        title_class: "layout-title",
        window_active: route == Route::Bills,
        mail_active: route == Route::NewBill,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bills_icon_highlighted_on_bills_page() {
        let layout = render_layout(Route::Bills);
        assert_eq!(layout.title_class, "layout-title");
        assert!(layout.window_active);
        assert!(!layout.mail_active);
    }

    #[test]
    fn test_mail_icon_highlighted_on_new_bill_page() {
        let layout = render_layout(Route::NewBill);
        assert!(!layout.window_active);
        assert!(layout.mail_active);
    }
}
