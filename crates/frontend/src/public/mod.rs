//! Public website: home, services, gallery and contact pages.
//!
//! No authentication; every call goes through the public REST helpers.

pub mod contact;
pub mod gallery;
pub mod home;
pub mod layout;
pub mod services;

pub use contact::ContactPage;
pub use gallery::GalleryPage;
pub use home::HomePage;
pub use layout::PublicLayout;
pub use services::ServicesPage;

/// `base?category=<slug>`, or `base` alone for the "All" link.
pub fn category_href(base: &str, category: &str) -> String {
    if category.is_empty() {
        base.to_string()
    } else {
        format!("{}?category={}", base, urlencoding::encode(category))
    }
}

/// Messages of the failed loads on a page, each shown once.
pub fn page_errors(errors: &[Option<String>]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for message in errors.iter().flatten() {
        if !out.contains(message) {
            out.push(message.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_href() {
        assert_eq!(category_href("/services", ""), "/services");
        assert_eq!(category_href("/services", "banners"), "/services?category=banners");
        assert_eq!(category_href("/gallery", "Vehicle wraps"), "/gallery?category=Vehicle%20wraps");
    }

    #[test]
    fn test_page_errors_keep_each_failed_load() {
        let services_failed = Some("Service unavailable".to_string());
        assert_eq!(
            page_errors(&[services_failed.clone(), None]),
            vec!["Service unavailable".to_string()]
        );
        assert_eq!(
            page_errors(&[services_failed.clone(), Some("Timeout".to_string())]),
            vec!["Service unavailable".to_string(), "Timeout".to_string()]
        );
        assert_eq!(page_errors(&[services_failed.clone(), services_failed]).len(), 1);
        assert!(page_errors(&[None, None]).is_empty());
    }
}
