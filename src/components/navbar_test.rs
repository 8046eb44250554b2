use super::*;

// =============================================================
// Navigation link table
// =============================================================

#[test]
fn nav_links_are_in_portal_order() {
    let paths: Vec<&str> = NAV_LINKS.iter().map(|l| l.path).collect();
    assert_eq!(
        paths,
        ["/", "/prescriptions", "/appointments", "/monitoring", "/faq", "/contact", "/support"]
    );
}

#[test]
fn nav_link_labels_match_paths() {
    let labels: Vec<&str> = NAV_LINKS.iter().map(|l| l.label).collect();
    assert_eq!(
        labels,
        ["Home", "Prescriptions", "Appointments", "Monitoring", "FAQ", "Contact", "Support"]
    );
}

#[test]
fn only_support_link_shows_an_icon() {
    for entry in &NAV_LINKS {
        assert_eq!(entry.show_icon, entry.path == "/support", "path {}", entry.path);
    }
}

// =============================================================
// Active-link helper
// =============================================================

#[test]
fn is_active_requires_exact_match() {
    assert!(is_active("/faq", "/faq"));
    assert!(!is_active("/faq", "/contact"));
}

#[test]
fn home_is_not_active_on_subpages() {
    assert!(is_active("/", "/"));
    assert!(!is_active("/prescriptions", "/"));
}

#[test]
fn link_class_appends_active_modifier() {
    assert_eq!(link_class(false), "navbar__link");
    assert_eq!(link_class(true), "navbar__link navbar__link--active");
}
