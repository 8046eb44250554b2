use super::*;

#[test]
fn dashboard_heading_capitalizes_role() {
    assert_eq!(dashboard_heading("doctor"), "Doctor dashboard");
    assert_eq!(dashboard_heading("patient"), "Patient dashboard");
}

#[test]
fn dashboard_heading_handles_empty_role() {
    assert_eq!(dashboard_heading(""), "Dashboard");
}
