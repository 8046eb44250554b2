use super::*;

#[test]
fn validate_login_trims_username() {
    assert_eq!(
        validate_login("  ada  ", "doctor"),
        Ok(("ada".to_owned(), "doctor".to_owned()))
    );
}

#[test]
fn validate_login_requires_username() {
    assert_eq!(validate_login("   ", "doctor"), Err("Enter a username first."));
}

#[test]
fn validate_login_requires_role() {
    assert_eq!(validate_login("ada", ""), Err("Choose a role."));
}
