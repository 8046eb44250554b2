use super::*;

#[test]
fn user_deserializes_with_role() {
    let user: User = serde_json::from_str(r#"{"username":"ada","role":"doctor"}"#).expect("user");
    assert_eq!(user.username, "ada");
    assert_eq!(user.role.as_deref(), Some("doctor"));
}

#[test]
fn user_role_defaults_to_none_when_missing() {
    let user: User = serde_json::from_str(r#"{"username":"ada"}"#).expect("user");
    assert_eq!(user.role, None);
}

#[test]
fn user_round_trips_through_json() {
    let user = User {
        username: "grace".to_owned(),
        role: Some("patient".to_owned()),
    };
    let raw = serde_json::to_string(&user).expect("serialize");
    let back: User = serde_json::from_str(&raw).expect("deserialize");
    assert_eq!(back, user);
}
