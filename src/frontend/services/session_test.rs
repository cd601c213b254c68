use super::*;

#[test]
fn normalize_email_accepts_basic_address() {
    assert_eq!(
        SessionConfig::normalize_email("  USER@Example.com "),
        Some("user@example.com".to_owned())
    );
}

#[test]
fn normalize_email_rejects_invalid_values() {
    assert_eq!(SessionConfig::normalize_email(""), None);
    assert_eq!(SessionConfig::normalize_email("user"), None);
    assert_eq!(SessionConfig::normalize_email("@example.com"), None);
    assert_eq!(SessionConfig::normalize_email("user@"), None);
    assert_eq!(SessionConfig::normalize_email("a@b@c"), None);
    assert_eq!(SessionConfig::normalize_email("user@nodot"), None);
    assert_eq!(SessionConfig::normalize_email("user@.com"), None);
    assert_eq!(SessionConfig::normalize_email("user@example.com."), None);
}

#[test]
fn fresh_session_is_not_expired() {
    let session = SessionConfig::new("user@example.com".to_string());
    assert!(!session.is_expired());
}

#[test]
fn old_session_is_expired() {
    let mut session = SessionConfig::new("user@example.com".to_string());
    session.created_at = Utc::now() - Duration::days(31);
    assert!(session.is_expired());
}

#[test]
fn account_exposes_session_email() {
    let session = SessionConfig::new("user@example.com".to_string());
    assert_eq!(
        session.account(),
        Account {
            email: "user@example.com".to_string()
        }
    );
}
