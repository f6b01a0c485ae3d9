use super::*;

#[test]
fn validate_credentials_trims_both_fields() {
    assert_eq!(
        validate_credentials("  user@example.com  ", " pw "),
        Ok(("user@example.com".to_owned(), "pw".to_owned()))
    );
}

#[test]
fn validate_credentials_requires_both_fields() {
    assert_eq!(validate_credentials("", "pw"), Err("Enter both email and password."));
    assert_eq!(
        validate_credentials("user@example.com", "   "),
        Err("Enter both email and password.")
    );
}

#[test]
fn validate_credentials_requires_an_at_sign() {
    assert_eq!(validate_credentials("user", "pw"), Err("Enter a valid email address."));
}
