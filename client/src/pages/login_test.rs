use super::*;

#[test]
fn validate_credentials_trims_server_and_username() {
    assert_eq!(
        validate_credentials("  http://dns.test:8080 ", " admin ", "secret"),
        Ok(Credentials {
            server: "http://dns.test:8080".to_owned(),
            username: "admin".to_owned(),
            password: "secret".to_owned(),
        })
    );
}

#[test]
fn validate_credentials_keeps_password_whitespace() {
    let creds = validate_credentials("http://dns.test", "admin", " pass ").unwrap();
    assert_eq!(creds.password, " pass ");
}

#[test]
fn validate_credentials_requires_every_field() {
    assert_eq!(validate_credentials("   ", "admin", "secret"), Err(MISSING_FIELDS_MESSAGE));
    assert_eq!(validate_credentials("http://dns.test", "", "secret"), Err(MISSING_FIELDS_MESSAGE));
    assert_eq!(validate_credentials("http://dns.test", "admin", ""), Err(MISSING_FIELDS_MESSAGE));
}

#[test]
fn submit_label_reflects_loading() {
    assert_eq!(submit_label(false), "Login");
    assert_eq!(submit_label(true), "Logging in...");
}

#[test]
fn prefill_fills_empty_server_field() {
    assert_eq!(prefill("", "http://dns.test:8080".to_owned()).as_deref(), Some("http://dns.test:8080"));
    assert_eq!(prefill("  ", "http://dns.test:8080".to_owned()).as_deref(), Some("http://dns.test:8080"));
}

#[test]
fn prefill_keeps_what_the_user_typed() {
    assert_eq!(prefill("http://mine.test", "http://dns.test:8080".to_owned()), None);
}
