use super::*;

#[test]
fn validate_login_input_trims_name() {
    assert_eq!(
        validate_login_input("  Ana  ", ""),
        Ok(StoredUser { name: "Ana".to_owned(), email: None })
    );
}

#[test]
fn validate_login_input_requires_name() {
    assert_eq!(validate_login_input("   ", "ana@example.com"), Err("Ingresá tu nombre."));
}

#[test]
fn validate_login_input_keeps_optional_email() {
    assert_eq!(
        validate_login_input("Ana", " ana@example.com "),
        Ok(StoredUser { name: "Ana".to_owned(), email: Some("ana@example.com".to_owned()) })
    );
}

#[test]
fn validate_login_input_rejects_malformed_email() {
    assert_eq!(validate_login_input("Ana", "ana.example.com"), Err("El email no es válido."));
}
