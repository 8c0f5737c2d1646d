//! Identifier validation and literal quoting at the crate boundary.

use sqlforge_core::ident::validate;
use sqlforge_core::prelude::*;
use sqlforge_core::Ident;

#[test]
fn accepts_bare_identifiers() {
    for name in ["f", "F", "field", "field1", "field_1", "FIELD", "FIELD1", "FIELD_1"] {
        assert_eq!(validate(name).unwrap(), name);
    }
}

#[test]
fn trims_before_validating() {
    assert_eq!(validate("  f  ").unwrap(), "f");
    assert_eq!(Ident::new("\tfield_1\n").unwrap().to_string(), "field_1");
}

#[test]
fn rejects_empty_and_malformed() {
    for name in ["", "   ", "1f", "_", "_f", "field!", "a-b", "naïve"] {
        assert!(
            matches!(validate(name), Err(BuilderError::InvalidIdentifier { .. })),
            "{name:?} should be rejected"
        );
    }
}

#[test]
fn quotes_are_doubled_in_literals() {
    assert_eq!(value("O'Brien").unwrap().to_sql(), "'O''Brien'");
    assert_eq!(value("''").unwrap().to_sql(), "''''''");
}

#[test]
fn literals_can_not_be_aliased() {
    assert_eq!(
        alias(value("x").unwrap(), "y").unwrap_err(),
        BuilderError::CannotAliasLiteral
    );
}

#[test]
fn value_rejects_non_scalars() {
    let err = value(select("employees").unwrap()).unwrap_err();
    assert_eq!(err, BuilderError::InvalidValueType { kind: "select" });
}
