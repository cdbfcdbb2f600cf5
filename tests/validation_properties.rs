//! Property and behavior tests for field and form validation.

use form_validator::core::{Field, FormValidator, FormValues, RuleSettings};
use proptest::prelude::*;

fn validator() -> FormValidator {
    FormValidator::new(RuleSettings::default()).unwrap()
}

fn valid_values() -> FormValues {
    FormValues {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.org".to_string(),
        password: "Analytical1".to_string(),
        age: "36".to_string(),
    }
}

fn any_field() -> impl Strategy<Value = Field> {
    prop::sample::select(Field::ALL.to_vec())
}

#[test]
fn test_required_for_every_field() {
    let validator = validator();
    let expected = [
        (Field::Name, "Name is required"),
        (Field::Email, "Email is required"),
        (Field::Password, "Password is required"),
        (Field::Age, "Age is required"),
    ];
    for (field, message) in expected {
        let result = validator.validate(field, "");
        assert!(!result.valid);
        assert_eq!(result.message, message);
    }
}

#[test]
fn test_documented_examples() {
    let validator = validator();

    assert!(validator.validate(Field::Password, "Abc12345").valid);
    assert!(
        validator
            .validate(Field::Password, "abcdefgh")
            .message
            .contains("must contain at least one uppercase letter")
    );
    assert!(
        validator
            .validate(Field::Email, "not-an-email")
            .message
            .contains("valid email address")
    );
    assert!(
        validator
            .validate(Field::Age, "12")
            .message
            .contains("at least 13 years old")
    );
    assert!(validator.validate(Field::Age, "13").valid);
    assert!(!validator.validate(Field::Age, "121").valid);
    assert!(
        validator
            .validate(Field::Name, "John123")
            .message
            .contains("letters and spaces")
    );
    assert!(validator.validate(Field::Name, "Jo").valid);
}

#[test]
fn test_field_ids_from_presentation_layer() {
    let validator = validator();
    let field: Field = "email".parse().unwrap();
    assert!(validator.validate(field, "a@b.co").valid);
    assert!("zip".parse::<Field>().is_err());
}

#[test]
fn test_lengths_count_utf16_units() {
    let validator = validator();

    assert!(validator.validate(Field::Password, "Abc1😀😀").valid);
    assert_eq!(
        validator.validate(Field::Name, "😀").message,
        "Name can only contain letters and spaces"
    );
}

#[test]
fn test_browser_whitespace_rules() {
    let validator = validator();

    assert_eq!(validator.validate(Field::Name, "\u{feff}").message, "Name is required");
    assert_eq!(
        validator.validate(Field::Name, "Jo\u{85}").message,
        "Name can only contain letters and spaces"
    );
    assert_eq!(validator.validate(Field::Age, "\u{85}20").message, "Age must be a number");
    assert!(validator.validate(Field::Age, "\u{2003}20\u{feff}").valid);
    assert!(validator.validate(Field::Name, "\u{3000}Jo Ann\u{a0}").valid);
}

#[test]
fn test_report_serializes_for_presentation_layer() {
    let mut values = valid_values();
    values.age = "abc".to_string();

    let report = validator().validate_all(&values);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["all_valid"], false);
    assert_eq!(json["results"]["name"]["valid"], true);
    assert_eq!(json["results"]["name"]["message"], "");
    assert_eq!(json["results"]["age"]["message"], "Age must be a number");
    assert_eq!(json["results"]["age"]["error"]["kind"], "not_a_number");
}

proptest! {
    #[test]
    fn validation_is_deterministic(field in any_field(), value in ".{0,24}") {
        let validator = validator();
        prop_assert_eq!(validator.validate(field, &value), validator.validate(field, &value));
    }

    #[test]
    fn message_is_empty_iff_valid(field in any_field(), value in ".{0,24}") {
        let result = validator().validate(field, &value);
        prop_assert_eq!(result.valid, result.message.is_empty());
        prop_assert_eq!(result.valid, result.error.is_none());
        if let Some(error) = &result.error {
            prop_assert_eq!(error.field(), field);
            prop_assert_eq!(&error.to_string(), &result.message);
        }
    }

    #[test]
    fn validate_all_agrees_with_each_field(
        name in ".{0,16}",
        email in "[a-z@. ]{0,16}",
        password in "[A-Za-z0-9 ]{0,12}",
        age in "-?[0-9]{0,4}",
    ) {
        let validator = validator();
        let values = FormValues { name, email, password, age };
        let report = validator.validate_all(&values);

        let mut every_valid = true;
        for field in Field::ALL {
            let single = validator.validate(field, values.get(field));
            every_valid &= single.valid;
            prop_assert_eq!(report.result(field), Some(&single));
        }
        prop_assert_eq!(report.all_valid, every_valid);
    }

    #[test]
    fn integer_ages_match_range(age in 0u32..200) {
        let result = validator().validate(Field::Age, &age.to_string());
        prop_assert_eq!(result.valid, (13..=120).contains(&age));
    }

    #[test]
    fn padding_with_browser_whitespace_is_ignored(
        name in "[A-Za-z]{2,12}",
        pad in "[ \t\u{a0}\u{2000}-\u{200a}\u{3000}\u{feff}]{0,4}",
    ) {
        let validator = validator();
        let padded = format!("{pad}{name}{pad}");
        prop_assert!(validator.validate(Field::Name, &padded).valid);
        let padded_age = format!("{pad}42{pad}");
        prop_assert!(validator.validate(Field::Age, &padded_age).valid);
    }

    #[test]
    fn letters_and_spaces_names_are_valid(name in "[A-Za-z][A-Za-z ]{0,20}[A-Za-z]") {
        prop_assert!(validator().validate(Field::Name, &name).valid);
    }

    #[test]
    fn one_invalid_field_flips_the_form(field in any_field()) {
        let validator = validator();
        let mut values = valid_values();
        prop_assert!(validator.validate_all(&values).all_valid);

        values.set(field, "");
        let report = validator.validate_all(&values);
        prop_assert!(!report.all_valid);
        prop_assert_eq!(report.invalid_fields(), vec![field]);
    }
}
