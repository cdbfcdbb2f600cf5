//! Form field identifiers.

use crate::error::FormError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One named input subject to validation.
///
/// Fields order as they appear on the form, which is also the order reports
/// list them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// The user's name.
    Name,
    /// The user's email address.
    Email,
    /// The chosen password.
    Password,
    /// The user's age in years.
    Age,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Password, Field::Age];

    /// The identifier used by the presentation layer (`"name"`, `"email"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::Age => "age",
        }
    }

    /// Capitalized label used at the start of error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::Age => "Age",
        }
    }

    /// Whether surrounding whitespace is stripped before the rules run.
    ///
    /// Passwords keep their whitespace. Ages are trimmed only by the numeric
    /// conversion, so `" "` still counts as a value.
    pub fn trims_input(self) -> bool {
        matches!(self, Self::Name | Self::Email)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_fields() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>().unwrap(), field);
        }
    }

    #[test]
    fn test_parse_unknown_field() {
        let err = "phone".parse::<Field>().unwrap_err();
        assert!(matches!(err, FormError::UnknownField(ref s) if s == "phone"));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Name".parse::<Field>().is_err());
    }

    #[test]
    fn test_form_order() {
        let mut fields = vec![Field::Age, Field::Name, Field::Password, Field::Email];
        fields.sort();
        assert_eq!(fields, Field::ALL.to_vec());
    }

    #[test]
    fn test_trims_input() {
        assert!(Field::Name.trims_input());
        assert!(Field::Email.trims_input());
        assert!(!Field::Password.trims_input());
        assert!(!Field::Age.trims_input());
    }
}
