//! Ordered rule tables and their evaluation.
//!
//! Each field owns a fixed sequence of [`Rule`]s. Evaluation stops at the
//! first rule that fails and reports that rule's [`FieldError`].

use crate::core::{Field, RuleSettings};
use crate::error::{Bound, FieldError, Format, NumberKind};
use regex::Regex;

// Regex class body for ECMAScript `\s`. The regex crate's `\s` also takes U+0085.
macro_rules! js_space_class {
    () => {
        r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}"
    };
}

const NAME_PATTERN: &str = concat!("^[A-Za-z", js_space_class!(), "]+$");
const EMAIL_PATTERN: &str = concat!(
    "^[^@",
    js_space_class!(),
    "]+@[^@",
    js_space_class!(),
    r"]+\.[^@",
    js_space_class!(),
    "]+$"
);

/// Whitespace as ECMAScript `trim` and `Number` see it.
///
/// Unlike [`char::is_whitespace`] this includes U+FEFF and excludes U+0085.
pub(crate) fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Compiled format patterns shared by every rule table.
#[derive(Debug, Clone)]
pub(crate) struct Patterns {
    name: Regex,
    email: Regex,
}

impl Patterns {
    pub(crate) fn compile() -> Result<Self, regex::Error> {
        Ok(Self {
            name: Regex::new(NAME_PATTERN)?,
            email: Regex::new(EMAIL_PATTERN)?,
        })
    }
}

/// A single ordered predicate over a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The value must not be empty.
    Required,
    /// The value must have at least this many UTF-16 code units.
    MinLength(usize),
    /// The value must have the given shape.
    Matches(Format),
    /// The value must read as a number.
    Numeric,
    /// The number must have no fractional part.
    WholeNumber,
    /// The number must be at least this large.
    AtLeast(u32),
    /// The number must be at most this large.
    AtMost(u32),
}

/// The rules for one field, in evaluation order.
#[derive(Debug, Clone)]
pub struct RuleSet {
    field: Field,
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Build the rule table for `field` from the given thresholds.
    pub fn for_field(field: Field, settings: &RuleSettings) -> Self {
        let rules = match field {
            Field::Name => vec![
                Rule::Required,
                Rule::MinLength(settings.name_min_length),
                Rule::Matches(Format::LettersAndSpaces),
            ],
            Field::Email => vec![Rule::Required, Rule::Matches(Format::EmailAddress)],
            Field::Password => vec![
                Rule::Required,
                Rule::MinLength(settings.password_min_length),
                Rule::Matches(Format::Uppercase),
                Rule::Matches(Format::Digit),
            ],
            Field::Age => {
                let mut rules = vec![Rule::Required, Rule::Numeric];
                if settings.integer_age_only {
                    rules.push(Rule::WholeNumber);
                }
                rules.push(Rule::AtLeast(settings.age_min));
                rules.push(Rule::AtMost(settings.age_max));
                rules
            }
        };
        Self { field, rules }
    }

    /// The field these rules apply to.
    pub fn field(&self) -> Field {
        self.field
    }

    /// The rules in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Run the rules against `raw`, stopping at the first failure.
    pub(crate) fn evaluate(&self, raw: &str, patterns: &Patterns) -> Result<(), FieldError> {
        let value = if self.field.trims_input() {
            raw.trim_matches(is_js_whitespace)
        } else {
            raw
        };
        let mut number = None;

        for rule in &self.rules {
            self.check(*rule, value, patterns, &mut number)?;
        }
        Ok(())
    }

    fn check(
        &self,
        rule: Rule,
        value: &str,
        patterns: &Patterns,
        number: &mut Option<f64>,
    ) -> Result<(), FieldError> {
        let field = self.field;
        let passed = match rule {
            Rule::Required => !value.is_empty(),
            Rule::MinLength(min) => value.encode_utf16().count() >= min,
            Rule::Matches(format) => matches_format(format, value, patterns),
            Rule::Numeric => {
                *number = parse_number(value);
                number.is_some()
            }
            Rule::WholeNumber => {
                number_of(value, number).is_some_and(|n| n.is_finite() && n.fract() == 0.0)
            }
            Rule::AtLeast(min) => number_of(value, number).is_some_and(|n| n >= f64::from(min)),
            Rule::AtMost(max) => number_of(value, number).is_some_and(|n| n <= f64::from(max)),
        };

        if passed {
            return Ok(());
        }

        Err(match rule {
            Rule::Required => FieldError::EmptyValue { field },
            Rule::MinLength(min) => FieldError::TooShort { field, min },
            Rule::Matches(expected) => FieldError::InvalidFormat { field, expected },
            Rule::Numeric => FieldError::NotANumber {
                field,
                expected: NumberKind::Any,
            },
            Rule::WholeNumber => FieldError::NotANumber {
                field,
                expected: NumberKind::Whole,
            },
            Rule::AtLeast(min) => FieldError::OutOfRange {
                field,
                bound: Bound::Below { min },
            },
            Rule::AtMost(max) => FieldError::OutOfRange {
                field,
                bound: Bound::Above { max },
            },
        })
    }
}

fn matches_format(format: Format, value: &str, patterns: &Patterns) -> bool {
    match format {
        Format::LettersAndSpaces => patterns.name.is_match(value),
        Format::EmailAddress => patterns.email.is_match(value),
        Format::Uppercase => value.bytes().any(|b| b.is_ascii_uppercase()),
        Format::Digit => value.bytes().any(|b| b.is_ascii_digit()),
    }
}

/// The number parsed by an earlier `Numeric` rule, or a fresh parse.
fn number_of(value: &str, cached: &mut Option<f64>) -> Option<f64> {
    if cached.is_none() {
        *cached = parse_number(value);
    }
    *cached
}

/// Convert a string to a number the way a browser's `Number(string)` does.
///
/// Surrounding whitespace is ignored and a blank string is zero. Accepts
/// signed decimal literals with optional fraction and exponent, unsigned
/// `0x`/`0o`/`0b` integers, and a signed `Infinity`. Anything else is `None`.
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    let s = raw.trim_matches(is_js_whitespace);
    if s.is_empty() {
        return Some(0.0);
    }

    if let Some(n) = parse_prefixed_integer(s) {
        return Some(n);
    }

    let (negative, unsigned) = match s.as_bytes()[0] {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    if unsigned == "Infinity" {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    // `f64::from_str` also takes "inf" and "NaN", which are not numbers here.
    let literal = unsigned
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !literal {
        return None;
    }
    s.parse::<f64>().ok()
}

fn parse_prefixed_integer(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    s[2..].chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|digit| acc * f64::from(radix) + f64::from(digit))
    })
}
