//! String schema with chained length, pattern, and format checks.

use regex::Regex;
use serde_json::Value;

use crate::check::{override_last, run_all, Check, CheckRule};
use crate::error::{SchemaResult, ValidationError, ValueKind};
use crate::Schema;

/// Acceptance pattern for `.email()`: local-part@domain with a
/// multi-character TLD. A fixed-form pattern, not a full RFC validator.
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9+_.-]+@([A-Za-z0-9.-]+\.[A-Za-z]{2,})$";

/// Acceptance pattern for `.url()`: optional http(s) scheme, domain, a
/// short top-level label, and an optional path.
const URL_PATTERN: &str = r"^(https?://)?([\da-z\.-]+)\.([a-z\.]{2,6})([/\w \.-]*)*/?$";

/// Validation rule applied to a coerced string.
#[derive(Debug, Clone)]
pub(crate) enum StringCheck {
    /// Minimum character count: `.min(n)`
    Min { length: usize },

    /// Maximum character count: `.max(n)`
    Max { length: usize },

    /// Exact character count: `.length(n)`
    Length { exact: usize },

    /// Email format: `.email()`
    Email { pattern: Regex },

    /// URL format: `.url()`
    Url { pattern: Regex },

    /// Custom pattern: `.regex(pattern)`
    Pattern { pattern: Regex },

    /// Required prefix: `.starts_with("prefix")`
    StartsWith { prefix: String },

    /// Required suffix: `.ends_with("suffix")`
    EndsWith { suffix: String },

    /// Required substring: `.includes("substring")`
    Includes { substring: String },
}

impl CheckRule for StringCheck {
    type Target = str;

    fn holds(&self, value: &str) -> bool {
        match self {
            Self::Min { length } => value.chars().count() >= *length,
            Self::Max { length } => value.chars().count() <= *length,
            Self::Length { exact } => value.chars().count() == *exact,
            Self::Email { pattern } | Self::Url { pattern } | Self::Pattern { pattern } => {
                pattern.is_match(value)
            }
            Self::StartsWith { prefix } => value.starts_with(prefix.as_str()),
            Self::EndsWith { suffix } => value.ends_with(suffix.as_str()),
            Self::Includes { substring } => value.contains(substring.as_str()),
        }
    }

    fn default_message(&self) -> String {
        match self {
            Self::Min { length } => format!("String must be at least {length} characters long"),
            Self::Max { length } => format!("String must be at most {length} characters long"),
            Self::Length { exact } => format!("String must be exactly {exact} characters long"),
            Self::Email { .. } => "Invalid email format".to_string(),
            Self::Url { .. } => "Invalid URL format".to_string(),
            Self::Pattern { .. } => "String does not match required pattern".to_string(),
            Self::StartsWith { prefix } => format!("String must start with '{prefix}'"),
            Self::EndsWith { suffix } => format!("String must end with '{suffix}'"),
            Self::Includes { substring } => format!("String must contain '{substring}'"),
        }
    }
}

/// Schema accepting string input. No coercion from other kinds.
///
/// Checks accumulate in order; on parse, all of them run against the
/// value and every failing check contributes its message.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use zod_parse::{string, Schema};
///
/// let email = string().min(5).email();
/// assert!(email.safe_parse(&json!("a@b.co")).is_ok());
///
/// // "a@b" violates both checks at once; both messages are reported.
/// let error = email.safe_parse(&json!("a@b")).unwrap_err();
/// assert_eq!(error.errors().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringSchema {
    checks: Vec<Check<StringCheck>>,
}

impl StringSchema {
    /// Create a schema with no checks.
    pub fn new() -> Self {
        <Self as Default>::default()
    }

    fn with(mut self, rule: StringCheck) -> Self {
        self.checks.push(Check::new(rule));
        self
    }

    /// Require at least `length` characters.
    pub fn min(self, length: usize) -> Self {
        self.with(StringCheck::Min { length })
    }

    /// Require at most `length` characters.
    pub fn max(self, length: usize) -> Self {
        self.with(StringCheck::Max { length })
    }

    /// Require exactly `exact` characters.
    pub fn length(self, exact: usize) -> Self {
        self.with(StringCheck::Length { exact })
    }

    /// Require the value to look like an email address.
    pub fn email(self) -> Self {
        let pattern = Regex::new(EMAIL_PATTERN).expect("email pattern compiles");
        self.with(StringCheck::Email { pattern })
    }

    /// Require the value to look like a URL.
    pub fn url(self) -> Self {
        let pattern = Regex::new(URL_PATTERN).expect("url pattern compiles");
        self.with(StringCheck::Url { pattern })
    }

    /// Require the value to match `pattern` somewhere.
    pub fn regex(self, pattern: Regex) -> Self {
        self.with(StringCheck::Pattern { pattern })
    }

    /// Require the value to start with `prefix`.
    pub fn starts_with(self, prefix: impl Into<String>) -> Self {
        self.with(StringCheck::StartsWith {
            prefix: prefix.into(),
        })
    }

    /// Require the value to end with `suffix`.
    pub fn ends_with(self, suffix: impl Into<String>) -> Self {
        self.with(StringCheck::EndsWith {
            suffix: suffix.into(),
        })
    }

    /// Require the value to contain `substring`.
    pub fn includes(self, substring: impl Into<String>) -> Self {
        self.with(StringCheck::Includes {
            substring: substring.into(),
        })
    }

    /// Override the failure message of the most recently added check.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        override_last(&mut self.checks, message);
        self
    }
}

impl Schema for StringSchema {
    type Output = String;

    fn safe_parse(&self, input: &Value) -> SchemaResult<String> {
        let Value::String(value) = input else {
            return Err(ValidationError::new(format!(
                "Expected string, received {}",
                ValueKind::of(input)
            )));
        };

        let errors = run_all(&self.checks, value.as_str());
        if errors.is_empty() {
            Ok(value.clone())
        } else {
            Err(ValidationError::from_errors(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_plain_string() {
        assert_eq!(
            StringSchema::new().safe_parse(&json!("hello")).unwrap(),
            "hello"
        );
    }

    #[test]
    fn test_rejects_other_kinds_with_received_kind() {
        let error = StringSchema::new().safe_parse(&json!(42)).unwrap_err();
        assert_eq!(error.errors(), ["Expected string, received number"]);

        let error = StringSchema::new().safe_parse(&json!(null)).unwrap_err();
        assert_eq!(error.errors(), ["Expected string, received null"]);
    }

    #[test]
    fn test_min_max_length() {
        let schema = StringSchema::new().min(2).max(4);
        assert!(schema.safe_parse(&json!("ab")).is_ok());
        assert!(schema.safe_parse(&json!("abcd")).is_ok());

        let error = schema.safe_parse(&json!("a")).unwrap_err();
        assert_eq!(error.errors(), ["String must be at least 2 characters long"]);

        let error = schema.safe_parse(&json!("abcde")).unwrap_err();
        assert_eq!(error.errors(), ["String must be at most 4 characters long"]);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let schema = StringSchema::new().length(3);
        assert!(schema.safe_parse(&json!("áéí")).is_ok());
        assert!(schema.safe_parse(&json!("ab")).is_err());
    }

    #[test]
    fn test_all_failing_checks_report_together() {
        let schema = StringSchema::new().min(10).starts_with("x").includes("zz");
        let error = schema.safe_parse(&json!("hello")).unwrap_err();
        assert_eq!(
            error.errors(),
            [
                "String must be at least 10 characters long",
                "String must start with 'x'",
                "String must contain 'zz'",
            ]
        );
    }

    #[test]
    fn test_email() {
        let schema = StringSchema::new().email();
        assert!(schema.safe_parse(&json!("user@example.com")).is_ok());
        assert!(schema.safe_parse(&json!("user+tag@sub.example.co")).is_ok());
        assert!(schema.safe_parse(&json!("not-an-email")).is_err());
        assert!(schema.safe_parse(&json!("a@b")).is_err());

        let error = schema.safe_parse(&json!("nope")).unwrap_err();
        assert_eq!(error.errors(), ["Invalid email format"]);
    }

    #[test]
    fn test_url() {
        let schema = StringSchema::new().url();
        assert!(schema.safe_parse(&json!("https://example.com")).is_ok());
        assert!(schema.safe_parse(&json!("example.com/path")).is_ok());
        assert!(schema.safe_parse(&json!("not a url")).is_err());
    }

    #[test]
    fn test_regex() {
        let schema = StringSchema::new().regex(Regex::new(r"^\d{4}$").expect("pattern compiles"));
        assert!(schema.safe_parse(&json!("2024")).is_ok());

        let error = schema.safe_parse(&json!("24")).unwrap_err();
        assert_eq!(error.errors(), ["String does not match required pattern"]);
    }

    #[test]
    fn test_starts_ends_includes() {
        let schema = StringSchema::new()
            .starts_with("ab")
            .ends_with("yz")
            .includes("mm");
        assert!(schema.safe_parse(&json!("ab-mm-yz")).is_ok());
        assert!(schema.safe_parse(&json!("ab-yz")).is_err());
    }

    #[test]
    fn test_message_overrides_last_check() {
        let schema = StringSchema::new().min(3).message("too short");
        let error = schema.safe_parse(&json!("ab")).unwrap_err();
        assert_eq!(error.errors(), ["too short"]);
    }

    #[test]
    fn test_chaining_does_not_affect_origin() {
        let base = StringSchema::new().min(2);
        let strict = base.clone().max(3);
        assert!(base.safe_parse(&json!("abcdef")).is_ok());
        assert!(strict.safe_parse(&json!("abcdef")).is_err());
    }

    #[test]
    fn test_duplicate_checks_both_evaluate() {
        let schema = StringSchema::new().min(3).min(3);
        let error = schema.safe_parse(&json!("ab")).unwrap_err();
        assert_eq!(error.errors().len(), 2);
        assert!(schema.safe_parse(&json!("abc")).is_ok());
    }
}
