//! Brief intake validation.
//!
//! The submitted payload is validated field-by-field so a rejected request
//! can report every violated constraint at once, not just the first. A
//! [`BriefInput`] is all-or-nothing: it only exists once every constraint
//! has passed.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use url::Url;

/// A validated marketing-brief submission.
#[derive(Debug, Clone, Serialize)]
pub struct BriefInput {
    pub goal: String,
    pub product: String,
    pub site: String,
    pub geo: String,
    pub budget: String,
    pub audience: String,
    pub channels: Vec<String>,
    pub constraints: String,
    pub email: String,
}

/// One violated field constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: String,
}

/// The submission violated one or more field constraints.
#[derive(Debug, Error)]
#[error("{} field constraint(s) violated", .issues.len())]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl BriefInput {
    /// Validate a raw request body into a `BriefInput`.
    ///
    /// The body may be a JSON object or a JSON-encoded string of one; any
    /// parse failure degrades to an empty object so each required field
    /// reports its own issue instead of a single "unparseable" error.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] enumerating every violated field.
    pub fn from_body(raw: &[u8]) -> Result<Self, ValidationError> {
        Self::from_value(&coerce_payload(raw))
    }

    /// Validate an already-parsed JSON payload into a `BriefInput`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] enumerating every violated field.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let mut issues = Vec::new();

        let goal = required_text(value, "goal", &mut issues);
        let product = required_text(value, "product", &mut issues);

        let site = optional_text(value, "site");
        if !site.is_empty() && !is_valid_site(&site) {
            issues.push(FieldIssue {
                field: "site",
                message: "must be a well-formed http(s) URL or empty".to_string(),
            });
        }

        let geo = optional_text(value, "geo");
        let budget = optional_text(value, "budget");
        let audience = optional_text(value, "audience");
        let constraints = optional_text(value, "constraints");

        let channels = match value.get("channels") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => {
                let strings: Option<Vec<String>> = items
                    .iter()
                    .map(|v| v.as_str().map(ToOwned::to_owned))
                    .collect();
                match strings {
                    Some(list) => list,
                    None => {
                        issues.push(FieldIssue {
                            field: "channels",
                            message: "must be an array of strings".to_string(),
                        });
                        Vec::new()
                    }
                }
            }
            Some(_) => {
                issues.push(FieldIssue {
                    field: "channels",
                    message: "must be an array of strings".to_string(),
                });
                Vec::new()
            }
        };

        let email = optional_text(value, "email");
        if !is_valid_email(&email) {
            issues.push(FieldIssue {
                field: "email",
                message: "must be a valid email address".to_string(),
            });
        }

        if !issues.is_empty() {
            return Err(ValidationError { issues });
        }

        Ok(Self {
            goal,
            product,
            site,
            geo,
            budget,
            audience,
            channels,
            constraints,
            email,
        })
    }
}

/// Parse the raw body into a JSON value, unwrapping one level of
/// string-encoding. Anything unparseable becomes an empty object.
fn coerce_payload(raw: &[u8]) -> Value {
    let parsed: Value = match serde_json::from_slice(raw) {
        Ok(v) => v,
        Err(_) => return Value::Object(serde_json::Map::new()),
    };
    match parsed {
        Value::String(inner) => {
            serde_json::from_str(&inner).unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
        }
        other => other,
    }
}

fn required_text(value: &Value, field: &'static str, issues: &mut Vec<FieldIssue>) -> String {
    let text = optional_text(value, field);
    if text.trim().chars().count() < 2 {
        issues.push(FieldIssue {
            field,
            message: "must be a string of at least 2 characters".to_string(),
        });
    }
    text
}

fn optional_text(value: &Value, field: &str) -> String {
    value
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn is_valid_site(site: &str) -> bool {
    match Url::parse(site) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host().is_some(),
        Err(_) => false,
    }
}

/// Syntactic email check: one `@`, non-empty local part, dotted domain,
/// no whitespace. Deliverability is not our problem.
fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn issue_fields(err: &ValidationError) -> Vec<&'static str> {
        err.issues.iter().map(|i| i.field).collect()
    }

    #[test]
    fn accepts_minimal_valid_brief() {
        let value = json!({
            "goal": "grow signups",
            "product": "SaaS tool",
            "email": "a@b.com"
        });
        let brief = BriefInput::from_value(&value).expect("minimal brief should validate");
        assert_eq!(brief.goal, "grow signups");
        assert_eq!(brief.product, "SaaS tool");
        assert_eq!(brief.email, "a@b.com");
        assert!(brief.site.is_empty());
        assert!(brief.channels.is_empty());
    }

    #[test]
    fn accepts_full_brief_and_preserves_channel_order() {
        let value = json!({
            "goal": "grow signups",
            "product": "SaaS tool",
            "site": "https://example.com",
            "geo": "US",
            "budget": "$10k/mo",
            "audience": "founders",
            "channels": ["search", "social", "email"],
            "constraints": "no TikTok",
            "email": "a@b.com"
        });
        let brief = BriefInput::from_value(&value).expect("full brief should validate");
        assert_eq!(brief.channels, vec!["search", "social", "email"]);
        assert_eq!(brief.site, "https://example.com");
    }

    #[test]
    fn enumerates_all_missing_required_fields() {
        let err = BriefInput::from_value(&json!({})).expect_err("empty object should fail");
        let fields = issue_fields(&err);
        assert_eq!(fields, vec!["goal", "product", "email"]);
    }

    #[test]
    fn rejects_single_character_goal() {
        let value = json!({ "goal": "x", "product": "SaaS tool", "email": "a@b.com" });
        let err = BriefInput::from_value(&value).expect_err("short goal should fail");
        assert_eq!(issue_fields(&err), vec!["goal"]);
    }

    #[test]
    fn rejects_malformed_site_and_email_together() {
        let value = json!({
            "goal": "grow signups",
            "product": "SaaS tool",
            "site": "not a url",
            "email": "not-an-email"
        });
        let err = BriefInput::from_value(&value).expect_err("should fail");
        assert_eq!(issue_fields(&err), vec!["site", "email"]);
    }

    #[test]
    fn empty_site_is_allowed() {
        let value = json!({ "goal": "grow signups", "product": "SaaS tool", "site": "", "email": "a@b.com" });
        assert!(BriefInput::from_value(&value).is_ok());
    }

    #[test]
    fn rejects_non_http_site_scheme() {
        let value = json!({ "goal": "grow signups", "product": "SaaS tool", "site": "ftp://example.com", "email": "a@b.com" });
        let err = BriefInput::from_value(&value).expect_err("ftp site should fail");
        assert_eq!(issue_fields(&err), vec!["site"]);
    }

    #[test]
    fn rejects_mixed_type_channels() {
        let value = json!({ "goal": "grow signups", "product": "SaaS tool", "channels": ["search", 42], "email": "a@b.com" });
        let err = BriefInput::from_value(&value).expect_err("non-string channel should fail");
        assert_eq!(issue_fields(&err), vec!["channels"]);
    }

    #[test]
    fn non_string_required_field_counts_as_missing() {
        let value = json!({ "goal": 7, "product": "SaaS tool", "email": "a@b.com" });
        let err = BriefInput::from_value(&value).expect_err("numeric goal should fail");
        assert_eq!(issue_fields(&err), vec!["goal"]);
    }

    #[test]
    fn body_accepts_string_wrapped_json() {
        let inner = r#"{"goal":"grow signups","product":"SaaS tool","email":"a@b.com"}"#;
        let wrapped = serde_json::to_vec(&inner).unwrap();
        let brief = BriefInput::from_body(&wrapped).expect("string-wrapped body should validate");
        assert_eq!(brief.goal, "grow signups");
    }

    #[test]
    fn unparseable_body_fails_per_field_not_wholesale() {
        let err = BriefInput::from_body(b"{{{ nope").expect_err("garbage body should fail");
        assert_eq!(issue_fields(&err), vec!["goal", "product", "email"]);
    }

    #[test]
    fn email_validation_cases() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@sub.domain.co"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@domain.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@domain"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user name@domain.com"));
    }
}
