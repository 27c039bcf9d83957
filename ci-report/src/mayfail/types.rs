//! Mayfail report data model.
//!
//! Reports come from test binaries run with `--mayfail-report`, so the shape is
//! only loosely guaranteed. Every field is optional and scalar fields accept
//! any JSON type; a value that cannot be read as text is treated as absent.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Rendered in place of a missing assertion field.
pub const PLACEHOLDER: &str = "?";

/// Test name used for records that do not carry one.
pub const UNKNOWN_TEST: &str = "unknown";

/// A single failed assertion inside a test case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assertion {
    /// Source file of the assertion
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub file: Option<String>,
    /// Line number; reports emit either a string or a number
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub line: Option<String>,
    /// Assertion expression as written in the source
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub expression: Option<String>,
    /// Expression with operands expanded to their runtime values
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub expanded: Option<String>,
    /// INFO/CAPTURE messages active when the assertion failed
    #[serde(
        default,
        deserialize_with = "lenient_messages",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub messages: Vec<String>,
}

impl Assertion {
    /// `file:line`, with `?` standing in for either missing part.
    pub fn location(&self) -> String {
        format!(
            "{}:{}",
            self.file.as_deref().unwrap_or(PLACEHOLDER),
            self.line.as_deref().unwrap_or(PLACEHOLDER)
        )
    }

    pub fn expression_or_placeholder(&self) -> &str {
        self.expression.as_deref().unwrap_or(PLACEHOLDER)
    }

    pub fn expanded_or_placeholder(&self) -> &str {
        self.expanded.as_deref().unwrap_or(PLACEHOLDER)
    }
}

/// All failed assertions of one test case, as reported by one shard or
/// merged across shards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureRecord {
    #[serde(default = "unknown_test", deserialize_with = "lenient_test_name")]
    pub test: String,
    #[serde(default, deserialize_with = "lenient_tags")]
    pub tags: String,
    #[serde(default, deserialize_with = "lenient_assertions")]
    pub assertions: Vec<Assertion>,
}

impl FailureRecord {
    pub fn new(test: impl Into<String>) -> Self {
        Self {
            test: test.into(),
            tags: String::new(),
            assertions: Vec::new(),
        }
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    pub fn with_assertion(mut self, assertion: Assertion) -> Self {
        self.assertions.push(assertion);
        self
    }

    /// Messages of every assertion, in assertion order then message order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.assertions
            .iter()
            .flat_map(|a| a.messages.iter().map(String::as_str))
    }
}

fn unknown_test() -> String {
    UNKNOWN_TEST.to_string()
}

/// Text form of a scalar JSON value. `null` is absent; strings are taken
/// verbatim; anything else uses its JSON text.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(scalar_text))
}

fn lenient_test_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.unwrap_or_else(unknown_test))
}

fn lenient_tags<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.unwrap_or_default())
}

fn lenient_messages<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let messages = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items.into_iter().filter_map(scalar_text).collect(),
        Some(single) => scalar_text(single).into_iter().collect(),
        None => Vec::new(),
    };
    Ok(messages)
}

/// Assertions that are not JSON objects are dropped; the rest of the list is kept.
fn lenient_assertions<'de, D>(deserializer: D) -> Result<Vec<Assertion>, D::Error>
where
    D: Deserializer<'de>,
{
    let assertions = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value::<Assertion>(item).ok())
            .collect(),
        _ => Vec::new(),
    };
    Ok(assertions)
}
