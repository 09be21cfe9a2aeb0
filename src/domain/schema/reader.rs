//! Fault-tolerant typed reads from loosely shaped form input.

use serde_json::Value;

use super::report::{FieldError, ValidationReport};
use super::rules::codes;

/// Outcome of reading one field.
///
/// `Invalid` means the field was present with the wrong JSON type; the type
/// error has already been recorded, so rules should not report it again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Read<T> {
    Missing,
    Invalid,
    Found(T),
}

impl<T> Read<T> {
    pub(crate) fn is_invalid(&self) -> bool {
        matches!(self, Read::Invalid)
    }
}

/// Walks a JSON value by dotted paths and collects every error raised
/// against it.
pub(crate) struct FormReader<'a> {
    root: &'a Value,
    report: ValidationReport,
}

impl<'a> FormReader<'a> {
    pub(crate) fn new(root: &'a Value) -> Self {
        Self {
            root,
            report: ValidationReport::new(),
        }
    }

    /// Resolves `path`; `null` counts as missing.
    fn lookup(&self, path: &str) -> Option<&'a Value> {
        path.split('.')
            .try_fold(self.root, |node, segment| node.get(segment))
            .filter(|value| !value.is_null())
    }

    pub(crate) fn string(&mut self, path: &str) -> Read<&'a str> {
        match self.lookup(path) {
            None => Read::Missing,
            Some(Value::String(s)) => Read::Found(s.as_str()),
            Some(other) => {
                self.type_error(path, "string", other);
                Read::Invalid
            }
        }
    }

    pub(crate) fn number(&mut self, path: &str) -> Read<f64> {
        match self.lookup(path) {
            None => Read::Missing,
            Some(value) => match value.as_f64() {
                Some(n) => Read::Found(n),
                None => {
                    self.type_error(path, "number", value);
                    Read::Invalid
                }
            },
        }
    }

    pub(crate) fn boolean(&mut self, path: &str) -> Read<bool> {
        match self.lookup(path) {
            None => Read::Missing,
            Some(Value::Bool(b)) => Read::Found(*b),
            Some(other) => {
                self.type_error(path, "boolean", other);
                Read::Invalid
            }
        }
    }

    pub(crate) fn array(&mut self, path: &str) -> Read<&'a [Value]> {
        match self.lookup(path) {
            None => Read::Missing,
            Some(Value::Array(items)) => Read::Found(items.as_slice()),
            Some(other) => {
                self.type_error(path, "array", other);
                Read::Invalid
            }
        }
    }

    pub(crate) fn error(
        &mut self,
        path: impl Into<String>,
        code: &'static str,
        message: impl Into<String>,
    ) {
        self.report.push(FieldError::new(path, code, message));
    }

    pub(crate) fn type_error(&mut self, path: &str, expected: &str, found: &Value) {
        self.error(
            path,
            codes::TYPE,
            format!("Expected {expected}, received {}", json_kind(found)),
        );
    }

    pub(crate) fn finish(self) -> ValidationReport {
        self.report
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_lookup() {
        let input = json!({ "offers": { "pricing": { "type": "paid", "amount": 29 } } });
        let mut reader = FormReader::new(&input);

        assert_eq!(reader.string("offers.pricing.type"), Read::Found("paid"));
        assert_eq!(reader.number("offers.pricing.amount"), Read::Found(29.0));
        assert_eq!(reader.string("offers.pricing.currency"), Read::Missing);
        assert!(reader.finish().is_empty());
    }

    #[test]
    fn test_null_is_missing() {
        let input = json!({ "name": null });
        let mut reader = FormReader::new(&input);
        assert_eq!(reader.string("name"), Read::Missing);
    }

    #[test]
    fn test_wrong_type_records_error() {
        let input = json!({ "name": 42, "flags": { "on": "yes" } });
        let mut reader = FormReader::new(&input);

        assert!(reader.string("name").is_invalid());
        assert!(reader.boolean("flags.on").is_invalid());

        let report = reader.finish();
        assert_eq!(report.messages_for("name"), vec!["Expected string, received number"]);
        assert_eq!(report.messages_for("flags.on"), vec!["Expected boolean, received string"]);
    }

    #[test]
    fn test_non_object_root_reads_missing() {
        let input = json!("not a form");
        let mut reader = FormReader::new(&input);
        assert_eq!(reader.array("offers.features"), Read::Missing);
    }
}
