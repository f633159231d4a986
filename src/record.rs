//! Record helpers: object extraction, id lookup and the root sentinel.

use serde_json::{Map, Value};

use crate::config::TreeConfig;
use crate::errors::{TreeError, TreeResult};

/// A record is a plain field-to-value mapping.
pub type Record = Map<String, Value>;

/// Borrow `value` as a record, failing with `InvalidInput` otherwise.
pub(crate) fn as_record(value: &Value, index: usize) -> TreeResult<&Record> {
    value.as_object().ok_or_else(|| TreeError::InvalidInput {
        index,
        reason: format!("expected an object, got {}", type_name(value)),
    })
}

/// Fetch the record's id, failing with `InvalidRecord` when the field is
/// absent or null.
pub(crate) fn require_id<'a>(
    record: &'a Record,
    config: &TreeConfig,
    index: usize,
) -> TreeResult<&'a Value> {
    match record.get(&config.id_field) {
        Some(id) if !id.is_null() => Ok(id),
        _ => Err(TreeError::InvalidRecord {
            index,
            field: config.id_field.clone(),
        }),
    }
}

/// Canonical index key for an id value. Compact JSON rendering keeps
/// `1` and `"1"` distinct.
pub(crate) fn id_key(value: &Value) -> String {
    value.to_string()
}

/// Whether a parent-id value denotes "no parent". Absent, null, and the
/// number zero all mark a root; an id of `0` can therefore never be
/// referenced as a parent.
pub(crate) fn is_root_ref(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(_) => false,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn given_absent_null_or_zero_when_checking_root_ref_then_true() {
        assert!(is_root_ref(None));
        assert!(is_root_ref(Some(&Value::Null)));
        assert!(is_root_ref(Some(&json!(0))));
        assert!(is_root_ref(Some(&json!(0.0))));
    }

    #[test]
    fn given_real_ids_when_checking_root_ref_then_false() {
        assert!(!is_root_ref(Some(&json!(1))));
        assert!(!is_root_ref(Some(&json!("0"))));
        assert!(!is_root_ref(Some(&json!(""))));
    }

    #[test]
    fn given_number_and_string_ids_when_keying_then_keys_differ() {
        assert_ne!(id_key(&json!(1)), id_key(&json!("1")));
    }
}
