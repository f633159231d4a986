//! Pre-order flattening of nested trees into flat record sequences.

use serde_json::{Map, Value};
use tracing::instrument;

use crate::config::TreeConfig;
use crate::errors::{TreeError, TreeResult};
use crate::record::{as_record, require_id};

/// Flatten a forest of nested records into a flat, ordered collection.
///
/// Traversal is pre-order depth-first: a parent always precedes its
/// descendants and siblings keep their order. Each emitted record is a
/// clone of the node with the children field removed and the parent-id
/// field set to the direct ancestor's id, or null for roots.
///
/// Every node must carry a non-null id (its children's parent-id is taken
/// from it). A children value that is not an array is rejected. Error
/// indices refer to the node's position in pre-order.
///
/// The traversal uses an explicit stack, so tree depth is not bounded by
/// the call stack.
#[instrument(level = "debug", skip(tree), fields(roots = tree.len()))]
pub fn flatten_tree(tree: &[Value], config: &TreeConfig) -> TreeResult<Vec<Value>> {
    config.validate()?;

    let mut flat: Vec<Value> = Vec::new();
    // (node, parent id); children pushed in reverse for left-to-right order
    let mut stack: Vec<(&Value, Value)> = Vec::new();
    for root in tree.iter().rev() {
        stack.push((root, Value::Null));
    }

    let mut visit_index = 0;
    while let Some((value, parent_id)) = stack.pop() {
        let record = as_record(value, visit_index)?;
        let id = require_id(record, config, visit_index)?.clone();

        // Copy fields individually so the children subtree is never cloned
        let mut out = Map::with_capacity(record.len() + 1);
        for (key, field) in record {
            if key != &config.children_field {
                out.insert(key.clone(), field.clone());
            }
        }
        out.insert(config.pid_field.clone(), parent_id);
        flat.push(Value::Object(out));

        if let Some(kids) = record.get(&config.children_field) {
            let kids = kids.as_array().ok_or_else(|| TreeError::InvalidInput {
                index: visit_index,
                reason: format!("field {:?} must be an array", config.children_field),
            })?;
            for child in kids.iter().rev() {
                stack.push((child, id.clone()));
            }
        }
        visit_index += 1;
    }

    Ok(flat)
}
