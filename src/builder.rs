//! Forest construction from flat, parent-referencing records.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::TreeConfig;
use crate::errors::TreeResult;
use crate::record::{as_record, id_key, is_root_ref, require_id, Record};

/// Nest a flat collection of records into a forest.
///
/// Each record is attached under the record whose id matches its parent-id
/// field; the parent-id field is stripped in the process, since nesting
/// already encodes the relationship. A record whose parent-id is absent,
/// null, zero, its own id, or simply not present in the collection becomes
/// a root. Roots and siblings keep their input order, and leaves carry no
/// children field at all.
///
/// Every record must carry a non-null id field. On duplicate ids the first
/// occurrence wins as parent lookup target. Records caught in a parent-id
/// cycle are unreachable from any root and are omitted from the forest.
///
/// Input is never modified; output records are fresh clones.
#[instrument(level = "debug", skip(items), fields(count = items.len()))]
pub fn build_tree(items: &[Value], config: &TreeConfig) -> TreeResult<Vec<Value>> {
    config.validate()?;

    let mut records: Vec<&Record> = Vec::with_capacity(items.len());
    for (index, value) in items.iter().enumerate() {
        let record = as_record(value, index)?;
        require_id(record, config, index)?;
        records.push(record);
    }

    // First occurrence wins on duplicate ids
    let mut index_by_id: HashMap<String, usize> = HashMap::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        index_by_id
            .entry(id_key(&record[&config.id_field]))
            .or_insert(i);
    }

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); records.len()];
    let mut roots: Vec<usize> = Vec::new();
    for (i, record) in records.iter().enumerate() {
        let parent = record
            .get(&config.pid_field)
            .filter(|pid| !is_root_ref(Some(*pid)))
            .and_then(|pid| index_by_id.get(&id_key(pid)).copied())
            // a record cannot be its own parent
            .filter(|&p| p != i);

        match parent {
            Some(p) => children[p].push(i),
            None => roots.push(i),
        }
    }

    let mut emitted = 0;
    let forest = roots
        .iter()
        .map(|&root| assemble(root, &records, &children, config, &mut emitted))
        .collect();

    if emitted < records.len() {
        debug!(
            dropped = records.len() - emitted,
            "records unreachable from any root (parent cycle), omitted"
        );
    }

    Ok(forest)
}

fn assemble(
    i: usize,
    records: &[&Record],
    children: &[Vec<usize>],
    config: &TreeConfig,
    emitted: &mut usize,
) -> Value {
    *emitted += 1;
    let mut node = records[i].clone();
    node.remove(&config.pid_field);
    if !children[i].is_empty() {
        let kids: Vec<Value> = children[i]
            .iter()
            .map(|&c| assemble(c, records, children, config, emitted))
            .collect();
        node.insert(config.children_field.clone(), Value::Array(kids));
    }
    Value::Object(node)
}
