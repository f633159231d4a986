//! Ancestor-chain resolution over flat collections and nested trees.

use std::collections::{HashMap, HashSet};

use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::TreeConfig;
use crate::errors::{TreeError, TreeResult};
use crate::flatten::flatten_tree;
use crate::record::{as_record, id_key, is_root_ref, require_id, Record};

/// Resolve the ancestor chain for `target_id` in a flat collection.
///
/// The target is the first record in collection order whose id equals
/// `target_id`; on duplicate ids the earliest record wins, both for the
/// target and for every parent lookup. The chain is returned root-first
/// with the target last, records cloned unchanged (parent-id field
/// retained). An absent target is not an error and yields an empty chain.
///
/// The walk stops at the root sentinel (absent/null/zero parent-id) or at
/// a parent id with no matching record. Visited ids are tracked, and
/// revisiting one (which includes a record naming itself as parent) fails
/// with `CyclicReference` instead of looping.
#[instrument(level = "debug", skip(source), fields(count = source.len()))]
pub fn find_ancestors(
    source: &[Value],
    target_id: &Value,
    config: &TreeConfig,
) -> TreeResult<Vec<Value>> {
    config.validate()?;

    let mut records: Vec<&Record> = Vec::with_capacity(source.len());
    for (index, value) in source.iter().enumerate() {
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

    let Some(target) = records.iter().position(|r| r[&config.id_field] == *target_id) else {
        debug!("target id not present, returning empty chain");
        return Ok(Vec::new());
    };

    let mut chain = vec![target];
    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(id_key(&records[target][&config.id_field]));

    let mut current = target;
    loop {
        let parent = records[current]
            .get(&config.pid_field)
            .filter(|pid| !is_root_ref(Some(*pid)))
            .and_then(|pid| index_by_id.get(&id_key(pid)).copied());

        let Some(next) = parent else { break };

        let next_key = id_key(&records[next][&config.id_field]);
        if !visited.insert(next_key.clone()) {
            return Err(TreeError::CyclicReference { id: next_key });
        }
        chain.push(next);
        current = next;
    }

    chain.reverse();
    Ok(chain
        .into_iter()
        .map(|i| Value::Object(records[i].clone()))
        .collect())
}

/// Resolve the ancestor chain for `target_id` in a nested tree.
///
/// Flattens the tree with the same config, then resolves in the flat
/// collection, so returned records carry a populated parent-id field and
/// no children field.
#[instrument(level = "debug", skip(tree), fields(roots = tree.len()))]
pub fn find_ancestors_in_tree(
    tree: &[Value],
    target_id: &Value,
    config: &TreeConfig,
) -> TreeResult<Vec<Value>> {
    let flat = flatten_tree(tree, config)?;
    find_ancestors(&flat, target_id, config)
}
