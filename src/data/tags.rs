//! Recursive tag expansion with cycle detection.
//!
//! All tags are expanded once at load time; queries only read the memoized result.
use super::models::{IngredientRef, Tag};
use crate::error::DataError;
use std::collections::{HashMap, HashSet};

/// Expands every tag, failing on the first unknown reference or cycle.
pub fn expand_all(
    tags: &HashMap<String, Tag>,
    items: &HashSet<&str>,
) -> Result<HashMap<String, Vec<String>>, DataError> {
    let mut memo = HashMap::with_capacity(tags.len());
    let mut keys: Vec<&String> = tags.keys().collect();
    keys.sort();
    for key in keys {
        let mut visiting = Vec::new();
        expand_into(key, tags, items, &mut memo, &mut visiting)?;
    }
    Ok(memo)
}

fn expand_into(
    key: &str,
    tags: &HashMap<String, Tag>,
    items: &HashSet<&str>,
    memo: &mut HashMap<String, Vec<String>>,
    visiting: &mut Vec<String>,
) -> Result<Vec<String>, DataError> {
    if let Some(done) = memo.get(key) {
        return Ok(done.clone());
    }
    if visiting.iter().any(|k| k == key) {
        let mut path = visiting.clone();
        path.push(key.to_string());
        return Err(DataError::TagCycle { path });
    }
    let Some(tag) = tags.get(key) else {
        let owner = visiting
            .last()
            .map(|k| format!("tag `{k}`"))
            .unwrap_or_else(|| "dataset".to_string());
        return Err(DataError::UnknownTag {
            owner,
            key: key.to_string(),
        });
    };

    visiting.push(key.to_string());
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for entries in tag.partitions.values() {
        for entry in entries {
            match entry {
                IngredientRef::Item(item) => {
                    if !items.contains(item.as_str()) {
                        return Err(DataError::UnknownItem {
                            owner: format!("tag `{key}`"),
                            key: item.clone(),
                        });
                    }
                    if seen.insert(item.clone()) {
                        out.push(item.clone());
                    }
                }
                IngredientRef::Tag(nested) => {
                    for item in expand_into(nested, tags, items, memo, visiting)? {
                        if seen.insert(item.clone()) {
                            out.push(item);
                        }
                    }
                }
            }
        }
    }
    visiting.pop();
    memo.insert(key.to_string(), out.clone());
    Ok(out)
}
