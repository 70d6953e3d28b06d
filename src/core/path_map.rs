//! Dotted-path access over a nested mapping
//!
//! `PathMap` owns a YAML mapping and reads or writes single values through
//! dotted key paths: `"a.b.c"` addresses `root["a"]["b"]["c"]`. Reads never
//! fail; a missing path yields `None` or the caller's default. Writes create
//! the intermediate mappings they need. Sequences inside the map are
//! addressed by index, so `"tags.0"` is the first tag.

use crate::core::key_path::KeyPath;
use crate::core::value::{type_name, value_to_string};
use crate::error::{DotListError, Result};
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

/// What `set` does when a path runs through a scalar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SetPolicy {
    /// Replace the value with a new mapping and carry on
    #[default]
    Overwrite,
    /// Fail with `PathConflict` and leave the map untouched
    Strict,
}

/// Configuration for a `PathMap`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathMapConfig {
    pub set_policy: SetPolicy,
}

/// A nested mapping addressed by dotted paths
#[derive(Debug, Clone)]
pub struct PathMap {
    root: Value,
    config: PathMapConfig,
    modified: bool,
}

impl PathMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::from_mapping(Mapping::new())
    }

    /// Take ownership of an existing mapping
    pub fn from_mapping(mapping: Mapping) -> Self {
        Self {
            root: Value::Mapping(mapping),
            config: PathMapConfig::default(),
            modified: false,
        }
    }

    /// Parse a YAML document whose root is a mapping (or empty)
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let value: Value = serde_yaml::from_str(s)?;
        Self::try_from(value)
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: PathMapConfig) -> Self {
        self.config = config;
        self
    }

    /// Shorthand for setting only the set policy
    pub fn with_set_policy(mut self, policy: SetPolicy) -> Self {
        self.config.set_policy = policy;
        self
    }

    pub fn config(&self) -> &PathMapConfig {
        &self.config
    }

    /// The whole root mapping
    pub fn root(&self) -> &Mapping {
        match &self.root {
            Value::Mapping(map) => map,
            _ => unreachable!("PathMap root is always a mapping"),
        }
    }

    /// Give up the root mapping
    pub fn into_inner(self) -> Mapping {
        match self.root {
            Value::Mapping(map) => map,
            _ => unreachable!("PathMap root is always a mapping"),
        }
    }

    /// Whether `set` or `remove` changed anything since creation or the last
    /// `mark_clean`
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn mark_clean(&mut self) {
        self.modified = false;
    }

    /// Look up a value.
    ///
    /// An empty path returns the live root. Segments walk into mappings by
    /// key and into sequences by index (`"tags.0"`). A segment also matches a
    /// number or bool key whose text is the same (`"ports.80"` finds `80:`).
    /// Keys holding `null` count as absent.
    pub fn get<P: Into<KeyPath>>(&self, path: P) -> Option<&Value> {
        let path = path.into();
        if path.is_empty() {
            return Some(&self.root);
        }

        let mut scope = &self.root;
        for segment in path.segments() {
            scope = match child(scope, segment) {
                Some(next) => next,
                None => {
                    trace!("path '{}' missing at segment '{}'", path, segment);
                    return None;
                }
            };
        }

        if scope.is_null() {
            trace!("path '{}' has no value", path);
            return None;
        }
        Some(scope)
    }

    /// Look up a value, falling back to `default`
    pub fn get_or<'a, P: Into<KeyPath>>(&'a self, path: P, default: &'a Value) -> &'a Value {
        self.get(path).unwrap_or(default)
    }

    /// First element of the container at `path`.
    ///
    /// Mappings yield the value of their first inserted key and sequences
    /// their first item. Scalars, missing paths and empty containers yield
    /// `None`.
    pub fn get_first<P: Into<KeyPath>>(&self, path: P) -> Option<&Value> {
        match self.get(path)? {
            Value::Mapping(map) => map.values().next(),
            Value::Sequence(seq) => seq.first(),
            _ => None,
        }
    }

    /// First element of the container at `path`, falling back to `default`
    pub fn get_first_or<'a, P: Into<KeyPath>>(&'a self, path: P, default: &'a Value) -> &'a Value {
        self.get_first(path).unwrap_or(default)
    }

    /// Whether `path` holds a non-null value
    pub fn has<P: Into<KeyPath>>(&self, path: P) -> bool {
        self.get(path).is_some()
    }

    /// Assign `value` at `path`, creating missing intermediate mappings.
    ///
    /// Any previous value at the final segment is replaced. Existing
    /// sequences are written by index and padded with `null` up to it; a
    /// segment that is not an index cannot address a sequence and fails with
    /// `PathConflict` whatever the policy. Returns the map so calls can be
    /// chained.
    pub fn set<P, V>(&mut self, path: P, value: V) -> Result<&mut Self>
    where
        P: Into<KeyPath>,
        V: Into<Value>,
    {
        let path = path.into();
        if path.is_empty() {
            return Err(DotListError::invalid_argument(
                "PathMap::set",
                "path must not be empty",
            ));
        }

        // Nothing below can fail once the path has been checked, so a
        // rejected `set` leaves the map as it was.
        self.check_conflicts(&path)?;

        let mut scope = &mut self.root;
        for segment in path.parents() {
            scope = descend_or_create(scope, segment, &path)?;
        }
        if let Some(leaf) = path.last() {
            *slot_mut(scope, leaf, &path)? = value.into();
        }

        self.modified = true;
        Ok(self)
    }

    /// Remove and return the value at `path`. Intermediate mappings are never
    /// created or pruned. Removing from a sequence shifts the later items
    /// down.
    pub fn remove<P: Into<KeyPath>>(&mut self, path: P) -> Option<Value> {
        let path = path.into();
        let leaf = path.last()?;

        let mut scope = &mut self.root;
        for segment in path.parents() {
            scope = child_mut(scope, segment)?;
        }

        let removed = match scope {
            Value::Mapping(map) => {
                let key = find_key(map, leaf)?;
                map.remove(&key)
            }
            Value::Sequence(seq) => match sequence_index(leaf) {
                Some(index) if index < seq.len() => Some(seq.remove(index)),
                _ => None,
            },
            _ => None,
        };
        if removed.is_some() {
            debug!("removed '{}'", path);
            self.modified = true;
        }
        removed
    }

    /// Serialize the root mapping as YAML
    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.root)?)
    }

    fn check_conflicts(&self, path: &KeyPath) -> Result<()> {
        let mut scope = &self.root;
        for (depth, segment) in path.segments().iter().enumerate() {
            let conflict = || DotListError::path_conflict(path.to_string(), segment);
            if scope.is_sequence() && sequence_index(segment).is_none() {
                return Err(conflict());
            }
            if depth + 1 == path.len() {
                break;
            }
            scope = match child(scope, segment) {
                Some(next) if is_container(next) => next,
                None | Some(Value::Null) => return Ok(()),
                Some(_) if self.config.set_policy == SetPolicy::Strict => return Err(conflict()),
                Some(_) => return Ok(()),
            };
        }
        Ok(())
    }
}

fn is_container(value: &Value) -> bool {
    matches!(value, Value::Mapping(_) | Value::Sequence(_))
}

/// Canonical decimal index: `"0"`, `"12"`; not `"+1"` or `"01"`
fn sequence_index(segment: &str) -> Option<usize> {
    segment
        .parse::<usize>()
        .ok()
        .filter(|index| index.to_string() == segment)
}

fn key_matches(key: &Value, segment: &str) -> bool {
    match key {
        Value::String(s) => s == segment,
        Value::Number(_) | Value::Bool(_) => value_to_string(key) == segment,
        _ => false,
    }
}

/// The existing key a segment names, preferring an exact string key
fn find_key(map: &Mapping, segment: &str) -> Option<Value> {
    if map.contains_key(segment) {
        return Some(Value::String(segment.to_string()));
    }
    map.keys().find(|key| key_matches(key, segment)).cloned()
}

fn child<'a>(scope: &'a Value, segment: &str) -> Option<&'a Value> {
    match scope {
        Value::Mapping(map) => map.get(segment).or_else(|| {
            map.iter()
                .find(|(key, _)| key_matches(key, segment))
                .map(|(_, value)| value)
        }),
        Value::Sequence(seq) => seq.get(sequence_index(segment)?),
        _ => None,
    }
}

fn child_mut<'a>(scope: &'a mut Value, segment: &str) -> Option<&'a mut Value> {
    match scope {
        Value::Mapping(map) => {
            let key = find_key(map, segment)?;
            map.get_mut(&key)
        }
        Value::Sequence(seq) => seq.get_mut(sequence_index(segment)?),
        _ => None,
    }
}

/// The slot `segment` names inside `scope`, inserting a `null` one if it is
/// missing. Sequences grow with `null` up to the index.
fn slot_mut<'a>(scope: &'a mut Value, segment: &str, path: &KeyPath) -> Result<&'a mut Value> {
    let conflict = || DotListError::path_conflict(path.to_string(), segment);
    match scope {
        Value::Mapping(map) => {
            let key = match find_key(map, segment) {
                Some(key) => key,
                None => {
                    let key = Value::String(segment.to_string());
                    map.insert(key.clone(), Value::Null);
                    key
                }
            };
            map.get_mut(&key).ok_or_else(conflict)
        }
        Value::Sequence(seq) => {
            let index = sequence_index(segment).ok_or_else(conflict)?;
            if index >= seq.len() {
                seq.resize(index + 1, Value::Null);
            }
            Ok(&mut seq[index])
        }
        _ => Err(conflict()),
    }
}

/// Step into `segment`, replacing whatever is there with a fresh mapping
/// unless it is already a mapping or sequence
fn descend_or_create<'a>(
    scope: &'a mut Value,
    segment: &str,
    path: &KeyPath,
) -> Result<&'a mut Value> {
    let slot = slot_mut(scope, segment, path)?;
    if !is_container(slot) {
        if slot.is_null() {
            debug!("creating mapping at '{}' while setting '{}'", segment, path);
        } else {
            warn!(
                "replacing {} at '{}' with a mapping while setting '{}'",
                type_name(slot),
                segment,
                path
            );
        }
        *slot = Value::Mapping(Mapping::new());
    }
    Ok(slot)
}

impl Default for PathMap {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for PathMap {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}

impl From<Mapping> for PathMap {
    fn from(mapping: Mapping) -> Self {
        Self::from_mapping(mapping)
    }
}

impl TryFrom<Value> for PathMap {
    type Error = DotListError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Mapping(map) => Ok(Self::from_mapping(map)),
            Value::Null => Ok(Self::new()),
            other => Err(DotListError::type_conversion(type_name(&other), "mapping")),
        }
    }
}
