//! Core types
//!
//! - PathMap: dotted-path get/set over a nested YAML mapping
//! - Sequence: ordered list with in-place and pure transforms
//! - KeyPath: parsed dotted paths
//! - Render / IntegerArgument: the text and integer conversions both rely on

pub mod argument;
pub mod key_path;
pub mod path_map;
pub mod sequence;
pub mod value;

pub use argument::IntegerArgument;
pub use key_path::KeyPath;
pub use path_map::{PathMap, PathMapConfig, SetPolicy};
pub use sequence::{HumanOptions, Sequence, StringifyOptions};
pub use value::{parse_value, value_to_string, Render, ValueType};
