//! dotlist: dotted-path access to nested mappings and chainable list formatting
//!
//! The library has two independent pieces:
//!
//! - [`PathMap`] owns a nested YAML mapping and reads or writes single values
//!   through dotted paths such as `"author.contact.email"`.
//! - [`Sequence`] wraps an ordered list and offers in-place transforms
//!   (`prefix`, `suffix`, `surround`, `walk`), pure transforms (`map`,
//!   `filter`, `take`) and formatting (`stringify`, `human`).
//!
//! Neither performs I/O. Missing data is reported with `None` or a default,
//! and only badly shaped arguments produce an [`DotListError::InvalidArgument`].
//!
//! # Quick Start
//!
//! ## Reading and writing paths
//!
//! ```rust
//! use dotlist::{PathMap, Result};
//! use serde_yaml::Value;
//!
//! fn main() -> Result<()> {
//!     let mut map = PathMap::from_yaml_str("author:\n  name: Jane\n")?;
//!
//!     assert_eq!(map.get("author.name"), Some(&Value::from("Jane")));
//!     assert_eq!(map.get("author.email"), None);
//!
//!     map.set("author.contact.email", "jane@example.com")?;
//!     assert!(map.has("author.contact.email"));
//!
//!     let fallback = Value::from("unknown");
//!     assert_eq!(map.get_or("publisher.name", &fallback), &fallback);
//!     Ok(())
//! }
//! ```
//!
//! ## Formatting lists
//!
//! ```rust
//! use dotlist::{Result, Sequence};
//!
//! fn main() -> Result<()> {
//!     let tags = Sequence::new(vec!["rust", "yaml", "cli"])
//!         .map(|tag| tag.to_uppercase())
//!         .take(-1)?;
//!
//!     assert_eq!(tags.human(" and").as_deref(), Some("RUST and YAML"));
//!     assert_eq!(tags.stringify(" ", "#", "").as_deref(), Some("#RUST #YAML"));
//!     Ok(())
//! }
//! ```

// Public API exports
pub use config::Config;
pub use error::{DotListError, ErrorSeverity, Result};

// Core types
pub use core::{
    parse_value, value_to_string, HumanOptions, IntegerArgument, KeyPath, PathMap, PathMapConfig,
    Render, Sequence, SetPolicy, StringifyOptions, ValueType,
};

pub mod config;
pub mod core;
pub mod error;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;

    #[test]
    fn test_path_values_into_sequence() {
        let map = PathMap::from_yaml_str("tags: [rust, yaml, cli]\n").unwrap();
        let tags: Sequence<Value> = map
            .get("tags")
            .and_then(Value::as_sequence)
            .cloned()
            .map(Sequence::new)
            .unwrap_or_default();

        assert_eq!(tags.human(" and").as_deref(), Some("rust, yaml and cli"));
    }

    #[test]
    fn test_config_drives_both_types() {
        let config = Config::from_yaml_str(
            "path_map:\n  set_policy: strict\nstringify:\n  delimiter: \"/\"\n",
        )
        .unwrap();

        let mut map = PathMap::from_yaml_str("a: 1\n")
            .unwrap()
            .with_config(config.path_map.clone());
        assert!(matches!(
            map.set("a.b", 2),
            Err(DotListError::PathConflict { .. })
        ));

        let seq = Sequence::new(vec![1, 2, 3]);
        assert_eq!(seq.stringify_with(&config.stringify).as_deref(), Some("1/2/3"));
    }
}
