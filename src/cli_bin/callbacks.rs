//! Named callbacks for `dotlist list`
//!
//! The library takes closures, so callability is checked by the compiler.
//! On the command line callbacks are chosen by name, and an unknown name is
//! the one place where "not callable" surfaces as `InvalidArgument`.

use dotlist::{DotListError, Result};

/// Item transforms available to `--map`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedMap {
    Upper,
    Lower,
    Trim,
    Reverse,
    Len,
}

impl NamedMap {
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "upper" => Ok(Self::Upper),
            "lower" => Ok(Self::Lower),
            "trim" => Ok(Self::Trim),
            "reverse" => Ok(Self::Reverse),
            "len" => Ok(Self::Len),
            other => Err(DotListError::invalid_argument(
                "Sequence::map",
                format!("'{}' is not callable", other),
            )),
        }
    }

    pub fn apply(self, item: &str) -> String {
        match self {
            Self::Upper => item.to_uppercase(),
            Self::Lower => item.to_lowercase(),
            Self::Trim => item.trim().to_string(),
            Self::Reverse => item.chars().rev().collect(),
            Self::Len => item.chars().count().to_string(),
        }
    }
}

/// Item tests available to `--filter`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedFilter {
    NonEmpty,
    Numeric,
    Alpha,
}

impl NamedFilter {
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "nonempty" => Ok(Self::NonEmpty),
            "numeric" => Ok(Self::Numeric),
            "alpha" => Ok(Self::Alpha),
            other => Err(DotListError::invalid_argument(
                "Sequence::filter",
                format!("'{}' is not callable", other),
            )),
        }
    }

    pub fn accepts(self, item: &str) -> bool {
        match self {
            Self::NonEmpty => !item.trim().is_empty(),
            Self::Numeric => item.trim().parse::<f64>().is_ok(),
            Self::Alpha => !item.is_empty() && item.chars().all(char::is_alphabetic),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps() {
        assert_eq!(NamedMap::from_name("upper").unwrap().apply("ab"), "AB");
        assert_eq!(NamedMap::from_name("reverse").unwrap().apply("abc"), "cba");
        assert_eq!(NamedMap::from_name("len").unwrap().apply("héllo"), "5");
        assert_eq!(NamedMap::from_name("trim").unwrap().apply("  x "), "x");
    }

    #[test]
    fn test_filters() {
        assert!(NamedFilter::from_name("numeric").unwrap().accepts("4.5"));
        assert!(!NamedFilter::from_name("numeric").unwrap().accepts("four"));
        assert!(!NamedFilter::from_name("nonempty").unwrap().accepts("  "));
        assert!(NamedFilter::from_name("alpha").unwrap().accepts("abc"));
        assert!(!NamedFilter::from_name("alpha").unwrap().accepts(""));
    }

    #[test]
    fn test_unknown_names_are_not_callable() {
        let err = NamedMap::from_name("shout").unwrap_err();
        assert!(err.is_programmer_error());
        assert!(err.to_string().contains("not callable"));
        assert!(NamedFilter::from_name("odd").unwrap_err().is_programmer_error());
    }
}
