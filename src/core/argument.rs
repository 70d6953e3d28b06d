//! Integer-valued arguments for index and amount parameters
//!
//! `Sequence::get` and `Sequence::take` accept anything that may carry an
//! integer: native integers always succeed, while strings, floats and YAML
//! values are checked at run time and rejected with `InvalidArgument` unless
//! they already are integers. Numeric-looking strings are not coerced.

use crate::core::value::type_name;
use crate::error::{DotListError, Result};
use serde_yaml::Value;

/// An argument that must be an integer
pub trait IntegerArgument {
    /// Return the integer, or an `InvalidArgument` error naming `operation`
    fn to_integer(&self, operation: &str) -> Result<i64>;
}

macro_rules! integer_argument_lossless {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntegerArgument for $ty {
                fn to_integer(&self, _operation: &str) -> Result<i64> {
                    Ok(i64::from(*self))
                }
            }
        )*
    };
}

integer_argument_lossless!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! integer_argument_checked {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntegerArgument for $ty {
                fn to_integer(&self, operation: &str) -> Result<i64> {
                    i64::try_from(*self).map_err(|_| {
                        DotListError::invalid_argument(
                            operation,
                            format!("integer {} does not fit in i64", self),
                        )
                    })
                }
            }
        )*
    };
}

integer_argument_checked!(isize, usize, u64);

impl IntegerArgument for f64 {
    fn to_integer(&self, operation: &str) -> Result<i64> {
        Err(DotListError::invalid_argument(
            operation,
            format!("expected an integer, got float {}", self),
        ))
    }
}

impl IntegerArgument for f32 {
    fn to_integer(&self, operation: &str) -> Result<i64> {
        f64::from(*self).to_integer(operation)
    }
}

impl IntegerArgument for str {
    fn to_integer(&self, operation: &str) -> Result<i64> {
        Err(DotListError::invalid_argument(
            operation,
            format!("expected an integer, got string {:?}", self),
        ))
    }
}

impl IntegerArgument for String {
    fn to_integer(&self, operation: &str) -> Result<i64> {
        self.as_str().to_integer(operation)
    }
}

impl IntegerArgument for Value {
    fn to_integer(&self, operation: &str) -> Result<i64> {
        match self {
            Value::Number(n) => n.as_i64().ok_or_else(|| {
                DotListError::invalid_argument(
                    operation,
                    format!("expected an integer, got number {}", n),
                )
            }),
            other => Err(DotListError::invalid_argument(
                operation,
                format!("expected an integer, got {}", type_name(other)),
            )),
        }
    }
}

impl<T: IntegerArgument + ?Sized> IntegerArgument for &T {
    fn to_integer(&self, operation: &str) -> Result<i64> {
        (**self).to_integer(operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_integers() {
        assert_eq!(3_i32.to_integer("op").unwrap(), 3);
        assert_eq!((-2_i64).to_integer("op").unwrap(), -2);
        assert_eq!(5_usize.to_integer("op").unwrap(), 5);
        assert!(u64::MAX.to_integer("op").is_err());
    }

    #[test]
    fn test_strings_are_rejected() {
        let err = "x".to_integer("Sequence::get").unwrap_err();
        assert!(err.is_programmer_error());
        assert!(err.to_string().contains("Sequence::get"));

        // no coercion of numeric text
        assert!(String::from("3").to_integer("op").is_err());
    }

    #[test]
    fn test_floats_are_rejected() {
        assert!(1.0_f64.to_integer("op").is_err());
        assert!(2.5_f32.to_integer("op").is_err());
    }

    #[test]
    fn test_yaml_values() {
        assert_eq!(Value::from(4).to_integer("op").unwrap(), 4);
        assert!(Value::from(4.5).to_integer("op").is_err());
        assert!(Value::from("4").to_integer("op").is_err());
        assert!(Value::Null.to_integer("op").is_err());
    }
}
