use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// ## Runtime value
///
/// There is no boolean kind. Comparisons and boolean operators produce
/// `Integer(1)` or `Integer(0)`.

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Integer(i64),
    Float(f64),
    String(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValKind {
    Integer,
    Float,
    String,
}

impl std::fmt::Display for ValKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ValKind::Integer => write!(f, "INTEGER"),
            ValKind::Float => write!(f, "FLOAT"),
            ValKind::String => write!(f, "STRING"),
        }
    }
}

impl Val {
    pub fn kind(&self) -> ValKind {
        match self {
            Val::Integer(_) => ValKind::Integer,
            Val::Float(_) => ValKind::Float,
            Val::String(_) => ValKind::String,
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, Val::String(_))
    }

    pub fn is_truthy(&self) -> Result<bool> {
        match self {
            Val::Integer(n) => Ok(*n != 0),
            Val::Float(n) => Ok(*n != 0.0),
            Val::String(_) => Err(error!(TypeMismatch; "NUMERIC CONDITION EXPECTED")),
        }
    }

    pub fn from_bool(b: bool) -> Val {
        Val::Integer(if b { 1 } else { 0 })
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Integer(n) => write!(f, "{}", n),
            Val::Float(n) => write!(f, "{:?}", n),
            Val::String(s) => write!(f, "{}", s),
        }
    }
}

impl TryFrom<Val> for i64 {
    type Error = Error;
    fn try_from(value: Val) -> Result<i64> {
        match value {
            Val::Integer(n) => Ok(n),
            Val::Float(_) | Val::String(_) => {
                Err(error!(TypeMismatch; format!("INTEGER EXPECTED, {} FOUND", value.kind())))
            }
        }
    }
}

impl TryFrom<Val> for f64 {
    type Error = Error;
    fn try_from(value: Val) -> Result<f64> {
        match value {
            Val::Integer(n) => Ok(n as f64),
            Val::Float(n) => Ok(n),
            Val::String(_) => Err(error!(TypeMismatch; "NUMBER EXPECTED, STRING FOUND")),
        }
    }
}

impl TryFrom<Val> for String {
    type Error = Error;
    fn try_from(value: Val) -> Result<String> {
        match value {
            Val::String(s) => Ok(s),
            _ => Err(error!(TypeMismatch; format!("STRING EXPECTED, {} FOUND", value.kind()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Val::Integer(-12).to_string(), "-12");
        assert_eq!(Val::Float(3.0).to_string(), "3.0");
        assert_eq!(Val::Float(0.5).to_string(), "0.5");
        assert_eq!(Val::String("HI".into()).to_string(), "HI");
    }

    #[test]
    fn test_truth() {
        assert!(Val::Integer(-1).is_truthy().unwrap());
        assert!(!Val::Float(0.0).is_truthy().unwrap());
        assert!(Val::String("1".into()).is_truthy().is_err());
    }

    #[test]
    fn test_conversions() {
        assert_eq!(i64::try_from(Val::Integer(7)).unwrap(), 7);
        assert!(i64::try_from(Val::Float(7.0)).is_err());
        assert_eq!(f64::try_from(Val::Integer(7)).unwrap(), 7.0);
        assert!(String::try_from(Val::Integer(7)).is_err());
    }
}
