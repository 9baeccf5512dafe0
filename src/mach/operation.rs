use super::Val;
use crate::error;
use crate::lang::Error;
use std::cmp::Ordering;

type Result<T> = std::result::Result<T, Error>;

/// ## Operators
///
/// Every coercion rule of the language lives here. Mixed Integer and Float
/// operands promote to Float. Integer arithmetic is checked.

pub struct Operation {}

impl Operation {
    pub fn negate(val: Val) -> Result<Val> {
        use Val::*;
        match val {
            Integer(n) => match n.checked_neg() {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(Overflow)),
            },
            Float(n) => Ok(Float(-n)),
            String(_) => Err(error!(TypeMismatch)),
        }
    }

    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (String(l), String(r)) => Ok(String(l + &r)),
            (Integer(l), Integer(r)) => match l.checked_add(r) {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(Overflow)),
            },
            (Integer(l), Float(r)) => Ok(Float(l as f64 + r)),
            (Float(l), Integer(r)) => Ok(Float(l + r as f64)),
            (Float(l), Float(r)) => Ok(Float(l + r)),
            _ => Err(error!(TypeMismatch)),
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_sub(r) {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(Overflow)),
            },
            (Integer(l), Float(r)) => Ok(Float(l as f64 - r)),
            (Float(l), Integer(r)) => Ok(Float(l - r as f64)),
            (Float(l), Float(r)) => Ok(Float(l - r)),
            _ => Err(error!(TypeMismatch)),
        }
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_mul(r) {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(Overflow)),
            },
            (Integer(l), Float(r)) => Ok(Float(l as f64 * r)),
            (Float(l), Integer(r)) => Ok(Float(l * r as f64)),
            (Float(l), Float(r)) => Ok(Float(l * r)),
            _ => Err(error!(TypeMismatch)),
        }
    }

    /// `/` floors when both operands are Integer.
    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => Ok(Integer(Operation::floor_div(l, r)?)),
            (l, r) => {
                let (l, r) = Operation::floats(l, r)?;
                if r == 0.0 {
                    return Err(error!(DivisionByZero));
                }
                Ok(Float(l / r))
            }
        }
    }

    /// `DIV` always floors.
    pub fn divide_int(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => Ok(Integer(Operation::floor_div(l, r)?)),
            (l, r) => {
                let (l, r) = Operation::floats(l, r)?;
                if r == 0.0 {
                    return Err(error!(DivisionByZero));
                }
                Ok(Float((l / r).floor()))
            }
        }
    }

    /// `MOD` takes the sign of the divisor.
    pub fn modulus(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => {
                if r == 0 {
                    return Err(error!(DivisionByZero));
                }
                match l.checked_rem_euclid(r) {
                    Some(m) if m != 0 && r < 0 => Ok(Integer(m + r)),
                    Some(m) => Ok(Integer(m)),
                    None => Err(error!(Overflow)),
                }
            }
            (l, r) => {
                let (l, r) = Operation::floats(l, r)?;
                if r == 0.0 {
                    return Err(error!(DivisionByZero));
                }
                Ok(Float(l - r * (l / r).floor()))
            }
        }
    }

    fn floor_div(l: i64, r: i64) -> Result<i64> {
        if r == 0 {
            return Err(error!(DivisionByZero));
        }
        match l.checked_div(r) {
            Some(q) if (l % r != 0) && ((l < 0) != (r < 0)) => Ok(q - 1),
            Some(q) => Ok(q),
            None => Err(error!(Overflow)),
        }
    }

    fn floats(lhs: Val, rhs: Val) -> Result<(f64, f64)> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => Ok((l as f64, r as f64)),
            (Integer(l), Float(r)) => Ok((l as f64, r)),
            (Float(l), Integer(r)) => Ok((l, r as f64)),
            (Float(l), Float(r)) => Ok((l, r)),
            _ => Err(error!(TypeMismatch)),
        }
    }

    /// `None` when a string meets a number.
    fn compare(lhs: &Val, rhs: &Val) -> Option<Ordering> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => Some(l.cmp(r)),
            (Integer(l), Float(r)) => (*l as f64).partial_cmp(r),
            (Float(l), Integer(r)) => l.partial_cmp(&(*r as f64)),
            (Float(l), Float(r)) => l.partial_cmp(r),
            (String(l), String(r)) => Some(l.cmp(r)),
            _ => None,
        }
    }

    fn ordering(lhs: Val, rhs: Val) -> Result<Ordering> {
        match Operation::compare(&lhs, &rhs) {
            Some(ordering) => Ok(ordering),
            None => Err(error!(TypeMismatch; "CAN'T COMPARE STRING WITH NUMBER")),
        }
    }

    pub fn equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from_bool(
            Operation::compare(&lhs, &rhs) == Some(Ordering::Equal),
        ))
    }

    pub fn not_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from_bool(
            Operation::compare(&lhs, &rhs) != Some(Ordering::Equal),
        ))
    }

    pub fn less(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from_bool(
            Operation::ordering(lhs, rhs)? == Ordering::Less,
        ))
    }

    pub fn less_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from_bool(
            Operation::ordering(lhs, rhs)? != Ordering::Greater,
        ))
    }

    pub fn greater(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from_bool(
            Operation::ordering(lhs, rhs)? == Ordering::Greater,
        ))
    }

    pub fn greater_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from_bool(
            Operation::ordering(lhs, rhs)? != Ordering::Less,
        ))
    }

    pub fn not(val: Val) -> Result<Val> {
        Ok(Val::from_bool(!val.is_truthy()?))
    }

    pub fn and(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from_bool(lhs.is_truthy()? && rhs.is_truthy()?))
    }

    pub fn or(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from_bool(lhs.is_truthy()? || rhs.is_truthy()?))
    }

    pub fn xor(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from_bool(lhs.is_truthy()? != rhs.is_truthy()?))
    }
}
