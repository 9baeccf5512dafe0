use super::{Handle, Val, ValKind};
use crate::error;
use crate::lang::token;
use crate::lang::Error;
use rand::Rng;
use std::convert::TryFrom;
use std::ops::RangeInclusive;

type Result<T> = std::result::Result<T, Error>;

/// What the parser must read for one argument position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Arg {
    Any,
    String,
    Int,
    /// A bare variable name, passed without evaluating it.
    Handle,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    Val(Val),
    Handle(Handle),
}

pub struct Signature {
    pub returns: ValKind,
    pub arity: RangeInclusive<usize>,
    pub args: &'static [Arg],
    eval: fn(Vec<Argument>) -> Result<Val>,
}

impl Signature {
    /// Kind expected at argument position `index`.
    pub fn arg(&self, index: usize) -> Option<Arg> {
        self.args.get(index).copied()
    }
}

pub struct Function {}

impl Function {
    pub fn signature(func: token::Function) -> Signature {
        use token::Function::*;
        match func {
            Str => Signature {
                returns: ValKind::String,
                arity: 1..=1,
                args: &[Arg::Any],
                eval: Function::str,
            },
            Int => Signature {
                returns: ValKind::Integer,
                arity: 1..=1,
                args: &[Arg::Any],
                eval: Function::int,
            },
            Num => Signature {
                returns: ValKind::Float,
                arity: 1..=1,
                args: &[Arg::Any],
                eval: Function::num,
            },
            Len => Signature {
                returns: ValKind::Integer,
                arity: 1..=1,
                args: &[Arg::String],
                eval: Function::len,
            },
            Alen => Signature {
                returns: ValKind::Integer,
                arity: 1..=1,
                args: &[Arg::Handle],
                eval: Function::alen,
            },
            Mid => Signature {
                returns: ValKind::String,
                arity: 2..=3,
                args: &[Arg::String, Arg::Int, Arg::Int],
                eval: Function::mid,
            },
            Rnd => Signature {
                returns: ValKind::Integer,
                arity: 1..=2,
                args: &[Arg::Int, Arg::Int],
                eval: Function::rnd,
            },
        }
    }

    pub fn call(func: token::Function, args: Vec<Argument>) -> Result<Val> {
        let signature = Function::signature(func);
        if args.len() < *signature.arity.start() {
            return Err(error!(IllegalFunctionCall; format!("TOO FEW ARGUMENTS FOR {}", func)));
        }
        if args.len() > *signature.arity.end() {
            return Err(error!(IllegalFunctionCall; format!("TOO MANY ARGUMENTS FOR {}", func)));
        }
        let val = (signature.eval)(args)?;
        debug_assert_eq!(val.kind(), signature.returns);
        Ok(val)
    }

    fn val(args: &[Argument], index: usize) -> Result<Val> {
        match args.get(index) {
            Some(Argument::Val(val)) => Ok(val.clone()),
            _ => Err(error!(InternalError; "ARGUMENT EXPECTED")),
        }
    }

    fn int_arg(args: &[Argument], index: usize) -> Result<i64> {
        i64::try_from(Function::val(args, index)?)
    }

    fn str(args: Vec<Argument>) -> Result<Val> {
        Ok(Val::String(Function::val(&args, 0)?.to_string()))
    }

    fn int(args: Vec<Argument>) -> Result<Val> {
        match Function::val(&args, 0)? {
            Val::Integer(n) => Ok(Val::Integer(n)),
            Val::Float(n) => {
                let n = n.trunc();
                if n.is_nan() || n < i64::min_value() as f64 || n >= i64::max_value() as f64 {
                    Err(error!(Overflow))
                } else {
                    Ok(Val::Integer(n as i64))
                }
            }
            Val::String(s) => match s.trim().parse::<i64>() {
                Ok(n) => Ok(Val::Integer(n)),
                Err(_) => Err(error!(TypeMismatch; format!("\"{}\" IS NOT AN INTEGER", s))),
            },
        }
    }

    fn num(args: Vec<Argument>) -> Result<Val> {
        match Function::val(&args, 0)? {
            Val::Integer(n) => Ok(Val::Float(n as f64)),
            Val::Float(n) => Ok(Val::Float(n)),
            Val::String(s) => match s.trim().parse::<f64>() {
                Ok(n) => Ok(Val::Float(n)),
                Err(_) => Err(error!(TypeMismatch; format!("\"{}\" IS NOT A NUMBER", s))),
            },
        }
    }

    fn len(args: Vec<Argument>) -> Result<Val> {
        let s = String::try_from(Function::val(&args, 0)?)?;
        Ok(Val::Integer(s.chars().count() as i64))
    }

    fn alen(args: Vec<Argument>) -> Result<Val> {
        match args.first() {
            Some(Argument::Handle(handle)) => Ok(Val::Integer(handle.dim as i64)),
            _ => Err(error!(InternalError; "VARIABLE EXPECTED")),
        }
    }

    /// Zero-based. With a length the slice is clamped to the string,
    /// without one the single character at `from` is returned.
    fn mid(args: Vec<Argument>) -> Result<Val> {
        let chars: Vec<char> = String::try_from(Function::val(&args, 0)?)?
            .chars()
            .collect();
        let from = Function::int_arg(&args, 1)?;
        let from = match usize::try_from(from) {
            Ok(from) => from,
            Err(_) => return Err(error!(IllegalFunctionCall; "NEGATIVE INDEX IN MID$")),
        };
        if args.len() < 3 {
            return match chars.get(from) {
                Some(ch) => Ok(Val::String(ch.to_string())),
                None => Err(error!(IllegalFunctionCall; "INDEX OUT OF RANGE IN MID$")),
            };
        }
        let len = match usize::try_from(Function::int_arg(&args, 2)?) {
            Ok(len) => len,
            Err(_) => return Err(error!(IllegalFunctionCall; "NEGATIVE LENGTH IN MID$")),
        };
        let from = from.min(chars.len());
        let to = from.saturating_add(len).min(chars.len());
        Ok(Val::String(chars[from..to].iter().collect()))
    }

    fn rnd(args: Vec<Argument>) -> Result<Val> {
        let (lo, hi) = if args.len() == 2 {
            (Function::int_arg(&args, 0)?, Function::int_arg(&args, 1)?)
        } else {
            (0, Function::int_arg(&args, 0)?)
        };
        if lo >= hi {
            return Err(error!(IllegalFunctionCall; format!("EMPTY RANGE {}..{}", lo, hi)));
        }
        Ok(Val::Integer(rand::thread_rng().gen_range(lo..hi)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::token::Function::*;

    fn vals(v: Vec<Val>) -> Vec<Argument> {
        v.into_iter().map(Argument::Val).collect()
    }

    #[test]
    fn test_mid() {
        let s = || Val::String("HELLO".into());
        assert_eq!(
            Function::call(Mid, vals(vec![s(), Val::Integer(1), Val::Integer(3)])).unwrap(),
            Val::String("ELL".into())
        );
        assert_eq!(
            Function::call(Mid, vals(vec![s(), Val::Integer(3), Val::Integer(99)])).unwrap(),
            Val::String("LO".into())
        );
        assert_eq!(
            Function::call(Mid, vals(vec![s(), Val::Integer(4)])).unwrap(),
            Val::String("O".into())
        );
        assert!(Function::call(Mid, vals(vec![s(), Val::Integer(5)])).is_err());
        assert!(Function::call(Mid, vals(vec![s(), Val::Integer(-1), Val::Integer(1)])).is_err());
    }

    #[test]
    fn test_arity() {
        let e = Function::call(Len, vec![]).unwrap_err();
        assert_eq!(e.code(), 5);
        let e = Function::call(Rnd, vals(vec![Val::Integer(1); 3])).unwrap_err();
        assert_eq!(e.code(), 5);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(
            Function::call(Int, vals(vec![Val::Float(-2.7)])).unwrap(),
            Val::Integer(-2)
        );
        assert_eq!(
            Function::call(Int, vals(vec![Val::String(" 42 ".into())])).unwrap(),
            Val::Integer(42)
        );
        assert_eq!(
            Function::call(Num, vals(vec![Val::String("1.5".into())])).unwrap(),
            Val::Float(1.5)
        );
        assert_eq!(
            Function::call(Str, vals(vec![Val::Float(2.0)])).unwrap(),
            Val::String("2.0".into())
        );
    }

    #[test]
    fn test_rnd_range() {
        for _ in 0..100 {
            let v = Function::call(Rnd, vals(vec![Val::Integer(5), Val::Integer(8)])).unwrap();
            match v {
                Val::Integer(n) => assert!((5..8).contains(&n)),
                _ => panic!(),
            }
        }
        let e = Function::call(Rnd, vals(vec![Val::Integer(0)])).unwrap_err();
        assert_eq!(e.code(), 5);
    }

    #[test]
    fn test_alen() {
        let handle = Handle {
            name: "A".into(),
            kind: crate::mach::Kind::Numeric,
            dim: 7,
        };
        assert_eq!(
            Function::call(Alen, vec![Argument::Handle(handle)]).unwrap(),
            Val::Integer(7)
        );
    }
}
