use super::Val;
use crate::error;
use crate::lang::Error;
use std::collections::HashMap;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// Base kind of a variable, fixed by its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Numeric,
    String,
}

impl Kind {
    pub fn of_name(name: &str) -> Kind {
        if name.ends_with('$') {
            Kind::String
        } else {
            Kind::Numeric
        }
    }

    fn accepts(self, val: &Val) -> bool {
        match self {
            Kind::Numeric => val.is_numeric(),
            Kind::String => !val.is_numeric(),
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Kind::Numeric => write!(f, "NUMERIC"),
            Kind::String => write!(f, "STRING"),
        }
    }
}

/// Name, kind and dimension of a variable, without its values.
#[derive(Debug, Clone, PartialEq)]
pub struct Handle {
    pub name: String,
    pub kind: Kind,
    pub dim: usize,
}

/// ## A scalar or array variable
///
/// A scalar is an array of dimension one. Slots start unassigned.

#[derive(Debug, Clone)]
pub struct Variable {
    name: String,
    kind: Kind,
    slots: Vec<Option<Val>>,
}

impl Variable {
    fn new(name: &str, kind: Kind, dim: usize) -> Variable {
        Variable {
            name: name.to_string(),
            kind,
            slots: vec![None; dim],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn dim(&self) -> usize {
        self.slots.len()
    }

    pub fn handle(&self) -> Handle {
        Handle {
            name: self.name.clone(),
            kind: self.kind,
            dim: self.dim(),
        }
    }

    fn verify_index(&self, index: i64) -> Result<usize> {
        match usize::try_from(index) {
            Ok(i) if i < self.slots.len() => Ok(i),
            _ => Err(error!(SubscriptOutOfRange; format!(
                "{}({}) OUTSIDE 0..{}",
                self.name,
                index,
                self.slots.len()
            ))),
        }
    }

    fn verify_kind(&self, kind: Kind) -> Result<()> {
        if self.kind == kind {
            Ok(())
        } else {
            Err(error!(TypeMismatch; format!("{} IS NOT {}", self.name, kind)))
        }
    }

    pub fn read(&self, index: i64) -> Result<Val> {
        let i = self.verify_index(index)?;
        match &self.slots[i] {
            Some(val) => Ok(val.clone()),
            None => Err(error!(UnassignedVariable; self.name.clone())),
        }
    }

    pub fn write(&mut self, index: i64, val: Val) -> Result<()> {
        let i = self.verify_index(index)?;
        if !self.kind.accepts(&val) {
            return Err(error!(TypeMismatch; format!(
                "{} CAN'T HOLD A {}",
                self.name,
                val.kind()
            )));
        }
        self.slots[i] = Some(val);
        Ok(())
    }
}

/// ## Variable memory

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<String, Variable>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    fn verify_name(name: &str, kind: Kind) -> Result<()> {
        if Kind::of_name(name) == kind {
            Ok(())
        } else {
            Err(error!(TypeMismatch; format!("{} CAN'T BE {}", name, kind)))
        }
    }

    /// Creates or replaces `name` with `dim` unassigned slots.
    pub fn dim(&mut self, name: &str, dim: i64, kind: Option<Kind>) -> Result<()> {
        let kind = kind.unwrap_or_else(|| Kind::of_name(name));
        Var::verify_name(name, kind)?;
        let dim = match usize::try_from(dim) {
            Ok(dim) => dim,
            Err(_) => return Err(error!(IllegalFunctionCall; format!("DIM {}({})", name, dim))),
        };
        if self.vars.len() > u16::max_value() as usize {
            return Err(error!(OutOfMemory));
        }
        self.vars
            .insert(name.to_string(), Variable::new(name, kind, dim));
        Ok(())
    }

    pub fn access_var(&self, name: &str) -> Result<&Variable> {
        match self.vars.get(name) {
            Some(var) => Ok(var),
            None => Err(error!(UndefinedVariable; name.to_string())),
        }
    }

    /// Scalars spring into existence on first write unless `must_exist`.
    pub fn write_var(&mut self, name: &str, kind: Kind, must_exist: bool) -> Result<&mut Variable> {
        if !self.vars.contains_key(name) {
            if must_exist {
                return Err(error!(UndefinedVariable; name.to_string()));
            }
            self.dim(name, 1, Some(kind))?;
        }
        match self.vars.get_mut(name) {
            Some(var) => {
                var.verify_kind(kind)?;
                Ok(var)
            }
            None => Err(error!(InternalError; "VARIABLE VANISHED")),
        }
    }

    pub fn get_dim(&self, name: &str) -> Result<usize> {
        Ok(self.access_var(name)?.dim())
    }

    pub fn handle(&self, name: &str) -> Result<Handle> {
        Ok(self.access_var(name)?.handle())
    }

    pub fn read_var(&self, name: &str, index: i64) -> Result<Val> {
        self.access_var(name)?.read(index)
    }

    pub fn read_num(&self, name: &str, index: i64) -> Result<Val> {
        let var = self.access_var(name)?;
        var.verify_kind(Kind::Numeric)?;
        var.read(index)
    }

    pub fn read_str(&self, name: &str, index: i64) -> Result<String> {
        let var = self.access_var(name)?;
        var.verify_kind(Kind::String)?;
        String::try_from(var.read(index)?)
    }

    pub fn write_num(&mut self, name: &str, index: i64, val: Val) -> Result<()> {
        self.write_var(name, Kind::Numeric, index != 0)?
            .write(index, val)
    }

    pub fn write_str(&mut self, name: &str, index: i64, s: String) -> Result<()> {
        self.write_var(name, Kind::String, index != 0)?
            .write(index, Val::String(s))
    }

    /// Replaces `name` with an array holding `values`.
    pub fn write_str_array(&mut self, name: &str, values: Vec<String>) -> Result<()> {
        self.dim(name, values.len() as i64, Some(Kind::String))?;
        for (i, s) in values.into_iter().enumerate() {
            self.write_str(name, i as i64, s)?;
        }
        Ok(())
    }
}
