use failure::Error;
use itertools::join;
use std::fmt;
use std::rc::Rc;

use crate::env::*;
use crate::errors::*;
use crate::eval;
use crate::expr::Expr;

/// representation of eva's runtime data types
#[derive(Debug, Clone)]
pub enum Value {
    Number(f64),
    Str(String),
    Bool(bool),
    Null,
    Native(NativeProc),
    Proc(Rc<LispProc>),
    /// a class or an instance; both are plain environments
    Object(EnvRef),
    Unit,
}

use self::Value::*;

impl Value {
    /// represent a `Value` as a human-friendly string
    pub fn to_string(&self) -> String {
        match self {
            Number(n)   => n.to_string(),
            Str(s)      => s.to_owned(),
            Bool(true)  => "true".to_owned(),
            Bool(false) => "false".to_owned(),
            Null        => "null".to_owned(),
            Unit        => "<unit>".to_owned(),
            Native(f)   => format!("<native {}>", f.name),
            Proc(proc)  => format!(
                "(lambda ({}) {})",
                join(proc.params.iter(), " "),
                proc.body
            ),
            Object(env) => format!("<env {}>", join(env.borrow().names(), ", ")),
        }
    }

    /// make a bool out of a value. null, unit, empty strings, 0 and NaN are falsy.
    pub fn to_bool(&self) -> bool {
        match self {
            Bool(x)   => *x,
            Null      => false,
            Unit      => false,
            Number(x) => *x != 0f64 && !x.is_nan(),
            Str(s)    => !s.is_empty(),
            _         => true,
        }
    }

    /// get the human-friendly type of a `Value`
    pub fn get_type(&self) -> String {
        match self {
            Number(_) => "Number",
            Str(_)    => "Str",
            Bool(_)   => "Bool",
            Null      => "Null",
            Native(_) => "Native",
            Proc(_)   => "Proc",
            Object(_) => "Object",
            Unit      => "Unit",
        }.to_owned()
    }

    /// the environment behind a class or instance handle
    pub fn into_env(self, name: &str) -> Result<EnvRef, RunError> {
        match self {
            Object(env) => Ok(env),
            other => Err(RunError::TypeError {
                name: name.to_owned(),
                expected: "Object".to_owned(),
                got: other.get_type(),
            }),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Bool(a), Bool(b)) => a == b,
            (Number(a), Number(b)) => a == b,
            (Str(a), Str(b)) => a == b,
            (Null, Null) => true,
            (Unit, Unit) => true,
            (Native(a), Native(b)) => a.name == b.name,
            // functions and environments compare by identity
            (Proc(a), Proc(b)) => Rc::ptr_eq(a, b),
            (Object(a), Object(b)) => Rc::ptr_eq(a, b),
            _ => false, // values of different types are not equivalent
        }
    }
}

/// a function provided by the host, seeded into the global environment
#[derive(Clone, Copy)]
pub struct NativeProc {
    pub name: &'static str,
    pub func: fn(Vec<Value>) -> Result<Value, Error>,
}

impl NativeProc {
    pub fn call(&self, args: Vec<Value>) -> Result<Value, Error> {
        (self.func)(args)
    }
}

impl fmt::Debug for NativeProc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "NativeProc({})", self.name)
    }
}

/// an eva closure, represented as a list of named, typeless paramaters,
/// a yet un-evaluated body, and the EnvRef it was created in
#[derive(Debug, Clone)]
pub struct LispProc {
    pub params: Vec<String>,
    pub body: Expr,
    pub env: EnvRef,
}

impl LispProc {
    /// run a LispProc with some already evaluated arguments
    pub fn call(&self, name: &str, args: Vec<Value>) -> Result<Value, Error> {
        if args.len() != self.params.len() {
            Err(RunError::WrongNumArgs {
                name: name.to_owned(),
                expected: self.params.len(),
                got: args.len(),
            })?
        }

        let mut activation = Env::new(Some(self.env.clone()));
        for (param, arg) in self.params.iter().zip(args) {
            activation.define(param, arg);
        }

        eval::eval_body(&self.body, activation.into_ref())
    }
}

// }}}
