#[macro_use]
extern crate failure_derive;

mod arithmetic;
mod builtins;
pub mod env;
pub mod errors;
pub mod eval;
pub mod expr;
mod file;
pub mod log;
pub mod parser;
pub mod transform;
pub mod values;

use failure::Error;

use crate::env::*;
use crate::expr::Expr;
use crate::values::Value;

pub use crate::builtins::global_env;

#[derive(Clone)]
pub struct Interpreter {
    pub global: EnvRef,
}

impl Default for Interpreter {
    fn default() -> Interpreter {
        Interpreter::new()
    }
}

impl Interpreter {
    /// create a new Interpreter with a freshly seeded global environment
    pub fn new() -> Interpreter {
        Interpreter::with_env(global_env())
    }

    /// create an Interpreter around an existing global environment
    pub fn with_env(global: EnvRef) -> Interpreter {
        Interpreter { global }
    }

    /// evaluate an expression against the global environment
    pub fn eval(&self, exp: &Expr) -> Result<Value, Error> {
        self.eval_in(exp, self.global.clone())
    }

    /// evaluate an expression against any environment
    pub fn eval_in(&self, exp: &Expr, env: EnvRef) -> Result<Value, Error> {
        eval::eval(exp, env)
    }

    /// evaluate an expression as an implicit block of the global scope, so
    /// a top-level `begin` defines straight into the global frame
    pub fn eval_global(&self, exp: &Expr) -> Result<Value, Error> {
        log::debug(exp);
        eval::eval_body(exp, self.global.clone())
    }

    /// evaluate a string as eva code, returning the last form's value
    pub fn run<S: AsRef<str>>(&self, code: S) -> Result<Value, Error> {
        let program = parser::parse(code.as_ref())?;

        let mut result = Value::Unit;
        for exp in &program {
            result = self.eval_global(exp)?;
        }
        Ok(result)
    }
}

// }}}
