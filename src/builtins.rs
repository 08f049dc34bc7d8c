use failure::Error;

use crate::env::*;
use crate::errors::RunError;
use crate::values::NativeProc;
use crate::values::Value::{self, *};

pub const VERSION: &str = "0.1";

pub const BUILTINS: &[(&str, fn(Vec<Value>) -> Result<Value, Error>)] = &[
    ("+",       add),
    ("-",       sub),
    ("*",       mul),
    ("/",       div),
    (">",       gt),
    (">=",      geq),
    ("<",       lt),
    ("<=",      leq),
    ("=",       eq),
    ("print",   print),
];

/// build a fresh global environment: the constants plus every builtin
pub fn global_env() -> EnvRef {
    let mut env = Env::new(None);

    env.define("null", Null);
    env.define("true", Bool(true));
    env.define("false", Bool(false));
    env.define("VERSION", Str(VERSION.to_owned()));

    for &(name, func) in BUILTINS {
        env.define(name, Native(NativeProc { name, func }));
    }

    env.into_ref()
}

// {{{ helpful macros
/// return from a function if the Vec $args doesn't contain $num elements
#[macro_export]
macro_rules! check_num_args {
    ($args: ident, $num: expr, $name: expr) => {{
        if $args.len() != $num {
            Err(RunError::WrongNumArgs {
                name: $name.to_string(),
                expected: $num,
                got: $args.len(),
            })
        } else {
            Ok(())
        }
    }}
}
// }}}

// {{{ math
/// apply a binary operator to exactly two values
fn binary<F>(op: &str, args: Vec<Value>, f: F) -> Result<Value, Error>
    where F: FnOnce(&Value, &Value) -> Result<Value, RunError>
{
    check_num_args!(args, 2, op)?;
    Ok(f(&args[0], &args[1])?)
}

/// usage: (+ <num> <num>)
///        (+ <str> <str>)
pub fn add(args: Vec<Value>) -> Result<Value, Error> {
    binary("+", args, |a, b| a + b)
}

/// usage: (- <num> <num>)
///        (- <num>)
pub fn sub(args: Vec<Value>) -> Result<Value, Error> {
    if args.len() == 1 {
        Ok((-&args[0])?)
    } else {
        binary("-", args, |a, b| a - b)
    }
}

/// usage: (* <num> <num>)
pub fn mul(args: Vec<Value>) -> Result<Value, Error> {
    binary("*", args, |a, b| a * b)
}

/// usage: (/ <num> <num>)
pub fn div(args: Vec<Value>) -> Result<Value, Error> {
    binary("/", args, |a, b| a / b)
}
// }}}

// {{{ logic
/// usage: (> <num> <num>), and likewise for >=, < and <=
pub fn gt(args: Vec<Value>) -> Result<Value, Error> {
    binary(">", args, |a, b| a.compare(">", b, |a, b| a > b))
}

pub fn geq(args: Vec<Value>) -> Result<Value, Error> {
    binary(">=", args, |a, b| a.compare(">=", b, |a, b| a >= b))
}

pub fn lt(args: Vec<Value>) -> Result<Value, Error> {
    binary("<", args, |a, b| a.compare("<", b, |a, b| a < b))
}

pub fn leq(args: Vec<Value>) -> Result<Value, Error> {
    binary("<=", args, |a, b| a.compare("<=", b, |a, b| a <= b))
}

/// strict equality on any two values
/// usage: (= <expr> <expr>)
pub fn eq(args: Vec<Value>) -> Result<Value, Error> {
    binary("=", args, |a, b| Ok(Bool(a == b)))
}
// }}}

/// write values to stdout, separated by spaces
/// usage: (print <value> <value> ...)
pub fn print(args: Vec<Value>) -> Result<Value, Error> {
    println!("{}", itertools::join(&args, " "));
    Ok(Unit)
}

// {{{ tests
#[cfg(test)]
mod tests {
    use super::*;

    fn call(name: &str, args: Vec<Value>) -> Result<Value, Error> {
        match global_env().borrow().lookup(name)? {
            Native(native) => native.call(args),
            other => panic!("{} is not native: {:?}", name, other),
        }
    }

    #[test]
    fn constants_are_seeded() {
        let env = global_env();
        let env = env.borrow();
        assert_eq!(env.lookup("null").unwrap(), Null);
        assert_eq!(env.lookup("true").unwrap(), Bool(true));
        assert_eq!(env.lookup("false").unwrap(), Bool(false));
        assert_eq!(env.lookup("VERSION").unwrap(), Str("0.1".to_owned()));
        assert!(env.parent().is_none());
    }

    #[test]
    fn arithmetic_builtins() {
        assert_eq!(call("+", vec![Number(1.0), Number(2.0)]).unwrap(), Number(3.0));
        assert_eq!(call("-", vec![Number(1.0), Number(2.0)]).unwrap(), Number(-1.0));
        assert_eq!(call("-", vec![Number(4.0)]).unwrap(), Number(-4.0));
        assert_eq!(call("*", vec![Number(4.0), Number(2.5)]).unwrap(), Number(10.0));
        assert_eq!(call("/", vec![Number(9.0), Number(2.0)]).unwrap(), Number(4.5));
    }

    #[test]
    fn comparison_builtins() {
        assert_eq!(call(">", vec![Number(3.0), Number(2.0)]).unwrap(), Bool(true));
        assert_eq!(call(">=", vec![Number(2.0), Number(2.0)]).unwrap(), Bool(true));
        assert_eq!(call("<", vec![Number(3.0), Number(2.0)]).unwrap(), Bool(false));
        assert_eq!(call("<=", vec![Number(3.0), Number(2.0)]).unwrap(), Bool(false));
        assert_eq!(call("=", vec![Str("a".to_owned()), Str("a".to_owned())]).unwrap(), Bool(true));
        assert_eq!(call("=", vec![Number(1.0), Str("1".to_owned())]).unwrap(), Bool(false));
    }

    #[test]
    fn print_returns_unit() {
        assert_eq!(call("print", vec![Str("hello".to_owned()), Number(1.0)]).unwrap(), Unit);
        assert_eq!(call("print", vec![]).unwrap(), Unit);
    }

    #[test]
    fn misuse_is_reported() {
        let err = call("*", vec![Number(1.0)]).unwrap_err();
        assert_eq!(err.downcast_ref::<RunError>(), Some(&RunError::WrongNumArgs {
            name: "*".to_owned(),
            expected: 2,
            got: 1,
        }));

        let err = call("-", vec![]).unwrap_err();
        assert!(matches!(err.downcast_ref::<RunError>(), Some(RunError::WrongNumArgs { .. })));

        let err = call("<", vec![Str("a".to_owned()), Number(1.0)]).unwrap_err();
        assert!(matches!(err.downcast_ref::<RunError>(), Some(RunError::TypeError { .. })));
    }
}
// }}}
