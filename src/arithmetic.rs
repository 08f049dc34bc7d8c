use crate::errors::RunError;
use crate::values::Value::{self, *};
use std::ops;

// because math is hard

fn type_error(op: &str, expected: &str, got: &Value) -> RunError {
    RunError::TypeError {
        name: op.to_owned(),
        expected: expected.to_owned(),
        got: got.get_type(),
    }
}

/// the operand that broke a numeric operator
fn offending<'a>(a: &'a Value, b: &'a Value) -> &'a Value {
    match a {
        Number(_) => b,
        _ => a,
    }
}

impl<'a, 'b> ops::Add<&'b Value> for &'a Value {
    type Output = Result<Value, RunError>;

    fn add(self, other: &'b Value) -> Self::Output {
        match (self, other) {
            (Number(a), Number(b)) => Ok(Number(a + b)),
            (Str(a), Str(b))       => Ok(Str(format!("{}{}", a, b))),
            (Str(_), b)            => Err(type_error("+", "Str", b)),
            (a, b)                 => Err(type_error("+", "Number", offending(a, b))),
        }
    }
}

impl<'a, 'b> ops::Sub<&'b Value> for &'a Value {
    type Output = Result<Value, RunError>;

    fn sub(self, other: &'b Value) -> Self::Output {
        match (self, other) {
            (Number(a), Number(b)) => Ok(Number(a - b)),
            (a, b) => Err(type_error("-", "Number", offending(a, b))),
        }
    }
}

impl<'a, 'b> ops::Mul<&'b Value> for &'a Value {
    type Output = Result<Value, RunError>;

    fn mul(self, other: &'b Value) -> Self::Output {
        match (self, other) {
            (Number(a), Number(b)) => Ok(Number(a * b)),
            (a, b) => Err(type_error("*", "Number", offending(a, b))),
        }
    }
}

impl<'a, 'b> ops::Div<&'b Value> for &'a Value {
    type Output = Result<Value, RunError>;

    fn div(self, other: &'b Value) -> Self::Output {
        match (self, other) {
            (Number(a), Number(b)) => Ok(Number(a / b)),
            (a, b) => Err(type_error("/", "Number", offending(a, b))),
        }
    }
}

impl<'a> ops::Neg for &'a Value {
    type Output = Result<Value, RunError>;

    fn neg(self) -> Self::Output {
        match self {
            Number(a) => Ok(Number(-a)),
            a => Err(type_error("-", "Number", a)),
        }
    }
}

impl Value {
    /// order two numbers with `cmp`, for the comparison builtins
    pub fn compare<F>(&self, op: &str, other: &Value, cmp: F) -> Result<Value, RunError>
        where F: FnOnce(f64, f64) -> bool
    {
        match (self, other) {
            (Number(a), Number(b)) => Ok(Bool(cmp(*a, *b))),
            (a, b) => Err(type_error(op, "Number", offending(a, b))),
        }
    }
}

// }}}
