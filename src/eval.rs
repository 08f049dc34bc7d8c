use failure::Error;
use std::rc::Rc;

use crate::env::*;
use crate::errors::RunError;
use crate::expr::Expr::{self, *};
use crate::transform;
use crate::values::LispProc;
use crate::values::Value::{self, Native, Object, Proc, Unit};

/// return a MalformedForm error if a special form doesn't get $num operands
macro_rules! check_operands {
    ($operands: ident, $num: expr, $form: expr) => {{
        if $operands.len() != $num {
            Err(RunError::MalformedForm {
                form: $form.to_string(),
                msg: format!("expected {} operands, got {}", $num, $operands.len()),
            })
        } else {
            Ok(())
        }
    }}
}

/// evaluate a structured eva s-expression
pub fn eval(exp: &Expr, env: EnvRef) -> Result<Value, Error> {
    match exp {
        Number(n) => Ok(Value::Number(*n)),
        Str(s)    => Ok(Value::Str(s.clone())),
        Symbol(name) => env.borrow().lookup(name),
        List(list) => eval_form(exp, list, env),
    }
}

/// dispatch a list on its head symbol, falling back to a call
fn eval_form(exp: &Expr, list: &[Expr], env: EnvRef) -> Result<Value, Error> {
    let (head, operands) = match list.split_first() {
        Some(split) => split,
        None => Err(RunError::UnimplementedForm(exp.to_string()))?,
    };

    let tag = match head {
        Symbol(tag) => tag.as_str(),
        _ => return apply(head, operands, env),
    };

    match tag {
        "class"  => eval_class(operands, env),
        "new"    => eval_new(operands, env),
        "prop"   => eval_prop(operands, env),
        "var"    => eval_var(operands, env),
        "set"    => eval_set(operands, env),
        "begin"  => {
            let block_env = Env::new(Some(env)).into_ref();
            eval_block(operands, block_env)
        }
        "if"     => eval_if(operands, env),
        "switch" => {
            let if_exp = transform::switch_to_if(exp)?;
            eval(&if_exp, env)
        }
        "while"  => eval_while(operands, env),
        "def"    => {
            let var_exp = transform::def_to_var_lambda(exp)?;
            eval(&var_exp, env)
        }
        "lambda" => lambda(operands, env),
        _        => apply(head, operands, env),
    }
}

/// evaluate a function or class body: a `begin` runs directly in `env`
pub fn eval_body(body: &Expr, env: EnvRef) -> Result<Value, Error> {
    match body {
        List(list) if body.is_tagged("begin") => eval_block(&list[1..], env),
        _ => eval(body, env),
    }
}

/// evaluate expressions in order, returning the last result
pub fn eval_block(exps: &[Expr], env: EnvRef) -> Result<Value, Error> {
    let mut result = Unit;
    for exp in exps {
        result = eval(exp, env.clone())?;
    }
    Ok(result)
}

/// evaluate every argument left to right
pub fn eval_list(args: &[Expr], env: EnvRef) -> Result<Vec<Value>, Error> {
    args.iter().map(|arg| eval(arg, env.clone())).collect()
}

/// the name a special form expects in operand position
fn name_of<'a>(exp: &'a Expr, form: &str) -> Result<&'a str, RunError> {
    match exp {
        Symbol(name) => Ok(name),
        other => Err(RunError::MalformedForm {
            form: form.to_owned(),
            msg: format!("expected a name, got {}", other),
        }),
    }
}

// {{{ variables
/// usage: (var <name> <expr>)
fn eval_var(operands: &[Expr], env: EnvRef) -> Result<Value, Error> {
    check_operands!(operands, 2, "var")?;

    let name = name_of(&operands[0], "var")?;
    let value = eval(&operands[1], env.clone())?;
    Ok(env.borrow_mut().define(name, value))
}

/// usage: (set <name> <expr>)
///        (set (prop <instance> <name>) <expr>)
fn eval_set(operands: &[Expr], env: EnvRef) -> Result<Value, Error> {
    check_operands!(operands, 2, "set")?;

    match &operands[0] {
        List(target) if operands[0].is_tagged("prop") => {
            let target = &target[1..];
            check_operands!(target, 2, "prop")?;

            let instance = eval(&target[0], env.clone())?.into_env("set")?;
            let name = name_of(&target[1], "prop")?;
            let value = eval(&operands[1], env)?;

            // own property, never an ancestor's
            let stored = instance.borrow_mut().define(name, value);
            Ok(stored)
        }

        target => {
            let name = name_of(target, "set")?;
            let value = eval(&operands[1], env.clone())?;
            env.borrow_mut().assign(name, value)
        }
    }
}
// }}}

// {{{ control flow
/// usage: (if <cond> <conseq> <alternate>)
fn eval_if(operands: &[Expr], env: EnvRef) -> Result<Value, Error> {
    check_operands!(operands, 3, "if")?;

    let test = eval(&operands[0], env.clone())?.to_bool();
    eval(if test { &operands[1] } else { &operands[2] }, env)
}

/// usage: (while <cond> <body>)
fn eval_while(operands: &[Expr], env: EnvRef) -> Result<Value, Error> {
    check_operands!(operands, 2, "while")?;

    let mut result = Unit;
    while eval(&operands[0], env.clone())?.to_bool() {
        result = eval(&operands[1], env.clone())?;
    }
    Ok(result)
}
// }}}

// {{{ functions
/// create a closure over the current environment
/// usage: (lambda (<param> ...) <body>)
fn lambda(operands: &[Expr], env: EnvRef) -> Result<Value, Error> {
    check_operands!(operands, 2, "lambda")?;

    let params = match &operands[0] {
        List(params) => params,
        other => Err(RunError::MalformedForm {
            form: "lambda".to_owned(),
            msg: format!("expected a parameter list, got {}", other),
        })?,
    };

    let mut param_names: Vec<String> = Vec::with_capacity(params.len());
    for p in params {
        param_names.push(name_of(p, "lambda (in params)")?.to_owned());
    }

    Ok(Proc(Rc::new(LispProc {
        params: param_names,
        body: operands[1].clone(),
        env,
    })))
}

/// call whatever the head evaluates to
fn apply(head: &Expr, operands: &[Expr], env: EnvRef) -> Result<Value, Error> {
    let callee = eval(head, env.clone())?;
    let args = eval_list(operands, env)?;

    match callee {
        Native(native) => native.call(args),
        Proc(proc) => proc.call(&head.to_string(), args),
        other => Err(RunError::UncallableValue {
            name: head.to_string(),
            typename: other.get_type(),
        })?,
    }
}
// }}}

// {{{ classes
/// usage: (class <name> <parent> <body>)
fn eval_class(operands: &[Expr], env: EnvRef) -> Result<Value, Error> {
    check_operands!(operands, 3, "class")?;

    let name = name_of(&operands[0], "class")?;
    let parent = match eval(&operands[1], env.clone())? {
        Value::Null => env.clone(),
        other => other.into_env("class (parent)")?,
    };

    let class_env = Env::new(Some(parent)).into_ref();
    eval_body(&operands[2], class_env.clone())?;

    Ok(env.borrow_mut().define(name, Object(class_env)))
}

/// usage: (new <class> <arg> ...)
fn eval_new(operands: &[Expr], env: EnvRef) -> Result<Value, Error> {
    let (class, args) = match operands.split_first() {
        Some(split) => split,
        None => Err(RunError::MalformedForm {
            form: "new".to_owned(),
            msg: "expected a class".to_owned(),
        })?,
    };

    let class_env = eval(class, env.clone())?.into_env("new")?;
    let instance = Env::new(Some(class_env.clone())).into_ref();

    let mut call_args = vec![Object(instance.clone())];
    call_args.extend(eval_list(args, env)?);

    let constructor = class_env.borrow().lookup("constructor")?;
    match constructor {
        Proc(proc) => proc.call("constructor", call_args)?,
        other => Err(RunError::TypeError {
            name: "new".to_owned(),
            expected: "Proc".to_owned(),
            got: other.get_type(),
        })?,
    };

    Ok(Object(instance))
}

/// usage: (prop <instance> <name>)
fn eval_prop(operands: &[Expr], env: EnvRef) -> Result<Value, Error> {
    check_operands!(operands, 2, "prop")?;

    let instance = eval(&operands[0], env)?.into_env("prop")?;
    let name = name_of(&operands[1], "prop")?;
    let value = instance.borrow().lookup(name);
    value
}
// }}}

// }}}
