//! Rewrites of surface sugar into the core forms the evaluator knows.
//! Nothing here touches an environment.

use failure::Error;

use crate::errors::RunError;
use crate::expr::Expr::{self, *};

fn malformed(form: &str, msg: &str) -> Error {
    RunError::MalformedForm {
        form: form.to_owned(),
        msg: msg.to_owned(),
    }.into()
}

/// (switch (<cond> <expr>) ... (else <expr>))
///   => (if <cond> <expr> (if ... <else-expr>))
pub fn switch_to_if(exp: &Expr) -> Result<Expr, Error> {
    let clauses = match exp {
        List(items) if exp.is_tagged("switch") => &items[1..],
        _ => return Err(malformed("switch", "not a switch expression")),
    };

    let (last, rest) = clauses.split_last()
        .ok_or_else(|| malformed("switch", "at least an `else` clause is required"))?;

    let mut result = match clause(last)? {
        (Symbol(s), alternate) if s == "else" => alternate.clone(),
        _ => return Err(malformed("switch", "the last clause must be `else`")),
    };

    for branch in rest.iter().rev() {
        let (cond, conseq) = clause(branch)?;
        if let Symbol(s) = cond {
            if s == "else" {
                return Err(malformed("switch", "`else` must be the last clause"));
            }
        }

        result = Expr::list(vec![
            Expr::symbol("if"),
            cond.clone(),
            conseq.clone(),
            result,
        ]);
    }

    Ok(result)
}

fn clause(branch: &Expr) -> Result<(&Expr, &Expr), Error> {
    match branch {
        List(pair) if pair.len() == 2 => Ok((&pair[0], &pair[1])),
        _ => Err(malformed("switch", &format!("expected a (<cond> <expr>) clause, got {}", branch))),
    }
}

/// (def <name> <params> <body>) => (var <name> (lambda <params> <body>))
pub fn def_to_var_lambda(exp: &Expr) -> Result<Expr, Error> {
    match exp {
        List(items) if exp.is_tagged("def") && items.len() == 4 => Ok(Expr::list(vec![
            Expr::symbol("var"),
            items[1].clone(),
            Expr::list(vec![
                Expr::symbol("lambda"),
                items[2].clone(),
                items[3].clone(),
            ]),
        ])),
        _ => Err(malformed("def", "expected (def <name> <params> <body>)")),
    }
}

// }}}
