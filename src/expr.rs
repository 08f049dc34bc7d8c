use itertools::join;
use std::fmt;

/// a parsed eva s-expression, as handed to the evaluator
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    /// a quoted literal, without its delimiters
    Str(String),
    Symbol(String),
    List(Vec<Expr>),
}

use self::Expr::*;

impl Expr {
    /// build a list expression out of its items
    pub fn list<I: IntoIterator<Item = Expr>>(items: I) -> Expr {
        List(items.into_iter().collect())
    }

    pub fn symbol<S: Into<String>>(name: S) -> Expr {
        Symbol(name.into())
    }

    /// the head symbol of a list form, if it has one
    pub fn tag(&self) -> Option<&str> {
        match self {
            List(items) => match items.first() {
                Some(Symbol(tag)) => Some(tag.as_str()),
                _ => None,
            },
            _ => None,
        }
    }

    /// true for a list whose head is the symbol `tag`
    pub fn is_tagged(&self, tag: &str) -> bool {
        self.tag() == Some(tag)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Number(n)  => write!(f, "{}", n),
            Str(s)     => write!(f, "\"{}\"", s),
            Symbol(s)  => write!(f, "{}", s),
            List(list) => write!(f, "({})", join(list.iter(), " ")),
        }
    }
}

// }}}
