use failure::Error;
use std::iter::Peekable;

use crate::errors::ParseError;
use crate::expr::Expr::{self, *};

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Item(String),
    LeftParen,
    RightParen,
}

/// parse a string of code into individual “bits” of syntax
pub fn tokenize(string: &str) -> Result<Vec<Token>, Error> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut item = String::new();

    let mut escaped_state = false;
    let mut string_state = false;
    let mut comment_state = false;

    for c in string.chars() {
        if comment_state {
            if c == '\n' {
                comment_state = false;
            }
        } else if !string_state {
            match c {
                '(' => {
                    push_item(&mut item, &mut tokens);
                    tokens.push(Token::LeftParen);
                }

                ')' => {
                    push_item(&mut item, &mut tokens);
                    tokens.push(Token::RightParen);
                }

                '"' => {
                    push_item(&mut item, &mut tokens);
                    string_state = true;
                    item.push('"');
                }

                ';' => {
                    push_item(&mut item, &mut tokens);
                    comment_state = true;
                }

                c if c.is_whitespace() => push_item(&mut item, &mut tokens),

                _ => item.push(c),
            }
        } else if !escaped_state {
            match c {
                '\\' => escaped_state = true,

                '"' => {
                    string_state = false;
                    item.push('"');
                    push_item(&mut item, &mut tokens);
                }

                _ => item.push(c),
            }
        } else {
            // escapes are kept verbatim
            escaped_state = false;
            item.push('\\');
            item.push(c);
        }
    }

    if string_state {
        Err(ParseError::UnterminatedString)?
    }

    push_item(&mut item, &mut tokens);
    Ok(tokens)
}

fn push_item(item: &mut String, tokens: &mut Vec<Token>) {
    if !item.is_empty() {
        tokens.push(Token::Item(item.clone()));
        item.clear();
    }
}

/// parse program text into its top-level expressions
pub fn parse(code: &str) -> Result<Vec<Expr>, Error> {
    let tokens = tokenize(code)?;
    let left_parens = tokens.iter().filter(|&t| t == &Token::LeftParen).count();
    let right_parens = tokens.iter().filter(|&t| t == &Token::RightParen).count();

    if tokens.is_empty() {
        Err(ParseError::Empty)?
    } else if left_parens != right_parens {
        Err(ParseError::MismatchedParens)?
    }

    let mut tokens = tokens.into_iter().peekable();
    let mut program = Vec::new();
    while tokens.peek().is_some() {
        program.push(Expr::from_tokens(&mut tokens)?);
    }

    Ok(program)
}

impl Expr {
    /// parse a stream of tokens into one structured s-expression
    pub fn from_tokens<I>(tokens: &mut Peekable<I>) -> Result<Expr, Error>
        where I: Iterator<Item = Token>
    {
        match tokens.next() {
            Some(Token::LeftParen) => {
                let mut list: Vec<Expr> = Vec::new();

                loop {
                    match tokens.peek() {
                        Some(Token::RightParen) => {
                            tokens.next();
                            return Ok(List(list));
                        }
                        Some(_) => list.push(Expr::from_tokens(tokens)?),
                        None => Err(ParseError::MismatchedParens)?,
                    }
                }
            }

            Some(Token::RightParen) => Err(ParseError::ErroneousToken(")".to_string()))?,

            Some(Token::Item(s)) => Ok(Expr::atomize(s)?),

            None => Err(ParseError::Empty)?,
        }
    }

    /// parse an item into an atom
    pub fn atomize(mut token: String) -> Result<Expr, ParseError> {
        if token.starts_with('"') && token.ends_with('"') && token.len() > 1 {
            token.pop();
            token.remove(0);
            Ok(Str(token))
        } else if looks_numeric(&token) {
            token.parse::<f64>()
                .map(Number)
                .map_err(|_| ParseError::ErroneousToken(token))
        } else if token.chars().all(is_symbol_char) {
            Ok(Symbol(token))
        } else {
            Err(ParseError::ErroneousToken(token))
        }
    }
}

fn looks_numeric(token: &str) -> bool {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), _) if c.is_ascii_digit() => true,
        (Some('-'), Some(c)) | (Some('+'), Some(c)) => c.is_ascii_digit() || c == '.',
        (Some('.'), Some(c)) => c.is_ascii_digit(),
        _ => false,
    }
}

fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "_+-*/<>=".contains(c)
}

// }}}
