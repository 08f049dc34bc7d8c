use failure::Fail;

#[derive(Debug, PartialEq, Fail)]
pub enum ParseError {
    #[fail(display = "empty expression")]
    Empty,

    #[fail(display = "mismatched parentheses")]
    MismatchedParens,

    #[fail(display = "encountered erroneous '{}'", _0)]
    ErroneousToken(String),

    #[fail(display = "unterminated string literal")]
    UnterminatedString,
}

#[derive(Debug, PartialEq, Fail)]
pub enum RunError {
    #[fail(display = "`{}` is not defined", _0)]
    NotDefined(String),

    #[fail(display = "unimplemented form: {}", _0)]
    UnimplementedForm(String),

    #[fail(display = "{}: {}", form, msg)]
    MalformedForm { form: String, msg: String },

    #[fail(display = "{}: expected a {}, got a {} instead", name, expected, got)]
    TypeError {
        name: String,
        expected: String,
        got: String
    },

    #[fail(display = "value `{}` (of type {}) is uncallable", name, typename)]
    UncallableValue { name: String, typename: String },

    #[fail(display = "{}: expected {} params, got {} instead", name, expected, got)]
    WrongNumArgs {
        name: String,
        expected: usize,
        got: usize
    },
}
