//! Token types for the format pattern lexer.

/// A token in a format pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    Literal(char),
    EscapedChar(char),
    QuotedString(String),

    // Date fields, with the length of the letter run
    Year(usize),    // Y
    Month(usize),   // M
    Day(usize),     // D
    Weekday(usize), // d

    // End of input
    Eof,
}

/// A token with its position in the source.
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub start: usize,
    pub end: usize,
}
