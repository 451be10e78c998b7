//! Lexer for tokenizing format patterns.
//!
//! The lexer converts a pattern string into a stream of tokens that the
//! parser turns into a [`DateFormat`](crate::ast::DateFormat):
//! - Runs of the same field letter (`YYYY`, `MM`, `dddd`) become one token
//!   carrying the run length
//! - An optional `j` prefix before a field letter (`jYYYY`) is dropped
//! - Bracketed text (`[at]`) becomes a QuotedString token
//! - Escaped characters (`\Y`) become EscapedChar tokens

use crate::error::FormatError;
use crate::parser::tokens::{SpannedToken, Token};

/// A lexer for format patterns.
pub struct Lexer<'a> {
    /// The input string being tokenized.
    input: &'a str,
    /// The current position in the input.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Returns the next token from the input.
    pub fn next_token(&mut self) -> Result<SpannedToken, FormatError> {
        let start = self.position;
        let Some(ch) = self.current_char() else {
            return Ok(SpannedToken {
                token: Token::Eof,
                start,
                end: start,
            });
        };

        let token = match ch {
            '[' => self.lex_quoted_string()?,
            '\\' => self.lex_escaped_char()?,
            'j' if self.peek_char().is_some_and(is_field_letter) => {
                self.advance();
                self.lex_field()
            }
            c if is_field_letter(c) => self.lex_field(),
            _ => {
                self.advance();
                Token::Literal(ch)
            }
        };

        Ok(SpannedToken {
            token,
            start,
            end: self.position,
        })
    }

    /// Returns the character at the current position, if any.
    fn current_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    /// Returns the character after the current one, if any.
    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().nth(1)
    }

    /// Advances the position by one character.
    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position += ch.len_utf8();
        }
    }

    /// Counts and consumes consecutive occurrences of `letter`.
    fn count_run(&mut self, letter: char) -> usize {
        let mut count = 0;
        while self.current_char() == Some(letter) {
            count += 1;
            self.advance();
        }
        count
    }

    /// Lexes a run of one field letter.
    fn lex_field(&mut self) -> Token {
        match self.current_char() {
            Some('Y') => Token::Year(self.count_run('Y')),
            Some('M') => Token::Month(self.count_run('M')),
            Some('D') => Token::Day(self.count_run('D')),
            _ => Token::Weekday(self.count_run('d')),
        }
    }

    /// Lexes bracketed literal text ([...]).
    fn lex_quoted_string(&mut self) -> Result<Token, FormatError> {
        let start = self.position;
        self.advance(); // Skip the opening bracket

        let mut content = String::new();
        loop {
            match self.current_char() {
                Some(']') => {
                    self.advance();
                    return Ok(Token::QuotedString(content));
                }
                Some(ch) => {
                    content.push(ch);
                    self.advance();
                }
                None => return Err(FormatError::UnterminatedLiteral { position: start }),
            }
        }
    }

    /// Lexes an escaped character (\x).
    fn lex_escaped_char(&mut self) -> Result<Token, FormatError> {
        let start = self.position;
        self.advance(); // Skip the backslash

        match self.current_char() {
            Some(ch) => {
                self.advance();
                Ok(Token::EscapedChar(ch))
            }
            None => Err(FormatError::UnterminatedLiteral { position: start }),
        }
    }

    /// Returns all remaining tokens, ending with Eof.
    /// This consumes the lexer.
    pub fn tokenize(mut self) -> Result<Vec<SpannedToken>, FormatError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = matches!(token.token, Token::Eof);
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }
}

fn is_field_letter(c: char) -> bool {
    matches!(c, 'Y' | 'M' | 'D' | 'd')
}
