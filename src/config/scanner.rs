//! Scanner for the restricted configuration grammar.
//!
//! The grammar is a flat TOML subset: `key = value` assignments, `#`
//! comments, and exactly two value kinds — single-line strings (single- or
//! double-quoted, no escape processing) and decimal numbers (optional sign,
//! fraction, exponent, and `_` separators, which are stripped before
//! conversion). Arrays, inline tables, booleans, dates, and quoted keys are
//! rejected with an explicit [`ParserError::Unsupported`] rather than being
//! silently dropped.
//!
//! Implementation: a [`Lexer`] turns the raw text into a token stream, and a
//! small recursive-descent [`Parser`] folds assignments into a [`RawTable`].
//! Any violation aborts the parse; no partial table is returned.
//!
//! # Examples
//!
//! ```
//! use texseq::config::scanner::scan;
//! use texseq::config::value::Value;
//!
//! let table = scan("latex = \"xelatex\"  # engine override\nmax_repeat = 5\n").unwrap();
//! assert_eq!(table["latex"], Value::Str("xelatex".to_string()));
//! assert_eq!(table["max_repeat"], Value::Num(5.0));
//! ```
//!
//! Underscore separators are stripped from numbers:
//!
//! ```
//! use texseq::config::scanner::scan;
//! use texseq::config::value::Value;
//!
//! let table = scan("threshold = 1_000\n").unwrap();
//! assert_eq!(table["threshold"], Value::Num(1000.0));
//! ```

use std::iter::Peekable;
use std::str::Chars;

use crate::error::ParserError;

use super::value::{RawTable, Value};

/// Scan raw configuration text into a flat key → value table.
///
/// # Errors
///
/// Returns a [`ParserError`] on any grammar violation: empty or duplicate
/// keys, unterminated strings, invalid numeric literals, trailing characters
/// after a value, a missing `=` or value, or an unsupported construct.
pub fn scan(input: &str) -> Result<RawTable, ParserError> {
    Parser::new(input).parse()
}

/// One lexical unit of the configuration grammar.
#[derive(Debug, Clone, PartialEq)]
enum Token {
    /// An unquoted run of characters, surrounding whitespace trimmed.
    Text(String),
    /// A quoted string, delimiters removed, contents verbatim.
    Str(String),
    /// The assignment operator.
    Equals,
    /// End of line.
    Newline,
    /// End of input.
    Eof,
}

/// Character-level tokenizer with line tracking for error reports.
struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            line: 1,
        }
    }

    /// Produce the next token together with the line it appeared on.
    fn next_token(&mut self) -> Result<(Token, usize), ParserError> {
        loop {
            match self.chars.peek().copied() {
                None => return Ok((Token::Eof, self.line)),
                Some(' ' | '\t' | '\r') => {
                    self.chars.next();
                }
                Some('\n') => {
                    self.chars.next();
                    let line = self.line;
                    self.line += 1;
                    return Ok((Token::Newline, line));
                }
                Some('#') => {
                    // Comment: discard to end of line, not the line break.
                    while self.chars.peek().is_some_and(|&c| c != '\n') {
                        self.chars.next();
                    }
                }
                Some('=') => {
                    self.chars.next();
                    return Ok((Token::Equals, self.line));
                }
                Some(quote @ ('"' | '\'')) => return self.quoted(quote),
                Some(_) => {
                    let line = self.line;
                    return Ok((Token::Text(self.text_run()), line));
                }
            }
        }
    }

    /// Lex a quoted string. Characters are copied verbatim — backslash
    /// sequences receive no special treatment. Strings are single-line: a
    /// raw line break (or end of input) before the closing delimiter is
    /// fatal.
    fn quoted(&mut self, quote: char) -> Result<(Token, usize), ParserError> {
        let line = self.line;
        self.chars.next();
        let mut text = String::new();
        loop {
            match self.chars.next() {
                None | Some('\n') => return Err(ParserError::UnterminatedString { line }),
                Some(c) if c == quote => return Ok((Token::Str(text), line)),
                Some(c) => text.push(c),
            }
        }
    }

    /// Lex an unquoted run, stopping before any structural character.
    /// Interior whitespace is preserved; surrounding whitespace is trimmed.
    fn text_run(&mut self) -> String {
        let mut text = String::new();
        while let Some(&c) = self.chars.peek() {
            if matches!(c, '=' | '#' | '\n' | '"' | '\'') {
                break;
            }
            text.push(c);
            self.chars.next();
        }
        text.trim().to_string()
    }
}

/// Recursive-descent parser over the token stream.
struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            lexer: Lexer::new(input),
        }
    }

    fn next(&mut self) -> Result<(Token, usize), ParserError> {
        self.lexer.next_token()
    }

    fn parse(mut self) -> Result<RawTable, ParserError> {
        let mut table = RawTable::new();
        loop {
            let (token, line) = self.next()?;
            match token {
                Token::Newline => {}
                Token::Eof => return Ok(table),
                Token::Equals => return Err(ParserError::EmptyKey { line }),
                Token::Str(_) => {
                    return Err(ParserError::Unsupported {
                        what: "quoted key",
                        line,
                    });
                }
                Token::Text(key) => self.assignment(&mut table, key, line)?,
            }
        }
    }

    /// Parse the remainder of one `key = value` assignment and record it.
    fn assignment(
        &mut self,
        table: &mut RawTable,
        key: String,
        key_line: usize,
    ) -> Result<(), ParserError> {
        match self.next()? {
            (Token::Equals, _) => {}
            (_, line) => return Err(ParserError::ExpectedAssignment { line }),
        }

        let value = self.value()?;

        // Only a line break or end of input may follow a value; the lexer
        // has already swallowed trailing whitespace and comments. Eof is
        // safe to consume — the lexer keeps yielding it.
        match self.next()? {
            (Token::Newline | Token::Eof, _) => {}
            (_, line) => return Err(ParserError::InvalidPrimitive { line }),
        }

        if table.contains_key(&key) {
            return Err(ParserError::DuplicateKey {
                key,
                line: key_line,
            });
        }
        table.insert(key, value);
        Ok(())
    }

    /// Parse one value by dispatching on the next token.
    fn value(&mut self) -> Result<Value, ParserError> {
        match self.next()? {
            (Token::Str(s), _) => Ok(Value::Str(s)),
            (Token::Text(text), line) => classify(&text, line),
            (Token::Equals | Token::Newline | Token::Eof, line) => {
                Err(ParserError::ExpectedValue { line })
            }
        }
    }
}

/// Characters a numeric literal may consist of.
fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-' | '_')
}

/// Classify an unquoted value. Numeric literals are converted; everything
/// else the grammar does not admit is reported explicitly.
fn classify(text: &str, line: usize) -> Result<Value, ParserError> {
    let mut words = text.split_whitespace();
    let head = words.next().unwrap_or_default();
    let trailing = words.next().is_some();

    if head == "true" || head == "false" {
        return Err(ParserError::Unsupported {
            what: "boolean",
            line,
        });
    }

    match head.chars().next() {
        Some('[') => Err(ParserError::Unsupported {
            what: "array",
            line,
        }),
        Some('{') => Err(ParserError::Unsupported {
            what: "inline table",
            line,
        }),
        Some(c) if c.is_ascii_digit() || matches!(c, '+' | '-' | '.') => {
            if !head.chars().all(is_number_char) {
                return Err(ParserError::InvalidNumber {
                    text: head.to_string(),
                    line,
                });
            }
            let cleaned: String = head.chars().filter(|&c| c != '_').collect();
            let number: f64 = cleaned.parse().map_err(|_| ParserError::InvalidNumber {
                text: head.to_string(),
                line,
            })?;
            if trailing {
                return Err(ParserError::InvalidPrimitive { line });
            }
            Ok(Value::Num(number))
        }
        _ => Err(ParserError::Unsupported {
            what: "bare value",
            line,
        }),
    }
}
