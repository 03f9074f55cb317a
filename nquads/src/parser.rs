//! A line-oriented parser for the [N-Quads] syntax.
//!
//! Each non-empty, non-comment line must hold exactly one quad.
//! Blank node labels are restricted to ASCII name characters,
//! which covers every label the canonicalization engine emits.
//!
//! [N-Quads]: https://www.w3.org/TR/n-quads/

use quadron_api::{Dataset, GraphName, Term, Triple};

/// Parse an N-Quads document into a [`Dataset`].
pub fn parse_nquads(input: &str) -> Result<Dataset, ParseError> {
    let mut dataset = Dataset::new();
    for (index, text) in input.lines().enumerate() {
        let mut cursor = Cursor {
            input: text,
            pos: 0,
            line: index + 1,
        };
        cursor.skip_ws();
        if cursor.at_end() || cursor.peek() == Some(b'#') {
            continue;
        }
        let subject = cursor.subject()?;
        cursor.skip_ws();
        let predicate = Term::Iri(cursor.iriref()?);
        cursor.skip_ws();
        let object = cursor.object()?;
        cursor.skip_ws();
        let graph = match cursor.peek() {
            Some(b'<') => {
                let name = GraphName::Named(cursor.iriref()?);
                cursor.skip_ws();
                name
            }
            Some(b'_') => {
                let name = GraphName::Named(cursor.blank_node_label()?);
                cursor.skip_ws();
                name
            }
            _ => GraphName::Default,
        };
        if !cursor.eat(b'.') {
            return Err(cursor.err(ErrorKind::Expected("statement terminator '.'")));
        }
        cursor.skip_ws();
        match cursor.peek() {
            None | Some(b'#') => (),
            Some(_) => return Err(cursor.err(ErrorKind::Trailing)),
        }
        dataset.insert(graph, Triple::new(subject, predicate, object));
    }
    Ok(dataset)
}

/// Parsing error, capturing the line where it was encountered.
#[derive(Debug, thiserror::Error)]
#[error("{kind} on line {line}")]
pub struct ParseError {
    kind: ErrorKind,
    line: usize,
}

impl ParseError {
    /// The [kind][`ErrorKind`] of this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// The line of the input where the error was encountered, numbered from 1.
    pub fn line(&self) -> usize {
        self.line
    }
}

/// Kind of [parsing errors][`ParseError`].
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Unexpected end of line
    #[error("unexpected end of line")]
    Eof,
    /// Unexpected character(s) in the input
    #[error("expected {0}")]
    Expected(&'static str),
    /// Invalid character in an IRI reference
    #[error("invalid IRI reference")]
    Iri,
    /// Invalid blank node label
    #[error("invalid blank node label")]
    Bnode,
    /// Invalid literal suffix
    #[error("invalid literal")]
    Literal,
    /// Invalid escape sequence
    #[error("invalid escape sequence")]
    InvalidEscape,
    /// Unexpected trailing characters after the statement terminator
    #[error("unexpected trailing characters")]
    Trailing,
}

struct Cursor<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
}

impl Cursor<'_> {
    fn err(&self, kind: ErrorKind) -> ParseError {
        ParseError {
            kind,
            line: self.line,
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.input[self.pos..].chars().next()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_ws(&mut self) {
        while let Some(b' ') | Some(b'\t') = self.peek() {
            self.pos += 1;
        }
    }

    fn subject(&mut self) -> Result<Term, ParseError> {
        match self.peek() {
            Some(b'<') => Ok(Term::Iri(self.iriref()?)),
            Some(b'_') => Ok(Term::BlankNode(self.blank_node_label()?)),
            _ => Err(self.err(ErrorKind::Expected("IRI or blank node"))),
        }
    }

    fn object(&mut self) -> Result<Term, ParseError> {
        match self.peek() {
            Some(b'<') => Ok(Term::Iri(self.iriref()?)),
            Some(b'_') => Ok(Term::BlankNode(self.blank_node_label()?)),
            Some(b'"') => self.literal(),
            _ => Err(self.err(ErrorKind::Expected("IRI, blank node or literal"))),
        }
    }

    fn iriref(&mut self) -> Result<Box<str>, ParseError> {
        if !self.eat(b'<') {
            return Err(self.err(ErrorKind::Expected("IRI reference")));
        }
        let mut value = String::new();
        loop {
            match self.next_char() {
                None => return Err(self.err(ErrorKind::Eof)),
                Some('>') => return Ok(value.into()),
                Some('\\') => match self.next_char() {
                    Some('u') => value.push(self.hex_escape(4)?),
                    Some('U') => value.push(self.hex_escape(8)?),
                    _ => return Err(self.err(ErrorKind::InvalidEscape)),
                },
                Some(c) if c > ' ' && !matches!(c, '<' | '"' | '{' | '}' | '|' | '^' | '`') => {
                    value.push(c);
                }
                Some(_) => return Err(self.err(ErrorKind::Iri)),
            }
        }
    }

    fn blank_node_label(&mut self) -> Result<Box<str>, ParseError> {
        if !self.input[self.pos..].starts_with("_:") {
            return Err(self.err(ErrorKind::Expected("blank node label")));
        }
        self.pos += 2;
        let start = self.pos;
        while let Some(b) = self.peek() {
            if b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.') {
                self.pos += 1;
            } else {
                break;
            }
        }
        // a label cannot end with '.'; give swallowed terminators back
        while self.pos > start && self.input.as_bytes()[self.pos - 1] == b'.' {
            self.pos -= 1;
        }
        if self.pos == start {
            return Err(self.err(ErrorKind::Bnode));
        }
        Ok(format!("_:{}", &self.input[start..self.pos]).into())
    }

    fn literal(&mut self) -> Result<Term, ParseError> {
        self.pos += 1; // opening quote, checked by the caller
        let mut value = String::new();
        loop {
            match self.next_char() {
                None => return Err(self.err(ErrorKind::Eof)),
                Some('"') => break,
                Some('\\') => match self.next_char() {
                    Some('t') => value.push('\t'),
                    Some('b') => value.push('\x08'),
                    Some('n') => value.push('\n'),
                    Some('r') => value.push('\r'),
                    Some('f') => value.push('\x0c'),
                    Some('"') => value.push('"'),
                    Some('\'') => value.push('\''),
                    Some('\\') => value.push('\\'),
                    Some('u') => value.push(self.hex_escape(4)?),
                    Some('U') => value.push(self.hex_escape(8)?),
                    _ => return Err(self.err(ErrorKind::InvalidEscape)),
                },
                Some(c) => value.push(c),
            }
        }
        if self.input[self.pos..].starts_with("^^") {
            self.pos += 2;
            let datatype = self.iriref()?;
            Ok(Term::typed_literal(value, datatype))
        } else if self.eat(b'@') {
            let start = self.pos;
            while let Some(b) = self.peek() {
                if b.is_ascii_alphanumeric() || b == b'-' {
                    self.pos += 1;
                } else {
                    break;
                }
            }
            if self.pos == start {
                return Err(self.err(ErrorKind::Literal));
            }
            Ok(Term::lang_literal(value, &self.input[start..self.pos]))
        } else {
            Ok(Term::literal(value))
        }
    }

    fn hex_escape(&mut self, len: usize) -> Result<char, ParseError> {
        let digits = self
            .input
            .get(self.pos..self.pos + len)
            .ok_or_else(|| self.err(ErrorKind::InvalidEscape))?;
        let code = u32::from_str_radix(digits, 16)
            .map_err(|_| self.err(ErrorKind::InvalidEscape))?;
        self.pos += len;
        char::try_from(code).map_err(|_| self.err(ErrorKind::InvalidEscape))
    }
}
