use std::rc::Rc;

use log::trace;

use crate::{Position, Span, MK_TOKEN};

use super::tokens::{lookup_identifier, Token, TokenKind};

/// Byte-at-a-time scanner producing one token per call.
///
/// `ch` is the byte under the cursor (`None` once the input is exhausted),
/// `pos` is its offset and `read_pos` the offset of the byte after it.
#[derive(Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    read_pos: usize,
    ch: Option<u8>,
    file: Rc<String>,
    finished: bool,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let mut lexer = Lexer {
            source,
            pos: 0,
            read_pos: 0,
            ch: None,
            file: file_name,
            finished: false,
        };
        lexer.read();
        lexer
    }

    /// Produces the next token. Once the input is exhausted every call
    /// returns an `EndOfInput` token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.pos;

        let token = match self.ch {
            None => {
                let end = self.source.len();
                return MK_TOKEN!(TokenKind::EndOfInput, String::new(), self.span(end, end));
            }
            Some(b'=') => self.one_or_two(TokenKind::Assign, TokenKind::Equal),
            Some(b'!') => self.one_or_two(TokenKind::Bang, TokenKind::NotEqual),
            Some(ch) if is_letter(ch) => {
                let word = self.read_identifier();
                let token = MK_TOKEN!(lookup_identifier(&word), word, self.span(start, self.pos));
                trace!("scanned {} {:?}", token.kind, token.value);
                return token;
            }
            Some(ch) if ch.is_ascii_digit() => {
                let digits = self.read_number();
                let token = MK_TOKEN!(TokenKind::Integer, digits, self.span(start, self.pos));
                trace!("scanned {} {:?}", token.kind, token.value);
                return token;
            }
            Some(ch) => {
                let kind = TokenKind::from_single_byte(ch).unwrap_or(TokenKind::Illegal);
                let value = String::from_utf8_lossy(&[ch]).into_owned();
                MK_TOKEN!(kind, value, self.span(start, start + 1))
            }
        };

        self.read();
        trace!("scanned {} {:?}", token.kind, token.value);
        token
    }

    /// Handles `=`/`==` and `!`/`!=`: the only operators needing a byte of lookahead.
    fn one_or_two(&mut self, single: TokenKind, double: TokenKind) -> Token {
        let start = self.pos;

        if self.peek() == Some(b'=') {
            let first = self.ch.unwrap_or_default() as char;
            self.read();
            let value = format!("{}=", first);
            MK_TOKEN!(double, value, self.span(start, start + 2))
        } else {
            let value = (self.ch.unwrap_or_default() as char).to_string();
            MK_TOKEN!(single, value, self.span(start, start + 1))
        }
    }

    fn read(&mut self) {
        self.ch = self.source.as_bytes().get(self.read_pos).copied();
        self.pos = self.read_pos;
        if self.read_pos < self.source.len() {
            self.read_pos += 1;
        } else {
            self.pos = self.source.len();
        }
    }

    fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.read_pos).copied()
    }

    fn read_identifier(&mut self) -> String {
        let start = self.pos;
        while matches!(self.ch, Some(ch) if is_letter(ch) || ch.is_ascii_digit()) {
            self.read();
        }
        self.source[start..self.pos].to_string()
    }

    fn read_number(&mut self) -> String {
        let start = self.pos;
        while matches!(self.ch, Some(ch) if ch.is_ascii_digit()) {
            self.read();
        }
        self.source[start..self.pos].to_string()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.read();
        }
    }

    fn span(&self, start: usize, end: usize) -> Span {
        Span {
            start: Position(start as u32, Rc::clone(&self.file)),
            end: Position(end as u32, Rc::clone(&self.file)),
        }
    }
}

/// Yields every token up to and including the first `EndOfInput`.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if token.is_eof() {
            self.finished = true;
        }

        Some(token)
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

/// Scans a whole source. The last token is always the single `EndOfInput`.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    Lexer::new(source, file).collect()
}
