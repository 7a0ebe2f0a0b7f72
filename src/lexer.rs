use super::{Error, Result};

pub mod token;

pub use token::{PosToken, Token};

/// Splits a pattern string into [`PosToken`]s.
///
/// The meaning of a byte depends on whether it appears inside a `[...]` set,
/// so the lexer tracks that state as it goes.
pub struct Lexer<'a> {
    input: &'a [u8],
    pos: usize,
    in_set: bool,
    peeked: Option<PosToken>,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub fn new(input: &'a [u8]) -> Self {
        Lexer {
            input,
            pos: 0,
            in_set: false,
            peeked: None,
        }
    }

    fn advance(&mut self) -> Option<u8> {
        let byte = self.input.get(self.pos).copied();
        if byte.is_some() {
            self.pos += 1;
        }
        byte
    }

    fn lex(&mut self) -> Result<Option<PosToken>> {
        let pos = self.pos;
        let Some(byte) = self.advance() else {
            return Ok(None);
        };

        let token = match byte {
            b'\\' => {
                let Some(escaped) = self.advance() else {
                    return Err(Error::DanglingEscape { pos });
                };
                Token::EscapedLiteral(escaped)
            }
            b']' if self.in_set => {
                self.in_set = false;
                Token::RBracket
            }
            b'^' if self.in_set => Token::Caret,
            b'-' if self.in_set => Token::Minus,
            _ if self.in_set => Token::Literal(byte),
            b'[' => {
                self.in_set = true;
                Token::LBracket
            }
            b'.' => Token::Any,
            b'*' => Token::Star,
            b'+' => Token::Plus,
            b'?' => Token::Question,
            _ => Token::Literal(byte),
        };

        Ok(Some(PosToken { pos, token }))
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> Result<Option<PosToken>> {
        if self.peeked.is_none() {
            self.peeked = self.lex()?;
        }
        Ok(self.peeked)
    }

    /// Consumes and returns the next token.
    pub fn next_token(&mut self) -> Result<Option<PosToken>> {
        match self.peeked.take() {
            Some(peeked) => Ok(Some(peeked)),
            None => self.lex(),
        }
    }

    /// Consumes the next token if it is `token`, returning whether it did.
    pub fn consume(&mut self, token: Token) -> Result<bool> {
        if self.peek()?.is_some_and(|next| next.token == token) {
            self.next_token()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consumes and returns the next token unless it is `end`.
    pub fn until(&mut self, end: Token) -> Result<Option<PosToken>> {
        match self.peek()? {
            Some(next) if next.token != end => self.next_token(),
            _ => Ok(None),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<PosToken>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}
