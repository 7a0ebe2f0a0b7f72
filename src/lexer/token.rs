/// A pattern string token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A normal byte.
    Literal(u8),
    /// A byte escaped by `\`.
    EscapedLiteral(u8),
    /// `.`
    Any,
    /// `[`
    LBracket,
    /// `]`, only inside a set.
    RBracket,
    /// `^`, only inside a set.
    Caret,
    /// `-`, only inside a set.
    Minus,
    /// `*`
    Star,
    /// `+`
    Plus,
    /// `?`
    Question,
}

impl Token {
    /// Returns a byte representation of the token.
    #[must_use]
    pub const fn to_byte(self) -> u8 {
        match self {
            Token::Literal(b) | Token::EscapedLiteral(b) => b,
            Token::Any => b'.',
            Token::LBracket => b'[',
            Token::RBracket => b']',
            Token::Caret => b'^',
            Token::Minus => b'-',
            Token::Star => b'*',
            Token::Plus => b'+',
            Token::Question => b'?',
        }
    }
}

/// A [`Token`] with associated position information.
#[derive(Clone, Copy, Debug, Eq)]
pub struct PosToken {
    /// The start position of the token in the pattern string.
    pub pos: usize,
    /// The token.
    pub token: Token,
}

impl core::ops::Deref for PosToken {
    type Target = Token;

    fn deref(&self) -> &Self::Target {
        &self.token
    }
}

impl PartialEq for PosToken {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}
