use super::{
    Error, Result,
    charset::CharSet,
    lexer::{Lexer, PosToken, Token},
    operator::{Operator, OperatorKind, Quantifier},
    pattern::Pattern,
};

/// Compiles a pattern string into a [`Pattern`].
///
/// # Errors
///
/// If the pattern string cannot be parsed, an [`Error`] is returned and no
/// operators are produced.
pub fn parse_pattern(pattern: &[u8]) -> Result<Pattern> {
    let operators = Parser::new(pattern).parse()?;
    debug!(
        "compiled pattern '{}' into {} operators",
        pattern.escape_ascii(),
        operators.len()
    );
    Ok(Pattern::from_parts(pattern.to_vec(), operators))
}

/// Converts a pattern string into a sequence of [`Operator`]s.
struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    fn new(pattern: &'a [u8]) -> Self {
        Parser {
            lexer: Lexer::new(pattern),
        }
    }

    fn parse(mut self) -> Result<Vec<Operator>> {
        let mut operators = Vec::new();

        while let Some(token) = self.lexer.next_token()? {
            operators.push(self.parse_item(token)?);
        }

        Ok(operators)
    }

    fn parse_item(&mut self, token: PosToken) -> Result<Operator> {
        let mut operator = Operator::new(self.parse_base(token)?);

        let quantifier = match self.lexer.peek()?.map(|t| t.token) {
            Some(Token::Question) => Some(Quantifier::Question),
            Some(Token::Star) => Some(Quantifier::Star),
            Some(Token::Plus) => Some(Quantifier::Plus),
            _ => None,
        };

        if let Some(quantifier) = quantifier {
            self.lexer.next_token()?;
            operator.quantify(quantifier);
        }

        Ok(operator)
    }

    fn parse_base(&mut self, PosToken { pos, token }: PosToken) -> Result<OperatorKind> {
        match token {
            Token::Any => Ok(OperatorKind::Any),
            Token::LBracket => self.parse_set(pos),
            // A quantifier with nothing to bind to stands for itself.
            Token::Literal(_)
            | Token::EscapedLiteral(_)
            | Token::RBracket
            | Token::Caret
            | Token::Minus
            | Token::Star
            | Token::Plus
            | Token::Question => Ok(OperatorKind::Literal(token.to_byte())),
        }
    }

    fn parse_set(&mut self, open: usize) -> Result<OperatorKind> {
        let mut set = CharSet::new();
        // A leading '^' negates the set, escaped or not.
        let negated = matches!(
            self.lexer.peek()?.map(|t| t.token),
            Some(Token::Caret | Token::EscapedLiteral(b'^'))
        );
        if negated {
            self.lexer.next_token()?;
        }

        while let Some(PosToken { pos, token }) = self.lexer.until(Token::RBracket)? {
            let b = token.to_byte();
            if self.lexer.consume(Token::Minus)? {
                match self.lexer.peek()? {
                    // [a-]
                    Some(PosToken {
                        token: Token::RBracket,
                        ..
                    })
                    | None => {
                        set.add_byte(b);
                        set.add_byte(b'-');
                    }
                    // [a-z]
                    Some(PosToken { token: end, .. }) => {
                        self.lexer.next_token()?;
                        set.add_range(b, end.to_byte())
                            .map_err(|err| Error::CharSet { pos, err })?;
                    }
                }
            } else {
                set.add_byte(b);
            }
        }

        if !self.lexer.consume(Token::RBracket)? {
            return Err(Error::UnterminatedSet { pos: open });
        }

        Ok(if negated {
            OperatorKind::NegatedSubset(set)
        } else {
            OperatorKind::Subset(set)
        })
    }
}
