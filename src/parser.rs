//! Syntax analysis: validates a token sequence against the V assignment
//! grammar
//!
//! ```text
//! assignment := [ "LET" ] identifier "=" expression
//! expression := factor { operator factor }
//! factor     := identifier
//! ```
//!
//! The grammar is LL(1); a single left-to-right pass with an explicit
//! cursor suffices. The parser only validates — it builds no tree, and
//! downstream stages re-scan the flat token sequence.

use crate::error::{Error, Result};
use crate::lexer::{Token, TokenKind};

/// Recursive-descent validator for a single assignment statement
pub struct Parser<'a> {
    tokens: &'a [Token],
    current: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser over a token sequence
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser { tokens, current: 0 }
    }

    /// Validates the whole sequence as one assignment statement.
    ///
    /// Returns `Ok(())` on acceptance; any leftover tokens after a
    /// complete expression are an error.
    pub fn parse(&mut self) -> Result<()> {
        // Optional leading LET keyword
        if self.peek().is_some_and(|t| t.is_keyword("LET")) {
            self.advance();
        }

        if !self.check(TokenKind::Identifier) {
            return Err(Error::grammar("expected identifier in assignment"));
        }
        self.advance();

        if !self.check(TokenKind::Assign) {
            return Err(Error::grammar("expected '=' in assignment"));
        }
        self.advance();

        self.parse_expression()?;

        if !self.is_at_end() {
            return Err(Error::grammar(
                "unexpected tokens after assignment expression",
            ));
        }
        Ok(())
    }

    /// expression := factor { operator factor }
    fn parse_expression(&mut self) -> Result<()> {
        self.parse_factor()?;
        while self.check(TokenKind::Operator) {
            self.advance();
            self.parse_factor()?;
        }
        Ok(())
    }

    /// factor := identifier
    fn parse_factor(&mut self) -> Result<()> {
        if !self.check(TokenKind::Identifier) {
            return Err(Error::grammar("expected identifier in expression"));
        }
        self.advance();
        Ok(())
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.current)
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.kind == kind)
    }

    fn advance(&mut self) {
        self.current += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Scanner;

    fn parse(source: &str) -> Result<()> {
        let tokens = Scanner::new(source).scan_tokens();
        Parser::new(&tokens).parse()
    }

    #[test]
    fn test_assignment_with_let() {
        assert!(parse("LET G = a + c").is_ok());
    }

    #[test]
    fn test_assignment_without_let() {
        assert!(parse("M = A/B+C").is_ok());
        assert!(parse("N = G/H-I+a*B/c").is_ok());
    }

    #[test]
    fn test_single_factor_expression() {
        assert!(parse("x = y").is_ok());
    }

    #[test]
    fn test_missing_assign_symbol() {
        assert_eq!(
            parse("LET G a + c"),
            Err(Error::grammar("expected '=' in assignment"))
        );
    }

    #[test]
    fn test_missing_lhs_identifier() {
        assert_eq!(
            parse("LET = a + c"),
            Err(Error::grammar("expected identifier in assignment"))
        );
        // A keyword statement is not an assignment
        assert_eq!(
            parse("WRITE M"),
            Err(Error::grammar("expected identifier in assignment"))
        );
    }

    #[test]
    fn test_dangling_operator() {
        assert_eq!(
            parse("x = a +"),
            Err(Error::grammar("expected identifier in expression"))
        );
    }

    #[test]
    fn test_leftover_tokens_rejected() {
        assert_eq!(
            parse("x = a , b"),
            Err(Error::grammar("unexpected tokens after assignment expression"))
        );
    }

    #[test]
    fn test_empty_sequence_rejected() {
        assert!(parse("").is_err());
    }

    #[test]
    fn test_declaration_line_rejected() {
        // INTEGER is a keyword but not LET, so no identifier follows
        assert!(parse("INTEGER A, B, C").is_err());
    }
}
