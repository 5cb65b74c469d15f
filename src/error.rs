//! Error types for the V compiler pipeline

use thiserror::Error;

/// Errors produced by the line gate and the pipeline stages
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Line-gate errors (checked before any stage runs, in this order)
    /// Misspelled reserved word detected in the raw line
    ///
    /// **Triggered by:** the substring `WRITEE` anywhere in the line
    #[error("Lexical error: misspelled keyword")]
    MisspelledKeyword,

    /// Forbidden character present in the raw line
    ///
    /// **Triggered by:** any of `%`, `$`, `&`, `<`, `>`
    #[error("Semantic error: invalid symbol '{symbol}'")]
    InvalidSymbol {
        /// The offending character
        symbol: char,
    },

    /// Two adjacent operators forming an illegal combination
    ///
    /// **Triggered by:** any of the substrings `+*`, `-/`, `*/`, `*+`
    #[error("Syntax error: illegal operator combination '{pair}'")]
    IllegalOperatorCombination {
        /// The offending two-character substring
        pair: &'static str,
    },

    /// Statement terminated with a semicolon (V statements are unterminated)
    #[error("Syntax error: semicolon at end not allowed")]
    TrailingSemicolon,

    /// Decimal digit in the line (V has no numeric literals)
    #[error("Syntax error: numbers not allowed")]
    NumericLiteral,

    // Parser errors
    /// Grammar violation with a human-readable reason
    #[error("Syntax error: {0}")]
    Grammar(String),

    // Semantic-checker errors
    /// Identifier containing a non-letter character
    ///
    /// Unreachable after the lexer's letter-run rule, but the checker
    /// verifies it explicitly anyway.
    #[error("Semantic error: invalid identifier '{name}'")]
    InvalidIdentifier {
        /// The offending identifier text
        name: String,
    },

    /// Unclassifiable token survived lexing
    #[error("Semantic error: unknown token '{lexeme}'")]
    UnknownToken {
        /// The offending token text
        lexeme: String,
    },
}

/// Pipeline phase an error is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Lexical analysis (including the gate's misspelling rule)
    Lexical,
    /// Syntax analysis (including the gate's operator/semicolon/digit rules)
    Syntax,
    /// Semantic analysis (including the gate's symbol rule)
    Semantic,
}

impl Error {
    /// Create a grammar-violation error with a message
    pub fn grammar(msg: impl Into<String>) -> Self {
        Error::Grammar(msg.into())
    }

    /// Classify the error by the pipeline phase it belongs to
    pub fn phase(&self) -> Phase {
        match self {
            Error::MisspelledKeyword => Phase::Lexical,

            Error::InvalidSymbol { .. }
            | Error::InvalidIdentifier { .. }
            | Error::UnknownToken { .. } => Phase::Semantic,

            Error::IllegalOperatorCombination { .. }
            | Error::TrailingSemicolon
            | Error::NumericLiteral
            | Error::Grammar(_) => Phase::Syntax,
        }
    }
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_classification() {
        assert_eq!(Error::MisspelledKeyword.phase(), Phase::Lexical);
        assert_eq!(Error::InvalidSymbol { symbol: '%' }.phase(), Phase::Semantic);
        assert_eq!(Error::TrailingSemicolon.phase(), Phase::Syntax);
        assert_eq!(Error::grammar("expected identifier").phase(), Phase::Syntax);
        assert_eq!(
            Error::UnknownToken {
                lexeme: "?".to_string()
            }
            .phase(),
            Phase::Semantic
        );
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::NumericLiteral.to_string(),
            "Syntax error: numbers not allowed"
        );
        assert_eq!(
            Error::InvalidSymbol { symbol: '$' }.to_string(),
            "Semantic error: invalid symbol '$'"
        );
    }
}
