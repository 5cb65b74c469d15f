use serde::{Deserialize, Serialize};
use std::fmt;

/// Reserved words of the V language
const KEYWORDS: [&str; 6] = ["BEGIN", "INTEGER", "LET", "INPUT", "WRITE", "END"];

/// A single token from a source line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The class of token
    pub kind: TokenKind,
    /// Original text of the token
    pub lexeme: String,
}

impl Token {
    /// Creates a new token with the given class and text
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
        }
    }

    /// Classifies a maximal letter run.
    ///
    /// Only multi-letter words matching the reserved set become
    /// [`TokenKind::Keyword`]; every other letter run, single letters
    /// included, is an identifier.
    pub fn word(text: &str) -> Self {
        if text.chars().count() > 1 && KEYWORDS.contains(&text) {
            Token::new(TokenKind::Keyword, text)
        } else {
            Token::new(TokenKind::Identifier, text)
        }
    }

    /// Check whether this token is a specific keyword
    pub fn is_keyword(&self, word: &str) -> bool {
        self.kind == TokenKind::Keyword && self.lexeme == word
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{} : {}]", self.kind, self.lexeme)
    }
}

/// All token classes in V
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    /// Reserved word (BEGIN, INTEGER, LET, INPUT, WRITE, END)
    Keyword,
    /// Letter run that is not a reserved word
    Identifier,
    /// Arithmetic operator (+, -, *, /)
    Operator,
    /// Assignment symbol (=)
    Assign,
    /// Comma separator
    Separator,
    /// Any character the lexer cannot classify
    Unknown,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Separator => "SEPARATOR",
            TokenKind::Unknown => "UNKNOWN",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_classification() {
        assert_eq!(Token::word("LET").kind, TokenKind::Keyword);
        assert_eq!(Token::word("WRITE").kind, TokenKind::Keyword);
        assert_eq!(Token::word("INTEGER").kind, TokenKind::Keyword);
    }

    #[test]
    fn test_single_letters_are_identifiers() {
        // Single letters never classify as keywords, even prefix matches
        assert_eq!(Token::word("A").kind, TokenKind::Identifier);
        assert_eq!(Token::word("a").kind, TokenKind::Identifier);
    }

    #[test]
    fn test_non_keyword_words_are_identifiers() {
        assert_eq!(Token::word("temp").kind, TokenKind::Identifier);
        assert_eq!(Token::word("WRITEE").kind, TokenKind::Identifier);
        assert_eq!(Token::word("let").kind, TokenKind::Identifier);
    }

    #[test]
    fn test_display() {
        let token = Token::word("LET");
        assert_eq!(token.to_string(), "[KEYWORD : LET]");
        assert_eq!(Token::word("a").to_string(), "[IDENTIFIER : a]");
    }
}
