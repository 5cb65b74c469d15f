use super::token::{Token, TokenKind};

/// Scanner for a single V source line
///
/// One left-to-right pass, no backtracking. Scanning never fails:
/// characters the scanner cannot classify become [`TokenKind::Unknown`]
/// tokens, deferring rejection to semantic analysis.
pub struct Scanner {
    /// Source line as character vector
    source: Vec<char>,
    /// Accumulated tokens
    tokens: Vec<Token>,
    /// Start position of current token
    start: usize,
    /// Current position in source
    current: usize,
}

impl Scanner {
    /// Creates a new scanner from a source line
    pub fn new(source: &str) -> Self {
        Scanner {
            source: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
        }
    }

    /// Scans all tokens from the line and returns them as a vector
    pub fn scan_tokens(&mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }
        std::mem::take(&mut self.tokens)
    }

    fn scan_token(&mut self) {
        let c = self.advance();

        match c {
            // Whitespace is skipped and never emitted as a token
            c if c.is_whitespace() => {}

            // A maximal run of letters becomes one word token
            c if c.is_alphabetic() => {
                while self.peek().is_alphabetic() {
                    self.advance();
                }
                let word: String = self.source[self.start..self.current].iter().collect();
                self.tokens.push(Token::word(&word));
            }

            // Operators
            '+' | '-' | '*' | '/' => self.add_token(TokenKind::Operator),

            // Assignment symbol
            '=' => self.add_token(TokenKind::Assign),

            // Separator
            ',' => self.add_token(TokenKind::Separator),

            // Everything else is captured, not rejected
            _ => self.add_token(TokenKind::Unknown),
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        c
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    fn add_token(&mut self, kind: TokenKind) {
        let lexeme: String = self.source[self.start..self.current].iter().collect();
        self.tokens.push(Token::new(kind, lexeme));
    }
}
