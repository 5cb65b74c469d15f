//! Line-level pre-filter applied before lexical analysis
//!
//! The gate rejects clearly malformed lines outright so the pipeline never
//! runs on them. Rules are evaluated in a fixed priority order and the
//! first match wins, which keeps diagnostics deterministic when a line
//! violates several rules at once.

use crate::error::{Error, Result};

/// Characters V never allows anywhere in a line
const FORBIDDEN_SYMBOLS: [char; 5] = ['%', '$', '&', '<', '>'];

/// Adjacent operator pairs that can never appear in a valid expression
const ILLEGAL_OPERATOR_PAIRS: [&str; 4] = ["+*", "-/", "*/", "*+"];

/// Screens a raw source line, returning the first matching rejection.
///
/// Priority order:
/// 1. `WRITEE` substring (misspelled keyword)
/// 2. forbidden symbol (`%`, `$`, `&`, `<`, `>`)
/// 3. illegal operator combination (`+*`, `-/`, `*/`, `*+`)
/// 4. trailing semicolon
/// 5. any decimal digit
///
/// No side effects; a rejection here means no pipeline stage runs for the
/// line.
pub fn screen(line: &str) -> Result<()> {
    if line.contains("WRITEE") {
        return Err(Error::MisspelledKeyword);
    }

    if let Some(symbol) = line.chars().find(|c| FORBIDDEN_SYMBOLS.contains(c)) {
        return Err(Error::InvalidSymbol { symbol });
    }

    for pair in ILLEGAL_OPERATOR_PAIRS {
        if line.contains(pair) {
            return Err(Error::IllegalOperatorCombination { pair });
        }
    }

    if line.trim().ends_with(';') {
        return Err(Error::TrailingSemicolon);
    }

    if line.chars().any(|c| c.is_ascii_digit()) {
        return Err(Error::NumericLiteral);
    }

    Ok(())
}
