use lazy_static::lazy_static;
use regex::Regex;

use super::errors::FormulaError;

#[derive(Debug, Clone, PartialEq)]
pub(super) enum TokenKind<'a> {
    Number(f64),
    Ident(&'a str),
    Symbol(&'a str),
}

#[derive(Debug, Clone, PartialEq)]
pub(super) struct Token<'a> {
    pub(super) kind: TokenKind<'a>,
    pub(super) offset: usize,
}

impl Token<'_> {
    pub(super) fn is_symbol(&self, symbol: &str) -> bool {
        matches!(self.kind, TokenKind::Symbol(s) if s == symbol)
    }

    pub(super) fn text(&self) -> String {
        match self.kind {
            TokenKind::Number(n) => n.to_string(),
            TokenKind::Ident(s) | TokenKind::Symbol(s) => s.to_string(),
        }
    }
}

lazy_static! {
    static ref RE_TOKEN: Regex = Regex::new(
        r"(?x)                               # enables verbose mode (to allow these comments)
        ^\s*                                      # skip the leading whitespace
        (?:
            (?P<num>(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][-+]?\d+)?)      # decimal literal with optional exponent
            | (?P<ident>[A-Za-z_$][A-Za-z0-9_$]*)                 # parameter, constant, function or keyword
            | (?P<sym>\*\*|=>|[-+*/%(),{};])                       # operators and punctuation
        )
        "
    )
    .expect("Token regex is valid");
}

/// Split the source into the tokens
pub(super) fn tokenize(source: &str) -> Result<Vec<Token<'_>>, FormulaError> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < source.len() {
        let rest = &source[pos..];
        if rest.trim_start().is_empty() {
            break;
        }

        let Some(capture) = RE_TOKEN.captures(rest) else {
            let skipped = rest.len() - rest.trim_start().len();
            let found = rest[skipped..].chars().next().unwrap_or_default();
            return Err(FormulaError::UnexpectedChar {
                offset: pos + skipped,
                found,
            });
        };

        let (kind, start) = if let Some(num) = capture.name("num") {
            (TokenKind::Number(num.as_str().parse()?), num.start())
        } else if let Some(ident) = capture.name("ident") {
            (TokenKind::Ident(ident.as_str()), ident.start())
        } else if let Some(sym) = capture.name("sym") {
            (TokenKind::Symbol(sym.as_str()), sym.start())
        } else {
            unreachable!("one of the alternatives always matches")
        };

        tokens.push(Token {
            kind,
            offset: pos + start,
        });
        pos += capture.get(0).map_or(rest.len(), |whole| whole.end());
    }

    Ok(tokens)
}
