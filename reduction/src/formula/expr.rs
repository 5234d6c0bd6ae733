//! Arithmetic expressions over a single variable

use std::f64::consts::PI;

use crate::angle::DegreeTrig;

use super::{
    errors::FormulaError,
    lexer::{Token, TokenKind},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(super) enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

impl BinaryOp {
    fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
            Self::Rem => lhs % rhs,
            Self::Pow => lhs.powf(rhs),
        }
    }
}

/// The functions available to the formula, trigonometry works in degrees
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(super) enum Function {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sqrt,
    Abs,
    Min,
    Max,
    Pow,
}

impl Function {
    fn from_name(name: &str) -> Option<Self> {
        let function = match name {
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "tan" => Self::Tan,
            "asin" => Self::Asin,
            "acos" => Self::Acos,
            "atan" => Self::Atan,
            "sqrt" => Self::Sqrt,
            "abs" => Self::Abs,
            "min" => Self::Min,
            "max" => Self::Max,
            "pow" => Self::Pow,
            _ => return None,
        };
        Some(function)
    }

    const fn arity(self) -> usize {
        match self {
            Self::Min | Self::Max | Self::Pow => 2,
            _ => 1,
        }
    }

    fn apply(self, args: &[f64]) -> f64 {
        let x = args[0];
        match self {
            Self::Sin => x.sin_deg(),
            Self::Cos => x.cos_deg(),
            Self::Tan => x.tan_deg(),
            Self::Asin => x.asin_deg(),
            Self::Acos => x.acos_deg(),
            Self::Atan => x.atan_deg(),
            Self::Sqrt => x.sqrt(),
            Self::Abs => x.abs(),
            Self::Min => x.min(args[1]),
            Self::Max => x.max(args[1]),
            Self::Pow => x.powf(args[1]),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(super) enum Expr {
    Number(f64),
    Variable,
    Negate(Box<Expr>),
    Binary(Box<Expr>, BinaryOp, Box<Expr>),
    Call(Function, Vec<Expr>),
}

impl Expr {
    pub(super) fn eval(&self, var: f64) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Variable => var,
            Self::Negate(inner) => -inner.eval(var),
            Self::Binary(lhs, op, rhs) => op.apply(lhs.eval(var), rhs.eval(var)),
            Self::Call(function, args) => {
                let values: Vec<_> = args.iter().map(|arg| arg.eval(var)).collect();
                function.apply(&values)
            }
        }
    }
}

/// The parsed one-argument function
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Lambda {
    pub(super) param: String,
    pub(super) body: Expr,
}

/// Recursive descent parser of the formula:
///
/// ```text
/// source  := header? body
/// header  := IDENT '=>' | '(' IDENT ')' '=>'
/// body    := '{' 'return' expr ';'? '}' | expr ';'?
/// expr    := term (('+' | '-') term)*
/// term    := unary (('*' | '/' | '%') unary)*
/// unary   := ('-' | '+') signed | power
/// signed  := unary | primary           (not followed by '**')
/// power   := primary ('**' unary)?
/// primary := NUMBER | IDENT | IDENT '(' args ')' | '(' expr ')'
/// ```
///
/// Both the nesting and the chains of binary operators are limited
/// by [`Parser::MAX_DEPTH`], so the evaluation never runs out of stack.
pub(super) struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
    param: &'a str,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// The name of the variable when the header is omitted
    pub(super) const DEFAULT_PARAM: &'static str = "hs";

    /// The deepest expression tree accepted
    pub(super) const MAX_DEPTH: usize = 256;

    pub(super) fn new(tokens: Vec<Token<'a>>) -> Self {
        Self {
            tokens,
            pos: 0,
            param: Self::DEFAULT_PARAM,
            depth: 0,
        }
    }

    pub(super) fn parse(mut self) -> Result<Lambda, FormulaError> {
        if self.tokens.is_empty() {
            return Err(FormulaError::Empty);
        }

        self.header();
        let body = if self.eat_symbol("{") {
            self.expect_keyword("return")?;
            let body = self.expr()?;
            let _ = self.eat_symbol(";");
            self.expect_symbol("}")?;
            body
        } else {
            let body = self.expr()?;
            let _ = self.eat_symbol(";");
            body
        };

        if let Some(token) = self.peek() {
            return Err(unexpected(token));
        }

        Ok(Lambda {
            param: self.param.to_string(),
            body,
        })
    }

    fn header(&mut self) {
        if let (Some(name), true) = (self.ident_at(0), self.symbol_at(1, "=>")) {
            self.param = name;
            self.pos = 2;
        } else if self.symbol_at(0, "(") && self.symbol_at(2, ")") && self.symbol_at(3, "=>") {
            if let Some(name) = self.ident_at(1) {
                self.param = name;
                self.pos = 4;
            }
        }
    }

    fn ident_at(&self, i: usize) -> Option<&'a str> {
        match self.tokens.get(i)?.kind {
            TokenKind::Ident(name) => Some(name),
            _ => None,
        }
    }

    fn symbol_at(&self, i: usize, symbol: &str) -> bool {
        self.tokens
            .get(i)
            .map_or(false, |token| token.is_symbol(symbol))
    }

    fn peek(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Result<Token<'a>, FormulaError> {
        let token = self
            .tokens
            .get(self.pos)
            .cloned()
            .ok_or(FormulaError::UnexpectedEnd)?;
        self.pos += 1;
        Ok(token)
    }

    /// One more level of the tree, failing past the limit
    fn descend(&mut self) -> Result<(), FormulaError> {
        self.depth += 1;
        if self.depth > Self::MAX_DEPTH {
            let offset = self
                .peek()
                .or_else(|| self.tokens.last())
                .map_or(0, |token| token.offset);
            return Err(FormulaError::TooDeep { offset });
        }
        Ok(())
    }

    fn eat_symbol(&mut self, symbol: &str) -> bool {
        if self.peek().map_or(false, |token| token.is_symbol(symbol)) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect_symbol(&mut self, symbol: &str) -> Result<(), FormulaError> {
        let token = self.advance()?;
        if token.is_symbol(symbol) {
            Ok(())
        } else {
            Err(unexpected(&token))
        }
    }

    fn expect_keyword(&mut self, keyword: &str) -> Result<(), FormulaError> {
        let token = self.advance()?;
        match token.kind {
            TokenKind::Ident(name) if name == keyword => Ok(()),
            _ => Err(unexpected(&token)),
        }
    }

    fn expr(&mut self) -> Result<Expr, FormulaError> {
        let base = self.depth;
        let mut lhs = self.term()?;
        loop {
            let op = if self.eat_symbol("+") {
                BinaryOp::Add
            } else if self.eat_symbol("-") {
                BinaryOp::Sub
            } else {
                self.depth = base;
                return Ok(lhs);
            };
            self.descend()?;
            let rhs = self.term()?;
            lhs = Expr::Binary(Box::new(lhs), op, Box::new(rhs));
        }
    }

    fn term(&mut self) -> Result<Expr, FormulaError> {
        let base = self.depth;
        let mut lhs = self.unary()?;
        loop {
            let op = if self.eat_symbol("*") {
                BinaryOp::Mul
            } else if self.eat_symbol("/") {
                BinaryOp::Div
            } else if self.eat_symbol("%") {
                BinaryOp::Rem
            } else {
                self.depth = base;
                return Ok(lhs);
            };
            self.descend()?;
            let rhs = self.unary()?;
            lhs = Expr::Binary(Box::new(lhs), op, Box::new(rhs));
        }
    }

    fn unary(&mut self) -> Result<Expr, FormulaError> {
        self.descend()?;
        let expr = if self.eat_symbol("-") {
            Expr::Negate(Box::new(self.signed()?))
        } else if self.eat_symbol("+") {
            self.signed()?
        } else {
            self.power()?
        };
        self.depth -= 1;
        Ok(expr)
    }

    /// The operand of a sign: `-2 ** 2` is ambiguous and rejected, `(-2) ** 2` is fine
    fn signed(&mut self) -> Result<Expr, FormulaError> {
        let operand = if self.symbol_at(self.pos, "-") || self.symbol_at(self.pos, "+") {
            self.unary()?
        } else {
            self.primary()?
        };
        match self.peek() {
            Some(token) if token.is_symbol("**") => Err(unexpected(token)),
            _ => Ok(operand),
        }
    }

    fn power(&mut self) -> Result<Expr, FormulaError> {
        let base = self.primary()?;
        if self.eat_symbol("**") {
            // right associative: 2 ** 3 ** 2 == 2 ** 9
            let exponent = self.unary()?;
            return Ok(Expr::Binary(
                Box::new(base),
                BinaryOp::Pow,
                Box::new(exponent),
            ));
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<Expr, FormulaError> {
        let token = self.advance()?;
        match token.kind {
            TokenKind::Number(n) => Ok(Expr::Number(n)),
            TokenKind::Symbol("(") => {
                let inner = self.expr()?;
                self.expect_symbol(")")?;
                Ok(inner)
            }
            TokenKind::Ident(name) if name == self.param => Ok(Expr::Variable),
            TokenKind::Ident("PI") => Ok(Expr::Number(PI)),
            TokenKind::Ident(name) => {
                let function =
                    Function::from_name(name).ok_or_else(|| FormulaError::UnknownIdentifier {
                        offset: token.offset,
                        name: name.to_string(),
                    })?;
                self.expect_symbol("(")?;
                let args = self.args()?;
                if args.len() != function.arity() {
                    return Err(FormulaError::Arity {
                        offset: token.offset,
                        name: name.to_string(),
                        expected: function.arity(),
                        found: args.len(),
                    });
                }
                Ok(Expr::Call(function, args))
            }
            TokenKind::Symbol(_) => Err(unexpected(&token)),
        }
    }

    /// Comma separated arguments after the opening parenthesis
    fn args(&mut self) -> Result<Vec<Expr>, FormulaError> {
        let mut args = Vec::new();
        if self.eat_symbol(")") {
            return Ok(args);
        }
        loop {
            args.push(self.expr()?);
            if self.eat_symbol(")") {
                return Ok(args);
            }
            self.expect_symbol(",")?;
        }
    }
}

fn unexpected(token: &Token<'_>) -> FormulaError {
    FormulaError::UnexpectedToken {
        offset: token.offset,
        found: token.text(),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::{super::lexer::tokenize, *};

    fn parse(source: &str) -> Result<Lambda, FormulaError> {
        Parser::new(tokenize(source)?).parse()
    }

    fn eval(source: &str, var: f64) -> f64 {
        parse(source).unwrap().body.eval(var)
    }

    #[test]
    fn precedence() {
        assert_eq!(eval("1 + 2 * 3", 0.0), 7.0);
        assert_eq!(eval("(1 + 2) * 3", 0.0), 9.0);
        assert_eq!(eval("10 - 4 - 3", 0.0), 3.0);
        assert_eq!(eval("2 ** 3 ** 2", 0.0), 512.0);
        assert_eq!(eval("(-2) ** 2", 0.0), 4.0);
        assert_eq!(eval("2 ** -2", 0.0), 0.25);
        assert_eq!(eval("- -3", 0.0), 3.0);
        assert_eq!(eval("7 % 4 * 2", 0.0), 6.0);
    }

    #[test]
    fn bare_expression_uses_hs() {
        let lambda = parse("(90 - hs)*69.05").unwrap();
        assert_eq!(lambda.param, "hs");
        assert_abs_diff_eq!(lambda.body.eval(60.0), 2071.5, epsilon = 1e-9);
    }

    #[test]
    fn arrow_headers() {
        assert_eq!(eval("alt => 90 - alt", 30.0), 60.0);
        assert_eq!(eval("(h) => h * 2", 4.0), 8.0);
        assert_eq!(eval("(hs) => {\n    return (90 - hs)*60;\n}", 89.0), 60.0);
        assert_eq!(eval("(hs) => { return hs }", 1.5), 1.5);
    }

    #[test]
    fn functions_in_degrees() {
        assert_abs_diff_eq!(eval("sin(hs)", 30.0), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(eval("acos(0.5)", 0.0), 60.0, epsilon = 1e-9);
        assert_eq!(eval("max(hs, 3) + min(hs, 3)", 10.0), 13.0);
        assert_eq!(eval("pow(2, 10) + sqrt(16) + abs(-1)", 0.0), 1029.0);
        assert_abs_diff_eq!(eval("PI", 0.0), PI);
    }

    #[test]
    fn parameter_shadows_nothing_else() {
        let err = parse("(alt) => (90 - hs)*69.05").unwrap_err();
        assert_eq!(
            err,
            FormulaError::UnknownIdentifier {
                offset: 15,
                name: "hs".into()
            }
        );
    }

    #[test]
    fn syntax_errors() {
        assert_eq!(parse("").unwrap_err(), FormulaError::Empty);
        assert_eq!(parse("(90 - hs").unwrap_err(), FormulaError::UnexpectedEnd);
        assert_eq!(
            parse("90 hs").unwrap_err(),
            FormulaError::UnexpectedToken {
                offset: 3,
                found: "hs".into()
            }
        );
        assert_eq!(
            parse("(hs) => { (90 - hs) }").unwrap_err(),
            FormulaError::UnexpectedToken {
                offset: 10,
                found: "(".into()
            }
        );
        assert!(parse("hs * * 2").is_err());
    }

    #[test]
    fn arity() {
        assert_eq!(
            parse("sin(1, 2)").unwrap_err(),
            FormulaError::Arity {
                offset: 0,
                name: "sin".into(),
                expected: 1,
                found: 2
            }
        );
        assert!(parse("max()").is_err());
    }

    #[test]
    fn function_needs_call() {
        assert!(parse("sin + 1").is_err());
    }

    #[test]
    fn sign_before_power_is_ambiguous() {
        assert_eq!(
            parse("-2 ** 2").unwrap_err(),
            FormulaError::UnexpectedToken {
                offset: 3,
                found: "**".into()
            }
        );
        assert!(parse("90 - -hs ** 2").is_err());
        assert!(parse("+hs ** 2").is_err());
    }

    #[test]
    fn nesting_is_limited() {
        let depth = Parser::MAX_DEPTH / 2;
        let nested = format!("{}hs{}", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(eval(&nested, 3.0), 3.0);

        let err = parse(&"(".repeat(200_000)).unwrap_err();
        assert!(matches!(err, FormulaError::TooDeep { .. }), "{err:?}");

        let calls = format!("{}hs{}", "abs(".repeat(100_000), ")".repeat(100_000));
        assert!(matches!(parse(&calls).unwrap_err(), FormulaError::TooDeep { .. }));

        let signs = format!("{}hs", "-".repeat(100_000));
        assert!(matches!(parse(&signs).unwrap_err(), FormulaError::TooDeep { .. }));
    }

    #[test]
    fn long_chains_are_limited() {
        let short = vec!["hs"; 100].join(" + ");
        assert_eq!(eval(&short, 1.0), 100.0);

        let long = vec!["hs"; 100_000].join(" * ");
        assert!(matches!(parse(&long).unwrap_err(), FormulaError::TooDeep { .. }));
    }
}
