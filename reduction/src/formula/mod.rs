//! The altitude-to-radius formula: how far (in statute miles) from the ground point
//! the observer stands, given the observed altitude of the body (degrees).
//!
//! The formula can be replaced at runtime with a source text of a one-argument function,
//! e.g. `(hs) => (90 - hs)*69.05`. The source is parsed into an arithmetic expression,
//! nothing is executed.

use std::{fmt, str::FromStr, sync::Arc};

use lazy_static::lazy_static;
use log::{info, warn};
use parking_lot::RwLock;

pub use self::errors::FormulaError;
use self::{
    expr::{Lambda, Parser},
    lexer::tokenize,
};

mod errors;
mod expr;
mod lexer;

/// Statute miles in a degree of a great circle, as used by the default formula
pub const MILES_PER_DEGREE: f64 = 69.05;

/// The source of the default formula: every degree of the zenith distance is `69.05` miles
pub const DEFAULT_SOURCE: &str = "(hs) => {\n    return (90 - hs)*69.05;\n}";

type NativeFn = dyn Fn(f64) -> f64 + Send + Sync;

#[derive(Clone)]
enum Strategy {
    Expression(Lambda),
    Native(Arc<NativeFn>),
}

/// The strategy to convert the observed altitude into the radius of the sight circle
#[derive(Clone)]
pub struct RadiusFormula {
    source: String,
    strategy: Strategy,
}

impl RadiusFormula {
    /// Parse the source text of a one-argument function.
    ///
    /// # Errors
    /// When the source is not a valid expression of the single variable.
    pub fn parse(source: &str) -> Result<Self, FormulaError> {
        let lambda = Parser::new(tokenize(source)?).parse()?;
        Ok(Self {
            source: source.to_string(),
            strategy: Strategy::Expression(lambda),
        })
    }

    /// Wrap the Rust function. The description is used as the source text.
    pub fn native<F>(description: impl Into<String>, f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self {
            source: description.into(),
            strategy: Strategy::Native(Arc::new(f)),
        }
    }

    /// The radius (statute miles) of the sight circle for the observed altitude (degrees)
    pub fn miles(&self, hs: f64) -> f64 {
        match &self.strategy {
            Strategy::Expression(lambda) => lambda.body.eval(hs),
            Strategy::Native(f) => f(hs),
        }
    }

    /// The text the formula was created from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The name of the variable of the parsed formula
    pub fn parameter(&self) -> Option<&str> {
        match &self.strategy {
            Strategy::Expression(lambda) => Some(&lambda.param),
            Strategy::Native(_) => None,
        }
    }
}

impl Default for RadiusFormula {
    fn default() -> Self {
        Self::parse(DEFAULT_SOURCE).expect("The default formula is valid")
    }
}

impl FromStr for RadiusFormula {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for RadiusFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.strategy {
            Strategy::Expression(_) => "expression",
            Strategy::Native(_) => "native",
        };
        f.debug_struct("RadiusFormula")
            .field("kind", &kind)
            .field("source", &self.source)
            .finish()
    }
}

impl fmt::Display for RadiusFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// The single place holding the current formula.
///
/// Readers take a snapshot, so whatever was computed with the previous formula
/// stays untouched after a replacement.
#[derive(Debug)]
pub struct FormulaSlot {
    current: RwLock<Arc<RadiusFormula>>,
}

lazy_static! {
    static ref GLOBAL: Arc<FormulaSlot> = Arc::new(FormulaSlot::default());
}

impl Default for FormulaSlot {
    fn default() -> Self {
        Self::new(RadiusFormula::default())
    }
}

impl FormulaSlot {
    /// The slot holding the given formula
    pub fn new(formula: RadiusFormula) -> Self {
        Self {
            current: RwLock::new(Arc::new(formula)),
        }
    }

    /// The process-wide slot
    pub fn global() -> Arc<Self> {
        Arc::clone(&GLOBAL)
    }

    /// Snapshot of the current formula
    pub fn current(&self) -> Arc<RadiusFormula> {
        Arc::clone(&*self.current.read())
    }

    /// Put the formula into the slot unconditionally, returning the previous one
    pub fn set(&self, formula: RadiusFormula) -> Arc<RadiusFormula> {
        let mut current = self.current.write();
        std::mem::replace(&mut *current, Arc::new(formula))
    }

    /// Parse the source and commit it only when it is valid.
    ///
    /// # Errors
    /// The source is rejected, the previous formula stays in effect.
    pub fn replace(&self, source: &str) -> Result<Arc<RadiusFormula>, FormulaError> {
        match RadiusFormula::parse(source) {
            Ok(formula) => {
                info!("Radius formula replaced with {:?}", formula.source());
                let formula = Arc::new(formula);
                *self.current.write() = Arc::clone(&formula);
                Ok(formula)
            }
            Err(err) => {
                warn!("{err}, keeping the previous radius formula");
                Err(err)
            }
        }
    }
}
