//! Evaluation of the fixes against the known positions

use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    coord::{GeoPoint, PixelPoint},
    projection::Projection,
    sight::{CompiledSight, Sight, SightCompiler},
    solver::{solve, Solution},
};

/// The test case: two sights taken at the known location
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fix {
    /// The label of the fix
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// The first observation
    pub sight1: Sight,
    /// The second observation
    pub sight2: Sight,
    /// Where the observations were actually made
    pub loc: GeoPoint,
}

impl Fix {
    /// Construct the unnamed fix
    pub fn new(sight1: Sight, sight2: Sight, loc: GeoPoint) -> Self {
        Self {
            name: String::new(),
            sight1,
            sight2,
            loc,
        }
    }

    /// Give the name to the fix
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// The possible position with its deviation from the known one
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Candidate {
    /// Where the candidate is on the chart
    pub pixel: PixelPoint,
    /// The candidate on the globe
    pub location: GeoPoint,
    /// How far (statute miles) the candidate is from the known position
    pub error_miles: f64,
}

/// Measures the candidates against the known position
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct FixEvaluator {
    projection: Projection,
}

impl FixEvaluator {
    /// The evaluator measuring distances on the given chart
    pub const fn new(projection: Projection) -> Self {
        Self { projection }
    }

    /// Locate every candidate on the globe and find its error, keeping the order
    pub fn evaluate(&self, candidates: &[PixelPoint], correct: GeoPoint) -> Vec<Candidate> {
        let target = self.projection.to_xy(correct);
        candidates
            .iter()
            .map(|&pixel| Candidate {
                pixel,
                location: self.projection.to_lat_lon(pixel),
                error_miles: self.projection.pixels_to_miles(pixel.distance(target)),
            })
            .collect()
    }

    /// The candidate with the smallest error, the first one on a tie
    pub fn best(candidates: &[Candidate]) -> Option<&Candidate> {
        candidates.iter().fold(None, |best, candidate| match best {
            Some(best) if best.error_miles <= candidate.error_miles => Some(best),
            Some(best) if candidate.error_miles.is_nan() => Some(best),
            _ => Some(candidate),
        })
    }
}

/// Everything computed for a single fix, ready to be displayed
#[derive(Debug, Clone, PartialEq)]
pub struct FixReport {
    /// The label of the fix
    pub name: String,
    /// The first compiled sight
    pub sight1: CompiledSight,
    /// The second compiled sight
    pub sight2: CompiledSight,
    /// The known position
    pub target: GeoPoint,
    /// The known position on the chart
    pub target_pixel: PixelPoint,
    /// The outcome of intersecting the circles
    pub solution: Solution,
    /// Every point found, in the order of the solution
    pub candidates: Vec<Candidate>,
    /// The closest candidate to the known position
    pub best: Option<Candidate>,
}

impl FixReport {
    /// Compile the sights of the fix, solve their circles and evaluate the result
    pub fn compute(fix: &Fix, compiler: &SightCompiler) -> Self {
        let projection = *compiler.projection();
        let sight1 = compiler.compile(&fix.sight1);
        let sight2 = compiler.compile(&fix.sight2);

        let solution = solve(&sight1.circle(), &sight2.circle());
        let evaluator = FixEvaluator::new(projection);
        let candidates = evaluator.evaluate(&solution.candidates(), fix.loc);
        let best = FixEvaluator::best(&candidates).copied();
        if let Some(best) = &best {
            debug!(
                "Fix {:?}: best {:#}, {:.3} mi off",
                fix.name, best.location, best.error_miles
            );
        }

        Self {
            name: fix.name.clone(),
            sight1,
            sight2,
            target: fix.loc,
            target_pixel: projection.to_xy(fix.loc),
            solution,
            candidates,
            best,
        }
    }
}
