//! Celestial sight reduction on a polar azimuthal chart.
//!
//! Every sight (right ascension, declination, observed altitude and UTC time)
//! becomes a circle of position around the body's ground point.
//! Two such circles give a fix which is compared against the known location.
//!
//! ```
//! use sight_reduction::{Chart, Fix, GeoPoint, Sight};
//!
//! let time = "2022-07-01 05:22:59.900";
//! let chart = Chart::new(vec![Fix::new(
//!     Sight::new("0 0 0", "90 0 0", "60 0 0", time),
//!     Sight::new("0 0 0", "0 0 0", "60 0 0", time),
//!     GeoPoint::new(45.0, 0.0),
//! )]);
//!
//! let report = chart.compute(0).unwrap();
//! let best = report.best.unwrap();
//! assert!((best.location.lat() - 45.0).abs() < 1e-6);
//! assert!(best.error_miles < 1e-3);
//! ```

// The list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
#![allow(unknown_lints)]
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unstable_features)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
// recommendations
#![forbid(unsafe_code)]
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub use angle::{
    degrees_to_miles, miles_to_degrees, normalize_longitude, normalize_turn, parse_angle,
    AngleNotInRange, DegreeTrig, ParseAngleError, Sexagesimal,
};
pub use chart::{Chart, Renderer};
pub use coord::{GeoPoint, PixelPoint, Pole, RotationalDirection};
pub use fix::{Candidate, Fix, FixEvaluator, FixReport};
pub use formula::{FormulaError, FormulaSlot, RadiusFormula, DEFAULT_SOURCE, MILES_PER_DEGREE};
pub use projection::{Projection, DEFAULT_SIZE};
pub use sight::{CompiledSight, Sight, SightCompiler, SightError, SightField};
pub use solver::{intersections, solve, Circle, Solution};
pub use time::{
    aries_gha, parse_utc, ParseTimeError, SiderealModel, NULL_ARIES_GHA_MS, SIDEREAL_DAY_MS,
};

mod angle;
mod chart;
mod coord;
mod fix;
mod formula;
mod projection;
mod report;
mod sight;
mod solver;
mod time;
mod utils;
