//! Astronomical sightings and their circles of equal altitude

use std::{error::Error, fmt, sync::Arc};

use log::{debug, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    angle::{
        consts::DEGREES_IN_HOUR, miles_to_degrees, normalize_longitude, parse_angle,
        ParseAngleError, Sexagesimal,
    },
    coord::{GeoPoint, PixelPoint},
    enum_trivial_from_impl,
    formula::RadiusFormula,
    projection::Projection,
    solver::Circle,
    time::{parse_utc, ParseTimeError, SiderealModel},
};

/// Single observation of a celestial body
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sight {
    /// The name of the body, only used in the reports
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Right ascension in hours, minutes and seconds (`"18 37 42.4"`)
    pub ra: String,
    /// Declination in degrees, minutes and seconds (`"38 48 18.8"`)
    pub dec: String,
    /// Observed altitude in degrees, minutes and seconds (`"51 6 0"`)
    pub alt: String,
    /// UTC instant of the observation (`"2022-07-04 03:12:45"`)
    pub time: String,
}

impl Sight {
    /// Construct the unnamed sight
    pub fn new(
        ra: impl Into<String>,
        dec: impl Into<String>,
        alt: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            name: String::new(),
            ra: ra.into(),
            dec: dec.into(),
            alt: alt.into(),
            time: time.into(),
        }
    }

    /// Give the name to the sight
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// The field of the [`Sight`] which failed to parse
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum SightField {
    RightAscension,
    Declination,
    Altitude,
}

impl fmt::Display for SightField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::RightAscension => "right ascension",
            Self::Declination => "declination",
            Self::Altitude => "altitude",
        };
        write!(f, "{name}")
    }
}

/// The sight cannot be compiled in the strict mode
#[derive(Debug, Clone, PartialEq)]
pub enum SightError {
    /// One of the angles is malformed
    Angle(SightField, ParseAngleError),
    /// The time is malformed
    Time(ParseTimeError),
}

enum_trivial_from_impl!(ParseTimeError => SightError:Time);

impl fmt::Display for SightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid sight: ")?;
        match self {
            Self::Angle(field, inner) => write!(f, "{field}: {inner}"),
            Self::Time(inner) => write!(f, "{inner}"),
        }
    }
}

impl Error for SightError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Angle(_, inner) => Some(inner),
            Self::Time(inner) => Some(inner),
        }
    }
}

/// The circle of equal altitude derived from a [`Sight`].
///
/// Created once by the [`SightCompiler`] and never changed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledSight {
    sight: Sight,
    gha: f64,
    hs: f64,
    gp: GeoPoint,
    center: PixelPoint,
    radius: f64,
    mi_rad: f64,
    deg_rad: f64,
}

impl CompiledSight {
    /// The original observation
    pub fn sight(&self) -> &Sight {
        &self.sight
    }

    /// GHA of Aries at the moment of observation (degrees)
    pub fn aries_gha(&self) -> f64 {
        self.gha
    }

    /// Observed altitude (decimal degrees)
    pub fn hs(&self) -> f64 {
        self.hs
    }

    /// The ground point of the body
    pub fn gp(&self) -> GeoPoint {
        self.gp
    }

    /// The projected ground point
    pub fn center(&self) -> PixelPoint {
        self.center
    }

    /// Radius of the circle on the chart (pixels)
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Radius of the circle in statute miles
    pub fn miles_radius(&self) -> f64 {
        self.mi_rad
    }

    /// Radius of the circle in degrees of a great circle
    pub fn degrees_radius(&self) -> f64 {
        self.deg_rad
    }

    /// The circle on the chart
    pub fn circle(&self) -> Circle {
        Circle::new(self.center, self.radius)
    }
}

/// Turns the observations into the circles on the chart
#[derive(Debug, Clone)]
pub struct SightCompiler {
    projection: Projection,
    model: SiderealModel,
    formula: Arc<RadiusFormula>,
}

impl Default for SightCompiler {
    fn default() -> Self {
        Self::new(
            Projection::default(),
            SiderealModel::default(),
            Arc::new(RadiusFormula::default()),
        )
    }
}

impl SightCompiler {
    /// The compiler using the given chart, Earth rotation model and the snapshot of the formula
    pub fn new(projection: Projection, model: SiderealModel, formula: Arc<RadiusFormula>) -> Self {
        Self {
            projection,
            model,
            formula,
        }
    }

    /// The chart the circles are projected onto
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// The formula converting the altitudes into the radii
    pub fn formula(&self) -> &RadiusFormula {
        &self.formula
    }

    /// Compile the sight in the best-effort manner:
    /// a malformed angle or time produces NaN in every dependent value.
    pub fn compile(&self, sight: &Sight) -> CompiledSight {
        let gha = match parse_utc(&sight.time) {
            Ok(at) => self.model.aries_gha(at),
            Err(err) => {
                debug!("{err}, the ground point of {:?} is undefined", sight.name);
                f64::NAN
            }
        };

        self.build(
            sight,
            gha,
            parse_angle(&sight.ra),
            parse_angle(&sight.dec),
            parse_angle(&sight.alt),
        )
    }

    /// Compile the sight validating every field first.
    ///
    /// # Errors
    /// The angle is not in the `"D M S"` notation or the time is malformed.
    pub fn try_compile(&self, sight: &Sight) -> Result<CompiledSight, SightError> {
        let angle = |field, s: &str| {
            s.parse::<Sexagesimal>()
                .map(f64::from)
                .map_err(|err| SightError::Angle(field, err))
        };

        let ra = angle(SightField::RightAscension, &sight.ra)?;
        let dec = angle(SightField::Declination, &sight.dec)?;
        let hs = angle(SightField::Altitude, &sight.alt)?;
        let gha = self.model.aries_gha(parse_utc(&sight.time)?);
        Ok(self.build(sight, gha, ra, dec, hs))
    }

    fn build(&self, sight: &Sight, gha: f64, ra: f64, dec: f64, hs: f64) -> CompiledSight {
        let lon = normalize_longitude(ra * DEGREES_IN_HOUR - gha);
        let gp = GeoPoint::new(dec, lon);
        let center = self.projection.to_xy(gp);

        let mi_rad = self.formula.miles(hs);
        if mi_rad < 0.0 {
            warn!(
                "The formula {:?} gives negative radius {mi_rad} for the altitude {hs}",
                self.formula.source()
            );
        }
        let deg_rad = miles_to_degrees(mi_rad);
        let radius = self.projection.degrees_to_pixels(deg_rad);

        debug!(
            "Sight {:?}: GHA Aries {gha:.4}, GP {gp:#}, Hs {hs:.4}, radius {mi_rad:.2} mi ({radius:.2} px)",
            sight.name
        );

        CompiledSight {
            sight: sight.clone(),
            gha,
            hs,
            gp,
            center,
            radius,
            mi_rad,
            deg_rad,
        }
    }
}
