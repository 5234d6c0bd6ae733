//! Human-readable text of the sights and fixes

use std::fmt;

use crate::{
    angle::consts::DEGREE_SIGN,
    fix::FixReport,
    sight::CompiledSight,
    utils::{fixed_trimmed, significant_trimmed},
};

/// `Vega - 2022-07-04 03:12:45 UTC - Hs: 51.1000`
/// `GP: 38.8052 N, 84.6789 W - Radius: 2686.05 mi / 38.9011°`
impl fmt::Display for CompiledSight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sight = self.sight();
        writeln!(f, "{} - {} UTC - Hs: {:.4}", sight.name, sight.time, self.hs())?;
        write!(
            f,
            "GP: {:#} - Radius: {} mi / {:.4}{}",
            self.gp(),
            fixed_trimmed(self.miles_radius(), 2),
            self.degrees_radius(),
            DEGREE_SIGN
        )
    }
}

impl fmt::Display for FixReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.sight1)?;
        writeln!(f, "{}", self.sight2)?;
        writeln!(f, "Correct location: {:#}", self.target)?;
        match &self.best {
            Some(best) => write!(
                f,
                "Best fix: {:#} ({} mi off)",
                best.location,
                significant_trimmed(best.error_miles, 3)
            ),
            None => write!(f, "Best fix: none ({})", self.solution),
        }
    }
}
