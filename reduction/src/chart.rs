//! The ordered set of fixes rendered on the charts,
//! recomputed from scratch whenever the radius formula changes

use std::sync::Arc;

use log::info;

use crate::{
    fix::{Fix, FixReport},
    formula::{FormulaError, FormulaSlot, RadiusFormula},
    projection::Projection,
    sight::SightCompiler,
    time::SiderealModel,
};

/// The external collaborator drawing the computed geometry
pub trait Renderer {
    /// Display the fix with the given position in the chart
    fn render_fix(&mut self, index: usize, report: &FixReport);
}

impl<F> Renderer for F
where
    F: FnMut(usize, &FixReport),
{
    fn render_fix(&mut self, index: usize, report: &FixReport) {
        self(index, report);
    }
}

/// The fixes with the settings to compute them
#[derive(Debug)]
pub struct Chart {
    fixes: Vec<Fix>,
    projection: Projection,
    model: SiderealModel,
    formula: Arc<FormulaSlot>,
}

impl Chart {
    /// The chart of the default size with its own formula slot
    pub fn new(fixes: Vec<Fix>) -> Self {
        Self {
            fixes,
            projection: Projection::default(),
            model: SiderealModel::default(),
            formula: Arc::new(FormulaSlot::default()),
        }
    }

    /// Use another canvas
    #[must_use]
    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    /// Use another model of the Earth rotation
    #[must_use]
    pub fn with_sidereal_model(mut self, model: SiderealModel) -> Self {
        self.model = model;
        self
    }

    /// Share the formula slot, e.g. the [process-wide one](FormulaSlot::global)
    #[must_use]
    pub fn with_formula_slot(mut self, slot: Arc<FormulaSlot>) -> Self {
        self.formula = slot;
        self
    }

    /// The fixes in their order
    pub fn fixes(&self) -> &[Fix] {
        &self.fixes
    }

    /// The canvas of the chart
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// The source text of the current radius formula
    pub fn formula_source(&self) -> String {
        self.formula.current().source().to_string()
    }

    /// The compiler bound to the current formula
    pub fn compiler(&self) -> SightCompiler {
        SightCompiler::new(self.projection, self.model, self.formula.current())
    }

    /// Compute the fix with the given position
    pub fn compute(&self, index: usize) -> Option<FixReport> {
        let fix = self.fixes.get(index)?;
        Some(FixReport::compute(fix, &self.compiler()))
    }

    /// Compute every fix in order
    pub fn reports(&self) -> Vec<FixReport> {
        let compiler = self.compiler();
        self.fixes
            .iter()
            .map(|fix| FixReport::compute(fix, &compiler))
            .collect()
    }

    /// Recompute the single fix and pass it to the renderer.
    /// Returns `false` when there is no such fix.
    pub fn render_fix<R>(&self, index: usize, renderer: &mut R) -> bool
    where
        R: Renderer + ?Sized,
    {
        self.compute(index).map_or(false, |report| {
            renderer.render_fix(index, &report);
            true
        })
    }

    /// Recompute every fix and pass them to the renderer in order
    pub fn render_all<R>(&self, renderer: &mut R)
    where
        R: Renderer + ?Sized,
    {
        for (index, report) in self.reports().iter().enumerate() {
            renderer.render_fix(index, report);
        }
    }

    /// Put the formula into the slot and re-render everything
    pub fn set_formula<R>(&self, formula: RadiusFormula, renderer: &mut R)
    where
        R: Renderer + ?Sized,
    {
        let _ = self.formula.set(formula);
        self.render_all(renderer);
    }

    /// Replace the formula with the given source and re-render everything.
    ///
    /// # Errors
    /// When the source is rejected, the previous formula stays and nothing is rendered.
    pub fn replace_formula<R>(&self, source: &str, renderer: &mut R) -> Result<(), FormulaError>
    where
        R: Renderer + ?Sized,
    {
        let _ = self.formula.replace(source)?;
        info!("Re-rendering {} fixes", self.fixes.len());
        self.render_all(renderer);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::{coord::GeoPoint, sight::Sight, solver::Solution};

    use super::*;

    fn chart() -> Chart {
        let fix = Fix::new(
            Sight::new("0 0 0", "90 0 0", "60 0 0", "2022-07-01 05:22:59.900"),
            Sight::new("0 0 0", "0 0 0", "60 0 0", "2022-07-01 05:22:59.900"),
            GeoPoint::new(45.0, 0.0),
        );
        Chart::new(vec![fix.clone().named("first"), fix.named("second")])
    }

    #[test]
    fn renders_in_order() {
        let mut rendered = Vec::new();
        chart().render_all(&mut |index: usize, report: &FixReport| {
            rendered.push((index, report.name.clone()));
        });
        assert_eq!(rendered, vec![(0, "first".to_string()), (1, "second".to_string())]);
    }

    #[test]
    fn single_fix() {
        let chart = chart();
        let mut count = 0;
        assert!(chart.render_fix(1, &mut |_: usize, _: &FixReport| count += 1));
        assert!(!chart.render_fix(2, &mut |_: usize, _: &FixReport| count += 1));
        assert_eq!(count, 1);
    }

    #[test]
    fn rejected_formula_renders_nothing() {
        let chart = chart();
        let mut count = 0;
        let result =
            chart.replace_formula("(hs) => (90 - hs", &mut |_: usize, _: &FixReport| count += 1);
        assert!(result.is_err());
        assert_eq!(count, 0);
        assert_eq!(chart.formula_source(), crate::formula::DEFAULT_SOURCE);
    }

    #[test]
    fn accepted_formula_renders_all() {
        let chart = chart();
        let mut radii = Vec::new();
        chart
            .replace_formula("(hs) => (90 - hs)*60", &mut |_: usize, report: &FixReport| {
                radii.push(report.sight1.miles_radius());
            })
            .unwrap();
        assert_eq!(radii, vec![1800.0, 1800.0]);
        assert_eq!(chart.formula_source(), "(hs) => (90 - hs)*60");
    }

    #[test]
    fn charts_do_not_share_formula_by_default() {
        let a = chart();
        let b = chart();
        a.replace_formula("hs", &mut |_: usize, _: &FixReport| {}).unwrap();
        assert_eq!(b.formula_source(), crate::formula::DEFAULT_SOURCE);
    }

    #[test]
    fn shared_slot() {
        let slot = Arc::new(FormulaSlot::default());
        let a = chart().with_formula_slot(Arc::clone(&slot));
        let b = chart().with_formula_slot(slot);
        a.replace_formula("hs", &mut |_: usize, _: &FixReport| {}).unwrap();
        assert_eq!(b.formula_source(), "hs");
    }

    #[test]
    fn closest_approach_fix() {
        let report = chart().compute(0).unwrap();
        assert!(matches!(report.solution, Solution::Separated(_)));

        let best = report.best.unwrap();
        assert_abs_diff_eq!(best.pixel.x, 300.0, epsilon = 1e-9);
        assert_abs_diff_eq!(best.pixel.y, 375.0, epsilon = 1e-9);
        assert_abs_diff_eq!(best.location.lat(), 45.0, epsilon = 1e-9);
        assert_abs_diff_eq!(best.location.lon(), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(best.error_miles, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn crossing_fix_picks_the_closest_candidate() {
        let time = "2022-07-01 05:22:59.900";
        let chart = Chart::new(vec![Fix::new(
            Sight::new("0 0 0", "90 0 0", "40 0 0", time),
            Sight::new("0 0 0", "0 0 0", "40 0 0", time),
            GeoPoint::new(40.0, 25.85),
        )]);
        let report = chart.compute(0).unwrap();
        assert!(matches!(report.solution, Solution::Intersecting(_, _)));
        assert_eq!(report.candidates.len(), 2);

        let best = report.best.unwrap();
        assert_abs_diff_eq!(best.pixel.x, 336.332_634, epsilon = 1e-5);
        assert_abs_diff_eq!(best.pixel.y, 375.0, epsilon = 1e-9);
        assert_abs_diff_eq!(best.location.lat(), 39.997_783, epsilon = 1e-5);
        assert_abs_diff_eq!(best.location.lon(), 25.847_177, epsilon = 1e-5);
        assert!(best.error_miles < 1.0);

        let other = report
            .candidates
            .iter()
            .find(|c| c.pixel.x < 300.0)
            .unwrap();
        assert_abs_diff_eq!(other.location.lon(), -25.847_177, epsilon = 1e-5);
        assert!(other.error_miles > best.error_miles);
    }

    #[test]
    fn earlier_reports_survive_formula_change() {
        let chart = chart();
        let before = chart.reports();
        chart
            .replace_formula("(hs) => (90 - hs)*60", &mut |_: usize, _: &FixReport| {})
            .unwrap();
        let after = chart.reports();

        assert_abs_diff_eq!(before[0].sight1.miles_radius(), 2071.5, epsilon = 1e-9);
        assert_abs_diff_eq!(after[0].sight1.miles_radius(), 1800.0, epsilon = 1e-9);
        assert!(after[0].sight1.radius() < before[0].sight1.radius());
    }
}
