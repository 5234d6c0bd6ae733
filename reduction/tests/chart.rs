use approx::assert_abs_diff_eq;

use sight_reduction::{
    Chart, Fix, FixReport, FormulaSlot, GeoPoint, Renderer, Sight, Solution, DEFAULT_SOURCE,
};

const AT_NULL_GHA: &str = "2022-07-01 05:22:59.900";

#[derive(Debug, Default)]
struct Recorder {
    frames: Vec<(usize, FixReport)>,
}

impl Renderer for Recorder {
    fn render_fix(&mut self, index: usize, report: &FixReport) {
        self.frames.push((index, report.clone()));
    }
}

fn navigation_chart() -> Chart {
    Chart::new(vec![
        Fix::new(
            Sight::new("0 0 0", "90 0 0", "60 0 0", AT_NULL_GHA).named("Polaris"),
            Sight::new("0 0 0", "0 0 0", "60 0 0", AT_NULL_GHA).named("Alpheratz"),
            GeoPoint::new(45.0, 0.0),
        )
        .named("closest approach"),
        Fix::new(
            Sight::new("0 0 0", "90 0 0", "40 0 0", AT_NULL_GHA).named("Polaris"),
            Sight::new("0 0 0", "0 0 0", "40 0 0", AT_NULL_GHA).named("Alpheratz"),
            GeoPoint::new(40.0, 25.85),
        )
        .named("crossing"),
        Fix::new(
            Sight::new("0 0 0", "90 0 0", "60 0 0", AT_NULL_GHA),
            Sight::new("0 0 0", "90 0 0", "30 0 0", AT_NULL_GHA),
            GeoPoint::new(45.0, 0.0),
        )
        .named("concentric"),
    ])
}

#[test]
fn renders_every_fix_in_order() {
    let chart = navigation_chart();
    let mut recorder = Recorder::default();
    chart.render_all(&mut recorder);

    let names: Vec<_> = recorder
        .frames
        .iter()
        .map(|(index, report)| (*index, report.name.as_str()))
        .collect();
    assert_eq!(
        names,
        vec![(0, "closest approach"), (1, "crossing"), (2, "concentric")]
    );
}

#[test]
fn fixes_are_located() {
    let chart = navigation_chart();
    let mut recorder = Recorder::default();
    chart.render_all(&mut recorder);

    let separated = &recorder.frames[0].1;
    assert!(matches!(separated.solution, Solution::Separated(_)));
    let best = separated.best.unwrap();
    assert_abs_diff_eq!(best.location.lat(), 45.0, epsilon = 1e-9);
    assert_abs_diff_eq!(best.location.lon(), 0.0, epsilon = 1e-9);

    let crossing = &recorder.frames[1].1;
    assert_eq!(crossing.candidates.len(), 2);
    let best = crossing.best.unwrap();
    assert_abs_diff_eq!(best.location.lat(), 39.997_783, epsilon = 1e-5);
    assert_abs_diff_eq!(best.location.lon(), 25.847_177, epsilon = 1e-5);
    assert!(best.error_miles < 1.0);

    let concentric = &recorder.frames[2].1;
    assert_eq!(concentric.solution, Solution::Coincident);
    assert!(concentric.candidates.is_empty());
    assert!(concentric.best.is_none());
}

#[test]
fn report_text() {
    let report = navigation_chart().compute(0).unwrap();
    let text = report.to_string();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(
        lines[0],
        "Polaris - 2022-07-01 05:22:59.900 UTC - Hs: 60.0000"
    );
    assert_eq!(
        lines[1],
        "GP: 90.0000 N, 0.0000 E - Radius: 2071.5 mi / 30.0013°"
    );
    assert_eq!(lines[4], "Correct location: 45.0000 N, 0.0000 E");
}

#[test]
fn formula_replacement_rerenders() {
    let chart = navigation_chart();
    let before = chart.reports();

    let mut recorder = Recorder::default();
    chart
        .replace_formula("(hs) => {\n    return (90 - hs)*60;\n}", &mut recorder)
        .unwrap();
    assert_eq!(recorder.frames.len(), 3);
    let (_, first) = &recorder.frames[0];
    assert_abs_diff_eq!(first.sight1.miles_radius(), 1800.0, epsilon = 1e-9);

    // already computed reports keep the old radius
    assert_abs_diff_eq!(before[0].sight1.miles_radius(), 2071.5, epsilon = 1e-9);
}

#[test]
fn rejected_formula_keeps_the_previous_one() {
    let chart = navigation_chart();
    let mut recorder = Recorder::default();
    assert!(chart.replace_formula("(hs) => 90 - altitude", &mut recorder).is_err());
    assert!(recorder.frames.is_empty());
    assert_eq!(chart.formula_source(), DEFAULT_SOURCE);
}

#[test]
fn global_slot_is_shared() {
    let chart = navigation_chart().with_formula_slot(FormulaSlot::global());
    let other = navigation_chart().with_formula_slot(FormulaSlot::global());
    assert_eq!(chart.formula_source(), other.formula_source());
}
