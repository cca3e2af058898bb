use assert_approx_eq::assert_approx_eq;
use chrono::NaiveDate;
use goal_statistics::{
    GoalError, GoalParameters, Observation, Rounded, ZScoreMethod, compute_goal, compute_goals,
    suggested_goal, upper_bound, z_score_from_table,
};

fn series(metric: &str, values: &[f64]) -> Vec<Observation<f64>> {
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let date = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap() + chrono::Months::new(i as u32);
            Observation::new(metric, value, date)
        })
        .collect()
}

#[test]
fn two_point_trend() {
    let history = [
        Observation::new("nps", 100.0, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()),
        Observation::new("nps", 150.0, NaiveDate::from_ymd_opt(2023, 12, 1).unwrap()),
    ];
    let analysis = compute_goal("nps", &history, &GoalParameters::default()).unwrap();
    assert_eq!(analysis.baseline().data_points(), 2);
    assert_eq!(analysis.baseline().trend(), 25.0);
}

#[test]
fn textbook_medians() {
    let odd = compute_goal("m", &series("m", &[10.0, 20.0, 30.0]), &GoalParameters::default());
    assert_eq!(odd.unwrap().baseline().median(), 20.0);

    let even = compute_goal(
        "m",
        &series("m", &[10.0, 20.0, 30.0, 40.0]),
        &GoalParameters::default(),
    );
    assert_eq!(even.unwrap().baseline().median(), 25.0);
}

#[test]
fn single_observation_baseline() {
    let analysis = compute_goal("m", &series("m", &[64.0]), &GoalParameters::default()).unwrap();
    let baseline = analysis.baseline();
    assert_eq!(baseline.mean(), 64.0);
    assert_eq!(baseline.median(), 64.0);
    assert_eq!(baseline.min(), 64.0);
    assert_eq!(baseline.max(), 64.0);
    assert_eq!(baseline.std_dev(), 0.0);
    assert_eq!(baseline.trend(), 0.0);
}

#[test]
fn z_score_reference_levels() {
    assert_eq!(z_score_from_table(0.9), 1.282);
    assert_eq!(z_score_from_table(0.99), 1.645);
    assert_eq!(z_score_from_table(0.5), 0.524);
}

#[test]
fn worked_goal_example() {
    let bound: f64 = upper_bound(100.0, 10.0, 1.645);
    assert_approx_eq!(bound, 116.45, 1e-9);

    let goal: f64 = suggested_goal(bound, 150.0, 100.0, 1.1);
    assert_approx_eq!(goal, 128.095, 1e-9);
}

#[test]
fn targets_are_monotonic_toward_goal() {
    let params = GoalParameters::default();
    for values in [
        vec![100.0, 104.0, 98.0, 110.0, 107.0],
        vec![50.0, 40.0, 70.0, 45.0],
        vec![5.0, 5.0, 5.0],
    ] {
        let analysis = compute_goal("m", &series("m", &values), &params).unwrap();
        let current = analysis.baseline().current_value();
        let goal = analysis.goal().suggested_goal();
        let targets: Vec<f64> = analysis.targets().iter().map(|t| t.target()).collect();

        assert_eq!(targets.len(), 12);
        assert_approx_eq!(targets[11], goal, 1e-9);
        for pair in targets.windows(2) {
            if goal > current {
                assert!(pair[0] < pair[1]);
            } else if goal < current {
                assert!(pair[0] > pair[1]);
            } else {
                assert_eq!(pair[0], pair[1]);
            }
        }
    }
}

#[test]
fn decreasing_ramp_without_improvement() {
    let params = GoalParameters::new(0.7, 0.5);
    let analysis = compute_goal("m", &series("m", &[80.0, 100.0]), &params).unwrap();
    // no floor correction below a factor of one
    let bound = 90.0 + 0.524 * 200.0_f64.sqrt();
    assert_approx_eq!(analysis.goal().suggested_goal(), bound * 0.5, 1e-9);
    let targets = analysis.targets();
    assert!(targets.windows(2).all(|w| w[0].target() > w[1].target()));
}

#[test]
fn aggregates_within_extrema() {
    let values = [12.0, -3.5, 8.25, 40.0, 0.0, 17.75, 9.0];
    let analysis = compute_goal("m", &series("m", &values), &GoalParameters::default()).unwrap();
    let b = analysis.baseline();
    assert!(b.min() <= b.median() && b.median() <= b.max());
    assert!(b.min() <= b.mean() && b.mean() <= b.max());
}

#[test]
fn missing_metric_produces_nothing() {
    let history = series("revenue", &[1.0, 2.0]);
    let err = compute_goal("costs", &history, &GoalParameters::default()).unwrap_err();
    assert_eq!(
        err,
        GoalError::NoData {
            metric: "costs".to_string()
        }
    );
}

#[test]
fn identical_inputs_identical_outputs() {
    let history = series("m", &[3.0, 9.0, 4.0, 7.5]);
    let params = GoalParameters::new(0.8, 1.05).with_zscore_method(ZScoreMethod::Continuous);
    let first = compute_goal("m", &history, &params).unwrap();
    let second = compute_goal("m", &history, &params).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.rounded(), second.rounded());
}

#[test]
fn batch_matches_single_metric_calls() {
    let mut batch = series("a", &[1.0, 2.0, 3.0]);
    batch.extend(series("b", &[10.0, 8.0]));
    let params = GoalParameters::default();

    for (metric, result) in compute_goals(&batch, &params) {
        assert_eq!(result, compute_goal(&metric, &batch, &params));
    }
}

#[test]
fn works_with_f32() {
    let history: Vec<Observation<f32>> = [1.0_f32, 2.0, 3.0]
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            Observation::new("m", v, NaiveDate::from_ymd_opt(2023, 1 + i as u32, 1).unwrap())
        })
        .collect();
    let analysis = compute_goal("m", &history, &GoalParameters::default()).unwrap();
    assert_eq!(analysis.baseline().median(), 2.0_f32);
    assert_eq!(analysis.targets().len(), 12);
}

#[test]
fn nan_values_do_not_panic() {
    let values: Vec<f64> = (0..64)
        .map(|i| if i % 5 == 0 { f64::NAN } else { i as f64 })
        .collect();
    let analysis = compute_goal("m", &series("m", &values), &GoalParameters::default()).unwrap();

    assert_eq!(analysis.baseline().data_points(), 64);
    assert!(analysis.baseline().mean().is_nan());
    assert_eq!(analysis.targets().len(), 12);
}
