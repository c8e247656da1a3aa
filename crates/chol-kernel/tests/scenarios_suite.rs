use chol_kernel::params::FixtureSpec;
use chol_kernel::scenarios::Expectation;
use chol_kernel::{acceptance_suite, run_suite, Outcome, Scenario, VerifyOpts};

#[test]
fn acceptance_suite_passes() {
    let results = run_suite(&VerifyOpts::default());
    assert_eq!(results.len(), 7);
    for result in &results {
        assert!(result.passed, "{} failed: {}", result.name, result.detail);
    }
}

#[test]
fn rejection_scenarios_report_expected_codes() {
    let results = run_suite(&VerifyOpts::default());
    assert_eq!(results[4].outcome, Outcome::NotSymmetric);
    assert_eq!(results[5].outcome, Outcome::NotPositiveDefinite);
    assert!(results[..4]
        .iter()
        .chain(std::iter::once(&results[6]))
        .all(|result| result.outcome.is_success()));
}

#[test]
fn wrong_expectation_fails() {
    let scenario = Scenario {
        name: "identity is not rejected".into(),
        fixture: FixtureSpec::Identity,
        expect: Expectation::Rejects {
            outcome: Outcome::NotSymmetric,
        },
    };
    let result = scenario.run(&VerifyOpts::default());
    assert!(!result.passed);
    assert_eq!(result.detail, "expected code 1, got 0");
}

#[test]
fn failed_decomposition_fails_success_expectations() {
    let scenario = Scenario {
        name: "negative diagonal".into(),
        fixture: FixtureSpec::NegativeDiagonal,
        expect: Expectation::PositiveDiagonal,
    };
    let result = scenario.run(&VerifyOpts::default());
    assert!(!result.passed);
    assert_eq!(result.detail, "decomposition returned error 2");
}

#[test]
fn suite_round_trips_json() {
    let suite = acceptance_suite();
    let json = serde_json::to_string(&suite).unwrap();
    let decoded: Vec<Scenario> = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, suite);
}
