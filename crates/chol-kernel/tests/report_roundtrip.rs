use chol_core::CholError;
use chol_kernel::fixtures::{asymmetric, banded, negative_diagonal};
use chol_kernel::hash::{hash_matrix, hash_report};
use chol_kernel::serde_io::{report_from_json, report_to_json};
use chol_kernel::{analyze, DecomposeError, FailureDetail, Matrix32, Outcome, VerifyOpts};

#[test]
fn success_report_round_trips_and_rehashes() {
    let a = banded(2.0, 0.1);
    let analysis = analyze(&a, "banded", &VerifyOpts::default()).unwrap();
    let report = &analysis.report;
    assert_eq!(report.outcome, Outcome::Success);
    assert_eq!(report.code, 0);
    assert!(report.failure.is_none());
    assert!(report.passed());
    assert!(analysis.factor.is_some());
    assert_eq!(report.provenance.input_hash, hash_matrix(&a));
    assert!(report.provenance.tool_versions.contains_key("chol-kernel"));

    let json = report_to_json(report).unwrap();
    let decoded = report_from_json(&json).unwrap();
    assert_eq!(&decoded, report);
    assert_eq!(hash_report(&decoded).unwrap(), report.report_hash);
}

#[test]
fn report_hash_is_deterministic() {
    let a = banded(10.0, 0.01);
    let first = analyze(&a, "stable", &VerifyOpts::default()).unwrap();
    let second = analyze(&a, "stable", &VerifyOpts::default()).unwrap();
    assert_eq!(first.report.report_hash, second.report.report_hash);
    let renamed = analyze(&a, "other", &VerifyOpts::default()).unwrap();
    assert_ne!(first.report.report_hash, renamed.report.report_hash);
}

#[test]
fn failure_reports_carry_detail() {
    let report = analyze(&asymmetric(), "asym", &VerifyOpts::default())
        .unwrap()
        .report;
    assert_eq!(report.code, 1);
    assert_eq!(
        report.failure,
        Some(FailureDetail::NotSymmetric { row: 0, col: 1 })
    );
    assert!(report.check.is_none());
    assert!(!report.passed());

    let analysis = analyze(&negative_diagonal(), "neg", &VerifyOpts::default()).unwrap();
    assert!(analysis.factor.is_none());
    assert_eq!(analysis.report.code, 2);
    assert_eq!(
        analysis.report.failure,
        Some(FailureDetail::NotPositiveDefinite {
            pivot: 0,
            value: Some(-1.0)
        })
    );
    let json = report_to_json(&analysis.report).unwrap();
    assert!(json.contains("\"kind\": \"not-positive-definite\""));
}

#[test]
fn nan_pivot_is_reported_without_value() {
    let mut a = Matrix32::identity();
    a.set(3, 3, f64::NAN);
    let report = analyze(&a, "nan", &VerifyOpts::default()).unwrap().report;
    assert_eq!(
        report.failure,
        Some(FailureDetail::NotPositiveDefinite {
            pivot: 3,
            value: None
        })
    );
    let decoded = report_from_json(&report_to_json(&report).unwrap()).unwrap();
    assert_eq!(decoded, report);
}

#[test]
fn infinite_diagonal_fails_checks_and_round_trips() {
    let mut a = Matrix32::identity();
    a.set(0, 0, f64::INFINITY);
    let analysis = analyze(&a, "inf", &VerifyOpts::default()).unwrap();
    let report = &analysis.report;
    assert_eq!(report.outcome, Outcome::Success);
    assert!(analysis.error.is_none());

    let check = report.check.as_ref().unwrap();
    assert_eq!(check.residual, None);
    assert_eq!(check.tolerance, None);
    assert!(!check.reconstructs);
    assert!(!report.passed());

    let json = report_to_json(report).unwrap();
    assert!(json.contains("\"residual\": null"));
    let decoded = report_from_json(&json).unwrap();
    assert_eq!(&decoded, report);
    assert_eq!(hash_report(&decoded).unwrap(), report.report_hash);
}

#[test]
fn failed_analysis_keeps_the_error() {
    let analysis = analyze(&asymmetric(), "asym", &VerifyOpts::default()).unwrap();
    assert_eq!(
        analysis.error,
        Some(DecomposeError::NotSymmetric { row: 0, col: 1 })
    );
    let err = CholError::from(analysis.error.unwrap());
    assert_eq!(err.info().code, analysis.report.outcome.as_str());
}

#[test]
fn input_hash_tracks_bit_patterns() {
    let mut a = Matrix32::zeros();
    let zero = hash_matrix(&a);
    assert_eq!(zero.len(), 64);
    a.set(5, 9, -0.0);
    assert_ne!(hash_matrix(&a), zero);
    a.set(5, 9, 0.0);
    assert_eq!(hash_matrix(&a), zero);
}

#[test]
fn malformed_report_json_maps_to_structured_error() {
    let err = report_from_json("{not json").unwrap_err();
    assert!(matches!(err, CholError::Serde(_)));
    assert_eq!(err.info().code, "report-deserialize");
}
