use super::*;

fn record(wq: [f64; 8], tv: [f64; 6]) -> PageRecord {
    PageRecord {
        id: "page-0".to_string(),
        page_title: "Page".to_string(),
        page_url: "https://example.test/page".to_string(),
        assessment_date: "2024-01-01".to_string(),
        wq,
        tv,
    }
}

#[test]
fn test_mean_rounded_half_away_to_two_decimals() {
    let agg = aggregate(
        &record([9.0, 9.0, 9.0, 9.0, 9.0, 9.0, 9.0, 4.0], [7.0, 7.0, 7.0, 8.0, 8.0, 8.0]),
        &ThresholdProfile::default_v1(),
    );
    assert_eq!(agg.overall_wq_raw, 8.375);
    assert_eq!(agg.overall_wq, 8.38);
    assert_eq!(agg.overall_tv, 7.5);
}

#[test]
fn test_tv_mean_of_thirds_rounds() {
    let agg = aggregate(
        &record([10.0; 8], [10.0, 10.0, 10.0, 10.0, 10.0, 9.0]),
        &ThresholdProfile::default_v1(),
    );
    assert_eq!(agg.overall_tv, 9.83);
    assert!((agg.overall_tv_raw - 59.0 / 6.0).abs() < 1e-12);
}

#[test]
fn test_low_flag_threshold_inclusive() {
    let t = ThresholdProfile::default_v1();
    let agg = aggregate(
        &record([6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 5.0], [5.01; 6]),
        &t,
    );
    assert!(agg.any_wq_low);
    assert!(!agg.any_tv_low);
}

#[test]
fn test_zero_defaults_flag_low() {
    let agg = aggregate(&record([0.0; 8], [0.0; 6]), &ThresholdProfile::default_v1());
    assert_eq!(agg.overall_wq, 0.0);
    assert!(agg.any_wq_low);
    assert!(agg.any_tv_low);
}

#[test]
fn test_run_stage2_keeps_order() {
    let records = vec![record([1.0; 8], [1.0; 6]), record([9.0; 8], [9.0; 6])];
    let out = run_stage2(&records, &ThresholdProfile::default_v1());
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].overall_wq, 1.0);
    assert_eq!(out[1].overall_tv, 9.0);
}

#[test]
fn test_group_mean_empty() {
    assert_eq!(group_mean(&[]), 0.0);
    assert!(!any_low(&[], 5.0));
}
