use dash_chart::telemetry::{init_default_tracing, init_tracing_with_filter};

#[cfg(not(feature = "telemetry"))]
#[test]
fn tracing_helpers_are_noops_without_feature() {
    assert!(!init_default_tracing());
    assert!(!init_tracing_with_filter("dash_chart=trace"));
}

#[cfg(feature = "telemetry")]
#[test]
fn second_initialization_reports_existing_subscriber() {
    let _ = init_default_tracing();
    assert!(!init_tracing_with_filter("dash_chart=trace"));
}
