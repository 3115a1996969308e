use chrono::NaiveDate;
use grafico_core::Trace;
use serde_json::json;

fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, day).unwrap()
}

#[test]
fn scatter_serializes_plotly_shape() {
    let trace = Trace::lines(vec![d(2), d(3)], vec![0.0, 0.5], "AG");
    let value = serde_json::to_value(&trace).unwrap();
    assert_eq!(
        value,
        json!({
            "type": "scatter",
            "mode": "lines",
            "x": ["2023-01-02", "2023-01-03"],
            "y": [0.0, 0.5],
            "name": "AG",
        })
    );
}

#[test]
fn nan_points_serialize_as_null() {
    let trace = Trace::lines(vec![d(2), d(3)], vec![f64::NAN, 1.0], "AG");
    let value = serde_json::to_value(&trace).unwrap();
    assert_eq!(value["y"], json!([null, 1.0]));
}

#[test]
fn candlestick_serializes_colors() {
    let trace = Trace::Candlestick {
        x: vec![d(2)],
        open: vec![1.0],
        high: vec![2.0],
        low: vec![0.5],
        close: vec![1.5],
        name: "AG".into(),
        increasing_line_color: "rgba(1, 2, 3, 0.2)".into(),
        decreasing_line_color: "rgba(4, 5, 6, 0.2)".into(),
    };
    let value = serde_json::to_value(&trace).unwrap();
    assert_eq!(value["type"], "candlestick");
    assert_eq!(value["increasing_line_color"], "rgba(1, 2, 3, 0.2)");
    assert_eq!(value["decreasing_line_color"], "rgba(4, 5, 6, 0.2)");
}
