use chrono::NaiveDate;
use grafico_core::{Bar, CandlePalette, Field, GraficoError, SymbolSeries, Trace};

fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).unwrap() + chrono::Days::new(u64::from(day) - 1)
}

fn bar(v: f64) -> Bar {
    Bar {
        open: v,
        high: v + 1.0,
        low: v - 1.0,
        close: v + 0.5,
        volume: 1_000.0,
    }
}

fn series(symbol: &str, closes: &[f64]) -> SymbolSeries {
    let dates = (1..=closes.len() as u32).map(d).collect();
    let bars = closes.iter().map(|c| bar(*c)).collect();
    SymbolSeries::new(symbol, dates, bars).unwrap()
}

#[test]
fn construction_rejects_length_mismatch() {
    let err = SymbolSeries::new("AG", vec![d(1), d(2)], vec![bar(1.0)]).unwrap_err();
    assert!(matches!(err, GraficoError::InvalidArg(_)));
}

#[test]
fn construction_rejects_unsorted_dates() {
    let err = SymbolSeries::new("AG", vec![d(2), d(1)], vec![bar(1.0), bar(2.0)]).unwrap_err();
    assert!(matches!(err, GraficoError::InvalidArg(_)));
}

#[test]
fn column_access_by_name() {
    let s = series("AG", &[2.0, 3.0, 4.0]).with_normalize(false);
    assert_eq!(s.column("Close").unwrap(), vec![2.5, 3.5, 4.5]);
    assert_eq!(s.column("volume").unwrap(), vec![1_000.0; 3]);
}

#[test]
fn every_column_reachable_by_canonical_name() {
    let s = series("AG", &[2.0, 3.0]).with_normalize(false);
    for field in Field::all() {
        assert_eq!(s.column(field.name()).unwrap(), s.values_with(field, false));
    }
}

#[test]
fn unknown_column_is_a_fault() {
    let s = series("AG", &[2.0, 3.0]);
    let err = s.column("adj_close").unwrap_err();
    assert_eq!(
        err,
        GraficoError::UnknownField {
            field: "adj_close".into()
        }
    );
}

#[test]
fn normalized_read_is_anchored() {
    let s = series("AG", &[2.0, 3.0, 6.0]);
    let y = s.values(Field::Close);
    assert!(y[0].abs() < 1e-12);
    assert!((y[2] - 1.0).abs() < 1e-12);
}

#[test]
fn slice_time_range_is_inclusive_and_idempotent() {
    let s = series("AG", &[1.0, 2.0, 3.0, 4.0, 5.0]);
    let sliced = s.slice_time_range(Some(d(2)), Some(d(4)));
    assert_eq!(sliced.dates(), &[d(2), d(3), d(4)]);
    assert_eq!(sliced.slice_time_range(Some(d(2)), Some(d(4))), sliced);
}

#[test]
fn slice_defaults_to_full_range() {
    let s = series("AG", &[1.0, 2.0, 3.0]);
    assert_eq!(s.slice_time_range(None, None), s);
}

#[test]
fn ratio_is_elementwise_and_raw() {
    let a = series("AG", &[4.0, 8.0, 16.0]);
    let b = series("EXK", &[2.0, 2.0, 4.0]);
    let r = a.ratio(&b);
    assert_eq!(r.symbol(), "AG:EXK");
    assert!(!r.normalizes());
    let expected: Vec<f64> = a
        .values_with(Field::Close, false)
        .iter()
        .zip(b.values_with(Field::Close, false))
        .map(|(x, y)| x / y)
        .collect();
    assert_eq!(r.values_with(Field::Close, false), expected);
}

#[test]
fn ratio_fills_nan_for_missing_dates() {
    let a = series("AG", &[4.0, 8.0, 16.0]);
    let b = series("EXK", &[2.0, 2.0]); // shorter: no bar on day 3
    let r = a.ratio(&b);
    let close = r.values_with(Field::Close, false);
    assert!(close[0].is_finite() && close[1].is_finite());
    assert!(close[2].is_nan());
    assert_eq!(r.dates(), a.dates());
}

#[test]
fn candlestick_pair_shape() {
    let s = series("AG", &[1.0, 2.0, 3.0]);
    let mut palette = CandlePalette::seeded(7);
    let [candles, overlay] = s.candlestick_traces(&mut palette);
    match candles {
        Trace::Candlestick {
            x,
            open,
            name,
            increasing_line_color,
            decreasing_line_color,
            ..
        } => {
            assert_eq!(x.len(), 3);
            // Candles read raw values, never normalized.
            assert_eq!(open, vec![1.0, 2.0, 3.0]);
            assert_eq!(name, "AG");
            assert!(increasing_line_color.starts_with("rgba("));
            assert_ne!(increasing_line_color, decreasing_line_color);
        }
        Trace::Scatter { .. } => panic!("expected candlestick first"),
    }
    match overlay {
        Trace::Scatter { y, fillcolor, .. } => {
            // 3 rows < 200-period window: no overlay line at all.
            assert!(y.iter().all(|v| v.is_nan()));
            assert!(fillcolor.is_some());
        }
        Trace::Candlestick { .. } => panic!("expected scatter overlay second"),
    }
}

#[test]
fn overlay_defined_after_window_fills() {
    let closes: Vec<f64> = (0..250).map(f64::from).collect();
    let s = series("AG", &closes);
    let mut palette = CandlePalette::seeded(7);
    let [_, overlay] = s.candlestick_traces(&mut palette);
    let Trace::Scatter { y, .. } = overlay else {
        panic!("expected scatter overlay");
    };
    assert!(y[..199].iter().all(|v| v.is_nan()));
    assert!(y[199..].iter().all(|v| v.is_finite()));
}

#[test]
fn seeded_palette_is_reproducible() {
    let mut a = CandlePalette::seeded(42);
    let mut b = CandlePalette::seeded(42);
    for _ in 0..5 {
        assert_eq!(a.next_pair(), b.next_pair());
    }
}

#[test]
fn share_scaling_multiplies_prices_only() {
    let s = series("AG", &[2.0, 4.0]);
    let scaled = s.scaled_by_shares(10.0).unwrap();
    assert_eq!(scaled.values_with(Field::Close, false), vec![25.0, 45.0]);
    assert_eq!(scaled.values_with(Field::Volume, false), vec![1_000.0; 2]);
}

#[test]
fn share_scaling_validates_count() {
    let s = series("AG", &[2.0]);
    assert!(matches!(
        s.scaled_by_shares(0.0),
        Err(GraficoError::InvalidArg(_))
    ));
    assert!(matches!(
        s.scaled_by_shares(f64::NAN),
        Err(GraficoError::InvalidArg(_))
    ));
}
