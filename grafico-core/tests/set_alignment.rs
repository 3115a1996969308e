use std::collections::BTreeMap;

use chrono::NaiveDate;
use grafico_core::{
    Bar, CandlePalette, Field, GraficoError, RawBar, RawHistory, SymbolSeries, SymbolSet,
};

fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).unwrap() + chrono::Days::new(u64::from(day) - 1)
}

fn raw_bar(v: f64) -> RawBar {
    RawBar {
        open: Some(v),
        high: Some(v + 1.0),
        low: Some(v - 1.0),
        close: Some(v + 0.5),
        volume: Some(1_000.0),
    }
}

fn rows(days: &[u32], base: f64) -> BTreeMap<NaiveDate, RawBar> {
    days.iter()
        .enumerate()
        .map(|(i, day)| (d(*day), raw_bar(base + i as f64)))
        .collect()
}

fn raw_three_symbols() -> RawHistory {
    let mut raw = RawHistory::new();
    raw.push_symbol("AG", rows(&[1, 2, 3, 4, 5], 10.0)).unwrap();
    raw.push_symbol("EXK", rows(&[1, 2, 3, 4, 5], 20.0)).unwrap();
    raw.push_symbol("FNV", rows(&[1, 2, 3, 4, 5], 30.0)).unwrap();
    raw
}

#[test]
fn from_raw_shares_one_date_index() {
    let set = SymbolSet::from_raw(&raw_three_symbols()).unwrap();
    assert_eq!(set.len(), 3);
    let index = set.date_index().to_vec();
    for member in set.members() {
        assert_eq!(member.dates(), index.as_slice());
    }
}

#[test]
fn from_raw_drops_dates_missing_for_any_symbol() {
    let mut raw = RawHistory::new();
    raw.push_symbol("AG", rows(&[1, 2, 3, 4], 10.0)).unwrap();
    // EXK never traded on day 3.
    raw.push_symbol("EXK", rows(&[1, 2, 4], 20.0)).unwrap();
    let set = SymbolSet::from_raw(&raw).unwrap();
    assert_eq!(set.date_index(), &[d(1), d(2), d(4)]);
    assert_eq!(set.get("AG").unwrap().len(), 3);
}

#[test]
fn from_raw_drops_incomplete_rows() {
    let mut raw = RawHistory::new();
    let mut holed = rows(&[1, 2, 3], 10.0);
    holed.insert(
        d(2),
        RawBar {
            close: None,
            ..raw_bar(11.0)
        },
    );
    raw.push_symbol("AG", holed).unwrap();
    raw.push_symbol("EXK", rows(&[1, 2, 3], 20.0)).unwrap();
    let set = SymbolSet::from_raw(&raw).unwrap();
    assert_eq!(set.date_index(), &[d(1), d(3)]);
}

#[test]
fn from_raw_rejects_empty_fetch() {
    assert!(matches!(
        SymbolSet::from_raw(&RawHistory::new()),
        Err(GraficoError::InvalidArg(_))
    ));
}

#[test]
fn duplicate_symbols_rejected() {
    let mut raw = RawHistory::new();
    raw.push_symbol("AG", rows(&[1], 10.0)).unwrap();
    assert!(matches!(
        raw.push_symbol("AG", rows(&[1], 11.0)),
        Err(GraficoError::InvalidArg(_))
    ));

    let member = SymbolSeries::new("AG", vec![d(1)], vec![Bar {
        open: 1.0,
        high: 2.0,
        low: 0.5,
        close: 1.5,
        volume: 10.0,
    }])
    .unwrap();
    assert!(matches!(
        SymbolSet::from_members(vec![member.clone(), member]),
        Err(GraficoError::InvalidArg(_))
    ));
}

#[test]
fn subset_by_symbols_keeps_request_order() {
    let set = SymbolSet::from_raw(&raw_three_symbols()).unwrap();
    let subset = set.subset_by_symbols(&["FNV", "AG"]).unwrap();
    let symbols: Vec<_> = subset.symbols().collect();
    assert_eq!(symbols, vec!["FNV", "AG"]);
}

#[test]
fn subset_by_unknown_symbol_fails() {
    let set = SymbolSet::from_raw(&raw_three_symbols()).unwrap();
    assert_eq!(
        set.subset_by_symbols(&["AG", "MMX"]).unwrap_err(),
        GraficoError::NotFound {
            what: "series for MMX".into()
        }
    );
}

#[test]
fn subset_by_time_range_defaults_to_own_bounds() {
    let set = SymbolSet::from_raw(&raw_three_symbols()).unwrap();
    let sliced = set.subset_by_time_range(Some(d(2)), None);
    assert_eq!(sliced.date_index(), &[d(2), d(3), d(4), d(5)]);
    let full = set.subset_by_time_range(None, None);
    assert_eq!(full.date_index(), set.date_index());
}

#[test]
fn line_traces_in_insertion_order() {
    let set = SymbolSet::from_raw(&raw_three_symbols()).unwrap();
    let traces = set.line_traces(Field::Close);
    let names: Vec<_> = traces.iter().map(|t| t.name()).collect();
    assert_eq!(names, vec!["AG", "EXK", "FNV"]);
    assert!(traces.iter().all(|t| t.len() == 5));
}

#[test]
fn candlestick_traces_flatten_pairs() {
    let set = SymbolSet::from_raw(&raw_three_symbols()).unwrap();
    let mut palette = CandlePalette::seeded(1);
    let traces = set.candlestick_traces(&mut palette);
    assert_eq!(traces.len(), 6);
    let names: Vec<_> = traces.iter().map(|t| t.name()).collect();
    assert_eq!(names, vec!["AG", "AG", "EXK", "EXK", "FNV", "FNV"]);
}

#[test]
fn field_table_reads_through_each_normalization() {
    let set = SymbolSet::from_raw(&raw_three_symbols()).unwrap();
    let table = set.field_table(Field::Close);
    assert_eq!(table.dates, set.date_index());
    assert_eq!(table.columns.len(), 3);
    for (_, column) in &table.columns {
        // Members normalize by default, so every column is anchored at 0.
        assert!(column[0].abs() < 1e-12);
    }
}

#[test]
fn ratio_of_wraps_member_lookup() {
    let set = SymbolSet::from_raw(&raw_three_symbols()).unwrap();
    let r = set.ratio_of("AG", "EXK").unwrap();
    assert_eq!(r.symbol(), "AG:EXK");
    assert!(set.ratio_of("AG", "MMX").is_err());
}
