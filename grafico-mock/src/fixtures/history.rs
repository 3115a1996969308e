use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use grafico_core::RawBar;

/// Ten aligned trading days, 2023-01-02 through 2023-01-13 (weekdays only).
const DAYS: [&str; 10] = [
    "2023-01-02",
    "2023-01-03",
    "2023-01-04",
    "2023-01-05",
    "2023-01-06",
    "2023-01-09",
    "2023-01-10",
    "2023-01-11",
    "2023-01-12",
    "2023-01-13",
];

pub fn by_symbol(s: &str) -> Option<BTreeMap<NaiveDate, RawBar>> {
    match s {
        "AG" => Some(build(
            8.0,
            &[8.1, 8.3, 8.2, 8.6, 8.5, 8.9, 9.1, 9.0, 9.4, 9.6],
        )),
        "EXK" => Some(build(
            3.0,
            &[3.1, 3.0, 3.2, 3.3, 3.1, 3.4, 3.5, 3.6, 3.5, 3.8],
        )),
        "FNV" => Some(build(
            140.0,
            &[141.0, 142.5, 141.8, 143.2, 144.0, 143.5, 145.1, 146.0, 145.4, 147.2],
        )),
        // Missing a mid-series session; aligning against MMX shrinks the
        // shared index by one.
        "MMX" => {
            let mut rows = build(
                5.0,
                &[5.1, 5.2, 5.1, 5.3, 5.2, 5.4, 5.5, 5.4, 5.6, 5.7],
            );
            rows.remove(&date(DAYS[4]));
            Some(rows)
        }
        // A row with a hole in it; the drop step removes that date for
        // every symbol in the query.
        "HOLED" => {
            let mut rows = build(
                7.0,
                &[7.1, 7.2, 7.1, 7.3, 7.2, 7.4, 7.5, 7.4, 7.6, 7.7],
            );
            if let Some(bar) = rows.get_mut(&date(DAYS[2])) {
                bar.close = None;
            }
            Some(rows)
        }
        // 250 consecutive days so the 200-period overlay has a defined tail.
        "LONG" => Some(long_series(250)),
        _ => None,
    }
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn build(base: f64, closes: &[f64]) -> BTreeMap<NaiveDate, RawBar> {
    DAYS.iter()
        .zip(closes)
        .map(|(day, close)| {
            (
                date(day),
                RawBar {
                    open: Some(base),
                    high: Some(close + 0.5),
                    low: Some(base - 0.5),
                    close: Some(*close),
                    volume: Some(100_000.0),
                },
            )
        })
        .collect()
}

fn long_series(days: u64) -> BTreeMap<NaiveDate, RawBar> {
    let start = date("2022-01-01");
    (0..days)
        .map(|i| {
            let close = 50.0 + (i as f64) * 0.1;
            (
                start + Days::new(i),
                RawBar {
                    open: Some(close - 0.2),
                    high: Some(close + 0.3),
                    low: Some(close - 0.4),
                    close: Some(close),
                    volume: Some(10_000.0),
                },
            )
        })
        .collect()
}
