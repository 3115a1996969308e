use std::sync::Arc;

use chrono::{NaiveDate, TimeZone, Utc};
use grafico_core::{GraficoError, MarketDataSource};
use grafico_yfinance::{YfSource, adapter};
use paft::money::{Currency, IsoCurrency, Money};
use yfinance_rs as yf;

fn usd(s: &str) -> Money {
    Money::from_canonical_str(s, Currency::Iso(IsoCurrency::USD)).unwrap()
}

fn candle(day_ts: i64, close: &str, volume: Option<u64>) -> yf::Candle {
    yf::Candle {
        ts: Utc.timestamp_opt(day_ts, 0).unwrap(),
        open: usd("10.0").into(),
        high: usd("12.0").into(),
        low: usd("9.0").into(),
        close: usd(close).into(),
        close_unadj: None,
        volume,
        provider: (),
    }
}

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[tokio::test]
async fn history_converts_candles_to_raw_rows() {
    let hist = <dyn adapter::YfHistory>::from_fn(|symbol, req| {
        assert_eq!(symbol, "AG");
        assert!(req.period.is_some());
        assert!(!req.auto_adjust);
        Ok(yf::HistoryResponse {
            candles: vec![
                candle(1_672_617_600, "11.5", Some(1_000)), // 2023-01-02
                candle(1_672_704_000, "11.8", None),        // 2023-01-03, no volume
            ],
            actions: vec![],
            adjusted: false,
            meta: None,
            provider: (),
        })
    });
    let profile = <dyn adapter::YfProfile>::from_fn(|_| {
        Err(GraficoError::source("grafico-yfinance", "unused"))
    });

    let source = YfSource::from_adapters(hist, profile);
    let raw = source
        .daily_history(&["AG".to_string()], d("2023-01-01"), d("2023-02-01"))
        .await
        .unwrap();

    let (symbol, rows) = raw.entries().next().unwrap();
    assert_eq!(symbol, "AG");
    assert_eq!(rows.len(), 2);
    let first = rows.get(&d("2023-01-02")).unwrap();
    assert_eq!(first.close, Some(11.5));
    assert_eq!(first.volume, Some(1_000.0));
    // A candle without volume stays incomplete and gets dropped later by
    // the alignment step.
    let second = rows.get(&d("2023-01-03")).unwrap();
    assert_eq!(second.volume, None);
    assert!(second.complete().is_none());
}

#[tokio::test]
async fn provider_failure_aborts_the_fetch() {
    let hist = <dyn adapter::YfHistory>::from_fn(|symbol, _| {
        Err(GraficoError::not_found(format!("history for {symbol}")))
    });
    let profile = <dyn adapter::YfProfile>::from_fn(|_| {
        Err(GraficoError::source("grafico-yfinance", "unused"))
    });

    let source = YfSource::from_adapters(hist, profile);
    let err = source
        .daily_history(&["NOPE".to_string()], d("2023-01-01"), d("2023-02-01"))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        GraficoError::NotFound {
            what: "history for NOPE".into()
        }
    );
}

#[tokio::test]
async fn metadata_tabulates_profile_fields() {
    let hist = <dyn adapter::YfHistory>::from_fn(|_, _| {
        Err(GraficoError::source("grafico-yfinance", "unused"))
    });
    let profile = <dyn adapter::YfProfile>::from_fn(|symbol| {
        Ok(yf::profile::Profile::Company(
            paft::fundamentals::profile::CompanyProfile {
                name: format!("{symbol} Corp"),
                website: None,
                summary: None,
                address: None,
                sector: Some("Basic Materials".to_string()),
                industry: Some("Silver".to_string()),
                isin: None,
            },
        ))
    });

    let source = YfSource::from_adapters(hist, profile);
    let meta = source
        .company_metadata(&["AG".to_string()])
        .await
        .unwrap();
    assert_eq!(meta.get("AG", "name"), Some("AG Corp"));
    assert_eq!(meta.get("AG", "sector"), Some("Basic Materials"));
    assert_eq!(meta.get("AG", "website"), None);
}
