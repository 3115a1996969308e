use grafico_core::MarketDataSource;
use std::sync::Arc;

#[must_use]
pub fn get_source() -> Arc<dyn MarketDataSource> {
    if std::env::var("GRAFICO_EXAMPLES_USE_MOCK").is_ok() {
        println!("--- (Using Mock Source for CI) ---");
        Arc::new(grafico_mock::MockSource::new())
    } else {
        Arc::new(grafico_yfinance::YfSource::new_default())
    }
}

#[must_use]
pub fn example_symbols() -> Vec<String> {
    if std::env::var("GRAFICO_EXAMPLES_USE_MOCK").is_ok() {
        vec!["AG".into(), "EXK".into(), "FNV".into()]
    } else {
        vec![
            "AG".into(),
            "EXK".into(),
            "FNV".into(),
            "GOLD".into(),
            "MMX.TO".into(),
        ]
    }
}
