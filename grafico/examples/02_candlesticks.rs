mod common;

use common::{example_symbols, get_source};
use grafico::Grafico;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Seeded so two runs paint the same candle colors.
    let grafico = Grafico::builder()
        .with_source(get_source())
        .years_back(2)
        .chart_seed(7)
        .build()?;

    let symbols = example_symbols();
    let dashboard = grafico.load(&symbols).await?;

    // Candlesticks plus the rolling-mean overlay for the first two symbols.
    let selected: Vec<&str> = dashboard.set().symbols().take(2).collect();
    let figure = dashboard.candlestick_figure(&selected)?;

    println!("## Candlestick figure:");
    for trace in &figure.data {
        println!(" - {} ({} points)", trace.name(), trace.len());
    }
    println!("{}", serde_json::to_string(&figure)?);
    Ok(())
}
