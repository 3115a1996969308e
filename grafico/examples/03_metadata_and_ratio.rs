mod common;

use common::{example_symbols, get_source};
use grafico::Grafico;
use grafico_core::Field;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let grafico = Grafico::builder()
        .with_source(get_source())
        .years_back(1)
        .fetch_metadata(true)
        .build()?;

    let symbols = example_symbols();
    let dashboard = grafico.load(&symbols).await?;
    let set = dashboard.set();

    if let Some(meta) = dashboard.metadata() {
        println!("## Company metadata:");
        for (symbol, value) in meta.field_row("sector")? {
            println!(" - {symbol}: {}", value.unwrap_or("n/a"));
        }
    }

    // Relative-value series between the first two symbols.
    let mut names = set.symbols();
    if let (Some(a), Some(b)) = (names.next(), names.next()) {
        let ratio = set.ratio_of(a, b)?;
        let closes = ratio.column("close")?;
        println!("\n## {} close ratio (last 5):", ratio.symbol());
        for (date, value) in ratio.dates().iter().zip(&closes).rev().take(5) {
            println!(" - {date}: {value:.4}");
        }
    }

    println!(
        "\n## Close table: {} columns x {} rows",
        set.len(),
        set.field_table(Field::Close).dates.len()
    );
    Ok(())
}
