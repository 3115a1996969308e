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

    let symbols = example_symbols();
    let grafico = Grafico::builder()
        .with_source(get_source())
        .years_back(2)
        .build()?;

    println!("Loading {} symbols...", symbols.len());
    let dashboard = grafico.load(&symbols).await?;

    // One normalized close line per loaded symbol, over the full range.
    let selected: Vec<&str> = dashboard.set().symbols().collect();
    let figure = dashboard.line_figure(&selected, None, None)?;

    println!(
        "## Line figure ({} traces over {} shared dates):",
        figure.data.len(),
        dashboard.set().date_index().len()
    );
    println!("{}", serde_json::to_string_pretty(&figure)?);
    Ok(())
}
