//! CSV Analysis Example
//!
//! Loads a small CSV table, runs all three analyses, and prints the
//! resulting report the way a downstream pipeline would consume it:
//! key metrics as a table, trends and correlations as bullet points.
//!
//! Run with: cargo run --example csv_summary

use tabula_analytics::{AnalysisConfig, DatasetSummary};
use tabula_csv::read_str;

const SALES_CSV: &str = "\
month,revenue,units,returns
Jan,1200,240,18
Feb,1260,252,16
Mar,1310,,19
Apr,1280,256,17
May,1375,275,18
Jun,1420,284,17
Jul,1495,299,18
Aug,1510,NA,19
Sep,1580,316,17
Oct,1625,325,18
Nov,1690,338,18
Dec,1740,348,17
";

fn main() {
    println!("==========================================");
    println!("  Tabula CSV Analysis Example");
    println!("==========================================\n");

    let dataset = match read_str(SALES_CSV) {
        Ok(dataset) => dataset,
        Err(err) => {
            eprintln!("failed to load CSV: {err}");
            std::process::exit(1);
        }
    };

    println!(
        "Loaded {} rows x {} columns: {:?}\n",
        dataset.row_count(),
        dataset.column_count(),
        dataset.column_names()
    );

    let config = AnalysisConfig::default().with_correlation_threshold(0.5);
    let summary = DatasetSummary::compute(&dataset, &config);

    println!("Key metrics:");
    for (name, value) in summary.key_metrics.iter() {
        println!("  {name:<16} {value:>12.4}");
    }

    println!("\nTrends:");
    for trend in &summary.trends {
        println!("  [{:>6}] {}", trend.direction, trend.description);
    }

    println!("\nCorrelations (|r| >= {}):", config.correlation_threshold);
    for record in &summary.correlations {
        println!(
            "  {} <-> {}  r = {:+.4}",
            record.a, record.b, record.coefficient
        );
    }
}
