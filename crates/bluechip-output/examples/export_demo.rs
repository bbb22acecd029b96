//! Demonstration of rendering and exporting screening results.

use bluechip_data::{DividendPayment, TickerRecord};
use bluechip_output::{
    CriteriaBanner, ExportFormat, Exporter, ReportStyle, ScreenRow, Summary, render_outcome,
};
use bluechip_screen::{ScreenOutcome, Scorer};
use chrono::NaiveDate;

fn record(symbol: &str, name: &str, sector: &str, dps: f64, eps: f64, price: f64) -> TickerRecord {
    let mut record = TickerRecord::new(symbol);
    record.name = Some(name.to_string());
    record.sector = Some(sector.to_string());
    record.price = Some(price);
    record.eps_ttm = Some(eps);
    record.dividend_per_share = Some(dps);
    record.total_debt = Some(40.0);
    record.total_equity = Some(100.0);
    record.ebit = Some(30.0);
    record.interest_expense = Some(2.0);
    record.return_on_assets = Some(0.1);
    record.return_on_equity = Some(0.2);
    record
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== bluechip Export Demo ===\n");

    let mut pg = record("PG", "Procter & Gamble", "Consumer Defensive", 3.8, 6.5, 160.0);
    pg.dividend_history = (2019..=2023)
        .filter_map(|year| {
            NaiveDate::from_ymd_opt(year, 4, 15)
                .map(|date| DividendPayment::new(date, 3.0 * 1.06_f64.powi(year - 2019)))
        })
        .collect();

    let scorer = Scorer::default();
    let mut outcomes: Vec<_> = [
        pg,
        record("O", "Realty Income", "Real Estate", 3.1, 4.1, 55.0),
        record("T", "AT&T", "Communication Services", 1.1, 0.8, 11.0),
    ]
    .into_iter()
    .map(|r| {
        let (metrics, result) = scorer.evaluate(&r, None);
        ScreenOutcome::screened(r, metrics, result)
    })
    .collect();
    outcomes.push(ScreenOutcome::skipped("ZZZZ", "Symbol not found: ZZZZ"));

    println!("{}\n", CriteriaBanner(scorer.criteria()));

    // 1. Detailed and brief reports
    println!("1. Reports\n");
    println!("{}", render_outcome(&outcomes[0], ReportStyle::Detailed));
    for outcome in &outcomes {
        println!("{}", render_outcome(outcome, ReportStyle::Brief));
    }

    // 2. Summary
    println!("\n2. Summary\n");
    println!("{}", Summary::from_outcomes(&outcomes));

    // 3. Export
    println!("\n3. Export\n");
    let rows = ScreenRow::from_outcomes(&outcomes);

    println!("CSV Format:");
    println!("{}", rows.export_to_string(ExportFormat::Csv)?);

    println!("Pretty JSON Format:");
    println!("{}", rows.export_to_string(ExportFormat::PrettyJson)?);

    Ok(())
}
