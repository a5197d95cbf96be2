//! Agreement inspection tool
//!
//! Loads a raw agreement record from a JSON file, runs the presentation
//! engine, and prints the derived page model as aligned text tables, or as
//! the JSON the template layer would receive.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use farming_agreement_core::{
    build_review_offer_model, build_view_agreement_model, Agreement, Table,
};

#[derive(Parser)]
#[command(name = "farming-agreement", about = "Render agreement view models")]
struct Args {
    /// Path to a raw agreement record (JSON)
    file: PathBuf,

    /// Which page model to build
    #[arg(long, value_enum, default_value_t = Page::Review)]
    page: Page,

    /// Emit the serialized model instead of text tables
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Page {
    /// Offer-review page (actions, payments, one-off annual payments)
    Review,
    /// Agreement-view page (land, actions with dates, schedule)
    View,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let raw = fs::read_to_string(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    let agreement = Agreement::from_json(&raw).context("parsing agreement record")?;

    match args.page {
        Page::Review => {
            let model = build_review_offer_model(&agreement);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&model)?);
                return Ok(());
            }
            println!("{}", model.page_title);
            print_table("Summary of actions", &model.summary_of_actions);
            print_table("Summary of payments", &model.summary_of_payments);
            if !model.annual_payments.is_empty() {
                println!("\nAdditional annual payments");
                for payment in &model.annual_payments {
                    println!("  {}  {}  {}", payment.code, payment.description, payment.payment);
                }
            }
        }
        Page::View => {
            let model = build_view_agreement_model(&agreement);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&model)?);
                return Ok(());
            }
            println!("{}", model.agreement_name);
            println!(
                "{} to {}",
                model.agreement_start_date, model.agreement_end_date
            );
            println!("Business: {}", model.business_name);
            println!("Applicant: {}", model.applicant_name);
            print_table("Land", &model.agreement_land);
            print_table("Summary of actions", &model.summary_of_actions);
            print_table("Summary of payments", &model.summary_of_payments);
            print_table("Annual payment schedule", &model.annual_payment_schedule);
        }
    }

    Ok(())
}

/// Print a `{headings, data}` table with columns padded to their widest cell.
fn print_table(title: &str, table: &Table) {
    println!("\n{title}");

    let rows: Vec<Vec<String>> = std::iter::once(&table.headings)
        .chain(table.data.iter())
        .map(|row| row.iter().map(|cell| cell.text.to_string()).collect())
        .collect();

    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|text| text.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(col, text)| {
                let width = widths[col];
                let pad = width.saturating_sub(text.chars().count());
                format!("{text}{}", " ".repeat(pad))
            })
            .collect();
        println!("  {}", line.join("  ").trim_end());
    }
}
