//! Bill list parsing example

use billtrack_core::utils::MemoryStorage;
use billtrack_core::{parse_bills, render_summary, BillBook};
use chrono::Local;

const BILLS_SOURCE: &str = "\
# amount  name  due-day
$1325        Rent                 1st
$325         Car Insurance        5th
$262.62      Car Payment          21st
$88          Internet             18th
$68          Phone                17th
$150         Electricity          15th
$15          Renter's Insurance   12th
";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("📄 Billtrack Core - Bill List Parsing Example\n");

    let bills = parse_bills(BILLS_SOURCE)?;
    println!("Parsed {} bills from source\n", bills.len());

    let storage = MemoryStorage::new();
    let mut book = BillBook::new(storage);
    for bill in bills {
        book.add_bill(bill.name, bill.due_day, bill.amount_cents)
            .await?;
    }

    let today = Local::now().date_naive();
    let summary = book.monthly_summary(today).await?;
    print!("{}", render_summary(&summary));

    Ok(())
}
