//! Basic bill tracking example

use billtrack_core::utils::MemoryStorage;
use billtrack_core::{render_summary, BillBook};
use chrono::Local;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("💸 Billtrack Core - Basic Bills Example\n");

    // Create a new bill book with in-memory storage
    let storage = MemoryStorage::new();
    let mut book = BillBook::new(storage);

    // 1. Register the monthly bills
    println!("📋 Registering Bills...");
    let bills = [
        ("Rent", 1, 132500),
        ("Car Insurance", 5, 32500),
        ("Car Payment", 21, 26262),
        ("Internet", 18, 8800),
        ("Phone", 17, 6800),
        ("Electricity", 15, 15000),
        ("Renter's Insurance", 12, 1500),
    ];

    for (name, due_day, amount_cents) in bills {
        let bill = book.add_bill(name.to_string(), due_day, amount_cents).await?;
        println!("  ✓ Added: {} due on day {}", bill.name, bill.due_day);
    }
    println!();

    // 2. Pay a couple of bills for this cycle
    println!("💰 Paying Bills...");
    book.mark_paid("Rent").await?;
    println!("  ✓ Paid: Rent");
    book.mark_paid("Phone").await?;
    println!("  ✓ Paid: Phone");
    println!();

    // 3. Evaluate against today's date and print the summary
    let today = Local::now().date_naive();
    let summary = book.monthly_summary(today).await?;

    println!("📅 Bills by urgency (as of {}):\n", today);
    print!("{}", render_summary(&summary));

    Ok(())
}
