//! Integration tests for billtrack-core

use billtrack_core::{
    parse_bills, render_summary,
    utils::{EnhancedBillValidator, MemoryStorage},
    BillBook, BillError, CalendarContext,
};

const BILLS_SOURCE: &str = "\
$1325        Rent                 1st
$325         Car Insurance        5th
$262.62      Car Payment          21st
$88          Internet             18th
$68          Phone                17th
$150         Electricity          15th
$15          Renter's Insurance   12th
";

#[tokio::test]
async fn test_complete_bill_tracking_workflow() {
    let storage = MemoryStorage::new();
    let mut book = BillBook::new(storage);

    // Load the bill list from its text source
    let bills = parse_bills(BILLS_SOURCE).unwrap();
    assert_eq!(bills.len(), 7);

    for bill in &bills {
        book.add_bill(bill.name.clone(), bill.due_day, bill.amount_cents)
            .await
            .unwrap();
    }

    // Evaluate on the 21st of a 30-day month
    let ctx = CalendarContext::new(21, 30).unwrap();
    let summary = book.monthly_summary_with_context(ctx).await.unwrap();

    assert_eq!(summary.total_cents, 223362);

    let ordered: Vec<(&str, u32)> = summary
        .bills
        .iter()
        .map(|s| (s.bill.name.as_str(), s.days_until_due))
        .collect();
    assert_eq!(
        ordered,
        vec![
            ("Car Payment", 0),
            ("Rent", 10),
            ("Car Insurance", 14),
            ("Renter's Insurance", 21),
            ("Electricity", 24),
            ("Phone", 26),
            ("Internet", 27),
        ]
    );

    // Urgency ordering is non-decreasing
    assert!(summary
        .bills
        .windows(2)
        .all(|w| w[0].days_until_due <= w[1].days_until_due));

    let rendered = render_summary(&summary);
    assert!(rendered.contains("due on 21 (in 0 days)"));
    assert!(rendered.ends_with("Total Monthly Expenses: $2233.62\n"));
}

#[tokio::test]
async fn test_paying_a_bill_reorders_the_summary() {
    let storage = MemoryStorage::new();
    let mut book = BillBook::new(storage);

    book.add_bill("Car Payment".to_string(), 21, 26262)
        .await
        .unwrap();
    book.add_bill("Car Insurance".to_string(), 5, 32500)
        .await
        .unwrap();

    let ctx = CalendarContext::new(21, 30).unwrap();

    // Unpaid and due today: Car Payment leads.
    let before = book.monthly_summary_with_context(ctx).await.unwrap();
    assert_eq!(before.bills[0].bill.name, "Car Payment");
    assert_eq!(before.bills[0].days_until_due, 0);

    // Once paid, its next occurrence is a month out and it drops behind.
    book.mark_paid("Car Payment").await.unwrap();
    let after = book.monthly_summary_with_context(ctx).await.unwrap();
    assert_eq!(after.bills[0].bill.name, "Car Insurance");
    assert_eq!(after.bills[1].bill.name, "Car Payment");
    assert_eq!(after.bills[1].days_until_due, 30);

    let rendered = render_summary(&after);
    assert!(rendered.contains("PAID! due on 21 (in 30 days)"));

    // New cycle: reset the flags and the original order returns.
    book.mark_all_unpaid().await.unwrap();
    let reset = book.monthly_summary_with_context(ctx).await.unwrap();
    assert_eq!(reset.bills[0].bill.name, "Car Payment");
}

#[tokio::test]
async fn test_enhanced_validator_with_bill_book() {
    let storage = MemoryStorage::new();
    let mut book = BillBook::with_validator(storage, Box::new(EnhancedBillValidator));

    let err = book.add_bill("  Rent  ".to_string(), 1, 132500).await;
    assert!(matches!(err, Err(BillError::Validation(_))));

    book.add_bill("Rent".to_string(), 1, 132500).await.unwrap();
}

#[tokio::test]
async fn test_summary_is_all_or_nothing() {
    let storage = MemoryStorage::new();
    let mut book = BillBook::new(storage);

    book.add_bill("Rent".to_string(), 1, 132500).await.unwrap();
    book.add_bill("Month-End".to_string(), 31, 5000)
        .await
        .unwrap();

    // A due day that does not exist in a 30-day month fails the whole
    // pass rather than reporting an ordering for the valid subset.
    let ctx = CalendarContext::new(15, 30).unwrap();
    assert!(matches!(
        book.monthly_summary_with_context(ctx).await,
        Err(BillError::InvalidCalendarInput(_))
    ));

    // In a 31-day month the same collection evaluates fine.
    let ctx = CalendarContext::new(15, 31).unwrap();
    let summary = book.monthly_summary_with_context(ctx).await.unwrap();
    assert_eq!(summary.bills.len(), 2);
}

#[test]
fn test_bill_serialization_shape() {
    let bill = billtrack_core::Bill::new("Rent".to_string(), 1, 132500);
    let json = serde_json::to_value(&bill).unwrap();

    assert_eq!(json["name"], "Rent");
    assert_eq!(json["due_day"], 1);
    assert_eq!(json["amount_cents"], 132500);
    assert_eq!(json["paid"], false);
}
