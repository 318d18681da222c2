//! Currency formatting and summary rendering

use std::fmt::Write;

use crate::schedule::MonthlySummary;

/// Format an amount in cents as a dollar string
///
/// Minor units are always rendered with two digits, so 5 cents is
/// `"$0.05"` rather than `"$0.5"`.
pub fn format_cents(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Render a monthly summary as a plain-text table
///
/// One line per bill in urgency order:
///
/// ```text
/// $262.62        Car Payment         due on 21 (in 0 days)
/// $325.00        Car Insurance       PAID! due on 5 (in 14 days)
/// ```
///
/// followed by a total line.
pub fn render_summary(summary: &MonthlySummary) -> String {
    let mut out = String::new();

    for scheduled in &summary.bills {
        let bill = &scheduled.bill;
        let _ = write!(
            out,
            "{:<15}{:<20}",
            format_cents(u64::from(bill.amount_cents)),
            bill.name
        );
        if bill.paid {
            out.push_str("PAID! ");
        }
        let _ = writeln!(
            out,
            "due on {} (in {} days)",
            bill.due_day, scheduled.days_until_due
        );
    }

    let _ = writeln!(
        out,
        "Total Monthly Expenses: {}",
        format_cents(summary.total_cents)
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{schedule_bills, total_amount, CalendarContext};
    use crate::types::Bill;

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(223362), "$2233.62");
        assert_eq!(format_cents(132500), "$1325.00");
        assert_eq!(format_cents(100), "$1.00");
        assert_eq!(format_cents(5), "$0.05");
        assert_eq!(format_cents(0), "$0.00");
    }

    #[test]
    fn test_render_summary() {
        let mut paid = Bill::new("Car Insurance".to_string(), 5, 32500);
        paid.paid = true;
        let bills = vec![Bill::new("Car Payment".to_string(), 21, 26262), paid];

        let ctx = CalendarContext::new(21, 30).unwrap();
        let summary = MonthlySummary {
            today_day: ctx.today_day(),
            month_length: ctx.month_length(),
            total_cents: total_amount(&bills),
            bills: schedule_bills(&ctx, &bills).unwrap(),
        };

        let rendered = render_summary(&summary);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "$262.62        Car Payment         due on 21 (in 0 days)");
        assert_eq!(
            lines[1],
            "$325.00        Car Insurance       PAID! due on 5 (in 14 days)"
        );
        assert_eq!(lines[2], "Total Monthly Expenses: $587.62");
    }
}
