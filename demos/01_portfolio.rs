/// portfolio - several tenants, payments and portfolio totals
use rent_ledger_rs::chrono::NaiveDate;
use rent_ledger_rs::{Money, Portfolio, SnapshotEngine, Tenant};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    rent_ledger_rs::init();

    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).ok_or("bad date");
    let mut portfolio = Portfolio::new();

    let flat = portfolio.add_tenant(
        Tenant::builder()
            .name("Flat 1")
            .rent(Money::from_major(1_000))
            .monthly(1)
            .start_date(date(2024, 1, 1)?)
            .build()?,
    );
    let garage = portfolio.add_tenant(
        Tenant::builder()
            .name("Garage")
            .rent(Money::from_major(60))
            .weekly(5)
            .start_date(date(2024, 1, 5)?)
            .build()?,
    );

    portfolio.record_payment(&flat, date(2024, 1, 2)?, Money::from_major(1_000), None)?;
    portfolio.record_payment(&flat, date(2024, 2, 3)?, Money::from_major(1_000), Some("february".into()))?;
    portfolio.record_payment(&garage, date(2024, 1, 5)?, Money::from_major(300), None)?;

    let engine = SnapshotEngine::system();
    let as_of = date(2024, 3, 10)?;

    for snapshot in portfolio.snapshots(&engine, as_of) {
        let name = portfolio
            .tenant(&snapshot.tenant_id)
            .map(|t| t.name.as_str())
            .unwrap_or("?");
        println!(
            "{:<8} {:<8} balance {:>8}  days late {:>3}  next due {}",
            name, snapshot.status, snapshot.balance_due, snapshot.days_late, snapshot.next_due_date
        );
    }

    let summary = portfolio.summary(&engine, as_of);
    println!(
        "\ncollected {}  outstanding {}  overdue {}/{}  collection rate {}%",
        summary.total_collected,
        summary.total_outstanding,
        summary.overdue_count,
        summary.tenant_count,
        summary.collection_rate
    );

    Ok(())
}
