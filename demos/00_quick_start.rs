/// quick start - minimal example to get started
use rent_ledger_rs::chrono::NaiveDate;
use rent_ledger_rs::{Money, PaymentRecord, SnapshotEngine, Tenant};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("bad date")?;
    let as_of = NaiveDate::from_ymd_opt(2024, 3, 1).ok_or("bad date")?;

    // a $1,000 monthly tenancy due on the 1st
    let tenant = Tenant::builder()
        .name("Flat 1")
        .rent(Money::from_major(1_000))
        .monthly(1)
        .start_date(start)
        .build()?;

    // one month paid so far
    let payments = vec![PaymentRecord::new(tenant.id.clone(), start, Money::from_major(1_000))];

    let snapshot = SnapshotEngine::system().compute_snapshot(&tenant, &payments, as_of);

    println!("{}", snapshot.to_json_pretty()?);

    Ok(())
}
