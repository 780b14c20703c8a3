/// time control - watch a balance age using a test clock
use rent_ledger_rs::chrono::{Duration, TimeZone, Utc};
use rent_ledger_rs::{Money, SafeTimeProvider, SnapshotEngine, Tenant, TimeSource};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let start = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .ok_or("bad timestamp")?;
    let time = SafeTimeProvider::new(TimeSource::Test(start));
    let controller = time.test_control().ok_or("test clock required")?;
    let engine = SnapshotEngine::new(time);

    let tenant = Tenant::builder()
        .name("Room 3")
        .rent(Money::from_major(200))
        .weekly(1)
        .start_date(start.date_naive())
        .build()?;

    for week in 0..5 {
        let snapshot = engine.compute_snapshot_today(&tenant, &[]);
        println!(
            "week {}: {} periods, owed {}, {} days late",
            week, snapshot.periods_elapsed, snapshot.balance_due, snapshot.days_late
        );
        controller.advance(Duration::days(7));
    }

    Ok(())
}
