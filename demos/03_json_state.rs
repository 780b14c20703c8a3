/// json state - load stored collections, including malformed records
use rent_ledger_rs::chrono::NaiveDate;
use rent_ledger_rs::{Portfolio, SnapshotEngine};

const STORED: &str = r#"{
  "tenants": [
    {
      "id": "6f1c1c2e-52a4-4c39-9d0b-1a52a4f5e9a1",
      "name": "Basement",
      "monthlyRent": "850",
      "frequency": "Monthly",
      "dueDay": 31,
      "startDate": "2024-01-31"
    }
  ],
  "payments": [
    {
      "id": "0d4b9f0e-3a55-4a55-8c2e-8fd1b7d4c001",
      "tenantId": "6f1c1c2e-52a4-4c39-9d0b-1a52a4f5e9a1",
      "datePaid": "2024-02-01",
      "amountPaid": 850
    },
    {
      "id": "lq7x2k9a0b3c",
      "tenantId": "6f1c1c2e-52a4-4c39-9d0b-1a52a4f5e9a1",
      "datePaid": "not a date",
      "amountPaid": "NaN"
    }
  ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let portfolio = Portfolio::from_json(STORED)?;
    let as_of = NaiveDate::from_ymd_opt(2024, 4, 15).ok_or("bad date")?;

    for snapshot in portfolio.snapshots(&SnapshotEngine::system(), as_of) {
        println!("{}", snapshot.to_json_pretty()?);
    }

    println!("\nround-tripped portfolio:\n{}", portfolio.to_json()?);

    Ok(())
}
