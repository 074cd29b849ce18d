use anyhow::Result;
use std::env;

use park_ledger::{logger, Ledger, NationalPark};

fn main() -> Result<()> {
    let verbose = env::args().skip(1).any(|arg| arg == "-v" || arg == "--verbose");
    logger::init_logger(verbose);

    tracing::info!(version = park_ledger::VERSION, "seeding sample ledger");
    let ledger = seed_sample_ledger()?;

    tracing::info!(
        visitors = ledger.visitors().count(),
        parks = ledger.parks().count(),
        trips = ledger.trips().count(),
        "ledger ready"
    );

    if let Some(park) = NationalPark::most_visited(&ledger) {
        println!("🏞️  Most visited: {} ({} trips)", park.name(), park.total_visits(&ledger));
    }

    println!("{}", serde_json::to_string_pretty(&ledger.park_report())?);

    Ok(())
}

fn seed_sample_ledger() -> Result<Ledger> {
    let mut ledger = Ledger::new();

    let ben = ledger.add_visitor("Ben")?;
    let ann = ledger.add_visitor("Ann")?;
    let yosemite = ledger.add_park("Yosemite")?;
    let zion = ledger.add_park("Zion")?;
    let arches = ledger.add_park("Arches")?;

    ledger.add_trip(&ben, &yosemite, "2023-01-01", "2023-01-05")?;
    ledger.add_trip(&ben, &zion, "2023-02-01", "2023-02-03")?;
    ledger.add_trip(&ann, &zion, "2023-03-10", "2023-03-12")?;
    ledger.add_trip(&ann, &arches, "2023-04-01", "2023-04-02")?;

    Ok(ledger)
}
