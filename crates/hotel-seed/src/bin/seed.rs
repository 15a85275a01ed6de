//! Seed script - creates the hotel floors and rooms
//!
//! Run with:
//! ```
//! cargo run -p hotel-seed --bin seed
//! ```

use std::time::Instant;

use clap::Parser;
use hotel_seed::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = SeedArgs::parse();
    let config = args.resolve()?;
    let plan = HotelGenerator::new().generate();

    if args.dry_run {
        print_plan(&plan, &config)?;
        return Ok(());
    }

    let started = Instant::now();
    let pool = connect(&config.database).await?;
    tracing::info!("Connected to database");

    let result = run(&Seeder::new(pool.clone()), &plan, &config, &args).await;

    // Release the connection whether or not seeding succeeded
    pool.close().await;

    result?;
    tracing::info!("Seed completed in {} ms", started.elapsed().as_millis());
    Ok(())
}

async fn run(
    seeder: &Seeder,
    plan: &SeedPlan,
    config: &SeedConfig,
    args: &SeedArgs,
) -> Result<(), SeedError> {
    match seeder.seed(plan, config.on_existing).await? {
        SeedOutcome::Seeded {
            floors,
            rooms,
            cleared,
        } => {
            if let Some(cleared) = cleared {
                tracing::info!(
                    "  Replaced: {} floors, {} rooms",
                    cleared.floors,
                    cleared.rooms
                );
            }
            println!("Database seeded with {floors} floors and {rooms} rooms.");
        }
        SeedOutcome::Skipped { existing } => {
            println!(
                "Database already holds {} floors and {} rooms; nothing seeded.",
                existing.floors, existing.rooms
            );
        }
    }

    if args.occupy_random {
        let occupancy = seeder.randomize_occupancy(args.occupancy_seed()).await?;
        println!(
            "Marked {} rooms occupied, {} available.",
            occupancy.occupied.len(),
            occupancy.available
        );
    }

    if args.list_rooms {
        for room in seeder.list_rooms().await? {
            println!(
                "{:>5}  floor {:>2}  {}",
                room.room_number,
                room.floor_number,
                room.status.as_str()
            );
        }
    }

    Ok(())
}

fn print_plan(plan: &SeedPlan, config: &SeedConfig) -> anyhow::Result<()> {
    for floor in &plan.floors {
        let rooms: Vec<String> = floor
            .rooms
            .iter()
            .map(|r| r.room_number.to_string())
            .collect();
        let marker = if floor.is_last_floor { " (top)" } else { "" };
        println!("Floor {}{}: {}", floor.floor_number, marker, rooms.join(", "));
    }

    println!();
    println!("# Effective configuration");
    print!("{}", config.to_toml_string()?);
    println!(
        "Dry run: {} floors and {} rooms would be seeded into {}",
        plan.floor_count(),
        plan.room_count(),
        config.database.target()
    );
    Ok(())
}
