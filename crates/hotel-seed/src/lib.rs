//! Seed data for the hotel database.
//!
//! This crate populates the `Floor` and `Room` tables with the fixed hotel
//! layout: floors 1 through 9 with ten rooms each and a top floor with seven.
//! It can also mark a random, reproducible set of rooms occupied and list
//! every room with its status.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use hotel_seed::prelude::*;
//!
//! let config = SeedConfig::default();
//! let plan = HotelGenerator::new().generate();
//!
//! let pool = connect(&config.database).await?;
//! let outcome = Seeder::new(pool.clone())
//!     .seed(&plan, config.on_existing)
//!     .await;
//! pool.close().await;
//! ```

pub mod args;
pub mod config;
pub mod db;
pub mod generators;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::args::SeedArgs;
    pub use crate::config::{ConfigError, DatabaseConfig, ExistingDataPolicy, SeedConfig};
    pub use crate::db::{
        HotelSummary, OccupancyOutcome, RoomListing, RoomStatus, SeedError, SeedOutcome, Seeder,
        connect,
    };
    pub use crate::generators::{
        DEFAULT_OCCUPANCY_SEED, GeneratedFloor, GeneratedRoom, HotelGenerator, OccupancyGenerator,
        SeedPlan,
    };
}
