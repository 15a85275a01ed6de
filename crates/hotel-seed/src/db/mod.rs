//! Database integration for seeding.
//!
//! [`connect`] opens the single connection a run uses and the [`Seeder`]
//! writes a [`SeedPlan`](crate::generators::SeedPlan) inside one transaction.

mod seeder;

pub use seeder::{
    HotelSummary, OccupancyOutcome, RoomListing, RoomStatus, SeedError, SeedOutcome, Seeder,
    connect,
};
