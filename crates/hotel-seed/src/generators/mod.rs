//! Entity generators for seed data.
//!
//! Generation is pure: [`HotelGenerator`] builds the whole [`SeedPlan`] in
//! memory and the [`Seeder`](crate::db::Seeder) persists it afterwards.
//! [`OccupancyGenerator`] chooses which existing rooms to mark occupied.

pub mod hotel;
pub mod occupancy;

pub use hotel::{
    FLOOR_COUNT, GeneratedFloor, GeneratedRoom, HotelGenerator, ROOMS_PER_FLOOR, SeedPlan,
    TOP_FLOOR_ROOMS, room_number, rooms_on_floor,
};
pub use occupancy::{DEFAULT_OCCUPANCY_SEED, OccupancyGenerator};
