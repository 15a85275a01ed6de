//! Floor and room generation for the hotel layout.

/// Number of floors in the building.
pub const FLOOR_COUNT: i32 = 10;

/// Rooms on every floor below the top floor.
pub const ROOMS_PER_FLOOR: i32 = 10;

/// Rooms on the top floor.
pub const TOP_FLOOR_ROOMS: i32 = 7;

/// Generated room data ready for database insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedRoom {
    pub room_number: i32,
    pub is_available: bool,
}

/// Generated floor data ready for database insertion.
///
/// The floor's database identity is only known after insert, so rooms are
/// nested under their floor instead of carrying a `floor_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFloor {
    pub floor_number: i32,
    pub is_last_floor: bool,
    pub rooms: Vec<GeneratedRoom>,
}

/// The complete set of floors and rooms to seed, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedPlan {
    pub floors: Vec<GeneratedFloor>,
}

impl SeedPlan {
    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    pub fn room_count(&self) -> usize {
        self.floors.iter().map(|f| f.rooms.len()).sum()
    }

    /// Iterates over every room paired with its floor number.
    pub fn rooms(&self) -> impl Iterator<Item = (i32, &GeneratedRoom)> {
        self.floors
            .iter()
            .flat_map(|f| f.rooms.iter().map(move |r| (f.floor_number, r)))
    }
}

/// Returns how many rooms the given floor holds.
pub fn rooms_on_floor(floor_number: i32) -> i32 {
    if floor_number < FLOOR_COUNT {
        ROOMS_PER_FLOOR
    } else {
        TOP_FLOOR_ROOMS
    }
}

/// Returns the room number for the 1-based `offset` on `floor_number`.
///
/// Floor 3 offset 7 is room 307; floor 10 offset 1 is room 1001.
pub fn room_number(floor_number: i32, offset: i32) -> i32 {
    floor_number * 100 + offset
}

/// Generator for the fixed hotel layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct HotelGenerator;

impl HotelGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Builds the full plan: floors 1..=10 ascending, rooms ascending within each floor.
    pub fn generate(&self) -> SeedPlan {
        let floors = (1..=FLOOR_COUNT).map(|n| self.generate_floor(n)).collect();
        SeedPlan { floors }
    }

    fn generate_floor(&self, floor_number: i32) -> GeneratedFloor {
        let rooms = (1..=rooms_on_floor(floor_number))
            .map(|offset| GeneratedRoom {
                room_number: room_number(floor_number, offset),
                is_available: true,
            })
            .collect();

        GeneratedFloor {
            floor_number,
            is_last_floor: floor_number == FLOOR_COUNT,
            rooms,
        }
    }
}
