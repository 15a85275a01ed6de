//! Database seeding utilities.

use rand::SeedableRng;
use rand::rngs::StdRng;
use sqlx::postgres::{PgConnection, PgPoolOptions};
use sqlx::{PgPool, Postgres, Transaction};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{DatabaseConfig, ExistingDataPolicy};
use crate::generators::{GeneratedFloor, GeneratedRoom, OccupancyGenerator, SeedPlan};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Database already seeded ({floors} floors, {rooms} rooms)")]
    AlreadySeeded { floors: i64, rooms: i64 },
}

/// Row counts of the hotel tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HotelSummary {
    pub floors: i64,
    pub rooms: i64,
}

impl HotelSummary {
    pub fn is_empty(&self) -> bool {
        self.floors == 0 && self.rooms == 0
    }
}

/// Result of a seeding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The plan was written and committed.
    Seeded {
        floors: usize,
        rooms: usize,
        /// Rows deleted first under [`ExistingDataPolicy::Replace`].
        cleared: Option<HotelSummary>,
    },
    /// Data already existed and the policy was [`ExistingDataPolicy::Skip`].
    Skipped { existing: HotelSummary },
}

/// Availability of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomStatus {
    Available,
    Occupied,
}

impl RoomStatus {
    pub fn from_available(is_available: bool) -> Self {
        if is_available {
            RoomStatus::Available
        } else {
            RoomStatus::Occupied
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Available => "available",
            RoomStatus::Occupied => "occupied",
        }
    }
}

/// A room as stored, joined with its floor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomListing {
    pub id: i32,
    pub room_number: i32,
    pub floor_number: i32,
    pub status: RoomStatus,
}

/// Result of randomizing occupancy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyOutcome {
    /// Room numbers now occupied, ascending.
    pub occupied: Vec<i32>,
    /// Rooms left available.
    pub available: usize,
}

/// Opens the single connection used for a seeding run.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, SeedError> {
    info!("Connecting to database at {}", config.target());

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect_with(config.connect_options())
        .await?;

    Ok(pool)
}

/// Database seeder for inserting the generated hotel layout.
pub struct Seeder {
    pool: PgPool,
}

impl Seeder {
    /// Creates a new seeder with the given database pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Seeds the plan inside a single transaction.
    ///
    /// Either every floor and room is committed or nothing is: any error
    /// rolls the transaction back before it is returned.
    pub async fn seed(
        &self,
        plan: &SeedPlan,
        policy: ExistingDataPolicy,
    ) -> Result<SeedOutcome, SeedError> {
        let mut tx = self.pool.begin().await?;
        let result = seed_in_transaction(&mut tx, plan, policy).await;
        let outcome = finish(tx, result).await?;

        match &outcome {
            SeedOutcome::Seeded { floors, rooms, .. } => {
                info!("Seeded {} floors and {} rooms", floors, rooms);
            }
            SeedOutcome::Skipped { existing } => {
                info!(
                    "Skipped seeding: {} floors and {} rooms already present",
                    existing.floors, existing.rooms
                );
            }
        }
        Ok(outcome)
    }

    /// Marks every room available, then occupies a random 1..=N of them.
    ///
    /// The choice depends only on `seed` and the set of room ids, so the
    /// same seed against the same rows occupies the same rooms.
    pub async fn randomize_occupancy(&self, seed: u64) -> Result<OccupancyOutcome, SeedError> {
        let mut tx = self.pool.begin().await?;
        let result = occupy_in_transaction(&mut tx, seed).await;
        let outcome = finish(tx, result).await?;

        info!(
            "Occupied {} rooms, {} available (seed {})",
            outcome.occupied.len(),
            outcome.available,
            seed
        );
        Ok(outcome)
    }

    /// Lists every room with its floor, ordered by floor then room number.
    pub async fn list_rooms(&self) -> Result<Vec<RoomListing>, SeedError> {
        let rows: Vec<(i32, i32, i32, bool)> = sqlx::query_as(
            r#"
            SELECT r.id, r."roomNumber", f."floorNumber", r."isAvailable"
            FROM "Room" r
            JOIN "Floor" f ON f.id = r."floorId"
            ORDER BY r."floorId", r."roomNumber"
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, room_number, floor_number, is_available)| RoomListing {
                id,
                room_number,
                floor_number,
                status: RoomStatus::from_available(is_available),
            })
            .collect())
    }

    /// Returns the current floor and room counts.
    pub async fn summary(&self) -> Result<HotelSummary, SeedError> {
        let mut conn = self.pool.acquire().await?;
        count_rows(&mut conn).await
    }
}

async fn seed_in_transaction(
    conn: &mut PgConnection,
    plan: &SeedPlan,
    policy: ExistingDataPolicy,
) -> Result<SeedOutcome, SeedError> {
    // Self-conflicting lock: a concurrent run waits here until this one
    // commits, then counts the committed rows.
    sqlx::query(r#"LOCK TABLE "Floor", "Room" IN SHARE ROW EXCLUSIVE MODE"#)
        .execute(&mut *conn)
        .await?;

    let existing = count_rows(conn).await?;
    let mut cleared = None;

    if !existing.is_empty() {
        match policy {
            ExistingDataPolicy::Append => {
                warn!(
                    "Found {} floors and {} rooms; appending duplicates",
                    existing.floors, existing.rooms
                );
            }
            ExistingDataPolicy::Skip => return Ok(SeedOutcome::Skipped { existing }),
            ExistingDataPolicy::Fail => {
                return Err(SeedError::AlreadySeeded {
                    floors: existing.floors,
                    rooms: existing.rooms,
                });
            }
            ExistingDataPolicy::Replace => {
                clear_all(conn).await?;
                cleared = Some(existing);
            }
        }
    }

    info!(
        "Seeding {} floors and {} rooms...",
        plan.floor_count(),
        plan.room_count()
    );

    for floor in &plan.floors {
        let floor_id = insert_floor(conn, floor).await?;
        for room in &floor.rooms {
            insert_room(conn, floor_id, room).await?;
        }
        debug!(
            "  Seeded floor {} (id {}) with {} rooms",
            floor.floor_number,
            floor_id,
            floor.rooms.len()
        );
    }

    Ok(SeedOutcome::Seeded {
        floors: plan.floor_count(),
        rooms: plan.room_count(),
        cleared,
    })
}

async fn occupy_in_transaction(
    conn: &mut PgConnection,
    seed: u64,
) -> Result<OccupancyOutcome, SeedError> {
    sqlx::query(r#"UPDATE "Room" SET "isAvailable" = true"#)
        .execute(&mut *conn)
        .await?;

    let room_ids: Vec<i32> = sqlx::query_scalar(r#"SELECT id FROM "Room" ORDER BY id"#)
        .fetch_all(&mut *conn)
        .await?;

    let picked =
        OccupancyGenerator::new().pick_occupied(&room_ids, &mut StdRng::seed_from_u64(seed));

    let mut occupied: Vec<i32> = sqlx::query_scalar(
        r#"
        UPDATE "Room" SET "isAvailable" = false
        WHERE id = ANY($1)
        RETURNING "roomNumber"
        "#,
    )
    .bind(&picked)
    .fetch_all(&mut *conn)
    .await?;
    occupied.sort_unstable();

    Ok(OccupancyOutcome {
        available: room_ids.len() - occupied.len(),
        occupied,
    })
}

/// Commits on success; otherwise rolls back and returns the original error.
async fn finish<T>(
    tx: Transaction<'_, Postgres>,
    result: Result<T, SeedError>,
) -> Result<T, SeedError> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(e) => {
            warn!("Rolling back: {e}");
            if let Err(rollback) = tx.rollback().await {
                warn!("Rollback failed: {rollback}");
            }
            Err(e)
        }
    }
}

/// Inserts a floor and returns its generated id.
async fn insert_floor(conn: &mut PgConnection, floor: &GeneratedFloor) -> Result<i32, SeedError> {
    let id = sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO "Floor" ("floorNumber", "isLastFloor")
        VALUES ($1, $2)
        RETURNING id
        "#,
    )
    .bind(floor.floor_number)
    .bind(floor.is_last_floor)
    .fetch_one(&mut *conn)
    .await?;

    Ok(id)
}

async fn insert_room(
    conn: &mut PgConnection,
    floor_id: i32,
    room: &GeneratedRoom,
) -> Result<(), SeedError> {
    sqlx::query(
        r#"
        INSERT INTO "Room" ("roomNumber", "isAvailable", "floorId")
        VALUES ($1, $2, $3)
        "#,
    )
    .bind(room.room_number)
    .bind(room.is_available)
    .bind(floor_id)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

async fn count_rows(conn: &mut PgConnection) -> Result<HotelSummary, SeedError> {
    let floors: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM "Floor""#)
        .fetch_one(&mut *conn)
        .await?;
    let rooms: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM "Room""#)
        .fetch_one(&mut *conn)
        .await?;

    Ok(HotelSummary { floors, rooms })
}

/// Deletes every room and floor.
async fn clear_all(conn: &mut PgConnection) -> Result<(), SeedError> {
    info!("Clearing existing floors and rooms...");

    // Rooms reference floors
    sqlx::query(r#"DELETE FROM "Room""#)
        .execute(&mut *conn)
        .await?;
    sqlx::query(r#"DELETE FROM "Floor""#)
        .execute(&mut *conn)
        .await?;

    Ok(())
}
