//! Default data used to bootstrap storage on first run, or after a load
//! failure the store cannot recover from.

use crate::types::{Room, RoomId, RoomType, User};

/// Source of the default catalog and users.
pub trait SeedData {
    fn rooms(&self) -> Vec<Room>;
    fn users(&self) -> Vec<User>;
}

/// The built-in catalog: 25 rooms in three tiers and two base users.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSeed;

pub const DEFAULT_ROOM_COUNT: RoomId = 25;

struct Tier {
    last_id: RoomId,
    room_type: RoomType,
    room_count: i64,
    capacity: i64,
    nightly_price: i64,
}

const TIERS: [Tier; 3] = [
    Tier { last_id: 10, room_type: RoomType::Single, room_count: 1, capacity: 1, nightly_price: 60_000 },
    Tier { last_id: 20, room_type: RoomType::Double, room_count: 2, capacity: 2, nightly_price: 85_000 },
    Tier { last_id: DEFAULT_ROOM_COUNT, room_type: RoomType::Suite, room_count: 3, capacity: 4, nightly_price: 140_000 },
];

impl SeedData for DefaultSeed {
    fn rooms(&self) -> Vec<Room> {
        (1..=DEFAULT_ROOM_COUNT)
            .filter_map(|id| {
                let tier = TIERS.iter().find(|t| id <= t.last_id)?;
                Some(Room {
                    id,
                    code: Room::code_for(id),
                    room_type: tier.room_type.to_string(),
                    room_count: tier.room_count,
                    capacity: tier.capacity,
                    nightly_price: tier.nightly_price,
                    reservations: Vec::new(),
                })
            })
            .collect()
    }

    fn users(&self) -> Vec<User> {
        vec![
            User { id: 1, name: "Ana Pérez".into(), national_id: "30123456".into() },
            User { id: 2, name: "Luis Gómez".into(), national_id: "28999888".into() },
        ]
    }
}
