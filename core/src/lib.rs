//! Persistence core for the hotel booking application.
//!
//! Rooms (with their reservations) and users live in two flat text files.
//! `store` reads and writes them, `reservation_codec` packs a room's
//! reservations into a single field, `seed` supplies the default catalog
//! used on first run.

pub mod config;
pub mod error;
pub mod reservation_codec;
pub mod seed;
pub mod store;
pub mod types;

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use reservation_codec::{decode_reservations, encode_reservations};
pub use seed::{DefaultSeed, SeedData};
pub use store::HotelStore;
pub use types::{HotelData, Reservation, Room, RoomType, User};
