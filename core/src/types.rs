//! Records persisted by the hotel store.
//!
//! Rooms own their reservations. Users and rooms are identified by
//! externally assigned integer ids, unique within their collection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::reservation_codec::{FIELD_DELIMITER, RECORD_DELIMITER};

/// Separator between the fields of a user or room line on disk.
pub const LINE_DELIMITER: char = '|';

pub type UserId = i64;
pub type RoomId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub national_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    Single,
    Double,
    Suite,
}

impl RoomType {
    pub const ALL: [RoomType; 3] = [RoomType::Single, RoomType::Double, RoomType::Suite];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Single => "Single",
            RoomType::Double => "Double",
            RoomType::Suite => "Suite",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRoomType(pub String);

impl fmt::Display for UnknownRoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown room type {:?}", self.0)
    }
}

impl std::error::Error for UnknownRoomType {}

impl FromStr for RoomType {
    type Err = UnknownRoomType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Single" => Ok(RoomType::Single),
            // Older data files spell it "Doble".
            "Double" | "Doble" => Ok(RoomType::Double),
            "Suite" => Ok(RoomType::Suite),
            other => Err(UnknownRoomType(other.to_string())),
        }
    }
}

/// A booking embedded in its room. It has no identity of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub guest_name: String,
    pub check_in: String,
    pub check_out: String,
    pub nightly_price: i64,
    pub occupants: i64,
    /// Copy of the owning room's type at booking time.
    pub room_type: String,
    /// Copy of the owning room's room count at booking time.
    pub room_count: i64,
    pub payment_method: String,
}

impl Reservation {
    /// True if any text field holds a character the on-disk format
    /// uses as a separator. Such a reservation cannot be read back.
    pub fn contains_delimiter(&self) -> bool {
        [
            &self.guest_name,
            &self.check_in,
            &self.check_out,
            &self.room_type,
            &self.payment_method,
        ]
        .iter()
        .any(|field| has_delimiter(field))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub code: String,
    /// Type text exactly as stored. See [`Room::kind`] for the known types.
    pub room_type: String,
    pub room_count: i64,
    pub capacity: i64,
    pub nightly_price: i64,
    pub reservations: Vec<Reservation>,
}

impl Room {
    /// Catalog code for a room id: `H` followed by the id padded to 3 digits.
    pub fn code_for(id: RoomId) -> String {
        format!("H{id:03}")
    }

    /// The catalog type this room belongs to, if its type text is one
    /// of the known ones.
    pub fn kind(&self) -> Option<RoomType> {
        self.room_type.parse().ok()
    }

    pub fn add_reservation(&mut self, reservation: Reservation) {
        self.reservations.push(reservation);
    }
}

/// Everything the store persists: the room catalog and the registered users.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelData {
    pub rooms: Vec<Room>,
    pub users: Vec<User>,
}

pub(crate) fn has_delimiter(field: &str) -> bool {
    field.contains([LINE_DELIMITER, FIELD_DELIMITER, RECORD_DELIMITER])
}
