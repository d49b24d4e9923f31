use super::{read_lines, split_line, write_lines, HotelStore};
use crate::{
    error::StoreResult,
    reservation_codec::{decode_reservations, encode_reservations},
    seed::SeedData,
    types::{Room, LINE_DELIMITER},
};

const ROOM_FIELDS: usize = 7;

impl<S: SeedData> HotelStore<S> {
    // ── Rooms ─────────────────────────────────────────────────────

    pub(super) fn write_rooms(&self, rooms: &[Room]) -> StoreResult<()> {
        for room in rooms {
            if room.reservations.iter().any(|r| r.contains_delimiter()) {
                log::warn!(
                    "store: room {} has a reservation containing a delimiter; it will be lost on reload",
                    room.code
                );
            }
        }
        write_lines(&self.config.rooms_path, rooms.iter().map(room_to_line))
    }

    pub(super) fn read_rooms(&self) -> StoreResult<Vec<Room>> {
        let path = &self.config.rooms_path;
        let lines = read_lines(path)?;
        let rooms = lines
            .iter()
            .enumerate()
            .filter_map(|(i, line)| {
                let room = parse_room_line(line);
                if room.is_none() {
                    log::debug!("store: skipping corrupt line {} of {}", i + 1, path.display());
                }
                room
            })
            .collect();
        Ok(rooms)
    }
}

/// `id|code|type|room_count|capacity|nightly_price|reservations`
pub fn room_to_line(room: &Room) -> String {
    [
        room.id.to_string(),
        room.code.clone(),
        room.room_type.clone(),
        room.room_count.to_string(),
        room.capacity.to_string(),
        room.nightly_price.to_string(),
        encode_reservations(&room.reservations),
    ]
    .join(&LINE_DELIMITER.to_string())
}

/// Parse one rooms-file line. `None` if it has fewer than seven fields or
/// any numeric field among the first six fails to parse. The code and type
/// are kept as written. Fields past the seventh are ignored.
pub fn parse_room_line(line: &str) -> Option<Room> {
    let fields = split_line(line);
    let [id, code, room_type, room_count, capacity, price, reservations] =
        <[&str; ROOM_FIELDS]>::try_from(fields.get(..ROOM_FIELDS)?).ok()?;

    Some(Room {
        id: id.trim().parse().ok()?,
        code: code.to_string(),
        room_type: room_type.to_string(),
        room_count: room_count.trim().parse().ok()?,
        capacity: capacity.trim().parse().ok()?,
        nightly_price: price.trim().parse().ok()?,
        reservations: decode_reservations(reservations),
    })
}
