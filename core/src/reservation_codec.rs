//! Text encoding of a room's reservations.
//!
//! A room line carries all of its reservations in one field:
//!
//! ```text
//! guest,check_in,check_out,nightly_price,occupants,room_type,room_count,payment;...
//! ```
//!
//! There is no escaping. Fields containing `,` or `;` cannot be read back.
//! Decoding never fails: a malformed reservation is dropped and the rest
//! of the batch is kept.

use crate::types::Reservation;

/// Separator between the fields of one reservation.
pub const FIELD_DELIMITER: char = ',';
/// Separator between reservations.
pub const RECORD_DELIMITER: char = ';';

const FIELDS_PER_RESERVATION: usize = 8;

pub fn encode_reservations(reservations: &[Reservation]) -> String {
    let field_sep = FIELD_DELIMITER.to_string();
    let record_sep = RECORD_DELIMITER.to_string();
    reservations
        .iter()
        .map(|r| {
            [
                r.guest_name.clone(),
                r.check_in.clone(),
                r.check_out.clone(),
                r.nightly_price.to_string(),
                r.occupants.to_string(),
                r.room_type.clone(),
                r.room_count.to_string(),
                r.payment_method.clone(),
            ]
            .join(&field_sep)
        })
        .collect::<Vec<_>>()
        .join(&record_sep)
}

pub fn decode_reservations(encoded: &str) -> Vec<Reservation> {
    let encoded = encoded.trim();
    if encoded.is_empty() {
        return Vec::new();
    }
    encoded
        .split(RECORD_DELIMITER)
        .filter_map(|record| {
            let decoded = decode_one(record);
            if decoded.is_none() {
                log::debug!("reservation codec: dropped corrupt record {record:?}");
            }
            decoded
        })
        .collect()
}

fn decode_one(record: &str) -> Option<Reservation> {
    let fields: Vec<&str> = record.split(FIELD_DELIMITER).collect();
    let [guest_name, check_in, check_out, price, occupants, room_type, room_count, payment] =
        <[&str; FIELDS_PER_RESERVATION]>::try_from(fields).ok()?;

    Some(Reservation {
        guest_name: guest_name.to_string(),
        check_in: check_in.to_string(),
        check_out: check_out.to_string(),
        nightly_price: price.trim().parse().ok()?,
        occupants: occupants.trim().parse().ok()?,
        room_type: room_type.to_string(),
        room_count: room_count.trim().parse().ok()?,
        payment_method: payment.to_string(),
    })
}
