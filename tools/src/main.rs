//! hotel-store: headless inspector for the hotel data files.
//!
//! Usage:
//!   hotel-store --data-dir ./data
//!   hotel-store --config store.json --json
//!
//! Loading seeds and writes the default catalog if the files are missing.

use anyhow::Result;
use hotel_store_core::{HotelData, HotelStore, RoomType, StoreConfig};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let json = args.iter().any(|a| a == "--json");
    let config = match arg_value(&args, "--config") {
        Some(path) => StoreConfig::load(path)?,
        None => arg_value(&args, "--data-dir")
            .map(StoreConfig::in_dir)
            .unwrap_or_default(),
    };
    log::debug!(
        "using users file {} and rooms file {}",
        config.users_path.display(),
        config.rooms_path.display()
    );

    let store = HotelStore::open(config);
    let data = store.load();

    if json {
        println!("{}", serde_json::to_string_pretty(&data)?);
    } else {
        print_summary(&store, &data);
    }
    Ok(())
}

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn print_summary(store: &HotelStore, data: &HotelData) {
    let config = store.config();
    println!("Hotel store");
    println!("  users file:  {}", config.users_path.display());
    println!("  rooms file:  {}", config.rooms_path.display());
    println!();

    println!("Rooms: {}", data.rooms.len());
    for room_type in RoomType::ALL {
        let rooms: Vec<_> = data
            .rooms
            .iter()
            .filter(|r| r.kind() == Some(room_type))
            .collect();
        let booked: usize = rooms.iter().map(|r| r.reservations.len()).sum();
        println!(
            "  {:<8} {:>3} rooms  {:>4} reservations",
            room_type.as_str(),
            rooms.len(),
            booked
        );
    }
    let other = data.rooms.iter().filter(|r| r.kind().is_none()).count();
    if other > 0 {
        println!("  {:<8} {:>3} rooms", "other", other);
    }
    println!();

    println!("Users: {}", data.users.len());
    for user in &data.users {
        println!("  {:>4}  {:<24} {}", user.id, user.name, user.national_id);
    }
}
