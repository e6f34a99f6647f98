// Walks one guest through a stay: search, book, pay, redeem, request, review, cancel

use anyhow::{anyhow, Context};
use chrono::NaiveDate;
use clap::Parser;
use hotel_management::{
    logging, AnyGuest, Booking, BookingHandle, Feedback, Guest, GuestAccount, Hotel, HotelDraft,
    LoyalGuest, LoyaltyProgram, ModelConfig, Payment, ServiceRequest,
};
use std::path::PathBuf;

const DEFAULT_SEED: &str = r#"{
    "name": "Emirates Palace",
    "location": "Abu Dhabi",
    "total_rooms": 2,
    "rooms": [
        {"room_number": 101, "room_type": "Deluxe", "price_per_night": 500.0, "is_available": true, "amenities": ["WiFi"]},
        {"room_number": 102, "room_type": "Suite", "price_per_night": 1000.0, "is_available": true, "amenities": ["WiFi", "Sea view"]}
    ]
}"#;

#[derive(Parser, Debug)]
#[command(name = "front_desk", about = "Runs a sample stay against the reservation model")]
struct Cli {
    /// Hotel inventory as JSON
    #[arg(long)]
    seed: Option<PathBuf>,

    /// Model configuration as TOML
    #[arg(long)]
    config: Option<PathBuf>,

    /// Room type to book
    #[arg(long, default_value = "Deluxe")]
    room_type: String,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    let config = match &cli.config {
        Some(path) => ModelConfig::from_file(path)?,
        None => ModelConfig::default(),
    };

    let seed = match &cli.seed {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading seed {}", path.display()))?,
        None => DEFAULT_SEED.to_string(),
    };
    let draft: HotelDraft = serde_json::from_str(&seed).context("parsing hotel seed")?;
    let hotel = Hotel::try_from(draft)?;
    println!("{}", hotel);

    let guest = AnyGuest::from(LoyalGuest::new(
        Guest::new("Ahmed", "Dubai", "ahmed@example.com", "0507654321"),
        150,
        "Gold",
    ))
    .into_handle();
    println!("{}", guest);

    let room = hotel
        .search_available_rooms(&cli.room_type)
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("no available {} room", cli.room_type))?;
    println!("{}", room);

    let check_in = NaiveDate::from_ymd_opt(2024, 6, 1).context("invalid check-in date")?;
    let check_out = NaiveDate::from_ymd_opt(2024, 6, 3).context("invalid check-out date")?;
    let nightly = room.read().get_price_per_night();
    let booking = Booking::new(1, guest.clone(), room.clone(), check_in, check_out, 0.0);
    let total = nightly * booking.nights() as f64;
    let booking = BookingHandle::new(booking);
    booking.write().set_total_price(total);

    booking.read().confirm_booking();
    println!("{}", booking.read().send_confirmation());
    println!("{}", room);

    let payment = Payment::new(1, booking.clone(), total, "Credit Card");
    println!("{}", payment.process_payment());

    let points = guest
        .read()
        .as_loyal()
        .map(LoyalGuest::get_points_earned)
        .unwrap_or_default();
    let mut program = LoyaltyProgram::with_config(points, vec!["Spa voucher".to_string()], config.loyalty);
    println!("{}", program.redeem_points());
    if let Some(loyal) = guest.write().as_loyal_mut() {
        loyal.set_points_earned(program.get_points_earned());
    }

    let request = ServiceRequest::new(1, guest.clone(), "Extra towels", "Pending");
    println!("{}", request.submit_request());

    let feedback = Feedback::new(1, guest.clone(), 5, "Wonderful stay");
    println!("{}", feedback.submit_feedback());

    if let Err(e) = guest.read().view_history() {
        tracing::info!("{}", e);
    }

    println!("{}", booking.read().generate_invoice());
    booking.read().cancel_booking();
    println!("{}", room);
    println!("{}", guest);

    Ok(())
}
