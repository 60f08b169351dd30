use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use nestly::core::availability;
use nestly::utils::{logger, validation, validation::Validate};
use nestly::{
    AppConfig, BookingCommitter, BookingRequest, BookingService, DateRange, HttpBookingService,
    NestlyError, Session,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "nestly", about = "Nestly room-booking API client")]
struct Cli {
    /// Path to a TOML config file; falls back to NESTLY_API_BASE_URL
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,

    /// Bearer token for authenticated endpoints
    #[arg(long)]
    token: Option<String>,

    /// Identity of the booking user
    #[arg(long)]
    user_id: Option<i64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all rooms
    Rooms,
    /// Show one room's details
    Room { id: i64 },
    /// Check whether a date range is free for a room
    Check {
        room_id: i64,
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
    /// Create a booking for an already-captured payment
    Book {
        room_id: i64,
        check_in: NaiveDate,
        check_out: NaiveDate,
        /// Amount captured by the payment provider
        #[arg(long)]
        amount: f64,
        /// Capture id returned by the payment provider
        #[arg(long)]
        capture_id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting nestly CLI");

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::from_env()?,
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let mut service = HttpBookingService::from_config(&config)?;
    if let (Some(token), Some(user_id)) = (&cli.token, cli.user_id) {
        service = service.with_session(Session::new(token.clone(), user_id));
    }

    match cli.command {
        Command::Rooms => {
            let rooms = service.list_rooms().await?;
            println!("🏠 {} rooms available:", rooms.len());
            for room in rooms {
                println!(
                    "  #{} {} ({}, {}) - ${}/night{}",
                    room.id,
                    room.name,
                    room.room_type,
                    room.city,
                    room.price,
                    if room.featured { " ✨" } else { "" }
                );
            }
        }

        Command::Room { id } => {
            let room = service.fetch_room(id).await?;
            println!("🏠 {} (#{})", room.name, room.id);
            println!("  {} - {}", room.city, room.address);
            println!("  {}", room.description);
            println!("  💰 ${}/night", room.price);
        }

        Command::Check {
            room_id,
            check_in,
            check_out,
        } => {
            let proposed = DateRange::new(check_in, check_out);
            availability::validate_proposal(&proposed, Local::now().date_naive())?;

            let booked = service.booked_dates(room_id).await?;
            if availability::is_available(&proposed, &booked) {
                println!("✅ Room {} is free {} → {}", room_id, check_in, check_out);
            } else {
                println!(
                    "❌ Room {} is already booked for part of {} → {}",
                    room_id, check_in, check_out
                );
                std::process::exit(1);
            }
        }

        Command::Book {
            room_id,
            check_in,
            check_out,
            amount,
            capture_id,
        } => {
            let user_id = cli.user_id.ok_or_else(|| NestlyError::ValidationError {
                message: "booking requires --user-id (and usually --token)".to_string(),
            })?;

            validation::validate_non_empty_string("capture_id", &capture_id)?;

            let proposed = DateRange::new(check_in, check_out);
            availability::validate_proposal(&proposed, Local::now().date_naive())?;

            let booked = service.booked_dates(room_id).await?;
            if !availability::is_available(&proposed, &booked) {
                eprintln!("❌ Selected dates are already booked. Please choose different ones.");
                std::process::exit(1);
            }

            let request = BookingRequest {
                room_id,
                user_id,
                check_in_date: check_in,
                check_out_date: check_out,
                paypal_capture_id: capture_id,
                amount,
            };

            let committer = BookingCommitter::with_policy(service, config.retry_policy());
            match committer.commit(&request).await {
                Ok(result) => {
                    tracing::info!("✅ Booking confirmed: id={}", result.id);
                    println!("✅ Booking confirmed!");
                    println!(
                        "  🆔 {} | room {} | {} → {} | ${}",
                        result.id,
                        result.room_id,
                        result.check_in_date,
                        result.check_out_date,
                        result.amount
                    );
                }
                Err(e) if e.is_commit_failure() => {
                    tracing::error!("🚨 Payment captured but booking failed: {}", e);
                    eprintln!(
                        "🚨 Payment captured but booking not confirmed. \
                         Please contact support with your PayPal transaction ID ({}).",
                        request.paypal_capture_id
                    );
                    std::process::exit(2);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    Ok(())
}
