//! ParkWise: parking spot booking from the terminal
//!
//! ```sh
//! # Interactive booking shell (default)
//! parkwise
//!
//! # List covered spots
//! parkwise spots --filter covered
//!
//! # Slot grid and a price quote for spot 3
//! parkwise grid 3
//! parkwise quote 3 --hours 4
//!
//! # Validate config without starting
//! parkwise --check
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Local, Offset};
use clap::{Parser, Subcommand};
use tracing::{error, info, warn};

use parkwise::domain::booking::RandomReferenceGenerator;
use parkwise::domain::spot::{SpotCatalog, SpotFilter};
use parkwise::domain::{BookingError, BookingHours, CostBreakdown};
use parkwise::interfaces::shell::{render, run_shell, Shell};
use parkwise::support::{init_tracing, AppError};
use parkwise::{
    default_config_path, load_catalog, AppConfig, BookingStateMachine, EventBus, InMemoryCatalog,
    SpotBrowser,
};

/// ParkWise: find a parking spot, pick a slot, book it.
#[derive(Parser, Debug)]
#[command(
    name = "parkwise",
    version,
    about = "Parking spot discovery and slot booking",
    long_about = "ParkWise: browse parking spots, choose a slot on the lot grid \
                  and confirm a booking.\n\n\
                  Default config: ~/.config/parkwise/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "PARKWISE_CONFIG")]
    config: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration and catalog, then exit.
    #[arg(long)]
    check: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List parking spots
    Spots {
        /// all, covered, open, ev-charging or cheap
        #[arg(short, long, default_value = "all")]
        filter: SpotFilter,
    },
    /// Print the slot grid of a spot
    Grid { spot: u32 },
    /// Price a booking without making it
    Quote {
        spot: u32,
        #[arg(long, default_value_t = 1)]
        hours: i64,
    },
    /// Interactive booking shell
    Shell,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.unwrap_or_else(default_config_path);
    let loaded = AppConfig::load(&config_path);
    let mut config = match &loaded {
        Ok(cfg) => cfg.clone(),
        Err(_) => AppConfig::default(),
    };
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    init_tracing(&config.logging);

    match loaded {
        Ok(_) => info!("Configuration loaded from {}", config_path.display()),
        Err(e) => {
            if cli.check {
                return Err(e.into());
            }
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }

    // ── Spot catalog ───────────────────────────────────────────
    let catalog: Arc<dyn SpotCatalog> = match &config.catalog.path {
        Some(path) => Arc::new(load_catalog(path)?),
        None => {
            info!("No catalog configured, using built-in demo spots");
            Arc::new(InMemoryCatalog::demo())
        }
    };

    if cli.check {
        println!("✅ Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Spots       : {}", catalog.len());
        println!("   Currency    : {}", config.booking.currency);
        println!("   Reference   : {}-XXXXXX", config.booking.reference_prefix);
        println!("   Log level   : {}", config.logging.level);
        println!();
        println!("# Effective configuration");
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let currency = config.booking.currency.clone();
    match cli.command.unwrap_or(Command::Shell) {
        Command::Spots { filter } => {
            let spots = catalog.filtered(filter);
            println!("{}", render::spot_list(&spots, None, &currency));
        }
        Command::Grid { spot } => {
            let record = catalog.find_by_id(spot).ok_or(BookingError::SpotNotFound(spot))?;
            println!("{}", render::spot_card(record, &currency));
            println!();
            println!("{}", render::slot_grid(&BookingStateMachine::slot_grid(record), None));
        }
        Command::Quote { spot, hours } => {
            let record = catalog.find_by_id(spot).ok_or(BookingError::SpotNotFound(spot))?;
            let cost = CostBreakdown::calculate(record.price, BookingHours::new(hours)?);
            println!("{}", record.name);
            println!("{}", render::cost_summary(&cost, &currency));
        }
        Command::Shell => {
            let event_bus = EventBus::shared();
            let mut subscriber = event_bus.subscribe();
            tokio::spawn(async move {
                while let Some(message) = subscriber.recv().await {
                    match message.to_json() {
                        Ok(payload) => info!(
                            event_type = message.event.event_type(),
                            spot_id = ?message.event.spot_id(),
                            %payload,
                            "Booking event"
                        ),
                        Err(e) => warn!(
                            event_type = message.event.event_type(),
                            "Failed to serialize booking event: {}", e
                        ),
                    }
                }
            });

            let machine = BookingStateMachine::new(catalog.clone())
                .with_reference_generator(Arc::new(RandomReferenceGenerator::new(
                    config.booking.reference_prefix.clone(),
                )))
                .with_event_bus(event_bus);
            let mut shell = Shell::new(machine, SpotBrowser::new(catalog), currency)
                .with_utc_offset(Local::now().offset().fix());

            println!("ParkWise: type 'help' for commands.");
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            run_shell(&mut shell, stdin, tokio::io::stdout()).await?;
            info!("Shell closed");
        }
    }

    Ok(())
}
