//! Command line interface over the coordinate toolkit.
//!
//! `extract` and `jump` are the two halves of the URL translation flow;
//! `parse`/`format` expose the flag-string codec directly; `slot` manages
//! the four saved positions and `locate` runs a reverse-geocoding lookup.

mod slots;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mapjump_core::{format_cli, load_config, parse_cli, AppConfig, Coordinates};
use mapjump_store::{JsonFileStorage, SlotStore};
use mapjump_url::{extract_from_url, update_url};

#[derive(Debug, Parser)]
#[command(name = "mapjump")]
#[command(about = "Move a map view between map-site URLs and saved coordinate slots")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Read the coordinates out of a map URL
    Extract {
        url: String,
        /// Do not mirror the result into slot 0
        #[arg(long)]
        no_record: bool,
    },
    /// Re-target a map URL to the given coordinates
    Jump {
        url: String,
        /// Coordinate flag string, e.g. "--lon 2.29 --lat 48.85 --zoom 13"
        #[arg(allow_hyphen_values = true)]
        coords: String,
    },
    /// Parse a coordinate flag string and echo its normalized form as JSON
    Parse {
        #[arg(allow_hyphen_values = true)]
        coords: String,
    },
    /// Render explicit axes as a coordinate flag string
    Format {
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lon: f64,
        #[arg(long, default_value_t = 0.0)]
        zoom: f64,
        #[arg(long)]
        bearing: Option<f64>,
        #[arg(long)]
        pitch: Option<f64>,
    },
    /// Manage the four saved-coordinate slots
    Slot {
        #[command(subcommand)]
        command: slots::SlotCommands,
    },
    /// Reverse-geocode a coordinate pair to a place name
    Locate {
        lat: f64,
        lon: f64,
        /// Print the condensed slot-button label instead of the full address
        #[arg(long)]
        short: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = load_config()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Extract { url, no_record } => run_extract(&config, &url, no_record),
        Commands::Jump { url, coords } => run_jump(&url, &coords),
        Commands::Parse { coords } => run_parse(&coords),
        Commands::Format {
            lat,
            lon,
            zoom,
            bearing,
            pitch,
        } => run_format(lat, lon, zoom, bearing, pitch),
        Commands::Slot { command } => slots::run(&config, command).await,
        Commands::Locate { lat, lon, short } => run_locate(&config, lat, lon, short).await,
    }
}

fn run_extract(config: &AppConfig, url: &str, no_record: bool) -> anyhow::Result<()> {
    let Some(coords) = extract_from_url(url) else {
        println!("coordinates not found");
        std::process::exit(1);
    };
    if !no_record {
        let mut store = SlotStore::new(JsonFileStorage::new(&config.slots_path));
        store.record_active(coords)?;
    }
    println!("{}", format_cli(&coords));
    Ok(())
}

fn run_jump(url: &str, coords: &str) -> anyhow::Result<()> {
    let coords = parse_cli(coords)
        .ok_or_else(|| anyhow::anyhow!("invalid coordinate string: {coords:?}"))?;
    match update_url(url, &coords) {
        Some(new_url) => println!("{new_url}"),
        None => {
            println!("this site's URL structure is not supported");
            std::process::exit(1);
        }
    }
    Ok(())
}

fn run_parse(coords: &str) -> anyhow::Result<()> {
    let coords = parse_cli(coords)
        .ok_or_else(|| anyhow::anyhow!("invalid coordinate string: {coords:?}"))?;
    println!("{}", serde_json::to_string_pretty(&coords)?);
    Ok(())
}

fn run_format(
    lat: f64,
    lon: f64,
    zoom: f64,
    bearing: Option<f64>,
    pitch: Option<f64>,
) -> anyhow::Result<()> {
    let mut coords = Coordinates::new(lat, lon)?.with_zoom(zoom);
    if let Some(bearing) = bearing {
        coords = coords.with_bearing(bearing);
    }
    if let Some(pitch) = pitch {
        coords = coords.with_pitch(pitch);
    }
    println!("{}", format_cli(&coords));
    Ok(())
}

async fn run_locate(config: &AppConfig, lat: f64, lon: f64, short: bool) -> anyhow::Result<()> {
    // Validates the pair before spending a network round trip.
    Coordinates::new(lat, lon)?;
    let client = mapjump_geocode::GeocodeClient::new(config)?;
    match client.reverse_geocode(lat, lon).await {
        Some(name) if short => println!("{}", mapjump_geocode::short_name(&name)),
        Some(name) => println!("{name}"),
        None => {
            println!("no place name found");
            std::process::exit(1);
        }
    }
    Ok(())
}
