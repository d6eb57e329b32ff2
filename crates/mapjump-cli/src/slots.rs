//! Slot subcommand handlers.
//!
//! All subcommands operate on the JSON slot file named by the
//! configuration. `save` additionally kicks off a best-effort
//! reverse-geocoding lookup so a freshly saved slot gets a readable label;
//! lookup failures leave the flag-string display text in place.

use clap::Subcommand;

use mapjump_core::{parse_cli, AppConfig};
use mapjump_geocode::{short_name, GeocodeClient};
use mapjump_store::{JsonFileStorage, SlotStore};

/// Sub-commands available under `slot`.
#[derive(Debug, Subcommand)]
pub enum SlotCommands {
    /// Show all four slots
    List,
    /// Save a coordinate flag string into a slot
    Save {
        /// Slot index, 0-3 (0 is the active-tab mirror)
        index: usize,
        /// Coordinate flag string, e.g. "--lon 2.29 --lat 48.85 --zoom 13"
        #[arg(allow_hyphen_values = true)]
        coords: String,
        /// Skip the reverse-geocoding lookup for the label
        #[arg(long)]
        no_geocode: bool,
    },
    /// Set a user label on a slot
    Name { index: usize, name: String },
    /// Clear a slot
    Clear { index: usize },
}

pub async fn run(config: &AppConfig, command: SlotCommands) -> anyhow::Result<()> {
    let mut store = SlotStore::new(JsonFileStorage::new(&config.slots_path));
    match command {
        SlotCommands::List => {
            let slots = store.list()?;
            for (index, slot) in slots.iter().enumerate() {
                match slot {
                    Some(slot) => println!(
                        "{index}: {} (saved {})",
                        slot.display_text(),
                        slot.saved_at.format("%Y-%m-%d %H:%M UTC")
                    ),
                    None => println!("{index}: empty"),
                }
            }
        }
        SlotCommands::Save {
            index,
            coords,
            no_geocode,
        } => {
            let coords = parse_cli(&coords)
                .ok_or_else(|| anyhow::anyhow!("invalid coordinate string: {coords:?}"))?;
            let slot = store.save_to_slot(index, coords)?;
            if !no_geocode && !slot.user_named {
                label_slot(config, &mut store, index, &coords).await;
            }
            let saved = store.get(index)?.ok_or_else(|| {
                anyhow::anyhow!("slot {index} vanished after save")
            })?;
            println!("{index}: {}", saved.display_text());
        }
        SlotCommands::Name { index, name } => match store.rename(index, &name)? {
            Some(slot) => println!("{index}: {}", slot.display_text()),
            None => println!("{index}: empty, nothing to name"),
        },
        SlotCommands::Clear { index } => {
            store.clear(index)?;
            println!("{index}: cleared");
        }
    }
    Ok(())
}

/// Best-effort reverse geocode of a just-saved slot.
async fn label_slot(
    config: &AppConfig,
    store: &mut SlotStore<JsonFileStorage>,
    index: usize,
    coords: &mapjump_core::Coordinates,
) {
    let client = match GeocodeClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!(error = %e, "geocoder unavailable, slot keeps coordinate text");
            return;
        }
    };
    let Some(full_name) = client.reverse_geocode(coords.lat, coords.lon).await else {
        return;
    };
    let label = short_name(&full_name);
    if label.is_empty() {
        return;
    }
    match store.apply_geocoded_name(index, coords, &label) {
        Ok(true) => tracing::debug!(index, label, "slot labeled from geocoder"),
        Ok(false) => tracing::debug!(index, "geocoded label discarded as stale"),
        Err(e) => tracing::warn!(index, error = %e, "failed to store geocoded label"),
    }
}
