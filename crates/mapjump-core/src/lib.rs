pub mod cli;
pub mod config;
pub mod coords;
pub mod error;
pub mod slot;

pub use cli::{format_cli, parse_cli};
pub use config::{load_config, load_config_from_env, AppConfig};
pub use coords::{is_valid_lat_lon, Coordinates, RawCoordinates};
pub use error::{ConfigError, CoreError};
pub use slot::{check_slot_index, Slot, SLOT_COUNT};
