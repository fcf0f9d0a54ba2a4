mod filesystem;
mod loader;
mod model;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{CONFIG_FILE_NAME, ConfigLoader, FileConfigLoader, LoadResult, parse_config};
pub use model::{CheckConfig, Config, DEFAULT_PACKS_DIR, DEFAULT_REFERENCE, PacksConfig};
pub use validation::{validate_config_semantics, validate_locale};
