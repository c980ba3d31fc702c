pub mod environment;

pub use environment::{
    CONFIG_DIR_ENV, ENDPOINT_ENV, default_catalog_path, endpoint_override, get_config_dir,
};
