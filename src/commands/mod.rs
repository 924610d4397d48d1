pub mod catalog;
pub mod config;
pub mod init;
pub mod render;
pub mod settings;

pub use catalog::handle_catalog;
pub use config::handle_config;
pub use init::handle_init;
pub use render::handle_render;
pub use settings::handle_settings;
