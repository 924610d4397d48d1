pub mod config;
pub mod license;
pub mod platform;
pub mod render;
pub mod store;

// Re-export main types for easy access
pub use license::{resolve, Catalog, LicenseConfig, LicenseDetails, LicenseKind, ResolvedLicense};
pub use render::{AuthorInfo, Branding, DisplaySection, LicensePresenter, RenderOptions};
