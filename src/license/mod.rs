use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod resolver;

pub use catalog::{Catalog, CcLicense, LicenseKind, SoftwareLicense};
pub use resolver::{nc_variant, resolve, ResolvedLicense};

/// Identifier used for author-written licenses that match no catalog entry.
pub const CUSTOM_LICENSE: &str = "custom";

/// Shown in place of any detail the author never filled in.
pub const UNSET: &str = "未设置";

/// The `commercial` term forced onto licenses when the server forbids commercial use.
pub const COMMERCIAL_FORBIDDEN: &str = "禁止";

/// Author-facing "nothing here" value for notes and postscripts.
pub const NONE_MARKER: &str = "无";

/// Free-form license terms as stored for an author.
///
/// Every field is optional because the store keeps whatever the author typed;
/// readers go through the accessors, which fall back to [`UNSET`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LicenseDetails {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub license_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reproduce: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub derive: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commercial: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_statement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_text: Option<String>,
}

impl LicenseDetails {
    /// A details record for the given license identifier and nothing else.
    pub fn of_type(license_type: impl Into<String>) -> Self {
        Self {
            license_type: Some(license_type.into()),
            ..Self::default()
        }
    }

    pub fn license_type(&self) -> &str {
        self.license_type.as_deref().unwrap_or(CUSTOM_LICENSE)
    }

    pub fn attribution(&self) -> &str {
        or_unset(&self.attribution)
    }

    pub fn reproduce(&self) -> &str {
        or_unset(&self.reproduce)
    }

    pub fn derive(&self) -> &str {
        or_unset(&self.derive)
    }

    pub fn commercial(&self) -> &str {
        or_unset(&self.commercial)
    }

    pub fn url(&self) -> &str {
        or_unset(&self.url)
    }

    pub fn full_text(&self) -> &str {
        or_unset(&self.full_text)
    }

    /// Additional terms, only when the author actually wrote some.
    pub fn notes(&self) -> Option<&str> {
        meaningful(&self.notes)
    }

    /// Personal postscript, only when the author actually wrote one.
    pub fn personal_statement(&self) -> Option<&str> {
        meaningful(&self.personal_statement)
    }
}

fn or_unset(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or(UNSET)
}

fn meaningful(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .filter(|text| !text.trim().is_empty() && *text != NONE_MARKER)
}

fn default_true() -> bool {
    true
}

/// An author's saved license settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseConfig {
    /// Whether the bot shows up on its own when the author opens a new thread
    #[serde(default = "default_true")]
    pub bot_enabled: bool,

    /// Publish the default license straight away instead of offering buttons
    #[serde(default)]
    pub auto_post: bool,

    /// Preview and confirm before anything is published
    #[serde(default = "default_true")]
    pub require_confirmation: bool,

    #[serde(default)]
    pub license_details: LicenseDetails,
}

impl Default for LicenseConfig {
    fn default() -> Self {
        Self {
            bot_enabled: true,
            auto_post: false,
            require_confirmation: true,
            license_details: LicenseDetails::default(),
        }
    }
}

impl LicenseConfig {
    pub fn with_details(license_details: LicenseDetails) -> Self {
        Self {
            license_details,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_read_as_unset() {
        let details = LicenseDetails::default();

        assert_eq!(details.license_type(), CUSTOM_LICENSE);
        assert_eq!(details.attribution(), UNSET);
        assert_eq!(details.reproduce(), UNSET);
        assert_eq!(details.commercial(), UNSET);
        assert_eq!(details.full_text(), UNSET);
        assert_eq!(details.notes(), None);
    }

    #[test]
    fn test_blank_and_none_marker_are_not_meaningful() {
        let mut details = LicenseDetails::default();

        details.notes = Some("   ".to_string());
        assert_eq!(details.notes(), None);

        details.notes = Some(NONE_MARKER.to_string());
        assert_eq!(details.notes(), None);

        details.notes = Some("请勿用于训练模型".to_string());
        assert_eq!(details.notes(), Some("请勿用于训练模型"));

        details.personal_statement = Some("".to_string());
        assert_eq!(details.personal_statement(), None);
    }

    #[test]
    fn test_config_defaults_from_partial_toml() {
        let config: LicenseConfig = toml::from_str(
            r#"
auto_post = true

[license_details]
type = "CC BY 4.0"
attribution = "alice"
"#,
        )
        .unwrap();

        assert!(config.bot_enabled);
        assert!(config.auto_post);
        assert!(config.require_confirmation);
        assert_eq!(config.license_details.license_type(), "CC BY 4.0");
        assert_eq!(config.license_details.attribution(), "alice");
    }
}
