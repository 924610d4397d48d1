use serde::{Deserialize, Serialize};

pub mod license;
pub mod links;
pub mod settings;
pub mod text;

pub use license::LicensePresenter;
pub use links::beautify_links;
pub use settings::{build_footer_text, helper_section, settings_section};
pub use text::format_sections_text;

/// Colour hint for a section; the caller maps it onto whatever the platform supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionColor {
    Gold,
    Orange,
    LightGrey,
    Blue,
    Blurple,
}

impl SectionColor {
    /// RGB value as the chat platform encodes it.
    pub fn rgb(self) -> u32 {
        match self {
            SectionColor::Gold => 0xF1C40F,
            SectionColor::Orange => 0xE67E22,
            SectionColor::LightGrey => 0x979C9F,
            SectionColor::Blue => 0x3498DB,
            SectionColor::Blurple => 0x5865F2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// The "published by" line at the top of a section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionAuthor {
    pub name: String,
    pub icon_url: Option<String>,
}

/// One visually distinct block of output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplaySection {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
    pub color: SectionColor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<SectionAuthor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
}

impl DisplaySection {
    pub fn new(title: impl Into<String>, color: SectionColor) -> Self {
        Self {
            title: title.into(),
            description: None,
            fields: Vec::new(),
            color,
            author: None,
            footer: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn author(mut self, name: impl Into<String>, icon_url: Option<String>) -> Self {
        self.author = Some(SectionAuthor {
            name: name.into(),
            icon_url,
        });
        self
    }

    pub fn add_field(&mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) {
        self.fields.push(Field {
            name: name.into(),
            value: value.into(),
            inline,
        });
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// The person a notice is published for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorInfo {
    pub id: u64,
    pub display_name: String,
    /// Account handle
    pub name: String,
    pub avatar_url: Option<String>,
}

impl AuthorInfo {
    pub fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }
}

/// Per-call tweaks for [`LicensePresenter::render`].
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub title_override: Option<String>,
    pub footer_override: Option<String>,
    pub include_appendix: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title_override: None,
            footer_override: None,
            include_appendix: true,
        }
    }
}

fn default_license_signature() -> String {
    "📜 授权协议".to_string()
}

fn default_helper_signature() -> String {
    "授权协议助手".to_string()
}

fn default_command_group() -> String {
    "内容授权".to_string()
}

fn default_command_panel() -> String {
    "打开面板".to_string()
}

/// Names the bot signs its messages with and the slash commands it advertises.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branding {
    /// Footer signature on published license notices
    #[serde(default = "default_license_signature")]
    pub license_signature: String,

    /// Footer signature on helper panels; also named in the appendix text
    #[serde(default = "default_helper_signature")]
    pub helper_signature: String,

    /// Slash command group, e.g. `/内容授权`
    #[serde(default = "default_command_group")]
    pub command_group: String,

    /// Sub-command that reopens the panel
    #[serde(default = "default_command_panel")]
    pub command_panel: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            license_signature: default_license_signature(),
            helper_signature: default_helper_signature(),
            command_group: default_command_group(),
            command_panel: default_command_panel(),
        }
    }
}
