use crate::license::{resolve, Catalog, LicenseConfig, ResolvedLicense};

use super::links::beautify_links;
use super::{AuthorInfo, Branding, DisplaySection, RenderOptions, SectionColor};

pub const MAIN_TITLE: &str = "📜 内容授权协议";
pub const APPENDIX_TITLE: &str = "⚖️ 协议生效规则";
pub const POSTSCRIPT_TITLE: &str = "📣 附言 (无法律效力)";

pub const FIELD_TYPE: &str = "📄 协议类型";
pub const FIELD_ATTRIBUTION: &str = "✒️ 作者署名";
pub const FIELD_COPYRIGHT: &str = "✒️ 版权归属";
pub const FIELD_FULL_TEXT: &str = "📜 核心条款";
pub const FIELD_REPRODUCE: &str = "🔁 二次传播";
pub const FIELD_DERIVE: &str = "🎨 二次创作";
pub const FIELD_COMMERCIAL: &str = "💰 商业用途";
pub const FIELD_NOTES: &str = "📝 附加条款 (如无另外声明，其效力范围同本协议)";

const CC_DISCLAIMER: &str = "**⚠️ 关于CC协议的特别说明**\n\
如果创作者在任何地方对本协议添加了**额外规则**，那么这份协议就不再是**标准CC协议**了。\n\
它会变成一份**“长得像CC协议的自定义协议”**，其中的CC链接仅用于解释基础条款。";

// Blank braille cells keep the main section from collapsing to the width of its fields.
const STRETCHER_WIDTH: usize = 30;

/// Builds license notices for one catalog and one set of bot branding.
#[derive(Debug, Clone)]
pub struct LicensePresenter {
    catalog: Catalog,
    branding: Branding,
}

impl LicensePresenter {
    pub fn new(catalog: Catalog, branding: Branding) -> Self {
        Self { catalog, branding }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn branding(&self) -> &Branding {
        &self.branding
    }

    /// Resolve the author's license under server policy and lay it out as
    /// main section, optional appendix, optional postscript, in that order.
    pub fn render(
        &self,
        config: &LicenseConfig,
        author: &AuthorInfo,
        commercial_use_allowed: bool,
        options: &RenderOptions,
    ) -> Vec<DisplaySection> {
        let resolved = resolve(&config.license_details, commercial_use_allowed, &self.catalog);

        let mut sections = vec![self.main_section(&resolved, author, options)];

        if options.include_appendix {
            sections.push(self.appendix_section(resolved.is_cc()));
        }

        if let Some(statement) = resolved.details.personal_statement() {
            sections.push(
                DisplaySection::new(POSTSCRIPT_TITLE, SectionColor::Blue).description(statement),
            );
        }

        sections
    }

    fn main_section(
        &self,
        resolved: &ResolvedLicense,
        author: &AuthorInfo,
        options: &RenderOptions,
    ) -> DisplaySection {
        let details = &resolved.details;
        let license_type = resolved.license_type.as_str();

        let mut description = vec![format!("**发布者: ** {}", author.mention())];
        if resolved.is_cc() {
            description.push(format!(
                "本内容采用 **[{license_type}]({})** 国际许可协议进行许可。",
                details.url()
            ));
        } else if resolved.is_software() {
            description.push(format!(
                "本项目采用 **[{license_type}]({})** 开源许可证。",
                details.url()
            ));
        }
        if let Some(warning) = &resolved.warning {
            description.push(format!("\n{}", blockquote(warning)));
        }

        let color = if resolved.warning.is_some() {
            SectionColor::Orange
        } else {
            SectionColor::Gold
        };
        let title = options.title_override.as_deref().unwrap_or(MAIN_TITLE);

        let mut section = DisplaySection::new(title, color)
            .description(description.join("\n"))
            .author(
                format!("由 {} ({}) 发布", author.display_name, author.name),
                author.avatar_url.clone(),
            )
            .footer(self.license_footer(options));

        if resolved.is_software() {
            section.add_field(FIELD_TYPE, format!("**{license_type}** (软件)"), false);
            section.add_field(FIELD_COPYRIGHT, beautify_links(details.attribution()), false);
            section.add_field(FIELD_FULL_TEXT, details.full_text(), false);
        } else {
            let type_value = if resolved.is_cc() {
                format!("**{license_type}**")
            } else {
                "**自定义协议**".to_string()
            };
            section.add_field(FIELD_TYPE, type_value, false);
            section.add_field(FIELD_ATTRIBUTION, beautify_links(details.attribution()), false);
            section.add_field(FIELD_REPRODUCE, beautify_links(details.reproduce()), true);
            section.add_field(FIELD_DERIVE, beautify_links(details.derive()), true);
            section.add_field(FIELD_COMMERCIAL, beautify_links(details.commercial()), true);
        }

        if !resolved.is_cc() {
            if let Some(notes) = details.notes() {
                section.add_field(FIELD_NOTES, beautify_links(notes), false);
            }
        }

        section
    }

    fn license_footer(&self, options: &RenderOptions) -> String {
        let footer = match &options.footer_override {
            Some(footer) => footer.clone(),
            None => format!(
                "{} | 在自己的帖子里，使用 `/{}` 来使用我吧！",
                self.branding.license_signature, self.branding.command_group
            ),
        };
        format!("{footer} {}", "\u{2800}".repeat(STRETCHER_WIDTH))
    }

    fn appendix_section(&self, is_cc: bool) -> DisplaySection {
        let helper = &self.branding.helper_signature;
        let mut description = format!(
            "👑 **作者说了算**：作者在任何地方的**亲口声明**或**操作**，其效力**永远高于**本协议。{helper}仅提供方便工具，作者保留所有的解释权。\n\
🤝 **关于单独授权**：无论本协议如何规定，从**作者**得到的**单独授权**可以不受本协议限制。\n\
🔄 **默认覆盖**：为方便作者管理并避免信息混淆，若无作者额外声明，发布新协议将自动取代**由{helper}发布的**旧协议。\n\
> **⚠️ 请注意**：从法律上讲，对那些在旧协议有效期内**已经获取**作品的人，其授权通常不可撤销。尽管如此，我们倡导所有用户尊重作者的意愿。"
        );
        if is_cc {
            description.push_str("\n\n\n");
            description.push_str(CC_DISCLAIMER);
        }

        DisplaySection::new(APPENDIX_TITLE, SectionColor::LightGrey).description(description)
    }
}

fn blockquote(text: &str) -> String {
    text.lines()
        .map(|line| format!("> {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
