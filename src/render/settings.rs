use crate::license::LicenseConfig;

use super::{Branding, DisplaySection, SectionColor};

pub const SETTINGS_TITLE: &str = "⚙️ 机器人设置详解";

/// Footer shared by every helper panel: the signature plus how to get the panel back.
pub fn build_footer_text(signature: &str, branding: &Branding) -> String {
    format!(
        "{signature} | 如果按钮失效(服务器重启、超时)，请使用 `/{} {}`",
        branding.command_group, branding.command_panel
    )
}

/// A standard interactive-panel section carrying the helper signature,
/// which is how the bot recognises (and later cleans up) its own panels.
pub fn helper_section(
    title: &str,
    description: &str,
    color: Option<SectionColor>,
    branding: &Branding,
) -> DisplaySection {
    DisplaySection::new(title, color.unwrap_or(SectionColor::Blue))
        .description(description)
        .footer(build_footer_text(&branding.helper_signature, branding))
}

fn toggle_label(enabled: bool) -> &'static str {
    if enabled {
        "✅ 启用"
    } else {
        "❌ 禁用"
    }
}

/// Settings panel explaining each toggle and its current state.
pub fn settings_section(config: &LicenseConfig, branding: &Branding) -> DisplaySection {
    let panel_command = format!("/{} {}", branding.command_group, branding.command_panel);

    let parts = [
        format!("**机器人总开关**: {}", toggle_label(config.bot_enabled)),
        format!(
            "> 控制机器人在你发新帖时是否会自动出现。关闭后，你需要使用 `{panel_command}` 手动召唤我。"
        ),
        "---".to_string(),
        format!("**自动发布默认协议**: {}", toggle_label(config.auto_post)),
        "> 启用后，当机器人出现时，将直接尝试发布你的默认协议，而不会显示一系列交互按钮让你选择。"
            .to_string(),
        "---".to_string(),
        format!("**发布前二次确认**: {}", toggle_label(config.require_confirmation)),
        "> 启用后，在发布任何协议前（包括自动发布），都会先让你预览并点击确认。".to_string(),
        "\n完成后，点击下方的“关闭面板”即可。（不关也行，保存是实时的，就是不够优雅，懂吧？）"
            .to_string(),
    ];

    helper_section(
        SETTINGS_TITLE,
        &parts.join("\n"),
        Some(SectionColor::Blurple),
        branding,
    )
}
