use regex::Regex;
use std::sync::LazyLock;

/// Label used for links into the chat platform itself; its client renders the raw URL badly.
pub const DISCORD_LINK_LABEL: &str = "「点击查看 Discord 链接内容」";

const DISCORD_MARKER: &str = "discord.com/";

// Existing Markdown links come first in the alternation so they are consumed whole,
// including any URL that ended up inside their label.
static LINK_OR_BARE_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[[^\]]*\]\([^)]*\)|https?://[^\s<>()]+").unwrap()
});

/// Turn every bare http(s) URL in `text` into a Markdown link with a readable label.
///
/// Existing Markdown links are copied through unchanged, so running this over its
/// own output changes nothing.
pub fn beautify_links(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut output = String::with_capacity(text.len());
    let mut last = 0;

    for found in LINK_OR_BARE_URL_RE.find_iter(text) {
        // `](` still guards link targets whose label the link pattern could not span
        if found.as_str().starts_with('[') || text[..found.start()].ends_with("](") {
            continue;
        }
        output.push_str(&text[last..found.start()]);
        output.push_str(&markdown_link(found.as_str()));
        last = found.end();
    }
    output.push_str(&text[last..]);

    output
}

fn markdown_link(url: &str) -> String {
    if url.contains(DISCORD_MARKER) {
        return format!("[{DISCORD_LINK_LABEL}]({url})");
    }

    let label = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let label = label.strip_suffix('/').unwrap_or(label);

    format!("[{label}]({url})")
}
