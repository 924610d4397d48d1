use super::DisplaySection;

/// Plain-text preview of sections, roughly as the chat client would stack them.
pub fn format_sections_text(sections: &[DisplaySection]) -> String {
    let mut output = String::new();

    for (index, section) in sections.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }
        output.push_str(&format_section(section));
    }

    output
}

fn format_section(section: &DisplaySection) -> String {
    let mut output = String::new();

    output.push_str(&format!("━━ {} ━━\n", section.title));

    if let Some(author) = &section.author {
        output.push_str(&format!("👤 {}\n", author.name));
    }

    if let Some(description) = &section.description {
        output.push_str(description);
        output.push('\n');
    }

    if !section.fields.is_empty() {
        output.push('\n');
    }

    // Consecutive inline fields share a line, like the chat client's grid.
    let mut inline_row: Vec<String> = Vec::new();
    for field in &section.fields {
        if field.inline {
            inline_row.push(format!("{}: {}", field.name, field.value));
            continue;
        }
        flush_row(&mut output, &mut inline_row);
        output.push_str(&format!("{}\n{}\n", field.name, indent(&field.value)));
    }
    flush_row(&mut output, &mut inline_row);

    if let Some(footer) = &section.footer {
        output.push_str(&format!("── {}\n", footer.trim_end_matches(['\u{2800}', ' '])));
    }

    output
}

fn flush_row(output: &mut String, row: &mut Vec<String>) {
    if row.is_empty() {
        return;
    }
    output.push_str(&row.join("  │  "));
    output.push('\n');
    row.clear();
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
