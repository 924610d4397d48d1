use super::helpers::TestProject;

fn titles(sections: &serde_json::Value) -> Vec<String> {
    sections
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["title"].as_str().unwrap().to_string())
        .collect()
}

fn field<'a>(section: &'a serde_json::Value, name: &str) -> Option<&'a str> {
    section["fields"]
        .as_array()?
        .iter()
        .find(|f| f["name"] == name)
        .and_then(|f| f["value"].as_str())
}

#[test]
fn test_cc_license_downgraded_by_default_policy() {
    let project = TestProject::new();
    project.write(
        "license.toml",
        r#"
[license_details]
type = "CC BY 4.0"
attribution = "小明"
"#,
    );

    let sections = project.run_json(&[
        "render",
        "--format",
        "json",
        "--author-id",
        "42",
        "--author-name",
        "xiaoming",
    ]);

    let main = &sections[0];
    assert_eq!(main["color"], "orange");
    assert_eq!(field(main, "📄 协议类型"), Some("**CC BY-NC 4.0**"));
    assert_eq!(field(main, "💰 商业用途"), Some("禁止"));
    let description = main["description"].as_str().unwrap();
    assert!(description.contains("<@42>"));
    assert!(description.contains("**CC BY 4.0**"));
    assert_eq!(titles(&sections), vec!["📜 内容授权协议", "⚖️ 协议生效规则"]);
}

#[test]
fn test_server_config_allows_commercial_use() {
    let project = TestProject::new();
    project.write("license-notice.toml", "commercial_use_allowed = true\nformat = \"json\"\n");
    project.write("license.toml", "[license_details]\ntype = \"CC BY 4.0\"\n");

    let sections = project.run_json(&["render"]);

    assert_eq!(sections[0]["color"], "gold");
    assert_eq!(field(&sections[0], "📄 协议类型"), Some("**CC BY 4.0**"));
    assert_eq!(field(&sections[0], "💰 商业用途"), Some("允许"));
}

#[test]
fn test_flag_forbids_commercial_use_over_config() {
    let project = TestProject::new();
    project.write("license-notice.toml", "commercial_use_allowed = true\n");
    project.write("license.toml", "[license_details]\ntype = \"CC BY 4.0\"\n");

    let sections = project.run_json(&["render", "--format", "json", "--no-commercial-allowed"]);

    assert_eq!(sections[0]["color"], "orange");
    assert_eq!(field(&sections[0], "📄 协议类型"), Some("**CC BY-NC 4.0**"));

    let both = project.run(&["render", "--commercial-allowed", "--no-commercial-allowed"]);
    assert!(!both.status.success());
}

#[test]
fn test_custom_license_with_postscript_and_no_appendix() {
    let project = TestProject::new();
    project.write(
        "license.toml",
        r#"
[license_details]
type = "custom"
commercial = "Allowed for a fee"
notes = "See https://example.com/terms/"
personal_statement = "感谢阅读"
"#,
    );

    let sections = project.run_json(&["render", "--format", "json", "--no-appendix"]);

    assert_eq!(titles(&sections), vec!["📜 内容授权协议", "📣 附言 (无法律效力)"]);
    assert_eq!(field(&sections[0], "💰 商业用途"), Some("禁止"));
    assert_eq!(
        field(&sections[0], "📝 附加条款 (如无另外声明，其效力范围同本协议)"),
        Some("See [example.com/terms](https://example.com/terms/)")
    );
    assert_eq!(sections[1]["description"], "感谢阅读");
}

#[test]
fn test_render_text_to_file() {
    let project = TestProject::new();
    project.write("license.toml", "[license_details]\ntype = \"MIT\"\n");

    let output = project.run(&["render", "--output", "notice.txt", "--title", "预览"]);
    assert!(output.status.success());

    let text = project.read("notice.txt");
    assert!(text.starts_with("━━ 预览 ━━"));
    assert!(text.contains("**MIT** (软件)"));
    assert!(text.contains("━━ ⚖️ 协议生效规则 ━━"));
}
