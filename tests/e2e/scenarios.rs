use super::helpers::TestProject;

#[test]
fn test_init_then_render() {
    let project = TestProject::new();

    let init_output = project.run(&["init", "cc-by-nc-sa"]);
    assert!(init_output.status.success());
    assert!(project.read("license.toml").contains("CC BY-NC-SA 4.0"));

    let sections = project.run_json(&["render", "--format", "json"]);
    let main = &sections[0];
    assert_eq!(main["color"], "gold");
    let derive = main["fields"]
        .as_array()
        .unwrap()
        .iter()
        .find(|f| f["name"] == "🎨 二次创作")
        .unwrap();
    assert!(derive["value"].as_str().unwrap().contains("CC BY-NC-SA 4.0"));
}

#[test]
fn test_settings_toggle_persists() {
    let project = TestProject::new();
    project.run(&["init", "custom"]);

    let panel = project.run_json(&["settings", "--toggle", "auto-post", "--format", "json"]);
    assert!(panel["description"]
        .as_str()
        .unwrap()
        .contains("**自动发布默认协议**: ✅ 启用"));
    assert!(project.read("license.toml").contains("auto_post = true"));

    let panel = project.run_json(&["settings", "--format", "json"]);
    assert!(panel["description"]
        .as_str()
        .unwrap()
        .contains("**自动发布默认协议**: ✅ 启用"));
}

#[test]
fn test_render_without_license_file_fails() {
    let project = TestProject::new();

    let output = project.run(&["render"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("license-notice init"));
}

#[test]
fn test_catalog_listing() {
    let project = TestProject::new();

    let entries = project.run_json(&["catalog", "--filter", "CC BY-NC*", "--format", "json"]);
    let names: Vec<&str> = entries
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["CC BY-NC 4.0", "CC BY-NC-SA 4.0", "CC BY-NC-ND 4.0"]);
}

#[test]
fn test_config_validate_and_show() {
    let project = TestProject::new();

    let validate = project.run(&["config", "--validate"]);
    assert!(validate.status.success());
    assert!(String::from_utf8_lossy(&validate.stdout).contains("using defaults"));

    project.write("license-notice.toml", "[branding]\ncommand_group = \"license\"\n");
    let shown = project.run_json(&["config", "--show"]);
    assert_eq!(shown["branding"]["command_group"], "license");

    project.write("license-notice.toml", "format = \"csv\"\n");
    let invalid = project.run(&["config", "--validate"]);
    assert!(!invalid.status.success());
    assert!(String::from_utf8_lossy(&invalid.stderr).contains("Unknown output format"));
}

#[test]
fn test_quiet_suppresses_output() {
    let project = TestProject::new();
    project.run(&["init", "mit"]);

    let output = project.run(&["--quiet", "render"]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}
