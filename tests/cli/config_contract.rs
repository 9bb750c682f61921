use crate::harness::TestContext;
use predicates::prelude::*;

const CUSTOM_CATALOG: &str = r#"
- id: lab-panel
  name: { zh: "实验屏", en: "Lab panel" }
  resolution: { width: 1280, height: 720 }
  scenario: hdmi_cvt
  hdmi: { hdmi_group: 2, hdmi_mode: 87, hdmi_drive: 2, hdmi_cvt: "1280 720 60 6 0 0 0" }
  touch:
    type: none
    notes: { zh: "无触摸", en: "No touch" }
"#;

#[test]
fn working_directory_config_sets_defaults() {
    let ctx = TestContext::new();
    ctx.write_config("[defaults]\nlanguage = \"en\"\nrotation = 180\nos = \"bullseye64\"\n");

    ctx.cli()
        .args(["generate", "--id", "88bar"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Screen: "))
        .stdout(predicate::str::contains("Rotation: 180°"))
        .stdout(predicate::str::contains("OS_VARIANT=\"bullseye64\""));
}

#[test]
fn explicit_flag_and_environment_locate_config() {
    let ctx = TestContext::new();
    let path = ctx.write_file("conf/custom.toml", "[defaults]\nlanguage = \"en\"\n");

    ctx.cli()
        .args(["install", "--id", "88bar", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("UI_LANG=\"en\""));

    ctx.cli()
        .args(["install", "--id", "88bar"])
        .env("RPIDSM_CONFIG", &path)
        .assert()
        .success()
        .stdout(predicate::str::contains("UI_LANG=\"en\""));
}

#[test]
fn missing_explicit_config_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["screens", "--config", "absent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Config file not found: absent.toml"));
}

#[test]
fn invalid_defaults_fail_before_any_command() {
    let ctx = TestContext::new();
    ctx.write_config("[defaults]\nos = \"debian11\"\n");

    ctx.cli()
        .arg("screens")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid [defaults] os"));
}

#[test]
fn unknown_keys_are_rejected() {
    let ctx = TestContext::new();
    ctx.write_config("[sources]\ncatalogue = \"screens.json\"\n");

    ctx.cli()
        .arg("screens")
        .assert()
        .failure()
        .stderr(predicate::str::contains("TOML parse error"));
}

#[test]
fn custom_catalog_and_template_are_relative_to_config() {
    let ctx = TestContext::new();
    ctx.write_file("conf/screens.yaml", CUSTOM_CATALOG);
    ctx.write_file("conf/core.sh", "setup __SCREEN_ID__ __HDMI_CVT__ __ROT_DEG__\n");
    let config = ctx.write_file(
        "conf/rpidsm.toml",
        "[sources]\ncatalog = \"screens.yaml\"\ntemplate = \"core.sh\"\n",
    );

    ctx.cli()
        .args(["install", "--id", "lab-panel", "--rot", "90", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout("setup lab-panel 1280 720 60 6 0 0 0 90\n");

    ctx.cli()
        .args(["install", "--id", "88bar", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown screen id '88bar'"));
}

#[test]
fn verbose_logs_go_to_stderr() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["-v", "install", "--id", "88bar"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("#!/usr/bin/env bash"))
        .stderr(predicate::str::contains("resolved display setup"));
}
