use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn embedded_assets_pass_strict() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["doctor", "--strict"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed."));
}

#[test]
fn unused_placeholders_warn_and_fail_only_when_strict() {
    let ctx = TestContext::new();
    ctx.write_file("core.sh", "#!/usr/bin/env bash\necho __SCREEN_ID__\n");
    ctx.write_config("[sources]\ntemplate = \"core.sh\"\n");

    ctx.cli()
        .arg("doctor")
        .assert()
        .success()
        .stderr(predicate::str::contains("[WARN] "))
        .stderr(predicate::str::contains("placeholder __ROT_DEG__ is never used"))
        .stderr(predicate::str::contains("Check completed with"));

    ctx.cli()
        .args(["doctor", "--strict"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Check failed: 0 error(s)"));
}

#[test]
fn unknown_placeholder_is_an_error() {
    let ctx = TestContext::new();
    ctx.write_file("core.sh", "echo __SCREEN_COLOR__\n");
    ctx.write_config("[sources]\ntemplate = \"core.sh\"\n");

    ctx.cli()
        .arg("doctor")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("[ERROR] "))
        .stderr(predicate::str::contains("unknown placeholder __SCREEN_COLOR__"));
}

#[test]
fn missing_template_file_is_an_error() {
    let ctx = TestContext::new();
    ctx.write_config("[sources]\ntemplate = \"gone.sh\"\n");

    ctx.cli()
        .arg("doctor")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("[ERROR] "))
        .stderr(predicate::str::contains("Check failed: 1 error(s)"));
}
