use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn prints_only_the_script() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["install", "--id", "mpi4008", "--rot", "90", "--os", "bullseye64"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("#!/usr/bin/env bash"))
        .stdout(predicate::str::contains("LCDSHOW_INSTALLER=\"MPI4008-show\""))
        .stdout(predicate::str::contains("LCDSHOW_ROTARG=\"0\""))
        .stdout(predicate::str::contains("OS_VARIANT=\"bullseye64\""))
        .stdout(predicate::str::contains("__").not());
}

#[test]
fn alias_and_trimmed_inputs_are_accepted() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["i", "--id", " 79bar ", "--rot", " 270 ", "--lang", " en"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SCREEN_ID=\"79bar\""))
        .stdout(predicate::str::contains("ROT_DEG=\"270\""))
        .stdout(predicate::str::contains("UI_LANG=\"en\""));
}

#[test]
fn unknown_screen_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["install", "--id", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: unknown screen id 'nope'"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn unsupported_os_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["install", "--id", "88bar", "--os", "debian11"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("os not supported: 'debian11'"));
}

#[test]
fn invalid_language_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["install", "--id", "88bar", "--lang", "fr"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("lang must be zh or en (got 'fr')"));
}
