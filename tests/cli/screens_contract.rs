use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn lists_every_screen_as_a_table() {
    let ctx = TestContext::new();

    let output = ctx.cli().args(["screens", "--lang", "en"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut lines = stdout.lines();
    assert!(lines.next().unwrap().starts_with("ID"));
    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), 8);
    assert!(rows[0].starts_with("88bar"));
    assert!(rows.iter().any(|row| row.starts_with("mpi3501") && row.contains("lcd_show_driver")));
}

#[test]
fn json_listing_uses_requested_language() {
    let ctx = TestContext::new();

    let output = ctx.cli().args(["ls", "--json", "--lang", "zh"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let first = &json[0];
    assert_eq!(first["id"], "88bar");
    assert_eq!(first["resolution"], "800×480");
    assert_eq!(first["touch"], "usb");
    assert!(first["name"].as_str().unwrap().starts_with("8.8 寸"));
}

#[test]
fn rejects_unknown_language() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["screens", "--lang", "de"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("lang must be zh or en"));
}
