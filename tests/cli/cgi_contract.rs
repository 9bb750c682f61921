use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn install_route_serves_script() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("cgi")
        .env("REQUEST_METHOD", "GET")
        .env("PATH_INFO", "/api/install")
        .env("QUERY_STRING", "id=88bar&rot=270&lang=en")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Status: 200 OK\r\n"))
        .stdout(predicate::str::contains("Content-Type: text/x-shellscript; charset=utf-8\r\n"))
        .stdout(predicate::str::contains("Cache-Control: no-store\r\n"))
        .stdout(predicate::str::contains("\r\n\r\n#!/usr/bin/env bash"))
        .stdout(predicate::str::contains("ROT_DEG=\"270\""));
}

#[test]
fn generate_route_serves_json() {
    let ctx = TestContext::new();

    let output = ctx
        .cli()
        .arg("cgi")
        .env("PATH_INFO", "/api/generate")
        .env("QUERY_STRING", "id=mpi3501&os=bookworm32")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let (head, body) = stdout.split_once("\r\n\r\n").unwrap();
    assert!(head.contains("Content-Type: application/json"));
    let json: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(json["id"], "mpi3501");
    assert_eq!(json["os"], "bookworm32");
}

#[test]
fn failures_become_status_lines() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("cgi")
        .env("PATH_INFO", "/api/install")
        .env("QUERY_STRING", "id=nope")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Status: 404 Not Found\r\n"))
        .stdout(predicate::str::ends_with(r#"{"error":"unknown screen id 'nope'"}"#));

    ctx.cli()
        .arg("cgi")
        .env("PATH_INFO", "/api/install")
        .env("QUERY_STRING", "id=88bar&rot=45")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Status: 400 Bad Request\r\n"));

    ctx.cli()
        .arg("cgi")
        .env("REQUEST_METHOD", "POST")
        .env("PATH_INFO", "/api/install")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Status: 405 Method Not Allowed\r\n"));

    ctx.cli()
        .arg("cgi")
        .env("PATH_INFO", "/elsewhere")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Status: 404 Not Found\r\n"));
}
