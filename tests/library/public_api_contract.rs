use std::fs;

use rpidsm::{
    AppError, DoctorOptions, Language, OsVariant, RawRequest, ResolveError, Rotation, describe,
    doctor, install, install_command, list_screens, load_context, resolve,
};
use tempfile::TempDir;
use url::Url;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("rpidsm.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn resolve_produces_script_and_summary() {
    let dir = TempDir::new().unwrap();
    let ctx = load_context(Some(&write_config(&dir, ""))).unwrap();

    let raw = RawRequest::for_screen("7inch-1024x600").rotation("270").os("bookworm32");
    let result = resolve(&ctx, &raw).unwrap();

    assert_eq!(result.rotation, Rotation::Deg270);
    assert_eq!(result.os, OsVariant::Bookworm32);
    assert_eq!(result.language, Language::Zh);
    assert_eq!(result.scenario, "hdmi_cvt");
    assert_eq!(result.summary.resolution.width, 1024);
    assert!(result.script.contains("HDMI_CVT=\"1024 600 60 6 0 0 0\""));
    assert!(!result.script.contains("__ROT_DEG__"));
}

#[test]
fn resolve_reports_first_failing_check() {
    let dir = TempDir::new().unwrap();
    let ctx = load_context(Some(&write_config(&dir, ""))).unwrap();

    let err = resolve(&ctx, &RawRequest::default().rotation("45")).unwrap_err();
    assert_eq!(err, ResolveError::MissingScreenId);

    let err = resolve(&ctx, &RawRequest::for_screen("88bar").rotation("45").os("x")).unwrap_err();
    assert_eq!(err, ResolveError::InvalidRotation("45".to_string()));
}

#[test]
fn describe_and_install_share_status_mapping() {
    let dir = TempDir::new().unwrap();
    let ctx = load_context(Some(&write_config(&dir, ""))).unwrap();

    let ok = describe(&ctx, &RawRequest::for_screen("round-2.1"));
    assert_eq!(ok.status, 200);
    let json: serde_json::Value = serde_json::from_str(&ok.body).unwrap();
    assert_eq!(json["id"], "round-2.1");

    let script = install(&ctx, &RawRequest::for_screen("round-2.1"));
    assert!(script.is_success());
    assert_eq!(script.body, json["script"].as_str().unwrap());

    let missing = RawRequest::for_screen("nope");
    assert_eq!(describe(&ctx, &missing).status, 404);
    assert_eq!(install(&ctx, &missing), describe(&ctx, &missing));
}

#[test]
fn list_screens_follows_catalog_order() {
    let dir = TempDir::new().unwrap();
    let ctx = load_context(Some(&write_config(&dir, ""))).unwrap();

    let ids: Vec<String> = list_screens(&ctx, Language::En).into_iter().map(|s| s.id).collect();
    let expected = [
        "88bar",
        "79bar",
        "7inch-1024x600",
        "5inch-800x480",
        "round-2.1",
        "mpi3501",
        "mhs35",
        "mpi4008",
    ];
    assert_eq!(ids, expected);
}

#[test]
fn install_command_uses_configured_delivery() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "[delivery]\nbase_url = \"https://pi.example.com\"\n");
    let ctx = load_context(Some(&config)).unwrap();

    let line = install_command(&ctx, &RawRequest::for_screen("mpi3501"), None).unwrap();
    assert_eq!(
        line,
        "curl -sL \"https://pi.example.com/api/install?id=mpi3501&rot=0&os=bookworm64&lang=zh\" \
         | sudo bash"
    );

    let other = Url::parse("http://10.0.0.2:8080").unwrap();
    let line = install_command(&ctx, &RawRequest::for_screen("mpi3501"), Some(&other)).unwrap();
    assert!(line.contains("http://10.0.0.2:8080/api/install?"));
}

#[test]
fn doctor_reports_clean_embedded_assets() {
    let dir = TempDir::new().unwrap();
    let ctx = load_context(Some(&write_config(&dir, ""))).unwrap();

    let outcome = doctor(&ctx, DoctorOptions { strict: true }).unwrap();
    assert_eq!((outcome.errors, outcome.warnings, outcome.exit_code), (0, 0, 0));
}

#[test]
fn load_context_rejects_broken_catalog() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("screens.json"), "[{\"id\": \"x\"}]").unwrap();
    let config = write_config(&dir, "[sources]\ncatalog = \"screens.json\"\n");

    assert!(matches!(load_context(Some(&config)), Err(AppError::CatalogLoad { .. })));
}
