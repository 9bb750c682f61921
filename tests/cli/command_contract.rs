use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn prints_curl_pipe_for_default_base_url() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["command", "--id", "88bar", "--rot", "90"])
        .assert()
        .success()
        .stdout(
            "curl -sL \"http://localhost:3000/api/install?id=88bar&rot=90&os=bookworm64&lang=zh\" \
             | sudo bash\n",
        );
}

#[test]
fn base_url_flag_overrides_configuration() {
    let ctx = TestContext::new();
    ctx.write_config("[delivery]\nbase_url = \"https://config.example.com\"\n");

    ctx.cli()
        .args(["command", "--id", "mhs35", "--base-url", "https://pi.example.com/setup/"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "curl -sL \"https://pi.example.com/setup/api/install?id=mhs35&rot=0",
        ));
}

#[test]
fn configured_base_url_is_used() {
    let ctx = TestContext::new();
    ctx.write_config(
        "[delivery]\nbase_url = \"https://config.example.com\"\ninstall_path = \"/install\"\n",
    );

    ctx.cli()
        .args(["command", "--id", "88bar", "--lang", "en"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\"https://config.example.com/install?id=88bar&rot=0&os=bookworm64&lang=en\"",
        ));
}

#[test]
fn validates_request_before_printing() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["command", "--id", "88bar", "--rot", "45"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("rot must be one of"));
}
