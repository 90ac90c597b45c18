use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn help_lists_commands() {
    let mut cmd = cargo_bin_cmd!("aperturectl");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("query"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("albums"));
}

#[test]
fn search_help_mentions_filters() {
    let mut cmd = cargo_bin_cmd!("aperturectl");
    let output = cmd
        .arg("search")
        .arg("--help")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output);
    for flag in ["--text", "--type", "--album", "--person", "--before"] {
        assert!(text.contains(flag), "search help missing {flag}");
    }
    assert!(text.contains("--limit"), "search help missing --limit");
}

#[test]
fn query_prints_the_compiled_query() {
    let mut cmd = cargo_bin_cmd!("aperturectl");
    cmd.env_remove("APERTURE_API_URL")
        .env_remove("APERTURE_CONFIG")
        .args(["query", "--text", "cat", "--type", "image"])
        .assert()
        .success()
        .stdout("cat type:image public:true\n");
}

#[test]
fn query_quotes_the_day_after_before() {
    let mut cmd = cargo_bin_cmd!("aperturectl");
    cmd.env_remove("APERTURE_CONFIG")
        .args(["query", "--before", "2023-04-30", "--include-private"])
        .assert()
        .success()
        .stdout("before:\"2023-05-01T00:00:00Z\" public:false\n");
}

#[test]
fn query_rejects_unknown_media_types() {
    let mut cmd = cargo_bin_cmd!("aperturectl");
    cmd.args(["query", "--type", "hologram"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("hologram"));
}

#[test]
fn search_without_a_server_url_fails() {
    let mut cmd = cargo_bin_cmd!("aperturectl");
    cmd.env_remove("APERTURE_API_URL")
        .env_remove("APERTURE_CONFIG")
        .arg("search")
        .assert()
        .failure()
        .stderr(predicate::str::contains("APERTURE_API_URL"));
}

#[test]
fn query_rejects_the_response_only_other_type() {
    let mut cmd = cargo_bin_cmd!("aperturectl");
    cmd.args(["query", "--type", "other"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("other"));
}
