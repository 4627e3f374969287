use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("adoc-babel")
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn prints_text_events() {
    let mut cmd = cargo_bin_cmd!("adoc-events");
    cmd.arg(fixture_path("guide.json"));

    let output_pred = predicate::str::starts_with("BeginDocument [syntax=asciidoc/1.0]\n")
        .and(predicate::str::contains("BeginLink [url:Setup untyped]"))
        .and(predicate::str::ends_with("EndDocument [syntax=asciidoc/1.0]\n"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn wiki_flag_turns_untyped_links_into_documents() {
    let mut cmd = cargo_bin_cmd!("adoc-events");
    cmd.arg(fixture_path("guide.json")).arg("--wiki");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("BeginLink [doc:Setup untyped]"));
}

#[test]
fn prints_json_events() {
    let mut cmd = cargo_bin_cmd!("adoc-events");
    cmd.arg(fixture_path("guide.json"))
        .arg("--format")
        .arg("json")
        .arg("--syntax")
        .arg("asciidoctor/1.0");

    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let events: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let events = events.as_array().expect("a JSON array");
    assert_eq!(
        events[0],
        serde_json::json!({ "BeginDocument": { "syntax": "asciidoctor/1.0" } })
    );
    assert_eq!(events[1], serde_json::json!("BeginParagraph"));
}

#[test]
fn reads_source_from_stdin() {
    let mut cmd = cargo_bin_cmd!("adoc-events");
    cmd.arg("-").write_stdin(
        r#"{ "blocks": [ { "context": "section", "level": 1, "title": "Hello" } ] }"#,
    );

    cmd.assert().success().stdout(
        "BeginDocument [syntax=asciidoc/1.0]\n\
         BeginSection\n\
         BeginHeader [level=1]\n\
         RawText \"Hello\"\n\
         EndHeader [level=1]\n\
         EndSection\n\
         EndDocument [syntax=asciidoc/1.0]\n",
    );
}

#[test]
fn config_file_is_layered_under_flags() {
    let mut config = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(config, "[translate]\nwiki_mode = true\n\n[output]\nformat = \"json\"").unwrap();

    let mut cmd = cargo_bin_cmd!("adoc-events");
    cmd.arg(fixture_path("guide.json"))
        .arg("--config")
        .arg(config.path())
        .arg("--format")
        .arg("text");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("BeginLink [doc:Setup untyped]"));
}

#[test]
fn invalid_source_fails() {
    let mut cmd = cargo_bin_cmd!("adoc-events");
    cmd.arg("-").write_stdin("{ not json");

    cmd.assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Translation error"));
}

#[test]
fn strict_mode_rejects_broken_html() {
    let source = r#"{ "blocks": [ { "context": "paragraph", "content": "<p>broken</i> text" } ] }"#;

    let mut lenient = cargo_bin_cmd!("adoc-events");
    lenient.arg("-").write_stdin(source);
    lenient
        .assert()
        .success()
        .stdout(predicate::str::contains("RawText \"broken text\""));

    let mut strict = cargo_bin_cmd!("adoc-events");
    strict.arg("-").arg("--strict").write_stdin(source);
    strict
        .assert()
        .failure()
        .stderr(predicate::str::contains("<p>broken</i> text"));
}

#[test]
fn missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("adoc-events");
    cmd.arg(dir.path().join("absent.json"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error reading"));
}

#[test]
fn unknown_syntax_is_rejected_by_the_parser() {
    let mut cmd = cargo_bin_cmd!("adoc-events");
    cmd.arg("-").arg("--syntax").arg("markdown/1.0");

    cmd.assert().failure();
}

#[test]
fn lists_syntaxes() {
    let mut cmd = cargo_bin_cmd!("adoc-events");
    cmd.arg("--list-syntaxes");

    cmd.assert().success().stdout(
        predicate::str::contains("asciidoc/1.0 - AsciiDoc")
            .and(predicate::str::contains("asciidoctor/1.0 - Asciidoctor")),
    );
}
