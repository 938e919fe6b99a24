//! CLI end-to-end tests that invoke the compiled `bkp` binary against
//! temporary hd/pen/dest trees.

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;

use backup_test_utils::tree::TestTree;

/// `bkp` with colors and ambient configuration switched off.
fn bkp() -> Command {
    let mut cmd = Command::cargo_bin("bkp").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("BKP_PROFILE")
        .env_remove("RUST_LOG");
    cmd
}

/// `bkp <command>` pointed at the roots of `tree`.
fn bkp_on(tree: &TestTree, command: &[&str]) -> Command {
    let mut cmd = bkp();
    cmd.args(command)
        .arg("--manifest")
        .arg(tree.manifest())
        .arg("--primary")
        .arg(tree.primary())
        .arg("--secondary")
        .arg(tree.secondary())
        .arg("--destination")
        .arg(tree.destination());
    cmd
}

fn json_of(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).expect("stdout should be JSON")
}

#[test]
fn help_lists_commands() {
    bkp()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("backup"))
        .stdout(predicate::str::contains("restore"))
        .stdout(predicate::str::contains("plan"));
}

#[test]
fn version_prints_package_version() {
    bkp()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_command_prints_hint() {
    bkp()
        .assert()
        .success()
        .stdout(predicate::str::contains("bkp --help"));
}

#[test]
fn backup_copies_primary_only_entry() {
    let tree = TestTree::new();
    tree.write_manifest(&["documento.txt"]);
    tree.primary_file("documento.txt", "conteudo do hd", 0);

    bkp_on(&tree, &["backup"])
        .assert()
        .success()
        .stdout(predicate::str::contains("copy_primary_to_dest"))
        .stdout(predicate::str::contains("documento.txt"))
        .stdout(predicate::str::contains("OK"));

    tree.assert_dest_content("documento.txt", "conteudo do hd");
}

#[test]
fn restore_copies_secondary_only_entry() {
    let tree = TestTree::new();
    tree.write_manifest(&["relatorio.txt"]);
    tree.secondary_file("relatorio.txt", "conteudo do pen", 0);

    bkp_on(&tree, &["restore", "--no-fsync"]).assert().success();

    tree.assert_dest_content("relatorio.txt", "conteudo do pen");
}

#[test]
fn conflict_exits_with_two_and_copies_nothing() {
    let tree = TestTree::new();
    tree.write_manifest(&["dados.txt"]);
    tree.primary_file("dados.txt", "hd", 0);
    tree.secondary_file("dados.txt", "pen", 10);

    bkp_on(&tree, &["backup"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("conflict"))
        .stdout(predicate::str::contains("CONFLICT"));

    tree.assert_dest_missing("dados.txt");
}

#[test]
fn missing_manifest_exits_with_two() {
    let tree = TestTree::new();

    bkp_on(&tree, &["backup"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Manifest not found"));
}

#[test]
fn missing_manifest_json_reports_synthetic_entry() {
    let tree = TestTree::new();

    let output = bkp_on(&tree, &["backup", "--json"])
        .assert()
        .code(2)
        .get_output()
        .stdout
        .clone();
    let json = json_of(&output);

    assert_eq!(json["manifest_missing"], true);
    assert_eq!(json["status"], "incomplete");
    assert_eq!(
        json["entries"],
        serde_json::json!([{
            "file": "Backup.parm",
            "code": 6,
            "outcome": "impossible",
            "transfer": { "status": "not_required" }
        }])
    );
}

#[test]
fn json_output_preserves_manifest_order() {
    let tree = TestTree::new();
    tree.write_manifest_raw("b.txt\r\n\r\na.txt\n   \nc.txt\n");
    tree.primary_file("a.txt", "a", 0);
    tree.primary_file("b.txt", "b", 0);
    tree.secondary_file("b.txt", "b", 0);
    tree.secondary_file("c.txt", "c", 0);

    let output = bkp_on(&tree, &["backup", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json = json_of(&output);

    let files: Vec<&str> = json["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["file"].as_str().unwrap())
        .collect();
    let codes: Vec<u64> = json["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["code"].as_u64().unwrap())
        .collect();

    assert_eq!(files, vec!["b.txt", "a.txt", "c.txt"]);
    assert_eq!(codes, vec![4, 1, 4]);
    assert_eq!(json["direction"], "forward");
}

#[test]
fn dry_run_does_not_copy() {
    let tree = TestTree::new();
    tree.write_manifest(&["documento.txt"]);
    tree.primary_file("documento.txt", "conteudo do hd", 0);

    let output = bkp_on(&tree, &["backup", "--dry-run", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json = json_of(&output);

    assert_eq!(json["dry_run"], true);
    assert_eq!(json["entries"][0]["transfer"]["status"], "dry_run");
    tree.assert_dest_missing("documento.txt");
}

#[test]
fn plan_uses_requested_direction() {
    let tree = TestTree::new();
    tree.write_manifest(&["relatorio.txt"]);
    tree.secondary_file("relatorio.txt", "pen", 0);

    bkp_on(&tree, &["plan", "--direction", "restore"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Planning restore"))
        .stdout(predicate::str::contains("copy_secondary_to_dest"));

    tree.assert_dest_missing("relatorio.txt");
}

#[test]
fn plan_rejects_unknown_direction() {
    let tree = TestTree::new();

    bkp_on(&tree, &["plan", "--direction", "sideways"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid direction"));
}

#[test]
fn saved_profile_drives_a_later_run() {
    let tree = TestTree::new();
    tree.write_manifest(&["relatorio.txt"]);
    tree.secondary_file("relatorio.txt", "conteudo do pen", 0);
    let profile = tree.root().join("nightly.toml");

    bkp_on(&tree, &["save-profile"])
        .arg(&profile)
        .arg("--direction")
        .arg("restore")
        .assert()
        .success();

    bkp()
        .arg("plan")
        .arg("--json")
        .env("BKP_PROFILE", &profile)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"direction\": \"reverse\""));

    bkp()
        .arg("restore")
        .arg("--profile")
        .arg(&profile)
        .assert()
        .success();

    tree.assert_dest_content("relatorio.txt", "conteudo do pen");
}

#[test]
fn empty_destination_is_an_error() {
    let tree = TestTree::new();
    tree.write_manifest(&["documento.txt"]);

    bkp()
        .arg("backup")
        .arg("--manifest")
        .arg(tree.manifest())
        .arg("--primary")
        .arg(tree.primary())
        .arg("--destination")
        .arg("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("destination"));
}

#[cfg(unix)]
#[test]
fn non_utf8_entry_is_copied_and_shown_lossily() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let tree = TestTree::new();
    tree.write_manifest_raw(b"caf\xe9.txt\nnotes:2024.txt\n");
    let name = OsStr::from_bytes(b"caf\xe9.txt");
    tree.primary_file(name, "hd", 0);
    tree.primary_file("notes:2024.txt", "hd", 0);

    let output = bkp_on(&tree, &["backup", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json = json_of(&output);

    assert_eq!(json["entries"][0]["file"], "caf\u{fffd}.txt");
    assert_eq!(json["entries"][0]["code"], 1);
    assert_eq!(json["entries"][1]["code"], 1);
    tree.assert_dest_content(name, "hd");
    tree.assert_dest_content("notes:2024.txt", "hd");
}
