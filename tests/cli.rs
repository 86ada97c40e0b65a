// tests/cli.rs
mod common;

use std::{collections::BTreeSet, path::Path};

use common::{TempTree, field, sample_tree};
use predicates::prelude::*;

#[test]
fn shows_help() {
    TempTree::new()
        .command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("collect_files"));
}

#[test]
fn collects_sample_tree_and_skips_target() {
    let tree = sample_tree();

    tree.command()
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Data saved to collected_files.json"))
        .stderr(predicate::str::is_empty());

    let records = tree.read_json("collected_files.json");
    assert_eq!(records.len(), 2);
    let names: BTreeSet<_> = records.iter().map(|r| field(r, "filename")).collect();
    assert_eq!(names, BTreeSet::from(["a.txt", "b.txt"]));
    for record in &records {
        let path = Path::new(field(record, "path"));
        assert!(path.is_absolute(), "default root is the absolute working directory");
        assert!(!path.components().any(|c| c.as_os_str() == "target"));
    }
    let b = records.iter().find(|r| field(r, "filename") == "b.txt").unwrap();
    assert!(Path::new(field(b, "path")).ends_with("sub/b.txt"));
    assert_eq!(field(b, "content"), "world");
}

#[test]
fn output_uses_four_space_indentation_and_key_order() {
    let tree = TempTree::new();
    tree.write_file("only.txt", "x");
    tree.command().assert().success();

    let text = std::fs::read_to_string(tree.path().join("collected_files.json")).unwrap();
    assert!(text.starts_with("[\n    {\n        \"path\": "));
    let path_at = text.find("\"path\"").unwrap();
    let filename_at = text.find("\"filename\"").unwrap();
    let content_at = text.find("\"content\"").unwrap();
    assert!(path_at < filename_at && filename_at < content_at);
}

#[test]
fn empty_directory_produces_empty_array() {
    let tree = TempTree::new();
    tree.command().assert().success();
    assert!(tree.read_json("collected_files.json").is_empty());
}

#[test]
fn second_run_collects_previous_output() {
    let tree = sample_tree();
    tree.command().assert().success();
    let first = std::fs::read_to_string(tree.path().join("collected_files.json")).unwrap();
    tree.command().assert().success();

    let records = tree.read_json("collected_files.json");
    assert_eq!(records.len(), 3);
    let previous = records.iter().find(|r| field(r, "filename") == "collected_files.json").unwrap();
    assert_eq!(field(previous, "content"), first);
}

#[test]
fn existing_file_named_like_the_output_is_collected() {
    let tree = TempTree::new();
    tree.write_file("a.txt", "a");
    tree.write_file("collected_files.json", "user data");

    tree.command().arg("--sort").assert().success();

    let records = tree.read_json("collected_files.json");
    let names: Vec<_> = records.iter().map(|r| field(r, "filename")).collect();
    assert_eq!(names, ["a.txt", "collected_files.json"]);
    assert_eq!(field(&records[1], "content"), "user data");
}

#[test]
fn exclude_output_makes_repeated_runs_identical() {
    let tree = sample_tree();
    tree.command().arg("--exclude-output").assert().success();
    let first = std::fs::read(tree.path().join("collected_files.json")).unwrap();
    tree.command().arg("--exclude-output").assert().success();
    let second = std::fs::read(tree.path().join("collected_files.json")).unwrap();
    assert_eq!(first.len(), second.len());
    assert_eq!(tree.read_json("collected_files.json").len(), 2);
}

#[test]
fn explicit_root_and_output() {
    let tree = sample_tree();
    std::fs::create_dir(tree.path().join("out")).unwrap();

    tree.command()
        .args(["sub", "--output", "out/snapshot.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Data saved to out/snapshot.json"));

    let records = tree.read_json("out/snapshot.json");
    assert_eq!(records.len(), 1);
    assert!(Path::new(field(&records[0], "path")).ends_with("sub/b.txt"));
}

#[test]
fn extra_exclusions_and_disabling_defaults() {
    let tree = sample_tree();
    tree.write_file("node_modules/dep.js", "x");

    tree.command().args(["-x", "node_modules", "--no-default-excludes", "--sort"]).assert().success();

    let names: Vec<_> =
        tree.read_json("collected_files.json").iter().map(|r| field(r, "filename").to_string()).collect();
    assert_eq!(names, ["a.txt", "b.txt", "skip.txt"]);
}

#[test]
fn streaming_matches_default_output() {
    let tree = sample_tree();
    tree.command().args(["--sort", "--exclude-output"]).assert().success();
    let buffered = std::fs::read(tree.path().join("collected_files.json")).unwrap();

    tree.command().args(["--sort", "--stream", "--exclude-output"]).assert().success();
    let streamed = std::fs::read(tree.path().join("collected_files.json")).unwrap();
    assert_eq!(buffered, streamed);
}

#[test]
fn invalid_utf8_bytes_are_dropped() {
    let tree = TempTree::new();
    tree.write_file("mixed.bin", b"ab\xffcd".as_slice());
    tree.command().assert().success();
    assert_eq!(field(&tree.read_json("collected_files.json")[0], "content"), "abcd");
}

#[test]
fn crlf_line_endings_are_normalised_unless_kept() {
    let tree = TempTree::new();
    tree.write_file("win.txt", b"one\r\ntwo\rthree".as_slice());

    tree.command().assert().success();
    assert_eq!(field(&tree.read_json("collected_files.json")[0], "content"), "one\ntwo\nthree");

    tree.command().args(["-o", "kept.json", "--newlines", "keep"]).assert().success();
    let kept = tree.read_json("kept.json");
    let win = kept.iter().find(|r| field(r, "filename") == "win.txt").unwrap();
    assert_eq!(field(win, "content"), "one\r\ntwo\rthree");
}

#[test]
fn ascii_output_escapes_non_ascii() {
    let tree = TempTree::new();
    tree.write_file("caf\u{e9}.txt", "th\u{e9}");

    tree.command().arg("--ascii").assert().success();

    let text = std::fs::read_to_string(tree.path().join("collected_files.json")).unwrap();
    assert!(text.is_ascii());
    assert!(text.contains(r#""filename": "caf\u00e9.txt""#));
    assert!(text.contains(r#""content": "th\u00e9""#));
    assert_eq!(field(&tree.read_json("collected_files.json")[0], "content"), "th\u{e9}");
}

#[test]
fn fail_policy_aborts_without_writing_output() {
    let tree = TempTree::new();
    tree.write_file("mixed.bin", b"\xff".as_slice());

    tree.command()
        .args(["--on-decode-error", "fail"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("mixed.bin"));
    assert!(!tree.path().join("collected_files.json").exists());
}

#[test]
fn unwritable_output_is_reported_but_exits_zero() {
    let tree = sample_tree();

    tree.command()
        .args(["-o", "missing-dir/out.json"])
        .assert()
        .success()
        .stderr(predicate::str::starts_with("Could not save data to missing-dir/out.json: "));

    tree.command().args(["-o", "missing-dir/out.json", "--strict"]).assert().failure();
}

#[test]
fn streaming_to_unwritable_output_still_reports_files_first() {
    let tree = sample_tree();
    tree.write_file("mixed.bin", b"\xff".as_slice());

    let assert = tree
        .command()
        .args(["--stream", "--on-decode-error", "skip-file", "-o", "missing-dir/out.json"])
        .assert()
        .success();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();

    let read_at = stderr.find("Could not read file ").expect("read diagnostic");
    let save_at = stderr.find("Could not save data to missing-dir/out.json: ").expect("save diagnostic");
    assert!(read_at < save_at, "unexpected order:\n{stderr}");
}

#[cfg(unix)]
#[test]
fn permission_denied_file_is_reported_and_run_continues() {
    use std::os::unix::fs::PermissionsExt;

    let tree = sample_tree();
    let locked = tree.write_file("locked.txt", "secret");
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();
    if std::fs::read(&locked).is_ok() {
        // Running as root: permissions are not enforced.
        return;
    }

    tree.command()
        .assert()
        .success()
        .stderr(predicate::str::contains("Could not read file ").and(predicate::str::contains("locked.txt")))
        .stdout(predicate::str::contains("Data saved to collected_files.json"));
    let names: BTreeSet<_> =
        tree.read_json("collected_files.json").iter().map(|r| field(r, "filename").to_string()).collect();
    assert_eq!(names, BTreeSet::from(["a.txt".to_string(), "b.txt".to_string()]));

    tree.command().arg("--strict").assert().failure();
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o644)).unwrap();
}

#[cfg(unix)]
#[test]
fn follow_links_descends_into_linked_directories() {
    let outside = TempTree::new();
    outside.write_file("far.txt", "far");
    let tree = TempTree::new();
    tree.write_file("near.txt", "near");
    std::os::unix::fs::symlink(outside.path(), tree.path().join("linked")).unwrap();

    tree.command().args(["-o", "plain.json", "--sort"]).assert().success();
    let names: Vec<_> = tree.read_json("plain.json").iter().map(|r| field(r, "filename").to_string()).collect();
    assert_eq!(names, ["near.txt"]);

    tree.command().args(["-o", "followed.json", "--sort", "--follow-links", "--exclude-output"]).assert().success();
    let records = tree.read_json("followed.json");
    let far = records.iter().find(|r| field(r, "filename") == "far.txt").expect("linked file collected");
    assert!(Path::new(field(far, "path")).ends_with("linked/far.txt"));

    tree.write_file("collect.yaml", "follow_links: true\noutput: from-config.json\n");
    tree.command().args(["--config", "collect.yaml"]).assert().success();
    assert!(tree.read_json("from-config.json").iter().any(|r| field(r, "filename") == "far.txt"));
}

#[cfg(unix)]
#[test]
fn broken_symlink_is_reported_and_run_continues() {
    let tree = sample_tree();
    std::os::unix::fs::symlink(tree.path().join("nowhere"), tree.path().join("broken")).unwrap();

    tree.command()
        .assert()
        .success()
        .stderr(predicate::str::contains("Could not read file ").and(predicate::str::contains("broken")))
        .stdout(predicate::str::contains("Data saved to collected_files.json"));
    assert_eq!(tree.read_json("collected_files.json").len(), 2);

    tree.command().arg("--strict").assert().failure();
}

#[test]
fn config_file_is_honoured() {
    let tree = sample_tree();
    tree.write_file("vendor/lib.rs", "v");
    tree.write_file("collect.yaml", "excluded_dirs: [target, vendor]\noutput: snapshot.json\nsort: true\n");

    tree.command().args(["--config", "collect.yaml"]).assert().success();

    let names: Vec<_> = tree.read_json("snapshot.json").iter().map(|r| field(r, "filename").to_string()).collect();
    assert_eq!(names, ["a.txt", "collect.yaml", "b.txt"]);
}

#[test]
fn missing_root_is_a_usage_error() {
    TempTree::new()
        .command()
        .arg("does-not-exist")
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be an existing directory"));
}
