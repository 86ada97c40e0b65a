// tests/common/mod.rs
//! 共通テストユーティリティ

use std::{
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::Command;
use serde_json::Value;

/// A scratch directory tree that is removed on drop.
#[derive(Debug)]
pub struct TempTree {
    dir: tempfile::TempDir,
}

impl TempTree {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_file(&self, rel: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    /// `collect_files` with the tree as working directory.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_collect_files"));
        cmd.current_dir(self.path()).env_remove("RUST_LOG");
        cmd
    }

    pub fn read_json(&self, rel: &str) -> Vec<Value> {
        let text = fs::read_to_string(self.path().join(rel)).unwrap();
        match serde_json::from_str(&text).unwrap() {
            Value::Array(items) => items,
            other => panic!("expected a JSON array, got {other}"),
        }
    }
}

/// The `a.txt` / `target/skip.txt` / `sub/b.txt` tree used throughout the tests.
pub fn sample_tree() -> TempTree {
    let tree = TempTree::new();
    tree.write_file("a.txt", "hello");
    tree.write_file("target/skip.txt", "x");
    tree.write_file("sub/b.txt", "world");
    tree
}

pub fn field<'a>(record: &'a Value, key: &str) -> &'a str {
    record[key].as_str().unwrap()
}
