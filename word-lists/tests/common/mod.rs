#![allow(dead_code)]

pub use word_lists::*;
pub use std::{fs, path::{Path, PathBuf}};
pub use tempfile::TempDir;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a scratch directory containing the given text files.
pub fn workdir(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().expect("Can not create temp dir");
    for (name, content) in files {
        fs::write(dir.path().join(name), content).expect("Can not write fixture");
    }
    dir
}

pub fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path).expect("Can not read output")
}
