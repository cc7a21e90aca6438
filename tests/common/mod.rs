#![allow(dead_code)]

pub mod command;
pub mod file;

use std::path::Path;

/// Path of a ref file below `.twig`
pub fn twig_path(dir: &Path, relative: &str) -> std::path::PathBuf {
    dir.join(".twig").join(relative)
}
