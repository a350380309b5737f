/*
 * Copyright 2021 Constantin A. <emoji.builder@c1710.de>
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Loading of structs from configuration files in any of the supported formats

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

pub const DEFAULT_EXTENSION: &str = "json";

/// The file formats a [Loadable] can be stored in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Yaml,
}

impl FileFormat {
    pub fn for_extension(extension: &str) -> Option<FileFormat> {
        match extension.to_lowercase().as_str() {
            "json" => Some(FileFormat::Json),
            "yaml" | "yml" => Some(FileFormat::Yaml),
            _ => None
        }
    }

    pub fn for_file(file: &Path) -> Option<FileFormat> {
        file.extension()
            .and_then(|extension| Self::for_extension(extension.to_string_lossy().as_ref()))
    }

    pub fn deserialize<T, R>(&self, reader: R) -> Result<T, LoadingError>
        where T: DeserializeOwned, R: Read {
        match self {
            FileFormat::Json => Ok(serde_json::from_reader(reader)?),
            FileFormat::Yaml => Ok(serde_yaml::from_reader(reader)?),
        }
    }
}

impl Default for FileFormat {
    fn default() -> Self {
        FileFormat::Json
    }
}

pub trait Loadable: DeserializeOwned + Sized {
    /// Picks the format by the file's extension (JSON if unknown) and lets the struct resolve
    /// relative paths against the file's directory.
    fn from_file(file: &Path) -> Result<Self, LoadingError> {
        let format = FileFormat::for_file(file).unwrap_or_else(|| {
            warn!("Unknown format of {:?}. Assuming {}", file, DEFAULT_EXTENSION);
            FileFormat::default()
        });
        let reader = BufReader::new(File::open(file)?);
        let mut loaded: Self = format.deserialize(reader)?;
        if let Some(parent) = file.parent() {
            loaded.normalize_paths(parent);
        }
        Ok(loaded)
    }

    fn from_reader<R>(reader: R, format: FileFormat) -> Result<Self, LoadingError>
        where R: Read {
        format.deserialize(reader)
    }

    /// Makes every relative path relative to `root_dir` instead
    fn normalize_paths(&mut self, _root_dir: &Path) {}
}

#[derive(Debug)]
pub enum LoadingError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Yaml(serde_yaml::Error),
}

impl From<std::io::Error> for LoadingError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for LoadingError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<serde_yaml::Error> for LoadingError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err)
    }
}

pub fn normalize_path(target_path: &mut PathBuf, root_dir: &Path) {
    // has_root instead of is_absolute, otherwise \file would be treated like .\file on Windows
    if !target_path.has_root() {
        *target_path = root_dir.join(&target_path);
    }
}

#[test]
fn test_normalize_path() {
    let mut relative = PathBuf::from("emojis/png");
    normalize_path(&mut relative, Path::new("/home/signal"));
    assert_eq!(relative, PathBuf::from("/home/signal/emojis/png"));

    let mut absolute = PathBuf::from("/tmp/png");
    normalize_path(&mut absolute, Path::new("/home/signal"));
    assert_eq!(absolute, PathBuf::from("/tmp/png"));
}
