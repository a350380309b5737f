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

use std::convert::TryFrom;
use std::path::{Path, PathBuf};

use crate::codegen::java::{JavaPagesWriter, DEFAULT_ASSET_URI_PREFIX, DEFAULT_CLASS_NAME, DEFAULT_PACKAGE};
use crate::codegen::manifest::ManifestWriter;
use crate::configs::config_file::SpriteConfigFile;
use crate::images::loader::ImageLoader;
use crate::naming::EmojiSet;
use crate::sprites::sheet::{SheetFormat, MAX_SHEET_DIMENSION};

pub const DEFAULT_COLUMNS: u32 = 32;
pub const DEFAULT_MAX_ROWS: u32 = 12;
pub const DEFAULT_EMOJI_SIZE: u32 = 64;
pub const DEFAULT_EMOJI_TEST: &str = "emoji-test.txt";
/// Relative to the Signal-Android checkout
pub const ASSETS_DIR: &str = "app/src/main/assets/emoji";
pub const JAVA_FILE: &str = "app/src/main/java/org/thoughtcrime/securesms/components/emoji/EmojiPages.java";

#[derive(Debug)]
pub enum ConfigError {
    MissingParameter(&'static str),
    InvalidValue(&'static str, String),
}

/// Everything needed for a build, with all defaults applied
#[derive(Debug, Clone)]
pub struct SpriteConfig {
    pub emoji_test: PathBuf,
    pub emoji_dir: PathBuf,
    pub emoji_set: EmojiSet,
    pub columns: u32,
    pub max_rows: u32,
    pub emoji_size: u32,
    pub format: SheetFormat,
    pub optimize: bool,
    pub keep_missing: bool,
    pub assets_dir: PathBuf,
    /// No Java file will be written if this is `None`
    pub java_file: Option<PathBuf>,
    pub java_package: String,
    pub class_name: String,
    pub asset_uri_prefix: String,
    pub manifest: Option<PathBuf>,
}

impl SpriteConfig {
    /// The maximum number of sprites on one sheet
    pub fn capacity(&self) -> usize {
        self.columns as usize * self.max_rows as usize
    }

    pub fn image_loader(&self) -> ImageLoader {
        ImageLoader::new(&self.emoji_dir, self.emoji_set, self.emoji_size)
    }

    pub fn java_writer(&self) -> JavaPagesWriter {
        JavaPagesWriter {
            package: self.java_package.clone(),
            class_name: self.class_name.clone(),
            asset_uri_prefix: self.asset_uri_prefix.clone(),
            format: self.format,
        }
    }

    pub fn manifest_writer(&self) -> ManifestWriter {
        ManifestWriter {
            columns: self.columns,
            size: self.emoji_size,
            format: self.format,
        }
    }
}

fn positive(name: &'static str, value: Option<u32>, default: u32) -> Result<u32, ConfigError> {
    match value.unwrap_or(default) {
        0 => Err(ConfigError::InvalidValue(name, String::from("0"))),
        value => Ok(value)
    }
}

/// A full row (or column) of sprites has to fit into a single sheet
fn sheet_dimension(name: &'static str, cells: u32, size: u32) -> Result<u32, ConfigError> {
    match cells.checked_mul(size) {
        Some(pixels) if pixels <= MAX_SHEET_DIMENSION => Ok(cells),
        _ => Err(ConfigError::InvalidValue(
            name,
            format!("{} sprites of {}px exceed {}px", cells, size, MAX_SHEET_DIMENSION)
        ))
    }
}

impl TryFrom<SpriteConfigFile> for SpriteConfig {
    type Error = ConfigError;

    fn try_from(file: SpriteConfigFile) -> Result<Self, Self::Error> {
        let emoji_set = file.emoji_set.ok_or(ConfigError::MissingParameter("emojis"))?;
        let repo_path = |relative: &str| file.signal_repo_path.as_deref()
            .map(|repo: &Path| repo.join(relative));

        let assets_dir = match file.assets_dir.clone().or_else(|| repo_path(ASSETS_DIR)) {
            Some(assets_dir) => assets_dir,
            None => return Err(ConfigError::MissingParameter("signal_repo_path"))
        };
        let java_file = file.java_file.clone().or_else(|| repo_path(JAVA_FILE));

        let emoji_size = positive("emoji_size", file.emoji_size, DEFAULT_EMOJI_SIZE)?;
        let columns = positive("columns", file.columns, DEFAULT_COLUMNS)?;
        let max_rows = positive("max_rows", file.max_rows, DEFAULT_MAX_ROWS)?;
        let columns = sheet_dimension("columns", columns, emoji_size)?;
        let max_rows = sheet_dimension("max_rows", max_rows, emoji_size)?;

        Ok(SpriteConfig {
            emoji_test: file.emoji_test.unwrap_or_else(|| PathBuf::from(DEFAULT_EMOJI_TEST)),
            emoji_dir: file.emoji_dir.unwrap_or_else(|| PathBuf::from(emoji_set.to_string())),
            emoji_set,
            columns,
            max_rows,
            emoji_size,
            format: file.format.unwrap_or_default(),
            optimize: file.optimize.unwrap_or(false),
            keep_missing: file.keep_missing.unwrap_or(false),
            assets_dir,
            java_file,
            java_package: file.java_package.unwrap_or_else(|| String::from(DEFAULT_PACKAGE)),
            class_name: file.class_name.unwrap_or_else(|| String::from(DEFAULT_CLASS_NAME)),
            asset_uri_prefix: file.asset_uri_prefix.unwrap_or_else(|| String::from(DEFAULT_ASSET_URI_PREFIX)),
            manifest: file.manifest,
        })
    }
}
