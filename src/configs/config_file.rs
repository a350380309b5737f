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

use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::ArgMatches;
use serde::Deserialize;

use crate::configs::config::ConfigError;
use crate::loadable::{normalize_path, Loadable};
use crate::naming::EmojiSet;
use crate::sprites::sheet::SheetFormat;

/// Every setting is optional here; the missing ones are either filled with defaults or rejected
/// when converting it into a [`SpriteConfig`](crate::configs::config::SpriteConfig).
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SpriteConfigFile {
    pub emoji_test: Option<PathBuf>,
    pub emoji_dir: Option<PathBuf>,
    pub emoji_set: Option<EmojiSet>,
    pub columns: Option<u32>,
    pub max_rows: Option<u32>,
    pub emoji_size: Option<u32>,
    pub format: Option<SheetFormat>,
    pub optimize: Option<bool>,
    pub keep_missing: Option<bool>,
    pub signal_repo_path: Option<PathBuf>,
    pub assets_dir: Option<PathBuf>,
    pub java_file: Option<PathBuf>,
    pub java_package: Option<String>,
    pub class_name: Option<String>,
    pub asset_uri_prefix: Option<String>,
    pub manifest: Option<PathBuf>,
}

impl SpriteConfigFile {
    /// Takes every value that is set in `overrides` and keeps the own value otherwise
    pub fn merge(self, overrides: SpriteConfigFile) -> SpriteConfigFile {
        SpriteConfigFile {
            emoji_test: overrides.emoji_test.or(self.emoji_test),
            emoji_dir: overrides.emoji_dir.or(self.emoji_dir),
            emoji_set: overrides.emoji_set.or(self.emoji_set),
            columns: overrides.columns.or(self.columns),
            max_rows: overrides.max_rows.or(self.max_rows),
            emoji_size: overrides.emoji_size.or(self.emoji_size),
            format: overrides.format.or(self.format),
            optimize: overrides.optimize.or(self.optimize),
            keep_missing: overrides.keep_missing.or(self.keep_missing),
            signal_repo_path: overrides.signal_repo_path.or(self.signal_repo_path),
            assets_dir: overrides.assets_dir.or(self.assets_dir),
            java_file: overrides.java_file.or(self.java_file),
            java_package: overrides.java_package.or(self.java_package),
            class_name: overrides.class_name.or(self.class_name),
            asset_uri_prefix: overrides.asset_uri_prefix.or(self.asset_uri_prefix),
            manifest: overrides.manifest.or(self.manifest),
        }
    }

    /// Reads the arguments defined in [`cli::app`](crate::configs::cli::app).
    /// Flags that are absent are `None` so they don't override a config file.
    pub fn from_matches(matches: &ArgMatches) -> Result<SpriteConfigFile, ConfigError> {
        let path = |name: &str| matches.value_of_os(name).map(PathBuf::from);
        let string = |name: &str| matches.value_of(name).map(String::from);
        let flag = |name: &str| if matches.is_present(name) { Some(true) } else { None };

        Ok(SpriteConfigFile {
            emoji_test: path("emoji_test"),
            emoji_dir: path("emoji_dir"),
            emoji_set: parse_value(matches, "emojis")?,
            columns: parse_value(matches, "columns")?,
            max_rows: parse_value(matches, "rows")?,
            emoji_size: parse_value(matches, "size")?,
            format: parse_value(matches, "format")?,
            optimize: flag("optimize"),
            keep_missing: flag("keep_missing"),
            signal_repo_path: path("signal_repo_path"),
            assets_dir: path("assets_dir"),
            java_file: path("java_file"),
            java_package: string("java_package"),
            class_name: string("class_name"),
            asset_uri_prefix: string("asset_uri_prefix"),
            manifest: path("manifest"),
        })
    }
}

fn parse_value<T: FromStr>(matches: &ArgMatches, name: &'static str) -> Result<Option<T>, ConfigError> {
    match matches.value_of(name) {
        Some(value) => T::from_str(value)
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue(name, value.to_owned())),
        None => Ok(None)
    }
}

impl Loadable for SpriteConfigFile {
    fn normalize_paths(&mut self, root_dir: &Path) {
        let paths = vec![
            &mut self.emoji_test,
            &mut self.emoji_dir,
            &mut self.signal_repo_path,
            &mut self.assets_dir,
            &mut self.java_file,
            &mut self.manifest,
        ];
        paths.into_iter()
            .flatten()
            .for_each(|path| normalize_path(path, root_dir));
    }
}
