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
use std::path::PathBuf;

use crate::configs::config::{ConfigError, SpriteConfig, ASSETS_DIR, JAVA_FILE};
use crate::configs::config_file::SpriteConfigFile;
use crate::loadable::{FileFormat, Loadable};
use crate::naming::EmojiSet;
use crate::sprites::sheet::SheetFormat;

const YAML_CONFIG: &str = "\
emoji_set: openmoji
emoji_dir: openmoji/72x72
signal_repo_path: /home/user/Signal-Android
format: png
optimize: true
";

#[test]
fn test_yaml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sprites.yaml");
    std::fs::write(&path, YAML_CONFIG).unwrap();

    let file = SpriteConfigFile::from_file(&path).unwrap();
    assert_eq!(file.emoji_set, Some(EmojiSet::Openmoji));
    // Relative to the config file, absolute paths stay the same
    assert_eq!(file.emoji_dir, Some(dir.path().join("openmoji/72x72")));
    assert_eq!(file.signal_repo_path, Some(PathBuf::from("/home/user/Signal-Android")));

    let config = SpriteConfig::try_from(file).unwrap();
    assert_eq!(config.format, SheetFormat::Png);
    assert!(config.optimize);
    assert_eq!(config.assets_dir, PathBuf::from("/home/user/Signal-Android").join(ASSETS_DIR));
    assert_eq!(config.java_file, Some(PathBuf::from("/home/user/Signal-Android").join(JAVA_FILE)));
    assert_eq!(config.capacity(), 384);
    assert_eq!(config.emoji_size, 64);
}

#[test]
fn test_json_and_merge() {
    let json = r#"{"emoji_set": "twemoji", "assets_dir": "out", "columns": 16}"#;
    let file = SpriteConfigFile::from_reader(json.as_bytes(), FileFormat::Json).unwrap();
    let overrides = SpriteConfigFile {
        columns: Some(8),
        keep_missing: Some(true),
        ..Default::default()
    };

    let config = SpriteConfig::try_from(file.merge(overrides)).unwrap();
    assert_eq!(config.columns, 8);
    assert!(config.keep_missing);
    assert_eq!(config.emoji_set, EmojiSet::Twemoji);
    // The images default to a directory named like the set
    assert_eq!(config.emoji_dir, PathBuf::from("twemoji"));
    assert_eq!(config.emoji_test, PathBuf::from("emoji-test.txt"));
    assert_eq!(config.java_file, None);
}

#[test]
fn test_invalid_configs() {
    let missing_set = SpriteConfigFile {
        assets_dir: Some(PathBuf::from("out")),
        ..Default::default()
    };
    assert!(matches!(SpriteConfig::try_from(missing_set), Err(ConfigError::MissingParameter("emojis"))));

    let missing_output = SpriteConfigFile {
        emoji_set: Some(EmojiSet::Noto),
        ..Default::default()
    };
    assert!(matches!(SpriteConfig::try_from(missing_output), Err(ConfigError::MissingParameter(_))));

    let no_columns = SpriteConfigFile {
        emoji_set: Some(EmojiSet::Noto),
        assets_dir: Some(PathBuf::from("out")),
        columns: Some(0),
        ..Default::default()
    };
    assert!(matches!(SpriteConfig::try_from(no_columns), Err(ConfigError::InvalidValue("columns", _))));

    let unknown_field = r#"{"emoji_set": "noto", "colums": 16}"#;
    assert!(SpriteConfigFile::from_reader(unknown_field.as_bytes(), FileFormat::Json).is_err());
}

#[test]
fn test_sheet_geometry_limits() {
    let geometry = |columns, max_rows, emoji_size| SpriteConfigFile {
        emoji_set: Some(EmojiSet::Twemoji),
        assets_dir: Some(PathBuf::from("out")),
        columns: Some(columns),
        max_rows: Some(max_rows),
        emoji_size: Some(emoji_size),
        ..Default::default()
    };

    // Overflows u32
    assert!(matches!(SpriteConfig::try_from(geometry(70000, 12, 70000)),
                     Err(ConfigError::InvalidValue("columns", _))));
    // 300 * 64 = 19200px
    assert!(matches!(SpriteConfig::try_from(geometry(300, 12, 64)),
                     Err(ConfigError::InvalidValue("columns", _))));
    assert!(matches!(SpriteConfig::try_from(geometry(32, 300, 64)),
                     Err(ConfigError::InvalidValue("max_rows", _))));

    // 255 * 64 = 16320px is the largest that fits
    let config = SpriteConfig::try_from(geometry(255, 255, 64)).unwrap();
    assert_eq!(config.capacity(), 255 * 255);
}
