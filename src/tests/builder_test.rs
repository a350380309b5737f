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

use image::Rgba;

use crate::builder::SpriteBuilder;
use crate::configs::config::SpriteConfig;
use crate::configs::config_file::SpriteConfigFile;
use crate::naming::EmojiSet;
use crate::tests::{color_for, emoji_test, init_logger, write_all_images, write_emoji_image, EMOJI_TEST_FILE};

fn config(repo: &std::path::Path, emoji_dir: &std::path::Path, overrides: SpriteConfigFile) -> SpriteConfig {
    let file = SpriteConfigFile {
        emoji_test: Some(EMOJI_TEST_FILE.into()),
        emoji_dir: Some(emoji_dir.to_path_buf()),
        emoji_set: Some(EmojiSet::Twemoji),
        signal_repo_path: Some(repo.to_path_buf()),
        emoji_size: Some(8),
        columns: Some(4),
        ..Default::default()
    };
    SpriteConfig::try_from(file.merge(overrides)).unwrap()
}

#[test]
fn test_full_build() {
    init_logger();
    let repo = tempfile::tempdir().unwrap();
    let images = tempfile::tempdir().unwrap();
    let test = emoji_test();
    write_all_images(images.path(), EmojiSet::Twemoji, &test, 8);

    let manifest = repo.path().join("emoji.json");
    let mut builder = SpriteBuilder::new(config(repo.path(), images.path(), SpriteConfigFile {
        manifest: Some(manifest.clone()),
        ..Default::default()
    })).unwrap();
    let report = builder.run().unwrap();

    assert_eq!(report.sheets.len(), 3);
    assert_eq!(report.sprites, 16);
    assert!(report.missing.is_empty());
    assert_eq!(report.orphans.len(), 1);

    let assets = repo.path().join("app/src/main/assets/emoji");
    let people = image::open(assets.join("people_and_body_0.webp")).unwrap().to_rgba8();
    // 10 sprites in 4 columns: 3 rows
    assert_eq!(people.dimensions(), (32, 24));
    // Sprite 5 is the waving hand with the dark skin tone, the 10th page candidate overall
    let candidates: Vec<_> = test.page_candidates().collect();
    let dark = candidates.iter().position(|emoji| emoji.sequence == vec![0x1f44b, 0x1f3ff]).unwrap();
    assert_eq!(people.get_pixel(1 * 8 + 4, 1 * 8 + 4), &Rgba(color_for(dark)));
    // The last row only has 2 sprites
    assert_eq!(people.get_pixel(3 * 8 + 4, 2 * 8 + 4)[3], 0);

    let java = std::fs::read_to_string(report.java_file.unwrap()).unwrap();
    assert!(java.contains("PAGE_SMILEYS_AND_EMOTION_0"));
    assert!(java.contains("Uri.parse(\"file:///android_asset/emoji/flags_0.webp\")"));
    assert!(!java.contains("\\ud83e\\uddd1\\ud83c\\udffb"));

    let manifest: serde_json::Value = serde_json::from_reader(std::fs::File::open(manifest).unwrap()).unwrap();
    assert_eq!(manifest["sheets"].as_array().unwrap().len(), 3);
}

#[test]
fn test_missing_images() {
    init_logger();
    let repo = tempfile::tempdir().unwrap();
    let images = tempfile::tempdir().unwrap();
    // Only the flags
    write_emoji_image(images.path(), EmojiSet::Twemoji, &[0x1f3c1], [255, 255, 255, 255], (8, 8));
    write_emoji_image(images.path(), EmojiSet::Twemoji, &[0x1f1e9, 0x1f1ea], [0, 0, 0, 255], (8, 8));

    let mut builder = SpriteBuilder::new(config(repo.path(), images.path(), SpriteConfigFile::default())).unwrap();
    let pages = builder.prepare(&emoji_test());
    assert_eq!(pages.len(), 1);
    let report = builder.build(&pages).unwrap();
    assert_eq!(report.sprites, 2);
    assert_eq!(report.missing.len(), 14);

    // Now with empty cells instead
    let repo = tempfile::tempdir().unwrap();
    let mut builder = SpriteBuilder::new(config(repo.path(), images.path(), SpriteConfigFile {
        keep_missing: Some(true),
        format: Some(crate::sprites::sheet::SheetFormat::Png),
        ..Default::default()
    })).unwrap();
    let report = builder.run().unwrap();
    assert_eq!(report.sheets.len(), 3);
    assert_eq!(report.sprites, 16);
    assert_eq!(report.missing.len(), 14);

    let smileys = image::open(repo.path().join("app/src/main/assets/emoji/smileys_and_emotion_0.png"))
        .unwrap()
        .to_rgba8();
    assert_eq!(smileys.dimensions(), (32, 8));
    assert!(smileys.pixels().all(|pixel| pixel[3] == 0));
}

#[test]
fn test_prepare_twice() {
    init_logger();
    let repo = tempfile::tempdir().unwrap();
    let images = tempfile::tempdir().unwrap();
    write_emoji_image(images.path(), EmojiSet::Twemoji, &[0x1f3c1], [255, 255, 255, 255], (8, 8));
    write_emoji_image(images.path(), EmojiSet::Twemoji, &[0x1f1e9, 0x1f1ea], [0, 0, 0, 255], (8, 8));

    let mut builder = SpriteBuilder::new(config(repo.path(), images.path(), SpriteConfigFile::default())).unwrap();
    let test = emoji_test();
    builder.prepare(&test);
    let pages = builder.prepare(&test);
    let report = builder.build(&pages).unwrap();
    assert_eq!(report.sprites, 2);
    assert_eq!(report.missing.len(), 14);
    assert_eq!(report.orphans.len(), 1);
}
