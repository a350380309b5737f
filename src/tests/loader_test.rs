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

use image::{Rgba, RgbaImage};

use crate::images::error::ImageError;
use crate::images::loader::ImageLoader;
use crate::naming::EmojiSet;
use crate::tests::{init_logger, write_emoji_image};

#[test]
fn test_fe0f_fallback() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    // Twemoji leaves out the FE0F in most of its file names
    RgbaImage::from_pixel(16, 16, Rgba([255, 0, 0, 255]))
        .save(dir.path().join("2764.svg.png"))
        .unwrap();

    let loader = ImageLoader::new(dir.path(), EmojiSet::Twemoji, 16);
    assert_eq!(loader.locate(&[0x2764, 0xfe0f]), Some(dir.path().join("2764.svg.png")));
    let heart = loader.load(&[0x2764, 0xfe0f]).unwrap();
    assert_eq!(heart.get_pixel(8, 8), &Rgba([255, 0, 0, 255]));
}

#[test]
fn test_noto_png() {
    let dir = tempfile::tempdir().unwrap();
    RgbaImage::from_pixel(4, 4, Rgba([0, 0, 255, 255]))
        .save(dir.path().join("emoji_u1f600.png"))
        .unwrap();

    let loader = ImageLoader::new(dir.path(), EmojiSet::Noto, 4);
    assert!(loader.locate(&[0x1f600]).is_some());
    assert!(loader.locate(&[0x1f601]).is_none());
}

#[test]
fn test_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let loader = ImageLoader::new(dir.path(), EmojiSet::Openmoji, 64);
    match loader.load(&[0xa9]) {
        Err(ImageError::NotFound(sequence, tried)) => {
            assert_eq!(sequence, vec![0xa9]);
            assert_eq!(tried, vec!["00A9.svg.png", "00A9.png"]);
        }
        other => panic!("Expected NotFound, got {:?}", other.map(|image| image.dimensions())),
    }
}

#[test]
fn test_broken_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("1f600.svg.png"), b"not a png").unwrap();
    let loader = ImageLoader::new(dir.path(), EmojiSet::Twemoji, 64);
    assert!(matches!(loader.load(&[0x1f600]), Err(ImageError::Decode(_, _))));
}

#[test]
fn test_scaled_into_cell() {
    let dir = tempfile::tempdir().unwrap();
    write_emoji_image(dir.path(), EmojiSet::Twemoji, &[0x1f3c1], [0, 255, 0, 255], (72, 36));

    let loader = ImageLoader::new(dir.path(), EmojiSet::Twemoji, 64);
    let flag = loader.load(&[0x1f3c1]).unwrap();
    assert_eq!(flag.dimensions(), (64, 64));
    // 72x36 becomes 64x32 with 16px above and below
    assert_eq!(flag.get_pixel(32, 0)[3], 0);
    assert_eq!(flag.get_pixel(32, 32)[3], 255);
    assert_eq!(flag.get_pixel(32, 63)[3], 0);
}

#[cfg(feature = "svg")]
#[test]
fn test_render_svg() {
    let dir = tempfile::tempdir().unwrap();
    let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="36" height="36" viewBox="0 0 36 36">
        <rect x="0" y="0" width="36" height="36" fill="#ff0000"/>
    </svg>"##;
    std::fs::write(dir.path().join("1f7e5.svg"), svg).unwrap();

    let loader = ImageLoader::new(dir.path(), EmojiSet::Twemoji, 64);
    let square = loader.load(&[0x1f7e5]).unwrap();
    assert_eq!(square.dimensions(), (64, 64));
    assert_eq!(square.get_pixel(32, 32), &Rgba([255, 0, 0, 255]));
}
