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

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::emojis::emoji::Emoji;
use crate::naming::EmojiSet;
use crate::tables::emoji_test::EmojiTest;

mod builder_test;
mod config_test;
mod loader_test;
mod tables_test;

pub const EMOJI_TEST_FILE: &str = "test_files/emoji-test.txt";

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn emoji_test() -> EmojiTest {
    EmojiTest::from_file(EMOJI_TEST_FILE).unwrap()
}

/// Saves a single-colored image under the set's first candidate name
pub fn write_emoji_image(dir: &Path, set: EmojiSet, sequence: &[u32], color: [u8; 4], size: (u32, u32)) {
    let name = &set.candidate_filenames(sequence)[0];
    RgbaImage::from_pixel(size.0, size.1, Rgba(color))
        .save(dir.join(name))
        .unwrap();
}

/// Saves an image for every page candidate, each with its own color
pub fn write_all_images(dir: &Path, set: EmojiSet, test: &EmojiTest, size: u32) {
    for (index, emoji) in test.page_candidates().enumerate() {
        write_emoji_image(dir, set, &emoji.sequence, color_for(index), (size, size));
    }
}

pub fn color_for(index: usize) -> [u8; 4] {
    [(index * 10) as u8, 255 - (index * 10) as u8, 128, 255]
}

pub fn emoji(sequence: &[u32]) -> Emoji {
    Emoji::from(sequence)
}
