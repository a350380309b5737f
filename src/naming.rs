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

//! The file naming schemes of the different emoji sets.
//!
//! Each set names its (pre-rendered) images after the codepoint sequence, but they all disagree
//! on case, padding and delimiters. Some sets also omit the U+FE0F selectors, so a name with and
//! one without them is tried.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use itertools::Itertools;
use serde::Deserialize;

use crate::emojis::emoji::{strip_fe0f, FE0F};

/// A supported emoji set, identified by its file naming scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmojiSet {
    /// `1f600.svg.png`, `1f3f3-fe0f-200d-1f308.svg.png`
    Twemoji,
    /// `1F600.svg.png`, `00A9.svg.png`
    Openmoji,
    /// `emoji_u1f600.png`, `emoji_u00a9.png`
    Noto,
}

/// Extensions of pre-rendered images, in the order they're tried
const IMAGE_EXTENSIONS: [&str; 2] = [".svg.png", ".png"];
#[cfg(feature = "svg")]
pub const SVG_EXTENSION: &str = ".svg";

impl EmojiSet {
    pub const NAMES: [&'static str; 3] = ["twemoji", "openmoji", "noto"];

    /// The file name without any extension for a codepoint sequence
    /// # Examples
    /// ```
    /// use emoji_sprites::naming::EmojiSet;
    ///
    /// let copyright = [0xa9];
    /// assert_eq!(EmojiSet::Twemoji.file_stem(&copyright), "a9");
    /// assert_eq!(EmojiSet::Openmoji.file_stem(&copyright), "00A9");
    /// assert_eq!(EmojiSet::Noto.file_stem(&copyright), "emoji_u00a9");
    ///
    /// let rainbow = [0x1f3f3, 0xfe0f, 0x200d, 0x1f308];
    /// assert_eq!(EmojiSet::Twemoji.file_stem(&rainbow), "1f3f3-fe0f-200d-1f308");
    /// assert_eq!(EmojiSet::Noto.file_stem(&rainbow), "emoji_u1f3f3_fe0f_200d_1f308");
    /// ```
    pub fn file_stem(&self, sequence: &[u32]) -> String {
        match self {
            EmojiSet::Twemoji => sequence.iter()
                .map(|codepoint| format!("{:x}", codepoint))
                .join("-"),
            EmojiSet::Openmoji => sequence.iter()
                .map(|codepoint| format!("{:04X}", codepoint))
                .join("-"),
            EmojiSet::Noto => {
                let codepoints = sequence.iter()
                    .map(|codepoint| format!("{:04x}", codepoint))
                    .join("_");
                format!("emoji_u{}", codepoints)
            }
        }
    }

    /// The stems to try: the exact sequence first, then the one without U+FE0F
    /// (if that's any different).
    pub fn file_stems(&self, sequence: &[u32]) -> Vec<String> {
        let mut stems = vec![self.file_stem(sequence)];
        if sequence.contains(&FE0F) {
            let stripped = strip_fe0f(sequence);
            if !stripped.is_empty() {
                stems.push(self.file_stem(&stripped));
            }
        }
        stems
    }

    /// All names of pre-rendered images that might contain the sequence, in the order they
    /// should be tried.
    /// Noto tries both extensions for one stem before the next stem, the others try every stem
    /// as `.svg.png` first.
    /// # Examples
    /// ```
    /// use emoji_sprites::naming::EmojiSet;
    ///
    /// let smiling = [0x263a, 0xfe0f];
    /// assert_eq!(EmojiSet::Openmoji.candidate_filenames(&smiling), vec![
    ///     "263A-FE0F.svg.png",
    ///     "263A.svg.png",
    ///     "263A-FE0F.png",
    ///     "263A.png",
    /// ]);
    /// ```
    pub fn candidate_filenames(&self, sequence: &[u32]) -> Vec<String> {
        let stems = self.file_stems(sequence);
        match self {
            EmojiSet::Noto => stems.iter()
                .cartesian_product(IMAGE_EXTENSIONS.iter())
                .map(|(stem, extension)| format!("{}{}", stem, extension))
                .collect(),
            EmojiSet::Twemoji | EmojiSet::Openmoji => IMAGE_EXTENSIONS.iter()
                .cartesian_product(stems.iter())
                .map(|(extension, stem)| format!("{}{}", stem, extension))
                .collect(),
        }
    }

    /// Names of SVG sources that can be rendered if there's no pre-rendered image
    #[cfg(feature = "svg")]
    pub fn candidate_svg_filenames(&self, sequence: &[u32]) -> Vec<String> {
        self.file_stems(sequence).iter()
            .map(|stem| format!("{}{}", stem, SVG_EXTENSION))
            .collect()
    }
}

impl FromStr for EmojiSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "twemoji" => Ok(EmojiSet::Twemoji),
            "openmoji" => Ok(EmojiSet::Openmoji),
            "noto" => Ok(EmojiSet::Noto),
            other => Err(other.to_owned())
        }
    }
}

impl Display for EmojiSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EmojiSet::Twemoji => "twemoji",
            EmojiSet::Openmoji => "openmoji",
            EmojiSet::Noto => "noto",
        };
        f.write_str(name)
    }
}

#[test]
fn test_noto_order() {
    let heart = [0x2764, 0xfe0f];
    assert_eq!(EmojiSet::Noto.candidate_filenames(&heart), vec![
        "emoji_u2764_fe0f.svg.png",
        "emoji_u2764_fe0f.png",
        "emoji_u2764.svg.png",
        "emoji_u2764.png",
    ]);
    // Nothing to strip
    assert_eq!(EmojiSet::Twemoji.file_stems(&[0x1f600]), vec!["1f600"]);
}

#[test]
fn test_twemoji_order() {
    let rainbow = [0x1f3f3, 0xfe0f, 0x200d, 0x1f308];
    assert_eq!(EmojiSet::Twemoji.candidate_filenames(&rainbow), vec![
        "1f3f3-fe0f-200d-1f308.svg.png",
        "1f3f3-200d-1f308.svg.png",
        "1f3f3-fe0f-200d-1f308.png",
        "1f3f3-200d-1f308.png",
    ]);
}

#[test]
fn test_names_round_trip() {
    for name in EmojiSet::NAMES.iter() {
        assert_eq!(EmojiSet::from_str(name).unwrap().to_string(), *name);
    }
    assert!(EmojiSet::from_str("blobmoji").is_err());
}
