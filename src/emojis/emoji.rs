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

//! The main data struct for single emojis (which might also be sequences).

use std::cmp::Ordering;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use itertools::Itertools;
use regex::{CaptureMatches, Regex};

use crate::emojis::emoji_group::EmojiGroup;
use crate::emojis::emoji_status::EmojiStatus;
use crate::emojis::skin_tone::SkinTone;

/// The variation selector that requests the emoji presentation of a character
pub const FE0F: u32 = 0xfe0f;

/// One entry of an `emoji-test.txt` file.
///
/// Two emojis are considered equal if their codepoint sequences are equal; all the other
/// attributes are just metadata.
#[derive(Debug, Eq, Clone)]
pub struct Emoji {
    /// The sequence of Unicode® character codepoints that represents this emoji.
    pub sequence: Vec<u32>,
    /// The name/description (if assigned) for the Emoji
    pub name: Option<String>,
    /// Whether it's fully-qualified, a component, etc.
    pub status: Option<EmojiStatus>,
    /// The group it was listed under
    pub group: Option<EmojiGroup>,
    /// The subgroup it was listed under (e.g. `face-smiling`)
    pub subgroup: Option<String>,
    /// The Emoji version it was introduced in (only given in newer test files)
    pub version: Option<(u32, u32)>,
}

impl Emoji {
    /// Parses a character sequence (e.g. from a filename) into an emoji object.
    /// After the last codepoint there needs to be either a dash (`-`),
    /// underscore (`_`), space (` `), dot (`.`) or the end of the string.
    /// # Examples
    /// ```
    /// use emoji_sprites::emojis::emoji::Emoji;
    ///
    /// let party_face = Emoji::from_sequence("emoji_u1f973.png").unwrap();
    /// assert_eq!(party_face.sequence, vec![0x1f973]);
    ///
    /// let rainbow = Emoji::from_sequence("1F3F3 FE0F 200D 1F308").unwrap();
    /// assert_eq!(rainbow.sequence, vec![0x1f3f3, 0xfe0f, 0x200d, 0x1f308]);
    /// ```
    pub fn from_sequence(sequence: &str) -> Result<Emoji, EmojiError> {
        lazy_static! {
            static ref HEX_SEQUENCE: Regex = Regex::new(r"([a-fA-F0-9]{1,8})([-_. ]|$)").unwrap();
        }
        let matches: CaptureMatches = HEX_SEQUENCE.captures_iter(sequence);
        let code_sequence: Vec<u32> = matches
            .filter_map(|capture| u32::from_str_radix(&capture[1], 16).ok())
            .filter(|codepoint| *codepoint > 0)
            .collect();
        Emoji::from_u32_sequence(code_sequence)
    }

    /// Generates an Emoji from a given codepoint sequence.
    /// If the sequence is empty, it will return an error.
    /// # Examples
    /// ```
    /// use emoji_sprites::emojis::emoji::Emoji;
    ///
    /// assert!(Emoji::from_u32_sequence(vec![]).is_err());
    /// assert_eq!(Emoji::from_u32_sequence(vec![0x1f914]).unwrap().sequence, vec![0x1f914]);
    /// ```
    pub fn from_u32_sequence(code_sequence: Vec<u32>) -> Result<Emoji, EmojiError> {
        if code_sequence.is_empty() {
            Err(EmojiError::NoValidCodepointsFound(String::from("Empty code sequence")))
        } else if let Some(invalid) = code_sequence.iter().find(|codepoint| char::from_u32(**codepoint).is_none()) {
            Err(EmojiError::InvalidCodepoint(*invalid))
        } else {
            Ok(Emoji::from(code_sequence))
        }
    }

    /// All skin tone modifiers used in this sequence (in order of appearance).
    /// # Examples
    /// ```
    /// use emoji_sprites::emojis::emoji::Emoji;
    /// use emoji_sprites::emojis::skin_tone::SkinTone;
    ///
    /// let waving = Emoji::from(vec![0x1f44b, 0x1f3fd]);
    /// assert_eq!(waving.skin_tones(), vec![SkinTone::Medium]);
    /// ```
    pub fn skin_tones(&self) -> Vec<SkinTone> {
        self.sequence.iter()
            .filter_map(|codepoint| SkinTone::from_codepoint(*codepoint))
            .collect()
    }

    /// Whether this is a skin tone variant of another emoji
    pub fn has_skin_tone(&self) -> bool {
        self.sequence.iter().any(|codepoint| SkinTone::is_modifier(*codepoint))
    }

    /// The sequences a skin tone variant might have been derived from.
    ///
    /// The first one drops the modifiers (`1F44B 1F3FB` -> `1F44B`), the second one puts an
    /// emoji presentation selector in their place (`1F575 1F3FB` -> `1F575 FE0F`), since the
    /// fully-qualified base of some emojis requires one.
    /// # Examples
    /// ```
    /// use emoji_sprites::emojis::emoji::Emoji;
    ///
    /// let detective = Emoji::from(vec![0x1f575, 0x1f3fb]);
    /// assert_eq!(detective.parent_candidates(), [vec![0x1f575], vec![0x1f575, 0xfe0f]]);
    /// ```
    pub fn parent_candidates(&self) -> [Vec<u32>; 2] {
        let stripped = self.sequence.iter()
            .filter(|codepoint| !SkinTone::is_modifier(**codepoint))
            .copied()
            .collect();
        let replaced = self.sequence.iter()
            .map(|codepoint| if SkinTone::is_modifier(*codepoint) {
                FE0F
            } else {
                *codepoint
            })
            .collect();
        [stripped, replaced]
    }

    /// Returns the emoji itself
    /// ## Example
    /// ```
    /// use emoji_sprites::emojis::emoji::Emoji;
    ///
    /// // Face with heart eyes
    /// let emoji = Emoji::from_u32_sequence(vec![0x1f60d]).unwrap();
    ///
    /// assert_eq!(String::from("😍"), emoji.display_emoji());
    /// ```
    pub fn display_emoji(&self) -> String {
        self.sequence.iter().filter_map(|codepoint| char::from_u32(*codepoint))
            .collect()
    }

    /// The codepoints in the notation of the Unicode® tables (`1F3F3 FE0F 200D 1F308`)
    pub fn codepoints_string(&self) -> String {
        self.sequence.iter()
            .map(|codepoint| format!("{:04X}", codepoint))
            .join(" ")
    }

    /// Whether this emoji is supposed to show up in an emoji picker
    pub fn is_page_candidate(&self) -> bool {
        self.status == Some(EmojiStatus::FullyQualified)
            && self.group.map(|group| !group.is_component()).unwrap_or(false)
    }
}

pub fn strip_fe0f(codepoint_with_fe0f: &[u32]) -> Vec<u32> {
    codepoint_with_fe0f.iter()
        .filter(|codepoint| **codepoint != FE0F)
        .copied()
        .collect()
}

impl From<&[u32]> for Emoji {
    fn from(sequence: &[u32]) -> Self {
        Emoji::from(Vec::from(sequence))
    }
}

impl From<Vec<u32>> for Emoji {
    fn from(sequence: Vec<u32>) -> Self {
        Emoji {
            sequence,
            name: None,
            status: None,
            group: None,
            subgroup: None,
            version: None,
        }
    }
}

impl AsRef<[u32]> for Emoji {
    fn as_ref(&self) -> &[u32] {
        &self.sequence
    }
}

impl Hash for Emoji {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sequence.hash(state)
    }
}

impl PartialEq<Emoji> for Emoji {
    /// Compares two Emojis by their code sequence
    fn eq(&self, other: &Emoji) -> bool {
        self.sequence == other.sequence
    }
}

impl PartialEq<[u32]> for Emoji {
    fn eq(&self, other: &[u32]) -> bool {
        self.sequence == other
    }
}

impl PartialOrd for Emoji {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Emoji {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sequence.cmp(&other.sequence)
    }
}

impl Display for Emoji {
    /// Shows the name of the emoji if it has one, the code sequence in square brackets otherwise
    /// # Examples
    /// ```
    /// use emoji_sprites::emojis::emoji::Emoji;
    ///
    /// let mut rainbow = Emoji::from(vec![0x1f3f3, 0xfe0f, 0x200d, 0x1f308]);
    /// assert_eq!("[1F3F3-FE0F-200D-1F308]", format!("{}", rainbow));
    ///
    /// rainbow.name = Some(String::from("rainbow flag"));
    /// assert_eq!("rainbow flag", format!("{}", rainbow));
    /// ```
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{}", name)
        } else {
            write!(f, "[{}]", self.sequence.iter()
                .map(|codepoint| format!("{:X}", codepoint))
                .join("-"))
        }
    }
}

#[derive(Debug)]
/// An error that can occur while creating an [Emoji]
pub enum EmojiError {
    /// Either no codepoint has been parsed or the string didn't match the
    /// recognized patterns for codepoint sequences.
    NoValidCodepointsFound(String),
    /// The value is not a Unicode® scalar value
    InvalidCodepoint(u32),
}
