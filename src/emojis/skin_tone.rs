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

use std::ops::RangeInclusive;

/// The five Fitzpatrick skin tone modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SkinTone {
    Light,
    MediumLight,
    Medium,
    MediumDark,
    Dark,
}

impl SkinTone {
    const MODIFIERS: RangeInclusive<u32> = 0x1f3fb..=0x1f3ff;

    pub const ALL: [SkinTone; 5] = [
        SkinTone::Light,
        SkinTone::MediumLight,
        SkinTone::Medium,
        SkinTone::MediumDark,
        SkinTone::Dark,
    ];

    /// Checks whether the codepoint is one of U+1F3FB..U+1F3FF
    pub fn is_modifier(codepoint: u32) -> bool {
        Self::MODIFIERS.contains(&codepoint)
    }

    /// # Examples
    /// ```
    /// use emoji_sprites::emojis::skin_tone::SkinTone;
    ///
    /// assert_eq!(SkinTone::from_codepoint(0x1f3fb), Some(SkinTone::Light));
    /// assert_eq!(SkinTone::from_codepoint(0x1f3ff), Some(SkinTone::Dark));
    /// assert_eq!(SkinTone::from_codepoint(0x1f9b0), None);
    /// ```
    pub fn from_codepoint(codepoint: u32) -> Option<SkinTone> {
        if Self::is_modifier(codepoint) {
            Some(Self::ALL[(codepoint - Self::MODIFIERS.start()) as usize])
        } else {
            None
        }
    }

    pub fn codepoint(&self) -> u32 {
        Self::MODIFIERS.start() + *self as u32
    }
}

#[test]
fn test_codepoints() {
    for tone in SkinTone::ALL.iter() {
        assert_eq!(SkinTone::from_codepoint(tone.codepoint()), Some(*tone));
    }
    assert_eq!(SkinTone::MediumDark.codepoint(), 0x1f3fe);
}
