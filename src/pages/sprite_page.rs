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

use crate::emojis::emoji::Emoji;
use crate::emojis::emoji_group::EmojiGroup;
use crate::pages::family::EmojiFamily;

/// The contents of one sprite sheet
#[derive(Debug, Clone, PartialEq)]
pub struct SpritePage {
    pub group: EmojiGroup,
    /// Counted per group, starting at 0
    pub index: usize,
    pub families: Vec<EmojiFamily>,
}

impl SpritePage {
    pub fn sprite_count(&self) -> usize {
        self.families.iter().map(EmojiFamily::len).sum()
    }

    /// All sprites in the order they're placed on the sheet
    pub fn sprites(&self) -> impl Iterator<Item=&Emoji> {
        self.families.iter().flat_map(EmojiFamily::iter)
    }

    /// # Examples
    /// ```
    /// use emoji_sprites::emojis::emoji_group::EmojiGroup;
    /// use emoji_sprites::pages::sprite_page::SpritePage;
    ///
    /// let page = SpritePage { group: EmojiGroup::SmileysAndEmotion, index: 1, families: vec![] };
    /// assert_eq!(page.file_name("webp"), "smileys_and_emotion_1.webp");
    /// assert_eq!(page.constant_name(), "PAGE_SMILEYS_AND_EMOTION_1");
    /// ```
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}_{}.{}", self.group.file_stem(), self.index, extension)
    }

    /// The name of the Java constant describing this page
    pub fn constant_name(&self) -> String {
        format!("PAGE_{}_{}", self.group.constant_name(), self.index)
    }

    /// Rows needed for a given number of columns
    pub fn rows(&self, columns: u32) -> u32 {
        let columns = columns.max(1) as usize;
        let count = self.sprite_count();
        let rows = count / columns + usize::from(count % columns != 0);
        u32::try_from(rows).unwrap_or(u32::MAX)
    }
}
