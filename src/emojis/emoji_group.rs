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

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use itertools::Itertools;
use serde::{Serialize, Serializer};

/// The groups from `emoji-test.txt` in the order they appear there
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EmojiGroup {
    SmileysAndEmotion,
    PeopleAndBody,
    Component,
    AnimalsAndNature,
    FoodAndDrink,
    TravelAndPlaces,
    Activities,
    Objects,
    Symbols,
    Flags,
}

impl EmojiGroup {
    pub const ALL: [EmojiGroup; 10] = [
        EmojiGroup::SmileysAndEmotion,
        EmojiGroup::PeopleAndBody,
        EmojiGroup::Component,
        EmojiGroup::AnimalsAndNature,
        EmojiGroup::FoodAndDrink,
        EmojiGroup::TravelAndPlaces,
        EmojiGroup::Activities,
        EmojiGroup::Objects,
        EmojiGroup::Symbols,
        EmojiGroup::Flags,
    ];

    /// Skin tones and hair styles; these never get a page on their own
    pub fn is_component(&self) -> bool {
        *self == EmojiGroup::Component
    }

    /// The name as written in the `# group:` header
    pub fn title(&self) -> &'static str {
        match self {
            EmojiGroup::SmileysAndEmotion => "Smileys & Emotion",
            EmojiGroup::PeopleAndBody => "People & Body",
            EmojiGroup::Component => "Component",
            EmojiGroup::AnimalsAndNature => "Animals & Nature",
            EmojiGroup::FoodAndDrink => "Food & Drink",
            EmojiGroup::TravelAndPlaces => "Travel & Places",
            EmojiGroup::Activities => "Activities",
            EmojiGroup::Objects => "Objects",
            EmojiGroup::Symbols => "Symbols",
            EmojiGroup::Flags => "Flags",
        }
    }

    /// Name for constants in generated code
    /// # Examples
    /// ```
    /// use emoji_sprites::emojis::emoji_group::EmojiGroup;
    ///
    /// assert_eq!(EmojiGroup::SmileysAndEmotion.constant_name(), "SMILEYS_AND_EMOTION");
    /// assert_eq!(EmojiGroup::Flags.constant_name(), "FLAGS");
    /// ```
    pub fn constant_name(&self) -> String {
        Self::normalize(self.title()).to_uppercase()
    }

    /// Name for the sprite sheet files
    /// # Examples
    /// ```
    /// use emoji_sprites::emojis::emoji_group::EmojiGroup;
    ///
    /// assert_eq!(EmojiGroup::TravelAndPlaces.file_stem(), "travel_and_places");
    /// ```
    pub fn file_stem(&self) -> String {
        Self::normalize(self.title())
    }

    /// `Smileys & Emotion`, `smileys_and_emotion` and `SMILEYS-AND-EMOTION` all end up as
    /// `smileys_and_emotion`
    fn normalize(name: &str) -> String {
        name.to_lowercase()
            .replace('&', " and ")
            .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
            .filter(|part| !part.is_empty())
            .join("_")
    }
}

impl FromStr for EmojiGroup {
    type Err = UnknownEmojiGroup;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let normalized = Self::normalize(name);
        EmojiGroup::ALL.iter()
            .find(|group| group.file_stem() == normalized)
            .copied()
            .ok_or_else(|| UnknownEmojiGroup(name.trim().to_owned()))
    }
}

impl Display for EmojiGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

impl Serialize for EmojiGroup {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        serializer.serialize_str(&self.constant_name())
    }
}

/// A group name that is not (yet) known, e.g. from a future version of the test data
#[derive(Debug, PartialEq, Eq)]
pub struct UnknownEmojiGroup(pub String);

#[test]
fn test_group_names() {
    assert_eq!(EmojiGroup::from_str("Smileys & Emotion").unwrap(), EmojiGroup::SmileysAndEmotion);
    assert_eq!(EmojiGroup::from_str("PEOPLE_AND_BODY").unwrap(), EmojiGroup::PeopleAndBody);
    assert_eq!(EmojiGroup::from_str(" food & drink ").unwrap(), EmojiGroup::FoodAndDrink);
    assert_eq!(EmojiGroup::from_str("Smileys & People"),
               Err(UnknownEmojiGroup(String::from("Smileys & People"))));
    for group in EmojiGroup::ALL.iter() {
        assert_eq!(EmojiGroup::from_str(group.title()).unwrap(), *group);
        assert_eq!(EmojiGroup::from_str(&group.constant_name()).unwrap(), *group);
    }
}
