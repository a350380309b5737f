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

use std::collections::HashMap;

use crate::emojis::emoji::Emoji;
use crate::emojis::emoji_group::EmojiGroup;
use crate::images::loader::ImageLoader;

/// An emoji without a skin tone followed by all of its skin tone variants
#[derive(Debug, Clone, PartialEq)]
pub struct EmojiFamily {
    pub base: Emoji,
    pub variants: Vec<Emoji>,
}

impl EmojiFamily {
    pub fn new(base: Emoji) -> EmojiFamily {
        EmojiFamily {
            base,
            variants: vec![],
        }
    }

    /// The number of sprites it takes up
    pub fn len(&self) -> usize {
        1 + self.variants.len()
    }

    /// Never true, there's always the base
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The base first, then the variants in file order
    pub fn iter(&self) -> impl Iterator<Item=&Emoji> {
        std::iter::once(&self.base).chain(self.variants.iter())
    }
}

/// All families of one group, in file order
#[derive(Debug, Clone, PartialEq)]
pub struct GroupFamilies {
    pub group: EmojiGroup,
    pub families: Vec<EmojiFamily>,
}

impl GroupFamilies {
    pub fn sprite_count(&self) -> usize {
        self.families.iter().map(EmojiFamily::len).sum()
    }
}

/// The result of grouping: families per group (in [`EmojiGroup`] order) and the variants for
/// which no base emoji was found
#[derive(Debug, Default, Clone)]
pub struct EmojiFamilies {
    pub groups: Vec<GroupFamilies>,
    pub orphans: Vec<Emoji>,
}

impl EmojiFamilies {
    /// Groups the page candidates (fully-qualified, not a component) into families.
    /// Entries which aren't candidates are ignored, so it's fine to pass everything.
    ///
    /// A skin tone variant belongs to the family whose base is one of its
    /// [`Emoji::parent_candidates`] within the same group.
    /// # Examples
    /// ```
    /// use emoji_sprites::emojis::emoji::Emoji;
    /// use emoji_sprites::emojis::emoji_group::EmojiGroup;
    /// use emoji_sprites::emojis::emoji_status::EmojiStatus;
    /// use emoji_sprites::pages::family::EmojiFamilies;
    ///
    /// let entry = |sequence: Vec<u32>| {
    ///     let mut emoji = Emoji::from(sequence);
    ///     emoji.status = Some(EmojiStatus::FullyQualified);
    ///     emoji.group = Some(EmojiGroup::PeopleAndBody);
    ///     emoji
    /// };
    /// let emojis = vec![entry(vec![0x1f44b]), entry(vec![0x1f44b, 0x1f3fb])];
    /// let families = EmojiFamilies::from_emojis(&emojis);
    ///
    /// assert_eq!(families.groups.len(), 1);
    /// assert_eq!(families.groups[0].families[0].len(), 2);
    /// assert!(families.orphans.is_empty());
    /// ```
    pub fn from_emojis<'a, I>(emojis: I) -> EmojiFamilies
        where I: IntoIterator<Item=&'a Emoji> {
        let mut families: HashMap<EmojiGroup, Vec<EmojiFamily>> = HashMap::new();
        // Where to find a base sequence within its group's list
        let mut index: HashMap<(EmojiGroup, Vec<u32>), usize> = HashMap::new();
        let mut orphans = vec![];

        for emoji in emojis.into_iter().filter(|emoji| emoji.is_page_candidate()) {
            let group = match emoji.group {
                Some(group) => group,
                None => continue
            };
            let group_families = families.entry(group).or_default();

            if emoji.has_skin_tone() {
                let parent = emoji.parent_candidates().iter()
                    .find_map(|candidate| index.get(&(group, candidate.clone())).copied());
                match parent {
                    Some(parent) => group_families[parent].variants.push(emoji.clone()),
                    None => {
                        warn!("No base emoji found for {} ({}), skipping it",
                              emoji, emoji.codepoints_string());
                        orphans.push(emoji.clone());
                    }
                }
            } else {
                index.insert((group, emoji.sequence.clone()), group_families.len());
                group_families.push(EmojiFamily::new(emoji.clone()));
            }
        }

        let groups = EmojiGroup::ALL.iter()
            .filter(|group| !group.is_component())
            .filter_map(|group| families.remove(group)
                .map(|families| GroupFamilies { group: *group, families }))
            .collect();

        EmojiFamilies {
            groups,
            orphans,
        }
    }

    /// Drops everything without an image: whole families if the base is missing, single
    /// variants otherwise.
    /// Returns the sequences that were dropped.
    pub fn prune_missing(&mut self, loader: &ImageLoader) -> Vec<Vec<u32>> {
        let mut missing = vec![];
        for group in self.groups.iter_mut() {
            group.families.retain(|family| {
                if loader.locate(&family.base.sequence).is_some() {
                    true
                } else {
                    warn!("No image for {} ({}), skipping it and its {} variant(s)",
                          family.base, family.base.codepoints_string(), family.variants.len());
                    missing.extend(family.iter().map(|emoji| emoji.sequence.clone()));
                    false
                }
            });
            for family in group.families.iter_mut() {
                family.variants.retain(|variant| {
                    if loader.locate(&variant.sequence).is_some() {
                        true
                    } else {
                        warn!("No image for {} ({}), skipping it", variant, variant.codepoints_string());
                        missing.push(variant.sequence.clone());
                        false
                    }
                });
            }
        }
        self.groups.retain(|group| !group.families.is_empty());
        missing
    }

    pub fn sprite_count(&self) -> usize {
        self.groups.iter().map(GroupFamilies::sprite_count).sum()
    }
}
