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

use crate::pages::family::{EmojiFamilies, EmojiFamily};
use crate::pages::sprite_page::SpritePage;

/// Splits every group into pages of at most `capacity` sprites.
///
/// Families are never split: if a family doesn't fit on the current page anymore, it starts a
/// new one. A family that is larger than a whole page gets a page of its own (which will then
/// have more rows than usual).
pub fn paginate(families: &EmojiFamilies, capacity: usize) -> Vec<SpritePage> {
    let mut pages = vec![];

    for group in &families.groups {
        let mut current: Vec<EmojiFamily> = vec![];
        let mut count = 0;
        let mut index = 0;

        for family in &group.families {
            if family.len() > capacity {
                warn!("{} has {} variants, more than fit on a page ({})",
                      family.base, family.len(), capacity);
            }
            if !current.is_empty() && count + family.len() > capacity {
                pages.push(SpritePage {
                    group: group.group,
                    index,
                    families: std::mem::take(&mut current),
                });
                index += 1;
                count = 0;
            }
            count += family.len();
            current.push(family.clone());
        }

        if !current.is_empty() {
            pages.push(SpritePage {
                group: group.group,
                index,
                families: current,
            });
        }
    }

    debug!("{} sprites on {} pages", families.sprite_count(), pages.len());
    pages
}

#[cfg(test)]
mod tests {
    use crate::emojis::emoji::Emoji;
    use crate::emojis::emoji_group::EmojiGroup;
    use crate::pages::family::{EmojiFamilies, EmojiFamily, GroupFamilies};
    use crate::pages::pagination::paginate;

    fn family(base: u32, variants: usize) -> EmojiFamily {
        let mut family = EmojiFamily::new(Emoji::from(vec![base]));
        family.variants = (0..variants)
            .map(|tone| Emoji::from(vec![base, 0x1f3fb + tone as u32]))
            .collect();
        family
    }

    fn families(group: EmojiGroup, sizes: &[usize]) -> EmojiFamilies {
        EmojiFamilies {
            groups: vec![GroupFamilies {
                group,
                families: sizes.iter().enumerate()
                    .map(|(i, variants)| family(0x1f600 + i as u32, *variants))
                    .collect(),
            }],
            orphans: vec![],
        }
    }

    #[test]
    fn test_exact_fit() {
        // 4 singles fill a page of 4 exactly
        let pages = paginate(&families(EmojiGroup::Objects, &[0, 0, 0, 0]), 4);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].sprite_count(), 4);
    }

    #[test]
    fn test_one_over() {
        let pages = paginate(&families(EmojiGroup::Objects, &[0, 0, 0, 0, 0]), 4);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].sprite_count(), 4);
        assert_eq!(pages[1].sprite_count(), 1);
        assert_eq!(pages[1].index, 1);
        assert_eq!(pages[1].file_name("webp"), "objects_1.webp");
    }

    #[test]
    fn test_family_not_split() {
        // 3 singles, then a family of 3: it moves to the next page
        let pages = paginate(&families(EmojiGroup::PeopleAndBody, &[0, 0, 0, 2, 0]), 4);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].sprite_count(), 3);
        assert_eq!(pages[1].sprite_count(), 4);
        assert_eq!(pages[1].families[0].len(), 3);
    }

    #[test]
    fn test_oversized_family() {
        let pages = paginate(&families(EmojiGroup::PeopleAndBody, &[0, 5, 0]), 4);
        assert_eq!(pages.iter().map(|page| page.sprite_count()).collect::<Vec<_>>(), vec![1, 6, 1]);
    }

    #[test]
    fn test_empty() {
        assert!(paginate(&families(EmojiGroup::Flags, &[]), 4).is_empty());
    }
}
