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

//! Generates Signal's `EmojiPages.java`.
//!
//! The layout is:
//! ```java
//! private static final EmojiPageModel PAGE_PEOPLE_AND_BODY_0 = new StaticEmojiPageModel(
//!     R.attr.emoji_category_people_and_body,
//!     new Emoji[] {
//!         new Emoji("\ud83d\udc4b", "\ud83d\udc4b\ud83c\udffb", ...),
//!         ...
//!     },
//!     Uri.parse("file:///android_asset/emoji/people_and_body_0.webp"));
//! ```
//! followed by the `DISPLAY_PAGES` (one `CompositeEmojiPageModel` per group) and `DATA_PAGES`
//! (every page on its own) lists.

use std::io::Write;

use itertools::Itertools;

use crate::codegen::LayoutWriter;
use crate::emojis::emoji::Emoji;
use crate::emojis::emoji_group::EmojiGroup;
use crate::pages::family::EmojiFamily;
use crate::pages::sprite_page::SpritePage;
use crate::sprites::sheet::SheetFormat;

pub const DEFAULT_PACKAGE: &str = "org.thoughtcrime.securesms.components.emoji";
pub const DEFAULT_CLASS_NAME: &str = "EmojiPages";
pub const DEFAULT_ASSET_URI_PREFIX: &str = "file:///android_asset/emoji/";

const INDENT: &str = "  ";

#[derive(Debug, Clone)]
pub struct JavaPagesWriter {
    pub package: String,
    pub class_name: String,
    /// Prepended to the sheet's file name
    pub asset_uri_prefix: String,
    pub format: SheetFormat,
}

impl Default for JavaPagesWriter {
    fn default() -> Self {
        JavaPagesWriter {
            package: String::from(DEFAULT_PACKAGE),
            class_name: String::from(DEFAULT_CLASS_NAME),
            asset_uri_prefix: String::from(DEFAULT_ASSET_URI_PREFIX),
            format: SheetFormat::default(),
        }
    }
}

/// Escapes everything as UTF-16 code units so the file stays ASCII.
/// # Examples
/// ```
/// use emoji_sprites::codegen::java::java_string;
///
/// assert_eq!(java_string("😀"), "\"\\ud83d\\ude00\"");
/// assert_eq!(java_string("©"), "\"\\u00a9\"");
/// ```
pub fn java_string(text: &str) -> String {
    let escaped: String = text.encode_utf16()
        .map(|unit| format!("\\u{:04x}", unit))
        .collect();
    format!("\"{}\"", escaped)
}

/// The theme attribute holding a group's category icon
fn category_attribute(group: EmojiGroup) -> String {
    format!("R.attr.emoji_category_{}", group.file_stem())
}

fn emoji_constructor(family: &EmojiFamily) -> String {
    let variations = family.iter()
        .map(Emoji::display_emoji)
        .map(|emoji| java_string(&emoji))
        .join(", ");
    format!("new Emoji({})", variations)
}

impl JavaPagesWriter {
    fn write_page(&self, page: &SpritePage, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "{}private static final EmojiPageModel {} = new StaticEmojiPageModel({}, new Emoji[] {{",
                 INDENT, page.constant_name(), category_attribute(page.group))?;
        for family in &page.families {
            writeln!(out, "{0}{0}{0}{1},", INDENT, emoji_constructor(family))?;
        }
        writeln!(out, "{0}{0}}}, Uri.parse(\"{1}{2}\"));",
                 INDENT, self.asset_uri_prefix, page.file_name(self.format.extension()))?;
        writeln!(out)
    }

    fn write_display_pages(&self, pages: &[SpritePage], out: &mut dyn Write) -> std::io::Result<()> {
        let groups = pages.iter()
            .group_by(|page| page.group);
        let composites = groups.into_iter()
            .map(|(group, pages)| format!(
                "{0}{0}new CompositeEmojiPageModel({1}, Arrays.asList({2}))",
                INDENT,
                category_attribute(group),
                pages.map(SpritePage::constant_name).join(", ")
            ))
            .join(",\n");

        writeln!(out, "{}static final List<EmojiPageModel> DISPLAY_PAGES = Arrays.asList(", INDENT)?;
        writeln!(out, "{}", composites)?;
        writeln!(out, "{});", INDENT)?;
        writeln!(out)
    }

    fn write_data_pages(&self, pages: &[SpritePage], out: &mut dyn Write) -> std::io::Result<()> {
        let constants = pages.iter()
            .map(|page| format!("{0}{0}{1}", INDENT, page.constant_name()))
            .join(",\n");

        writeln!(out, "{}static final List<EmojiPageModel> DATA_PAGES = Arrays.asList(", INDENT)?;
        writeln!(out, "{}", constants)?;
        writeln!(out, "{});", INDENT)
    }
}

impl LayoutWriter for JavaPagesWriter {
    fn write_layout(&self, pages: &[SpritePage], out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "// Generated by {}, do not edit.", env!("CARGO_PKG_NAME"))?;
        writeln!(out, "package {};", self.package)?;
        writeln!(out)?;
        writeln!(out, "import android.net.Uri;")?;
        writeln!(out)?;
        writeln!(out, "import org.thoughtcrime.securesms.R;")?;
        writeln!(out)?;
        writeln!(out, "import java.util.Arrays;")?;
        writeln!(out, "import java.util.List;")?;
        writeln!(out)?;
        writeln!(out, "class {} {{", self.class_name)?;
        writeln!(out)?;

        // Static fields are initialized in order, so the pages have to come before the lists
        for page in pages {
            self.write_page(page, out)?;
        }
        if !pages.is_empty() {
            self.write_display_pages(pages, out)?;
            self.write_data_pages(pages, out)?;
        } else {
            warn!("No pages, the generated lists will be empty");
            writeln!(out, "{}static final List<EmojiPageModel> DISPLAY_PAGES = Arrays.asList();", INDENT)?;
            writeln!(out, "{}static final List<EmojiPageModel> DATA_PAGES = Arrays.asList();", INDENT)?;
        }

        writeln!(out, "}}")
    }
}

#[test]
fn test_category_attribute() {
    assert_eq!(category_attribute(EmojiGroup::TravelAndPlaces), "R.attr.emoji_category_travel_and_places");
}
