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

//! A JSON description of the sheets for anything that isn't the Android client

use std::io::Write;

use serde::Serialize;

use crate::codegen::LayoutWriter;
use crate::emojis::emoji_group::EmojiGroup;
use crate::pages::sprite_page::SpritePage;
use crate::sprites::sheet::{cell_position, SheetFormat};

#[derive(Debug, Clone)]
pub struct ManifestWriter {
    pub columns: u32,
    pub size: u32,
    pub format: SheetFormat,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct Manifest {
    pub sprite_size: u32,
    pub columns: u32,
    pub sheets: Vec<SheetEntry>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct SheetEntry {
    pub file: String,
    pub group: EmojiGroup,
    pub index: usize,
    pub width: u64,
    pub height: u64,
    pub sprites: Vec<SpriteEntry>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct SpriteEntry {
    /// The codepoints as in `emoji-test.txt`: `1F44B 1F3FB`
    pub codepoints: String,
    pub emoji: String,
    pub name: Option<String>,
    pub column: u32,
    pub row: u32,
    /// The index of the family's base on the same sheet (for skin tone variants)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<usize>,
}

impl ManifestWriter {
    pub fn manifest(&self, pages: &[SpritePage]) -> Manifest {
        let sheets = pages.iter()
            .map(|page| self.sheet_entry(page))
            .collect();
        Manifest {
            sprite_size: self.size,
            columns: self.columns,
            sheets,
        }
    }

    fn sheet_entry(&self, page: &SpritePage) -> SheetEntry {
        let mut sprites = Vec::with_capacity(page.sprite_count());
        for family in &page.families {
            let base_index = sprites.len();
            for (position, emoji) in family.iter().enumerate() {
                let (column, row) = cell_position(sprites.len(), self.columns);
                sprites.push(SpriteEntry {
                    codepoints: emoji.codepoints_string(),
                    emoji: emoji.display_emoji(),
                    name: emoji.name.clone(),
                    column,
                    row,
                    base: if position == 0 { None } else { Some(base_index) },
                });
            }
        }
        SheetEntry {
            file: page.file_name(self.format.extension()),
            group: page.group,
            index: page.index,
            width: self.columns as u64 * self.size as u64,
            height: page.rows(self.columns) as u64 * self.size as u64,
            sprites,
        }
    }
}

impl LayoutWriter for ManifestWriter {
    fn write_layout(&self, pages: &[SpritePage], out: &mut dyn Write) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, &self.manifest(pages))?;
        writeln!(out)
    }
}
