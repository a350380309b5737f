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

//! Describing the finished sheets for the code that will display them

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::pages::sprite_page::SpritePage;

pub mod java;
pub mod manifest;

/// Anything that can describe where each emoji is located on which sheet.
pub trait LayoutWriter {
    /// Writes the description of all `pages` (in the order they were generated)
    fn write_layout(&self, pages: &[SpritePage], out: &mut dyn Write) -> std::io::Result<()>;

    /// Writes the description into a file, creating its parent directories if needed.
    /// An existing file is overwritten.
    fn write_to_file(&self, pages: &[SpritePage], path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut out = BufWriter::new(File::create(path)?);
        self.write_layout(pages, &mut out)?;
        out.flush()
    }
}
