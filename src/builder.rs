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

//! Runs the whole pipeline: parse, group, paginate, pack and generate the layout description.

use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use crate::codegen::LayoutWriter;
use crate::configs::config::{ConfigError, SpriteConfig};
use crate::emojis::emoji::Emoji;
use crate::images::loader::ImageLoader;
use crate::loadable::LoadingError;
use crate::pages::family::EmojiFamilies;
use crate::pages::pagination::paginate;
use crate::pages::sprite_page::SpritePage;
use crate::sprites::error::SheetError;
use crate::sprites::sheet::{compose, encode, write_sheet};
use crate::tables::emoji_test::EmojiTest;

/// What happened during a build
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BuildReport {
    /// The sheets that were written, in page order
    pub sheets: Vec<PathBuf>,
    /// Sprites on all sheets, including empty cells
    pub sprites: usize,
    /// Sequences without a usable image (either left out or left empty)
    pub missing: Vec<Vec<u32>>,
    /// Skin tone variants whose base emoji wasn't found
    pub orphans: Vec<Emoji>,
    pub java_file: Option<PathBuf>,
    pub manifest: Option<PathBuf>,
}

pub struct SpriteBuilder {
    config: SpriteConfig,
    loader: ImageLoader,
    orphans: Vec<Emoji>,
    pruned: Vec<Vec<u32>>,
}

impl SpriteBuilder {
    /// Sets up a builder and creates the directory for the sheets
    pub fn new(config: SpriteConfig) -> Result<SpriteBuilder, BuildError> {
        std::fs::create_dir_all(&config.assets_dir)?;
        if !config.emoji_dir.is_dir() {
            warn!("The emoji directory {:?} does not exist", config.emoji_dir);
        }
        let loader = config.image_loader();
        Ok(SpriteBuilder {
            config,
            loader,
            orphans: vec![],
            pruned: vec![],
        })
    }

    /// Groups the emojis into families, drops the ones without an image (unless configured
    /// otherwise) and distributes them onto pages.
    /// Only the last call counts for the report of [SpriteBuilder::build].
    pub fn prepare(&mut self, test: &EmojiTest) -> Vec<SpritePage> {
        self.orphans.clear();
        self.pruned.clear();
        let mut families = EmojiFamilies::from_emojis(test.emojis());
        if !families.orphans.is_empty() {
            warn!("{} skin tone variant(s) without a base emoji", families.orphans.len());
        }

        if self.config.keep_missing {
            info!("Keeping emojis without an image as empty cells");
        } else {
            let missing = families.prune_missing(&self.loader);
            if !missing.is_empty() {
                warn!("Left out {} emoji(s) without an image", missing.len());
            }
            self.pruned.extend(missing);
        }
        self.orphans.append(&mut families.orphans);

        let pages = paginate(&families, self.config.capacity());
        info!("Distributed {} emojis onto {} sheets", families.sprite_count(), pages.len());
        pages
    }

    /// Renders and saves every sheet and writes the layout descriptions
    pub fn build(&self, pages: &[SpritePage]) -> Result<BuildReport, BuildError> {
        let mut report = BuildReport {
            missing: self.pruned.clone(),
            orphans: self.orphans.clone(),
            ..Default::default()
        };

        for page in pages {
            let file_name = page.file_name(self.config.format.extension());
            let path = self.config.assets_dir.join(&file_name);
            let (sheet, failures) = compose(page, &self.loader, self.config.columns)?;
            info!("Creating {} from {} emojis ({}x{}px)",
                  file_name, page.sprite_count(), sheet.width(), sheet.height());

            let encoded = encode(&sheet, self.config.format, self.config.optimize)?;
            write_sheet(&path, &encoded)?;

            report.sprites += page.sprite_count();
            report.missing.extend(failures.into_iter().map(|(sequence, _)| sequence));
            report.sheets.push(path);
        }

        match &self.config.java_file {
            Some(java_file) => {
                self.config.java_writer().write_to_file(pages, java_file)?;
                info!("Wrote {:?}", java_file);
                report.java_file = Some(java_file.clone());
            }
            None => warn!("No path for the Java file given, skipping it"),
        }

        if let Some(manifest) = &self.config.manifest {
            self.config.manifest_writer().write_to_file(pages, manifest)?;
            info!("Wrote {:?}", manifest);
            report.manifest = Some(manifest.clone());
        }

        Ok(report)
    }

    /// Reads the configured `emoji-test.txt` and does everything else
    pub fn run(&mut self) -> Result<BuildReport, BuildError> {
        let test = EmojiTest::from_file(&self.config.emoji_test)?;
        if let Some((major, minor)) = test.version {
            info!("Using emoji-test.txt version {}.{}", major, minor);
        }
        let pages = self.prepare(&test);
        self.build(&pages)
    }
}

#[derive(Debug)]
pub enum BuildError {
    IoError(std::io::Error),
    SheetError(SheetError),
    ConfigError(ConfigError),
    LoadingError(LoadingError),
}

impl Display for BuildError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::IoError(err) => write!(f, "IO error: {}", err),
            BuildError::SheetError(SheetError::TooLarge(width, height)) =>
                write!(f, "A sheet of {}x{}px is too large", width, height),
            BuildError::SheetError(err) => write!(f, "Could not create a sheet: {:?}", err),
            BuildError::ConfigError(ConfigError::MissingParameter(name)) =>
                write!(f, "Missing parameter: {}", name),
            BuildError::ConfigError(ConfigError::InvalidValue(name, value)) =>
                write!(f, "Invalid value for {}: {}", name, value),
            BuildError::LoadingError(err) => write!(f, "Could not load the configuration: {:?}", err),
        }
    }
}

impl std::error::Error for BuildError {}

impl From<std::io::Error> for BuildError {
    fn from(err: std::io::Error) -> Self {
        BuildError::IoError(err)
    }
}

impl From<SheetError> for BuildError {
    fn from(err: SheetError) -> Self {
        BuildError::SheetError(err)
    }
}

impl From<ConfigError> for BuildError {
    fn from(err: ConfigError) -> Self {
        BuildError::ConfigError(err)
    }
}

impl From<LoadingError> for BuildError {
    fn from(err: LoadingError) -> Self {
        BuildError::LoadingError(err)
    }
}
