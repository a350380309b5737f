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
use std::path::PathBuf;

use emoji_sprites::builder::{BuildError, SpriteBuilder};
use emoji_sprites::configs::cli::app;
use emoji_sprites::configs::config::SpriteConfig;
use emoji_sprites::configs::config_file::SpriteConfigFile;
use emoji_sprites::loadable::Loadable;

#[macro_use]
extern crate log;

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("emoji_sprites=info")
    ).init();

    if let Err(err) = run() {
        error!("{}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), BuildError> {
    let matches = app().get_matches();

    let file_config = match matches.value_of_os("config") {
        Some(path) => SpriteConfigFile::from_file(&PathBuf::from(path))?,
        None => SpriteConfigFile::default()
    };
    let config = file_config.merge(SpriteConfigFile::from_matches(&matches)?);
    let config = SpriteConfig::try_from(config)?;

    let mut builder = SpriteBuilder::new(config)?;
    let report = builder.run()?;

    info!("Wrote {} sheets with {} sprites", report.sheets.len(), report.sprites);
    if !report.missing.is_empty() {
        warn!("{} emoji(s) had no image", report.missing.len());
    }
    if !report.orphans.is_empty() {
        warn!("{} skin tone variant(s) had no base emoji", report.orphans.len());
    }
    Ok(())
}
