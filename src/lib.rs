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

//! Packs emoji images into sprite sheets and describes their layout
//! (as Signal-Android's `EmojiPages.java` or as JSON).
//!
//! The pipeline is: parse `emoji-test.txt` ([tables]), group the emojis into families and pages
//! ([pages]), draw the sheets ([sprites]) and generate the code ([codegen]).
//! [builder::SpriteBuilder] ties it all together.

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

/// The module containing [builder::SpriteBuilder] which runs the whole process
pub mod builder;
/// Writers for the layout of the generated sheets
pub mod codegen;
/// Settings from config files and the command line
pub mod configs;
/// Handling for single emojis
pub mod emojis;
/// Loading the images of single emojis
pub mod images;
pub mod loadable;
/// How the different emoji sets name their files
pub mod naming;
/// Grouping and pagination
pub mod pages;
/// Drawing and encoding the sheets
pub mod sprites;
/// Tables that contain metadata about emojis, like their group and name
pub mod tables;

#[cfg(test)]
mod tests;
