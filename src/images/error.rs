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

use std::path::PathBuf;

/// Why the image of a single emoji could not be used
#[derive(Debug)]
pub enum ImageError {
    /// None of the candidate files exist. Contains the sequence and the names that were tried.
    NotFound(Vec<u32>, Vec<String>),
    Decode(PathBuf, image::ImageError),
    IoError(std::io::Error),
    /// usvg/resvg failed on an SVG file
    #[cfg(feature = "svg")]
    Render(PathBuf, String),
}

impl From<std::io::Error> for ImageError {
    fn from(error: std::io::Error) -> Self {
        ImageError::IoError(error)
    }
}
