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

use std::str::FromStr;

/// The status of an emoji according to `emoji-test.txt`
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum EmojiStatus {
    /// Skin tones and hair styles that are only used inside of sequences
    Component,
    /// The form that keyboards and pickers are supposed to offer
    FullyQualified,
    /// Missing some of the FE0F selectors, but still displayed as an emoji
    MinimallyQualified,
    /// Not actually displayed as an emoji
    Unqualified,
}

impl FromStr for EmojiStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "component" => Ok(Self::Component),
            "unqualified" => Ok(Self::Unqualified),
            "fully-qualified" => Ok(Self::FullyQualified),
            "minimally-qualified" => Ok(Self::MinimallyQualified),
            other => Err(other.to_string())
        }
    }
}

#[test]
fn test_status_from_str() {
    assert_eq!(EmojiStatus::from_str(" Fully-Qualified "), Ok(EmojiStatus::FullyQualified));
    assert_eq!(EmojiStatus::from_str("component"), Ok(EmojiStatus::Component));
    assert!(EmojiStatus::from_str("mostly-qualified").is_err());
    assert_eq!(EmojiStatus::from_str("MINIMALLY-QUALIFIED"), Ok(EmojiStatus::MinimallyQualified));
}
