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

use regex::{Captures, Regex};

const EMOJI_SEQUENCE_SPACE_REGEX: &str = r"(?P<sequence>[A-F0-9a-f]{1,8}(\s+[A-F0-9a-f]{1,8})*)";
const EMOJI_STATUS_REGEX: &str = r"(?P<status>component|fully-qualified|minimally-qualified|unqualified)";
// Before Emoji 13.0 there was no version marker in front of the name
const EMOJI_NAME_REGEX: &str = r"(?P<emoji>\S+)\s+(E(?P<version>\d+\.\d+)\s+)?(?P<description>.+)";

/// The syntax of these lines is:
/// `Codepoint ; ("component"|"fully-qualified"|"minimally-qualified"|"unqualified") # Emoji ["E"Version] Emoji name`
pub fn test_regex() -> &'static Regex {
    lazy_static! {
        static ref EMOJI_TEST_REGEX: Regex = Regex::new(&format!(r"(?i)^{}\s*;\s*{}\s*#\s*{}$",
                                                                 EMOJI_SEQUENCE_SPACE_REGEX,
                                                                 EMOJI_STATUS_REGEX,
                                                                 EMOJI_NAME_REGEX)
        ).unwrap();
    }
    &*EMOJI_TEST_REGEX
}

fn group_regex() -> &'static Regex {
    lazy_static! {
        static ref GROUP_REGEX: Regex = Regex::new(r"(?i)^#\s*group:\s*(?P<group>.+)$").unwrap();
    }
    &*GROUP_REGEX
}

fn subgroup_regex() -> &'static Regex {
    lazy_static! {
        static ref SUBGROUP_REGEX: Regex = Regex::new(r"(?i)^#\s*subgroup:\s*(?P<subgroup>.+)$").unwrap();
    }
    &*SUBGROUP_REGEX
}

fn version_regex() -> &'static Regex {
    lazy_static! {
        static ref VERSION_REGEX: Regex = Regex::new(r"(?i)^#\s*version:\s*(?P<major>\d+)\.(?P<minor>\d+)").unwrap();
    }
    &*VERSION_REGEX
}

/// The raw parts of one emoji entry
#[derive(Debug, PartialEq)]
pub struct TestLine<'a> {
    pub sequence: &'a str,
    pub status: &'a str,
    pub emoji: &'a str,
    pub version: Option<&'a str>,
    pub description: &'a str,
}

impl<'a> From<Captures<'a>> for TestLine<'a> {
    fn from(captures: Captures<'a>) -> Self {
        // These groups are not optional in the regex
        let required = |name: &str| captures.name(name)
            .map(|capture| capture.as_str())
            .unwrap_or_default();
        Self {
            sequence: required("sequence"),
            status: required("status"),
            emoji: required("emoji"),
            version: captures.name("version").map(|version| version.as_str()),
            description: required("description").trim(),
        }
    }
}

impl<'a> TryFrom<&'a str> for TestLine<'a> {
    type Error = ();

    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        let captures = test_regex().captures(value).ok_or(())?;
        Ok(Self::from(captures))
    }
}

/// Any line of `emoji-test.txt` that carries information
#[derive(Debug, PartialEq)]
pub enum TestFileEntry<'a> {
    Emoji(TestLine<'a>),
    Group(&'a str),
    Subgroup(&'a str),
    Version(u32, u32),
    /// Comments without any meaning for us and empty lines
    Ignored,
}

/// Classifies a single (already trimmed) line; `None` means that it is malformed
pub fn match_line(line: &str) -> Option<TestFileEntry> {
    if line.is_empty() {
        Some(TestFileEntry::Ignored)
    } else if line.starts_with('#') {
        if let Some(captures) = group_regex().captures(line) {
            captures.name("group").map(|group| TestFileEntry::Group(group.as_str().trim()))
        } else if let Some(captures) = subgroup_regex().captures(line) {
            captures.name("subgroup").map(|subgroup| TestFileEntry::Subgroup(subgroup.as_str().trim()))
        } else if let Some(captures) = version_regex().captures(line) {
            let major = captures["major"].parse().ok()?;
            let minor = captures["minor"].parse().ok()?;
            Some(TestFileEntry::Version(major, minor))
        } else {
            Some(TestFileEntry::Ignored)
        }
    } else {
        TestLine::try_from(line).ok().map(TestFileEntry::Emoji)
    }
}

#[test]
fn test_match_lines() {
    assert_eq!(
        match_line("1F600 ; fully-qualified # 😀 grinning face"),
        Some(TestFileEntry::Emoji(TestLine {
            sequence: "1F600",
            status: "fully-qualified",
            emoji: "😀",
            version: None,
            description: "grinning face"
        }))
    );
    assert_eq!(
        match_line("1F3F3 FE0F 200D 26A7 FE0F                  ; fully-qualified     # 🏳️‍⚧️ E13.0 transgender flag"),
        Some(TestFileEntry::Emoji(TestLine {
            sequence: "1F3F3 FE0F 200D 26A7 FE0F",
            status: "fully-qualified",
            emoji: "🏳️‍⚧️",
            version: Some("13.0"),
            description: "transgender flag"
        }))
    );
    assert_eq!(match_line("# group: Smileys & Emotion"), Some(TestFileEntry::Group("Smileys & Emotion")));
    assert_eq!(match_line("# subgroup: face-smiling"), Some(TestFileEntry::Subgroup("face-smiling")));
    assert_eq!(match_line("# Version: 12.0"), Some(TestFileEntry::Version(12, 0)));
    assert_eq!(match_line("# Smileys & Emotion subtotal:\t\t4"), Some(TestFileEntry::Ignored));
    assert_eq!(match_line("1F923 ; mostly-qualified # 🤣 rolling on the floor laughing"), None);
}
