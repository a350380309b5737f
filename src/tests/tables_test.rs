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

use crate::emojis::emoji_group::EmojiGroup;
use crate::emojis::emoji_status::EmojiStatus;
use crate::tables::emoji_test::EmojiTest;
use crate::tests::{emoji_test, init_logger};

#[test]
fn test_parse_file() {
    init_logger();
    let test = emoji_test();

    assert_eq!(test.version, Some((12, 0)));
    assert_eq!(test.len(), 22);
    assert_eq!(test.malformed_lines(), 1);
    assert_eq!(test.page_candidates().count(), 17);

    let smiling = test.emojis().iter()
        .find(|emoji| emoji.sequence == vec![0x1f970])
        .unwrap();
    assert_eq!(smiling.version, Some((11, 0)));
    assert_eq!(smiling.name.as_deref(), Some("smiling face with hearts"));
    assert_eq!(smiling.subgroup.as_deref(), Some("face-affection"));

    let light = test.emojis().iter()
        .find(|emoji| emoji.sequence == vec![0x1f3fb])
        .unwrap();
    assert_eq!(light.group, Some(EmojiGroup::Component));
    assert_eq!(light.status, Some(EmojiStatus::Component));
    assert!(!light.is_page_candidate());

    let flag = test.emojis().last().unwrap();
    assert_eq!(flag.group, Some(EmojiGroup::Flags));
    assert_eq!(flag.subgroup.as_deref(), Some("country-flag"));
}

#[test]
fn test_unknown_group() {
    init_logger();
    let data = "# group: Smileys & People\n\
                1F600 ; fully-qualified # 😀 grinning face\n\
                # group: Flags\n\
                1F3C1 ; fully-qualified # 🏁 chequered flag\n";
    let test = EmojiTest::parse(data.as_bytes()).unwrap();

    assert_eq!(test.len(), 2);
    assert_eq!(test.emojis()[0].group, None);
    assert_eq!(test.page_candidates().count(), 1);
}

#[test]
fn test_invalid_utf8() {
    init_logger();
    let mut data = b"1F600 ; fully-qualified # \xF0\x9F\x98\x80 grinning face\r\n".to_vec();
    data.extend_from_slice(b"1F601 ; fully-qualified # \xff\xfe broken\n");
    data.extend_from_slice(b"1F3C1 ; fully-qualified # \xF0\x9F\x8F\x81 chequered flag");
    let test = EmojiTest::parse(data.as_slice()).unwrap();

    assert_eq!(test.len(), 2);
    assert_eq!(test.malformed_lines(), 1);
    assert_eq!(test.emojis()[1].sequence, vec![0x1f3c1]);
    assert_eq!(test.emojis()[0].name.as_deref(), Some("grinning face"));
}

#[test]
fn test_invalid_codepoint() {
    init_logger();
    // Surrogates are no valid chars
    let data = "D800 ; fully-qualified # ? broken\n\
                1F600 ; fully-qualified # 😀 grinning face\n";
    let test = EmojiTest::parse(data.as_bytes()).unwrap();
    assert_eq!(test.len(), 1);
    assert_eq!(test.malformed_lines(), 1);
}
