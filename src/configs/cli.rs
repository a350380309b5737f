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

use clap::{App, Arg};

use crate::naming::EmojiSet;

/// All command line arguments. Every one of them can also be set in a config file
/// (`--config`), the command line taking precedence.
pub fn app<'a, 'b>() -> App<'a, 'b> {
    App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author("Constantin A. <emoji.builder@c1710.de>")
        .about("Packs emoji images into sprite sheets and generates EmojiPages.java for Signal-Android")
        .arg(Arg::with_name("config")
            .short("c")
            .long("config")
            .value_name("FILE")
            .help("A JSON or YAML file containing the settings")
            .takes_value(true))
        .arg(Arg::with_name("signal_repo_path")
            .long("signal-repo-path")
            .value_name("DIR")
            .help("The checkout of Signal-Android to write the sheets and the Java file to")
            .takes_value(true))
        .arg(Arg::with_name("emojis")
            .short("e")
            .long("emojis")
            .help("The emoji set, which determines how the image files are named")
            .takes_value(true)
            .possible_values(&EmojiSet::NAMES))
        .arg(Arg::with_name("emoji_dir")
            .short("d")
            .long("emoji-dir")
            .value_name("DIR")
            .help("Where the images are located (default: a directory named like the emoji set)")
            .takes_value(true))
        .arg(Arg::with_name("emoji_test")
            .short("t")
            .long("emoji-test")
            .value_name("FILE")
            .help("The emoji-test.txt to use (default: ./emoji-test.txt)")
            .takes_value(true))
        .arg(Arg::with_name("assets_dir")
            .long("assets-dir")
            .value_name("DIR")
            .help("Where to put the sheets, overrides the one derived from --signal-repo-path")
            .takes_value(true))
        .arg(Arg::with_name("java_file")
            .long("java-file")
            .value_name("FILE")
            .help("Where to put EmojiPages.java, overrides the one derived from --signal-repo-path")
            .takes_value(true))
        .arg(Arg::with_name("java_package")
            .long("java-package")
            .help("The package of the generated class")
            .takes_value(true))
        .arg(Arg::with_name("class_name")
            .long("class-name")
            .help("The name of the generated class")
            .takes_value(true))
        .arg(Arg::with_name("asset_uri_prefix")
            .long("asset-uri-prefix")
            .help("Prepended to the sheets' file names in the generated code")
            .takes_value(true))
        .arg(Arg::with_name("manifest")
            .short("m")
            .long("manifest")
            .value_name("FILE")
            .help("Additionally write the layout as JSON to this file")
            .takes_value(true))
        .arg(Arg::with_name("columns")
            .long("columns")
            .help("Sprites per row (default: 32)")
            .takes_value(true))
        .arg(Arg::with_name("rows")
            .long("rows")
            .help("Maximum number of rows per sheet (default: 12)")
            .takes_value(true))
        .arg(Arg::with_name("size")
            .short("s")
            .long("size")
            .help("Width and height of a single sprite in px (default: 64)")
            .takes_value(true))
        .arg(Arg::with_name("format")
            .short("f")
            .long("format")
            .help("The image format of the sheets (default: webp)")
            .takes_value(true)
            .possible_values(&["webp", "png"]))
        .arg(Arg::with_name("optimize")
            .short("O")
            .long("optimize")
            .help("Run oxipng on PNG sheets")
            .takes_value(false))
        .arg(Arg::with_name("keep_missing")
            .long("keep-missing")
            .help("Keep emojis without an image as empty cells instead of leaving them out")
            .takes_value(false))
}

#[test]
fn test_parse_args() {
    use crate::configs::config_file::SpriteConfigFile;
    use std::path::PathBuf;

    let matches = app().get_matches_from(vec![
        "emoji_sprites", "--signal-repo-path", "../Signal-Android", "--emojis", "noto", "--columns", "16", "-O"
    ]);
    let config = SpriteConfigFile::from_matches(&matches).unwrap();
    assert_eq!(config.signal_repo_path, Some(PathBuf::from("../Signal-Android")));
    assert_eq!(config.emoji_set, Some(EmojiSet::Noto));
    assert_eq!(config.columns, Some(16));
    assert_eq!(config.optimize, Some(true));
    assert_eq!(config.keep_missing, None);
    assert_eq!(config.format, None);

    let matches = app().get_matches_from(vec!["emoji_sprites", "--rows", "many"]);
    assert!(SpriteConfigFile::from_matches(&matches).is_err());
}
