//! Converting plain-text word lists into JSON arrays.

mod common;
use common::*;

#[test]
fn converts_normalized_lines() {
    init_logger();
    let dir = workdir(&[("targetWords.txt", "Dog\n\n CAT \nfish\n")]);
    let (txt, json) = (dir.path().join("targetWords.txt"), dir.path().join("targetWords.json"));

    let conversion = convert_txt_to_json(&txt, &json).unwrap();

    assert_eq!(conversion, Conversion::Converted { count: 3 });
    assert_eq!(read_json_list(&json).unwrap(), vec!["dog", "cat", "fish"]);
}

#[test]
fn keeps_order_and_duplicates() {
    init_logger();
    let dir = workdir(&[("allWords.txt", "zebra\r\nApple\r\n\r\nzebra\r\n  \r\nMango")]);
    let (txt, json) = (dir.path().join("allWords.txt"), dir.path().join("allWords.json"));

    let conversion = convert_txt_to_json(&txt, &json).unwrap();

    assert_eq!(conversion, Conversion::Converted { count: 4 });
    assert_eq!(read_json_list(&json).unwrap(), vec!["zebra", "apple", "zebra", "mango"]);
}

#[test]
fn lone_carriage_returns_split_lines() {
    init_logger();
    let dir = workdir(&[("allWords.txt", "Dog\rCat\r\r Fish \r")]);
    let (txt, json) = (dir.path().join("allWords.txt"), dir.path().join("allWords.json"));

    assert_eq!(convert_txt_to_json(&txt, &json).unwrap(), Conversion::Converted { count: 3 });
    assert_eq!(read_json_list(&json).unwrap(), vec!["dog", "cat", "fish"]);
}

#[test]
fn missing_source_is_skipped() {
    init_logger();
    let dir = workdir(&[]);
    let (txt, json) = (dir.path().join("allWords.txt"), dir.path().join("allWords.json"));

    assert_eq!(convert_txt_to_json(&txt, &json).unwrap(), Conversion::Skipped);
    assert!(!json.exists());
}

#[test]
fn missing_source_leaves_destination_untouched() {
    init_logger();
    let dir = workdir(&[("allWords.json", "[\"kept\"]")]);
    let (txt, json) = (dir.path().join("allWords.txt"), dir.path().join("allWords.json"));

    assert_eq!(convert_txt_to_json(&txt, &json).unwrap(), Conversion::Skipped);
    assert_eq!(read(&json), "[\"kept\"]");
}

#[test]
fn one_missing_pair_does_not_stop_the_other() {
    init_logger();
    let dir = workdir(&[("targetWords.txt", "Orange\nGarlic\n")]);

    let conversions = DEFAULT_PAIRS
        .iter()
        .map(|(txt, json)| convert_txt_to_json(dir.path().join(txt), dir.path().join(json)).unwrap())
        .collect::<Vec<_>>();

    assert_eq!(conversions, vec![Conversion::Skipped, Conversion::Converted { count: 2 }]);
    assert!(!dir.path().join("allWords.json").exists());
    assert_eq!(read_json_list(dir.path().join("targetWords.json")).unwrap(), vec!["orange", "garlic"]);
}

#[test]
fn empty_source_gives_empty_array() {
    init_logger();
    let dir = workdir(&[("allWords.txt", "\n   \n")]);
    let (txt, json) = (dir.path().join("allWords.txt"), dir.path().join("allWords.json"));

    assert_eq!(convert_txt_to_json(&txt, &json).unwrap(), Conversion::Converted { count: 0 });
    assert_eq!(read(&json), "[]");
}

#[test]
fn rerun_is_byte_identical() {
    init_logger();
    let dir = workdir(&[("allWords.txt", "Before\nlittle\n")]);
    let (txt, json) = (dir.path().join("allWords.txt"), dir.path().join("allWords.json"));

    convert_txt_to_json(&txt, &json).unwrap();
    let first = fs::read(&json).unwrap();
    convert_txt_to_json(&txt, &json).unwrap();
    assert_eq!(first, fs::read(&json).unwrap());
}

#[test]
fn invalid_utf8_fails() {
    init_logger();
    let dir = workdir(&[]);
    let (txt, json) = (dir.path().join("allWords.txt"), dir.path().join("allWords.json"));
    fs::write(&txt, b"fo\xff\n").unwrap();

    assert!(matches!(convert_txt_to_json(&txt, &json), Err(WordListError::Io(_))));
    assert!(!json.exists());
}
