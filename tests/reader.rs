use std::fs::File;
use std::io::{BufReader, Read};

use jxon::reader::{parse_whole_file, ChunkedReader};
use jxon::{JsonParserOptions, JsonParserOptionsBuilder};

const FIXTURE: &str = "tests/fixtures/sample.json";

#[test]
fn chunked_reader_consumes_a_whole_file() {
    let file = File::open(FIXTURE).unwrap();
    let reader = ChunkedReader::new(BufReader::new(file));
    let value = reader.read_to_end().unwrap();

    let obj = value.as_object().unwrap();
    assert_eq!(obj.get("name").unwrap().as_str(), Some("Elvis"));
    assert_eq!(obj.get("age").unwrap().as_number(), 42.0);
    assert_eq!(
        obj.get("address").unwrap().as_object().unwrap().get("city").unwrap().as_str(),
        Some("Memphis")
    );
}

#[test]
fn parse_whole_file_matches_a_manual_read() {
    let mut expected = String::new();
    File::open(FIXTURE).unwrap().read_to_string(&mut expected).unwrap();

    let value = parse_whole_file(FIXTURE, JsonParserOptions::default()).unwrap();

    let manual = jxon::serializer::serialize(&{
        let mut p = jxon::JsonParser::new();
        p.parse(expected.as_bytes()).unwrap();
        p.get_result().unwrap()
    })
    .unwrap();
    let via_reader = jxon::serializer::serialize(&value).unwrap();
    assert_eq!(manual, via_reader);
}

#[test]
fn a_tiny_buffer_still_reads_the_whole_file() {
    let options = JsonParserOptionsBuilder::default().with_read_buffer_size(3).build();
    let value = parse_whole_file(FIXTURE, options).unwrap();
    assert!(value.is_object());
}

#[test]
fn nonexistent_path_is_an_io_error() {
    let err = parse_whole_file("tests/fixtures/does-not-exist.json", JsonParserOptions::default())
        .unwrap_err();
    assert!(matches!(err, jxon::ReadError::Io(_)));
}
