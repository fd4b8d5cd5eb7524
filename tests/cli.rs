use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn converse() -> Command {
    Command::cargo_bin("converse").unwrap()
}

#[test]
fn translates_inline_text_with_sample_data() {
    converse()
        .args(["how", "do", "you", "do", "captain?"])
        .assert()
        .success()
        .stdout("'ow diya do cap'n?\n");
}

#[test]
fn reverse_direction() {
    converse()
        .args(["-d", "ba", "'ere", "is", "ma", "cap'n"])
        .assert()
        .success()
        .stdout("here is my captain\n");
}

#[test]
fn unknown_direction_is_a_usage_error() {
    converse()
        .args(["-d", "xy", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid direction"));
}

#[test]
fn no_input_method_is_a_usage_error() {
    converse()
        .assert()
        .failure()
        .stderr(predicate::str::contains("no input method provided"));
}

#[test]
fn both_input_methods_conflict() {
    converse()
        .args(["-i", "in.txt", "hello"])
        .assert()
        .failure();
}

#[test]
fn file_to_file_with_custom_dictionary() {
    let dir = tempfile::tempdir().unwrap();
    let dict = dir.path().join("pirate.json");
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    fs::write(&dict, r#"{"phrases": [["hello there", "ahoy"]], "words": [["friend", "matey"]]}"#).unwrap();
    fs::write(&input, "Hello there, friend.\n").unwrap();

    converse()
        .arg("-c")
        .arg(&dict)
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&output).unwrap(), "Ahoy, matey.\n");
}

#[test]
fn malformed_dictionary_fails() {
    let dir = tempfile::tempdir().unwrap();
    let dict = dir.path().join("bad.json");
    fs::write(&dict, r#"{"words": [["only-one"]]}"#).unwrap();

    converse()
        .arg("-c")
        .arg(&dict)
        .arg("hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("data format"));
}

#[test]
fn logs_go_to_the_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("converse.log");

    converse()
        .args(["--ll", "1", "--lf"])
        .arg(&log)
        .arg("this")
        .assert()
        .success()
        .stdout("dis\n");

    let logged = fs::read_to_string(&log).unwrap();
    assert!(logged.contains("translator ready"));
}

#[test]
fn interactive_mode_translates_each_line() {
    converse()
        .arg("--interactive")
        .write_stdin("this is my captain\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("dis is ma cap'n"));
}
