//! Integration tests for `[file] include` merging

use super::test_utils::config_dir;
use inifold::combine::combine;
use inifold::{Ini, IniError, Key, ParseOptions, SectionMap};

#[test]
fn test_shared_section_merges_through_combiner() {
    let options = ParseOptions::default();
    let merged = combine(b"[data]\nhost=1\n", b"[data]\nport=2\n", &options).unwrap();

    let mut sections = SectionMap::new();
    inifold::parser::parse(&merged, &options, &mut sections).unwrap();
    assert_eq!(
        sections.get("data").unwrap(),
        &vec![Key::new("host", "1"), Key::new("port", "2")]
    );
}

#[test]
fn test_naive_concatenation_restarts_section() {
    let options = ParseOptions::default();
    let concatenated = [&b"[data]\nhost=1\n"[..], &b"[data]\nport=2\n"[..]].concat();

    let mut sections = SectionMap::new();
    inifold::parser::parse(&concatenated, &options, &mut sections).unwrap();
    assert_eq!(sections.get("data").unwrap(), &vec![Key::new("port", "2")]);
}

#[test]
fn test_load_follows_include() {
    let dir = config_dir(&[
        (
            "app.conf",
            "app_name = demo\n\n[file]\ninclude = blog.conf\n\n[data]\nhost = primary\n",
        ),
        (
            "blog.conf",
            "[data]\nhost = included\nport = 2\n\n[blog]\ntitle = \"My Blog\"\n",
        ),
    ]);

    let ini = Ini::with_directory(dir.path());
    ini.load("app.conf").unwrap();

    assert_eq!(ini.get("app_name"), "demo");
    assert_eq!(ini.get_sections(), vec!["blog", "data", "file"]);
    assert_eq!(ini.section_get("data", "host"), "primary");
    assert_eq!(ini.section_get("data", "port"), "2");
    assert_eq!(ini.section_get("blog", "title"), "My Blog");
    assert_eq!(ini.section_get("file", "include"), "blog.conf");
}

#[test]
fn test_include_is_one_level_deep() {
    let dir = config_dir(&[
        ("app.conf", "[file]\ninclude = second.conf\n"),
        ("second.conf", "[file]\ninclude = third.conf\n[second]\nk = 2\n"),
        ("third.conf", "[third]\nk = 3\n"),
    ]);

    let ini = Ini::with_directory(dir.path());
    ini.load("app.conf").unwrap();

    assert_eq!(ini.section_get("second", "k"), "2");
    assert!(!ini.has_section("third"));
    assert_eq!(ini.section_get("file", "include"), "second.conf");
}

#[test]
fn test_missing_include_fails_load() {
    let dir = config_dir(&[("app.conf", "[file]\ninclude = absent.conf\n")]);

    let ini = Ini::with_directory(dir.path());
    match ini.load("app.conf") {
        Err(IniError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("Expected NotFound, got {:?}", other),
    }
    assert!(ini.get_sections().is_empty());
}

#[test]
fn test_empty_include_value_is_ignored() {
    let dir = config_dir(&[("app.conf", "[file]\ninclude =\n[s]\nk = v\n")]);

    let ini = Ini::with_directory(dir.path());
    ini.load("app.conf").unwrap();
    assert_eq!(ini.section_get("s", "k"), "v");
}

#[test]
fn test_malformed_included_file_fails_load() {
    let dir = config_dir(&[
        ("app.conf", "[file]\ninclude = bad.conf\n"),
        ("bad.conf", "[s]\nnot a pair\n"),
    ]);

    let ini = Ini::with_directory(dir.path());
    assert!(matches!(
        ini.load("app.conf"),
        Err(IniError::MalformedLine { .. })
    ));
}
