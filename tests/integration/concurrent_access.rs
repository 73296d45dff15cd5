//! Integration tests for shared access to one configuration object

use super::test_utils::config_dir;
use inifold::Ini;
use std::sync::Arc;
use std::thread;

#[test]
fn test_readers_and_writers_share_one_object() {
    let dir = config_dir(&[("app.conf", "counter = 0\n[s]\nk = v\n")]);
    let ini = Arc::new(Ini::with_directory(dir.path()));
    ini.load("app.conf").unwrap();

    let mut handles = Vec::new();
    for i in 0..8 {
        let ini = Arc::clone(&ini);
        handles.push(thread::spawn(move || {
            for _ in 0..50 {
                assert_eq!(ini.section_get("s", "k"), "v");
                assert!(ini.get_sections().contains(&"s".to_string()));
            }
            if i % 2 == 0 {
                ini.load_bytes(format!("[t{}]\nn = {}\n", i, i).as_bytes())
                    .unwrap();
            } else {
                ini.reload().unwrap();
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    let sections = ini.get_sections();
    for i in (0..8).step_by(2) {
        assert!(sections.contains(&format!("t{}", i)));
        assert_eq!(ini.section_int(&format!("t{}", i), "n").unwrap(), i);
    }
}

#[test]
fn test_concurrent_writes_leave_complete_file() {
    let dir = config_dir(&[("app.conf", "a = 1\n[s]\nb = 2\n")]);
    let ini = Arc::new(Ini::with_directory(dir.path()));
    ini.load("app.conf").unwrap();
    let expected = ini.write_to_string().unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let ini = Arc::clone(&ini);
            thread::spawn(move || ini.write_origin_file().unwrap())
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(
        std::fs::read_to_string(dir.path().join("app.conf")).unwrap(),
        expected
    );
}
