//! Component folder recognition and stylesheet path derivation.

mod common;

use std::fs;
use std::path::{Path, PathBuf};

use common::make_component;
use lwc_css_core::{classify, classify_lexical, stylesheet_path_for};
use tempfile::TempDir;

// ──────────────────────────────────────────────
// Probe-backed classification
// ──────────────────────────────────────────────

#[test]
fn file_inside_component_folder_classifies_to_its_directory() {
    let dir = TempDir::new().expect("temp dir");
    let folder = make_component(dir.path(), "myButton");

    let result = classify(&folder.join("myButton.js")).expect("component folder");

    assert_eq!(result.path(), folder.as_path());
    assert_eq!(result.name(), "myButton");
    assert_eq!(result.parent_name(), "lwc");
}

#[test]
fn component_directory_classifies_to_itself() {
    let dir = TempDir::new().expect("temp dir");
    let folder = make_component(dir.path(), "card");

    let result = classify(&folder).expect("component folder");
    assert_eq!(result.path(), folder.as_path());
    assert_eq!(result.name(), "card");
}

#[test]
fn lwc_folder_outside_force_app_is_accepted() {
    let dir = TempDir::new().expect("temp dir");
    let folder = dir.path().join("src").join("lwc").join("header");
    fs::create_dir_all(&folder).unwrap();
    fs::write(folder.join("header.html"), "<template></template>\n").unwrap();

    let result = classify(&folder.join("header.html")).expect("component folder");
    assert_eq!(result.name(), "header");
}

#[test]
fn tests_folder_is_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let tests = dir.path().join("src").join("lwc").join("__tests__");
    fs::create_dir_all(&tests).unwrap();
    let test_file = tests.join("myButton.test.js");
    fs::write(&test_file, "test('x', () => {});\n").unwrap();

    assert!(classify(&test_file).is_none());
    assert!(classify(&tests).is_none());
}

#[test]
fn lwc_directory_itself_is_not_a_component() {
    let dir = TempDir::new().expect("temp dir");
    make_component(dir.path(), "myButton");
    let lwc = dir.path().join("force-app/main/default/lwc");

    assert!(classify(&lwc).is_none());
}

#[test]
fn nested_file_below_component_folder_is_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let folder = make_component(dir.path(), "myButton");
    let nested = folder.join("utils");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join("format.js"), "").unwrap();

    assert!(classify(&nested.join("format.js")).is_none());
}

#[test]
fn missing_path_fails_silently() {
    let dir = TempDir::new().expect("temp dir");
    let folder = make_component(dir.path(), "myButton");

    assert!(classify(&folder.join("doesNotExist.js")).is_none());
    assert!(classify(Path::new("/definitely/not/here/lwc/x/x.js")).is_none());
}

// ──────────────────────────────────────────────
// Lexical rule
// ──────────────────────────────────────────────

#[test]
fn lexical_rule_accepts_any_name_directly_under_lwc() {
    for name in ["a", "myButton", "record-card", "x_y", "ünïcode"] {
        let path = PathBuf::from("/repo/force-app/main/default/lwc").join(name);
        let folder = classify_lexical(&path).unwrap_or_else(|| panic!("{name} should classify"));
        assert_eq!(folder.name(), name);
        assert_eq!(folder.path(), path.as_path());
    }
}

#[test]
fn lexical_rule_requires_parent_to_be_exactly_lwc() {
    for parent in ["LWC", "lwc2", "aura", "xlwc", "lwc.bak"] {
        let path = PathBuf::from("/repo").join(parent).join("myButton");
        assert!(
            classify_lexical(&path).is_none(),
            "parent {parent:?} must not classify"
        );
    }
}

#[test]
fn lexical_rule_rejects_short_paths() {
    assert!(classify_lexical(Path::new("")).is_none());
    assert!(classify_lexical(Path::new("/")).is_none());
    assert!(classify_lexical(Path::new("myButton")).is_none());
    assert!(classify_lexical(Path::new("/myButton")).is_none());
}

#[test]
fn lexical_rule_accepts_relative_paths() {
    let folder = classify_lexical(Path::new("lwc/myButton")).expect("component folder");
    assert_eq!(folder.name(), "myButton");
}

#[test]
fn lexical_rule_ignores_trailing_separator() {
    let folder = classify_lexical(Path::new("/repo/lwc/myButton/")).expect("component folder");
    assert_eq!(folder.name(), "myButton");
}

// ──────────────────────────────────────────────
// Stylesheet path
// ──────────────────────────────────────────────

#[test]
fn stylesheet_path_is_folder_slash_name_dot_css() {
    let folder = classify_lexical(Path::new("/repo/force-app/main/default/lwc/myButton"))
        .expect("component folder");

    assert_eq!(
        stylesheet_path_for(&folder),
        PathBuf::from("/repo/force-app/main/default/lwc/myButton/myButton.css")
    );
}

#[test]
fn stylesheet_path_is_stable_across_calls() {
    let dir = TempDir::new().expect("temp dir");
    let folder_path = make_component(dir.path(), "panel");
    let file = folder_path.join("panel.js");

    let first = stylesheet_path_for(&classify(&file).unwrap());
    let second = stylesheet_path_for(&classify(&file).unwrap());
    let from_dir = stylesheet_path_for(&classify(&folder_path).unwrap());

    assert_eq!(first, second);
    assert_eq!(first, from_dir);
    assert_eq!(first, folder_path.join("panel.css"));
}
