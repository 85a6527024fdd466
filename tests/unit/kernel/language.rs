use super::*;

#[test]
fn from_path_maps_known_extensions() {
    let cases = [
        ("src/App.js", LanguageId::JavaScript),
        ("a.jsx", LanguageId::JavaScript),
        ("main.py", LanguageId::Python),
        ("public/index.html", LanguageId::Html),
        ("a.htm", LanguageId::Html),
        ("styles.css", LanguageId::Css),
        ("package.json", LanguageId::Json),
        ("README.md", LanguageId::Markdown),
        ("Makefile", LanguageId::PlainText),
        ("notes.txt", LanguageId::PlainText),
    ];

    for (path, expected) in cases {
        assert_eq!(LanguageId::from_path(path), expected, "path={path}");
    }
}

#[test]
fn from_path_ignores_extension_case() {
    assert_eq!(LanguageId::from_path("APP.JS"), LanguageId::JavaScript);
}

#[test]
fn default_template_shape_follows_extension() {
    assert!(default_template("a.js").starts_with("// a.js"));
    assert!(default_template("pkg/b.py").starts_with("# b.py"));
    assert!(default_template("index.html").starts_with("<!DOCTYPE html>"));
    assert!(default_template("theme.css").starts_with("/* theme.css */"));
    assert!(default_template("notes.txt").starts_with("// notes.txt"));
    assert!(default_template("Makefile").starts_with("// Makefile"));
}

#[test]
fn default_template_is_never_empty() {
    for path in ["a.js", "b.py", "c.html", "d.css", "e", "f.rs"] {
        assert!(!default_template(path).is_empty(), "path={path}");
    }
}

#[test]
fn default_templates_differ_between_recognized_extensions() {
    let js = default_template("x.js");
    let py = default_template("x.py");
    let html = default_template("x.html");
    let css = default_template("x.css");
    let other = default_template("x.txt");
    let all = [&js, &py, &html, &css, &other];
    for (i, a) in all.iter().enumerate() {
        for b in all.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn file_name_takes_last_segment() {
    assert_eq!(file_name("src/components/Header.js"), "Header.js");
    assert_eq!(file_name("README.md"), "README.md");
}
