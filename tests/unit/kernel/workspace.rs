use super::*;

fn single_open(path: &str) -> Workspace {
    let mut ws = Workspace::new(EditRouting::Origin);
    ws.select_file(path);
    ws
}

#[test]
fn seeded_workspace_opens_the_script() {
    let ws = Workspace::seeded(EditRouting::Origin);
    assert_eq!(ws.open_paths(), ["src/App.js".to_string()]);
    assert_eq!(ws.active_path(), Some("src/App.js"));
    assert_eq!(ws.documents_len(), 3);
    assert!(ws.contains("README.md"));
    assert!(ws.contains("package.json"));
    assert!(ws.active_content().unwrap().contains("function App()"));
}

#[test]
fn select_then_close_scenario() {
    let mut ws = single_open("a.js");
    assert_eq!(ws.open_paths(), ["a.js".to_string()]);
    assert_eq!(ws.active_path(), Some("a.js"));

    assert!(ws.select_file("b.py"));
    assert_eq!(ws.open_paths(), ["a.js".to_string(), "b.py".to_string()]);
    assert_eq!(ws.active_path(), Some("b.py"));
    assert!(ws.content("b.py").unwrap().starts_with('#'));

    assert!(ws.close_file("b.py"));
    assert_eq!(ws.open_paths(), ["a.js".to_string()]);
    assert_eq!(ws.active_path(), Some("a.js"));
}

#[test]
fn select_existing_document_keeps_its_content() {
    let mut ws = Workspace::seeded(EditRouting::Origin);
    let before = ws.content("README.md").unwrap().to_string();
    ws.select_file("README.md");
    assert_eq!(ws.content("README.md"), Some(before.as_str()));
    assert_eq!(ws.active_path(), Some("README.md"));
}

#[test]
fn select_open_path_does_not_duplicate_tab() {
    let mut ws = single_open("a.js");
    ws.select_file("b.js");
    ws.select_file("a.js");
    assert_eq!(ws.open_paths(), ["a.js".to_string(), "b.js".to_string()]);
    assert_eq!(ws.active_path(), Some("a.js"));
    assert!(!ws.select_file("a.js"));
}

#[test]
fn select_synthesizes_template_for_new_paths() {
    let mut ws = Workspace::new(EditRouting::Origin);
    let cases = [
        ("x.js", "//"),
        ("x.py", "#"),
        ("x.html", "<!DOCTYPE html>"),
        ("x.css", "/*"),
        ("x.toml", "//"),
    ];
    for (path, prefix) in cases {
        ws.select_file(path);
        let content = ws.content(path).unwrap();
        assert!(!content.is_empty());
        assert!(content.starts_with(prefix), "path={path}");
    }
}

#[test]
fn close_is_idempotent() {
    let mut ws = single_open("a.js");
    ws.select_file("b.js");
    ws.select_file("c.js");

    assert!(ws.close_file("b.js"));
    let once = ws.open_paths().to_vec();
    assert!(!ws.close_file("b.js"));
    assert_eq!(ws.open_paths(), once.as_slice());
}

#[test]
fn close_active_picks_last_remaining_tab() {
    let mut ws = single_open("a.js");
    ws.select_file("b.js");
    ws.select_file("c.js");
    ws.set_active_file("a.js");

    ws.close_file("a.js");
    assert_eq!(ws.active_path(), Some("c.js"));

    ws.close_file("c.js");
    assert_eq!(ws.active_path(), Some("b.js"));

    ws.close_file("b.js");
    assert!(ws.open_paths().is_empty());
    assert_eq!(ws.active_path(), None);
}

#[test]
fn close_inactive_tab_keeps_active() {
    let mut ws = single_open("a.js");
    ws.select_file("b.js");
    ws.close_file("a.js");
    assert_eq!(ws.active_path(), Some("b.js"));
}

#[test]
fn close_retains_content() {
    let mut ws = single_open("a.js");
    ws.update_content("a.js", "let x = 1;".to_string());
    ws.close_file("a.js");
    assert_eq!(ws.content("a.js"), Some("let x = 1;"));
    assert_eq!(ws.active_path(), None);
}

#[test]
fn set_active_does_not_touch_tabs_or_content() {
    let mut ws = single_open("a.js");
    ws.select_file("b.js");
    let docs = ws.documents_len();

    assert!(ws.set_active_file("a.js"));
    assert_eq!(ws.open_paths(), ["a.js".to_string(), "b.js".to_string()]);
    assert_eq!(ws.documents_len(), docs);
    assert!(!ws.set_active_file("a.js"));
}

#[test]
fn update_without_active_is_dropped() {
    let mut ws = single_open("a.js");
    ws.close_file("a.js");
    let before = ws.content("a.js").unwrap().to_string();

    assert!(!ws.update_content("a.js", "changed".to_string()));
    assert_eq!(ws.content("a.js"), Some(before.as_str()));
}

#[test]
fn update_never_changes_key_set() {
    let mut ws = Workspace::seeded(EditRouting::Origin);
    let keys = ws.paths().iter().map(|s| s.to_string()).collect::<Vec<_>>();

    ws.update_content("src/App.js", "// rewritten".to_string());
    ws.update_content("does/not/exist.js", "ghost".to_string());
    ws.update_content("README.md", String::new());

    let after = ws.paths().iter().map(|s| s.to_string()).collect::<Vec<_>>();
    assert_eq!(keys, after);
    assert_eq!(ws.content("src/App.js"), Some("// rewritten"));
    assert_eq!(ws.content("README.md"), Some(""));
}

#[test]
fn origin_routing_writes_to_originating_document() {
    let mut ws = single_open("a.js");
    ws.select_file("b.js");

    ws.update_content("a.js", "from a".to_string());
    assert_eq!(ws.content("a.js"), Some("from a"));
    assert_ne!(ws.content("b.js"), Some("from a"));
}

#[test]
fn active_routing_writes_to_active_document() {
    let mut ws = Workspace::new(EditRouting::Active);
    ws.select_file("a.js");
    ws.select_file("b.js");
    let a_before = ws.content("a.js").unwrap().to_string();

    ws.update_content("a.js", "from a".to_string());
    assert_eq!(ws.content("b.js"), Some("from a"));
    assert_eq!(ws.content("a.js"), Some(a_before.as_str()));
}

#[test]
fn update_with_same_text_reports_no_change() {
    let mut ws = single_open("a.js");
    let text = ws.content("a.js").unwrap().to_string();
    assert!(!ws.update_content("a.js", text));
}

#[test]
fn tab_cycling_wraps_around() {
    let mut ws = single_open("a.js");
    ws.select_file("b.js");
    ws.select_file("c.js");

    assert!(ws.activate_next_tab());
    assert_eq!(ws.active_path(), Some("a.js"));
    assert!(ws.activate_prev_tab());
    assert_eq!(ws.active_path(), Some("c.js"));
    assert!(ws.activate_prev_tab());
    assert_eq!(ws.active_path(), Some("b.js"));
}

#[test]
fn tab_cycling_with_no_tabs_is_noop() {
    let mut ws = Workspace::new(EditRouting::Origin);
    assert!(!ws.activate_next_tab());
    assert_eq!(ws.active_path(), None);
}
