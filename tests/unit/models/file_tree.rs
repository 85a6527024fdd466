use super::*;

fn names(tree: &FileTree) -> Vec<(u16, String)> {
    tree.flatten_for_view()
        .into_iter()
        .map(|row| (row.depth, row.name))
        .collect()
}

#[test]
fn test_new_tree() {
    let tree = FileTree::new("test");
    assert!(tree.is_dir(tree.root()));
    assert!(tree.is_expanded(tree.root()));
    assert_eq!(tree.full_path(tree.root()), "");
}

#[test]
fn test_insert_child() {
    let mut tree = FileTree::new("root");
    let root = tree.root();

    let file_id = tree
        .insert_child(root, "file.txt".into(), NodeKind::File)
        .unwrap();
    let dir_id = tree
        .insert_child(root, "subdir".into(), NodeKind::Dir)
        .unwrap();

    assert!(!tree.is_dir(file_id));
    assert!(tree.is_dir(dir_id));
    assert_eq!(
        tree.insert_child(root, "file.txt".into(), NodeKind::File),
        Err(FileTreeError::NameExists)
    );
    assert_eq!(
        tree.insert_child(file_id, "x".into(), NodeKind::File),
        Err(FileTreeError::ParentNotDirectory)
    );
}

#[test]
fn test_toggle_expand_ignores_files() {
    let mut tree = FileTree::new("root");
    let root = tree.root();
    let dir_id = tree
        .insert_child(root, "subdir".into(), NodeKind::Dir)
        .unwrap();
    let file_id = tree
        .insert_child(root, "a.txt".into(), NodeKind::File)
        .unwrap();

    assert!(!tree.is_expanded(dir_id));
    tree.toggle_expand(dir_id);
    assert!(tree.is_expanded(dir_id));
    tree.toggle_expand(dir_id);
    assert!(!tree.is_expanded(dir_id));

    tree.toggle_expand(file_id);
    assert!(!tree.is_expanded(file_id));
}

#[test]
fn test_flatten_for_view_puts_dirs_first() {
    let mut tree = FileTree::new("root");
    let root = tree.root();

    tree.insert_child(root, "a.txt".into(), NodeKind::File)
        .unwrap();
    let dir_id = tree
        .insert_child(root, "zdir".into(), NodeKind::Dir)
        .unwrap();
    tree.insert_child(dir_id, "inner.txt".into(), NodeKind::File)
        .unwrap();

    assert_eq!(
        names(&tree),
        vec![(0, "zdir".to_string()), (0, "a.txt".to_string())]
    );

    tree.expand(dir_id);
    assert_eq!(
        names(&tree),
        vec![
            (0, "zdir".to_string()),
            (1, "inner.txt".to_string()),
            (0, "a.txt".to_string()),
        ]
    );
}

#[test]
fn from_paths_creates_intermediate_folders() {
    let tree = FileTree::from_paths("ws", ["src/App.js", "README.md", "src/lib/util.js"]);

    let src = tree.find_node_by_path("src").unwrap();
    assert!(tree.is_dir(src));
    let util = tree.find_node_by_path("src/lib/util.js").unwrap();
    assert!(!tree.is_dir(util));
    assert_eq!(tree.full_path(util), "src/lib/util.js");
    assert!(tree.find_node_by_path("src/missing.js").is_none());
}

#[test]
fn sample_project_shows_src_expanded() {
    let tree = FileTree::sample_project();
    let rows = names(&tree);

    assert_eq!(
        rows,
        vec![
            (0, "public".to_string()),
            (0, "src".to_string()),
            (1, "components".to_string()),
            (1, "App.js".to_string()),
            (1, "index.js".to_string()),
            (1, "styles.css".to_string()),
            (0, "README.md".to_string()),
            (0, "package.json".to_string()),
        ]
    );
}

#[test]
fn reveal_expands_ancestors_and_selects() {
    let mut tree = FileTree::sample_project();
    assert!(tree.reveal("src/components/Sidebar.js"));

    let components = tree.find_node_by_path("src/components").unwrap();
    assert!(tree.is_expanded(components));
    let selected = tree.selected().unwrap();
    assert_eq!(tree.get_name(selected), Some("Sidebar.js"));

    assert!(!tree.reveal("nope.txt"));
}
