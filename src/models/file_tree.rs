//! File tree model.
//!
//! Display-only tree for the explorer. Paths are workspace-relative and `/`-separated,
//! the root node itself has no path.

use rustc_hash::FxHashSet;
use slotmap::{new_key_type, SlotMap};
use std::collections::BTreeMap;
use std::fmt;

new_key_type! { pub struct NodeId; }

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Dir,
}

#[derive(Debug, PartialEq, Eq)]
pub enum FileTreeError {
    ParentNotDirectory,
    NameExists,
    InvalidNodeId,
}

impl fmt::Display for FileTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileTreeError::ParentNotDirectory => write!(f, "parent is not a directory"),
            FileTreeError::NameExists => write!(f, "name already exists in parent"),
            FileTreeError::InvalidNodeId => write!(f, "invalid node id"),
        }
    }
}

impl std::error::Error for FileTreeError {}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    name: String,
    parent: Option<NodeId>,
    children: Option<BTreeMap<String, NodeId>>,
}

impl Node {
    fn new_file(name: String, parent: Option<NodeId>) -> Self {
        Self {
            kind: NodeKind::File,
            name,
            parent,
            children: None,
        }
    }

    fn new_dir(name: String, parent: Option<NodeId>) -> Self {
        Self {
            kind: NodeKind::Dir,
            name,
            parent,
            children: Some(BTreeMap::new()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileTree {
    arena: SlotMap<NodeId, Node>,
    root: NodeId,
    expanded: FxHashSet<NodeId>,
    selected: Option<NodeId>,
}

impl FileTree {
    pub fn new(root_name: impl Into<String>) -> Self {
        let mut arena = SlotMap::with_key();
        let root = arena.insert(Node::new_dir(root_name.into(), None));

        let mut expanded = FxHashSet::default();
        expanded.insert(root);

        Self {
            arena,
            root,
            expanded,
            selected: Some(root),
        }
    }

    /// The fixed sample project shown by default. It is not tied to the document map.
    pub fn sample_project() -> Self {
        let mut tree = Self::from_paths(
            "my-project",
            [
                "src/components/Header.js",
                "src/components/Sidebar.js",
                "src/App.js",
                "src/index.js",
                "src/styles.css",
                "public/index.html",
                "package.json",
                "README.md",
            ],
        );
        if let Some(src) = tree.find_node_by_path("src") {
            tree.expand(src);
        }
        tree
    }

    /// Builds a tree whose files are exactly `paths`, creating folders on the way.
    pub fn from_paths<'a>(
        root_name: impl Into<String>,
        paths: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let mut tree = Self::new(root_name);
        for path in paths {
            let mut parent = tree.root;
            let mut parts = path.split('/').filter(|p| !p.is_empty()).peekable();
            while let Some(part) = parts.next() {
                let kind = if parts.peek().is_some() {
                    NodeKind::Dir
                } else {
                    NodeKind::File
                };
                parent = match tree.child_named(parent, part) {
                    Some(existing) => existing,
                    None => match tree.insert_child(parent, part.to_string(), kind) {
                        Ok(id) => id,
                        Err(e) => {
                            tracing::warn!(path, error = %e, "skipping tree entry");
                            break;
                        }
                    },
                };
            }
        }
        tree
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    pub fn set_selected(&mut self, id: Option<NodeId>) {
        self.selected = id;
    }

    pub fn insert_child(
        &mut self,
        parent: NodeId,
        name: String,
        kind: NodeKind,
    ) -> Result<NodeId, FileTreeError> {
        {
            let parent_ro = self.arena.get(parent).ok_or(FileTreeError::InvalidNodeId)?;
            let children_ro = parent_ro
                .children
                .as_ref()
                .ok_or(FileTreeError::ParentNotDirectory)?;
            if children_ro.contains_key(&name) {
                return Err(FileTreeError::NameExists);
            }
        }

        let node = match kind {
            NodeKind::File => Node::new_file(name.clone(), Some(parent)),
            NodeKind::Dir => Node::new_dir(name.clone(), Some(parent)),
        };
        let id = self.arena.insert(node);

        let parent_node = self
            .arena
            .get_mut(parent)
            .ok_or(FileTreeError::InvalidNodeId)?;
        let children = parent_node
            .children
            .as_mut()
            .ok_or(FileTreeError::ParentNotDirectory)?;
        children.insert(name, id);

        Ok(id)
    }

    fn child_named(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.arena
            .get(parent)?
            .children
            .as_ref()?
            .get(name)
            .copied()
    }

    /// Workspace-relative path of `id`; empty for the root.
    pub fn full_path(&self, id: NodeId) -> String {
        let mut components = Vec::new();
        let mut current = id;

        while let Some(node) = self.arena.get(current) {
            match node.parent {
                Some(parent) => {
                    components.push(node.name.as_str());
                    current = parent;
                }
                None => break,
            }
        }

        components.reverse();
        components.join("/")
    }

    pub fn find_node_by_path(&self, path: &str) -> Option<NodeId> {
        let mut current = self.root;
        for part in path.split('/').filter(|p| !p.is_empty()) {
            current = self.child_named(current, part)?;
        }
        Some(current)
    }

    /// Selects the node at `path` and expands every folder above it.
    pub fn reveal(&mut self, path: &str) -> bool {
        let Some(id) = self.find_node_by_path(path) else {
            return false;
        };
        let mut current = self.arena.get(id).and_then(|n| n.parent);
        while let Some(parent) = current {
            self.expanded.insert(parent);
            current = self.arena.get(parent).and_then(|n| n.parent);
        }
        self.selected = Some(id);
        true
    }

    pub fn toggle_expand(&mut self, id: NodeId) {
        if self.arena.get(id).is_some_and(|n| n.kind == NodeKind::Dir) {
            if self.expanded.contains(&id) {
                self.expanded.remove(&id);
            } else {
                self.expanded.insert(id);
            }
        }
    }

    pub fn expand(&mut self, id: NodeId) {
        if self.arena.get(id).is_some_and(|n| n.kind == NodeKind::Dir) {
            self.expanded.insert(id);
        }
    }

    pub fn collapse(&mut self, id: NodeId) {
        self.expanded.remove(&id);
    }

    pub fn get_name(&self, id: NodeId) -> Option<&str> {
        self.arena.get(id).map(|n| n.name.as_str())
    }

    pub fn is_dir(&self, id: NodeId) -> bool {
        self.arena
            .get(id)
            .map(|n| n.kind == NodeKind::Dir)
            .unwrap_or(false)
    }

    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.expanded.contains(&id)
    }

    pub fn children(&self, id: NodeId) -> Option<impl Iterator<Item = (&String, &NodeId)>> {
        self.arena
            .get(id)
            .and_then(|n| n.children.as_ref())
            .map(|c| c.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTreeRow {
    pub id: NodeId,
    pub depth: u16,
    pub name: String,
    pub is_dir: bool,
    pub is_expanded: bool,
}

impl FileTree {
    /// Visible rows, depth-first. Within a folder, subfolders come before files and each
    /// group is in name order.
    pub fn flatten_for_view(&self) -> Vec<FileTreeRow> {
        let mut result = Vec::new();
        let mut stack: Vec<(NodeId, u16)> = vec![(self.root, 0)];

        while let Some((id, depth)) = stack.pop() {
            if id != self.root {
                if let Some(node) = self.arena.get(id) {
                    result.push(FileTreeRow {
                        id,
                        depth,
                        name: node.name.clone(),
                        is_dir: node.kind == NodeKind::Dir,
                        is_expanded: self.expanded.contains(&id),
                    });
                }
            }

            if !self.expanded.contains(&id) {
                continue;
            }
            let Some(children) = self.arena.get(id).and_then(|n| n.children.as_ref()) else {
                continue;
            };

            let mut dirs = Vec::new();
            let mut files = Vec::new();
            for &child_id in children.values() {
                match self.arena.get(child_id).map(|c| c.kind) {
                    Some(NodeKind::Dir) => dirs.push(child_id),
                    Some(NodeKind::File) => files.push(child_id),
                    None => {}
                }
            }

            let child_depth = if id == self.root { 0 } else { depth + 1 };
            for file_id in files.into_iter().rev() {
                stack.push((file_id, child_depth));
            }
            for dir_id in dirs.into_iter().rev() {
                stack.push((dir_id, child_depth));
            }
        }

        result
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/file_tree.rs"]
mod tests;
