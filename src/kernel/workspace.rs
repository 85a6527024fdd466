//! In-memory workspace: document contents plus the open/active selection.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::language::default_template;

/// Where a full-text edit is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditRouting {
    /// The document the edit came from.
    #[default]
    Origin,
    /// Whatever document is active when the edit lands, regardless of origin.
    Active,
}

const SEED_SCRIPT_PATH: &str = "src/App.js";

const SEED_SCRIPT: &str = r#"import React from 'react';
import Header from './components/Header';
import Sidebar from './components/Sidebar';
import './styles.css';

function App() {
  const [count, setCount] = React.useState(0);

  return (
    <div className="app">
      <Header title="My Project" />
      <Sidebar />
      <button onClick={() => setCount(count + 1)}>
        Clicked {count} times
      </button>
    </div>
  );
}

export default App;
"#;

const SEED_README: &str = r#"# My Project

A small demo project used to try out the editor.

## Getting started

```
npm install
npm start
```
"#;

const SEED_MANIFEST: &str = r#"{
  "name": "my-project",
  "version": "1.0.0",
  "private": true,
  "scripts": {
    "start": "react-scripts start",
    "build": "react-scripts build",
    "test": "react-scripts test"
  },
  "dependencies": {
    "react": "^18.2.0",
    "react-dom": "^18.2.0"
  }
}
"#;

#[derive(Debug, Clone, Default)]
pub struct Workspace {
    documents: FxHashMap<String, String>,
    open_paths: Vec<String>,
    active: Option<String>,
    routing: EditRouting,
}

impl Workspace {
    pub fn new(routing: EditRouting) -> Self {
        Self {
            routing,
            ..Self::default()
        }
    }

    /// The startup workspace: a script, a README and a package manifest, with the script
    /// open and active.
    pub fn seeded(routing: EditRouting) -> Self {
        let mut ws = Self::new(routing);
        ws.insert_document(SEED_SCRIPT_PATH, SEED_SCRIPT);
        ws.insert_document("README.md", SEED_README);
        ws.insert_document("package.json", SEED_MANIFEST);
        ws.select_file(SEED_SCRIPT_PATH);
        ws
    }

    pub fn insert_document(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.documents.insert(path.into(), content.into());
    }

    pub fn routing(&self) -> EditRouting {
        self.routing
    }

    pub fn active_path(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn active_content(&self) -> Option<&str> {
        let path = self.active.as_deref()?;
        self.content(path)
    }

    pub fn open_paths(&self) -> &[String] {
        &self.open_paths
    }

    pub fn is_open(&self, path: &str) -> bool {
        self.open_paths.iter().any(|p| p == path)
    }

    pub fn content(&self, path: &str) -> Option<&str> {
        self.documents.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.documents.contains_key(path)
    }

    pub fn documents_len(&self) -> usize {
        self.documents.len()
    }

    /// Document keys in sorted order.
    pub fn paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.documents.keys().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }

    /// Makes `path` active, opening it as the last tab and synthesizing its content from
    /// the extension template if it has none yet.
    pub fn select_file(&mut self, path: &str) -> bool {
        let mut changed = false;

        if !self.documents.contains_key(path) {
            self.documents
                .insert(path.to_string(), default_template(path));
            tracing::debug!(path, "synthesized default content");
            changed = true;
        }

        if !self.is_open(path) {
            self.open_paths.push(path.to_string());
            changed = true;
        }

        if self.active.as_deref() != Some(path) {
            self.active = Some(path.to_string());
            changed = true;
        }

        changed
    }

    /// Removes `path` from the open tabs. Content stays in the document map.
    pub fn close_file(&mut self, path: &str) -> bool {
        let Some(index) = self.open_paths.iter().position(|p| p == path) else {
            return false;
        };
        self.open_paths.remove(index);

        if self.active.as_deref() == Some(path) {
            self.active = self.open_paths.last().cloned();
        }

        true
    }

    /// Reassigns the active path without touching tabs or content. Callers pass paths that
    /// are already open.
    pub fn set_active_file(&mut self, path: &str) -> bool {
        if self.active.as_deref() == Some(path) {
            return false;
        }
        self.active = Some(path.to_string());
        true
    }

    /// Replaces the full text of a document.
    ///
    /// Dropped when nothing is active. With [`EditRouting::Origin`] the text lands on
    /// `path`; with [`EditRouting::Active`] it lands on the active document. Edits for paths
    /// with no document entry are dropped so the key set never changes.
    pub fn update_content(&mut self, path: &str, text: String) -> bool {
        let Some(active) = self.active.as_deref() else {
            tracing::debug!(path, "edit dropped: no active document");
            return false;
        };

        let target = match self.routing {
            EditRouting::Origin => path,
            EditRouting::Active => active,
        };

        let Some(slot) = self.documents.get_mut(target) else {
            tracing::debug!(path = target, "edit dropped: unknown document");
            return false;
        };
        if *slot == text {
            return false;
        }
        *slot = text;
        true
    }

    pub fn activate_next_tab(&mut self) -> bool {
        self.activate_relative(1)
    }

    pub fn activate_prev_tab(&mut self) -> bool {
        self.activate_relative(-1)
    }

    fn activate_relative(&mut self, delta: isize) -> bool {
        let len = self.open_paths.len();
        if len == 0 {
            return false;
        }

        let current = self
            .active
            .as_deref()
            .and_then(|active| self.open_paths.iter().position(|p| p == active));
        let next = match current {
            Some(index) => (index as isize + delta).rem_euclid(len as isize) as usize,
            None => 0,
        };

        let path = self.open_paths[next].clone();
        self.set_active_file(&path)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/workspace.rs"]
mod tests;
