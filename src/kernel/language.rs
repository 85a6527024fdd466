use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum LanguageId {
    JavaScript,
    Python,
    Html,
    Css,
    Json,
    Markdown,
    PlainText,
}

impl LanguageId {
    pub fn from_path(path: &str) -> Self {
        let ext = Path::new(path)
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_ascii_lowercase());
        match ext.as_deref() {
            Some("js" | "mjs" | "cjs" | "jsx") => Self::JavaScript,
            Some("py" | "pyi") => Self::Python,
            Some("html" | "htm") => Self::Html,
            Some("css") => Self::Css,
            Some("json") => Self::Json,
            Some("md" | "markdown") => Self::Markdown,
            _ => Self::PlainText,
        }
    }

    pub fn language_id(self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::Python => "python",
            Self::Html => "html",
            Self::Css => "css",
            Self::Json => "json",
            Self::Markdown => "markdown",
            Self::PlainText => "plaintext",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::JavaScript => "JavaScript",
            Self::Python => "Python",
            Self::Html => "HTML",
            Self::Css => "CSS",
            Self::Json => "JSON",
            Self::Markdown => "Markdown",
            Self::PlainText => "Plain Text",
        }
    }
}

/// Boilerplate for a document that is selected before it has any content.
///
/// Only the file extension decides the shape: `js`, `py`, `html` and `css` each get their
/// own skeleton, everything else gets a generic comment header.
pub fn default_template(path: &str) -> String {
    let name = file_name(path);
    let ext = Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default();

    match ext {
        "js" => format!(
            "// {name}\n// New JavaScript file\n\nfunction main() {{\n  console.log('Hello from {name}');\n}}\n\nmain();\n"
        ),
        "py" => format!(
            "# {name}\n# New Python file\n\n\ndef main():\n    print(\"Hello from {name}\")\n\n\nif __name__ == \"__main__\":\n    main()\n"
        ),
        "html" => format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"UTF-8\">\n  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n  <title>{name}</title>\n</head>\n<body>\n  <h1>Hello from {name}</h1>\n</body>\n</html>\n"
        ),
        "css" => format!(
            "/* {name} */\n\nbody {{\n  margin: 0;\n  padding: 0;\n  font-family: sans-serif;\n}}\n"
        ),
        _ => format!("// {name}\n// Start coding here...\n"),
    }
}

pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/language.rs"]
mod tests;
