//! State for the code editor page.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use crate::net::types::DiffResult;

/// Placeholder buffer for a fresh editor.
pub const DEFAULT_SNIPPET: &str = "// Write your code here...";

/// Languages the backend formatter/linter understands, as `(key, label)`.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("javascript", "JavaScript"),
    ("typescript", "TypeScript"),
    ("python", "Python"),
    ("java", "Java"),
    ("cpp", "C++"),
    ("csharp", "C#"),
    ("php", "PHP"),
    ("ruby", "Ruby"),
    ("go", "Go"),
    ("rust", "Rust"),
    ("html", "HTML"),
    ("css", "CSS"),
    ("json", "JSON"),
    ("markdown", "Markdown"),
    ("sql", "SQL"),
];

/// Editor color themes, as `(key, label)`.
pub const THEMES: &[(&str, &str)] = &[
    ("vs-dark", "Dark"),
    ("light", "Light"),
    ("hc-black", "High Contrast"),
];

/// Buffer plus the backend-derived annotations shown around it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorState {
    pub code: String,
    pub original_code: String,
    pub language: String,
    pub theme: String,
    pub lint_errors: Vec<String>,
    pub diff: Option<DiffResult>,
    pub show_diff: bool,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            code: DEFAULT_SNIPPET.to_owned(),
            original_code: String::new(),
            language: "javascript".to_owned(),
            theme: "vs-dark".to_owned(),
            lint_errors: Vec::new(),
            diff: None,
            show_diff: false,
        }
    }
}

impl EditorState {
    /// Switching languages invalidates previous lint output.
    pub fn set_language(&mut self, language: &str) {
        self.language = language.to_owned();
        self.lint_errors.clear();
    }

    /// Snapshot the current buffer for later diffing.
    pub fn save_as_original(&mut self) {
        self.original_code = self.code.clone();
    }

    /// True once an original snapshot exists to diff against.
    pub fn can_diff(&self) -> bool {
        !self.original_code.trim().is_empty()
    }

    pub fn apply_diff(&mut self, diff: DiffResult) {
        self.diff = Some(diff);
        self.show_diff = true;
    }

    /// Clear the buffer and all derived annotations; language and theme
    /// selections survive.
    pub fn reset(&mut self) {
        self.code = DEFAULT_SNIPPET.to_owned();
        self.lint_errors.clear();
        self.diff = None;
        self.show_diff = false;
    }
}
