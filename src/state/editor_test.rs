use super::*;

#[test]
fn fresh_editor_defaults() {
    let editor = EditorState::default();
    assert_eq!(editor.code, DEFAULT_SNIPPET);
    assert_eq!(editor.language, "javascript");
    assert_eq!(editor.theme, "vs-dark");
    assert!(editor.lint_errors.is_empty());
    assert!(editor.diff.is_none());
    assert!(!editor.can_diff());
}

#[test]
fn language_change_clears_stale_lint_output() {
    let mut editor = EditorState::default();
    editor.lint_errors = vec!["missing semicolon".to_owned()];
    editor.set_language("python");
    assert_eq!(editor.language, "python");
    assert!(editor.lint_errors.is_empty());
}

#[test]
fn diff_requires_a_saved_original() {
    let mut editor = EditorState::default();
    assert!(!editor.can_diff());

    editor.code = "fn main() {}".to_owned();
    editor.save_as_original();
    assert!(editor.can_diff());
    assert_eq!(editor.original_code, "fn main() {}");
}

#[test]
fn apply_diff_shows_the_panel() {
    let mut editor = EditorState::default();
    editor.apply_diff(DiffResult {
        additions: 2,
        deletions: 1,
        changes: vec!["line 3 changed".to_owned()],
    });
    assert!(editor.show_diff);
    assert_eq!(editor.diff.as_ref().map(|d| d.additions), Some(2));
}

#[test]
fn reset_keeps_language_and_theme() {
    let mut editor = EditorState::default();
    editor.code = "print('x')".to_owned();
    editor.set_language("python");
    editor.theme = "light".to_owned();
    editor.lint_errors = vec!["oops".to_owned()];
    editor.apply_diff(DiffResult::default());

    editor.reset();
    assert_eq!(editor.code, DEFAULT_SNIPPET);
    assert_eq!(editor.language, "python");
    assert_eq!(editor.theme, "light");
    assert!(editor.lint_errors.is_empty());
    assert!(editor.diff.is_none());
    assert!(!editor.show_diff);
}
