//! Action-link labels.
//!
//! Each action has an enabled label (rendered inside the anchor) and a
//! disabled label (rendered in place of it when a privilege check says
//! no). Callers may supply their own markup; `Default` gives the
//! standard icon set.

/// Pre-rendered labels for the per-item action links.
#[derive(Debug, Clone)]
pub struct TitleSet {
    pub edit: String,
    pub no_edit: String,
    pub execute: String,
    pub no_execute: String,
    pub export: String,
    pub no_export: String,
    pub drop: String,
    pub no_drop: String,
}

impl Default for TitleSet {
    fn default() -> Self {
        Self {
            edit: action_label("pen", "Edit"),
            no_edit: disabled_label("pen", "Edit"),
            execute: action_label("play", "Execute"),
            no_execute: disabled_label("play", "Execute"),
            export: action_label("file-export", "Export"),
            no_export: disabled_label("file-export", "Export"),
            drop: action_label("trash", "Drop"),
            no_drop: disabled_label("trash", "Drop"),
        }
    }
}

fn action_label(icon: &str, text: &str) -> String {
    format!(r#"<i class="fas fa-{icon}"></i> {text}"#)
}

fn disabled_label(icon: &str, text: &str) -> String {
    format!(r#"<span class="action-disabled text-gray-400"><i class="fas fa-{icon}"></i> {text}</span>"#)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_labels_are_marked() {
        let titles = TitleSet::default();
        assert!(titles.no_drop.contains("action-disabled"));
        assert!(!titles.drop.contains("action-disabled"));
    }
}
