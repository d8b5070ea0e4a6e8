/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    /// Editor modal is open (create or edit, depending on the editor state)
    Editing,
}

/// Which editor field currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    Title,
    Description,
    Category,
}

impl EditorField {
    /// Cycle focus: title -> description -> category -> title
    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Category,
            Self::Category => Self::Title,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Category => "Category",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_field_cycle() {
        assert_eq!(EditorField::Title.next(), EditorField::Description);
        assert_eq!(EditorField::Description.next(), EditorField::Category);
        assert_eq!(EditorField::Category.next(), EditorField::Title);
    }

    #[test]
    fn test_editor_field_labels() {
        assert_eq!(EditorField::Title.label(), "Title");
        assert_eq!(EditorField::Description.label(), "Description");
        assert_eq!(EditorField::Category.label(), "Category");
    }
}
