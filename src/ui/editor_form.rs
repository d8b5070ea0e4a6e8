use crate::app::AppState;
use crate::domain::EditorField;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the editor modal for creating or editing a task
pub fn render_editor_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(editor) = &app.editor {
        let modal_area = create_modal_area(area);

        // Clear the area behind the form
        f.render_widget(Clear, modal_area);

        let title_text = if editor.editing_task_id.is_some() {
            " Edit Task "
        } else {
            " Add Task "
        };

        let mut lines = Vec::new();
        lines.push(Line::raw(""));

        let fields = [
            (EditorField::Title, &editor.draft.title),
            (EditorField::Description, &editor.draft.description),
            (EditorField::Category, &editor.draft.category),
        ];

        for (field, value) in fields {
            let focused = editor.field == field;
            let label = if focused {
                format!("{}: (editing)", field.label())
            } else {
                format!("{}:", field.label())
            };
            lines.push(Line::raw(label));

            let field_line = Line::from(vec![
                Span::raw("> "),
                Span::styled(value.clone(), modal_title_style()),
                if focused {
                    Span::styled("█", modal_title_style()) // Cursor
                } else {
                    Span::raw("")
                },
            ]);
            lines.push(field_line);
            lines.push(Line::raw(""));
        }

        // Instructions
        lines.push(Line::raw("Tab to switch fields  ·  Enter to save  ·  Esc to cancel"));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(title_text, modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
