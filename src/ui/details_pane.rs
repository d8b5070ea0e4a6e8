use crate::app::AppState;
use crate::ui::styles::{border_style, default_style, done_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the details pane for the selected task
pub fn render_details_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(task) = app.selected_task() else {
        let empty = Paragraph::new("No task selected").block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" Details ", title_style())),
        );
        f.render_widget(empty, area);
        return;
    };

    let mut lines = Vec::new();

    lines.push(Line::from(vec![
        Span::styled("Title: ", title_style()),
        Span::raw(task.title.clone()),
    ]));
    lines.push(Line::raw(""));

    lines.push(Line::from(vec![
        Span::styled("Category: ", title_style()),
        if task.category.is_empty() {
            Span::styled("(none)", default_style())
        } else {
            Span::raw(task.category.clone())
        },
    ]));

    let status = if task.completed { "Done" } else { "Open" };
    let status_style = if task.completed {
        done_style()
    } else {
        default_style()
    };
    lines.push(Line::from(vec![
        Span::styled("Status: ", title_style()),
        Span::styled(status, status_style),
    ]));
    lines.push(Line::raw(""));

    if !task.description.trim().is_empty() {
        lines.push(Line::from(Span::styled("Description:", title_style())));
        for desc_line in task.description.lines() {
            lines.push(Line::raw(format!("  {}", desc_line)));
        }
    } else {
        lines.push(Line::from(Span::styled(
            "Description: (empty)",
            default_style(),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" Details ", title_style())),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
