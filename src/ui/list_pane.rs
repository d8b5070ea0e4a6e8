use crate::app::AppState;
use crate::domain::{checkbox_glyph, Task};
use crate::ui::styles::{
    border_style, category_style, completed_style, default_style, description_style, done_style,
    selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the task list pane
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let items: Vec<ListItem> = app
        .tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let line = create_task_line(task);
            let style = if idx == app.selected_index {
                selected_style()
            } else {
                default_style()
            };

            ListItem::new(line).style(style)
        })
        .collect();

    let title = format!(" Tasks ({}) ", app.tasks.len());

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}

/// Create a single line for a task
/// Format: [x] Buy milk  — 2%  [errand]
fn create_task_line(task: &Task) -> Line<'static> {
    let mut spans = Vec::new();

    // Checkbox glyph
    let checkbox = checkbox_glyph(task.completed);
    let checkbox_style = if task.completed {
        done_style()
    } else {
        default_style()
    };
    spans.push(Span::styled(format!("{} ", checkbox), checkbox_style));

    // Title (struck through when completed)
    if task.completed {
        spans.push(Span::styled(task.title.clone(), completed_style()));
    } else {
        spans.push(Span::raw(task.title.clone()));
    }

    // Description snippet
    if !task.description.is_empty() {
        spans.push(Span::styled(
            format!("  — {}", task.description),
            description_style(),
        ));
    }

    // Category badge
    if !task.category.is_empty() {
        spans.push(Span::raw(" ".to_string()));
        spans.push(Span::styled(format!("[{}]", task.category), category_style()));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskDraft;

    #[test]
    fn test_create_task_line() {
        let task = Task::new(TaskDraft {
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
            category: "errand".to_string(),
        });
        let line = create_task_line(&task);

        let line_str = format!("{:?}", line);
        assert!(line_str.contains("Buy milk"));
        assert!(line_str.contains("2%"));
        assert!(line_str.contains("[errand]"));
        assert!(line_str.contains("[ ]"));
    }

    #[test]
    fn test_create_completed_task_line() {
        let mut task = Task::new(TaskDraft {
            title: "Done thing".to_string(),
            description: String::new(),
            category: String::new(),
        });
        task.toggle_complete();
        let line = create_task_line(&task);

        let line_str = format!("{:?}", line);
        assert!(line_str.contains("Done thing"));
        assert!(line_str.contains("[x]"));
    }
}
