use crate::app::{App, Mode};
use crate::form::{FormField, FormState};
use crate::theme::*;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use taskboard_domain::Status;

const BOARD_HELP: &str =
    " ←/→: column  ↑/↓: select  Enter: move forward  Del: delete  n: new  r: reload  q: quit";
const FORM_HELP: &str = " Enter: next field / create  Alt+Enter: newline  Esc: back to board";

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(frame.area());

    match &app.mode {
        Mode::Board => render_board(app, frame, chunks[0]),
        Mode::Form(form) => render_form(form, frame, chunks[0]),
    }
    render_footer(app, frame, chunks[1]);
}

fn render_board(app: &App, frame: &mut Frame, area: Rect) {
    if !app.board.loaded {
        frame.render_widget(Paragraph::new("Loading..."), area);
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for (i, status) in Status::ALL.into_iter().enumerate() {
        let column = app.board.column(status);
        let focused = app.board.focus == status;

        let items: Vec<ListItem> = column
            .tasks()
            .iter()
            .map(|task| {
                let mut lines = vec![Line::styled(task.title.clone(), normal_text())];
                if !task.description.is_empty() {
                    // Only the first description line fits the card.
                    let summary = task.description.lines().next().unwrap_or_default();
                    lines.push(Line::styled(summary.to_string(), label_text()));
                }
                ListItem::new(lines)
            })
            .collect();

        let border = if focused {
            focused_border()
        } else {
            unfocused_border()
        };
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(format!(" {} ({}) ", status.title(), column.len())),
            )
            .highlight_style(selected_item(focused));

        let mut state = ListState::default();
        state.select(column.selected_index());
        frame.render_stateful_widget(list, columns[i], &mut state);
    }
}

fn render_form(form: &FormState, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    let title_active = form.active == FormField::Title;
    let field_border = |active: bool| {
        if active {
            focused_border()
        } else {
            unfocused_border()
        }
    };

    let title = Paragraph::new(form.title.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(field_border(title_active))
            .title(format!(" Title (new task in {}) ", form.target.title())),
    );
    frame.render_widget(title, chunks[0]);

    let description = Paragraph::new(form.description.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(field_border(!title_active))
            .title(" Description "),
    );
    frame.render_widget(description, chunks[1]);

    let field_area = if title_active { chunks[0] } else { chunks[1] };
    let (line, col) = form.active_input().cursor_line_col();
    // Clamp to the field interior so oversized input cannot misplace the
    // cursor outside the border.
    let col = u16::try_from(col)
        .unwrap_or(u16::MAX)
        .min(field_area.width.saturating_sub(2));
    let line = u16::try_from(line)
        .unwrap_or(u16::MAX)
        .min(field_area.height.saturating_sub(2));
    frame.set_cursor_position((field_area.x + 1 + col, field_area.y + 1 + line));
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let line = match (&app.notice, &app.mode) {
        (Some(notice), _) => Line::from(Span::styled(format!(" {}", notice), error_text())),
        (None, Mode::Board) => Line::from(Span::styled(BOARD_HELP, label_text())),
        (None, Mode::Form(_)) => Line::from(Span::styled(FORM_HELP, label_text())),
    };
    let footer = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
