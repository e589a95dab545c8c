use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

const LOGO: &str = r#"
 ____       _      ___     _     _
|  _ \ ___ | |_   / _ \ __| | __| |___
| |_) / _ \| __| | | | / _` |/ _` / __|
|  __/ (_) | |_  | |_| | (_| | (_| \__ \
|_|   \___/ \__|  \___/ \__,_|\__,_|___/
"#;

pub(super) fn draw_menu(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let area = centered_rect(80, 80, size);
    let block = Block::default().title("pot-odds").borders(Borders::ALL);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    let inner_all = inner(area);

    let logo_lines: Vec<Line> = LOGO
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::Green))))
        .collect();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(logo_lines.len() as u16 + 1), Constraint::Min(3)])
        .split(inner_all);

    let logo_para =
        Paragraph::new(logo_lines).wrap(Wrap { trim: false }).alignment(Alignment::Center);
    f.render_widget(logo_para, rows[0]);

    let mut lines: Vec<Line> = vec![
        Line::from("You are behind on the turn and your opponent is all in."),
        Line::from("Call or fold by comparing pot odds with your odds of hitting an out."),
        Line::from(""),
        Line::from(Span::styled("Puzzle settings:", Style::default().add_modifier(Modifier::BOLD))),
    ];
    for (i, it) in app.menu_items_display().into_iter().enumerate() {
        let style = if i == app.menu_index {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(it, style)));
    }
    lines.push(Line::from(""));
    if app.answered > 0 {
        lines.push(Line::from(format!("Score: {}/{}", app.correct, app.answered)));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "[Enter] Deal  [Q] Quit  [Esc] Back  [↑/↓] Move  [+/-] Adjust",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let para = Paragraph::new(lines).wrap(Wrap { trim: true }).alignment(Alignment::Center);
    f.render_widget(para, rows[1]);
}
