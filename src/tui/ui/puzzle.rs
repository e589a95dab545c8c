use crate::cards::{pretty_list, Card, Suit};
use crate::evaluator::HandValue;
use crate::odds::Verdict;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, columns, inner};

const CARD_WIDTH: u16 = 7;

pub(super) fn draw_puzzle(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // header
            Constraint::Length(5), // opponent
            Constraint::Length(5), // board
            Constraint::Length(5), // player
            Constraint::Min(4),    // results
            Constraint::Length(4), // status bar
        ])
        .split(size);

    let puzzle = &app.puzzle;
    let header_lines = vec![
        Line::from(vec![
            Span::styled(format!("Pot: ${}", puzzle.pot), Style::default().fg(Color::Yellow)),
            Span::raw("   "),
            Span::styled(
                format!("Opponent all in for ${}", puzzle.bet),
                Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Score: {}/{}", app.correct, app.answered)),
    ];
    let header = Paragraph::new(header_lines)
        .block(Block::default().title("pot-odds").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    draw_hand_row(
        f,
        chunks[1],
        "Opponent",
        &puzzle.opponent.as_array(),
        puzzle.opponent_value,
        Color::LightRed,
    );

    let board_block = Block::default().title("Board: turn").borders(Borders::ALL);
    let board_inner = inner(chunks[2]);
    f.render_widget(board_block, chunks[2]);
    let slots = columns(board_inner, 5, CARD_WIDTH);
    let board = puzzle.board.as_slice();
    for (i, slot) in slots.iter().enumerate() {
        // the river slot stays empty
        render_card_widget(f, *slot, board.get(i).copied(), None);
    }

    draw_hand_row(
        f,
        chunks[3],
        "You",
        &puzzle.player.as_array(),
        puzzle.player_value,
        Color::Cyan,
    );

    match &app.verdict {
        Some(v) => draw_results(f, chunks[4], v),
        None => {
            let lines = vec![
                Line::from("Are you getting the right price to call?"),
                Line::from(""),
                Line::from(Span::styled(
                    puzzle.prompt(),
                    Style::default().add_modifier(Modifier::DIM),
                )),
            ];
            let para = Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(Block::default().title("Decision").borders(Borders::ALL));
            f.render_widget(para, chunks[4]);
        }
    }

    let status_area = chunks[5];
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), status_area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner(status_area));

    let action_style = |enabled: bool| {
        if enabled {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        }
    };
    let pending = app.verdict.is_none();
    let mut left = vec![Line::from(vec![
        Span::raw("Actions: "),
        Span::styled("C call", action_style(pending)),
        Span::raw(" • "),
        Span::styled("F fold", action_style(pending)),
        Span::raw(" • "),
        Span::styled("O outs", action_style(!pending)),
        Span::raw(" • "),
        Span::raw("N next"),
    ])];
    if let Some(err) = app.error() {
        left.push(Line::from(Span::styled(err.to_string(), Style::default().fg(Color::Red))));
    }
    let right = vec![Line::from("? help • M menu • Q quit")];
    f.render_widget(Paragraph::new(left).wrap(Wrap { trim: true }), cols[0]);
    f.render_widget(
        Paragraph::new(right).wrap(Wrap { trim: true }).alignment(Alignment::Right),
        cols[1],
    );

    if app.help_open() {
        draw_help(f);
    } else if app.outs_open() {
        draw_outs(f, app);
    }
}

fn draw_hand_row(
    f: &mut Frame,
    area: Rect,
    who: &str,
    cards: &[Card; 2],
    value: HandValue,
    color: Color,
) {
    let block = Block::default()
        .title(format!("{who}: {}", value.describe()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let row = inner(area);
    f.render_widget(block, area);
    let slots = columns(row, 2, CARD_WIDTH);
    for (slot, card) in slots.iter().zip(cards) {
        render_card_widget(f, *slot, Some(*card), Some(color));
    }
}

fn draw_results(f: &mut Frame, area: Rect, v: &Verdict) {
    let (title, color) = if v.is_correct() {
        ("Correct!", Color::Green)
    } else {
        ("Not quite", Color::Red)
    };
    let lines = vec![
        Line::from(Span::styled(
            format!("You chose {}; the right play is {}.", v.user, v.correct),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Pot odds: {:.1}% ({:.2}:1)", v.pot_odds, v.pot_odds_ratio)),
        Line::from(format!("Odds against: {:.1}% ({} outs)", v.odds_against, v.outs)),
        Line::from(""),
        Line::from(v.reasoning()),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );
    f.render_widget(para, area);
}

fn draw_outs(f: &mut Frame, app: &AppState) {
    let area = centered_rect(60, 50, f.area());
    let outs = &app.puzzle.outs;
    let block = Block::default().title(format!("Outs ({})", outs.count())).borders(Borders::ALL);
    let mut lines: Vec<Line> = Vec::new();
    if outs.is_empty() {
        lines.push(Line::from("No river card wins this hand."));
    } else {
        for suit in Suit::ALL {
            let cards: Vec<Card> =
                outs.cards().iter().copied().filter(|c| c.suit() == suit).collect();
            if !cards.is_empty() {
                let (_, style) = suit_glyph_and_style(suit);
                lines.push(Line::from(Span::styled(pretty_list(&cards), style)));
            }
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Close: O or Esc",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Puzzle:", bold)),
        Line::from("- C: call the all-in"),
        Line::from("- F: fold"),
        Line::from("- N / Space: next puzzle"),
        Line::from("- O: show outs (after deciding)"),
        Line::from(""),
        Line::from(Span::styled("The math:", bold)),
        Line::from("- Pot odds = bet / (pot + 2 × bet)"),
        Line::from("- Odds against = outs / 44 unseen cards"),
        Line::from("- Call when odds against beat pot odds"),
        Line::from("- A river that only ties is not an out"),
        Line::from(""),
        Line::from(Span::styled("Menu:", bold)),
        Line::from("- M: open / close menu"),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: adjust value"),
        Line::from("- Enter: apply and deal"),
        Line::from("- Esc: cancel"),
        Line::from("- Q: quit"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn suit_glyph_and_style(s: Suit) -> (char, Style) {
    let style = if s.is_red() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::White)
    };
    (s.glyph(), style)
}

fn render_card_widget(f: &mut Frame, area: Rect, card: Option<Card>, border: Option<Color>) {
    let mut block = Block::default().borders(Borders::ALL).title_alignment(Alignment::Center);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    let inner = inner(area);
    f.render_widget(block, area);
    let content = match card {
        Some(c) => {
            let (sg, style) = suit_glyph_and_style(c.suit());
            Line::from(Span::styled(format!("{}{}", c.rank().label(), sg), style))
        }
        None => Line::from(Span::styled("?", Style::default().add_modifier(Modifier::DIM))),
    };
    f.render_widget(Paragraph::new(content).alignment(Alignment::Center), inner);
}
