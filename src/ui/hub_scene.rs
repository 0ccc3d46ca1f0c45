//! The arcade hub screen: filter bar, catalog list, detail panel.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::hub::HubState;

pub fn render(frame: &mut Frame, area: Rect, hub: &HubState, notice: Option<&str>) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Jelly Arcade ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tagline
            Constraint::Length(1), // filter bar
            Constraint::Min(6),    // list + detail
            Constraint::Length(1), // notice
            Constraint::Length(1), // key legend
        ])
        .split(inner);

    let tagline = Paragraph::new("Learn through play!")
        .style(Style::default().fg(Color::LightMagenta))
        .alignment(Alignment::Center);
    frame.render_widget(tagline, rows[0]);

    render_filter_bar(frame, rows[1], hub);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[2]);
    render_catalog_list(frame, columns[0], hub);
    render_detail_panel(frame, columns[1], hub);

    if let Some(text) = notice {
        let line = Paragraph::new(text)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        frame.render_widget(line, rows[3]);
    }

    let legend = Paragraph::new(Line::from(vec![
        Span::styled("↑↓", Style::default().fg(Color::White)),
        Span::styled(" pick  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::White)),
        Span::styled(" play  ", Style::default().fg(Color::DarkGray)),
        Span::styled("←→", Style::default().fg(Color::White)),
        Span::styled(" age  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Tab", Style::default().fg(Color::White)),
        Span::styled(" subject  ", Style::default().fg(Color::DarkGray)),
        Span::styled("type", Style::default().fg(Color::White)),
        Span::styled(" search  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::White)),
        Span::styled(" clear/quit", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(legend, rows[4]);
}

fn render_filter_bar(frame: &mut Frame, area: Rect, hub: &HubState) {
    let subject = hub.discipline.map_or("All Subjects", |d| d.name());
    let search = if hub.query.is_empty() {
        "(type to search)".to_string()
    } else {
        format!("\"{}\"", hub.query)
    };
    let bar = Paragraph::new(Line::from(vec![
        Span::styled("Age: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{}", hub.age),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("Subject: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            subject,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("Search: ", Style::default().fg(Color::DarkGray)),
        Span::styled(search, Style::default().fg(Color::Cyan)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(bar, area);
}

fn render_catalog_list(frame: &mut Frame, area: Rect, hub: &HubState) {
    let entries = hub.filtered();
    let block = Block::default()
        .title(format!(" Games ({}) ", entries.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));

    if entries.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let empty = Paragraph::new("No games match - try another filter!")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(empty, inner);
        return;
    }

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let marker = if entry.playable { "▶ " } else { "· " };
            let style = if entry.playable {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(entry.title, style),
                Span::styled(
                    format!("  [{}]", entry.discipline.name()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::Magenta)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("➤ ");
    let mut state = ListState::default();
    state.select(Some(hub.selected.min(entries.len() - 1)));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_detail_panel(frame: &mut Frame, area: Rect, hub: &HubState) {
    let block = Block::default()
        .title(" About ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(entry) = hub.selected_entry() else {
        return;
    };

    let status = if entry.playable {
        Span::styled("Ready to play!", Style::default().fg(Color::Green))
    } else {
        Span::styled("Coming soon", Style::default().fg(Color::Yellow))
    };
    let text = vec![
        Line::from(Span::styled(
            entry.title,
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} · ages {}-{}", entry.discipline.name(), entry.min_age, entry.max_age),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(entry.description),
        Line::from(""),
        Line::from(status),
    ];
    let detail = Paragraph::new(text).wrap(Wrap { trim: true });
    frame.render_widget(detail, inner);
}
