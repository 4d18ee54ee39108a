use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Popup};
use crate::packing::NEED_TO_PACK_SUFFIX;
use crate::theme::Theme;
use crate::view::Node;

pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();

    let footer_height = if app.config.show_footer { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),                // Packing list box
            Constraint::Length(footer_height), // Footer
        ])
        .split(area);

    draw_list_box(f, app, chunks[0]);
    if app.config.show_footer {
        draw_footer(f, app, chunks[1]);
    }

    match app.popup {
        Popup::None => {}
        Popup::Help => draw_help_popup(f, &app.theme),
    }
}

fn draw_list_box(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let items = app.tree.list_items();
    let packed = items
        .iter()
        .filter(|n| matches!(n, Node::ListItem { packed: true, .. }))
        .count();
    let tally_color = if packed == items.len() { theme.success } else { theme.warning };

    let block = Block::default()
        .title(Span::styled(
            " packing-list ",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ))
        .title_bottom(
            Line::from(Span::styled(
                format!(" {}/{} packed ", packed, items.len()),
                Style::default().fg(tally_color),
            ))
            .alignment(Alignment::Right),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent));

    let content = Paragraph::new(tree_lines(&app.tree, theme, &app.config.bullet))
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(content, area);
}

/// Lines for a display tree: headings bold, list entries behind `bullet`
/// in the packed or pending colour
pub fn tree_lines(node: &Node, theme: &Theme, bullet: &str) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    push_lines(node, theme, bullet, &mut lines);
    lines
}

fn push_lines(node: &Node, theme: &Theme, bullet: &str, lines: &mut Vec<Line<'static>>) {
    match node {
        Node::Heading { text, .. } => {
            lines.push(Line::from(Span::styled(
                format!(" {}", text),
                Style::default().fg(theme.header).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
        }
        Node::ListItem { text, packed, .. } => {
            lines.push(item_line(text, *packed, theme, bullet));
        }
        Node::Section { children } | Node::List { children } => {
            for child in children {
                push_lines(child, theme, bullet, lines);
            }
        }
    }
}

fn item_line(text: &str, packed: bool, theme: &Theme, bullet: &str) -> Line<'static> {
    if packed {
        return Line::from(vec![
            Span::styled(format!("   {} ", bullet), Style::default().fg(theme.success)),
            Span::styled(text.to_string(), Style::default().fg(theme.text)),
        ]);
    }

    // Dim the suffix so the name stands out
    let (name, suffix) = match text.strip_suffix(NEED_TO_PACK_SUFFIX) {
        Some(name) => (name, NEED_TO_PACK_SUFFIX),
        None => (text, ""),
    };

    Line::from(vec![
        Span::styled(format!("   {} ", bullet), Style::default().fg(theme.warning)),
        Span::styled(name.to_string(), Style::default().fg(theme.warning)),
        Span::styled(suffix.to_string(), Style::default().fg(theme.text_dim)),
    ])
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    if let Some(ref status) = app.status_message {
        let line = Line::from(Span::styled(status.clone(), Style::default().fg(theme.warning)));
        f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
        return;
    }

    let hints = [("r", "Re-render"), ("?", "Help"), ("q", "Quit")];

    let hint_spans: Vec<Span> = hints
        .iter()
        .enumerate()
        .flat_map(|(i, (key, action))| {
            let sep = if i + 1 < hints.len() { " │ " } else { "" };
            vec![
                Span::styled(*key, Style::default().fg(theme.accent)),
                Span::styled(format!(" {}", action), Style::default().fg(theme.text_dim)),
                Span::styled(sep, Style::default().fg(theme.inactive)),
            ]
        })
        .collect();

    let footer = Paragraph::new(Line::from(hint_spans)).alignment(Alignment::Center);
    f.render_widget(footer, area);
}

fn draw_help_popup(f: &mut Frame, theme: &Theme) {
    let popup_area = centered_rect(60, 60, f.area());

    f.render_widget(Clear, popup_area);

    let key_line = |key: &'static str, action: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<8}", key), Style::default().fg(theme.accent)),
            Span::styled(action, Style::default().fg(theme.text)),
        ])
    };

    let help_text = vec![
        Line::from(""),
        key_line("r", "Render the list again"),
        key_line("h / ?", "Toggle this help"),
        key_line("q / Esc", "Quit"),
        key_line("Ctrl-C", "Quit from anywhere"),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Entries still to pack are marked ", Style::default().fg(theme.text_dim)),
            Span::styled(NEED_TO_PACK_SUFFIX, Style::default().fg(theme.warning)),
        ]),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(Span::styled(" 󰋖 Help ", Style::default().fg(theme.accent)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::packing::packing_list;
    use ratatui::{backend::TestBackend, Terminal};

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn screen(app: &App, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    #[test]
    fn lines_follow_tree_order() {
        let theme = Theme::default();
        let lines = tree_lines(&packing_list(), &theme, "•");
        let texts: Vec<String> = lines.iter().map(line_text).collect();

        assert_eq!(
            texts,
            vec![
                " My Packing List",
                "",
                "   • Passport",
                "   • Socks",
                "   • Charger (need to pack)",
            ]
        );
    }

    #[test]
    fn heading_is_bold() {
        let theme = Theme::default();
        let lines = tree_lines(&packing_list(), &theme, "•");
        let heading = &lines[0].spans[0];

        assert_eq!(heading.style.fg, Some(theme.header));
        assert!(heading.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn pending_entry_dims_suffix() {
        let theme = Theme::default();
        let line = item_line("Charger (need to pack)", false, &theme, "-");

        assert_eq!(line.spans[1].content, "Charger ");
        assert_eq!(line.spans[1].style.fg, Some(theme.warning));
        assert_eq!(line.spans[2].content, NEED_TO_PACK_SUFFIX);
        assert_eq!(line.spans[2].style.fg, Some(theme.text_dim));
    }

    #[test]
    fn packed_entry_uses_success_bullet() {
        let theme = Theme::default();
        let line = item_line("Socks", true, &theme, "*");

        assert_eq!(line_text(&line), "   * Socks");
        assert_eq!(line.spans[0].style.fg, Some(theme.success));
    }

    #[test]
    fn draws_list_and_footer() {
        let app = App::new(AppConfig::default());
        let rows = screen(&app, 50, 12);
        let all = rows.join("\n");

        assert!(all.contains("My Packing List"));
        assert!(all.contains("• Passport"));
        assert!(all.contains("• Socks"));
        assert!(all.contains("• Charger (need to pack)"));
        assert!(all.contains("2/3 packed"));
        assert!(rows[11].contains("Quit"));

        let passport = rows.iter().position(|r| r.contains("Passport")).unwrap();
        let charger = rows.iter().position(|r| r.contains("Charger")).unwrap();
        assert!(passport < charger);
    }

    #[test]
    fn footer_can_be_hidden() {
        let config = AppConfig {
            show_footer: false,
            ..AppConfig::default()
        };
        let app = App::new(config);
        let rows = screen(&app, 50, 12);

        assert!(!rows.join("\n").contains("Quit"));
    }

    #[test]
    fn drawing_does_not_touch_the_tree() {
        let app = App::new(AppConfig::default());
        let before = app.tree.clone();
        let first = screen(&app, 40, 10);
        let second = screen(&app, 40, 10);

        assert_eq!(first, second);
        assert_eq!(app.tree, before);
    }
}
