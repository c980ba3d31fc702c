use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use super::layout::AppLayout;
use crate::matcher::{MatcherState, SuggestBox};
use crate::models::RankedMatch;

const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const ACCENT: Color = Color::Rgb(16, 185, 129);
const BAR_BG: Color = Color::Rgb(24, 24, 27);

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, suggest: &SuggestBox, catalog_size: usize) {
    let layout = AppLayout::new(frame.area());

    render_input(frame, layout.input_area, suggest.input());
    if suggest.is_open() {
        render_suggestions(frame, layout.suggestions_area, suggest.results(), suggest.cursor());
    }
    render_status_bar(frame, layout.status_area, suggest, catalog_size);
}

fn render_input(frame: &mut Frame, area: Rect, input: &str) {
    let paragraph = Paragraph::new(Line::from(vec![
        Span::raw(input.to_string()),
        Span::styled("▏", Style::default().fg(ACCENT)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED))
            .title(" Your guess "),
    );

    frame.render_widget(paragraph, area);
}

fn render_suggestions(frame: &mut Frame, area: Rect, ranked: &[RankedMatch], cursor: usize) {
    let items: Vec<ListItem> = ranked
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let content = Line::from(vec![
                Span::raw(item.text.clone()),
                Span::styled(
                    format!("  {} • ID:{}", item.kind.label(), item.id),
                    Style::default().fg(MUTED),
                ),
            ]);

            let style = if idx == cursor {
                Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            ListItem::new(content).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED))
            .title(" Suggestions "),
    );

    frame.render_widget(list, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, suggest: &SuggestBox, catalog_size: usize) {
    let text = status_text(suggest, catalog_size);
    let paragraph = Paragraph::new(text).style(Style::default().fg(BRIGHT).bg(BAR_BG));
    frame.render_widget(paragraph, area);
}

fn status_text(suggest: &SuggestBox, catalog_size: usize) -> String {
    let state = match suggest.state() {
        MatcherState::Idle => format!("{} titles", catalog_size),
        MatcherState::Debouncing => "searching…".to_string(),
        MatcherState::Open => {
            format!("match {}/{}", suggest.cursor() + 1, suggest.results().len())
        }
        MatcherState::Closed if suggest.input().trim().is_empty() => "type a title".to_string(),
        MatcherState::Closed => "no matches".to_string(),
    };
    format!(" {} | ↑/↓: move | Enter: guess | Esc: close | Ctrl+C: quit ", state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use super::*;
    use crate::models::CatalogRecord;
    use crate::search::CatalogIndex;

    fn suggest_box() -> SuggestBox {
        let index = CatalogIndex::build(vec![CatalogRecord {
            id: 1,
            romaji: "Cowboy Bebop".to_string(),
            english: String::new(),
        }]);
        SuggestBox::new(Arc::new(index))
    }

    #[test]
    fn test_status_text_states() {
        let t0 = Instant::now();
        let mut sb = suggest_box();
        assert!(status_text(&sb, 1).starts_with(" 1 titles"));

        sb.push_char('c', t0);
        assert!(status_text(&sb, 1).contains("searching"));

        sb.tick(t0 + Duration::from_millis(100));
        assert!(status_text(&sb, 1).contains("match 1/1"));

        sb.set_input("zzz", t0);
        sb.tick(t0 + Duration::from_millis(200));
        assert!(status_text(&sb, 1).contains("no matches"));
    }
}
