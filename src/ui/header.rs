use crate::ui::section::Section;
use crate::ui::theme::{BRAND_ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Brand plus the section menu, with the focused section highlighted.
pub struct Header {
    active: Section,
}

impl Header {
    pub fn new(active: Section) -> Self {
        Self { active }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let active_style = Style::default()
            .fg(BRAND_ACCENT)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

        let mut spans = vec![
            Span::styled(
                "  Desde Tu 7%",
                text_style.add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
        ];
        for (idx, section) in Section::ALL.into_iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled("   ", text_style));
            }
            let style = if section == self.active {
                active_style
            } else {
                text_style
            };
            spans.push(Span::styled(section.menu_label(), style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
