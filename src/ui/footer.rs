use crate::ui::app::{Notice, NoticeKind};
use crate::ui::section::Section;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints for the focused section, or the current notice.
pub struct Footer<'a> {
    section: Section,
    notice: Option<&'a Notice>,
}

impl<'a> Footer<'a> {
    pub fn new(section: Section, notice: Option<&'a Notice>) -> Self {
        Self { section, notice }
    }

    fn hints(&self) -> &'static str {
        match self.section {
            Section::Cotizador => {
                " ↑↓: Campo │ ←→: Opción │ Enter: Siguiente │ Esc: Volver │ Tab: Sección │ Ctrl+Q: Salir"
            }
            Section::Isapres => " ←→: Página │ 1-9: Ir a │ Arrastrar: Deslizar │ Tab: Sección │ Ctrl+Q: Salir",
            Section::Noticias => {
                " ←→: Página │ ↑↓: Noticia │ Enter: Copiar enlace │ Tab: Sección │ Ctrl+Q: Salir"
            }
            Section::Agenda => " Enter: Copiar enlace de agenda │ Tab: Sección │ Ctrl+Q: Salir",
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let (text, text_style) = match self.notice {
            Some(notice) => {
                let color = match notice.kind {
                    NoticeKind::Info => STATUS_OK,
                    NoticeKind::Error => STATUS_ERROR,
                };
                (format!(" {}", notice.text), Style::default().fg(color))
            }
            None => (
                self.hints().to_string(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
            ),
        };
        let version = format!("v{} ", VERSION);

        // Char count, not byte count.
        let text_width = text.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(text_width)
            .saturating_sub(version_width);

        let version_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::styled(text, text_style),
            Span::styled(" ".repeat(padding), version_style),
            Span::styled(version, version_style),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
