use crate::catalog::{NewsItem, Provider};
use crate::form::{FieldKind, FieldSpec};
use crate::ui::app::App;
use crate::ui::carousel::CarouselState;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, grid, layout_regions};
use crate::ui::section::Section;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BRAND_ACCENT, BRAND_BLUE, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT,
    STATUS_ERROR, STATUS_OK, STATUS_PENDING,
};
use crate::ui::wizard::{DeliveryStatus, WizardState};
use ratatui::layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, LineGauge, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.section()).widget(), header);
    frame.render_widget(Clear, body);
    match app.section() {
        Section::Cotizador => draw_cotizador(frame, app, body),
        Section::Isapres => draw_providers(frame, app.providers(), body),
        Section::Agenda => draw_agenda(frame, app.schedule_url(), body),
        Section::Noticias => draw_news(frame, app.news(), app.news_selection(), body),
    }
    frame.render_widget(Footer::new(app.section(), app.notice()).widget(footer), footer);
}

fn section_block(title: &str) -> Block<'_> {
    Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(BRAND_ACCENT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

// -- Cotizador ----------------------------------------------------------------

fn draw_cotizador(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let block = section_block("Cotiza tu Isapre");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let wizard = app.wizard();
    let [steps_area, gauge_area, form_area] = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

    frame.render_widget(Paragraph::new(step_indicator(wizard)), steps_area);
    frame.render_widget(
        LineGauge::default()
            .ratio(wizard.progress())
            .filled_style(Style::default().fg(BRAND_ACCENT))
            .unfilled_style(Style::default().fg(GLOBAL_BORDER)),
        gauge_area,
    );

    let lines = if wizard.is_submitted() {
        success_lines(wizard)
    } else if wizard.current_fields().is_empty() {
        confirm_lines(wizard)
    } else {
        field_lines(wizard, app.field_focus())
    };
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        form_area,
    );
}

fn step_indicator(wizard: &WizardState) -> Line<'static> {
    let mut spans = Vec::new();
    for (idx, step) in wizard.schema().steps().iter().enumerate() {
        let number = idx + 1;
        if idx > 0 {
            spans.push(Span::styled("  ›  ", Style::default().fg(GLOBAL_BORDER)));
        }
        let style = if number == wizard.step() {
            Style::default().fg(BRAND_ACCENT).add_modifier(Modifier::BOLD)
        } else if number < wizard.step() {
            Style::default().fg(STATUS_OK)
        } else {
            Style::default().fg(MUTED_TEXT)
        };
        spans.push(Span::styled(format!("{} {}", number, step.title), style));
    }
    Line::from(spans)
}

fn field_value_span(field: &FieldSpec, value: &str, focused: bool) -> Span<'static> {
    let is_select = matches!(field.kind, FieldKind::Select { .. });
    if value.is_empty() {
        let hint = match (is_select, field.placeholder) {
            (true, _) => "Selecciona una opción".to_string(),
            (false, Some(placeholder)) => placeholder.to_string(),
            (false, None) => String::new(),
        };
        let text = if is_select && focused {
            format!("‹ {} ›", hint)
        } else {
            hint
        };
        return Span::styled(text, Style::default().fg(MUTED_TEXT));
    }
    let shown = field.display_value(value);
    let text = if is_select && focused {
        format!("‹ {} ›", shown)
    } else if focused {
        format!("{}▏", shown)
    } else {
        shown.to_string()
    };
    Span::styled(text, Style::default().fg(HEADER_TEXT))
}

fn field_lines(wizard: &WizardState, focus: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            wizard.current_step().title.to_string(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (idx, field) in wizard.current_fields().iter().enumerate() {
        let focused = idx == focus;
        let value = wizard.fields().get(field.name).unwrap_or_default();
        let marker = if field.required { " *" } else { "" };
        let label_style = if focused {
            Style::default().fg(BRAND_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        let mut line = Line::from(vec![
            Span::styled(if focused { " ▸ " } else { "   " }, label_style),
            Span::styled(format!("{}{}: ", field.label, marker), label_style),
            field_value_span(field, value, focused),
        ]);
        if focused {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(line);
    }
    lines.push(Line::from(""));
    lines.push(button_row(wizard));
    lines
}

fn confirm_lines(wizard: &WizardState) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Revisa tus datos antes de cotizar",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for step in wizard.schema().steps() {
        for field in &step.fields {
            let value = wizard.fields().get(field.name).unwrap_or_default();
            let shown = if value.is_empty() {
                "—".to_string()
            } else {
                field.display_value(value).to_string()
            };
            lines.push(Line::from(vec![
                Span::styled(format!("   {}: ", field.label), Style::default().fg(MUTED_TEXT)),
                Span::styled(shown, Style::default().fg(HEADER_TEXT)),
            ]));
        }
    }
    lines.push(Line::from(""));
    lines.push(button_row(wizard));
    lines
}

fn button_row(wizard: &WizardState) -> Line<'static> {
    let button = Style::default()
        .fg(HEADER_TEXT)
        .bg(BRAND_BLUE)
        .add_modifier(Modifier::BOLD);
    let mut spans = vec![Span::raw("   ")];
    if !wizard.is_first_step() {
        spans.push(Span::styled(" Esc  Volver ", Style::default().fg(MUTED_TEXT)));
        spans.push(Span::raw("   "));
    }
    let next = if wizard.is_last_step() {
        " Enter  Cotizar "
    } else {
        " Enter  Siguiente "
    };
    spans.push(Span::styled(next, button));
    Line::from(spans)
}

fn success_lines(wizard: &WizardState) -> Vec<Line<'static>> {
    let (status, color) = match wizard.delivery() {
        Some(DeliveryStatus::Delivered) => ("Solicitud enviada".to_string(), STATUS_OK),
        Some(DeliveryStatus::Failed { error }) => {
            (format!("No se pudo enviar: {}", error), STATUS_ERROR)
        }
        Some(DeliveryStatus::Pending) | None => ("Enviando…".to_string(), STATUS_PENDING),
    };
    let token = wizard
        .submission_token()
        .map(|token| token.to_string())
        .unwrap_or_default();

    vec![
        Line::from(""),
        Line::from(Span::styled(
            "✓ ¡Gracias por cotizar con nosotros!",
            Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Un ejecutivo se pondrá en contacto contigo a la brevedad."),
        Line::from(""),
        Line::from(Span::styled(status, Style::default().fg(color))),
        Line::from(Span::styled(
            format!("Folio: {}", token),
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Ctrl+N  Nueva Cotización ",
            Style::default()
                .fg(HEADER_TEXT)
                .bg(BRAND_BLUE)
                .add_modifier(Modifier::BOLD),
        )),
    ]
}

// -- Carousels ----------------------------------------------------------------

/// Splits a carousel body into cards and a controls row.
fn carousel_areas(area: Rect) -> (Rect, Rect) {
    let [cards, controls] = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .areas(area);
    (cards, controls)
}

fn controls_line<T>(state: &CarouselState<T>) -> Line<'static> {
    if !state.controls_visible() {
        return Line::from("");
    }
    let arrow = Style::default().fg(BRAND_ACCENT).add_modifier(Modifier::BOLD);
    let mut spans = vec![Span::styled("‹  ", arrow)];
    for (idx, active) in state.dots().into_iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" "));
        }
        let (dot, style) = if active {
            ("●", Style::default().fg(BRAND_ACCENT))
        } else {
            ("○", Style::default().fg(MUTED_TEXT))
        };
        spans.push(Span::styled(dot, style));
    }
    spans.push(Span::styled("  ›", arrow));
    spans.push(Span::styled(
        format!("   {}", state.direction().arrow()),
        Style::default().fg(MUTED_TEXT),
    ));
    Line::from(spans)
}

fn draw_empty(frame: &mut Frame<'_>, area: Rect) {
    let text = "No hay elementos para mostrar";
    let rect = centered_rect_by_size(area, text.chars().count() as u16, 1);
    frame.render_widget(
        Paragraph::new(Span::styled(text, Style::default().fg(MUTED_TEXT))),
        rect,
    );
}

fn card_block(title: String, selected: bool) -> Block<'static> {
    let border = if selected { BRAND_ACCENT } else { GLOBAL_BORDER };
    Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn draw_providers(frame: &mut Frame<'_>, state: &CarouselState<Provider>, area: Rect) {
    let block = section_block("Nuestras Isapres");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.items().is_empty() {
        draw_empty(frame, inner);
        return;
    }
    let (cards_area, controls_area) = carousel_areas(inner);

    // Two rows of cards, columns follow the page size.
    let (columns, rows) = if state.page_size() >= 2 {
        (state.page_size().div_ceil(2), 2)
    } else {
        (1, 1)
    };
    let cells = grid(cards_area, columns, rows);
    for (provider, cell) in state.visible_items().iter().zip(cells) {
        let card = card_block(format!(" {} ", provider.title), false);
        let text = vec![
            Line::from(Span::styled(
                provider.subtitle.clone(),
                Style::default().fg(BRAND_ACCENT),
            )),
            Line::from(Span::styled(
                provider.description.clone(),
                Style::default().fg(MUTED_TEXT),
            )),
        ];
        frame.render_widget(
            Paragraph::new(text).block(card).wrap(Wrap { trim: true }),
            cell,
        );
    }
    frame.render_widget(
        Paragraph::new(controls_line(state)).alignment(Alignment::Center),
        controls_area,
    );
}

fn draw_news(frame: &mut Frame<'_>, state: &CarouselState<NewsItem>, selection: usize, area: Rect) {
    let block = section_block("Noticias");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.items().is_empty() {
        draw_empty(frame, inner);
        return;
    }
    let (cards_area, controls_area) = carousel_areas(inner);

    let cells = grid(cards_area, state.page_size(), 1);
    for (idx, (item, cell)) in state.visible_items().iter().zip(cells).enumerate() {
        let card = card_block(format!(" {} · {} ", item.category, item.date), idx == selection);
        let text = vec![
            Line::from(Span::styled(
                item.title.clone(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                item.excerpt.clone(),
                Style::default().fg(MUTED_TEXT),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Leer más →",
                Style::default().fg(BRAND_ACCENT),
            )),
        ];
        frame.render_widget(
            Paragraph::new(text).block(card).wrap(Wrap { trim: true }),
            cell,
        );
    }
    frame.render_widget(
        Paragraph::new(controls_line(state)).alignment(Alignment::Center),
        controls_area,
    );
}

// -- Agenda -------------------------------------------------------------------

fn draw_agenda(frame: &mut Frame<'_>, schedule_url: &str, area: Rect) {
    let block = section_block("Agenda tu asesoría");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Agenda una reunión con un ejecutivo",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Te ayudamos a encontrar el plan de salud que mejor se adapta a ti.",
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            schedule_url.to_string(),
            Style::default()
                .fg(BRAND_ACCENT)
                .add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Enter  Copiar enlace ",
            Style::default()
                .fg(HEADER_TEXT)
                .bg(BRAND_BLUE)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}
