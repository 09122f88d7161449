use std::time::Instant;

use crate::catalog::{Catalog, NewsItem, Provider};
use crate::config::{Breakpoints, Config, ViewportConfig};
use crate::form::FieldSpec;
use crate::submission::{DeliveryOutcome, DeliveryReport, QuoteSender, SubmissionToken};
use crate::ui::carousel::{CarouselIntent, CarouselReducer, CarouselState, DragTracker};
use crate::ui::direction::Direction;
use crate::ui::mvi::Reducer;
use crate::ui::section::Section;
use crate::ui::wizard::{WizardIntent, WizardReducer, WizardState};

/// Ticks a notice stays on screen (250ms tick).
const NOTICE_TICKS: u8 = 16;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Transient status line message.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    ttl: u8,
}

pub struct App {
    should_quit: bool,
    section: Section,
    size: Option<(u16, u16)>,
    viewport: ViewportConfig,
    provider_breakpoints: Breakpoints,
    news_breakpoints: Breakpoints,
    /// Quote wizard (MVI pattern).
    wizard: WizardState,
    /// Focused field within the current wizard step.
    field_focus: usize,
    /// Provider directory (MVI pattern).
    providers: CarouselState<Provider>,
    /// News list (MVI pattern).
    news: CarouselState<NewsItem>,
    /// Selected card within the visible news page.
    news_selection: usize,
    drag: DragTracker,
    schedule_url: String,
    quote_sender: Option<QuoteSender>,
    notice: Option<Notice>,
}

impl App {
    /// Carousels start at their large page size until the first resize.
    pub fn new(config: &Config, catalog: Catalog) -> Self {
        let threshold = config.carousel.swipe_threshold;
        Self {
            should_quit: false,
            section: Section::default(),
            size: None,
            viewport: config.viewport,
            provider_breakpoints: config.providers,
            news_breakpoints: config.news,
            wizard: WizardState::default(),
            field_focus: 0,
            providers: CarouselState::new(catalog.providers, config.providers.large)
                .with_swipe_threshold(threshold),
            news: CarouselState::new(catalog.news, config.news.large)
                .with_swipe_threshold(threshold),
            news_selection: 0,
            drag: DragTracker::new(),
            schedule_url: config.schedule.url.clone(),
            quote_sender: None,
            notice: None,
        }
    }

    /// Queue used to hand submitted quotes to the dispatcher.
    pub fn attach_submission(&mut self, sender: QuoteSender) {
        self.quote_sender = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn set_section(&mut self, section: Section) {
        if section != self.section {
            self.drag.cancel();
            tracing::debug!(anchor = section.anchor(), "Section focused");
        }
        self.section = section;
    }

    pub fn next_section(&mut self) {
        self.set_section(self.section.next());
    }

    pub fn prev_section(&mut self) {
        self.set_section(self.section.prev());
    }

    pub fn wizard(&self) -> &WizardState {
        &self.wizard
    }

    pub fn field_focus(&self) -> usize {
        self.field_focus
    }

    pub fn providers(&self) -> &CarouselState<Provider> {
        &self.providers
    }

    pub fn news(&self) -> &CarouselState<NewsItem> {
        &self.news
    }

    pub fn news_selection(&self) -> usize {
        self.news_selection
    }

    pub fn schedule_url(&self) -> &str {
        &self.schedule_url
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn notify(&mut self, text: impl Into<String>, kind: NoticeKind) {
        self.notice = Some(Notice {
            text: text.into(),
            kind,
            ttl: NOTICE_TICKS,
        });
    }

    pub fn on_tick(&mut self) {
        if let Some(notice) = &mut self.notice {
            notice.ttl = notice.ttl.saturating_sub(1);
            if notice.ttl == 0 {
                self.notice = None;
            }
        }
    }

    /// Recompute both page sizes from the new terminal width.
    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
        let width = self.viewport.width_px(cols);
        let providers = self.provider_breakpoints.page_size_for(width);
        let news = self.news_breakpoints.page_size_for(width);
        dispatch_mvi!(
            self,
            providers,
            CarouselReducer<Provider>,
            CarouselIntent::SetPageSize(providers)
        );
        dispatch_mvi!(
            self,
            news,
            CarouselReducer<NewsItem>,
            CarouselIntent::SetPageSize(news)
        );
        self.clamp_news_selection();
    }

    // -- Cotizador ------------------------------------------------------------

    pub fn focused_field(&self) -> Option<&FieldSpec> {
        if self.wizard.is_submitted() {
            return None;
        }
        self.wizard.current_fields().get(self.field_focus)
    }

    pub fn focus_field(&mut self, delta: isize) {
        let count = self.wizard.current_fields().len();
        if count == 0 {
            self.field_focus = 0;
            return;
        }
        let current = self.field_focus.min(count - 1) as isize;
        self.field_focus = (current + delta).rem_euclid(count as isize) as usize;
    }

    pub fn type_char(&mut self, ch: char) {
        let Some(field) = self.focused_field() else {
            return;
        };
        if !field.kind.accepts(ch) {
            return;
        }
        let name = field.name;
        let mut value = self.wizard.fields().get(name).unwrap_or_default().to_string();
        value.push(ch);
        self.update_field(name, value);
    }

    pub fn paste_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.type_char(ch);
        }
    }

    pub fn backspace(&mut self) {
        let Some(field) = self.focused_field() else {
            return;
        };
        let name = field.name;
        let mut value = self.wizard.fields().get(name).unwrap_or_default().to_string();
        if value.pop().is_some() {
            self.update_field(name, value);
        }
    }

    /// Select fields: move to the next or previous option.
    pub fn cycle_option(&mut self, forward: bool) {
        let Some(field) = self.focused_field() else {
            return;
        };
        let current = self.wizard.fields().get(field.name).unwrap_or_default();
        if let Some(next) = field.cycle_option(current, forward) {
            let name = field.name;
            self.update_field(name, next.to_string());
        }
    }

    fn update_field(&mut self, name: &str, value: String) {
        dispatch_mvi!(
            self,
            wizard,
            WizardReducer,
            WizardIntent::UpdateField {
                name: name.to_string(),
                value,
            }
        );
    }

    /// "Siguiente" on intermediate steps, "Cotizar" on the last one.
    pub fn wizard_next(&mut self) {
        if self.wizard.is_submitted() {
            return;
        }
        if self.wizard.is_last_step() {
            self.submit_quote();
            return;
        }
        let before = self.wizard.step();
        dispatch_mvi!(self, wizard, WizardReducer, WizardIntent::Advance);
        if self.wizard.step() == before {
            self.notify("Completa los campos obligatorios (*)", NoticeKind::Error);
            self.focus_first_missing();
        } else {
            self.field_focus = 0;
        }
    }

    /// "Volver".
    pub fn wizard_back(&mut self) {
        let before = self.wizard.step();
        dispatch_mvi!(self, wizard, WizardReducer, WizardIntent::Retreat);
        if self.wizard.step() != before {
            self.field_focus = 0;
        }
    }

    fn focus_first_missing(&mut self) {
        let fields = self.wizard.fields();
        if let Some(index) = self
            .wizard
            .current_fields()
            .iter()
            .position(|f| f.required && fields.is_blank(f.name))
        {
            self.field_focus = index;
        }
    }

    /// Freeze the form and queue its snapshot for delivery.
    pub fn submit_quote(&mut self) {
        if !self.wizard.is_last_step() || self.wizard.is_submitted() {
            return;
        }
        let token = SubmissionToken::new();
        dispatch_mvi!(self, wizard, WizardReducer, WizardIntent::Submit { token });
        let Some(request) = self.wizard.quote_request() else {
            return;
        };
        tracing::info!(token = %token, "Quote submitted");

        let queued = match &self.quote_sender {
            Some(sender) => sender
                .try_send(request)
                .map_err(|err| format!("submission queue unavailable: {}", err)),
            None => Err("no submission sink attached".to_string()),
        };
        if let Err(error) = queued {
            tracing::warn!(token = %token, "Quote not queued: {}", error);
            self.on_delivery(DeliveryReport {
                token,
                outcome: DeliveryOutcome::Failed(error),
            });
        }
    }

    pub fn on_delivery(&mut self, report: DeliveryReport) {
        let current = self.wizard.submission_token() == Some(report.token);
        let notice = match &report.outcome {
            DeliveryOutcome::Delivered => ("Solicitud recibida".to_string(), NoticeKind::Info),
            DeliveryOutcome::Failed(error) => (
                format!("No pudimos enviar tu solicitud: {}", error),
                NoticeKind::Error,
            ),
        };
        dispatch_mvi!(
            self,
            wizard,
            WizardReducer,
            WizardIntent::DeliveryReported {
                token: report.token,
                outcome: report.outcome,
            }
        );
        if current {
            self.notify(notice.0, notice.1);
        }
    }

    /// "Nueva Cotización".
    pub fn new_quote(&mut self) {
        dispatch_mvi!(self, wizard, WizardReducer, WizardIntent::Reset);
        self.field_focus = 0;
    }

    // -- Carousels ------------------------------------------------------------

    fn dispatch_carousel(&mut self, intent: CarouselIntent) {
        match self.section {
            Section::Isapres => {
                dispatch_mvi!(self, providers, CarouselReducer<Provider>, intent);
            }
            Section::Noticias => {
                let before = self.news.page();
                dispatch_mvi!(self, news, CarouselReducer<NewsItem>, intent);
                if self.news.page() != before {
                    self.news_selection = 0;
                }
            }
            Section::Cotizador | Section::Agenda => {}
        }
    }

    pub fn paginate(&mut self, direction: Direction) {
        self.dispatch_carousel(CarouselIntent::Paginate(direction));
    }

    pub fn go_to_page(&mut self, index: usize) {
        self.dispatch_carousel(CarouselIntent::GoTo(index));
    }

    pub fn go_to_last_page(&mut self) {
        let total = match self.section {
            Section::Isapres => self.providers.total_pages(),
            Section::Noticias => self.news.total_pages(),
            Section::Cotizador | Section::Agenda => 0,
        };
        if let Some(last) = total.checked_sub(1) {
            self.go_to_page(last);
        }
    }

    pub fn move_news_selection(&mut self, delta: isize) {
        let count = self.news.visible_items().len();
        if count == 0 {
            return;
        }
        let current = self.news_selection.min(count - 1) as isize;
        self.news_selection = (current + delta).clamp(0, count as isize - 1) as usize;
    }

    fn clamp_news_selection(&mut self) {
        let count = self.news.visible_items().len();
        self.news_selection = self.news_selection.min(count.saturating_sub(1));
    }

    pub fn selected_news_url(&self) -> Option<&str> {
        self.news
            .visible_items()
            .get(self.news_selection)
            .map(|item| item.url.as_str())
    }

    fn focused_carousel_pages(&self) -> usize {
        match self.section {
            Section::Isapres => self.providers.total_pages(),
            Section::Noticias => self.news.total_pages(),
            Section::Cotizador | Section::Agenda => 0,
        }
    }

    // -- Drag gestures (column → px through the viewport) ---------------------

    pub fn on_pointer_down(&mut self, column: u16, at: Instant) {
        if self.focused_carousel_pages() <= 1 {
            return;
        }
        self.drag.press(self.viewport.width_px(column) as f32, at);
    }

    pub fn on_pointer_drag(&mut self, column: u16, at: Instant) {
        self.drag.drag(self.viewport.width_px(column) as f32, at);
    }

    pub fn on_pointer_up(&mut self, column: u16, at: Instant) {
        let x = self.viewport.width_px(column) as f32;
        if let Some(release) = self.drag.release(x, at) {
            self.dispatch_carousel(CarouselIntent::ReleaseDrag {
                offset_x: release.offset_x,
                velocity_x: release.velocity_x,
            });
        }
    }
}
