//! App-level flows: typing, wizard navigation, submission hand-off,
//! resize-driven page sizes and drag gestures.

mod common;

use std::time::{Duration, Instant};

use common::{app_with, catalog};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use cotizador::catalog::Catalog;
use cotizador::config::Config;
use cotizador::submission::{DeliveryOutcome, DeliveryReport};
use cotizador::ui::app::{App, NoticeKind};
use cotizador::ui::direction::Direction;
use cotizador::ui::input::handle_key;
use cotizador::ui::section::Section;
use cotizador::ui::wizard::DeliveryStatus;
use tokio::sync::mpsc;

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        app.type_char(ch);
    }
}

/// Fill the focused step field by field, top to bottom.
fn fill_personal_data(app: &mut App) {
    type_text(app, "Ana Pérez");
    app.focus_field(1);
    type_text(app, "11.111.111-1");
    app.focus_field(1);
    type_text(app, "ana@example.cl");
    app.focus_field(1);
    type_text(app, "+56912345678");
}

fn fill_quote_data(app: &mut App) {
    // previsionActual, ufActual, regionResidencia, cargas, edadCargas, rentaImponible
    app.cycle_option(true);
    app.focus_field(2);
    app.cycle_option(true);
    app.focus_field(1);
    app.cycle_option(true);
    app.focus_field(2);
    type_text(app, "1500000");
}

fn app_at_confirm_step() -> App {
    let mut app = App::new(&Config::default(), Catalog::builtin());
    fill_personal_data(&mut app);
    app.wizard_next();
    fill_quote_data(&mut app);
    app.wizard_next();
    assert!(app.wizard().is_last_step(), "should reach the confirm step");
    app
}

#[test]
fn test_typing_respects_field_kind() {
    let mut app = App::new(&Config::default(), Catalog::builtin());
    app.focus_field(3); // celular
    type_text(&mut app, "+56 9abc12");
    assert_eq!(app.wizard().fields().get("celular"), Some("+56 912"));

    app.backspace();
    assert_eq!(app.wizard().fields().get("celular"), Some("+56 91"));
}

#[test]
fn test_paste_goes_through_focused_field() {
    let mut app = App::new(&Config::default(), Catalog::builtin());
    app.paste_text("Ana\nPérez");
    assert_eq!(app.wizard().fields().get("nombreCompleto"), Some("AnaPérez"));
}

#[test]
fn test_focus_wraps_within_step() {
    let mut app = App::new(&Config::default(), Catalog::builtin());
    app.focus_field(-1);
    assert_eq!(app.field_focus(), 3);
    app.focus_field(1);
    assert_eq!(app.field_focus(), 0);
}

#[test]
fn test_blocked_advance_shows_notice_and_focuses_missing_field() {
    let mut app = App::new(&Config::default(), Catalog::builtin());
    type_text(&mut app, "Ana");
    app.wizard_next();

    assert_eq!(app.wizard().step(), 1);
    let notice = app.notice().expect("notice");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(app.focused_field().map(|f| f.name), Some("rut"));
}

#[test]
fn test_back_keeps_values() {
    let mut app = App::new(&Config::default(), Catalog::builtin());
    fill_personal_data(&mut app);
    app.wizard_next();
    assert_eq!(app.wizard().step(), 2);
    assert_eq!(app.field_focus(), 0);

    app.wizard_back();
    assert_eq!(app.wizard().step(), 1);
    assert_eq!(app.wizard().fields().get("correo"), Some("ana@example.cl"));
}

#[test]
fn test_select_fields_cycle_options() {
    let mut app = App::new(&Config::default(), Catalog::builtin());
    fill_personal_data(&mut app);
    app.wizard_next();

    app.cycle_option(true);
    assert_eq!(app.wizard().fields().get("previsionActual"), Some("fonasa"));
    app.cycle_option(false);
    assert_eq!(
        app.wizard().fields().get("previsionActual"),
        Some("isapre_cruz_blanca")
    );
    // Typed characters never reach a select field
    app.type_char('x');
    assert_eq!(
        app.wizard().fields().get("previsionActual"),
        Some("isapre_cruz_blanca")
    );
}

#[test]
fn test_submit_queues_request_once() {
    let mut app = app_at_confirm_step();
    let (tx, mut rx) = mpsc::channel(4);
    app.attach_submission(tx);

    app.wizard_next();
    assert!(app.wizard().is_submitted());
    let token = app.wizard().submission_token().expect("token");

    let request = rx.try_recv().expect("queued request");
    assert_eq!(request.token, token);
    assert_eq!(request.field("nombreCompleto"), Some("Ana Pérez"));
    assert_eq!(request.field("regionResidencia"), Some("rm"));
    assert_eq!(request.field("rentaImponible"), Some("1500000"));

    // A second Enter on the success view does not resubmit
    app.wizard_next();
    app.submit_quote();
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_delivery_report_updates_success_view() {
    let mut app = app_at_confirm_step();
    let (tx, _rx) = mpsc::channel(4);
    app.attach_submission(tx);
    app.wizard_next();
    let token = app.wizard().submission_token().expect("token");

    app.on_delivery(DeliveryReport {
        token,
        outcome: DeliveryOutcome::Delivered,
    });
    assert_eq!(app.wizard().delivery(), Some(&DeliveryStatus::Delivered));
    assert_eq!(app.notice().map(|n| n.kind), Some(NoticeKind::Info));
}

#[test]
fn test_submit_without_sink_reports_failure() {
    let mut app = app_at_confirm_step();
    app.wizard_next();

    assert!(app.wizard().is_submitted());
    assert!(matches!(
        app.wizard().delivery(),
        Some(DeliveryStatus::Failed { .. })
    ));
    assert_eq!(app.notice().map(|n| n.kind), Some(NoticeKind::Error));
}

#[test]
fn test_repeated_enter_keeps_pending_delivery_visible() {
    let mut app = app_at_confirm_step();
    let (tx, mut rx) = mpsc::channel(4);
    app.attach_submission(tx);

    let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
    handle_key(&mut app, enter);
    handle_key(&mut app, enter);

    assert!(app.wizard().is_submitted());
    assert_eq!(app.wizard().delivery(), Some(&DeliveryStatus::Pending));
    let token = rx.try_recv().expect("queued request").token;
    assert!(rx.try_recv().is_err());

    app.on_delivery(DeliveryReport {
        token,
        outcome: DeliveryOutcome::Failed("503 Service Unavailable".to_string()),
    });
    assert!(matches!(
        app.wizard().delivery(),
        Some(DeliveryStatus::Failed { .. })
    ));
    assert_eq!(app.notice().map(|n| n.kind), Some(NoticeKind::Error));
}

#[test]
fn test_ctrl_n_starts_new_quote_from_success_view() {
    let mut app = app_at_confirm_step();
    handle_key(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    assert!(app.wizard().is_submitted());

    handle_key(&mut app, KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));
    assert!(!app.wizard().is_submitted());
    assert_eq!(app.wizard().step(), 1);
}

#[test]
fn test_new_quote_resets_form() {
    let mut app = app_at_confirm_step();
    app.wizard_next();
    app.new_quote();

    assert!(!app.wizard().is_submitted());
    assert_eq!(app.wizard().step(), 1);
    assert!(app.wizard().fields().is_all_empty());
    assert_eq!(app.field_focus(), 0);
}

#[test]
fn test_notice_expires_after_ticks() {
    let mut app = App::new(&Config::default(), Catalog::builtin());
    app.notify("hola", NoticeKind::Info);
    for _ in 0..15 {
        app.on_tick();
    }
    assert!(app.notice().is_some());
    app.on_tick();
    assert!(app.notice().is_none());
}

#[test]
fn test_resize_sets_page_sizes_from_breakpoints() {
    // 8 px per column: 160 cols = 1280px, 100 = 800px, 60 = 480px
    let mut app = app_with(Catalog::builtin(), 160);
    assert_eq!(app.providers().page_size(), 6);
    assert_eq!(app.news().page_size(), 3);

    app.on_resize(100, 40);
    assert_eq!(app.providers().page_size(), 4);
    assert_eq!(app.news().page_size(), 2);

    app.on_resize(60, 40);
    assert_eq!(app.providers().page_size(), 2);
    assert_eq!(app.news().page_size(), 1);
}

#[test]
fn test_resize_clamps_current_page() {
    let mut app = app_with(catalog(7, 0), 60);
    app.set_section(Section::Isapres);
    app.go_to_page(3);
    assert_eq!(app.providers().page(), 3);

    app.on_resize(160, 40);
    assert_eq!(app.providers().total_pages(), 2);
    assert_eq!(app.providers().page(), 1);
}

#[test]
fn test_carousel_commands_follow_focused_section() {
    let mut app = app_with(catalog(7, 5), 60);

    app.paginate(Direction::Forward);
    assert_eq!(app.providers().page(), 0);
    assert_eq!(app.news().page(), 0);

    app.set_section(Section::Noticias);
    app.paginate(Direction::Backward);
    assert_eq!(app.news().page(), 4);
    assert_eq!(app.providers().page(), 0);
    assert_eq!(
        app.selected_news_url(),
        Some("https://example.cl/noticias/5")
    );
}

#[test]
fn test_news_selection_stays_on_visible_page() {
    let mut app = app_with(catalog(0, 5), 160);
    app.set_section(Section::Noticias);
    app.move_news_selection(5);
    assert_eq!(app.news_selection(), 2);

    app.paginate(Direction::Forward);
    assert_eq!(app.news_selection(), 0);
    assert_eq!(app.news().visible_items().len(), 2);

    app.move_news_selection(-3);
    assert_eq!(app.news_selection(), 0);
}

#[test]
fn test_fast_leftward_drag_pages_forward() {
    let mut app = app_with(catalog(7, 0), 60);
    app.set_section(Section::Isapres);

    let t0 = Instant::now();
    app.on_pointer_down(40, t0);
    app.on_pointer_drag(35, t0 + Duration::from_millis(10));
    app.on_pointer_up(30, t0 + Duration::from_millis(20));

    assert_eq!(app.providers().page(), 1);
    assert_eq!(app.providers().direction(), Direction::Forward);
}

#[test]
fn test_slow_drag_snaps_back() {
    let mut app = app_with(catalog(7, 0), 60);
    app.set_section(Section::Isapres);

    let t0 = Instant::now();
    app.on_pointer_down(40, t0);
    app.on_pointer_up(41, t0 + Duration::from_secs(2));

    assert_eq!(app.providers().page(), 0);
}

#[test]
fn test_drag_outside_carousel_is_ignored() {
    let mut app = app_with(catalog(7, 0), 60);
    let t0 = Instant::now();
    app.on_pointer_down(40, t0);
    app.on_pointer_up(10, t0 + Duration::from_millis(20));
    assert_eq!(app.providers().page(), 0);
}
