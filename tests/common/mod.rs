//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_emailjs;

use cotizador::catalog::{Catalog, NewsItem, Provider};
use cotizador::config::{Config, EmailJsConfig};
use cotizador::ui::app::App;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write `content` to `name` inside a fresh temp dir.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    (dir, path)
}

pub fn provider(id: u32) -> Provider {
    Provider {
        id,
        title: format!("Isapre {}", id),
        subtitle: "Plan".to_string(),
        description: "Descripción".to_string(),
        logo: format!("/logos/{}.png", id),
    }
}

pub fn news_item(id: u32) -> NewsItem {
    NewsItem {
        id,
        title: format!("Noticia {}", id),
        date: "2024-01-01".to_string(),
        category: "Salud".to_string(),
        excerpt: "Resumen".to_string(),
        image: format!("/news/{}.jpg", id),
        url: format!("https://example.cl/noticias/{}", id),
    }
}

/// Catalog with `providers` and `news` synthetic items.
pub fn catalog(providers: u32, news: u32) -> Catalog {
    Catalog {
        providers: (1..=providers).map(provider).collect(),
        news: (1..=news).map(news_item).collect(),
    }
}

/// App sized to `cols` terminal columns (8 px per column by default).
pub fn app_with(catalog: Catalog, cols: u16) -> App {
    let mut app = App::new(&Config::default(), catalog);
    app.on_resize(cols, 40);
    app
}

pub fn emailjs_config(endpoint: String) -> EmailJsConfig {
    EmailJsConfig {
        endpoint,
        service_id: "service_test".to_string(),
        template_id: "template_test".to_string(),
        public_key: Some("public_test".to_string()),
        access_token: None,
    }
}
