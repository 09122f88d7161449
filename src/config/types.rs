use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable consulted when the EmailJS public key is not set
/// in the config file.
pub const EMAILJS_KEY_ENV: &str = "COTIZADOR_EMAILJS_KEY";

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub viewport: ViewportConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    /// Page sizes of the provider directory.
    #[serde(default = "Breakpoints::providers")]
    pub providers: Breakpoints,
    /// Page sizes of the news list.
    #[serde(default = "Breakpoints::news")]
    pub news: Breakpoints,
    #[serde(default)]
    pub submission: SubmissionConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub content: ContentConfig,
}

/// Conversion from terminal cells to viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportConfig {
    /// Pixels per terminal column (default: 8, so 128 columns = 1024px).
    #[serde(default = "default_cell_width_px")]
    pub cell_width_px: u32,
}

impl ViewportConfig {
    pub fn width_px(&self, columns: u16) -> u32 {
        u32::from(columns).saturating_mul(self.cell_width_px)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Minimum |offset| × velocity for a drag release to change page.
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: f32,
}

/// Responsive page-size policy of one carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoints {
    pub large: usize,
    pub medium: usize,
    pub small: usize,
    /// Widths at or above this use `large` (default: 1024).
    #[serde(default = "default_large_min_width")]
    pub large_min_width: u32,
    /// Widths at or above this use `medium` (default: 768).
    #[serde(default = "default_medium_min_width")]
    pub medium_min_width: u32,
}

impl Breakpoints {
    /// 3×2 on desktop, 2×2 on tablet, 1×2 on mobile.
    pub fn providers() -> Self {
        Self {
            large: 6,
            medium: 4,
            small: 2,
            large_min_width: default_large_min_width(),
            medium_min_width: default_medium_min_width(),
        }
    }

    pub fn news() -> Self {
        Self {
            large: 3,
            medium: 2,
            small: 1,
            large_min_width: default_large_min_width(),
            medium_min_width: default_medium_min_width(),
        }
    }

    pub fn page_size_for(&self, width_px: u32) -> usize {
        if width_px >= self.large_min_width {
            self.large
        } else if width_px >= self.medium_min_width {
            self.medium
        } else {
            self.small
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Write quote requests to the log file.
    #[default]
    Log,
    /// Send quote requests through EmailJS.
    #[value(name = "emailjs")]
    EmailJs,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionConfig {
    #[serde(default)]
    pub sink: SinkKind,
    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_submission_timeout")]
    pub timeout_seconds: u32,
    #[serde(default)]
    pub emailjs: EmailJsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailJsConfig {
    #[serde(default = "default_emailjs_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub service_id: String,
    #[serde(default)]
    pub template_id: String,
    /// Public key; falls back to `COTIZADOR_EMAILJS_KEY`.
    #[serde(default)]
    pub public_key: Option<String>,
    /// Optional private key for strict-mode accounts.
    #[serde(default)]
    pub access_token: Option<String>,
}

impl EmailJsConfig {
    pub fn resolved_public_key(&self) -> Option<String> {
        self.public_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| {
                std::env::var(EMAILJS_KEY_ENV)
                    .ok()
                    .filter(|key| !key.trim().is_empty())
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Booking page offered by the "Cotización Online" section.
    #[serde(default = "default_schedule_url")]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Catalog TOML replacing the built-in providers and news.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_cell_width_px() -> u32 {
    8
}

fn default_swipe_threshold() -> f32 {
    crate::ui::carousel::DEFAULT_SWIPE_THRESHOLD
}

fn default_large_min_width() -> u32 {
    1024
}

fn default_medium_min_width() -> u32 {
    768
}

fn default_submission_timeout() -> u32 {
    10
}

fn default_emailjs_endpoint() -> String {
    "https://api.emailjs.com/api/v1.0/email/send".to_string()
}

fn default_schedule_url() -> String {
    "https://calendly.com/contacto-desdetu7/30min".to_string()
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            cell_width_px: default_cell_width_px(),
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: default_swipe_threshold(),
        }
    }
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            sink: SinkKind::default(),
            timeout_seconds: default_submission_timeout(),
            emailjs: EmailJsConfig::default(),
        }
    }
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            endpoint: default_emailjs_endpoint(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: None,
            access_token: None,
        }
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            url: default_schedule_url(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            viewport: ViewportConfig::default(),
            carousel: CarouselConfig::default(),
            providers: Breakpoints::providers(),
            news: Breakpoints::news(),
            submission: SubmissionConfig::default(),
            schedule: ScheduleConfig::default(),
            content: ContentConfig::default(),
        }
    }
}
