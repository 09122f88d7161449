mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    Breakpoints, CarouselConfig, Config, ContentConfig, EmailJsConfig, ScheduleConfig, SinkKind,
    SubmissionConfig, ViewportConfig, EMAILJS_KEY_ENV,
};
