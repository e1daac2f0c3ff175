mod numbering;

pub use numbering::NumberingSystem;

use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use thiserror::Error;

/// Shown when the configured timezone cannot be formatted.
pub const PLACEHOLDER: &str = "--:--:--";
pub const DEFAULT_LOCALE: &str = "en-GB";
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

const TIME_FORMAT: &str = "%H:%M:%S";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}

pub trait TimeSource: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemTime;

impl TimeSource for SystemTime {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

pub trait TimeFormatter: Send + Sync {
    fn format_time(
        &self,
        at: DateTime<Utc>,
        timezone: &str,
        locale: &str,
    ) -> Result<String, ClockError>;
}

/// 24-hour `HH:MM:SS` through `chrono-tz`, with digits in the locale's
/// numbering system.
pub struct ChronoFormatter;

impl TimeFormatter for ChronoFormatter {
    fn format_time(
        &self,
        at: DateTime<Utc>,
        timezone: &str,
        locale: &str,
    ) -> Result<String, ClockError> {
        let tz: Tz = timezone
            .parse()
            .map_err(|_| ClockError::UnknownTimezone(timezone.to_string()))?;
        let time = at.with_timezone(&tz).format(TIME_FORMAT).to_string();
        Ok(NumberingSystem::for_locale(locale).transliterate(&time))
    }
}

/// Formats `at`, substituting [`PLACEHOLDER`] on failure.
pub fn render(
    formatter: &dyn TimeFormatter,
    at: DateTime<Utc>,
    timezone: &str,
    locale: &str,
) -> String {
    formatter
        .format_time(at, timezone, locale)
        .unwrap_or_else(|_| PLACEHOLDER.to_string())
}

/// Runs a task on a fixed period until the returned [`Ticker`] is released.
pub trait Scheduler: Send + Sync {
    fn every(&self, period: Duration, task: Arc<dyn Fn() + Send + Sync>) -> Ticker;
}

/// Handle to a scheduled task. Cancelling or dropping it stops the task;
/// the cancellation runs exactly once.
pub struct Ticker {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Ticker {
    pub fn new(cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A ticker with nothing to cancel, for schedulers that failed to start.
    pub fn inert() -> Self {
        Self { cancel: None }
    }

    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.release();
    }
}

/// `window.setInterval` through leptos.
#[cfg(feature = "hydrate")]
pub struct BrowserScheduler;

#[cfg(feature = "hydrate")]
impl Scheduler for BrowserScheduler {
    fn every(&self, period: Duration, task: Arc<dyn Fn() + Send + Sync>) -> Ticker {
        use leptos::prelude::set_interval_with_handle;

        match set_interval_with_handle(move || task(), period) {
            Ok(handle) => Ticker::new(move || handle.clear()),
            Err(e) => {
                log::warn!("could not start clock interval: {e:?}");
                Ticker::inert()
            }
        }
    }
}

/// Recomputes the local time once per [`TICK_PERIOD`] and hands each value
/// to `sink`.
pub struct LiveClock {
    formatter: Arc<dyn TimeFormatter>,
    source: Arc<dyn TimeSource>,
    scheduler: Arc<dyn Scheduler>,
    sink: Arc<dyn Fn(String) + Send + Sync>,
    ticker: Option<Ticker>,
}

impl LiveClock {
    pub fn new(
        scheduler: impl Scheduler + 'static,
        sink: impl Fn(String) + Send + Sync + 'static,
    ) -> Self {
        Self {
            formatter: Arc::new(ChronoFormatter),
            source: Arc::new(SystemTime),
            scheduler: Arc::new(scheduler),
            sink: Arc::new(sink),
            ticker: None,
        }
    }

    pub fn with_formatter(mut self, formatter: impl TimeFormatter + 'static) -> Self {
        self.formatter = Arc::new(formatter);
        self
    }

    pub fn with_time_source(mut self, source: impl TimeSource + 'static) -> Self {
        self.source = Arc::new(source);
        self
    }

    /// Replaces any running ticker. The first value is emitted before this
    /// returns.
    pub fn start(&mut self, timezone: &str, locale: &str) {
        self.stop();

        let formatter = self.formatter.clone();
        let source = self.source.clone();
        let sink = self.sink.clone();
        let timezone = timezone.to_string();
        let locale = locale.to_string();
        let tick: Arc<dyn Fn() + Send + Sync> = Arc::new(move || {
            sink(render(&*formatter, source.now(), &timezone, &locale));
        });

        tick();
        self.ticker = Some(self.scheduler.every(TICK_PERIOD, tick));
    }

    pub fn stop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }
}

impl Drop for LiveClock {
    fn drop(&mut self) {
        self.stop();
    }
}
