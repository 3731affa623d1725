use chrono::{NaiveDate, NaiveDateTime};
use logify_core::internals::FixedClock;
use logify_core::logger::{MemorySink, PlainStyle};
use logify_core::{BaseDir, Logger, LoggerOptions};
use std::sync::Arc;
use tempfile::TempDir;

/// A logger writing into a temporary base directory, with captured console
/// output, no colours and a frozen clock.
pub struct Harness {
    pub logger: Logger,
    pub console: MemorySink,
    #[allow(dead_code)]
    pub dir: TempDir,
}

#[allow(dead_code)]
pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

#[allow(dead_code)]
pub fn harness(options: LoggerOptions) -> Harness {
    harness_at(options, at(2024, 3, 5, 14, 30, 0))
}

#[allow(dead_code)]
pub fn harness_at(options: LoggerOptions, now: NaiveDateTime) -> Harness {
    let dir = TempDir::new().unwrap();
    let console = MemorySink::new();
    let logger = Logger::new(options.with_base_dir(BaseDir::explicit(dir.path())))
        .unwrap()
        .with_console(Arc::new(console.clone()))
        .with_style(Arc::new(PlainStyle))
        .with_clock(Arc::new(FixedClock(now)));
    Harness {
        logger,
        console,
        dir,
    }
}
