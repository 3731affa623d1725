//! Line layout shared by the console and file sinks
//!
//! `[YYYY-MM-DD HH:MM:SS] [LEVEL] <ctx: name>message extra...`, with the
//! timestamp and context segments optional.

use crate::internals::{format_date, format_time};
use chrono::NaiveDateTime;
use logify_core_types::LogLevel;
use std::fmt::{Display, Write};

pub(crate) fn build_line(
    level: LogLevel,
    timestamp: Option<&NaiveDateTime>,
    context: Option<&str>,
    message: &str,
    extra: &[&dyn Display],
) -> String {
    let mut line = String::with_capacity(message.len() + 40);

    if let Some(at) = timestamp {
        line.push('[');
        line.push_str(&format_date("-", at));
        line.push(' ');
        line.push_str(&format_time(at));
        line.push_str("] ");
    }

    line.push('[');
    line.push_str(level.label());
    line.push_str("] ");

    if let Some(ctx) = context {
        line.push_str("<ctx: ");
        line.push_str(ctx);
        line.push('>');
    }

    line.push_str(message);

    for item in extra {
        write!(line, " {item}").ok();
    }

    line
}
