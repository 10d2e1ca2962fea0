//! Terminal styles for bm output.
//!
//! `console` drops the escape codes when the stream is not a terminal, so
//! piped output stays plain. Styles are applied only at print time; the
//! render functions build plain strings.

use console::Style;
use once_cell::sync::Lazy;

pub static SUCCESS: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static INFO: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static ERROR: Lazy<Style> = Lazy::new(|| Style::new().red().for_stderr());
