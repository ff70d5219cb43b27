//! Unified logging system

use colored::*;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);
static QUIET: AtomicBool = AtomicBool::new(false);

pub struct Log;

impl Log {
	pub fn set_verbose(enabled: bool) {
		VERBOSE.store(enabled, Ordering::Relaxed);
	}

	pub fn is_verbose() -> bool {
		VERBOSE.load(Ordering::Relaxed) && !Self::is_quiet()
	}

	/// Silence everything but errors, for machine-readable stdout
	pub fn set_quiet(enabled: bool) {
		QUIET.store(enabled, Ordering::Relaxed);
	}

	pub fn is_quiet() -> bool {
		QUIET.load(Ordering::Relaxed)
	}
}

pub fn info(msg: &str) {
	if Log::is_quiet() {
		return;
	}
	println!("{} {}", "ℹ".bright_blue().bold(), msg.bright_white());
}

pub fn success(msg: &str) {
	if Log::is_quiet() {
		return;
	}
	println!("{} {}", "✓".bright_green().bold(), msg.bright_white());
}

pub fn warn(msg: &str) {
	if Log::is_quiet() {
		return;
	}
	println!("{} {}", "⚠".bright_yellow().bold(), msg.bright_white());
}

pub fn error(msg: &str) {
	eprintln!("{} {}", "✗".bright_red().bold(), msg.bright_white());
}

pub fn debug(msg: &str) {
	if Log::is_verbose() {
		println!("{} {}", "⚙".bright_black().bold(), msg.dimmed());
	}
}

pub fn header(text: &str) {
	if Log::is_quiet() {
		return;
	}
	println!("\n{}", text.bright_blue().bold());
}

/// Clickable file path (OSC 8 terminal hyperlink) labelled with `label`
pub fn path_link(path: &std::path::Path, label: &str) -> String {
	let absolute = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

	let uri = if cfg!(windows) {
		let path_str = absolute.to_string_lossy();
		let cleaned = path_str.strip_prefix(r"\\?\").unwrap_or(&path_str);
		format!("file:///{}", cleaned.replace('\\', "/"))
	} else {
		format!("file://{}", absolute.display())
	};

	format!("\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\", uri, label)
}

/// Shorten to at most `max_chars` characters, marking the cut with "..."
pub fn truncate(text: &str, max_chars: usize) -> String {
	if text.chars().count() <= max_chars {
		return text.to_string();
	}
	let keep = max_chars.saturating_sub(3);
	let mut out: String = text.chars().take(keep).collect();
	out.push_str("...");
	out
}

/// Distance rendered for display; infinite means no comparable words
pub fn format_distance(distance: f32) -> String {
	if distance.is_finite() {
		format!("{:.4}", distance)
	} else {
		"n/a".to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn truncate_short_text_untouched() {
		assert_eq!(truncate("short", 10), "short");
	}

	#[test]
	fn truncate_counts_characters() {
		assert_eq!(truncate("Café society news", 8), "Café ...");
		assert_eq!(truncate("abcdef", 5).chars().count(), 5);
	}

	#[test]
	fn infinite_distance_is_not_a_number() {
		assert_eq!(format_distance(0.5), "0.5000");
		assert_eq!(format_distance(f32::INFINITY), "n/a");
	}

	#[test]
	fn link_wraps_label() {
		let link = path_link(std::path::Path::new("/tmp/x.txt"), "x.txt");
		assert!(link.contains("x.txt\x1b]8;;"));
		assert!(link.starts_with("\x1b]8;;file://"));
	}
}
