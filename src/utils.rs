pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Formats a number of seconds as `MM:SS`.
pub fn format_clock(seconds: u64) -> String {
    let (minutes, seconds) = (seconds / 60, seconds % 60);
    format!("{minutes:02}:{seconds:02}")
}
