//! Configuration and CLI argument handling

use clap::Parser;

/// Longest countdown the picker accepts, 23:59:59
pub const MAX_DURATION_SECONDS: u64 = 24 * 3600 - 1;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "focus-timer")]
#[command(about = "A single-session Pomodoro countdown timer with a local HTTP control surface")]
#[command(version)]
pub struct Config {
    /// Port to bind the control surface to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Initial countdown length, e.g. 90, 25m, 1h, 1m30s (bare numbers are seconds)
    #[arg(short, long, default_value = "60s", value_parser = parse_duration)]
    pub duration: u64,

    /// Shell command to run when a countdown finishes (defaults to the terminal bell)
    #[arg(long)]
    pub cue_command: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

/// Parse a countdown length such as `90`, `25m` or `1h2m3s` into seconds
pub fn parse_duration(input: &str) -> Result<u64, String> {
    let input = input.trim().to_lowercase();

    if let Ok(seconds) = input.parse::<u64>() {
        return check_range(seconds);
    }

    let mut total_seconds = 0u64;
    let mut current_number = String::new();

    for ch in input.chars() {
        if ch.is_ascii_digit() {
            current_number.push(ch);
        } else if matches!(ch, 'h' | 'm' | 's') {
            if current_number.is_empty() {
                return Err("Invalid duration format. Use formats like: 90, 25m, 1h, 1m30s".to_string());
            }

            let number: u64 = current_number
                .parse()
                .map_err(|_| "Invalid number in duration".to_string())?;
            let unit = match ch {
                'h' => 3600,
                'm' => 60,
                _ => 1,
            };

            total_seconds = number
                .checked_mul(unit)
                .and_then(|secs| total_seconds.checked_add(secs))
                .ok_or_else(|| "Duration is too large".to_string())?;
            current_number.clear();
        } else if !ch.is_whitespace() {
            return Err("Invalid character in duration. Use formats like: 90, 25m, 1h, 1m30s".to_string());
        }
    }

    if !current_number.is_empty() {
        return Err("Duration must end with 'h', 'm' or 's'".to_string());
    }

    check_range(total_seconds)
}

fn check_range(seconds: u64) -> Result<u64, String> {
    if seconds > MAX_DURATION_SECONDS {
        return Err(format!("Duration must be at most {} seconds", MAX_DURATION_SECONDS));
    }
    Ok(seconds)
}
