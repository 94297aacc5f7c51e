use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::config::{get_config_dir, get_data_dir};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    /// Commands to send. Read from stdin, one per line, when none are given
    pub commands: Vec<String>,

    /// Size of the response buffer in bytes, terminator included
    #[arg(short, long, value_name = "BYTES")]
    pub capacity: Option<usize>,

    /// How each outcome is printed
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Also send one absent (null) command
    #[arg(long)]
    pub absent: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// `<code>\t<description>\t<response>`
    #[default]
    Text,
    /// One JSON object per line
    Json,
    /// Postcard-encoded replies, back to back
    Frame,
}

pub fn version() -> String {
    let author = clap::crate_authors!();
    let describe = option_env!("VERGEN_GIT_DESCRIBE").unwrap_or("unknown");
    let build_date = option_env!("VERGEN_BUILD_DATE").unwrap_or("unknown");

    let config_dir_path = get_config_dir().display().to_string();
    let data_dir_path = get_data_dir().display().to_string();

    format!(
        "\
{}-{describe} ({build_date})

Authors: {author}

Config directory: {config_dir_path}
Data directory: {data_dir_path}",
        env!("CARGO_PKG_VERSION")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_parse() {
        let cli = Cli::parse_from(["cmdack", "-c", "10", "--format", "json", "PING", "AUTH"]);
        assert_eq!(cli.capacity, Some(10));
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.commands, vec!["PING", "AUTH"]);
        assert!(!cli.absent);
    }

    #[test]
    fn defaults_leave_overrides_unset() {
        let cli = Cli::parse_from(["cmdack", "--absent"]);
        assert_eq!(cli.capacity, None);
        assert_eq!(cli.format, None);
        assert!(cli.commands.is_empty());
        assert!(cli.absent);
    }

    #[test]
    fn format_names_are_lowercase() {
        assert_eq!(OutputFormat::Frame.to_string(), "frame");
    }
}
