// Copyright 2025 The Pigweed Authors
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License. You may obtain a copy of
// the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the
// License for the specific language governing permissions and limitations under
// the License.

//! Host tool that dumps a file through an `elog` logger.  Useful for checking
//! what a buffer dump will look like on a device console.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use elog::{Config, LogLevel, LogSink, Logger, StdClock, StdoutSink, TickSource};

#[derive(Debug, Parser)]
#[command(about = "Dump a file as elog hex, char or hexdump lines")]
pub struct Cli {
    /// File to dump.
    pub file: PathBuf,
    /// TOML file holding the logger configuration.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Threshold level, overriding the configuration file.
    #[arg(long)]
    pub level: Option<LogLevel>,
    /// Disable ANSI colors.
    #[arg(long)]
    pub no_color: bool,
    #[arg(long, value_enum, default_value_t = Mode::HexDump)]
    pub mode: Mode,
    /// Level the dump lines are logged at.
    #[arg(long, default_value_t = LogLevel::Info)]
    pub dump_level: LogLevel,
    /// Tag for every line.  Defaults to the file name.
    #[arg(long)]
    pub tag: Option<String>,
    /// Address of the first hexdump row.
    #[arg(long, value_name = "ADDR", value_parser = parse_address, default_value = "0")]
    pub base: usize,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Mode {
    Hex,
    Char,
    #[value(name = "hexdump")]
    HexDump,
}

fn parse_address(s: &str) -> Result<usize, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => usize::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid address '{s}': {e}"))
}

/// Parse a logger configuration such as:
///
/// ```toml
/// level = "debug"
/// colors = false
/// ```
///
/// Missing keys keep their defaults.
pub fn parse_config(text: &str) -> Result<Config> {
    toml::from_str(text).context("Failed to parse config file")
}

pub fn load_config(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    parse_config(&text)
}

impl Cli {
    /// Logger configuration from `--config` with the command line overrides
    /// applied.
    pub fn logger_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => Config::default(),
        };
        if let Some(level) = self.level {
            config = config.with_level(level);
        }
        if self.no_color {
            config = config.with_colors(false);
        }
        Ok(config)
    }

    pub fn tag(&self) -> String {
        match (&self.tag, self.file.file_name()) {
            (Some(tag), _) => tag.clone(),
            (None, Some(name)) => name.to_string_lossy().into_owned(),
            (None, None) => String::from("elog_dump"),
        }
    }
}

/// Read `cli.file` and dump it to stdout.
pub fn run(cli: &Cli) -> Result<()> {
    let config = cli.logger_config()?;
    let bytes =
        fs::read(&cli.file).with_context(|| format!("Failed to read {}", cli.file.display()))?;
    let mut logger = Logger::new(StdoutSink, StdClock::new(), config);
    dump(&mut logger, cli, &bytes)
}

/// Log a summary line for `bytes` followed by the dump selected by `cli`.
pub fn dump<S: LogSink, T: TickSource>(
    logger: &mut Logger<S, T>,
    cli: &Cli,
    bytes: &[u8],
) -> Result<()> {
    let tag = cli.tag();
    logger
        .info(
            &tag,
            format_args!("{}: {} bytes", cli.file.display(), bytes.len()),
        )
        .context("Failed to write log line")?;

    let level = cli.dump_level;
    match cli.mode {
        Mode::Hex => logger.buffer_hex(&tag, bytes, level),
        Mode::Char => logger.buffer_char(&tag, bytes, level),
        Mode::HexDump => logger.buffer_hexdump_at(&tag, bytes, cli.base, level),
    }
    .context("Failed to write dump")
}

#[cfg(test)]
mod tests {
    use elog::{MemorySink, StepTicks};

    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(["elog_dump"].iter().chain(args)).unwrap()
    }

    fn dump_to_memory(cli: &Cli, bytes: &[u8]) -> MemorySink {
        let mut sink = MemorySink::new();
        let mut logger = Logger::new(&mut sink, StepTicks::new(1, 1), cli.logger_config().unwrap());
        dump(&mut logger, cli, bytes).unwrap();
        sink
    }

    #[test]
    fn defaults() {
        let cli = cli(&["fw/blob.bin"]);
        assert_eq!(cli.mode, Mode::HexDump);
        assert_eq!(cli.dump_level, LogLevel::Info);
        assert_eq!(cli.base, 0);
        assert_eq!(cli.tag(), "blob.bin");
        assert_eq!(cli.logger_config().unwrap(), Config::default());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = cli(&[
            "blob.bin",
            "--level",
            "warn",
            "--no-color",
            "--mode",
            "char",
            "--dump-level",
            "e",
            "--tag",
            "fw",
            "--base",
            "0x3ffb4280",
        ]);
        assert_eq!(cli.mode, Mode::Char);
        assert_eq!(cli.dump_level, LogLevel::Error);
        assert_eq!(cli.base, 0x3ffb_4280);
        assert_eq!(cli.tag(), "fw");
        assert_eq!(
            cli.logger_config().unwrap(),
            Config::new().with_level(LogLevel::Warn).with_colors(false)
        );
    }

    #[test]
    fn bad_values_are_rejected() {
        let args = |extra: &[&str]| {
            Cli::try_parse_from(["elog_dump", "blob.bin"].iter().chain(extra)).is_err()
        };
        assert!(args(&["--mode", "octal"]));
        assert!(args(&["--level", "loud"]));
        assert!(args(&["--base", "0xzz"]));
        assert!(Cli::try_parse_from(["elog_dump"]).is_err());
    }

    #[test]
    fn addresses_parse_as_hex_or_decimal() {
        assert_eq!(parse_address("0x10"), Ok(16));
        assert_eq!(parse_address("0XfF"), Ok(255));
        assert_eq!(parse_address("4096"), Ok(4096));
        assert!(parse_address("").is_err());
        assert!(parse_address("-1").is_err());
    }

    #[test]
    fn config_files_parse_levels_and_colors() {
        let config = parse_config("level = \"debug\"\ncolors = false\n").unwrap();
        assert_eq!(
            config,
            Config::new().with_level(LogLevel::Debug).with_colors(false)
        );
        assert_eq!(
            parse_config("level = \"none\"").unwrap(),
            Config::new().with_level(LogLevel::None)
        );
        assert_eq!(parse_config("").unwrap(), Config::default());
        assert!(parse_config("level = \"loud\"").is_err());
        assert!(parse_config("colour = true").is_err());
    }

    #[test]
    fn config_file_is_loaded_and_overridden() {
        let path = std::env::temp_dir().join(format!("elog_dump_{}.toml", std::process::id()));
        fs::write(&path, "level = \"error\"\n").unwrap();

        let cli = cli(&["blob.bin", "--config", path.to_str().unwrap(), "--no-color"]);
        let config = cli.logger_config();
        fs::remove_file(&path).unwrap();

        assert_eq!(
            config.unwrap(),
            Config::new().with_level(LogLevel::Error).with_colors(false)
        );
    }

    #[test]
    fn missing_config_file_is_reported() {
        let cli = cli(&["blob.bin", "--config", "/nonexistent/elog.toml"]);
        let err = cli.logger_config().unwrap_err();
        assert!(err.to_string().starts_with("Failed to read config file"));
    }

    #[test]
    fn hexdump_mode_uses_base_address() {
        let cli = cli(&["fw/blob.bin", "--no-color", "--base", "0x10"]);
        let sink = dump_to_memory(&cli, b"nola");
        assert_eq!(sink.text(0).as_deref(), Some("I [1] blob.bin: fw/blob.bin: 4 bytes\n"));
        let row = sink.text(1).unwrap();
        assert!(row.starts_with("I [2] blob.bin: 0x00000010   6e 6f 6c 61 "));
        assert!(row.ends_with("  |nola|\n"));
        assert_eq!(sink.lines().len(), 2);
    }

    #[test]
    fn hex_and_char_modes_chunk_by_sixteen() {
        let bytes: Vec<u8> = (b'a'..=b'z').collect();

        let hex = dump_to_memory(&cli(&["b", "--no-color", "--mode", "hex"]), &bytes);
        assert_eq!(hex.lines().len(), 3);
        assert_eq!(hex.text(2).as_deref(), Some("I [3] b: 71 72 73 74 75 76 77 78 79 7a \n"));

        let chars = dump_to_memory(&cli(&["b", "--no-color", "--mode", "char"]), &bytes);
        assert_eq!(chars.text(1).as_deref(), Some("I [2] b: abcdefghijklmnop\n"));
        assert_eq!(chars.text(2).as_deref(), Some("I [3] b: qrstuvwxyz\n"));
    }

    #[test]
    fn dump_level_below_threshold_only_logs_summary() {
        let cli = cli(&["b", "--level", "info", "--dump-level", "debug", "--mode", "hex"]);
        let sink = dump_to_memory(&cli, &[1, 2, 3]);
        assert_eq!(sink.lines().len(), 1);
        assert_eq!(
            sink.text(0).as_deref(),
            Some("\x1b[0;32mI [1] b: b: 3 bytes\x1b[0m\n")
        );
    }

    #[test]
    fn run_reports_missing_input() {
        let err = run(&cli(&["/nonexistent/blob.bin"])).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/blob.bin"));
    }
}
