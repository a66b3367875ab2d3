use std::{fs, path::Path};

use super::Config;
use crate::error::{ShellError, ShellResult};

/// Reads `key = value` lines into a [`Config`].
pub struct ConfigLoader<'a> {
    config: &'a mut Config,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(config: &'a mut Config) -> Self {
        Self { config }
    }

    pub fn load_file(&mut self, path: &Path) -> ShellResult<()> {
        let content = fs::read_to_string(path)
            .map_err(|e| ShellError::Config(format!("{}: {}", path.display(), e)))?;
        self.load_str(&content);
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(())
    }

    pub fn load_str(&mut self, content: &str) {
        for (number, line) in content.lines().enumerate() {
            if let Err(msg) = self.process_line(line) {
                tracing::warn!("config line {}: {}", number + 1, msg);
            }
        }
    }

    fn process_line(&mut self, line: &str) -> Result<(), String> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let (key, value) = line
            .split_once('=')
            .ok_or_else(|| format!("expected key = value, got '{}'", line))?;
        let key = key.trim();
        let value = strip_quotes(value.trim());

        match key {
            "history_size" => {
                self.config.history_size = value
                    .parse::<usize>()
                    .ok()
                    .filter(|&n| n > 0)
                    .ok_or_else(|| format!("invalid history_size '{}'", value))?;
            }
            "color" => self.config.color = parse_bool(value)?,
            "banner" => self.config.banner = parse_bool(value)?,
            _ => return Err(format!("unknown key '{}'", key)),
        }
        Ok(())
    }
}

fn strip_quotes(value: &str) -> &str {
    let quoted = value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')));
    if quoted {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

fn parse_bool(value: &str) -> Result<bool, String> {
    match value {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(format!("invalid boolean '{}'", value)),
    }
}
