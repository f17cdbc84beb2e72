//! Runtime configuration.
//!
//! Values come from the environment first (`LEARNING_HUB_DATA`,
//! `LEARNING_HUB_LOG`) and are then overridden by command-line flags.

use crate::catalog::DataLocation;
use crate::category::FilterSelection;
use anyhow::{Result, anyhow, bail};
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

pub const DATA_ENV: &str = "LEARNING_HUB_DATA";
pub const LOG_ENV: &str = "LEARNING_HUB_LOG";
pub const DEFAULT_DATA: &str = "data.json";
pub const DEFAULT_LOG: &str = "info";
pub const DEFAULT_TITLE: &str = "Learning Hub";

#[derive(Clone, Debug, PartialEq)]
pub struct HubConfig {
    pub data: DataLocation,
    pub log_filter: String,
    pub initial_filter: FilterSelection,
    pub output: Option<PathBuf>,
    pub title: String,
    pub list_filters: bool,
}

/// What the command line asked for.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Run(HubConfig),
    Help,
}

impl HubConfig {
    /// Configuration from the process environment alone.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Configuration from an arbitrary key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Self {
            data: DataLocation::parse(&read(DATA_ENV).unwrap_or_else(|| DEFAULT_DATA.to_string())),
            log_filter: read(LOG_ENV).unwrap_or_else(|| DEFAULT_LOG.to_string()),
            initial_filter: FilterSelection::ShowAll,
            output: None,
            title: DEFAULT_TITLE.to_string(),
            list_filters: false,
        }
    }

    /// Apply command-line flags on top of `self`.
    pub fn with_args<I>(mut self, args: I) -> Result<Command>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let arg_str = arg
                .to_str()
                .ok_or_else(|| anyhow!("invalid UTF-8 in argument"))?;
            match arg_str {
                "--data" => self.data = DataLocation::parse(&next_value("--data", &mut args)?),
                "--filter" => {
                    let raw = next_value("--filter", &mut args)?;
                    self.initial_filter = FilterSelection::from_label(&raw)
                        .ok_or_else(|| anyhow!("unknown filter category: {raw}"))?;
                }
                "--out" => self.output = Some(PathBuf::from(next_value("--out", &mut args)?)),
                "--title" => self.title = next_value("--title", &mut args)?,
                "--list-filters" => self.list_filters = true,
                "--help" | "-h" => return Ok(Command::Help),
                other => bail!("unknown argument: {other}"),
            }
        }
        Ok(Command::Run(self))
    }
}

fn next_value(flag: &str, args: &mut impl Iterator<Item = OsString>) -> Result<String> {
    let value = args
        .next()
        .ok_or_else(|| anyhow!("{flag} requires a value"))?
        .into_string()
        .map_err(|_| anyhow!("{flag} must be valid UTF-8"))?;
    if value.trim().is_empty() {
        bail!("{flag} must not be empty");
    }
    Ok(value)
}

pub const USAGE: &str = "Usage: learning-hub [--data LOCATION] [--filter CATEGORY] [--out PATH] [--title TEXT] [--list-filters]

Options:
  --data LOCATION     Catalog document path or http(s) URL (or set LEARNING_HUB_DATA; default data.json).
  --filter CATEGORY   Category selected when the page is written (default \"Show All\").
  --out PATH          Write the HTML page to PATH instead of stdout.
  --title TEXT        Page title (default \"Learning Hub\").
  --list-filters      Print the available filter labels, one per line, and exit.
  --help              Show this help text.

Logging verbosity follows LEARNING_HUB_LOG (tracing EnvFilter syntax; default info).";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use std::collections::BTreeMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: BTreeMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[test]
    fn defaults_without_environment() {
        let config = HubConfig::from_lookup(lookup(&[]));
        assert_eq!(config.data, DataLocation::Path(PathBuf::from("data.json")));
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.initial_filter, FilterSelection::ShowAll);
        assert_eq!(config.title, "Learning Hub");
    }

    #[test]
    fn environment_sets_data_and_log() {
        let config = HubConfig::from_lookup(lookup(&[
            (DATA_ENV, "https://example.org/data.json"),
            (LOG_ENV, "learning_hub=debug"),
        ]));
        assert_eq!(
            config.data,
            DataLocation::Url("https://example.org/data.json".into())
        );
        assert_eq!(config.log_filter, "learning_hub=debug");

        let blank = HubConfig::from_lookup(lookup(&[(DATA_ENV, "  ")]));
        assert_eq!(blank.data, DataLocation::Path(PathBuf::from("data.json")));
    }

    #[test]
    fn flags_override_environment() {
        let base = HubConfig::from_lookup(lookup(&[(DATA_ENV, "env.json")]));
        let Command::Run(config) = base
            .with_args(args(&[
                "--data",
                "cli.json",
                "--filter",
                "machine learning",
                "--out",
                "index.html",
                "--list-filters",
            ]))
            .unwrap()
        else {
            panic!("expected run command");
        };
        assert_eq!(config.data, DataLocation::Path(PathBuf::from("cli.json")));
        assert_eq!(
            config.initial_filter,
            FilterSelection::Only(Category::MachineLearning)
        );
        assert_eq!(config.output, Some(PathBuf::from("index.html")));
        assert!(config.list_filters);
    }

    #[test]
    fn bad_flags_are_rejected() {
        let base = HubConfig::from_lookup(lookup(&[]));
        let err = base.clone().with_args(args(&["--filter", "Theory"])).unwrap_err();
        assert!(err.to_string().contains("unknown filter category"));
        let err = base.clone().with_args(args(&["--data"])).unwrap_err();
        assert!(err.to_string().contains("requires a value"));
        let err = base.clone().with_args(args(&["--bogus"])).unwrap_err();
        assert!(err.to_string().contains("unknown argument"));
        assert_eq!(base.with_args(args(&["-h"])).unwrap(), Command::Help);
    }
}
