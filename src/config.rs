use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::{Cli, color::ColorPolicy, model::OutputFormat};

#[derive(Debug, Clone, Deserialize, Default)]
struct FileConfig {
    headers: Option<PathBuf>,
    external: Option<Vec<PathBuf>>,
    internal: Option<PathBuf>,
    extension: Option<String>,
    skip: Option<Vec<String>>,
    sorted: Option<bool>,
    format: Option<String>,
    color: Option<String>,
}

#[derive(Debug, Clone)]
pub struct EffectiveConfig {
    pub headers: PathBuf,
    pub external: Vec<PathBuf>,
    pub internal: PathBuf,
    pub extension: String,
    pub skip: Vec<String>,
    pub sorted: bool,
    pub format: OutputFormat,
    pub color: ColorPolicy,
    pub debug_header: Option<String>,
}

impl EffectiveConfig {
    pub fn load(cli: &Cli) -> Result<Self> {
        let path = cli.config.clone().or_else(|| {
            let p = PathBuf::from("header-sweep.toml");
            if p.exists() { Some(p) } else { None }
        });

        let fcfg = if let Some(path) = path {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("failed reading config {}", path.display()))?;
            toml::from_str::<FileConfig>(&raw)
                .with_context(|| format!("failed parsing config {}", path.display()))?
        } else {
            FileConfig::default()
        };

        let headers = cli
            .headers
            .clone()
            .or(fcfg.headers)
            .context("no header directory given (positional argument or `headers` in config)")?;

        let mut external = fcfg.external.unwrap_or_default();
        if !cli.external.is_empty() {
            external = cli.external.clone();
        }
        if external.is_empty() {
            anyhow::bail!("no external consumer directories given (--external or `external` in config)");
        }

        let internal = cli
            .internal
            .clone()
            .or(fcfg.internal)
            .unwrap_or_else(|| headers.clone());

        let extension = cli
            .ext
            .clone()
            .or(fcfg.extension)
            .unwrap_or_else(|| "h".to_string());

        let mut skip = fcfg.skip.unwrap_or_else(default_skips);
        if !cli.skip.is_empty() {
            skip = cli.skip.clone();
        }

        let format = cli
            .format
            .or_else(|| parse_format(fcfg.format.as_deref()))
            .unwrap_or(OutputFormat::Human);

        let color = cli
            .color
            .or_else(|| parse_color(fcfg.color.as_deref()))
            .unwrap_or(ColorPolicy::Auto);

        Ok(Self {
            headers,
            external,
            internal,
            extension,
            skip,
            sorted: cli.sorted || fcfg.sorted.unwrap_or(false),
            format,
            color,
            debug_header: cli.debug_header.clone(),
        })
    }
}

fn parse_format(v: Option<&str>) -> Option<OutputFormat> {
    match v {
        Some("ai") => Some(OutputFormat::Ai),
        Some("human") => Some(OutputFormat::Human),
        _ => None,
    }
}

fn parse_color(v: Option<&str>) -> Option<ColorPolicy> {
    match v {
        Some("always") => Some(ColorPolicy::Always),
        Some("never") => Some(ColorPolicy::Never),
        Some("auto") => Some(ColorPolicy::Auto),
        _ => None,
    }
}

fn default_skips() -> Vec<String> {
    vec![
        ".git/**".to_string(),
        "build/**".to_string(),
        "target/**".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["header-sweep"];
        full.extend_from_slice(args);
        Cli::parse_from(full)
    }

    #[test]
    fn internal_defaults_to_header_directory() {
        let cfg = EffectiveConfig::load(&cli(&["lib/include", "--external", "app"])).expect("load");
        assert_eq!(cfg.internal, PathBuf::from("lib/include"));
        assert_eq!(cfg.extension, "h");
        assert!(!cfg.sorted);
    }

    #[test]
    fn missing_external_dirs_is_an_error() {
        let err = EffectiveConfig::load(&cli(&["lib/include"])).expect_err("should fail");
        assert!(err.to_string().contains("external"));
    }

    #[test]
    fn missing_header_dir_is_an_error() {
        let err = EffectiveConfig::load(&cli(&["--external", "app"])).expect_err("should fail");
        assert!(err.to_string().contains("header directory"));
    }

    #[test]
    fn cli_overrides_take_effect() {
        let cfg = EffectiveConfig::load(&cli(&[
            "inc",
            "--external",
            "app",
            "--external",
            "tools",
            "--internal",
            "srcdir",
            "--ext",
            "hpp",
            "--sorted",
            "--debug-header",
            "dialog.hpp",
        ]))
        .expect("load");
        assert_eq!(cfg.external, vec![PathBuf::from("app"), PathBuf::from("tools")]);
        assert_eq!(cfg.internal, PathBuf::from("srcdir"));
        assert_eq!(cfg.extension, "hpp");
        assert!(cfg.sorted);
        assert_eq!(cfg.debug_header.as_deref(), Some("dialog.hpp"));
    }

    #[test]
    fn config_file_supplies_defaults() {
        let dir = tempfile::tempdir().expect("tmp");
        let path = dir.path().join("header-sweep.toml");
        fs::write(
            &path,
            r#"
headers = "lib/include"
external = ["app"]
extension = "hh"
sorted = true
format = "ai"
color = "never"
"#,
        )
        .expect("write");

        let cfg = EffectiveConfig::load(&cli(&["--config", path.to_str().expect("utf8")])).expect("load");
        assert_eq!(cfg.headers, PathBuf::from("lib/include"));
        assert_eq!(cfg.extension, "hh");
        assert!(cfg.sorted);
        assert_eq!(cfg.format, OutputFormat::Ai);
        assert_eq!(cfg.color, ColorPolicy::Never);
    }
}
