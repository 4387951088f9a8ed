// SPDX-License-Identifier: MIT OR Apache-2.0
#![deny(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use styx::Language;
use tracing_subscriber::EnvFilter;

/// Exit code for compilation/IO failures.
const EXIT_RUNTIME_ERROR: i32 = 1;

#[derive(Parser, Debug)]
#[command(name = "styx", version, about = "Compile Boutiques tool descriptors into typed wrapper source code")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging.
    #[arg(long)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile a descriptor into one or more target-language wrapper modules.
    Compile {
        /// Path to the Boutiques descriptor JSON file.
        #[arg(long)]
        descriptor: PathBuf,

        /// Package name to stamp onto the emitted modules (defaults to the
        /// descriptor file's stem).
        #[arg(long)]
        package: Option<String>,

        /// Target language; may be repeated (python | typescript | r).
        /// Falls back to `languages` in --config if omitted.
        #[arg(long = "lang")]
        langs: Vec<String>,

        /// Directory to write emitted modules under. Falls back to
        /// `out_dir` in --config, then to the current directory.
        #[arg(long = "out-dir")]
        out_dir: Option<PathBuf>,

        /// Optional TOML config file supplying default languages/out-dir.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Shape of an optional `--config` TOML file (spec §8 ambient config: a
/// default language list and output directory, overridable by flags).
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    languages: Vec<String>,
    #[serde(default)]
    out_dir: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new("styx=debug,styx_cli=debug")
    } else {
        EnvFilter::new("styx=info,styx_cli=info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Compile {
            descriptor,
            package,
            langs,
            out_dir,
            config,
        } => cmd_compile(&descriptor, package, langs, out_dir, config),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(EXIT_RUNTIME_ERROR);
    }
}

fn load_config(path: &Path) -> Result<FileConfig> {
    let text = fs::read_to_string(path).with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing config file {}", path.display()))
}

fn cmd_compile(
    descriptor_path: &Path,
    package: Option<String>,
    langs: Vec<String>,
    out_dir: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<()> {
    let file_config = config.as_deref().map(load_config).transpose()?.unwrap_or_default();

    let lang_names = if langs.is_empty() { file_config.languages } else { langs };
    if lang_names.is_empty() {
        bail!("no target language given: pass --lang at least once or set `languages` in --config");
    }
    let languages: Vec<Language> = lang_names
        .iter()
        .map(|s| s.parse::<Language>().map_err(anyhow::Error::from))
        .collect::<Result<Vec<_>>>()?;

    let out_dir = out_dir.or(file_config.out_dir).unwrap_or_else(|| PathBuf::from("."));

    let text = fs::read_to_string(descriptor_path)
        .with_context(|| format!("reading descriptor {}", descriptor_path.display()))?;
    let descriptor: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("parsing descriptor {} as JSON", descriptor_path.display()))?;

    let package_name = package.unwrap_or_else(|| {
        descriptor_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("tool")
            .to_string()
    });

    tracing::debug!(path = %descriptor_path.display(), package = %package_name, "compiling descriptor");

    let modules = styx::compile(&descriptor, &package_name, None, &languages)
        .map_err(anyhow::Error::from)
        .with_context(|| format!("compiling {}", descriptor_path.display()))?;

    for module in &modules {
        let path = module.path.iter().fold(out_dir.clone(), |acc, seg| acc.join(seg));
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| format!("creating directory {}", parent.display()))?;
        }
        fs::write(&path, &module.text).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), bytes = module.text.len(), "wrote module");
    }

    println!("wrote {} module(s) to {}", modules.len(), out_dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_config_defaults_to_empty() {
        let cfg: FileConfig = toml::from_str("").unwrap();
        assert!(cfg.languages.is_empty());
        assert!(cfg.out_dir.is_none());
    }

    #[test]
    fn file_config_parses_languages_and_out_dir() {
        let cfg: FileConfig = toml::from_str("languages = [\"python\", \"r\"]\nout_dir = \"build\"\n").unwrap();
        assert_eq!(cfg.languages, vec!["python".to_string(), "r".to_string()]);
        assert_eq!(cfg.out_dir, Some(PathBuf::from("build")));
    }
}
