use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use pmindex_core::config_file::{self, ConfigFile};
use pmindex_core::{DEFAULT_OUTPUT, IndexConfig, Registry};
use pmindex_ingest::PageIndexer;
use pmindex_parsing::ParsingConfigBuilder;

mod output;

use output::ColorMode;

/// Standards Page Indexer - Build a per-page JSON index of project-management standard PDFs
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract every configured PDF and write the page index
    Build {
        #[command(flatten)]
        common: CommonArgs,

        /// Path of the JSON index to write (default: <root>/data/unique_index.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the configured standards and whether each PDF is present
    List {
        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Project root that document paths resolve against (default: current directory)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Config file to use instead of the platform and ./.pmindex.toml configs
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

/// Settings that may come from the environment.
#[derive(Debug, Default)]
struct EnvOverrides {
    root: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl EnvOverrides {
    fn from_env() -> Self {
        Self {
            root: std::env::var_os("PMINDEX_ROOT").map(PathBuf::from),
            output: std::env::var_os("PMINDEX_OUTPUT").map(PathBuf::from),
        }
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Build { common, output } => build(common, output),
        Command::List { common } => list(common),
    }
}

fn build(common: CommonArgs, output: Option<PathBuf>) -> anyhow::Result<()> {
    let file = load_config_file(common.config.as_deref())?;
    let cwd = std::env::current_dir()?;
    let config = resolve_index_config(
        &file,
        common.root,
        output,
        EnvOverrides::from_env(),
        &cwd,
    );
    let indexer = resolve_indexer(&file)?;
    let color = ColorMode(!common.no_color);

    let mut stdout = std::io::stdout();
    let summary = pmindex_ingest::run_default_index(&config, &indexer, |event| {
        let _ = output::print_event(&mut stdout, event, color);
        let _ = stdout.flush();
    })?;

    output::print_summary(&mut std::io::stdout(), &summary, color)?;
    Ok(())
}

fn list(common: CommonArgs) -> anyhow::Result<()> {
    let file = load_config_file(common.config.as_deref())?;
    let cwd = std::env::current_dir()?;
    let config = resolve_index_config(&file, common.root, None, EnvOverrides::from_env(), &cwd);

    let status = pmindex_ingest::document_status(&config.registry);
    output::print_status(
        &mut std::io::stdout(),
        &status,
        ColorMode(!common.no_color),
    )?;
    Ok(())
}

fn load_config_file(explicit: Option<&Path>) -> anyhow::Result<ConfigFile> {
    match explicit {
        Some(path) => Ok(config_file::load_explicit(path)?),
        None => Ok(config_file::load_config()),
    }
}

/// Resolve run settings: CLI flags > env vars > config file > defaults.
///
/// Relative paths from the command line or environment resolve against
/// `cwd`; relative paths from the config file resolve against the root.
fn resolve_index_config(
    file: &ConfigFile,
    root_flag: Option<PathBuf>,
    output_flag: Option<PathBuf>,
    env: EnvOverrides,
    cwd: &Path,
) -> IndexConfig {
    let paths = file.paths.clone().unwrap_or_default();

    let root = root_flag
        .or(env.root)
        .map(|r| cwd.join(r))
        .or_else(|| paths.root.map(|r| cwd.join(r)))
        .unwrap_or_else(|| cwd.to_path_buf());

    let registry = file
        .registry(&root)
        .unwrap_or_else(|| Registry::default_for_root(&root));

    let output_path = output_flag
        .or(env.output)
        .map(|o| cwd.join(o))
        .or_else(|| paths.output.map(|o| root.join(o)))
        .unwrap_or_else(|| root.join(DEFAULT_OUTPUT));

    IndexConfig {
        root,
        registry,
        output_path,
    }
}

fn resolve_indexer(file: &ConfigFile) -> anyhow::Result<PageIndexer> {
    let mut builder = ParsingConfigBuilder::new();
    if let Some(title) = &file.title {
        if let Some(n) = title.min_chars {
            builder = builder.min_title_chars(n);
        }
        if let Some(n) = title.max_chars {
            builder = builder.max_title_chars(n);
        }
    }
    Ok(PageIndexer::with_config(builder.build()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pmindex_core::config_file::{DocumentConfig, PathsConfig, TitleConfig};

    #[test]
    fn defaults_to_cwd_and_builtin_registry() {
        let cfg = resolve_index_config(
            &ConfigFile::default(),
            None,
            None,
            EnvOverrides::default(),
            Path::new("/work"),
        );
        assert_eq!(cfg.root, PathBuf::from("/work"));
        assert_eq!(cfg.output_path, PathBuf::from("/work/data/unique_index.json"));
        assert_eq!(cfg.registry, Registry::default_for_root(Path::new("/work")));
    }

    #[test]
    fn flag_beats_env_beats_file() {
        let file = ConfigFile {
            paths: Some(PathsConfig {
                root: Some("/from-file".into()),
                output: Some("out/file.json".into()),
            }),
            ..Default::default()
        };
        let env = EnvOverrides {
            root: Some("/from-env".into()),
            output: None,
        };
        let cfg = resolve_index_config(
            &file,
            Some("/from-flag".into()),
            None,
            env,
            Path::new("/work"),
        );
        assert_eq!(cfg.root, PathBuf::from("/from-flag"));
        // Output from the config file is relative to the resolved root.
        assert_eq!(cfg.output_path, PathBuf::from("/from-flag/out/file.json"));

        let env = EnvOverrides {
            root: Some("/from-env".into()),
            output: Some("rel.json".into()),
        };
        let cfg = resolve_index_config(&file, None, None, env, Path::new("/work"));
        assert_eq!(cfg.root, PathBuf::from("/from-env"));
        assert_eq!(cfg.output_path, PathBuf::from("/work/rel.json"));
    }

    #[test]
    fn file_documents_replace_builtin_registry() {
        let file = ConfigFile {
            documents: Some(vec![DocumentConfig {
                path: "guides/agile.pdf".into(),
                standard: "AGILE".into(),
            }]),
            ..Default::default()
        };
        let cfg =
            resolve_index_config(&file, None, None, EnvOverrides::default(), Path::new("/p"));
        let entries: Vec<_> = cfg.registry.iter().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path, PathBuf::from("/p/guides/agile.pdf"));
    }

    #[test]
    fn title_bounds_from_file() {
        let file = ConfigFile {
            title: Some(TitleConfig {
                min_chars: Some(2),
                max_chars: Some(80),
            }),
            ..Default::default()
        };
        let indexer = resolve_indexer(&file).unwrap();
        assert_eq!(indexer.config().min_title_chars(), 2);
        assert_eq!(indexer.config().max_title_chars(), 80);
    }

    #[test]
    fn invalid_title_bounds_are_rejected() {
        let file = ConfigFile {
            title: Some(TitleConfig {
                min_chars: Some(10),
                max_chars: Some(5),
            }),
            ..Default::default()
        };
        assert!(resolve_indexer(&file).is_err());
    }

    #[test]
    fn cli_parses_build_flags() {
        let cli = Cli::parse_from(["pmindex", "build", "--root", "/p", "-o", "x.json", "--no-color"]);
        match cli.command {
            Command::Build { common, output } => {
                assert_eq!(common.root, Some(PathBuf::from("/p")));
                assert_eq!(output, Some(PathBuf::from("x.json")));
                assert!(common.no_color);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
