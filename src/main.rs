use clap::{Parser, Subcommand};
use log::debug;
use model_gallery::{config, output, scan, writer};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "model-gallery")]
#[command(about = "Catalog .jpg model renders into a JSON gallery manifest")]
#[command(long_about = "\
Catalog .jpg model renders into a JSON gallery manifest

Every directory under the models root that holds .jpg files becomes a
category. The manifest lists each category with its sorted filenames:

  models/
  ├── cover.jpg          → category \".\"
  ├── sedan/
  │   ├── blue.jpg       → category \"sedan\"
  │   └── red.jpg
  └── trucks/            (no .jpg → omitted)
      └── pickup/
          └── F150.JPG   → category \"trucks/pickup\"

Settings are read from gallery.toml when present; flags override it.
Run 'model-gallery gen-config' to print a documented gallery.toml.")]
#[command(version)]
struct Cli {
    /// Config file (defaults to gallery.toml in the working directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Models directory to scan
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Manifest destination
    #[arg(long = "out", global = true)]
    out: Option<PathBuf>,

    /// Visit sibling directories in name order
    #[arg(long, global = true)]
    sort_categories: bool,

    /// Descend into symlinked directories
    #[arg(long, global = true)]
    follow_links: bool,

    /// Print the scanned categories and debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the models directory and write the manifest (default)
    Build,
    /// Scan and print the categories without writing anything
    Check,
    /// Print a stock gallery.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        None | Some(Command::Build) => {
            let gallery_config = resolve_config(&cli)?;
            let manifest = scan::build(&gallery_config.root, &gallery_config.scan_options())?;
            if cli.verbose {
                output::print_scan_output(&manifest);
            }
            writer::write(&manifest, &gallery_config.output_path)?;
            output::print_write_confirmation(&gallery_config.output_path);
        }
        Some(Command::Check) => {
            let gallery_config = resolve_config(&cli)?;
            let manifest = scan::build(&gallery_config.root, &gallery_config.scan_options())?;
            output::print_scan_output(&manifest);
        }
        Some(Command::GenConfig) => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Layer `gallery.toml` (or `--config`) and the command-line flags over the defaults.
///
/// A missing default `gallery.toml` is fine; a missing `--config` file is not.
fn resolve_config(cli: &Cli) -> Result<config::GalleryConfig, Box<dyn std::error::Error>> {
    let config_path = match &cli.config {
        Some(path) if !path.exists() => {
            return Err(format!("Config file not found: {}", path.display()).into());
        }
        Some(path) => path.clone(),
        None => PathBuf::from(config::DEFAULT_CONFIG_FILE),
    };
    let overrides = config::Overrides {
        root: cli.root.clone(),
        output_path: cli.out.clone(),
        sort_categories: cli.sort_categories,
        follow_links: cli.follow_links,
    };
    let gallery_config = config::resolve_config(&config_path, overrides)?;
    debug!("Resolved config: {:?}", gallery_config);
    Ok(gallery_config)
}

/// Default to warnings only; `--verbose` raises to debug. `RUST_LOG` wins over both.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
