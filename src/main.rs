use clap::{Parser, Subcommand};
use folio::bundle::{BUNDLE_FILE_NAME, PortfolioBundle};
use folio::{config, output, site};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn version_string() -> &'static str {
    let revision = env!("FOLIO_REVISION");
    if revision.is_empty() {
        return env!("CARGO_PKG_VERSION");
    }
    let dirty = if env!("FOLIO_DIRTY") == "true" { "-dirty" } else { "" };
    // Leaked once at startup
    Box::leak(format!("{} ({revision}{dirty})", env!("CARGO_PKG_VERSION")).into_boxed_str())
}

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Single-page personal portfolio built from JSON content")]
#[command(long_about = "\
Single-page personal portfolio built from JSON content

The site is a static shell plus a browser runtime. Section content is not
baked into the HTML: the runtime fetches data/*.json on every visit, so
editing a JSON file and redeploying is the whole content workflow.

Content structure:

  content/
  ├── config.toml          # Site config (optional)
  ├── assets/              # Copied to the output root (images, favicon)
  └── data/
      ├── about.json       # Profile, metrics, contact, social links
      ├── experience.json  # Work history and education
      ├── skills.json      # Skill categories with 0-100 levels
      ├── projects.json    # Project cards and modal details
      └── awards.json      # Certifications, awards, courses

Triple-click the logo on the live site to open the data viewer, which can
download everything as portfolio_data.json. Run 'folio unpack' on that file
to write it back into content/data/.

Run 'folio gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Log filter, e.g. `debug` or `folio=trace`. Overrides RUST_LOG.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate content and write the static site
    Build,
    /// Validate config and every data file without building
    Check,
    /// Combine the five data files into one portfolio_data.json
    Export {
        /// Where to write the bundle
        #[arg(long, default_value = BUNDLE_FILE_NAME)]
        out: PathBuf,
    },
    /// Split a downloaded portfolio_data.json back into data/*.json
    Unpack {
        /// Bundle produced by the data viewer or `folio export`
        bundle: PathBuf,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    match cli.command {
        Command::Build => {
            println!("==> Building {} → {}", cli.source.display(), cli.output.display());
            let generator = format!("folio {}", version_string());
            let report = site::build(&cli.source, &cli.output, &generator)?;
            output::print_build(&report);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let content = site::check(&cli.source)?;
            output::print_check(&content, &cli.source);
            println!("==> Content is valid");
        }
        Command::Export { out } => {
            let bundle = PortfolioBundle::read_data_dir(&cli.source)?;
            std::fs::write(&out, bundle.to_json_pretty()?)?;
            output::print_export(&out);
        }
        Command::Unpack { bundle } => {
            let body = std::fs::read_to_string(&bundle)?;
            let data = PortfolioBundle::from_json(&body)?;
            let written = data.write_data_dir(&cli.source)?;
            output::print_unpack(&bundle, &written);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
