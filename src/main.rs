use archive_redirects::config::{self, ConfigOverrides};
use archive_redirects::{generate, logging, output};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "archive-redirects")]
#[command(about = "Generate redirect stubs that point old URLs at archived pages")]
#[command(long_about = "\
Generate redirect stubs that point old URLs at archived pages

Run from the root of the site that should keep the old URLs. Every top-level
*.html file in the archive directory gets a stub at <slug>/index.html that
redirects to /archive/<filename>:

  ../archive/hello-world.html  →  ./hello-world/index.html
                                  (redirects to /archive/hello-world.html)

Each stub carries the page's <title> (or a title made from the filename),
a canonical link to <base-url>/archive/<filename>, a meta refresh, a script
redirect and a plain link.

Settings come from redirects.toml in the site root if present, overridden by
the flags below. Run 'archive-redirects gen-config' for a documented file.")]
#[command(version = version_string())]
struct Cli {
    /// Site root that receives the stubs
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Config file (default: <root>/redirects.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Archive directory, relative to the site root
    #[arg(long, global = true)]
    archive: Option<PathBuf>,

    /// Public origin used for canonical links, e.g. https://spi.blue
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Archive filename to skip; repeat to list several (replaces the defaults)
    #[arg(long = "exclude", value_name = "FILENAME", global = true)]
    exclude: Vec<String>,

    /// Log skipped pages and title fallbacks to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Write a redirect stub for every archive page (default)
    Generate,
    /// Show the stubs that would be written without touching the filesystem
    Check {
        /// Print the planned stubs as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a stock redirects.toml with all options documented
    GenConfig,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            archive_dir: self.archive.clone(),
            base_url: self.base_url.clone(),
            exclude: (!self.exclude.is_empty()).then(|| self.exclude.clone()),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let load = || config::load_config(&cli.root, cli.config.as_deref(), &cli.overrides());

    match cli.command.as_ref().unwrap_or(&Command::Generate) {
        Command::Generate => {
            let report = generate::generate(&cli.root, &load()?)?;
            output::print_generate_output(&report);
        }
        Command::Check { json } => {
            let stubs = generate::plan(&cli.root, &load()?)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&stubs)?);
            } else {
                output::print_check_output(&stubs);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
