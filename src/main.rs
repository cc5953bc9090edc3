//! explore-host CLI - renders, builds, and serves the Explore host pages.

use clap::Parser;
use explore_host::cli::{Cli, Commands, ConfigCommands};
use explore_host::commands::{self, CommandResult};
#[cfg(feature = "serve")]
use explore_host::config::ResolvedSite;
use explore_host::config::{SiteOverrides, resolve_site};
use explore_host::logging;
use std::env;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let cli = Cli::parse();
    let human = cli.human_readable;

    logging::init();

    let project_dir = resolve_project_path(cli.project_path, human);
    tracing::debug!(
        "Running {} in {}",
        cli.command.name(),
        project_dir.display()
    );

    let result = run_command(cli.command, &project_dir, cli.config_path, human);

    if let Err(e) = result {
        tracing::debug!("Command failed: {}", e);
        if human {
            eprintln!("Error: {}", e);
        } else {
            eprintln!("{}", serde_json::json!({ "error": e.to_string() }));
        }
        process::exit(1);
    }
}

/// Resolve the project directory: --project flag > EXPLORE_PROJECT env > current directory.
///
/// An explicit path must exist.
fn resolve_project_path(explicit_path: Option<PathBuf>, human: bool) -> PathBuf {
    match explicit_path {
        Some(path) => {
            if !path.is_dir() {
                let message = format!(
                    "Specified project path does not exist: {}",
                    path.display()
                );
                if human {
                    eprintln!("Error: {}", message);
                } else {
                    eprintln!("{}", serde_json::json!({ "error": message }));
                }
                process::exit(1);
            }
            path
        }
        None => env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

fn run_command(
    command: Commands,
    project_dir: &Path,
    config_path: Option<PathBuf>,
    human: bool,
) -> Result<(), explore_host::Error> {
    let mut overrides = SiteOverrides::new();
    overrides.config_path = config_path;

    match command {
        Commands::Render { page } => {
            let site = resolve_site(project_dir, &overrides)?;
            output(&commands::render(&site, &page)?, human);
        }
        Commands::Pages => {
            let site = resolve_site(project_dir, &overrides)?;
            output(&commands::pages(&site), human);
        }
        Commands::Scripts => output(&commands::scripts(), human),
        Commands::Build { out, wasm_dir } => {
            overrides.out_dir = out;
            overrides.wasm_dir = wasm_dir;
            let site = resolve_site(project_dir, &overrides)?;
            output(&commands::build(&site)?, human);
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => {
                let site = resolve_site(project_dir, &overrides)?;
                output(&commands::config_show(&site), human);
            }
        },
        #[cfg(feature = "serve")]
        Commands::Serve {
            port,
            host,
            wasm_dir,
        } => {
            overrides.wasm_dir = wasm_dir;
            let site = resolve_site(project_dir, &overrides)?;
            run_serve(&site, port, &host)?;
        }
    }

    Ok(())
}

fn output<T: CommandResult>(result: &T, human: bool) {
    if human {
        println!("{}", result.to_human());
    } else {
        println!("{}", result.to_json());
    }
}

/// Run the development server
#[cfg(feature = "serve")]
fn run_serve(site: &ResolvedSite, port: Option<u16>, host: &str) -> Result<(), explore_host::Error> {
    use explore_host::serve::{DEFAULT_PORT, find_available_port, start_server};

    let actual_port = match port {
        Some(p) => p,
        None => find_available_port(host, DEFAULT_PORT).ok_or_else(|| {
            explore_host::Error::Other(format!(
                "Could not find an available port starting from {}",
                DEFAULT_PORT
            ))
        })?,
    };

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| explore_host::Error::Other(format!("Failed to create runtime: {}", e)))?
        .block_on(start_server(site, actual_port, host))
}
