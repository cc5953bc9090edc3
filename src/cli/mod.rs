//! CLI argument definitions for explore-host.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Explore host - renders and serves the page that hosts the Explore wasm client.
///
/// Start with `explore-host build` to write the site, or `explore-host serve` to try it locally.
#[derive(Parser, Debug)]
#[command(name = "explore-host")]
#[command(author, version, about = "Render, build, and serve the Explore host pages", long_about = None)]
pub struct Cli {
    /// Output in human-readable format instead of JSON
    #[arg(short = 'H', long = "human", global = true)]
    pub human_readable: bool,

    /// Run as if explore-host was started in <path> instead of the current directory.
    /// Can also be set via EXPLORE_PROJECT environment variable.
    #[arg(short = 'C', long = "project", global = true, env = "EXPLORE_PROJECT")]
    pub project_path: Option<PathBuf>,

    /// Config file to use instead of <project>/explore.toml.
    /// Can also be set via EXPLORE_CONFIG environment variable.
    #[arg(long = "config", global = true, env = "EXPLORE_CONFIG")]
    pub config_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the full HTML of one page
    Render {
        /// Page output path or route (e.g., index.html, /home.html, /)
        #[arg(default_value = "index.html")]
        page: String,
    },

    /// List the configured pages
    Pages,

    /// List the runtime scripts injected into every page, in load order
    Scripts,

    /// Build the static site: pages, wasm runtime files, and manifest.json
    Build {
        /// Output directory (default: EXPLORE_OUT_DIR, out_dir from explore.toml, or ./public)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Directory holding the wasm build output (explore.js, binding.js, *.wasm)
        #[arg(long)]
        wasm_dir: Option<PathBuf>,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Start the local development server
    #[cfg(feature = "serve")]
    Serve {
        /// Port to listen on (default: first free port from 8000)
        #[arg(short, long, env = "EXPLORE_PORT")]
        port: Option<u16>,

        /// Host address to bind to (use 0.0.0.0 for network access)
        #[arg(long, env = "EXPLORE_HOST", default_value = "127.0.0.1")]
        host: String,

        /// Directory holding the wasm build output served under /wasm/
        #[arg(long)]
        wasm_dir: Option<PathBuf>,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show resolved configuration and where each value came from
    Show,
}

impl Commands {
    /// Stable command name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Render { .. } => "render",
            Commands::Pages => "pages",
            Commands::Scripts => "scripts",
            Commands::Build { .. } => "build",
            Commands::Config { .. } => "config",
            #[cfg(feature = "serve")]
            Commands::Serve { .. } => "serve",
        }
    }
}
