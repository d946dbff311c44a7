//! Xgen CLI entry point

use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use xgen::{ui, Platform, Playground, Workspace};

#[derive(Parser)]
#[command(name = "xgen")]
#[command(about = "Generate Xcode workspaces and playgrounds")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a workspace bundle
    Workspace {
        /// Workspace path (".xcworkspace" is appended if missing)
        path: PathBuf,

        /// Project to reference, may be repeated
        #[arg(short, long = "project")]
        projects: Vec<PathBuf>,

        /// Name of a playground to embed, may be repeated
        #[arg(long = "playground")]
        playgrounds: Vec<String>,

        /// Embed one playground using the configured default name
        #[arg(long)]
        with_playground: bool,

        /// Platform for embedded playgrounds
        #[arg(long, value_enum, ignore_case = true)]
        platform: Option<Platform>,
    },

    /// Generate a standalone playground bundle
    Playground {
        /// Playground path (".playground" is appended if missing)
        path: PathBuf,

        /// Target platform
        #[arg(long, value_enum, ignore_case = true)]
        platform: Option<Platform>,

        /// File whose contents become the playground code
        #[arg(short, long)]
        code_file: Option<PathBuf>,
    },

    /// Show the effective configuration
    Config,

    /// Write a default configuration file
    Init,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        ui::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Workspace { path, projects, playgrounds, with_playground, platform } => {
            let config = xgen::config::load()?;
            let platform = platform.unwrap_or(config.default_platform);

            let mut workspace = Workspace::new(&path);
            for project in projects {
                workspace.add_project(project);
            }

            let mut names = playgrounds;
            if with_playground {
                names.push(config.playground_name.clone());
            }
            for name in &names {
                workspace.add_playground(name).set_platform(platform);
            }

            workspace.generate()
                .with_context(|| format!("Failed to generate workspace at {:?}", workspace.path()))?;

            ui::print_success(&format!("Generated {}", workspace.path().display()));
            for reference in workspace.references() {
                ui::print_step(&reference.path().display().to_string());
            }
        }

        Commands::Playground { path, platform, code_file } => {
            let config = xgen::config::load()?;
            let platform = platform.unwrap_or(config.default_platform);

            let mut playground = Playground::with_platform(&path, platform);
            if let Some(file) = code_file {
                let code = std::fs::read_to_string(&file)
                    .with_context(|| format!("Failed to read code from {:?}", file))?;
                playground.set_code(code);
            }

            playground.generate()
                .with_context(|| format!("Failed to generate playground at {:?}", playground.path()))?;

            ui::print_success(&format!("Generated {} ({})", playground.path().display(), playground.platform()));
        }

        Commands::Config => {
            let config = xgen::config::load()?;
            ui::print_header();
            println!("Config file: {:?}", xgen::config::config_path());
            println!("Default platform: {}", config.default_platform);
            println!("Playground name: {}", config.playground_name);
        }

        Commands::Init => {
            let path = xgen::config::config_path();
            if path.exists() {
                ui::print_step(&format!("Config already exists at {:?}", path));
            } else {
                xgen::config::save(&xgen::config::Config::default())?;
                ui::print_success(&format!("Wrote default config to {:?}", path));
            }
        }
    }

    Ok(())
}
