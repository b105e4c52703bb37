// src/main.rs

mod cli;
mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::ImportEssentials) => commands::cmd_import_essentials(&cli.config),
        Some(Commands::ImportUi) => commands::cmd_import_ui(&cli.config),
        Some(Commands::Import3d) => commands::cmd_import_3d(&cli.config),
        Some(Commands::InstallPackages) => commands::cmd_install_packages(&cli.config),
        Some(Commands::CreateFolders) => commands::cmd_create_folders(&cli.config),
        Some(Commands::Completions { shell }) => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "stagehand", &mut std::io::stdout());
            Ok(())
        }
        None => {
            println!("Stagehand v{}", env!("CARGO_PKG_VERSION"));
            println!("Run 'stagehand --help' for usage information");
            Ok(())
        }
    }
}
