// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use clap::{Parser, Subcommand, ValueEnum};
use tools_case_sandbox::config::parse_config;
use tools_case_sandbox::sandbox_sync::{SyncMode, sync_sandboxes};
use tools_case_sandbox::web::server::run_server;

#[derive(Parser)]
#[command(about = "Tools Case sandbox site and sandbox sync")]
struct Cli {
	/// Path to the KDL config file
	#[arg(long, default_value = "config.kdl")]
	config: String,
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Serve the sandbox site
	Serve,
	/// Copy new components, designs, and scripts into the sandboxes
	Sync {
		#[arg(value_enum)]
		mode: SyncModeArg,
	},
}

#[derive(Clone, Copy, ValueEnum)]
enum SyncModeArg {
	Tests,
	Finals,
}

impl From<SyncModeArg> for SyncMode {
	fn from(mode: SyncModeArg) -> Self {
		match mode {
			SyncModeArg::Tests => Self::Tests,
			SyncModeArg::Finals => Self::Finals,
		}
	}
}

#[tokio::main]
async fn main() -> miette::Result<()> {
	tracing_subscriber::fmt::init();

	let cli = Cli::parse();
	let config = parse_config(&cli.config).await?;

	match cli.command {
		Command::Serve => run_server(&config).await?,
		Command::Sync { mode } => {
			let report = sync_sandboxes(&config.sandbox.root, mode.into())?;
			tracing::info!(
				copied = report.copied.len(),
				missing_sources = report.missing_sources.len(),
				"Sandbox sync finished"
			);
		}
	}

	Ok(())
}
