// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use kdl::{KdlDocument, KdlNode};
use miette::{IntoDiagnostic, bail};
use std::path::PathBuf;
use tokio::fs::read_to_string;

pub async fn parse_config(config_path: &str) -> miette::Result<ConfigData> {
	let config_file_contents = read_to_string(config_path).await.into_diagnostic()?;
	parse_config_contents(&config_file_contents)
}

pub fn parse_config_contents(contents: &str) -> miette::Result<ConfigData> {
	let document: KdlDocument = contents.parse()?;

	let Some(web_node) = document.get("web") else {
		bail!("Config is missing the `web` block");
	};
	let web = WebConfig::from_node(web_node)?;

	let sandbox = match document.get("sandbox") {
		Some(sandbox_node) => SandboxConfig::from_node(sandbox_node)?,
		None => SandboxConfig::default(),
	};

	Ok(ConfigData { web, sandbox })
}

#[derive(Debug)]
pub struct ConfigData {
	pub web: WebConfig,
	pub sandbox: SandboxConfig,
}

#[derive(Debug)]
pub struct WebConfig {
	pub bind_addr: String,
}

impl WebConfig {
	fn from_node(node: &KdlNode) -> miette::Result<Self> {
		let Some(bind_addr) = string_child(node, "bind_addr")? else {
			bail!("Config is missing `web.bind_addr`");
		};
		Ok(Self { bind_addr })
	}
}

/// Where the sandbox sync looks for its source and destination trees
#[derive(Debug)]
pub struct SandboxConfig {
	pub root: PathBuf,
}

impl SandboxConfig {
	fn from_node(node: &KdlNode) -> miette::Result<Self> {
		let root = string_child(node, "root")?.map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
		Ok(Self { root })
	}
}

impl Default for SandboxConfig {
	fn default() -> Self {
		Self {
			root: PathBuf::from("."),
		}
	}
}

fn string_child(node: &KdlNode, name: &str) -> miette::Result<Option<String>> {
	let Some(children) = node.children() else {
		return Ok(None);
	};
	let Some(value) = children.get_arg(name) else {
		return Ok(None);
	};
	match value.as_string() {
		Some(value) => Ok(Some(value.to_string())),
		None => bail!("Config value `{}.{}` must be a string", node.name().value(), name),
	}
}
