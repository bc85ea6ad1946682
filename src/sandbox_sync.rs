// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Copies work-in-progress and finished components, designs, and scripts into the sandbox trees where they're
//! previewed. Only directories missing from a sandbox are copied; anything already in a sandbox is left alone.

use miette::IntoDiagnostic;
use std::fs;
use std::path::{Path, PathBuf};

const HTML_CSS_DIR: &str = "html_css";
const REACT_COMPONENT_DIR: &str = "react_component";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SyncMode {
	Tests,
	Finals,
}

/// What kind of sandbox a destination is, which decides which half of a split component lands there
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum SandboxKind {
	HtmlPages,
	NextJsComponents,
	Other,
}

struct Destination {
	path: &'static str,
	kind: SandboxKind,
}

struct Mapping {
	source: &'static str,
	components: bool,
	destinations: &'static [Destination],
}

const TEST_MAPPINGS: &[Mapping] = &[
	Mapping {
		source: "Components/Tests",
		components: true,
		destinations: &[
			Destination {
				path: "Sandbox_html_css/assets/pages/tests",
				kind: SandboxKind::HtmlPages,
			},
			Destination {
				path: "Sandbox_nextjs/ui/components/tests",
				kind: SandboxKind::NextJsComponents,
			},
		],
	},
	Mapping {
		source: "Designs/Tests",
		components: false,
		destinations: &[Destination {
			path: "Sandbox_nextjs/ui/design/tests",
			kind: SandboxKind::Other,
		}],
	},
	Mapping {
		source: "Scripts/Tests",
		components: false,
		destinations: &[Destination {
			path: "Sandbox_python/scripts_tests",
			kind: SandboxKind::Other,
		}],
	},
];

const FINAL_MAPPINGS: &[Mapping] = &[
	Mapping {
		source: "Components/V_Finals",
		components: true,
		destinations: &[
			Destination {
				path: "Sandbox_html_css/assets/pages/vFinals",
				kind: SandboxKind::HtmlPages,
			},
			Destination {
				path: "Sandbox_nextjs/ui/components/vFinals",
				kind: SandboxKind::NextJsComponents,
			},
		],
	},
	Mapping {
		source: "Designs/V_Finals",
		components: false,
		destinations: &[Destination {
			path: "Sandbox_nextjs/ui/design/vFinals",
			kind: SandboxKind::Other,
		}],
	},
	Mapping {
		source: "Scripts/V_Finals",
		components: false,
		destinations: &[Destination {
			path: "Sandbox_python/scripts_vFinals",
			kind: SandboxKind::Other,
		}],
	},
];

impl SyncMode {
	fn mappings(self) -> &'static [Mapping] {
		match self {
			Self::Tests => TEST_MAPPINGS,
			Self::Finals => FINAL_MAPPINGS,
		}
	}
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CopiedDirectory {
	pub source: PathBuf,
	pub destination: PathBuf,
}

#[derive(Debug, Default)]
pub struct SyncReport {
	pub copied: Vec<CopiedDirectory>,
	pub missing_sources: Vec<PathBuf>,
}

pub fn sync_sandboxes(root: &Path, mode: SyncMode) -> miette::Result<SyncReport> {
	let mut report = SyncReport::default();

	for mapping in mode.mappings() {
		let source_path = root.join(mapping.source);
		if !source_path.is_dir() {
			tracing::warn!(source = %source_path.display(), "Sandbox source directory does not exist");
			report.missing_sources.push(source_path);
			continue;
		}

		let source_dirs = subdirectory_names(&source_path)?;

		for destination in mapping.destinations {
			let destination_path = root.join(destination.path);
			fs::create_dir_all(&destination_path).into_diagnostic()?;
			let existing_dirs = subdirectory_names(&destination_path)?;

			for dir_name in source_dirs.iter().filter(|name| !existing_dirs.contains(name)) {
				let source_dir = source_path.join(dir_name);
				let target_dir = destination_path.join(dir_name);
				let copy_from = if mapping.components {
					match component_half_for(&source_dir, destination.kind) {
						ComponentSource::Whole => Some(source_dir),
						ComponentSource::Part(part) => Some(part),
						ComponentSource::NotForThisSandbox => None,
					}
				} else {
					Some(source_dir)
				};

				let Some(copy_from) = copy_from else {
					continue;
				};
				tracing::info!(source = %copy_from.display(), destination = %target_dir.display(), "Copying into sandbox");
				if let Err(error) = copy_dir_recursive(&copy_from, &target_dir) {
					// A partial copy would otherwise count as present on the next sync
					if let Err(cleanup_error) = fs::remove_dir_all(&target_dir) {
						tracing::error!(source = ?cleanup_error, destination = %target_dir.display(), "Failed to remove partially copied sandbox directory");
					}
					return Err(error);
				}
				report.copied.push(CopiedDirectory {
					source: copy_from,
					destination: target_dir,
				});
			}
		}
	}

	Ok(report)
}

enum ComponentSource {
	Whole,
	Part(PathBuf),
	NotForThisSandbox,
}

fn component_half_for(component_dir: &Path, kind: SandboxKind) -> ComponentSource {
	let html_css = component_dir.join(HTML_CSS_DIR);
	let react_component = component_dir.join(REACT_COMPONENT_DIR);
	if !(html_css.is_dir() && react_component.is_dir()) {
		return ComponentSource::Whole;
	}

	match kind {
		SandboxKind::HtmlPages => ComponentSource::Part(html_css),
		SandboxKind::NextJsComponents => ComponentSource::Part(react_component),
		SandboxKind::Other => ComponentSource::NotForThisSandbox,
	}
}

fn subdirectory_names(path: &Path) -> miette::Result<Vec<String>> {
	let mut names = Vec::new();
	for entry in fs::read_dir(path).into_diagnostic()? {
		let entry = entry.into_diagnostic()?;
		if entry.path().is_dir() {
			names.push(entry.file_name().to_string_lossy().into_owned());
		}
	}
	names.sort();
	Ok(names)
}

fn copy_dir_recursive(from: &Path, to: &Path) -> miette::Result<()> {
	fs::create_dir_all(to).into_diagnostic()?;
	for entry in fs::read_dir(from).into_diagnostic()? {
		let entry = entry.into_diagnostic()?;
		let target = to.join(entry.file_name());
		if entry.path().is_dir() {
			copy_dir_recursive(&entry.path(), &target)?;
		} else {
			fs::copy(entry.path(), &target).into_diagnostic()?;
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use tempfile::TempDir;

	fn write_file(path: &Path, contents: &str) {
		fs::create_dir_all(path.parent().unwrap()).unwrap();
		fs::write(path, contents).unwrap();
	}

	#[test]
	fn copies_missing_directories_into_every_sandbox() {
		let root = TempDir::new().unwrap();
		let root = root.path();
		write_file(&root.join("Designs/Tests/palette/colors.css"), "body {}");
		write_file(&root.join("Scripts/Tests/cleanup/nested/run.py"), "print()");
		write_file(&root.join("Components/Tests/button/index.html"), "<button></button>");

		let report = sync_sandboxes(root, SyncMode::Tests).unwrap();

		assert_eq!(
			fs::read_to_string(root.join("Sandbox_nextjs/ui/design/tests/palette/colors.css")).unwrap(),
			"body {}"
		);
		assert!(root.join("Sandbox_python/scripts_tests/cleanup/nested/run.py").is_file());
		// Components without both halves go to both component sandboxes whole.
		assert!(root.join("Sandbox_html_css/assets/pages/tests/button/index.html").is_file());
		assert!(root.join("Sandbox_nextjs/ui/components/tests/button/index.html").is_file());
		assert_eq!(report.copied.len(), 4);
		assert!(report.missing_sources.is_empty());
	}

	#[test]
	fn split_components_route_each_half_to_its_sandbox() {
		let root = TempDir::new().unwrap();
		let root = root.path();
		write_file(&root.join("Components/V_Finals/card/html_css/card.html"), "<div></div>");
		write_file(&root.join("Components/V_Finals/card/react_component/Card.tsx"), "export {}");

		sync_sandboxes(root, SyncMode::Finals).unwrap();

		let html = root.join("Sandbox_html_css/assets/pages/vFinals/card");
		let react = root.join("Sandbox_nextjs/ui/components/vFinals/card");
		assert!(html.join("card.html").is_file());
		assert!(!html.join("Card.tsx").exists());
		assert!(!html.join("html_css").exists());
		assert!(react.join("Card.tsx").is_file());
		assert!(!react.join("card.html").exists());
	}

	#[test]
	fn existing_sandbox_directories_are_left_alone() {
		let root = TempDir::new().unwrap();
		let root = root.path();
		write_file(&root.join("Scripts/Tests/report/main.py"), "new");
		write_file(&root.join("Sandbox_python/scripts_tests/report/main.py"), "edited in sandbox");

		let report = sync_sandboxes(root, SyncMode::Tests).unwrap();

		assert_eq!(
			fs::read_to_string(root.join("Sandbox_python/scripts_tests/report/main.py")).unwrap(),
			"edited in sandbox"
		);
		assert!(report.copied.is_empty());
	}

	#[test]
	fn second_run_copies_nothing() {
		let root = TempDir::new().unwrap();
		let root = root.path();
		write_file(&root.join("Designs/V_Finals/typography/fonts.css"), "");

		let first = sync_sandboxes(root, SyncMode::Finals).unwrap();
		let second = sync_sandboxes(root, SyncMode::Finals).unwrap();

		assert_eq!(first.copied.len(), 1);
		assert!(second.copied.is_empty());
	}

	#[test]
	fn missing_sources_are_reported_and_skipped() {
		let root = TempDir::new().unwrap();
		let root = root.path();
		write_file(&root.join("Scripts/Tests/only/run.py"), "");

		let report = sync_sandboxes(root, SyncMode::Tests).unwrap();

		assert_eq!(report.missing_sources.len(), 2);
		assert!(report.missing_sources.contains(&root.join("Components/Tests")));
		assert!(report.missing_sources.contains(&root.join("Designs/Tests")));
		assert_eq!(report.copied.len(), 1);
		assert!(!root.join("Sandbox_nextjs").exists());
	}

	#[test]
	fn loose_files_in_sources_are_not_copied() {
		let root = TempDir::new().unwrap();
		let root = root.path();
		write_file(&root.join("Designs/Tests/README.md"), "notes");

		let report = sync_sandboxes(root, SyncMode::Tests).unwrap();

		assert!(report.copied.is_empty());
		assert!(root.join("Sandbox_nextjs/ui/design/tests").is_dir());
		assert!(!root.join("Sandbox_nextjs/ui/design/tests/README.md").exists());
	}

	#[cfg(unix)]
	#[test]
	fn symlinked_source_directories_are_copied() {
		use std::os::unix::fs::symlink;

		let root = TempDir::new().unwrap();
		let root = root.path();
		write_file(&root.join("external/palette/colors.css"), "body {}");
		write_file(&root.join("shared/helpers.py"), "def help(): pass");
		write_file(&root.join("Scripts/Tests/tool/a_main.py"), "print()");
		fs::create_dir_all(root.join("Designs/Tests")).unwrap();
		symlink(root.join("external/palette"), root.join("Designs/Tests/palette")).unwrap();
		symlink(root.join("shared"), root.join("Scripts/Tests/tool/z_shared")).unwrap();

		let report = sync_sandboxes(root, SyncMode::Tests).unwrap();

		assert_eq!(report.copied.len(), 2);
		assert_eq!(
			fs::read_to_string(root.join("Sandbox_nextjs/ui/design/tests/palette/colors.css")).unwrap(),
			"body {}"
		);
		let tool = root.join("Sandbox_python/scripts_tests/tool");
		assert!(tool.join("a_main.py").is_file());
		assert!(tool.join("z_shared/helpers.py").is_file());
		assert!(!fs::symlink_metadata(tool.join("z_shared")).unwrap().file_type().is_symlink());
	}

	#[cfg(unix)]
	#[test]
	fn failed_copy_leaves_nothing_behind() {
		use std::os::unix::fs::symlink;

		let root = TempDir::new().unwrap();
		let root = root.path();
		write_file(&root.join("Scripts/Tests/tool/a_main.py"), "print()");
		symlink(root.join("missing_target"), root.join("Scripts/Tests/tool/z_broken")).unwrap();

		assert!(sync_sandboxes(root, SyncMode::Tests).is_err());
		assert!(!root.join("Sandbox_python/scripts_tests/tool").exists());

		fs::remove_file(root.join("Scripts/Tests/tool/z_broken")).unwrap();
		let report = sync_sandboxes(root, SyncMode::Tests).unwrap();

		assert_eq!(report.copied.len(), 1);
		assert!(root.join("Sandbox_python/scripts_tests/tool/a_main.py").is_file());
	}
}
