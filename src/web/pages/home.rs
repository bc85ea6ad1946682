// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::metadata::SITE_METADATA;
use leptos::prelude::*;

static SANDBOX_SECTIONS: [(&str, &str); 3] = [
	("Components", "Work-in-progress and finished UI components"),
	("Designs", "Palettes, typography, and layout experiments"),
	("Scripts", "Tooling scripts and their test runs"),
];

#[component]
pub fn Home() -> impl IntoView {
	view! {
		<div id="home_page">
			<h1>{SITE_METADATA.title}</h1>
			<p>{SITE_METADATA.description}</p>
			<ul id="sandbox_sections">
				{SANDBOX_SECTIONS
					.iter()
					.map(|(name, summary)| view! {
						<li>
							<h2>{*name}</h2>
							<p>{*summary}</p>
						</li>
					})
					.collect_view()}
			</ul>
		</div>
	}
}
