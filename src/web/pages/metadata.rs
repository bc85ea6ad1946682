// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

/// Title and description placed in the head of every page
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageMetadata {
	pub title: &'static str,
	pub description: &'static str,
}

pub const SITE_METADATA: PageMetadata = PageMetadata {
	title: "Sandbox Next.Js | Tools Case",
	description: "Tools Case By BaieNwarr",
};

#[component]
pub fn SiteMeta() -> impl IntoView {
	view! {
		<Title text=SITE_METADATA.title />
		<Meta name="description" content=SITE_METADATA.description />
	}
}
