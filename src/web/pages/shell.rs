// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#[cfg(feature = "ssr")]
use super::app::App;
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos_meta::MetaTags;

pub const DOCUMENT_LANGUAGE: &str = "en";
pub const BODY_CLASS: &str = "antialiased";

#[cfg(feature = "ssr")]
pub fn shell(options: LeptosOptions) -> impl IntoView {
	view! {
		<!DOCTYPE html>
		<Document head=move || view! {
			<AutoReload options=options.clone() />
			<HydrationScripts options=options.clone() />
			<MetaTags />
		}>
			<App />
		</Document>
	}
}

/// The outer markup shared by every page. Whatever is passed as children is placed in the body untouched.
#[component]
pub fn Document(
	/// Extra elements for the document head
	#[prop(optional, into)]
	head: ViewFn,
	children: Children,
) -> impl IntoView {
	view! {
		<html lang=DOCUMENT_LANGUAGE>
			<head>
				<meta charset="utf-8" />
				<meta name="viewport" content="width=device-width, initial-scale=1" />
				{head.run()}
			</head>
			<body class=BODY_CLASS>{children()}</body>
		</html>
	}
}
