// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use sycamore::prelude::*;

#[derive(Prop)]
pub struct LoadingOverlayProps<'a> {
	pub visible: &'a ReadSignal<bool>,
}

/// Covers its container with a spinner while `visible` is set
#[component]
pub fn LoadingOverlay<'a, G: Html>(ctx: Scope<'a>, props: LoadingOverlayProps<'a>) -> View<G> {
	let visible = props.visible;
	view! {
		ctx,
		(if *visible.get() {
			view! {
				ctx,
				div(class="loader_overlay") {
					div(class="loader", role="status") {
						span(class="visually_hidden") { "Loading..." }
					}
				}
			}
		} else {
			view! { ctx, }
		})
	}
}
