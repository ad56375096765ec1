//! The pin grid.
//!
//! DESIGN
//! ======
//! Stateless: the whole list is re-rendered eagerly whenever the feed
//! changes. Pins carry no identity, so there is no keyed diffing.

use leptos::prelude::*;
use pins::Pin;

use crate::components::pin::PinTile;

#[cfg(test)]
#[path = "mainboard_test.rs"]
mod mainboard_test;

/// Board of image tiles, one per pin, in feed order.
#[component]
pub fn Mainboard(#[prop(into)] pins: Signal<Vec<Pin>>) -> impl IntoView {
    view! {
        <div class="mainboard">
            <div class="mainboard__container">
                {move || {
                    pins.with(|p| tile_sources(p))
                        .into_iter()
                        .map(|src| view! { <PinTile src=src/> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

/// Image source for each tile, in order.
fn tile_sources(pins: &[Pin]) -> Vec<Option<String>> {
    pins.iter().map(|pin| pin.image_src().map(str::to_owned)).collect()
}
