//! A single image tile on the board.

use leptos::prelude::*;

/// One pin. A missing `src` renders an `<img>` with no source.
#[component]
pub fn PinTile(src: Option<String>) -> impl IntoView {
    view! {
        <div class="pin">
            <div class="pin__container">
                <img src=src alt="pin"/>
            </div>
        </div>
    }
}
