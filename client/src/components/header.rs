//! Top bar with the logo, navigation links, search box, and menu icons.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header owns only the text in its search box. Searching happens on
//! explicit form submission; the term is handed to the root component's
//! callback and the header never talks to the network itself.

use leptos::prelude::*;

use crate::state::search::SearchDraft;

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

/// Search header.
#[component]
pub fn Header(#[prop(into)] on_submit: Callback<String>) -> impl IntoView {
    let draft = RwSignal::new(SearchDraft::default());

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        draft.with_untracked(|d| dispatch_submit(d, |term| on_submit.run(term)));
    };

    view! {
        <div class="header">
            <div class="header__logo">
                <IconButton label="Pinterest" glyph="P"/>
            </div>
            <div class="header__button homePage">
                <a href="/">"Homepage"</a>
            </div>
            <div class="header__button following">
                <a href="/">"Following"</a>
            </div>
            <div class="header__search">
                <div class="header__searchContainer">
                    <IconButton label="Search" glyph="⌕"/>
                    <form on:submit=on_form_submit>
                        <input
                            type="text"
                            prop:value=move || draft.with(|d| d.input.clone())
                            on:input=move |ev| draft.update(|d| d.set_input(event_target_value(&ev)))
                        />
                        <button type="submit"></button>
                    </form>
                </div>
            </div>
            <div class="header__menuItems">
                <IconButton label="Notifications" glyph="🔔"/>
                <IconButton label="Messages" glyph="💬"/>
                <IconButton label="Profile" glyph="☺"/>
                <IconButton label="More" glyph="⌄"/>
            </div>
        </div>
    }
}

#[component]
fn IconButton(label: &'static str, glyph: &'static str) -> impl IntoView {
    view! {
        <button class="icon-button" type="button" title=label aria-label=label>
            {glyph}
        </button>
    }
}

/// Take the current draft and hand it to `on_submit` once.
fn dispatch_submit(draft: &SearchDraft, on_submit: impl FnOnce(String)) {
    let term = draft.submit();
    on_submit(term);
}
