//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use pins::{Feed, FirebaseApp, UnsplashClient};

use crate::components::{header::Header, mainboard::Mainboard};
use crate::{config, net};

/// Root application component.
///
/// Owns the board feed, provides it and the Firebase handle as context,
/// loads the canned searches once on mount, and prepends results of every
/// header search.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let feed = RwSignal::new(Feed::new());
    provide_context(feed);
    provide_context(init_firebase());

    let search = init_search();

    let initial_search = search.clone();
    Effect::new(move || {
        if let Some(client) = initial_search.clone() {
            net::feed::load_initial(client, feed);
        }
    });

    let on_submit = Callback::new(move |term: String| {
        if let Some(client) = search.clone() {
            net::feed::search_and_prepend(client, feed, term);
        }
    });

    let pins = Signal::derive(move || feed.with(|f| f.pins().to_vec()));

    view! {
        <Title text="Pinboard"/>
        <div class="app">
            <Header on_submit=on_submit/>
            <Mainboard pins=pins/>
        </div>
    }
}

fn init_firebase() -> Option<FirebaseApp> {
    match FirebaseApp::initialize(config::firebase_config()) {
        Ok(app) => Some(app),
        Err(err) => {
            log::warn!("firebase not initialized: {err}");
            None
        }
    }
}

fn init_search() -> Option<UnsplashClient> {
    let Some(config) = config::unsplash_config() else {
        log::warn!("UNSPLASH_ACCESS_KEY was not set at build time; the board will stay empty");
        return None;
    };
    match UnsplashClient::new(config) {
        Ok(client) => Some(client),
        Err(err) => {
            log::error!("search client unavailable: {err}");
            None
        }
    }
}
