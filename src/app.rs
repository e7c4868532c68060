//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::Footer, header::Header};
use crate::pages::{category::CategoryPage, deals::DealsPage, home::HomePage, login::LoginPage};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth store context, restores the persisted session before
/// any page reads it, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    // Seed the session from durable storage before the first page render.
    #[cfg(feature = "hydrate")]
    crate::services::auth::restore_session(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/shopeasy.css"/>
        <Title text="ShopEasy"/>

        <Router>
            <Header/>
            <main class="page-content">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("deals") view=DealsPage/>
                    <Route path=ParamSegment("slug") view=CategoryPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
