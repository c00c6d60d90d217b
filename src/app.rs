mod about;
mod contact;
mod footer;
mod header;
mod heading;
mod hero;
mod projects;
mod skills;
mod splash;
mod toast;
mod viewport;

use leptos::{ev, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_event_listener_with_options, use_window, UseEventListenerOptions};

use crate::{
    content::{FAVICON, PROFILE},
    navigation::{NavigationState, Section},
    theme::{Theme, ThemeState, DARK_CLASS, PREFERS_DARK_QUERY},
};

use about::About;
use contact::Contact;
use footer::Footer;
use header::{Header, MobileMenu};
use hero::Hero;
use projects::Projects;
use skills::Skills;
use splash::Splash;
use toast::{ToastSurface, Toaster};
use viewport::DomViewport;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="icon" type="image/svg+xml" href=FAVICON />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Landing />
            </Routes>
        </Router>
    }
}

/// Shows the typing splash first when built with the `splash` feature.
#[component]
fn Landing() -> impl IntoView {
    let (loading, set_loading) = signal(cfg!(feature = "splash"));
    let on_complete = Callback::new(move |_: ()| set_loading.set(false));

    view! {
        <Title text="Portfolio" />
        <Show when=move || !loading.get() fallback=move || view! { <Splash on_complete /> }>
            <PortfolioView />
        </Show>
    }
}

/// The whole page. Owns theme, navigation and notification state and hands
/// read-only signals plus callbacks to the regions below it.
#[component]
pub fn PortfolioView() -> impl IntoView {
    let theme_state = RwSignal::new(ThemeState::default());
    let theme = Memo::new(move |_| theme_state.with(ThemeState::theme));
    let nav = RwSignal::new(NavigationState::new());
    let toaster = Toaster::new();

    // tracks nothing, so this runs once on the client after mount
    Effect::new(move |_| theme_state.update(|t| t.seed(system_prefers_dark())));

    Effect::new(move |_| {
        let dark = theme.get().is_dark();
        if let Some(root) = document().document_element() {
            if let Err(e) = root.class_list().toggle_with_force(DARK_CLASS, dark) {
                log::warn!("couldn't update document theme: {:?}", e);
            }
        }
    });

    let _ = use_event_listener_with_options(
        use_window(),
        ev::scroll,
        move |_| {
            nav.maybe_update(|n| {
                let before = *n;
                n.on_scroll(&DomViewport);
                *n != before
            })
        },
        UseEventListenerOptions::default().passive(true),
    );

    let on_navigate = Callback::new(move |section: Section| {
        let moved = nav
            .try_update(|n| n.navigate(&DomViewport, section))
            .unwrap_or(false);
        if !moved {
            log::debug!("no element for section {}", section);
        }
    });
    let on_toggle_theme = Callback::new(move |_: ()| theme_state.update(ThemeState::toggle));
    let on_toggle_menu = Callback::new(move |_: ()| nav.update(NavigationState::toggle_menu));

    view! {
        <div class=move || {
            theme
                .get()
                .classes(
                    "min-h-screen transition-colors duration-300",
                    "bg-gradient-to-b from-gray-900 to-black text-gray-100",
                    "bg-gradient-to-b from-gray-100 to-gray-300 text-gray-900",
                )
        }>
            <ToastSurface toaster theme />
            <Header theme nav on_navigate on_toggle_theme on_toggle_menu />
            <MobileMenu theme nav on_navigate />
            <main class="pt-16">
                <Hero theme on_navigate />
                <About theme />
                <Projects theme />
                <Skills theme />
                <Contact theme toaster />
            </main>
            <Footer theme />
            <ScrollTopButton theme nav />
        </div>
    }
}

fn system_prefers_dark() -> bool {
    match window().match_media(PREFERS_DARK_QUERY) {
        Ok(Some(query)) => query.matches(),
        Ok(None) => false,
        Err(e) => {
            log::warn!("couldn't query colour scheme preference: {:?}", e);
            false
        }
    }
}

#[component]
fn ScrollTopButton(theme: Memo<Theme>, nav: RwSignal<NavigationState>) -> impl IntoView {
    view! {
        <button
            on:click=move |_| nav.with_untracked(|n| n.scroll_to_top(&DomViewport))
            class=move || {
                let visible = nav.with(|n| n.scroll_top_visible);
                format!(
                    "fixed bottom-6 right-6 p-3 rounded-full text-white shadow-lg transition-all duration-300 hover:scale-110 hover:glow {} {}",
                    theme
                        .get()
                        .pick(
                            "bg-gradient-to-r from-purple-500 to-pink-500",
                            "bg-gradient-to-r from-purple-600 to-pink-600",
                        ),
                    if visible {
                        "opacity-100 translate-y-0"
                    } else {
                        "opacity-0 translate-y-10 pointer-events-none"
                    },
                )
            }
            aria-label="Scroll to top"
        >
            "↑"
        </button>
    }
}
