use leptos::prelude::*;

use crate::{
    content::PROFILE,
    navigation::{NavigationState, Section},
    theme::Theme,
};

#[component]
fn NavButtons(
    theme: Memo<Theme>,
    nav: RwSignal<NavigationState>,
    on_navigate: Callback<Section>,
    base_class: &'static str,
) -> impl IntoView {
    Section::ALL
        .into_iter()
        .enumerate()
        .map(|(index, section)| {
            view! {
                <button
                    on:click=move |_| on_navigate.run(section)
                    class=move || {
                        let active = nav.with(|n| n.active) == section;
                        format!(
                            "{} {} hover:text-purple-400",
                            base_class,
                            theme.get().nav_item_class(active),
                        )
                    }
                    style=format!("animation-delay: {:.1}s", index as f32 * 0.1)
                >
                    {section.label()}
                </button>
            }
        })
        .collect_view()
}

#[component]
pub fn Header(
    theme: Memo<Theme>,
    nav: RwSignal<NavigationState>,
    on_navigate: Callback<Section>,
    on_toggle_theme: Callback<()>,
    on_toggle_menu: Callback<()>,
) -> impl IntoView {
    let icon_button = move |base: &'static str| {
        move || theme.get().classes(base, "hover:bg-gray-700", "hover:bg-gray-200")
    };

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 glassmorphism">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center animate-fadeInUp">
                        <span class=move || {
                            theme
                                .get()
                                .classes(
                                    "text-xl font-bold bg-gradient-to-r text-transparent bg-clip-text",
                                    "from-purple-500 to-pink-500",
                                    "from-purple-600 to-pink-600",
                                )
                        }>{PROFILE.brand}</span>
                    </div>

                    <nav class="hidden md:flex space-x-4 lg:space-x-8">
                        <NavButtons
                            theme
                            nav
                            on_navigate
                            base_class="text-sm font-medium transition-all duration-300 hover:scale-105 animate-fadeInUp"
                        />
                    </nav>

                    <div class="flex items-center space-x-4 animate-fadeInUp">
                        <button
                            on:click=move |_| on_toggle_theme.run(())
                            class=icon_button(
                                "p-2 rounded-full transition-all duration-300 hover:scale-110 hover:glow",
                            )
                            aria-label="Toggle dark mode"
                        >
                            {move || if theme.get().is_dark() { "☀" } else { "☾" }}
                        </button>
                        <button
                            on:click=move |_| on_toggle_menu.run(())
                            class=icon_button(
                                "md:hidden p-2 rounded-full transition-all duration-300 hover:scale-110",
                            )
                            aria-label="Toggle menu"
                            aria-expanded=move || nav.with(|n| n.menu_open).to_string()
                        >
                            {move || if nav.with(|n| n.menu_open) { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}

/// Full-screen navigation overlay for narrow screens.
#[component]
pub fn MobileMenu(
    theme: Memo<Theme>,
    nav: RwSignal<NavigationState>,
    on_navigate: Callback<Section>,
) -> impl IntoView {
    view! {
        <Show when=move || nav.with(|n| n.menu_open)>
            <div class="fixed inset-0 z-40 glassmorphism pt-16 px-4 md:hidden animate-fadeInUp">
                <nav class="flex flex-col space-y-6 py-8">
                    <NavButtons
                        theme
                        nav
                        on_navigate
                        base_class="text-lg font-medium transition-all duration-300 hover:scale-105"
                    />
                </nav>
            </div>
        </Show>
    }
}
