use leptos::prelude::*;

use crate::{content::PROFILE, navigation::Section, theme::Theme};

#[component]
pub fn Hero(theme: Memo<Theme>, on_navigate: Callback<Section>) -> impl IntoView {
    view! {
        <section
            id=Section::Home.id()
            class="min-h-[calc(100vh-4rem)] flex items-center py-12 sm:py-20 bg-gradient-to-r from-purple-900/20 to-pink-900/20 home-section"
        >
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex flex-col lg:flex-row items-center justify-between gap-8 sm:gap-12">
                    <div class="flex-1 space-y-6 animate-fadeInUp">
                        <h1 class="text-3xl sm:text-4xl md:text-5xl lg:text-6xl font-bold leading-tight">
                            "Building the Future, "
                            <span class=move || {
                                theme
                                    .get()
                                    .classes(
                                        "bg-gradient-to-r text-transparent bg-clip-text",
                                        "from-purple-500 to-pink-500",
                                        "from-purple-600 to-pink-600",
                                    )
                            }>"One Project at a Time"</span>
                        </h1>
                        <p class=move || {
                            theme
                                .get()
                                .classes(
                                    "text-lg sm:text-xl max-w-2xl mx-auto lg:mx-0",
                                    "text-gray-400",
                                    "text-gray-600",
                                )
                        }>
                            "Full-stack developer passionate about creating impactful solutions that solve real-world problems."
                        </p>
                        <div class="flex flex-wrap gap-4 justify-center lg:justify-start">
                            <button
                                on:click=move |_| on_navigate.run(Section::Projects)
                                class=move || {
                                    theme
                                        .get()
                                        .classes(
                                            "px-4 py-2 rounded-md font-medium hover:scale-105 transition-all duration-300 hover:glow",
                                            "bg-gradient-to-r from-purple-500 to-pink-500 hover:from-purple-600 hover:to-pink-600",
                                            "bg-gradient-to-r from-purple-600 to-pink-600 hover:from-purple-700 hover:to-pink-700 text-white",
                                        )
                                }
                            >
                                "View Projects"
                            </button>
                            <button
                                on:click=move |_| on_navigate.run(Section::Contact)
                                class=move || {
                                    theme
                                        .get()
                                        .classes(
                                            "px-4 py-2 rounded-md font-medium border hover:scale-105 transition-all duration-300",
                                            "border-purple-400 text-purple-400 hover:bg-purple-900/50",
                                            "border-purple-600 text-purple-600 hover:bg-purple-200/50",
                                        )
                                }
                            >
                                "Contact Me"
                            </button>
                        </div>
                    </div>
                    <div class="relative w-48 h-48 sm:w-64 sm:h-64 lg:w-80 lg:h-80 rounded-full overflow-hidden border-4 border-purple-500 shadow-2xl hover:glow animate-fadeInUp profile-image">
                        <img src=PROFILE.image alt="Profile" class="object-cover w-full h-full" />
                        <div class="absolute inset-0 bg-gradient-to-t from-purple-900/50 to-transparent" />
                    </div>
                </div>
            </div>
        </section>
    }
}
