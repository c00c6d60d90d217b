use chrono::Datelike;
use leptos::prelude::*;

use crate::{content::PROFILE, theme::Theme};

#[component]
pub fn Footer(theme: Memo<Theme>) -> impl IntoView {
    let year = chrono::Utc::now().year();
    let link_class = move || {
        theme
            .get()
            .classes(
                "text-xl hover:scale-105 transition-all duration-300",
                "text-gray-400 hover:text-purple-400",
                "text-gray-600 hover:text-purple-600",
            )
    };

    view! {
        <footer class=move || {
            theme.get().classes("py-8 border-t animate-fadeInUp", "border-gray-800", "border-gray-300")
        }>
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex flex-col md:flex-row justify-between items-center">
                    <p class=move || {
                        theme.get().pick("text-gray-400", "text-gray-600")
                    }>{format!("© {} {}. All rights reserved.", year, PROFILE.name)}</p>
                    <div class="flex space-x-4 mt-4 md:mt-0">
                        <a
                            href=PROFILE.github_url
                            target="_blank"
                            rel="noopener noreferrer"
                            class=link_class
                            aria-label="GitHub"
                        >
                            <i class="devicon-github-plain" />
                        </a>
                        <a
                            href=PROFILE.linkedin_url
                            target="_blank"
                            rel="noopener noreferrer"
                            class=link_class
                            aria-label="LinkedIn"
                        >
                            <i class="devicon-linkedin-plain" />
                        </a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
