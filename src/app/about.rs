use leptos::prelude::*;

use crate::{content::PROFILE, navigation::Section, theme::Theme};

use super::heading::SectionHeading;

#[component]
pub fn About(theme: Memo<Theme>) -> impl IntoView {
    let paragraph = move |base: &'static str| {
        move || theme.get().classes(base, "text-gray-300", "text-gray-700")
    };

    view! {
        <section
            id=Section::About.id()
            class=move || theme.get().classes("py-12 sm:py-20", "bg-gray-900/50", "bg-gray-200/50")
        >
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading theme title="About Me" />
                <div class="max-w-3xl mx-auto glassmorphism p-6 rounded-lg">
                    <p class=paragraph("text-base sm:text-lg mb-6 leading-relaxed")>
                        "I'm a passionate full-stack developer with a strong foundation in both frontend and backend technologies. With expertise in React, TypeScript, Java, and Spring Boot, I enjoy building robust, scalable applications that deliver exceptional user experiences. My journey in software development began with a curiosity about how digital solutions can solve real-world problems, and that drive continues to fuel my work today."
                    </p>
                    <p class=paragraph("text-base sm:text-lg mb-8 leading-relaxed")>
                        "I thrive in collaborative environments where I can contribute my technical skills while continuously learning from others. My goal is to create software that not only meets technical requirements but also positively impacts users' lives. I'm currently seeking opportunities to apply my skills in a dynamic team focused on building innovative solutions."
                    </p>
                    <div class="flex justify-center">
                        <a
                            href=PROFILE.resume_path
                            download=PROFILE.resume_file_name
                            class=move || {
                                theme
                                    .get()
                                    .classes(
                                        "inline-flex items-center gap-2 px-4 py-2 rounded-md font-medium hover:scale-105 transition-all duration-300 hover:glow",
                                        "bg-gradient-to-r from-purple-500 to-pink-500 hover:from-purple-600 hover:to-pink-600",
                                        "bg-gradient-to-r from-purple-600 to-pink-600 hover:from-purple-700 hover:to-pink-700 text-white",
                                    )
                            }
                        >
                            <span aria-hidden="true">"⬇"</span>
                            "Download Resume"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
