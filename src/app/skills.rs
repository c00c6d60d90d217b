use leptos::prelude::*;

use crate::{
    content::{SKILLS, SOFT_SKILLS},
    navigation::Section,
    theme::Theme,
};

use super::heading::SectionHeading;

#[component]
pub fn Skills(theme: Memo<Theme>) -> impl IntoView {
    let delay = |index: usize| format!("animation-delay: {:.1}s", index as f32 * 0.1);

    view! {
        <section
            id=Section::Skills.id()
            class=move || theme.get().classes("py-12 sm:py-20", "bg-gray-900/50", "bg-gray-200/50")
        >
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    theme
                    title="Technical Skills"
                    subtitle="Here are the technologies and tools I work with."
                />
                <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-5 gap-6 sm:gap-8 max-w-4xl mx-auto">
                    {SKILLS
                        .iter()
                        .enumerate()
                        .map(|(index, skill)| {
                            view! {
                                <div
                                    class=move || {
                                        theme
                                            .get()
                                            .classes(
                                                "flex flex-col items-center p-4 rounded-lg glassmorphism shadow-md hover:shadow-lg transition-all duration-300 hover:-translate-y-1 hover:glow animate-fadeInUp",
                                                "bg-gray-800/30",
                                                "bg-gray-100/30",
                                            )
                                    }
                                    style=delay(index)
                                >
                                    <div class="w-10 h-10 sm:w-12 sm:h-12 mb-3 relative">
                                        <img
                                            src=skill.icon
                                            alt=skill.name
                                            class="object-contain w-full h-full skill-icon"
                                        />
                                    </div>
                                    <span class=move || {
                                        theme.get().classes("text-sm font-medium", "text-purple-300", "text-purple-700")
                                    }>{skill.name}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="mt-12 sm:mt-16 max-w-2xl mx-auto">
                    <h3 class=move || {
                        theme
                            .get()
                            .classes(
                                "text-lg sm:text-xl font-bold text-center mb-6",
                                "text-purple-300",
                                "text-purple-700",
                            )
                    }>"Soft Skills"</h3>
                    <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 gap-4">
                        {SOFT_SKILLS
                            .iter()
                            .enumerate()
                            .map(|(index, skill)| {
                                view! {
                                    <div
                                        class=move || {
                                            theme
                                                .get()
                                                .classes(
                                                    "text-center p-3 rounded-lg glassmorphism animate-fadeInUp",
                                                    "text-purple-300 bg-gray-800/30",
                                                    "text-purple-700 bg-gray-100/30",
                                                )
                                        }
                                        style=delay(index)
                                    >
                                        {*skill}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
