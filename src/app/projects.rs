use leptos::prelude::*;

use crate::{
    content::{Project, PROJECTS},
    navigation::Section,
    theme::Theme,
};

use super::heading::SectionHeading;

#[component]
pub fn Projects(theme: Memo<Theme>) -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="py-12 sm:py-20 animate-fadeInUp">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    theme
                    title="My Projects"
                    subtitle="Here are some of the projects I've worked on that showcase my skills and expertise."
                />
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6 sm:gap-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard theme project index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(theme: Memo<Theme>, project: &'static Project, index: usize) -> impl IntoView {
    let link_class = move || {
        theme
            .get()
            .classes(
                "flex items-center gap-1 text-sm font-medium hover:scale-105 transition-all duration-300",
                "text-purple-400 hover:text-purple-300",
                "text-purple-600 hover:text-purple-700",
            )
    };

    view! {
        <div
            class=move || {
                theme
                    .get()
                    .classes(
                        "rounded-lg overflow-hidden transition-all duration-300 hover:shadow-2xl glassmorphism flex flex-col project-card",
                        "bg-gray-800/30",
                        "bg-gray-100/30",
                    )
            }
            style=format!("animation-delay: {:.1}s", index as f32 * 0.2)
        >
            <div class="relative h-40 sm:h-48 overflow-hidden">
                <img
                    src=project.cover_image()
                    alt=format!("{} screenshot", project.title)
                    class="object-cover w-full h-full transition-transform duration-500 hover:scale-105"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-purple-900/50 to-transparent" />
            </div>
            <div class="p-6 space-y-2">
                <h3 class=move || {
                    theme.get().classes("text-lg sm:text-xl font-bold", "text-purple-300", "text-purple-700")
                }>{project.title}</h3>
                <div class="flex flex-wrap gap-2 mt-2">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class=move || {
                                    theme
                                        .get()
                                        .classes(
                                            "px-2 py-1 text-xs rounded-full",
                                            "bg-purple-900/50 text-purple-300",
                                            "bg-purple-200/50 text-purple-700",
                                        )
                                }>{*tech}</span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="px-6 flex-grow">
                <ul class=move || {
                    theme.get().classes("text-sm list-disc pl-5 space-y-2", "text-gray-300", "text-gray-700")
                }>{project.description.iter().map(|point| view! { <li>{*point}</li> }).collect_view()}</ul>
            </div>
            <div class="p-6 flex justify-between">
                <a href=project.github target="_blank" rel="noopener noreferrer" class=link_class>
                    <i class="devicon-github-plain" />
                    "GitHub"
                </a>
                <a href=project.demo target="_blank" rel="noopener noreferrer" class=link_class>
                    <span aria-hidden="true">"↗"</span>
                    "Live Demo"
                </a>
            </div>
        </div>
    }
}
