use leptos::prelude::*;

use crate::theme::Theme;

#[component]
pub fn SectionHeading(
    theme: Memo<Theme>,
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="text-center mb-12 animate-fadeInUp">
            <h2 class=move || {
                theme
                    .get()
                    .classes(
                        "text-2xl sm:text-3xl md:text-4xl font-bold bg-gradient-to-r text-transparent bg-clip-text",
                        "from-purple-400 to-pink-400",
                        "from-purple-600 to-pink-600",
                    )
            }>{title}</h2>
            <div class="mt-2 h-1 w-20 bg-purple-500 mx-auto"></div>
            {subtitle
                .map(|text| {
                    view! {
                        <p class=move || {
                            theme
                                .get()
                                .classes(
                                    "mt-4 text-base sm:text-lg max-w-2xl mx-auto",
                                    "text-gray-400",
                                    "text-gray-600",
                                )
                        }>{text}</p>
                    }
                })}
        </div>
    }
}
