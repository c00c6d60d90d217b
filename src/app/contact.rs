use leptos::{ev::SubmitEvent, html, prelude::*, task::spawn_local};

use crate::{
    contact::{
        submit_contact, ContactFields, EmailJsRelay, FormSurface, Notification, SubmissionState,
    },
    content::PROFILE,
    navigation::Section,
    theme::Theme,
};

use super::{heading::SectionHeading, toast::Toaster};

/// Contact form as seen by the submission logic: state lives in a signal,
/// notifications go to the toaster and fields are the mounted inputs.
#[derive(Clone, Copy)]
struct ContactForm {
    state: RwSignal<SubmissionState>,
    toaster: Toaster,
    name: NodeRef<html::Input>,
    email: NodeRef<html::Input>,
    message: NodeRef<html::Textarea>,
}

impl ContactForm {
    fn fields(&self) -> Option<ContactFields> {
        Some(ContactFields {
            from_name: self.name.get_untracked()?.value(),
            from_email: self.email.get_untracked()?.value(),
            message: self.message.get_untracked()?.value(),
        })
    }
}

impl FormSurface for ContactForm {
    fn state(&self) -> SubmissionState {
        self.state.get_untracked()
    }

    fn set_state(&self, state: SubmissionState) {
        self.state.set(state);
    }

    fn notify(&self, notification: Notification) {
        self.toaster.push(notification);
    }

    fn reset_fields(&self) {
        if let Some(el) = self.name.get_untracked() {
            el.set_value("");
        }
        if let Some(el) = self.email.get_untracked() {
            el.set_value("");
        }
        if let Some(el) = self.message.get_untracked() {
            el.set_value("");
        }
    }
}

#[component]
pub fn Contact(theme: Memo<Theme>, toaster: Toaster) -> impl IntoView {
    let form = ContactForm {
        state: RwSignal::new(SubmissionState::Idle),
        toaster,
        name: NodeRef::new(),
        email: NodeRef::new(),
        message: NodeRef::new(),
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(fields) = form.fields() else {
            log::error!("contact form submitted before it was mounted");
            return;
        };
        spawn_local(async move {
            let relay = EmailJsRelay::from_build_env();
            if let Err(e) = submit_contact(&relay, &form, fields).await {
                log::debug!("ignored contact submission: {}", e);
            }
        });
    };

    let label_class = move || {
        theme.get().classes("block text-sm font-medium mb-1", "text-gray-300", "text-gray-700")
    };
    let field_class = move |base: &'static str| {
        move || {
            theme
                .get()
                .classes(
                    base,
                    "bg-gray-800/50 border-gray-700 text-gray-100 placeholder-gray-500",
                    "bg-gray-200/50 border-gray-300 text-gray-900 placeholder-gray-400",
                )
        }
    };

    view! {
        <section id=Section::Contact.id() class="py-12 sm:py-20 animate-fadeInUp">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    theme
                    title="Get In Touch"
                    subtitle="Have a project in mind or want to discuss opportunities? Feel free to reach out!"
                />
                <div class="grid md:grid-cols-2 gap-8 sm:gap-12 max-w-4xl mx-auto contact-grid">
                    <div class=move || {
                        theme.get().classes("glassmorphism p-6 rounded-lg", "bg-gray-800/30", "bg-gray-100/30")
                    }>
                        <form on:submit=on_submit class="space-y-4">
                            <div>
                                <label for="from_name" class=label_class>
                                    "Name"
                                </label>
                                <input
                                    node_ref=form.name
                                    id="from_name"
                                    name="from_name"
                                    placeholder="Your name"
                                    required=true
                                    class=field_class("w-full px-3 py-2 rounded-md border")
                                />
                            </div>
                            <div>
                                <label for="from_email" class=label_class>
                                    "Email"
                                </label>
                                <input
                                    node_ref=form.email
                                    id="from_email"
                                    name="from_email"
                                    type="email"
                                    placeholder="Your email"
                                    required=true
                                    class=field_class("w-full px-3 py-2 rounded-md border")
                                />
                            </div>
                            <div>
                                <label for="message" class=label_class>
                                    "Message"
                                </label>
                                <textarea
                                    node_ref=form.message
                                    id="message"
                                    name="message"
                                    placeholder="Your message"
                                    required=true
                                    class=field_class("w-full min-h-[150px] px-3 py-2 rounded-md border")
                                ></textarea>
                            </div>
                            <button
                                type="submit"
                                disabled=move || form.state.get().is_submitting()
                                class=move || {
                                    theme
                                        .get()
                                        .classes(
                                            "w-full px-4 py-2 rounded-md font-medium hover:scale-105 transition-all duration-300 hover:glow disabled:opacity-60 disabled:cursor-not-allowed",
                                            "bg-gradient-to-r from-purple-500 to-pink-500 hover:from-purple-600 hover:to-pink-600",
                                            "bg-gradient-to-r from-purple-600 to-pink-600 hover:from-purple-700 hover:to-pink-700 text-white",
                                        )
                                }
                            >
                                {move || form.state.get().button_label()}
                            </button>
                        </form>
                    </div>
                    <div class="flex flex-col justify-center space-y-6">
                        <ContactChannel
                            theme
                            icon="not-italic"
                            glyph="✉"
                            title="Email"
                            href=PROFILE.mailto()
                            text=PROFILE.email
                            external=false
                        />
                        <ContactChannel
                            theme
                            icon="devicon-github-plain"
                            title="GitHub"
                            href=PROFILE.github_url.to_string()
                            text=PROFILE.github_handle
                            external=true
                        />
                        <ContactChannel
                            theme
                            icon="devicon-linkedin-plain"
                            title="LinkedIn"
                            href=PROFILE.linkedin_url.to_string()
                            text=PROFILE.linkedin_handle
                            external=true
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactChannel(
    theme: Memo<Theme>,
    icon: &'static str,
    #[prop(optional)] glyph: &'static str,
    title: &'static str,
    href: String,
    text: &'static str,
    external: bool,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4 animate-fadeInUp">
            <div class="p-3 rounded-full glassmorphism">
                <i class=format!("{} text-2xl text-purple-400 contact-icon", icon)>{glyph}</i>
            </div>
            <div>
                <h3 class=move || {
                    theme.get().classes("text-lg font-medium", "text-purple-300", "text-purple-700")
                }>{title}</h3>
                <a
                    href=href
                    target=external.then_some("_blank")
                    rel=external.then_some("noopener noreferrer")
                    class=move || {
                        theme
                            .get()
                            .classes(
                                "hover:scale-105 transition-all duration-300",
                                "text-gray-400 hover:text-purple-400",
                                "text-gray-600 hover:text-purple-600",
                            )
                    }
                >
                    {text}
                </a>
            </div>
        </div>
    }
}
