use std::time::Duration;

use leptos::prelude::*;

use crate::{
    contact::{Notification, NotificationLevel},
    theme::Theme,
};

const TOAST_LIFETIME: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, PartialEq)]
struct Toast {
    id: usize,
    notification: Notification,
}

/// Queue of transient notifications shown in the top-right corner.
#[derive(Debug, Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<usize>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// Shows `notification` until it is clicked or its lifetime runs out.
    pub fn push(&self, notification: Notification) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|t| t.push(Toast { id, notification }));

        let toaster = *self;
        set_timeout(move || toaster.dismiss(id), TOAST_LIFETIME);
    }

    fn dismiss(&self, id: usize) {
        self.toasts.try_update(|t| t.retain(|toast| toast.id != id));
    }
}

#[component]
pub fn ToastSurface(toaster: Toaster, theme: Memo<Theme>) -> impl IntoView {
    view! {
        <div class="fixed top-4 right-4 z-[60] flex flex-col gap-2 max-w-sm" aria-live="polite">
            <For
                each=move || toaster.toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let Toast { id, notification } = toast;
                    let accent = match notification.level {
                        NotificationLevel::Success => "border-green-500",
                        NotificationLevel::Error => "border-red-500",
                    };
                    view! {
                        <div
                            role="status"
                            on:click=move |_| toaster.dismiss(id)
                            class=move || {
                                format!(
                                    "cursor-pointer px-4 py-3 rounded-md shadow-lg border-l-4 animate-fadeInUp {} {}",
                                    accent,
                                    theme.get().pick("bg-gray-800 text-gray-100", "bg-white text-gray-900"),
                                )
                            }
                        >
                            {notification.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
