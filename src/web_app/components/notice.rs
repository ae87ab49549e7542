// web_app/components/notice.rs - Transient success / error messages
//
// App provides a `Notices` handle through context; any page can push to it
// and the stack in the top right corner renders the current queue.

use leptos::prelude::*;

use crate::web_app::model::{Notice, NoticeLevel, NoticeQueue};

/// Shared handle on the notice queue
#[derive(Clone, Copy)]
pub struct Notices(RwSignal<NoticeQueue>);

impl Notices {
    pub fn new() -> Self {
        Self(RwSignal::new(NoticeQueue::default()))
    }

    pub fn success(&self, message: impl Into<String>) {
        let message = message.into();
        self.0.try_update(|queue| queue.success(message));
    }

    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        self.0.try_update(|queue| queue.error(message));
    }

    pub fn dismiss(&self, id: uuid::Uuid) {
        self.0.try_update(|queue| queue.dismiss(id));
    }

    pub fn current(&self) -> Vec<Notice> {
        self.0.with(|queue| queue.notices().to_vec())
    }
}

impl Default for Notices {
    fn default() -> Self {
        Self::new()
    }
}

/// Registers a fresh queue for the component tree below the caller
pub fn provide_notices() -> Notices {
    let notices = Notices::new();
    provide_context(notices);
    notices
}

/// The queue provided by App
pub fn use_notices() -> Notices {
    expect_context::<Notices>()
}

fn notice_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "flex items-start gap-3 p-4 rounded-lg shadow-lg border bg-green-50 border-green-200 text-green-800",
        NoticeLevel::Error => "flex items-start gap-3 p-4 rounded-lg shadow-lg border bg-red-50 border-red-200 text-red-800",
    }
}

/// Stack of notices, newest at the bottom
#[component]
pub fn NoticeStack() -> impl IntoView {
    let notices = use_notices();

    view! {
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2 w-80">
            <For
                each=move || notices.current()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class=notice_class(notice.level) role="alert">
                            <p class="flex-1 text-sm font-medium">{notice.message}</p>
                            <button
                                type="button"
                                class="text-lg leading-none opacity-60 hover:opacity-100"
                                on:click=move |_| notices.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
