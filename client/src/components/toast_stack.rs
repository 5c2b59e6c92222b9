//! Stack of active toast notifications.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState, ToastVariant};

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let destructive = toast.notice.variant == ToastVariant::Destructive;
                    view! {
                        <div class="toast" class:toast--destructive=destructive role="status">
                            <div class="toast__title">{toast.notice.title}</div>
                            {toast
                                .notice
                                .description
                                .map(|text| view! { <div class="toast__description">{text}</div> })}
                            <button
                                class="toast__close"
                                type="button"
                                title="Dismiss"
                                on:click=move |_| toasts.update(|t| t.dismiss(id))
                            >
                                "\u{d7}"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
