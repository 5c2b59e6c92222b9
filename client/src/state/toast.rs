//! Toast notification queue.
//!
//! Flows report outcomes as [`Notice`] values; pages hand them to
//! [`notify`], which queues a toast and (in the browser) schedules its
//! dismissal.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// How long a toast stays on screen before auto-dismissal.
pub const TOAST_TTL_MS: u32 = 5_000;
/// Oldest toasts are dropped beyond this many.
pub const MAX_TOASTS: usize = 4;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Success,
    Destructive,
}

/// A user-facing outcome message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: Option<String>,
    pub variant: ToastVariant,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: Some(description.into()), variant: ToastVariant::Success }
    }

    pub fn error(title: impl Into<String>, description: Option<String>) -> Self {
        Self { title: title.into(), description, variant: ToastVariant::Destructive }
    }

    pub fn title_only(title: impl Into<String>, variant: ToastVariant) -> Self {
        Self { title: title.into(), description: None, variant }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    next_id: u64,
    pub items: Vec<Toast>,
}

impl ToastState {
    /// Queue a notice and return its toast id.
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, notice });
        if self.items.len() > MAX_TOASTS {
            let excess = self.items.len() - MAX_TOASTS;
            self.items.drain(..excess);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}

/// Show `notice` and schedule its dismissal.
pub fn notify(toasts: RwSignal<ToastState>, notice: Notice) {
    match notice.variant {
        ToastVariant::Success => log::info!("{}", notice.title),
        ToastVariant::Destructive => log::warn!("{}: {}", notice.title, notice.description.as_deref().unwrap_or("")),
    }
    let mut id = 0;
    toasts.update(|t| id = t.push(notice));
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
        toasts.update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}
