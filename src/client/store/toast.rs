use std::time::Duration;

use dioxus::dioxus_core::spawn_forever;
use dioxus::prelude::*;

use crate::auth::delay;

/// How long a toast stays on screen unless dismissed.
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn alert_class(self) -> &'static str {
        match self {
            ToastKind::Success => "alert-success",
            ToastKind::Error => "alert-error",
            ToastKind::Info => "alert-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

/// Toasts currently on screen, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, title: &str, description: &str) -> u64 {
        self.next_id += 1;
        self.toasts.push(Toast {
            id: self.next_id,
            kind,
            title: title.to_string(),
            description: description.to_string(),
        });

        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Shared handle for raising toasts from any component.
#[derive(Clone, Copy, PartialEq)]
pub struct Toaster {
    queue: Signal<ToastQueue>,
}

impl Toaster {
    pub fn new(queue: Signal<ToastQueue>) -> Self {
        Self { queue }
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.read().toasts().to_vec()
    }

    pub fn success(&mut self, title: &str, description: &str) {
        self.show(ToastKind::Success, title, description);
    }

    pub fn error(&mut self, title: &str, description: &str) {
        self.show(ToastKind::Error, title, description);
    }

    pub fn info(&mut self, title: &str, description: &str) {
        self.show(ToastKind::Info, title, description);
    }

    pub fn dismiss(&mut self, id: u64) {
        self.queue.write().dismiss(id);
    }

    /// Queues a toast and schedules its dismissal.
    ///
    /// The timer runs on the root scope so it outlives the component that raised the toast.
    fn show(&mut self, kind: ToastKind, title: &str, description: &str) {
        let id = self.queue.write().push(kind, title, description);
        let mut toaster = *self;

        spawn_forever(async move {
            delay::sleep(TOAST_DURATION).await;
            toaster.dismiss(id);
        });
    }
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>()
}
