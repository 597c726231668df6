use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Info => "toast toast--info",
            ToastKind::Error => "toast toast--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

/// Visible notifications, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    const MAX_VISIBLE: usize = 5;

    pub fn push(&mut self, kind: ToastKind, title: &str, description: &str) -> u64 {
        self.next_id += 1;
        self.items.push(Toast {
            id: self.next_id,
            kind,
            title: title.to_string(),
            description: description.to_string(),
        });
        if self.items.len() > Self::MAX_VISIBLE {
            self.items.remove(0);
        }
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Toast notifications, provided through context
#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
    duration_ms: u32,
}

impl ToastService {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
            duration_ms,
        }
    }

    pub fn success(&self, title: &str, description: &str) {
        self.show(ToastKind::Success, title, description);
    }

    pub fn info(&self, title: &str, description: &str) {
        self.show(ToastKind::Info, title, description);
    }

    pub fn error(&self, title: &str, description: &str) {
        log::warn!("{}: {}", title, description);
        self.show(ToastKind::Error, title, description);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }

    fn show(&self, kind: ToastKind, title: &str, description: &str) {
        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, title, description));

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(this.duration_ms).await;
            this.dismiss(id);
        });
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not found")
}

/// Renders the toast stack in the bottom-right corner
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toast();

    view! {
        <div class="toast-host">
            <For
                each=move || toasts.queue.with(|q| q.items().to_vec())
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() on:click=move |_| toasts.dismiss(id)>
                            <div class="toast__title">{toast.title}</div>
                            <div class="toast__description">{toast.description}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut q = ToastQueue::default();
        let first = q.push(ToastKind::Success, "Orders Assigned", "1 orders assigned");
        let second = q.push(ToastKind::Error, "Driver Not Found", "Could not find the selected driver.");
        assert_ne!(first, second);
        assert_eq!(q.items().len(), 2);

        q.dismiss(first);
        assert_eq!(q.items().len(), 1);
        assert_eq!(q.items()[0].title, "Driver Not Found");

        q.dismiss(first);
        assert_eq!(q.items().len(), 1);
    }

    #[test]
    fn test_oldest_dropped_when_full() {
        let mut q = ToastQueue::default();
        for i in 0..7 {
            q.push(ToastKind::Info, &format!("t{i}"), "");
        }
        let titles: Vec<_> = q.items().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["t2", "t3", "t4", "t5", "t6"]);
    }
}
