use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Сколько миллисекунд уведомление остаётся на экране
pub const NOTICE_DISPLAY_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Результат операции для показа пользователю
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Toast {
    id: u64,
    notice: Notice,
}

/// Сервис всплывающих уведомлений (toast)
#[derive(Clone, Copy)]
pub struct NotificationService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// Показать уведомление; оно исчезнет само через `NOTICE_DISPLAY_MS`
    pub fn show(&self, notice: Notice) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|t| t.push(Toast { id, notice }));

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_DISPLAY_MS).await;
            toasts.try_update(|t| t.retain(|toast| toast.id != id));
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|t| t.retain(|toast| toast.id != id));
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Стопка уведомлений в углу экрана; клик по уведомлению закрывает его
#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || service.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let is_error = toast.notice.is_error();
                    view! {
                        <div
                            class="toast"
                            class:toast--error=is_error
                            class:toast--success=!is_error
                            role="status"
                            on:click=move |_| service.dismiss(id)
                        >
                            {toast.notice.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
