//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::AppConfig;

/// Milliseconds a toast stays on screen
const TOAST_TIMEOUT_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Loaded once at startup
    pub config: StoredValue<AppConfig>,
    /// Visible toasts, oldest first - read
    pub toasts: ReadSignal<Vec<Toast>>,
    /// Visible toasts - write
    set_toasts: WriteSignal<Vec<Toast>>,
    next_toast: StoredValue<u32>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let (toasts, set_toasts) = signal(Vec::new());
        Self {
            config: StoredValue::new(config),
            toasts,
            set_toasts,
            next_toast: StoredValue::new(0),
        }
    }

    /// Client for the configured backend
    pub fn api(&self) -> ApiClient {
        ApiClient::new(self.config.get_value())
    }

    /// Show a toast that dismisses itself
    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        let id = self.next_toast.get_value();
        self.next_toast.set_value(id.wrapping_add(1));
        let message = message.into();
        match kind {
            ToastKind::Error => log::error!("[APP] {}", message),
            _ => log::info!("[APP] {}", message),
        }
        self.set_toasts.update(|t| t.push(Toast { id, kind, message }));

        let ctx = *self;
        gloo_timers::callback::Timeout::new(TOAST_TIMEOUT_MS, move || ctx.dismiss(id)).forget();
    }

    pub fn dismiss(&self, id: u32) {
        // The owner may be gone by the time a timer fires
        let _ = self.set_toasts.try_update(|t| t.retain(|toast| toast.id != id));
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

/// Generation counter for async loads. Each load takes a ticket; a response
/// is applied only if no newer load began and the owner is still alive.
#[derive(Clone, Copy)]
pub struct LoadTicket(RwSignal<u64>);

impl LoadTicket {
    pub fn new() -> Self {
        Self(RwSignal::new(0))
    }

    pub fn begin(&self) -> u64 {
        self.0.update_untracked(|g| *g += 1);
        self.0.get_untracked()
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.try_get_untracked() == Some(ticket)
    }
}
