//! Process-wide toast overlay: a stack of visible toasts in creation order,
//! each removed by its own cancellable timer or by explicit dismissal.

use std::sync::{mpsc, Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use app_logging::{app_debug, app_trace};
use resumo_core::{Toast, ToastKind};
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

pub type ToastId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveToast {
    pub id: ToastId,
    pub toast: Toast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    Expired,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastEvent {
    Shown(ActiveToast),
    Dismissed { id: ToastId, reason: DismissReason },
}

/// Receives toast lifecycle events, typically to redraw the overlay.
pub trait ToastSink: Send + Sync {
    fn emit(&self, event: ToastEvent);
}

pub struct ChannelToastSink {
    tx: mpsc::Sender<ToastEvent>,
}

impl ChannelToastSink {
    pub fn new(tx: mpsc::Sender<ToastEvent>) -> Self {
        Self { tx }
    }
}

impl ToastSink for ChannelToastSink {
    fn emit(&self, event: ToastEvent) {
        let _ = self.tx.send(event);
    }
}

struct Entry {
    active: ActiveToast,
    cancel: CancellationToken,
}

#[derive(Default)]
struct Overlay {
    next_id: ToastId,
    entries: Vec<Entry>,
}

struct Inner {
    runtime: Handle,
    // Created on the first toast.
    overlay: Mutex<Option<Overlay>>,
    sink: Option<Arc<dyn ToastSink>>,
}

#[derive(Clone)]
pub struct ToastCenter {
    inner: Arc<Inner>,
}

impl ToastCenter {
    /// Timers are scheduled on `runtime`, so `notify` may be called from any thread.
    pub fn new(runtime: Handle) -> Self {
        Self::build(runtime, None)
    }

    pub fn with_sink(runtime: Handle, sink: Arc<dyn ToastSink>) -> Self {
        Self::build(runtime, Some(sink))
    }

    fn build(runtime: Handle, sink: Option<Arc<dyn ToastSink>>) -> Self {
        Self {
            inner: Arc::new(Inner {
                runtime,
                overlay: Mutex::new(None),
                sink,
            }),
        }
    }

    /// Shows a toast and schedules its removal after `toast.duration_ms`.
    pub fn notify(&self, toast: Toast) -> ToastId {
        let cancel = CancellationToken::new();
        let duration = Duration::from_millis(toast.duration_ms);
        let active = {
            let mut guard = self.lock();
            let overlay = guard.get_or_insert_with(Overlay::default);
            overlay.next_id += 1;
            let active = ActiveToast {
                id: overlay.next_id,
                toast,
            };
            overlay.entries.push(Entry {
                active: active.clone(),
                cancel: cancel.clone(),
            });
            active
        };
        let id = active.id;
        app_debug!(
            "Toast {} shown kind={} duration_ms={}",
            id,
            active.toast.kind,
            active.toast.duration_ms
        );
        self.emit(ToastEvent::Shown(active));

        let center = self.clone();
        self.inner.runtime.spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(duration) => {
                    center.remove(id, DismissReason::Expired);
                }
                _ = cancel.cancelled() => {
                    app_trace!("Toast {} timer cancelled", id);
                }
            }
        });
        id
    }

    pub fn notify_with(&self, message: impl Into<String>, kind: ToastKind, duration_ms: u64) -> ToastId {
        self.notify(Toast::new(message, kind).with_duration(duration_ms))
    }

    pub fn info(&self, message: impl Into<String>) -> ToastId {
        self.notify(Toast::info(message))
    }

    pub fn success(&self, message: impl Into<String>) -> ToastId {
        self.notify(Toast::success(message))
    }

    pub fn warning(&self, message: impl Into<String>) -> ToastId {
        self.notify(Toast::warning(message))
    }

    pub fn error(&self, message: impl Into<String>) -> ToastId {
        self.notify(Toast::error(message))
    }

    /// Early dismissal by the user. Returns false if the toast is already gone.
    pub fn dismiss(&self, id: ToastId) -> bool {
        self.remove(id, DismissReason::User)
    }

    /// Visible toasts in creation order.
    pub fn visible(&self) -> Vec<ActiveToast> {
        self.lock()
            .as_ref()
            .map(|overlay| overlay.entries.iter().map(|e| e.active.clone()).collect())
            .unwrap_or_default()
    }

    fn remove(&self, id: ToastId, reason: DismissReason) -> bool {
        let removed = {
            let mut guard = self.lock();
            guard.as_mut().and_then(|overlay| {
                let index = overlay.entries.iter().position(|e| e.active.id == id)?;
                Some(overlay.entries.remove(index))
            })
        };
        let Some(entry) = removed else {
            return false;
        };
        entry.cancel.cancel();
        app_debug!("Toast {} dismissed ({:?})", id, reason);
        self.emit(ToastEvent::Dismissed { id, reason });
        true
    }

    fn emit(&self, event: ToastEvent) {
        if let Some(sink) = &self.inner.sink {
            sink.emit(event);
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<Overlay>> {
        self.inner
            .overlay
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
