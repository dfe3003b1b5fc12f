//! Leptos DragDrop Utilities
//!
//! Drag-to-reorder for flat Leptos lists using mouse events.
//! Uses a movement threshold to distinguish click from drag, and
//! recomputes the insertion index from the hovered row on every move.
//!
//! The shared [`DragStore`] is the single source of truth; [`ReorderSignals`]
//! mirrors it into a signal so every row re-renders its markers from the
//! same state.

mod state;
mod store;

pub use state::{insertion_index_for_pointer, DragState, Reorder};
pub use store::{DragStore, SubscriptionId};

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// Mousedown recorded, drag not started yet
#[derive(Clone, Debug, PartialEq)]
struct PendingDrag {
    id: String,
    index: usize,
    start_x: i32,
    start_y: i32,
}

/// Reactive handle on a [`DragStore`]
#[derive(Clone, Copy)]
pub struct ReorderSignals {
    store: StoredValue<DragStore>,
    /// Mirror of the store, updated synchronously on every change
    pub state: ReadSignal<DragState>,
    pending: RwSignal<Option<PendingDrag>>,
}

impl ReorderSignals {
    pub fn is_dragging(&self) -> bool {
        self.state.with(|s| s.is_dragging)
    }

    pub fn is_dragged(&self, id: &str) -> bool {
        self.state.with(|s| s.is_dragged(id))
    }

    pub fn marker_before(&self, index: usize) -> bool {
        self.state.with(|s| s.shows_marker_before(index))
    }

    pub fn marker_after(&self, index: usize, len: usize) -> bool {
        self.state.with(|s| s.shows_marker_after(index, len))
    }
}

/// Mirror `store` into signals owned by the current reactive owner.
/// The subscription is dropped when the owner is cleaned up.
pub fn create_reorder_signals(store: DragStore) -> ReorderSignals {
    let (state, set_state) = signal(store.snapshot());
    let subscription = store.subscribe(move |s| {
        let _ = set_state.try_set(s.clone());
    });

    let cleanup_store = store.clone();
    on_cleanup(move || cleanup_store.unsubscribe(subscription));

    ReorderSignals {
        store: StoredValue::new(store),
        state,
        pending: RwSignal::new(None),
    }
}

/// Create the signals and provide them to descendants
pub fn provide_reorder_context(store: DragStore) -> ReorderSignals {
    let dnd = create_reorder_signals(store);
    provide_context(dnd);
    dnd
}

pub fn use_reorder() -> ReorderSignals {
    expect_context::<ReorderSignals>()
}

fn is_interactive(target: Option<web_sys::EventTarget>) -> bool {
    let Some(target) = target else {
        return false;
    };
    target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlSelectElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
}

/// Create mousedown handler for a draggable row
/// Records a pending drag with its start position
pub fn make_on_mousedown(dnd: ReorderSignals, id: String, index: usize) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || is_interactive(ev.target()) {
            return;
        }
        dnd.pending.set(Some(PendingDrag {
            id: id.clone(),
            index,
            start_x: ev.client_x(),
            start_y: ev.client_y(),
        }));
    }
}

/// Create mousemove handler for a row: recompute the insertion index
/// from the pointer's position inside the row's bounding box
pub fn make_on_row_mousemove(dnd: ReorderSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if !dnd.state.with_untracked(|s| s.is_dragging) {
            return;
        }
        let Some(row) = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        let rect = row.get_bounding_client_rect();
        let insertion = insertion_index_for_pointer(index, ev.client_y() as f64, rect.top(), rect.height());
        dnd.store.with_value(|store| store.update_insertion_index(insertion));
    }
}

/// Bind window-level mousemove/mouseup/keydown handlers for the gesture.
/// `on_reorder` receives the committed move; no-op drops are swallowed.
pub fn bind_global_handlers<F>(dnd: ReorderSignals, on_reorder: F)
where
    F: Fn(Reorder) + Send + Sync + 'static,
{
    // Start dragging once the pointer moved past the threshold
    let mousemove = window_event_listener(ev::mousemove, move |ev: web_sys::MouseEvent| {
        let Some(pending) = dnd.pending.get_untracked() else {
            return;
        };
        if dnd.state.with_untracked(|s| s.is_dragging) {
            return;
        }
        let dx = (ev.client_x() - pending.start_x).abs();
        let dy = (ev.client_y() - pending.start_y).abs();
        if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
            log::debug!("[DND] Drag start: id={}, index={}", pending.id, pending.index);
            dnd.store.with_value(|store| store.start(pending.id.clone(), pending.index));
        }
    });

    let mouseup = window_event_listener(ev::mouseup, move |_ev: web_sys::MouseEvent| {
        // Clear pending state first
        dnd.pending.set(None);
        if !dnd.state.with_untracked(|s| s.is_dragging) {
            return;
        }
        match dnd.store.with_value(DragStore::finish) {
            Some(reorder) => {
                log::debug!("[DND] Drop: {} -> {}", reorder.from_index, reorder.to_index);
                on_reorder(reorder);
            }
            None => log::debug!("[DND] Drop without move"),
        }
    });

    let keydown = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            dnd.pending.set(None);
            dnd.store.with_value(DragStore::end);
        }
    });

    on_cleanup(move || {
        mousemove.remove();
        mouseup.remove();
        keydown.remove();
    });
}
