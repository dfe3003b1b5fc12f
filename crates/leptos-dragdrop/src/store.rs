//! Drag Store
//!
//! One store per open document, shared through context. Every change is
//! pushed synchronously to all subscribers so that the insertion markers
//! of every row agree after each pointer event.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::state::{DragState, Reorder};

pub type SubscriptionId = u64;

type Observer = Arc<dyn Fn(&DragState) + Send + Sync>;

#[derive(Default)]
struct Inner {
    state: DragState,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: SubscriptionId,
}

/// Shared drag state with publish/subscribe
#[derive(Clone, Default)]
pub struct DragStore {
    inner: Arc<Mutex<Inner>>,
}

impl DragStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> DragState {
        self.lock().state.clone()
    }

    pub fn subscribe(&self, observer: impl Fn(&DragState) + Send + Sync + 'static) -> SubscriptionId {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.observers.push((id, Arc::new(observer)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.lock().observers.retain(|(sid, _)| *sid != id);
    }

    /// Apply `f` and notify observers if it reports a change.
    /// Observers run after the lock is released, so they may read the store.
    fn update(&self, f: impl FnOnce(&mut DragState) -> bool) {
        let (state, observers) = {
            let mut inner = self.lock();
            if !f(&mut inner.state) {
                return;
            }
            let observers: Vec<Observer> = inner.observers.iter().map(|(_, o)| o.clone()).collect();
            (inner.state.clone(), observers)
        };
        for observer in observers {
            observer(&state);
        }
    }

    /// Begin a drag; an active drag is ended first
    pub fn start(&self, id: impl Into<String>, index: usize) {
        if self.snapshot().is_dragging {
            log::debug!("[DND] Drag started while another was active, ending it");
            self.end();
        }
        let id = id.into();
        self.update(move |state| {
            state.start(id, index);
            true
        });
    }

    pub fn update_insertion_index(&self, index: usize) {
        self.update(|state| state.is_dragging && state.update_insertion_index(index));
    }

    pub fn end(&self) {
        self.update(|state| {
            let changed = *state != DragState::default();
            state.end();
            changed
        });
    }

    pub fn commit(&self) -> Option<Reorder> {
        self.lock().state.commit()
    }

    /// Commit then end, whatever the outcome
    pub fn finish(&self) -> Option<Reorder> {
        let reorder = self.commit();
        self.end();
        reorder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn recording(store: &DragStore) -> Arc<Mutex<Vec<DragState>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        store.subscribe(move |s| sink.lock().unwrap().push(s.clone()));
        seen
    }

    #[test]
    fn test_all_observers_see_each_change() {
        let store = DragStore::new();
        let first = recording(&store);
        let second = recording(&store);

        store.start("a", 0);
        store.update_insertion_index(2);

        let a = first.lock().unwrap().clone();
        let b = second.lock().unwrap().clone();
        assert_eq!(a.len(), 2);
        assert_eq!(a, b);
        assert_eq!(a[1].insertion_index, Some(2));
    }

    #[test]
    fn test_unchanged_insertion_not_broadcast() {
        let store = DragStore::new();
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        store.subscribe(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });

        store.start("a", 0);
        store.update_insertion_index(1);
        store.update_insertion_index(1);
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_insertion_ignored_when_idle() {
        let store = DragStore::new();
        let seen = recording(&store);
        store.update_insertion_index(3);
        assert!(seen.lock().unwrap().is_empty());
        assert_eq!(store.snapshot().insertion_index, None);
    }

    #[test]
    fn test_restart_ends_previous_drag() {
        let store = DragStore::new();
        store.start("a", 0);
        store.update_insertion_index(2);
        let seen = recording(&store);

        store.start("b", 1);
        let states = seen.lock().unwrap().clone();
        assert_eq!(states.len(), 2);
        assert_eq!(states[0], DragState::default());
        assert_eq!(states[1].dragged_id.as_deref(), Some("b"));
        assert_eq!(states[1].insertion_index, None);
    }

    #[test]
    fn test_finish_clears_even_without_move() {
        let store = DragStore::new();
        store.start("a", 1);
        store.update_insertion_index(1);
        assert_eq!(store.finish(), None);
        assert_eq!(store.snapshot(), DragState::default());

        store.start("a", 0);
        store.update_insertion_index(3);
        assert_eq!(store.finish(), Some(Reorder { from_index: 0, to_index: 2 }));
        assert!(!store.snapshot().is_dragging);
    }

    #[test]
    fn test_unsubscribe() {
        let store = DragStore::new();
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        let id = store.subscribe(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });
        store.start("a", 0);
        store.unsubscribe(id);
        store.end();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_observer_can_read_store() {
        let store = DragStore::new();
        let reader = store.clone();
        let seen = Arc::new(Mutex::new(None));
        let sink = seen.clone();
        store.subscribe(move |_| {
            *sink.lock().unwrap() = Some(reader.snapshot().is_dragging);
        });
        store.start("a", 0);
        assert_eq!(*seen.lock().unwrap(), Some(true));
    }
}
