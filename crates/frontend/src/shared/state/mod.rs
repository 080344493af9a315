use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Holder of an immutable UI state snapshot.
///
/// Every transition reads the current snapshot and replaces it wholesale.
pub trait StateStore<T> {
    /// `None` once the owning view has been disposed
    fn snapshot(&self) -> Option<T>;

    fn replace(&self, value: T);

    fn transition(&self, f: impl FnOnce(T) -> T) {
        if let Some(current) = self.snapshot() {
            self.replace(f(current));
        }
    }
}

/// Signal-backed store used by the components. Writes after the view is
/// gone are dropped.
impl<T: Clone + 'static> StateStore<T> for RwSignal<T, LocalStorage> {
    fn snapshot(&self) -> Option<T> {
        self.try_get_untracked()
    }

    fn replace(&self, value: T) {
        let _ = self.try_set(value);
    }
}

impl<T: Clone> StateStore<T> for Rc<RefCell<T>> {
    fn snapshot(&self) -> Option<T> {
        Some(self.borrow().clone())
    }

    fn replace(&self, value: T) {
        *self.borrow_mut() = value;
    }
}
