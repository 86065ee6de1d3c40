//! Todo Store
//!
//! Observable holder of the current collection. Every write replaces the
//! whole list and then synchronously notifies the single subscriber.

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::Todo;

type ChangeCallback = Rc<dyn Fn()>;

#[derive(Default)]
pub struct TodoStore {
    todos: RefCell<Vec<Todo>>,
    on_change: RefCell<Option<ChangeCallback>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current collection
    pub fn collection(&self) -> Vec<Todo> {
        self.todos.borrow().clone()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.todos.borrow().is_empty()
    }

    /// Replace the collection, then fire the change callback if one is registered
    pub fn set_collection(&self, todos: Vec<Todo>) {
        *self.todos.borrow_mut() = todos;

        // Borrows are released before calling out: the callback reads the store.
        let callback = self.on_change.borrow().clone();
        if let Some(callback) = callback {
            callback();
        }
    }

    /// Register the change callback, replacing any previous one
    pub fn subscribe(&self, callback: impl Fn() + 'static) {
        *self.on_change.borrow_mut() = Some(Rc::new(callback));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn todo(id: &str, content: &str) -> Todo {
        Todo {
            id: id.into(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_set_without_subscriber() {
        let store = TodoStore::new();
        assert!(store.is_empty());

        store.set_collection(vec![todo("1", "a")]);
        assert_eq!(store.collection(), vec![todo("1", "a")]);
    }

    #[test]
    fn test_callback_fires_once_per_set_after_replacement() {
        let store = Rc::new(TodoStore::new());
        let seen = Rc::new(RefCell::new(Vec::<Vec<Todo>>::new()));

        let weak = Rc::downgrade(&store);
        let log = seen.clone();
        store.subscribe(move || {
            if let Some(store) = weak.upgrade() {
                log.borrow_mut().push(store.collection());
            }
        });

        let first = vec![todo("1", "a")];
        let second = vec![todo("1", "a"), todo("2", "b")];
        store.set_collection(first.clone());
        store.set_collection(second.clone());
        store.set_collection(Vec::new());

        assert_eq!(*seen.borrow(), vec![first, second, Vec::new()]);
    }

    #[test]
    fn test_subscribe_replaces_previous() {
        let store = TodoStore::new();
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));

        let counter = first.clone();
        store.subscribe(move || counter.set(counter.get() + 1));
        let counter = second.clone();
        store.subscribe(move || counter.set(counter.get() + 1));

        store.set_collection(vec![todo("1", "a")]);
        store.set_collection(vec![]);

        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 2);
    }

    #[test]
    fn test_callback_may_resubscribe() {
        let store = Rc::new(TodoStore::new());
        let fired = Rc::new(Cell::new(0));

        let weak = Rc::downgrade(&store);
        let counter = fired.clone();
        store.subscribe(move || {
            counter.set(counter.get() + 1);
            if let Some(store) = weak.upgrade() {
                store.subscribe(|| {});
            }
        });

        store.set_collection(vec![]);
        store.set_collection(vec![]);
        assert_eq!(fired.get(), 1);
    }
}
