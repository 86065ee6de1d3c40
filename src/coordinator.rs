//! Coordinator
//!
//! Wires user events to the backend and the store, and the store to the view.
//! Both flows wait for the server before touching state; nothing is optimistic.

use std::cell::Cell;
use std::rc::Rc;

use crate::commands::TodoBackend;
use crate::error::ApiResult;
use crate::models::NewTodo;
use crate::store::TodoStore;
use crate::view::{ClickTarget, TodoView};

pub struct Coordinator<B, V> {
    backend: B,
    store: Rc<TodoStore>,
    view: Rc<V>,
    add_attached: Cell<bool>,
}

impl<B, V> Coordinator<B, V>
where
    B: TodoBackend,
    V: TodoView + 'static,
{
    pub fn new(backend: B, store: Rc<TodoStore>, view: Rc<V>) -> Self {
        Self {
            backend,
            store,
            view,
            add_attached: Cell::new(false),
        }
    }

    #[cfg(test)]
    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    /// Whether add clicks are handled yet (only after the first load)
    #[cfg(test)]
    pub fn add_attached(&self) -> bool {
        self.add_attached.get()
    }

    /// Subscribe rendering, load the list, then start handling add clicks
    pub async fn start(&self) -> ApiResult<()> {
        let store = Rc::downgrade(&self.store);
        let view = self.view.clone();
        self.store.subscribe(move || {
            if let Some(store) = store.upgrade() {
                view.render_todos(&store.collection());
            }
        });

        let todos = self.backend.list_todos().await?;
        log::debug!("Loaded {} todos", todos.len());
        self.store.set_collection(todos);
        self.add_attached.set(true);
        Ok(())
    }

    /// Create a todo from the input text (empty text included) and append it
    pub async fn add_todo(&self) -> ApiResult<()> {
        if !self.add_attached.get() {
            log::debug!("Add ignored, initial load has not completed");
            return Ok(());
        }

        let content = self.view.input_value();
        let created = self
            .backend
            .create_todo(&NewTodo { content: &content })
            .await?;
        log::debug!("Created todo {}", created.id);

        let mut todos = self.store.collection();
        todos.push(created);
        self.store.set_collection(todos);
        self.view.clear_input();
        Ok(())
    }

    /// Delegated click inside the list container
    ///
    /// On a delete control: delete, then replace the collection with a fresh
    /// server list rather than removing the todo locally.
    pub async fn handle_list_click(&self, target: ClickTarget) -> ApiResult<()> {
        let Some(id) = target.todo_to_delete() else {
            if target.is_delete_control {
                log::warn!("Delete control clicked outside an item block");
            }
            return Ok(());
        };

        self.backend.delete_todo(&id).await?;
        log::debug!("Deleted todo {}", id);

        let todos = self.backend.list_todos().await?;
        self.store.set_collection(todos);
        Ok(())
    }
}
