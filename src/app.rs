//! Todo App
//!
//! Composition root: builds the backend, store, view and coordinator once.

use std::rc::Rc;

use leptos::prelude::*;

use crate::commands::HttpTodoBackend;
use crate::components::{NewTodoForm, TodoList};
use crate::config::ClientConfig;
use crate::context::{AppContext, AppCoordinator};
use crate::store::TodoStore;
use crate::view::DomView;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    log::info!("Using todo API at {}", config.base_url());

    let dom = DomView::new();
    let coordinator = AppCoordinator::new(
        HttpTodoBackend::new(config),
        Rc::new(TodoStore::new()),
        Rc::new(dom),
    );
    let ctx = AppContext::new(coordinator, dom);
    provide_context(ctx);
    ctx.start();

    let rendered = dom.rendered;

    view! {
        <main class="todo-app">
            <h1>"Todos"</h1>

            <NewTodoForm />

            <TodoList />

            <p class="item-count">{move || format!("{} items", rendered.with(|todos| todos.len()))}</p>
        </main>
    }
}
