//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::HttpTodoBackend;
use crate::coordinator::Coordinator;
use crate::error::ApiResult;
use crate::view::{ClickTarget, DomView};

pub type AppCoordinator = Coordinator<HttpTodoBackend, DomView>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The single coordinator, created once by `App`
    coordinator: StoredValue<Rc<AppCoordinator>, LocalStorage>,
    /// Element refs and rendered list
    pub dom: DomView,
}

impl AppContext {
    pub fn new(coordinator: AppCoordinator, dom: DomView) -> Self {
        Self {
            coordinator: StoredValue::new_local(Rc::new(coordinator)),
            dom,
        }
    }

    /// Initial load; add clicks are handled once it resolves
    pub fn start(&self) {
        let coordinator = self.coordinator.get_value();
        spawn_local(async move {
            report("load todos", coordinator.start().await);
        });
    }

    pub fn add_todo(&self) {
        let coordinator = self.coordinator.get_value();
        spawn_local(async move {
            report("add todo", coordinator.add_todo().await);
        });
    }

    pub fn list_clicked(&self, target: ClickTarget) {
        let coordinator = self.coordinator.get_value();
        spawn_local(async move {
            report("delete todo", coordinator.handle_list_click(target).await);
        });
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Failed flows leave the page unchanged; the error only goes to the console.
fn report(action: &str, result: ApiResult<()>) {
    if let Err(err) = result {
        log::error!("Failed to {}: {}", action, err);
    }
}
