//! Presentation
//!
//! The page surface the coordinator drives: one text input, one add button,
//! one list container with a delete control inside every rendered block.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::{Todo, TodoId};

pub const INPUT_ID: &str = "todo-input";
pub const ADD_BUTTON_ID: &str = "add-todo";
pub const LIST_ID: &str = "todo-list";
pub const ITEM_CLASS: &str = "todo-item";
/// Marks delete controls for the container's delegated click listener
pub const DELETE_CLASS: &str = "delete-todo";

const ITEM_SELECTOR: &str = ".todo-item";
const DELETE_SELECTOR: &str = ".delete-todo";

/// What the coordinator needs from the page
pub trait TodoView {
    /// Current text of the input field, unvalidated
    fn input_value(&self) -> String;

    fn clear_input(&self);

    /// Replace the list container's contents with one block per todo
    fn render_todos(&self, todos: &[Todo]);
}

/// Element clicked inside the list container, reduced to what delegation inspects
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClickTarget {
    pub is_delete_control: bool,
    /// Element id of the enclosing block, if any
    pub block_id: Option<String>,
}

impl ClickTarget {
    #[cfg(test)]
    pub fn delete_control(block_id: &str) -> Self {
        Self {
            is_delete_control: true,
            block_id: Some(block_id.to_string()),
        }
    }

    pub fn from_event(ev: &web_sys::MouseEvent) -> Self {
        let Some(element) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        else {
            return Self::default();
        };

        // Clicks may land on a child of the control (icon, label span).
        let closest = |selector: &str| element.closest(selector).ok().flatten();
        Self {
            is_delete_control: closest(DELETE_SELECTOR).is_some(),
            block_id: closest(ITEM_SELECTOR)
                .map(|block| block.id())
                .filter(|id| !id.is_empty()),
        }
    }

    /// Id of the todo to delete, or None when the click is not on a delete control
    pub fn todo_to_delete(&self) -> Option<TodoId> {
        if !self.is_delete_control {
            return None;
        }
        self.block_id.as_deref().map(TodoId::from)
    }
}

/// DOM-backed view
///
/// Holds stable references to the input, add button and list container.
/// The list renders from `rendered`, so every `render_todos` rebuilds all blocks.
#[derive(Clone, Copy)]
pub struct DomView {
    pub input_ref: NodeRef<html::Input>,
    pub add_button_ref: NodeRef<html::Button>,
    pub list_ref: NodeRef<html::Div>,
    pub rendered: RwSignal<Vec<Todo>>,
}

impl DomView {
    pub fn new() -> Self {
        Self {
            input_ref: NodeRef::new(),
            add_button_ref: NodeRef::new(),
            list_ref: NodeRef::new(),
            rendered: RwSignal::new(Vec::new()),
        }
    }
}

impl Default for DomView {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoView for DomView {
    fn input_value(&self) -> String {
        self.input_ref
            .get_untracked()
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn clear_input(&self) {
        if let Some(input) = self.input_ref.get_untracked() {
            input.set_value("");
        }
    }

    fn render_todos(&self, todos: &[Todo]) {
        self.rendered.set(todos.to_vec());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selectors_match_rendered_classes() {
        assert_eq!(ITEM_SELECTOR, format!(".{}", ITEM_CLASS));
        assert_eq!(DELETE_SELECTOR, format!(".{}", DELETE_CLASS));
    }

    #[test]
    fn test_delete_control_yields_block_id() {
        let target = ClickTarget::delete_control("42");
        assert_eq!(target.todo_to_delete(), Some(TodoId::from("42")));
    }

    #[test]
    fn test_other_elements_yield_nothing() {
        let content = ClickTarget {
            is_delete_control: false,
            block_id: Some("42".to_string()),
        };
        assert_eq!(content.todo_to_delete(), None);

        let orphan = ClickTarget {
            is_delete_control: true,
            block_id: None,
        };
        assert_eq!(orphan.todo_to_delete(), None);
        assert_eq!(ClickTarget::default().todo_to_delete(), None);
    }
}
