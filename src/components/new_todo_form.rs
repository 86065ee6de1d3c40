//! New Todo Form Component
//!
//! Text input plus the add button.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::view::{ADD_BUTTON_ID, INPUT_ID};

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <form class="new-todo-form">
            <input
                type="text"
                id=INPUT_ID
                placeholder="Add new todo..."
                node_ref=ctx.dom.input_ref
            />
            <button
                type="submit"
                id=ADD_BUTTON_ID
                node_ref=ctx.dom.add_button_ref
                on:click=move |ev: web_sys::MouseEvent| {
                    ev.prevent_default();
                    ctx.add_todo();
                }
            >
                "Add"
            </button>
        </form>
    }
}
