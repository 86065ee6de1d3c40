//! Todo List Component
//!
//! Renders every todo as a block keyed by its id. A single click listener on
//! the container handles all delete controls.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::view::{ClickTarget, DELETE_CLASS, ITEM_CLASS, LIST_ID};

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_app_context();
    let rendered = ctx.dom.rendered;

    view! {
        <div
            id=LIST_ID
            node_ref=ctx.dom.list_ref
            on:click=move |ev: web_sys::MouseEvent| ctx.list_clicked(ClickTarget::from_event(&ev))
        >
            // Unkeyed: each change rebuilds every block
            {move || rendered.get().into_iter().map(|todo| view! {
                <div id=todo.id.to_string() class=ITEM_CLASS>
                    <span class="todo-content">{todo.content}</span>
                    <button class=DELETE_CLASS>"Delete"</button>
                </div>
            }).collect_view()}
        </div>
    }
}
