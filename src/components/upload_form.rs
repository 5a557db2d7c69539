//! Upload Form Component
//!
//! Single file picker sent through the pre-signed URL flow.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use pedidos_flows::{upload_file, OrderView};
use tracing::error;

use crate::commands::read_selected_file;
use crate::context::use_app_context;
use crate::store::{use_page_store, PageStateStoreFields};

#[component]
pub fn UploadForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_page_store();
    let file_input = NodeRef::<html::Input>::new();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(input) = file_input.get_untracked() else { return };
        let api = ctx.api();
        let view = ctx.view;

        *store.uploading().write() = true;
        spawn_local(async move {
            match read_selected_file(&input).await {
                Ok(file) => {
                    let _ = upload_file(&api, &view, file.as_ref()).await;
                }
                Err(e) => {
                    error!(error = %e, "Could not read the selected file");
                    view.alert(&e);
                }
            }
            *store.uploading().write() = false;
        });
    };

    view! {
        <form class="upload-form" on:submit=on_submit>
            <h2>"Enviar arquivo"</h2>
            <input type="file" node_ref=file_input />
            <button type="submit" disabled=move || store.uploading().get()>
                {move || if store.uploading().get() { "Enviando..." } else { "Enviar" }}
            </button>
        </form>
    }
}
