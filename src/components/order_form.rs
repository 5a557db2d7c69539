//! Order Form Component
//!
//! New-order form. Field values are read with `FormData` on submit.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use pedidos_flows::{submit_order, OrderForm as OrderFormData};
use tracing::error;
use web_sys::FormData;

use crate::context::use_app_context;
use crate::store::{use_page_store, PageStateStoreFields};

pub const FIELD_ORDER_ID: &str = "pedidoId";
pub const FIELD_CUSTOMER_ID: &str = "clienteId";
pub const FIELD_PRODUCT: &str = "produto";
pub const FIELD_QUANTITY: &str = "quantidade";

fn field(data: &FormData, name: &str) -> String {
    data.get(name).as_string().unwrap_or_default()
}

fn read_order_form(data: &FormData) -> OrderFormData {
    OrderFormData {
        order_id: field(data, FIELD_ORDER_ID),
        customer_id: field(data, FIELD_CUSTOMER_ID),
        product: field(data, FIELD_PRODUCT),
        quantity: field(data, FIELD_QUANTITY),
    }
}

/// Form for creating a single-item order
#[component]
pub fn OrderForm(form_ref: NodeRef<html::Form>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_page_store();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(form) = form_ref.get_untracked() else { return };
        let data = match FormData::new_with_form(&form) {
            Ok(data) => data,
            Err(e) => {
                error!(error = ?e, "Could not read form data");
                return;
            }
        };
        let order = read_order_form(&data);
        let api = ctx.api();
        let view = ctx.view;

        *store.submitting().write() = true;
        spawn_local(async move {
            // Outcome already reported through the view.
            let _ = submit_order(&api, &view, &order).await;
            *store.submitting().write() = false;
        });
    };

    view! {
        <form class="order-form" node_ref=form_ref on:submit=on_submit>
            <h2>"Novo pedido"</h2>
            <label>
                "ID do pedido"
                <input type="text" name=FIELD_ORDER_ID required=true />
            </label>
            <label>
                "ID do cliente"
                <input type="text" name=FIELD_CUSTOMER_ID required=true />
            </label>
            <label>
                "Produto"
                <input type="text" name=FIELD_PRODUCT required=true />
            </label>
            <label>
                "Quantidade"
                <input type="text" inputmode="numeric" name=FIELD_QUANTITY required=true />
            </label>
            <button type="submit" disabled=move || store.submitting().get()>
                {move || if store.submitting().get() { "Enviando..." } else { "Criar pedido" }}
            </button>
        </form>
    }
}
