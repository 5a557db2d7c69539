//! Orders Table Component
//!
//! "List orders" button and the table it fills.

use leptos::prelude::*;
use leptos::task::spawn_local;
use pedidos_flows::{list_orders, TableRow, COLUMNS};

use crate::context::use_app_context;
use crate::store::{use_page_store, PageStateStoreFields};

fn render_row(row: TableRow) -> AnyView {
    match row {
        TableRow::Order(order) => {
            let cells = order.cells().map(str::to_string);
            view! {
                <tr>
                    {cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                </tr>
            }
            .into_any()
        }
        TableRow::Placeholder(message) => view! {
            <tr class="placeholder-row">
                <td colspan="5">{message}</td>
            </tr>
        }
        .into_any(),
    }
}

#[component]
pub fn OrdersTable() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_page_store();

    let on_load = move |_| {
        if store.loading_orders().get_untracked() {
            return;
        }
        let api = ctx.api();
        let view = ctx.view;

        *store.loading_orders().write() = true;
        spawn_local(async move {
            let _ = list_orders(&api, &view).await;
            *store.loading_orders().write() = false;
        });
    };

    view! {
        <section class="orders-section">
            <h2>"Pedidos"</h2>
            <button type="button" on:click=on_load disabled=move || store.loading_orders().get()>
                {move || if store.loading_orders().get() { "Carregando..." } else { "Listar pedidos" }}
            </button>
            <table class="orders-table">
                <thead>
                    <tr>
                        {COLUMNS.iter().map(|title| view! { <th>{*title}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {move || store.rows().get().into_iter().map(render_row).collect_view()}
                </tbody>
            </table>
        </section>
    }
}
