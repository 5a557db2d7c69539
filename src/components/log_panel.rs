//! Log Panel Component
//!
//! Collapsible view of the logger's recent lines. Renders nothing when the
//! logger could not be installed.

use leptos::prelude::*;
use rolling_logger::LogBuffer;

#[component]
pub fn LogPanel() -> impl IntoView {
    use_context::<LogBuffer>().map(|buffer| {
        let (lines, set_lines) = signal(Vec::<String>::new());
        let on_refresh = move |_| set_lines.set(buffer.recent_lines());

        view! {
            <details class="log-panel">
                <summary>"Registro de eventos"</summary>
                <button type="button" on:click=on_refresh>"Atualizar"</button>
                <pre class="log-lines">{move || lines.get().join("\n")}</pre>
            </details>
        }
    })
}
