//! View Abstraction
//!
//! What the flows need from the page: user dialogs, a form reset and the
//! orders table body.

use crate::table::TableRow;

pub const ORDER_CREATED: &str = "Pedido criado com sucesso!";
pub const FILE_UPLOADED: &str = "Arquivo enviado com sucesso!";
pub const NO_FILE_SELECTED: &str = "Selecione um arquivo para enviar.";

pub trait OrderView {
    /// Blocking user notification (`window.alert` in the browser)
    fn alert(&self, message: &str);

    /// Clear every field of the new-order form
    fn reset_order_form(&self);

    /// Replace the whole table body
    fn render_orders(&self, rows: Vec<TableRow>);
}
