//! Material dialogs
//!
//! - view.rs: create / edit dialogs (shared form fields)
//! - delete_confirm.rs: delete confirmation

mod delete_confirm;
mod view;

pub use delete_confirm::DeleteMaterialDialog;
pub use view::{CreateMaterialDialog, EditMaterialDialog};
