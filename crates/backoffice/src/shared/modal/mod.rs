//! Модальные диалоги дашборда: форма записи и подтверждение удаления

pub mod delete_confirmation;
pub mod editor;

pub use delete_confirmation::{DeleteConfirmation, DeleteState};
pub use editor::{EditorMode, FormEditor};
