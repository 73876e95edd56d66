pub mod fragments;
pub mod layout;

pub use fragments::{modal, modal_close_button, toast, toast_oob, ToastKind};
pub use layout::page;
