mod alert;
mod button;
mod field;
mod spinner;
mod toast;

pub(crate) use alert::Alert;
pub(crate) use button::Button;
pub(crate) use field::{SelectField, TextField};
pub(crate) use spinner::Spinner;
pub(crate) use toast::{ToastProvider, use_toasts};
