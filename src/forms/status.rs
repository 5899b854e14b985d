//! Parent/child contract between a form and its tab host.

use tokio::sync::mpsc;

/// Descriptor a tab host hands to a form, and the payload a form reports
/// back when it wants the host to switch tabs or change edit mode.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormStatus<T> {
    pub tab_index: usize,
    pub edit: bool,
    pub data: T,
}

/// Channel a form uses to report status changes upward.
pub type FormStatusSender<T> = mpsc::UnboundedSender<FormStatus<T>>;

/// Create the channel a tab host listens on.
pub fn status_channel<T>() -> (FormStatusSender<T>, mpsc::UnboundedReceiver<FormStatus<T>>) {
    mpsc::unbounded_channel()
}
