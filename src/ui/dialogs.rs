use rfd::{MessageButtons, MessageDialog, MessageLevel};

/// Blocking error dialog.
pub(super) fn show_error(title: &str, message: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(title)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}
