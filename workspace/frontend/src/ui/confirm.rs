/// Asks the user to confirm a destructive action. Anything other than an
/// explicit "OK" counts as "Cancel".
pub fn confirm(message: &str) -> bool {
    let confirmed = web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false);
    log::debug!("Confirmation '{}' answered: {}", message, confirmed);
    confirmed
}

pub fn confirm_delete(label: &str, name: &str) -> bool {
    confirm(&format!("Are you sure you want to delete {} '{}'?", label.to_lowercase(), name))
}
