//! Checks on the page surface the dashboard expects.

use siaee_panel::DomIds;

/// Ids of required controls that are not in the document.
pub fn missing_controls(ids: &DomIds) -> Vec<String> {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return vec![ids.refresh_button.clone(), ids.filter_button.clone()],
    };

    [&ids.refresh_button, &ids.filter_button]
        .into_iter()
        .filter(|id| document.get_element_by_id(id).is_none())
        .cloned()
        .collect()
}

/// Log a warning for each missing control. Initialization carries on either way.
pub fn warn_missing_controls(ids: &DomIds) {
    let missing = missing_controls(ids);
    if !missing.is_empty() {
        log::warn!("Dashboard controls not found in the DOM: {}", missing.join(", "));
    }
}
