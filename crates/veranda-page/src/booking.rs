//! Booking form
//!
//! Validation and submission of the booking request form. Submissions
//! are validated locally and reported through the dialog and diagnostic
//! channels; nothing leaves the page.

use veranda_dom::{DomTree, NodeId};
use veranda_runtime::{CivilDate, Console, DialogQueue};

/// Fields every submission must fill.
pub const REQUIRED_FIELDS: [&str; 6] = ["name", "phone", "checkin", "checkout", "guests", "cottage"];

/// Border color marking an invalid control.
pub const INVALID_BORDER: &str = "#e74c3c";
/// Border color marking a valid control.
pub const VALID_BORDER: &str = "#e0e0e0";

/// Message for a checkout date not after the checkin date.
pub const DATE_ORDER_MESSAGE: &str = "Departure date must be later than arrival date";
/// Message for blank required fields.
pub const REQUIRED_MESSAGE: &str = "Please fill in all required fields";
/// Message for an accepted submission.
pub const CONFIRMATION_MESSAGE: &str =
    "Thank you for your request! We will contact you shortly to confirm your booking.";

/// An accepted booking request. Field values are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub name: String,
    pub phone: String,
    pub checkin: String,
    pub checkout: String,
    pub guests: String,
    pub cottage: String,
}

/// Terminal outcome of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All checks passed; the form was reset.
    Accepted(BookingRequest),
    /// Checkout was not strictly after checkin.
    RejectedDates,
    /// One or more required fields were blank.
    RejectedMissing,
}

/// Named controls of a form, in document order.
fn controls(tree: &DomTree, form: NodeId) -> Vec<(NodeId, String, String)> {
    tree.descendants(form)
        .filter_map(|(id, node)| {
            let control = node.as_element()?.control.as_ref()?;
            Some((id, control.name.clone(), control.value.clone()))
        })
        .collect()
}

fn set_border(tree: &mut DomTree, node: NodeId, color: &str) {
    if let Ok(el) = tree.element_mut(node) {
        el.style.set("border-color", color);
    }
}

/// Validate and settle one submission attempt.
///
/// The required-field pass marks every control first. A failing date
/// comparison then short-circuits with its own message before the
/// aggregate required-fields message is considered.
pub fn process_submit(
    tree: &mut DomTree,
    form: NodeId,
    dialogs: &mut DialogQueue,
    console: &mut Console,
) -> SubmitOutcome {
    let entries = controls(tree, form);
    let value_of = |name: &str| {
        entries
            .iter()
            .find(|(_, n, _)| n == name)
            .map(|(_, _, v)| v.clone())
    };

    let mut missing = false;
    for field in REQUIRED_FIELDS {
        match entries.iter().find(|(_, n, _)| n == field) {
            Some((node, _, value)) if !value.trim().is_empty() => {
                set_border(tree, *node, VALID_BORDER);
            }
            Some((node, _, _)) => {
                set_border(tree, *node, INVALID_BORDER);
                missing = true;
            }
            None => missing = true,
        }
    }

    let checkin = value_of("checkin").and_then(|v| CivilDate::parse_iso(&v));
    let checkout = value_of("checkout").and_then(|v| CivilDate::parse_iso(&v));
    if let (Some(checkin), Some(checkout)) = (checkin, checkout) {
        if checkout <= checkin {
            if let Some((node, _, _)) = entries.iter().find(|(_, n, _)| n == "checkout") {
                set_border(tree, *node, INVALID_BORDER);
            }
            dialogs.alert(DATE_ORDER_MESSAGE);
            tracing::debug!(target: "veranda::booking", %checkin, %checkout, "rejected: date order");
            return SubmitOutcome::RejectedDates;
        }
    }

    if missing {
        dialogs.alert(REQUIRED_MESSAGE);
        tracing::debug!(target: "veranda::booking", "rejected: blank required fields");
        return SubmitOutcome::RejectedMissing;
    }

    let request = BookingRequest {
        name: value_of("name").unwrap_or_default(),
        phone: value_of("phone").unwrap_or_default(),
        checkin: value_of("checkin").unwrap_or_default(),
        checkout: value_of("checkout").unwrap_or_default(),
        guests: value_of("guests").unwrap_or_default(),
        cottage: value_of("cottage").unwrap_or_default(),
    };

    dialogs.alert(CONFIRMATION_MESSAGE);
    reset_form(tree, form);
    console.log(format!("Booking data: {request:?}"));
    tracing::info!(target: "veranda::booking", name = %request.name, "booking accepted");
    SubmitOutcome::Accepted(request)
}

/// Restore every control of a form to its default value.
pub fn reset_form(tree: &mut DomTree, form: NodeId) {
    let control_nodes: Vec<NodeId> = tree
        .descendants(form)
        .filter(|(_, node)| node.as_element().is_some_and(|el| el.control.is_some()))
        .map(|(id, _)| id)
        .collect();
    for node in control_nodes {
        if let Ok(el) = tree.element_mut(node) {
            if let Some(control) = el.control.as_mut() {
                control.reset();
            }
        }
    }
}
