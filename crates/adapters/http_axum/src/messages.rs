//! Localized (Norwegian) response messages.

use std::fmt::Display;

/// Confirmation after a spot was removed.
pub fn spot_removed(id: impl Display) -> String {
    format!("Plass med id {id} ble fjernet fra databasen.")
}

/// A spot delete targeted an id that does not exist.
pub fn spot_missing(id: impl Display) -> String {
    format!("Plass med id {id} finnes ikke i databasen.")
}

/// Confirmation after a user was removed.
pub fn user_removed(id: impl Display) -> String {
    format!("Bruker med id {id} ble fjernet fra databasen.")
}

/// A user delete targeted an id that does not exist.
pub fn user_missing(id: impl Display) -> String {
    format!("Bruker med id {id} finnes ikke i databasen.")
}
