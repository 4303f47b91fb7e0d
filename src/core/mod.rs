//! Pure logic: geofence math, filters, counters, paging and form checks.
//! Nothing here touches the network or the terminal.

pub mod filters;
pub mod geofence;
pub mod pagination;
pub mod stats;
pub mod validation;
