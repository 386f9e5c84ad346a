//! Terminal signup form: field entry, submit-time validation, popup alerts
//! and a read-only confirmation view.

pub mod cli;
pub mod config;
pub mod form;
pub mod logging;
pub mod notify;
pub mod scheduler;
pub mod shutdown;
pub mod ui;
