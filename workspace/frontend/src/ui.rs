//! Building blocks shared by every page.

pub mod chart;
pub mod confirm;
pub mod error;
pub mod fetch_hook;
pub mod form;
pub mod loading;
pub mod money;
pub mod toast;
