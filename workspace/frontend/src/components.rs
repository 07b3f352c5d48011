pub mod accounts;
pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod investments;
pub mod layout;
pub mod scheduled;
pub mod transactions;
