mod balance_overview;
mod expense_chart;
mod recent_transactions;
mod upcoming_payments;
mod view;

pub use view::Dashboard;
