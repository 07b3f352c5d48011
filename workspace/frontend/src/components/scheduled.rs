mod list;
mod scheduled_modal;
mod view;

pub use view::ScheduledTransactions;
