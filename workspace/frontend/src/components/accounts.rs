mod account_card;
mod account_modal;
mod view;

pub use view::Accounts;
