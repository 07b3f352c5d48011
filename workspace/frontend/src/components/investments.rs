mod investment_card;
mod investment_modal;
mod performance_modal;
mod value_modal;
mod view;

pub use view::Investments;
