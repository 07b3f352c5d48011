mod filter;
mod table;
mod transaction_modal;
mod view;

pub use table::TransactionTable;
pub use view::Transactions;
