pub mod inspect_token;
pub mod serve;
pub mod show_config;

pub use inspect_token::inspect_token;
pub use serve::serve;
pub use show_config::show_config;
