mod category_modal;
mod tree_item;
mod view;

pub use view::Categories;
