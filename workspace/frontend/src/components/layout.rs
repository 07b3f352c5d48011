mod breadcrumb;
mod navbar;
mod sidebar;

pub mod page;
