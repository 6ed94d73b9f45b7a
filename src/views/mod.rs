pub mod check_view;

pub use check_view::{CheckView, ClickHandler};
