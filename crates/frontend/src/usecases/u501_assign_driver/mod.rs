mod dialog;
mod state;
mod view;

pub use view::AssignDriverView;
