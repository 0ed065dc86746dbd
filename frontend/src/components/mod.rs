pub mod root_view;

pub use root_view::RootView;
