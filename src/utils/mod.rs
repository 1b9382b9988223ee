pub mod logging;
pub mod output;
pub(crate) mod progress_bar_builder;
