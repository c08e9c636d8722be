pub mod output;

pub use output::{print_success, print_warning, show_dots};
