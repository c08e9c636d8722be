use std::io::Write;
use std::time::Duration;
use colored::*;

use crate::constants::{PROGRESS_DOTS, PROGRESS_TICK_MS};

pub fn print_success(message: &str) {
    println!("{}", message.green());
}

pub fn print_warning(message: &str) {
    println!("{}", message.yellow());
}

/// Print `message` followed by a short row of dots before a slow call.
/// With `animate` off the dots are printed at once.
pub async fn show_dots(message: &str, animate: bool) {
    print!("{}", message);
    let _ = std::io::stdout().flush();
    for _ in 0..PROGRESS_DOTS {
        if animate {
            tokio::time::sleep(Duration::from_millis(PROGRESS_TICK_MS)).await;
        }
        print!(".");
        let _ = std::io::stdout().flush();
    }
    println!();
}
