//! Styled terminal messages.

use console::style;

pub fn header(message: &str) {
    println!("{}", style(message).bold().underlined());
}

pub fn sub_header(message: &str) {
    println!("{}", style(message).bold());
}

pub fn info(message: &str) {
    println!("{}", style(message).blue());
}

pub fn warning(message: &str) {
    println!("{}", style(message).yellow());
}

pub fn success(message: &str) {
    println!("✅ {}", style(message).green());
}

pub fn error(message: &str) {
    eprintln!("{}", style(message).red().for_stderr());
}
