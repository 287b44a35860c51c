use colored::Colorize;
use std::error::Error;

/// Print one failure to stderr: a tagged headline plus the `source()` chain.
pub fn report(err: &dyn Error) {
    eprintln!("{} {err}", "error:".red().bold());
    let mut cause = err.source();
    while let Some(c) = cause {
        eprintln!("  caused by: {c}");
        cause = c.source();
    }
}
