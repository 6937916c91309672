//! Output macros for the pz-config CLI.
//!
//! Values and confirmations go to stdout; diagnostics go to stderr so
//! scripts can capture a looked-up value cleanly.

#[macro_export]
macro_rules! pz_println {
    () => {
        println!();
    };
    ($($arg:tt)*) => {
        println!("{}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! pz_error {
    ($($arg:tt)*) => {
        eprintln!("{}", format!($($arg)*));
    }
}
