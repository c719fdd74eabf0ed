//! Subcommand implementations for the `phoru` binary.

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod serve_ops;
pub mod table_ops;
pub mod translate_ops;
