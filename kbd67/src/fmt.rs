//! Logging macros dispatching to `log` or `defmt`, whichever is enabled.
//!
//! With neither feature enabled the arguments are still evaluated by reference,
//! so a log-only variable does not trigger unused warnings.
#![macro_use]
#![allow(unused_macros)]

macro_rules! __log_dispatch {
    ($level:ident, $s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "log")]
            ::log::$level!($s $(, $x)*);
            #[cfg(all(feature = "defmt", not(feature = "log")))]
            ::defmt::$level!($s $(, $x)*);
            #[cfg(not(any(feature = "log", feature = "defmt")))]
            let _ = ($( & $x ),*);
        }
    };
}

macro_rules! trace {
    ($($arg:tt)*) => {
        __log_dispatch!(trace, $($arg)*)
    };
}

macro_rules! debug {
    ($($arg:tt)*) => {
        __log_dispatch!(debug, $($arg)*)
    };
}

macro_rules! info {
    ($($arg:tt)*) => {
        __log_dispatch!(info, $($arg)*)
    };
}

macro_rules! warn {
    ($($arg:tt)*) => {
        __log_dispatch!(warn, $($arg)*)
    };
}

macro_rules! error {
    ($($arg:tt)*) => {
        __log_dispatch!(error, $($arg)*)
    };
}
