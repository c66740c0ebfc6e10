//! Two native functions and a small value type, exposed to Python.
//!
//! Everything here is plain Rust and usable without an interpreter. Building
//! with the `python` feature adds the `numeric_bridge` extension module (see
//! the `python` module), which maps these items onto Python functions and a
//! `DataPoint` class.

mod data_point;
#[cfg(feature = "python")]
mod python;

use std::io::Write;

pub use data_point::DataPoint;

/// Value of the extension module's `__version__` attribute.
pub const MODULE_VERSION: &str = "1.0";

/// Adds two numbers.
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Print the greeting to standard output.
pub fn hello_world() {
    let stdout = std::io::stdout();
    if let Err(err) = greet(&mut stdout.lock()) {
        tracing::warn!(error = %err, "failed to write greeting");
    }
}

fn greet(out: &mut dyn Write) -> std::io::Result<()> {
    tracing::debug!("hello_world called");
    writeln!(out, "Hello World!")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn add_small_integers() {
        assert_eq!(add(2.0, 3.0), 5.0);
        assert_eq!(add(-1.0, 1.0), 0.0);
    }

    #[test]
    fn add_fractions() {
        assert_eq!(add(0.5, 0.25), 0.75);
    }

    #[test]
    fn add_is_total_over_floats() {
        assert!(add(f64::NAN, 1.0).is_nan());
        assert_eq!(add(f64::INFINITY, 1.0), f64::INFINITY);
    }

    #[test]
    fn greet_writes_hello_world() {
        let mut out = Vec::new();
        greet(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Hello World!\n");
    }

    #[test]
    fn greet_reports_write_errors() {
        let err = greet(&mut ClosedPipe).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
    }
}
