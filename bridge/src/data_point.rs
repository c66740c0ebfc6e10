use std::fmt;
use std::io::Write;

/// A pair of independent floating-point coordinates.
///
/// With the `python` feature this is the `DataPoint` class; `x` and `y` become
/// read/write attributes.
#[cfg_attr(feature = "python", pyo3::pyclass(module = "numeric_bridge"))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DataPoint {
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub x: f64,
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub y: f64,
}

impl DataPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Write the point followed by a newline.
    pub fn write_to(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "{}", self)
    }

    /// Print the point to standard output.
    pub fn print(&self) {
        let stdout = std::io::stdout();
        if let Err(err) = self.write_to(&mut stdout.lock()) {
            tracing::warn!(error = %err, point = %self, "failed to print data point");
        }
    }
}

impl fmt::Display for DataPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DataPoint(x={:?}, y={:?})", self.x, self.y)
    }
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
    fn default_is_origin() {
        let p = DataPoint::default();
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn fields_survive_independent_mutation() {
        let mut p = DataPoint::new(1.5, 2.5);
        assert_eq!((p.x, p.y), (1.5, 2.5));

        p.x = -4.0;
        assert_eq!((p.x, p.y), (-4.0, 2.5));

        p.y = 8.25;
        assert_eq!((p.x, p.y), (-4.0, 8.25));
    }

    #[test]
    fn display_shows_both_fields() {
        assert_eq!(DataPoint::new(1.5, 2.0).to_string(), "DataPoint(x=1.5, y=2.0)");
    }

    #[test]
    fn write_to_appends_newline() {
        let mut out = Vec::new();
        DataPoint::new(0.0, -1.0).write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "DataPoint(x=0.0, y=-1.0)\n");
    }

    #[test]
    fn write_to_reports_write_errors() {
        let err = DataPoint::new(1.0, 2.0).write_to(&mut ClosedPipe).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
    }
}
