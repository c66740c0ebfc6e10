//! pyo3 registration of the crate's functions and `DataPoint`.

use crate::{DataPoint, MODULE_VERSION};
use pyo3::prelude::*;

#[pymethods]
impl DataPoint {
    #[new]
    #[pyo3(signature = (x = 0.0, y = 0.0))]
    fn py_new(x: f64, y: f64) -> Self {
        DataPoint::new(x, y)
    }

    #[pyo3(name = "print")]
    fn py_print(&self) {
        self.print();
    }

    fn __repr__(&self) -> String {
        self.to_string()
    }
}

/// Adds two numbers
#[pyfunction]
#[pyo3(name = "add")]
fn py_add(a: f64, b: f64) -> f64 {
    crate::add(a, b)
}

/// Hello World!
#[pyfunction]
#[pyo3(name = "hello_world")]
fn py_hello_world() {
    crate::hello_world();
}

/// Hello from Rust!
#[pymodule]
fn numeric_bridge(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", MODULE_VERSION)?;
    m.add_function(wrap_pyfunction!(py_add, m)?)?;
    m.add_function(wrap_pyfunction!(py_hello_world, m)?)?;
    m.add_class::<DataPoint>()?;
    tracing::debug!(version = MODULE_VERSION, "numeric_bridge module initialised");
    Ok(())
}
