//! Python bindings via PyO3.
//!
//! Builds the `example_library` extension module. The argument is taken as a
//! C `int`, so non-integers raise `TypeError` and out-of-range values raise
//! `OverflowError` before the core is called.

use crate::core::printer;
use crate::domain::model::EXAMPLE_LIBRARY;
use crate::utils::error::PrinterError;
use crate::utils::logger;
use pyo3::exceptions::{PyOSError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;

impl From<PrinterError> for PyErr {
    fn from(err: PrinterError) -> PyErr {
        match err {
            PrinterError::InvalidArgument { .. } => PyValueError::new_err(err.to_string()),
            PrinterError::Io(e) => PyOSError::new_err(e.to_string()),
            other => PyRuntimeError::new_err(other.to_string()),
        }
    }
}

/// Prints a message to stdout. Requires a non-negative integer argument.
#[pyfunction]
#[pyo3(name = "print_number")]
fn py_print_number(n: i32) -> PyResult<()> {
    printer::print_number(i64::from(n))?;
    Ok(())
}

/// A toy C library showing how work with the C API.
#[pymodule]
fn example_library(m: &Bound<'_, PyModule>) -> PyResult<()> {
    if !logger::init_host_logger() {
        tracing::debug!("tracing subscriber already installed");
    }

    m.add("__doc__", EXAMPLE_LIBRARY.doc)?;
    m.add("__version__", EXAMPLE_LIBRARY.version)?;
    m.add_function(wrap_pyfunction!(py_print_number, m)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::logger::tests::{host_default, CapturedLogs};
    use pyo3::exceptions::{PyOverflowError, PyTypeError};

    fn with_module<F>(f: F)
    where
        F: FnOnce(Python<'_>, &Bound<'_, PyModule>),
    {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let m = PyModule::new_bound(py, EXAMPLE_LIBRARY.name).unwrap();
            example_library(&m).unwrap();
            f(py, &m);
        });
    }

    #[test]
    fn test_print_number_returns_none() {
        with_module(|_py, m| {
            let result = m.getattr("print_number").unwrap().call1((7,)).unwrap();
            assert!(result.is_none());
        });
    }

    #[test]
    fn test_negative_raises_value_error() {
        with_module(|py, m| {
            let err = m
                .getattr("print_number")
                .unwrap()
                .call1((-3,))
                .unwrap_err();
            assert!(err.is_instance_of::<PyValueError>(py));
            assert_eq!(
                err.value_bound(py).to_string(),
                "print_number requires a positive argument, but got -3"
            );
        });
    }

    #[test]
    fn test_rejected_call_logs_nothing_by_default() {
        let logs = CapturedLogs::default();
        tracing::subscriber::with_default(host_default(&logs), || {
            with_module(|py, m| {
                let err = m
                    .getattr("print_number")
                    .unwrap()
                    .call1((-3,))
                    .unwrap_err();
                assert!(err.is_instance_of::<PyValueError>(py));
            });
        });

        assert_eq!(logs.contents(), "");
    }

    #[test]
    fn test_non_integer_raises_type_error() {
        with_module(|py, m| {
            let err = m
                .getattr("print_number")
                .unwrap()
                .call1(("x",))
                .unwrap_err();
            assert!(err.is_instance_of::<PyTypeError>(py));
        });
    }

    #[test]
    fn test_out_of_range_raises_overflow_error() {
        with_module(|py, m| {
            let err = m
                .getattr("print_number")
                .unwrap()
                .call1((i64::from(i32::MAX) + 1,))
                .unwrap_err();
            assert!(err.is_instance_of::<PyOverflowError>(py));
        });
    }

    #[test]
    fn test_module_attributes() {
        with_module(|_py, m| {
            let version: String = m.getattr("__version__").unwrap().extract().unwrap();
            assert_eq!(version, env!("CARGO_PKG_VERSION"));

            let module_doc: String = m.getattr("__doc__").unwrap().extract().unwrap();
            assert_eq!(module_doc, EXAMPLE_LIBRARY.doc);

            let doc: String = m
                .getattr("print_number")
                .unwrap()
                .getattr("__doc__")
                .unwrap()
                .extract()
                .unwrap();
            assert!(doc.contains("non-negative integer"));
        });
    }
}
