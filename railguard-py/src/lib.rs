//! Python bindings for the railguard Rust library.
//!
//! This module provides PyO3 bindings to expose the Rust validation rules
//! and guard harness to Python host frameworks, enabling the rules to run
//! inside a Python validation pipeline.

use pyo3::create_exception;
use pyo3::exceptions::{PyException, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};
use railguard::prelude::*;
use std::sync::Arc;

create_exception!(railguard_py, ValidationFailed, PyException);

/// Python wrapper for ValidationOutcome.
#[pyclass(name = "ValidationOutcome")]
#[derive(Clone)]
pub struct PyValidationOutcome {
    inner: ValidationOutcome,
}

#[pymethods]
impl PyValidationOutcome {
    /// Returns the status as a string.
    #[getter]
    fn status(&self) -> String {
        self.inner.status.to_string()
    }

    /// Returns the error message, if any.
    #[getter]
    fn error_message(&self) -> Option<String> {
        self.inner.error_message.clone()
    }

    /// Returns the corrected value, if any.
    #[getter]
    fn fix_value(&self, py: Python<'_>) -> Option<PyObject> {
        self.inner.fix_value.as_ref().map(|v| json_to_py(py, v))
    }

    /// Returns true if the outcome is a pass.
    fn is_pass(&self) -> bool {
        self.inner.is_pass()
    }

    /// Returns true if the outcome is a fail.
    fn is_fail(&self) -> bool {
        self.inner.is_fail()
    }

    /// Converts to a dictionary.
    fn to_dict(&self, py: Python<'_>) -> PyResult<Py<PyDict>> {
        let dict = PyDict::new_bound(py);
        for (key, value) in self.inner.to_dict() {
            dict.set_item(key, json_to_py(py, &value))?;
        }
        Ok(dict.into())
    }

    fn __repr__(&self) -> String {
        format!("ValidationOutcome(status='{}')", self.inner.status)
    }
}

/// Python wrapper for the ends-with rule.
#[pyclass(name = "EndsWith")]
#[derive(Clone)]
pub struct PyEndsWith {
    inner: EndsWith,
}

#[pymethods]
impl PyEndsWith {
    /// Creates an ends-with rule for the given suffix.
    #[new]
    #[pyo3(signature = (end, on_fail="noop"))]
    fn new(end: &Bound<'_, PyAny>, on_fail: &str) -> PyResult<Self> {
        let end = py_to_json(end)?;
        let policy: OnFail = on_fail
            .parse()
            .map_err(|e: GuardError| PyValueError::new_err(e.to_string()))?;

        Ok(Self {
            inner: EndsWith::new(end).with_on_fail(policy),
        })
    }

    /// Returns the registered rule name.
    #[getter]
    fn name(&self) -> &str {
        self.inner.name()
    }

    /// Returns the on_fail policy selector.
    #[getter]
    fn on_fail(&self) -> String {
        self.inner.on_fail().to_string()
    }

    /// Validates a value, returning the outcome.
    fn validate(&self, value: &Bound<'_, PyAny>) -> PyResult<PyValidationOutcome> {
        let value = py_to_json(value)?;
        Ok(PyValidationOutcome {
            inner: self.inner.validate(&value, &Metadata::new()),
        })
    }

    fn __repr__(&self) -> String {
        format!("EndsWith(on_fail='{}')", self.inner.on_fail())
    }
}

/// Python wrapper for the guard harness.
#[pyclass(name = "Guard")]
pub struct PyGuard {
    inner: Guard,
}

#[pymethods]
impl PyGuard {
    #[new]
    fn new() -> Self {
        Self {
            inner: Guard::new(),
        }
    }

    /// Binds a validator to a field.
    fn validate_field(&mut self, field: &str, validator: &PyEndsWith) {
        let guard = std::mem::take(&mut self.inner);
        self.inner = guard.validate_field(field, Arc::new(validator.inner.clone()));
    }

    /// Parses raw JSON output and validates it.
    ///
    /// Raises `ValidationFailed` when a field fails under the exception
    /// policy, `ValueError` for parse and configuration errors.
    fn parse(&self, raw: &str) -> PyResult<PyGuardResult> {
        match self.inner.parse(raw) {
            Ok(result) => Ok(PyGuardResult { inner: result }),
            Err(GuardError::Validation(failure)) => {
                Err(ValidationFailed::new_err(failure.to_string()))
            }
            Err(other) => Err(PyValueError::new_err(other.to_string())),
        }
    }

    fn __repr__(&self) -> String {
        format!("{:?}", self.inner)
    }
}

/// Python wrapper for GuardResult.
#[pyclass(name = "GuardResult")]
#[derive(Clone)]
pub struct PyGuardResult {
    inner: GuardResult,
}

#[pymethods]
impl PyGuardResult {
    /// Returns the run identifier.
    #[getter]
    fn run_id(&self) -> String {
        self.inner.run_id.to_string()
    }

    /// Returns true when no failure survived policy enforcement.
    #[getter]
    fn validation_passed(&self) -> bool {
        self.inner.validation_passed
    }

    /// Returns the validated output, with fixes substituted.
    #[getter]
    fn validated_output(&self, py: Python<'_>) -> PyObject {
        json_to_py(py, &self.inner.validated_output)
    }

    /// Returns one report dictionary per validator invocation.
    fn reports(&self, py: Python<'_>) -> PyResult<Py<PyList>> {
        let reports = PyList::empty_bound(py);
        for report in &self.inner.reports {
            let dict = PyDict::new_bound(py);
            dict.set_item("field", &report.field)?;
            dict.set_item("validator", &report.validator)?;
            dict.set_item("status", report.outcome.status.to_string())?;
            dict.set_item("error_message", report.outcome.error_message.as_deref())?;
            dict.set_item(
                "fix_value",
                report.outcome.fix_value.as_ref().map(|v| json_to_py(py, v)),
            )?;
            dict.set_item("action", report.action.to_string())?;
            dict.set_item("started_at", report.started_at.to_rfc3339())?;
            dict.set_item("ended_at", report.ended_at.to_rfc3339())?;
            dict.set_item("duration_ms", report.duration_ms())?;
            reports.append(dict)?;
        }
        Ok(reports.into())
    }

    fn __repr__(&self) -> String {
        format!(
            "GuardResult(run_id='{}', validation_passed={})",
            self.inner.run_id, self.inner.validation_passed
        )
    }
}

// Helper functions

fn py_to_json(obj: &Bound<'_, PyAny>) -> PyResult<serde_json::Value> {
    if obj.is_none() {
        return Ok(serde_json::Value::Null);
    }

    if let Ok(b) = obj.extract::<bool>() {
        return Ok(serde_json::Value::Bool(b));
    }

    if let Ok(i) = obj.extract::<i64>() {
        return Ok(serde_json::Value::Number(i.into()));
    }

    if let Ok(f) = obj.extract::<f64>() {
        if let Some(n) = serde_json::Number::from_f64(f) {
            return Ok(serde_json::Value::Number(n));
        }
    }

    if let Ok(s) = obj.extract::<String>() {
        return Ok(serde_json::Value::String(s));
    }

    if let Ok(list) = obj.downcast::<PyList>() {
        let mut arr = Vec::new();
        for item in list.iter() {
            arr.push(py_to_json(&item)?);
        }
        return Ok(serde_json::Value::Array(arr));
    }

    if let Ok(dict) = obj.downcast::<PyDict>() {
        let mut map = serde_json::Map::new();
        for (key, value) in dict.iter() {
            let key_str: String = key.extract()?;
            map.insert(key_str, py_to_json(&value)?);
        }
        return Ok(serde_json::Value::Object(map));
    }

    // Fallback: convert to string representation
    Ok(serde_json::Value::String(obj.str()?.to_string()))
}

fn json_to_py(py: Python<'_>, value: &serde_json::Value) -> PyObject {
    match value {
        serde_json::Value::Null => py.None(),
        serde_json::Value::Bool(b) => b.into_py(py),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.into_py(py)
            } else if let Some(f) = n.as_f64() {
                f.into_py(py)
            } else {
                py.None()
            }
        }
        serde_json::Value::String(s) => s.into_py(py),
        serde_json::Value::Array(arr) => {
            let list = PyList::new_bound(py, arr.iter().map(|v| json_to_py(py, v)));
            list.into_py(py)
        }
        serde_json::Value::Object(map) => {
            let dict = PyDict::new_bound(py);
            for (k, v) in map {
                if dict.set_item(k, json_to_py(py, v)).is_err() {
                    continue;
                }
            }
            dict.into_py(py)
        }
    }
}

/// The railguard Python module.
#[pymodule]
fn railguard_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyValidationOutcome>()?;
    m.add_class::<PyEndsWith>()?;
    m.add_class::<PyGuard>()?;
    m.add_class::<PyGuardResult>()?;
    m.add("ValidationFailed", m.py().get_type_bound::<ValidationFailed>())?;

    // Add version info
    m.add("__version__", "0.1.0")?;
    m.add("__rust_version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
