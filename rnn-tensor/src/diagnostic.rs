//! Advisory error reporting for accessors which recover instead of failing.
//!
//! Reports go to stderr unless `RNN_TENSOR_QUIET=1` is set. Every report is counted per thread so callers can
//! tell a recovered value from a legitimate one.

use crate::TensorError;
use std::cell::Cell;

thread_local! {
    static REPORTED: Cell<usize> = const { Cell::new(0) };
}

fn is_quiet(value: Option<&str>) -> bool {
    value == Some("1")
}

/// Reports an error which was recovered from.
pub(crate) fn report(err: &TensorError) {
    let quiet = is_quiet(std::env::var("RNN_TENSOR_QUIET").ok().as_deref());
    report_with(err, quiet);
}

fn report_with(err: &TensorError, quiet: bool) {
    REPORTED.with(|count| count.set(count.get() + 1));
    if !quiet {
        eprintln!("[rnn-tensor] {err}");
    }
}

/// Returns how many errors were reported on the current thread so far.
pub fn reported() -> usize {
    REPORTED.with(Cell::get)
}
