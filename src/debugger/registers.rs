//! Register name/value table.

use crate::debugger::target::DebugTarget;
use crate::debugger::{Row, TableView};

const HEADERS: [&str; 2] = ["Register", "Value"];

/// One row per register the target reports.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegistersView;

impl<T: DebugTarget + ?Sized> TableView<T> for RegistersView {
    fn row_count(&self, target: &T) -> usize {
        target.register_count()
    }

    fn column_count(&self) -> usize {
        HEADERS.len()
    }

    fn header(&self, section: usize) -> Option<&'static str> {
        HEADERS.get(section).copied()
    }

    fn cell(&self, target: &T, row: Row, column: usize) -> Option<String> {
        let register = target.register(row)?;
        match column {
            0 => Some(register.name.to_string()),
            1 => Some(register.value.to_string()),
            _ => None,
        }
    }
}
