// SPDX-License-Identifier: Apache-2.0

//! Exhaustive truth tables for catalog gates.
//!
//! Generation enumerates input patterns `0..2^input_width` in ascending
//! order and stores `gate.eval(i)` at index `i`. The human-readable
//! rendering walks the rows in reverse so the most-significant pattern
//! prints first; presentation never touches the stored order.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::gate::{bit, GateKind};
use crate::AllocError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruthTable {
    gate: GateKind,
    outputs: Vec<u64>,
}

impl TruthTable {
    /// Generates the full table for `gate`.
    ///
    /// All-or-nothing: if storage for the output sequence cannot be
    /// obtained, no partial table is produced.
    pub fn generate(gate: GateKind) -> Result<TruthTable, AllocError> {
        let size = 1usize << gate.input_width();
        let mut outputs = Vec::new();
        outputs.try_reserve_exact(size)?;
        for pattern in 0..size as u64 {
            outputs.push(gate.eval(pattern));
        }
        Ok(TruthTable { gate, outputs })
    }

    pub fn gate(&self) -> GateKind {
        self.gate
    }

    /// Number of rows: `2^input_width`.
    pub fn size(&self) -> usize {
        self.outputs.len()
    }

    /// Stored output for the given input pattern.
    pub fn output(&self, pattern: u64) -> u64 {
        self.outputs[pattern as usize]
    }

    /// Renders the table under a `'<name>' Truth Table:` banner line.
    pub fn render(&self, name: &str) -> String {
        format!("'{}' Truth Table:\n{}", name, self)
    }
}

/// One line per input pattern, most-significant pattern first. Input bits
/// print most-significant first, each followed by `" | "`; outputs print
/// least-significant first, `" | "`-separated.
impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let in_width = self.gate.input_width();
        let out_width = self.gate.output_width();
        for pattern in (0..self.outputs.len() as u64).rev() {
            for i in (0..in_width).rev() {
                write!(f, "{} | ", bit(pattern, i))?;
            }
            write!(f, "=> ")?;
            let output = self.outputs[pattern as usize];
            for i in 0..out_width {
                if i + 1 < out_width {
                    write!(f, "{} | ", bit(output, i))?;
                } else {
                    write!(f, "{}", bit(output, i))?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
