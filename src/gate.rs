// SPDX-License-Identifier: Apache-2.0

//! Catalog of single-gate combinational logic functions.
//!
//! A gate is a pure function from the low `input_width` bits of a `u64` to
//! the low `output_width` bits of a `u64`; bit 0 of the input is the first
//! operand and toggles fastest when enumerating patterns. The catalog is a
//! closed enumeration dispatched through one exhaustive match, so gate kinds
//! stay comparable and serializable with no callable storage.

use serde::{Deserialize, Serialize};

/// Extracts bit `i` of `value` as `0` or `1`.
#[inline]
pub fn bit(value: u64, i: usize) -> u64 {
    debug_assert!(i < 64);
    (value >> i) & 1
}

/// A catalog lookup name that matched no known gate.
///
/// There is no default gate to substitute; callers must treat this as a
/// construction-time configuration error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGateError {
    pub name: String,
}

impl std::fmt::Display for UnknownGateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown gate name: {:?}", self.name)
    }
}

impl std::error::Error for UnknownGateError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateKind {
    Wire,
    Not,
    And,
    Or,
    Xor,
    Nand,
    Nor,
    Xnor,
    Adder,
}

impl GateKind {
    /// The full catalog in canonical order; also the demonstration set the
    /// `gatetab` binary prints when given no gate names.
    pub const ALL: [GateKind; 9] = [
        GateKind::Wire,
        GateKind::Not,
        GateKind::And,
        GateKind::Or,
        GateKind::Xor,
        GateKind::Nand,
        GateKind::Nor,
        GateKind::Xnor,
        GateKind::Adder,
    ];

    /// Number of low-order input bits the gate inspects.
    pub fn input_width(&self) -> usize {
        match self {
            GateKind::Wire | GateKind::Not => 1,
            GateKind::And
            | GateKind::Or
            | GateKind::Xor
            | GateKind::Nand
            | GateKind::Nor
            | GateKind::Xnor => 2,
            GateKind::Adder => 3,
        }
    }

    /// Number of low-order output bits that carry meaning.
    pub fn output_width(&self) -> usize {
        match self {
            GateKind::Adder => 2,
            _ => 1,
        }
    }

    /// Evaluates the gate on `input`.
    ///
    /// Only the low `input_width` bits are inspected; bits above
    /// `output_width` in the result are zero. Total and deterministic over
    /// all of `u64`.
    pub fn eval(&self, input: u64) -> u64 {
        let a = bit(input, 0);
        let b = bit(input, 1);
        match self {
            GateKind::Wire => a,
            GateKind::Not => a ^ 1,
            GateKind::And => a & b,
            GateKind::Or => a | b,
            GateKind::Xor => a ^ b,
            GateKind::Nand => (a & b) ^ 1,
            GateKind::Nor => (a | b) ^ 1,
            GateKind::Xnor => (a ^ b) ^ 1,
            GateKind::Adder => {
                // Full adder: a = bit 0, b = bit 1, carry-in = bit 2.
                let cin = bit(input, 2);
                let partial = a ^ b;
                let sum = partial ^ cin;
                let carry = (a & b) | (cin & partial);
                sum | (carry << 1)
            }
        }
    }

    /// Canonical catalog name.
    pub fn name(&self) -> &'static str {
        match self {
            GateKind::Wire => "WIRE",
            GateKind::Not => "NOT",
            GateKind::And => "AND",
            GateKind::Or => "OR",
            GateKind::Xor => "XOR",
            GateKind::Nand => "NAND",
            GateKind::Nor => "NOR",
            GateKind::Xnor => "XNOR",
            GateKind::Adder => "ADDER",
        }
    }

    /// Catalog lookup by canonical name.
    pub fn from_name(name: &str) -> Result<GateKind, UnknownGateError> {
        match name {
            "WIRE" => Ok(GateKind::Wire),
            "NOT" => Ok(GateKind::Not),
            "AND" => Ok(GateKind::And),
            "OR" => Ok(GateKind::Or),
            "XOR" => Ok(GateKind::Xor),
            "NAND" => Ok(GateKind::Nand),
            "NOR" => Ok(GateKind::Nor),
            "XNOR" => Ok(GateKind::Xnor),
            "ADDER" => Ok(GateKind::Adder),
            _ => Err(UnknownGateError {
                name: name.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for GateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for GateKind {
    type Err = UnknownGateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GateKind::from_name(s)
    }
}
