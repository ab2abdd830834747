// rule.rs - Boolean function of five binary inputs stored as a 32-entry table

use std::fmt;
use std::str::FromStr;

use crate::error::{AutomatonError, Result};

/// Number of entries in a rule table: one per combination of 5 binary inputs.
pub const TABLE_LEN: usize = 32;

/// Lookup table over the inputs `(self, up, down, left, right)`.
///
/// Entry `i` of the table is the next state for the input combination whose
/// index is `self*16 + up*8 + down*4 + left*2 + right`. The neighbour order is
/// part of the format: swapping two inputs changes the meaning of every table.
///
/// Bit `i` of `bits` holds entry `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rule {
    bits: u32,
}

impl Rule {
    /// Builds a rule from exactly 32 entries, each 0 or 1.
    pub fn new(table: &[u8]) -> Result<Self> {
        if table.len() != TABLE_LEN {
            return Err(AutomatonError::InvalidRuleTable {
                reason: format!("expected {TABLE_LEN} entries, got {}", table.len()),
            });
        }

        let mut bits = 0u32;
        for (i, &entry) in table.iter().enumerate() {
            match entry {
                0 => {}
                1 => bits |= 1 << i,
                other => {
                    return Err(AutomatonError::InvalidRuleTable {
                        reason: format!("entry {i} is {other}, expected 0 or 1"),
                    });
                }
            }
        }
        Ok(Self { bits })
    }

    /// Table index for one input combination.
    #[inline]
    pub fn index(this: bool, up: bool, down: bool, left: bool, right: bool) -> usize {
        (this as usize) * 16
            + (up as usize) * 8
            + (down as usize) * 4
            + (left as usize) * 2
            + right as usize
    }

    /// Next state of a cell given its own state and its four orthogonal neighbours.
    #[inline]
    pub fn evaluate(&self, this: bool, up: bool, down: bool, left: bool, right: bool) -> bool {
        (self.bits >> Self::index(this, up, down, left, right)) & 1 == 1
    }

    /// Integer form of [`Rule::evaluate`].
    ///
    /// Fails fast with [`AutomatonError::InvalidCellState`] on the first input
    /// that is not 0 or 1; no partial result is produced.
    pub fn evaluate_bits(&self, this: u8, up: u8, down: u8, left: u8, right: u8) -> Result<u8> {
        let next = self.evaluate(
            bit(this)?,
            bit(up)?,
            bit(down)?,
            bit(left)?,
            bit(right)?,
        );
        Ok(next as u8)
    }

    /// The 32 entries in index order.
    pub fn table(&self) -> [u8; TABLE_LEN] {
        std::array::from_fn(|i| ((self.bits >> i) & 1) as u8)
    }
}

fn bit(value: u8) -> Result<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        value => Err(AutomatonError::InvalidCellState { value }),
    }
}

impl FromStr for Rule {
    type Err = AutomatonError;

    /// Parses the 32-character `0`/`1` rule string drivers are configured with.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let table = s
            .chars()
            .enumerate()
            .map(|(i, c)| match c {
                '0' => Ok(0),
                '1' => Ok(1),
                c => Err(AutomatonError::InvalidRuleTable {
                    reason: format!("character {i} is {c:?}, expected '0' or '1'"),
                }),
            })
            .collect::<Result<Vec<u8>>>()?;
        Self::new(&table)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.table() {
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}
