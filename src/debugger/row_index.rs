//! # Instruction Row Index
//!
//! Maps the dense row numbers of the disassembly table onto the sparse,
//! variable-stride addresses of the instructions they display.
//!
//! The table is virtual: only row 0 (the view origin) is known up front, and
//! every other row is discovered by decoding forward from the closest row
//! already known. Discovered rows are cached until the next rebase.
//!
//! ## Cache invariants
//!
//! - Row 0 always maps to the origin.
//! - Cached rows are contiguous from row 0: every fill steps forward one
//!   instruction at a time from an existing entry.
//! - Addresses strictly increase with the row, since every instruction is at
//!   least one byte long.
//!
//! ## Recovery
//!
//! Looking up the row of an address never fails. Whenever the address cannot
//! be reached by decoding forward (it lies before the origin, in the middle
//! of an instruction, past an undecodable byte, or too far away), the view is
//! rebased so that the address becomes row 0. Looking up the address of a row
//! has nothing to rebase onto, so it reports `None` instead.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;

use log::{debug, trace};

use crate::config::CodeViewConfig;
use crate::debugger::{Address, Row};
use crate::disassembler::InstructionDecoder;
use crate::error::DecodeError;

/// Why the index threw away its cache and re-anchored row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebaseReason {
    /// Explicit reset requested by the owner.
    Requested,
    /// The address precedes the origin; the view only grows forward.
    BeforeOrigin,
    /// Decoding stepped over the address: it is not an instruction boundary.
    Overshoot,
    /// Reaching the address would need more rows than the table has.
    RowLimit,
    /// The address is further ahead than the scan distance allows.
    ScanDistance,
    /// The decoder could not decode an instruction on the way.
    Decode(DecodeError),
}

impl fmt::Display for RebaseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RebaseReason::Requested => write!(f, "reset requested"),
            RebaseReason::BeforeOrigin => write!(f, "address precedes view origin"),
            RebaseReason::Overshoot => write!(f, "address is inside an instruction"),
            RebaseReason::RowLimit => write!(f, "row limit exceeded"),
            RebaseReason::ScanDistance => write!(f, "scan distance exceeded"),
            RebaseReason::Decode(err) => write!(f, "{}", err),
        }
    }
}

/// Lazily built row to address mapping for the code view.
///
/// `rows` is an interior-mutable cache: [`address_for_row`] is logically a
/// read, but fills in every row it has to step over.
///
/// [`address_for_row`]: InstructionRowIndex::address_for_row
#[derive(Debug)]
pub struct InstructionRowIndex {
    config: CodeViewConfig,
    origin: Address,
    rows: RefCell<BTreeMap<Row, Address>>,
    epoch: u64,
    last_rebase: Option<RebaseReason>,
}

impl InstructionRowIndex {
    /// Creates an index whose row 0 is `origin`.
    pub fn new(config: CodeViewConfig, origin: Address) -> Self {
        let mut rows = BTreeMap::new();
        rows.insert(0, origin);

        Self {
            config,
            origin,
            rows: RefCell::new(rows),
            epoch: 0,
            last_rebase: None,
        }
    }

    /// Discards every cached row and makes `origin` row 0.
    pub fn reset(&mut self, origin: Address) {
        self.rebase(origin, RebaseReason::Requested);
    }

    /// Address of row 0.
    pub fn origin(&self) -> Address {
        self.origin
    }

    /// Incremented on every reset; lets owners detect that all rows moved.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Reason for the most recent reset, if any happened.
    pub fn last_rebase(&self) -> Option<RebaseReason> {
        self.last_rebase
    }

    pub fn config(&self) -> &CodeViewConfig {
        &self.config
    }

    /// Number of rows currently resolved.
    pub fn cached_len(&self) -> usize {
        self.rows.borrow().len()
    }

    /// Copy of the resolved rows in row order.
    pub fn cached_rows(&self) -> Vec<(Row, Address)> {
        self.rows.borrow().iter().map(|(&r, &a)| (r, a)).collect()
    }

    /// Row of `address` if it is already resolved. Never decodes or rebases.
    pub fn cached_row(&self, address: Address) -> Option<Row> {
        if address < self.origin {
            return None;
        }
        self.rows
            .borrow()
            .iter()
            .find(|(_, &a)| a == address)
            .map(|(&r, _)| r)
    }

    /// Row of `address` if it can be reached from the resolved rows without
    /// rebasing, stepping forward within the row and scan distance bounds.
    pub fn find_row<D>(&self, address: Address, decoder: &D) -> Option<Row>
    where
        D: InstructionDecoder + ?Sized,
    {
        if address < self.origin {
            return None;
        }

        let mut rows = self.rows.borrow_mut();
        let (&lower_row, &lower_address) =
            rows.iter().rev().find(|(_, &a)| a <= address)?;
        if lower_address == address {
            return Some(lower_row);
        }
        // Anything cached after `lower` is already past the address
        if rows.contains_key(&(lower_row + 1))
            || address - lower_address > self.config.max_scan_distance
        {
            return None;
        }

        let (mut row, mut current) = (lower_row, lower_address);
        while current < address {
            if row + 1 >= self.config.max_rows {
                return None;
            }
            current = next_address(decoder, current).ok()?;
            row += 1;
            rows.insert(row, current);
        }

        (current == address).then_some(row)
    }

    /// Row displaying the instruction that starts at `address`.
    ///
    /// Always returns a usable row: when `address` cannot be reached from the
    /// resolved rows the view is rebased onto it and 0 is returned.
    pub fn row_for_address<D>(&mut self, address: Address, decoder: &D) -> Row
    where
        D: InstructionDecoder + ?Sized,
    {
        if address < self.origin {
            return self.rebase(address, RebaseReason::BeforeOrigin);
        }

        let rows = self.rows.get_mut();

        // Closest resolved row at or below the address
        let mut lower = (0, self.origin);
        let mut overshoot = false;
        for (&row, &row_address) in rows.iter() {
            if row_address == address {
                return row;
            }
            if row_address > address {
                overshoot = true;
                break;
            }
            lower = (row, row_address);
        }

        // The next resolved row is already past the address, so stepping
        // from `lower` would land on that same row again.
        if overshoot {
            return self.rebase(address, RebaseReason::Overshoot);
        }

        let (mut row, mut current) = lower;
        if address - current > self.config.max_scan_distance {
            return self.rebase(address, RebaseReason::ScanDistance);
        }

        while current < address {
            if row + 1 >= self.config.max_rows {
                return self.rebase(address, RebaseReason::RowLimit);
            }

            current = match next_address(decoder, current) {
                Ok(next) => next,
                Err(err) => return self.rebase(address, RebaseReason::Decode(err)),
            };
            row += 1;
            rows.insert(row, current);
            trace!("code view row {} -> 0x{:08X}", row, current);

            if current == address {
                return row;
            }
        }

        self.rebase(address, RebaseReason::Overshoot)
    }

    /// Address of the instruction shown in `row`, or `None` if the row cannot
    /// be resolved.
    ///
    /// Steps forward from the greatest resolved row below `row`, caching each
    /// row on the way. A decode failure leaves the rows resolved so far in the
    /// cache and does not rebase.
    pub fn address_for_row<D>(&self, row: Row, decoder: &D) -> Option<Address>
    where
        D: InstructionDecoder + ?Sized,
    {
        if row >= self.config.max_rows {
            return None;
        }

        let mut rows = self.rows.borrow_mut();
        if let Some(&address) = rows.get(&row) {
            return Some(address);
        }

        let (&start_row, &start_address) = rows.range(..row).next_back()?;
        let (mut current_row, mut current) = (start_row, start_address);
        while current_row < row {
            current = match next_address(decoder, current) {
                Ok(next) => next,
                Err(err) => {
                    trace!("code view row {} unavailable: {}", current_row + 1, err);
                    return None;
                }
            };
            current_row += 1;
            rows.insert(current_row, current);
        }

        Some(current)
    }

    fn rebase(&mut self, origin: Address, reason: RebaseReason) -> Row {
        debug!("code view rebased to 0x{:08X}: {}", origin, reason);

        let rows = self.rows.get_mut();
        rows.clear();
        rows.insert(0, origin);
        self.origin = origin;
        self.epoch += 1;
        self.last_rebase = Some(reason);
        0
    }
}

/// Start address of the instruction following the one at `address`.
fn next_address<D>(decoder: &D, address: Address) -> Result<Address, DecodeError>
where
    D: InstructionDecoder + ?Sized,
{
    match decoder.instruction_length(address)? {
        0 => Err(DecodeError::ZeroLength(address)),
        length => address
            .checked_add(length)
            .ok_or(DecodeError::AddressOutOfRange(address)),
    }
}
