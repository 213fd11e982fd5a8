//! Bounded parameter editing
//!
//! A parameter node never owns its value. It borrows a host-owned
//! [`Cell`] and reads/writes through it, so the host keeps full control of
//! where the value lives (a settings struct, a register shadow, a packed
//! flag byte) and the borrow checker keeps the storage alive for as long as
//! the tree exists.

use core::cell::Cell;

use crate::error::{MenuError, MenuResult, TreeError};

/// Stepping direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Up,
    Down,
}

/// Parameter type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParamKind {
    Integer,
    Float,
    Boolean,
}

/// Snapshot of a parameter's bound value
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParamValue {
    Int(i32),
    Float(f32),
    Flag(bool),
}

/// Integer parameter bound to a host `Cell<i32>`
#[derive(Debug, Clone, Copy)]
pub struct IntParam<'a> {
    cell: &'a Cell<i32>,
    min: i32,
    max: i32,
    step: i32,
}

impl<'a> IntParam<'a> {
    /// Bind an integer cell with inclusive bounds and a positive step
    pub fn new(cell: &'a Cell<i32>, min: i32, max: i32, step: i32) -> Result<Self, TreeError> {
        if min > max || step <= 0 {
            return Err(TreeError::InvalidBounds);
        }
        Ok(Self {
            cell,
            min,
            max,
            step,
        })
    }

    pub fn get(&self) -> i32 {
        self.cell.get()
    }

    pub fn bounds(&self) -> (i32, i32) {
        (self.min, self.max)
    }

    pub fn step_size(&self) -> i32 {
        self.step
    }

    /// Move the value one step, clamped to `[min, max]`
    ///
    /// Returns `OutOfRange` without touching the cell when the value already
    /// sits on the boundary in the requested direction.
    pub fn step(&self, direction: Direction) -> MenuResult {
        let value = self.cell.get();
        let next = match direction {
            Direction::Up => {
                if value >= self.max {
                    return Err(MenuError::OutOfRange);
                }
                value.saturating_add(self.step)
            }
            Direction::Down => {
                if value <= self.min {
                    return Err(MenuError::OutOfRange);
                }
                value.saturating_sub(self.step)
            }
        };
        self.cell.set(next.clamp(self.min, self.max));
        Ok(())
    }
}

/// Floating point parameter bound to a host `Cell<f32>`
#[derive(Debug, Clone, Copy)]
pub struct FloatParam<'a> {
    cell: &'a Cell<f32>,
    min: f32,
    max: f32,
    step: f32,
}

impl<'a> FloatParam<'a> {
    /// Bind a float cell with finite inclusive bounds and a positive step
    pub fn new(cell: &'a Cell<f32>, min: f32, max: f32, step: f32) -> Result<Self, TreeError> {
        let finite = min.is_finite() && max.is_finite() && step.is_finite();
        if !finite || min > max || step <= 0.0 {
            return Err(TreeError::InvalidBounds);
        }
        Ok(Self {
            cell,
            min,
            max,
            step,
        })
    }

    pub fn get(&self) -> f32 {
        self.cell.get()
    }

    pub fn bounds(&self) -> (f32, f32) {
        (self.min, self.max)
    }

    pub fn step_size(&self) -> f32 {
        self.step
    }

    /// Same contract as [`IntParam::step`]
    ///
    /// A NaN or infinite stored value is replaced by `min`.
    pub fn step(&self, direction: Direction) -> MenuResult {
        let value = self.cell.get();
        if !value.is_finite() {
            self.cell.set(self.min);
            return Ok(());
        }
        let next = match direction {
            Direction::Up => {
                if value >= self.max {
                    return Err(MenuError::OutOfRange);
                }
                value + self.step
            }
            Direction::Down => {
                if value <= self.min {
                    return Err(MenuError::OutOfRange);
                }
                value - self.step
            }
        };
        self.cell.set(next.clamp(self.min, self.max));
        Ok(())
    }
}

/// Single flag packed into a host byte
#[derive(Debug, Clone, Copy)]
pub struct FlagParam<'a> {
    byte: &'a Cell<u8>,
    bit: u8,
}

impl<'a> FlagParam<'a> {
    /// Bind bit `bit` (0..8) of `byte`
    pub fn new(byte: &'a Cell<u8>, bit: u8) -> Result<Self, TreeError> {
        if bit >= 8 {
            return Err(TreeError::InvalidBounds);
        }
        Ok(Self { byte, bit })
    }

    fn mask(&self) -> u8 {
        1 << self.bit
    }

    pub fn bit(&self) -> u8 {
        self.bit
    }

    pub fn get(&self) -> bool {
        self.byte.get() & self.mask() != 0
    }

    /// Flip the bound bit; the other seven bits are left alone
    pub fn toggle(&self) {
        self.byte.set(self.byte.get() ^ self.mask());
    }
}

/// Parameter payload of a menu node
#[derive(Debug, Clone, Copy)]
pub enum Parameter<'a> {
    Integer(IntParam<'a>),
    Float(FloatParam<'a>),
    Boolean(FlagParam<'a>),
}

impl<'a> Parameter<'a> {
    /// Integer parameter, see [`IntParam::new`]
    pub fn integer(cell: &'a Cell<i32>, min: i32, max: i32, step: i32) -> Result<Self, TreeError> {
        IntParam::new(cell, min, max, step).map(Parameter::Integer)
    }

    /// Float parameter, see [`FloatParam::new`]
    pub fn float(cell: &'a Cell<f32>, min: f32, max: f32, step: f32) -> Result<Self, TreeError> {
        FloatParam::new(cell, min, max, step).map(Parameter::Float)
    }

    /// Boolean parameter, see [`FlagParam::new`]
    pub fn flag(byte: &'a Cell<u8>, bit: u8) -> Result<Self, TreeError> {
        FlagParam::new(byte, bit).map(Parameter::Boolean)
    }

    pub fn kind(&self) -> ParamKind {
        match self {
            Parameter::Integer(_) => ParamKind::Integer,
            Parameter::Float(_) => ParamKind::Float,
            Parameter::Boolean(_) => ParamKind::Boolean,
        }
    }

    /// Read the bound storage
    pub fn value(&self) -> ParamValue {
        match self {
            Parameter::Integer(p) => ParamValue::Int(p.get()),
            Parameter::Float(p) => ParamValue::Float(p.get()),
            Parameter::Boolean(p) => ParamValue::Flag(p.get()),
        }
    }

    /// Apply one edit step
    ///
    /// Booleans have a two-valued domain, so both directions toggle and
    /// always succeed.
    pub fn step(&self, direction: Direction) -> MenuResult {
        match self {
            Parameter::Integer(p) => p.step(direction),
            Parameter::Float(p) => p.step(direction),
            Parameter::Boolean(p) => {
                p.toggle();
                Ok(())
            }
        }
    }
}
