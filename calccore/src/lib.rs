//! calccore — shared library for the calcsuite calculator applications

pub mod anim;
pub mod expr;
pub mod format;
pub mod frame;
pub mod input;
pub mod keypad;
pub mod ops;
pub mod storage;
pub mod theme;

pub use expr::{evaluate, EvalError};
pub use format::format_number;
pub use frame::FrameScheduler;
pub use theme::CalcTheme;
