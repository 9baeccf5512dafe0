//! # Tiny BASIC
//!
//! A small line-numbered BASIC, interpreted directly from its source text.
//!
//! Run the executable with no arguments for an interactive session, or
//! with the name of a program file to load and run it.
//! ```text
//! TINY BASIC INTERPRETER V1.00
//! READY
//!
//! > 10 FOR I=1 TO 3: PRINT I;: NEXT I
//! > RUN
//! 1 2 3 DONE.
//! ```
//!
//! Lines starting with a number are stored in the program. Anything else
//! is executed immediately. Statement names, keywords and variables are
//! case-insensitive. Variables ending in `$` hold strings, all others hold
//! numbers.

pub mod lang;
pub mod mach;
pub mod term;
