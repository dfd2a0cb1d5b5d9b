#![no_std]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

// auto_ops expands to paths under ::std.
#[cfg(not(any(feature = "std", test)))]
extern crate core as std;

pub mod angle;
pub mod element;
pub mod equality;
pub mod error;
pub mod format;
mod helpers;
pub mod ops;
pub mod vector2;

pub use self::angle::Angle;
pub use self::element::{ElementType, FloatElementType};
pub use self::error::{Error, Result};
pub use self::helpers::*;
pub use self::vector2::*;

pub use num_traits::Zero;
