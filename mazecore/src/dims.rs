use std::{
    fmt,
    ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign},
};

use paste::paste;
use serde::{Deserialize, Serialize};

/// Position of a cell, or size of a grid, measured in cells.
///
/// `x` grows to the east, `y` grows to the south, `Dims(0, 0)` is the north-west corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Dims(pub i32, pub i32);

impl Dims {
    pub const ZERO: Dims = Dims(0, 0);
    pub const ONE: Dims = Dims(1, 1);

    /// Iterates all positions in `[from, to)`, row by row.
    pub fn iter_fill(from: Dims, to: Dims) -> impl Iterator<Item = Dims> {
        (from.1..to.1).flat_map(move |y| (from.0..to.0).map(move |x| Dims(x, y)))
    }

    pub fn all_positive(self) -> bool {
        self.0 > 0 && self.1 > 0
    }

    pub fn all_non_negative(self) -> bool {
        self.0 >= 0 && self.1 >= 0
    }

    pub fn abs_sum(self) -> i32 {
        self.0.abs() + self.1.abs()
    }

    /// Manhattan distance, which is `1` exactly for grid-adjacent cells.
    pub fn manhattan(self, other: Dims) -> i32 {
        (self - other).abs_sum()
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

macro_rules! impl_op {
    ($trait:ident, $op:ident) => {
        impl $trait for Dims {
            type Output = Dims;

            #[inline(always)]
            fn $op(self, other: Dims) -> Dims {
                Dims(self.0.$op(other.0), self.1.$op(other.1))
            }
        }

        impl $trait<i32> for Dims {
            type Output = Dims;

            #[inline(always)]
            fn $op(self, other: i32) -> Dims {
                Dims(self.0.$op(other), self.1.$op(other))
            }
        }

        paste! {
            impl [<$trait Assign>] for Dims {
                #[inline(always)]
                fn [<$op _assign>](&mut self, other: Dims) {
                    *self = self.$op(other);
                }
            }

            impl [<$trait Assign>]<i32> for Dims {
                #[inline(always)]
                fn [<$op _assign>](&mut self, other: i32) {
                    *self = self.$op(other);
                }
            }
        }
    };
}

impl_op!(Add, add);
impl_op!(Sub, sub);
impl_op!(Mul, mul);
