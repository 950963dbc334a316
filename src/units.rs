use derive_more::{Add, AddAssign, Display, From, Into, Sub, SubAssign, Sum};
use std::ops::{Div, Mul, Neg};

/// A length in PDF points (1/72 of an inch). All layout in this crate is done in points.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    Display,
    From,
    Into,
)]
pub struct Pt(pub f32);

impl Pt {
    /// The larger of two lengths
    pub fn max(self, other: Pt) -> Pt {
        if other > self {
            other
        } else {
            self
        }
    }

    /// The smaller of two lengths
    pub fn min(self, other: Pt) -> Pt {
        if other < self {
            other
        } else {
            self
        }
    }
}

impl Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

impl Neg for Pt {
    type Output = Pt;

    fn neg(self) -> Pt {
        Pt(-self.0)
    }
}

/// A length in inches
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Display)]
pub struct In(pub f32);

impl From<In> for Pt {
    fn from(value: In) -> Self {
        Pt(value.0 * 72.0)
    }
}

/// A length in millimetres
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Display)]
pub struct Mm(pub f32);

impl From<Mm> for Pt {
    fn from(value: Mm) -> Self {
        Pt(value.0 * 72.0 / 25.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_to_points() {
        assert_eq!(Pt::from(In(1.0)), Pt(72.0));
        assert!((Pt::from(Mm(25.4)).0 - 72.0).abs() < 1e-4);
    }

    #[test]
    fn arithmetic() {
        let mut a = Pt(10.0) + Pt(5.0) - Pt(3.0);
        a += Pt(1.0);
        assert_eq!(a, Pt(13.0));
        assert_eq!(a * 2.0, Pt(26.0));
        assert_eq!(a / 2.0, Pt(6.5));
        assert_eq!([Pt(1.0), Pt(2.0)].into_iter().sum::<Pt>(), Pt(3.0));
        assert_eq!(Pt(1.0).max(Pt(2.0)), Pt(2.0));
        assert_eq!(Pt(1.0).min(Pt(2.0)), Pt(1.0));
    }
}
