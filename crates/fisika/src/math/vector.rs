use std::{
    fmt::{self, Display},
    iter::Sum,
    marker::PhantomData,
    ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign},
};

use super::{
    kind::{Free, Kind},
    FloatNum,
};
use crate::errors::Error;

/// Fixed size vector of `N` elements tagged with the physical quantity `K` it stands for.
///
/// Values of different kinds never mix in arithmetic, adding a force to a position
/// does not compile. All operations return a new vector.
#[derive(Clone, Copy, Debug)]
pub struct Vector<K = Free, const N: usize = 2>
where
    K: Kind,
{
    elements: [FloatNum; N],
    kind: PhantomData<K>,
}

impl<K: Kind, const N: usize> Vector<K, N> {
    #[inline]
    pub const fn from_elements(elements: [FloatNum; N]) -> Self {
        Self {
            elements,
            kind: PhantomData,
        }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::from_elements([0.; N])
    }

    #[inline]
    pub const fn dimension(&self) -> usize {
        N
    }

    #[inline]
    pub fn elements(&self) -> &[FloatNum; N] {
        &self.elements
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<FloatNum> {
        self.elements.get(index).copied()
    }

    #[inline]
    fn map(self, mut f: impl FnMut(FloatNum) -> FloatNum) -> Self {
        Self::from_elements(self.elements.map(&mut f))
    }

    #[inline]
    fn zip_with(self, rhs: Self, mut f: impl FnMut(FloatNum, FloatNum) -> FloatNum) -> Self {
        let mut elements = self.elements;
        elements
            .iter_mut()
            .zip(rhs.elements)
            .for_each(|(lhs, rhs)| *lhs = f(*lhs, rhs));
        Self::from_elements(elements)
    }

    /// Sum of the element wise products. Projection does not care about the kind,
    /// a velocity can be projected on a free unit vector.
    #[inline]
    pub fn dot<T: Kind>(&self, other: &Vector<T, N>) -> FloatNum {
        self.elements
            .iter()
            .zip(other.elements.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    #[inline]
    pub fn magnitude_squared(&self) -> FloatNum {
        self.dot(self)
    }

    #[inline]
    pub fn magnitude(&self) -> FloatNum {
        self.magnitude_squared().sqrt()
    }

    /// Unit vector with the same direction.
    ///
    /// A vector whose magnitude is exactly `0` or exactly `1` is returned as it is,
    /// so normalizing the zero vector never produces NaN.
    pub fn normalize(&self) -> Self {
        let magnitude = self.magnitude();
        if magnitude == 0. || magnitude == 1. {
            return *self;
        }
        *self * magnitude.recip()
    }

    /// Raise the magnitude to `exponent` while keeping the direction.
    ///
    /// `velocity.power(2.)` points along the velocity with a magnitude of `|v|²`,
    /// this is not an element wise power.
    pub fn power(&self, exponent: FloatNum) -> Self {
        self.normalize() * self.magnitude().powf(exponent)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.elements.iter().all(|v| *v == 0.)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.elements.iter().all(|v| v.is_finite())
    }

    pub fn abs_diff_eq(&self, other: &Self, tolerance: FloatNum) -> bool {
        self.elements
            .iter()
            .zip(other.elements.iter())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    #[inline]
    pub fn untagged(self) -> Vector<Free, N> {
        self.retag()
    }

    // change the kind without touching the elements, only for physical relations
    // defined inside this crate
    #[inline]
    pub(crate) fn retag<T: Kind>(self) -> Vector<T, N> {
        Vector::from_elements(self.elements)
    }
}

impl<const N: usize> Vector<Free, N> {
    #[inline]
    pub fn tagged<T: Kind>(self) -> Vector<T, N> {
        self.retag()
    }
}

impl<K: Kind> Vector<K, 2> {
    #[inline]
    pub const fn new(x: FloatNum, y: FloatNum) -> Self {
        Self::from_elements([x, y])
    }

    #[inline]
    pub fn x(&self) -> FloatNum {
        self.elements[0]
    }

    #[inline]
    pub fn y(&self) -> FloatNum {
        self.elements[1]
    }

    #[inline]
    pub fn with_x(self, x: FloatNum) -> Self {
        Self::new(x, self.y())
    }

    #[inline]
    pub fn with_y(self, y: FloatNum) -> Self {
        Self::new(self.x(), y)
    }

    /// counter clockwise perpendicular `(-y, x)`
    #[inline]
    pub fn perpendicular(&self) -> Self {
        Self::new(-self.y(), self.x())
    }

    /// Scalar cross product `x1 * y2 - y1 * x2`, the z of the 3D cross product.
    ///
    /// Positive when `other` lies counter clockwise of `self`.
    #[inline]
    pub fn determinant<T: Kind>(&self, other: &Vector<T, 2>) -> FloatNum {
        self.x() * other.y() - self.y() * other.x()
    }
}

impl<K: Kind> Vector<K, 3> {
    #[inline]
    pub fn x(&self) -> FloatNum {
        self.elements[0]
    }

    #[inline]
    pub fn y(&self) -> FloatNum {
        self.elements[1]
    }

    #[inline]
    pub fn z(&self) -> FloatNum {
        self.elements[2]
    }

    pub fn cross(&self, other: &Self) -> Self {
        let [x1, y1, z1] = self.elements;
        let [x2, y2, z2] = other.elements;
        Self::from_elements([y1 * z2 - z1 * y2, z1 * x2 - x1 * z2, x1 * y2 - y1 * x2])
    }
}

impl<K: Kind, const N: usize> Default for Vector<K, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<K: Kind, const N: usize> PartialEq for Vector<K, N> {
    fn eq(&self, other: &Self) -> bool {
        self.abs_diff_eq(other, FloatNum::EPSILON)
    }
}

impl<K: Kind, const N: usize> Display for Vector<K, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", K::NAME)?;
        for (index, element) in self.elements.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str("]")
    }
}

impl<K: Kind, const N: usize> From<[FloatNum; N]> for Vector<K, N> {
    fn from(elements: [FloatNum; N]) -> Self {
        Self::from_elements(elements)
    }
}

impl<K: Kind, const N: usize> From<Vector<K, N>> for [FloatNum; N] {
    fn from(value: Vector<K, N>) -> Self {
        value.elements
    }
}

impl<K: Kind> From<(FloatNum, FloatNum)> for Vector<K, 2> {
    fn from((x, y): (FloatNum, FloatNum)) -> Self {
        Self::new(x, y)
    }
}

impl<K: Kind> From<Vector<K, 2>> for (FloatNum, FloatNum) {
    fn from(value: Vector<K, 2>) -> Self {
        (value.x(), value.y())
    }
}

impl<K: Kind, const N: usize> TryFrom<&[FloatNum]> for Vector<K, N> {
    type Error = Error;

    fn try_from(value: &[FloatNum]) -> Result<Self, Self::Error> {
        let elements: [FloatNum; N] = value.try_into().map_err(|_| Error::DimensionMismatch {
            expected: N,
            found: value.len(),
        })?;
        Ok(Self::from_elements(elements))
    }
}

impl<K: Kind, const N: usize> TryFrom<Vec<FloatNum>> for Vector<K, N> {
    type Error = Error;

    fn try_from(value: Vec<FloatNum>) -> Result<Self, Self::Error> {
        Self::try_from(value.as_slice())
    }
}

impl<K: Kind, const N: usize> Add for Vector<K, N> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<K: Kind, const N: usize> Add<&Vector<K, N>> for Vector<K, N> {
    type Output = Self;
    fn add(self, rhs: &Vector<K, N>) -> Self::Output {
        self + *rhs
    }
}

impl<K: Kind, const N: usize> AddAssign for Vector<K, N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<K: Kind, const N: usize> Sub for Vector<K, N> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<K: Kind, const N: usize> Sub<&Vector<K, N>> for Vector<K, N> {
    type Output = Self;
    fn sub(self, rhs: &Vector<K, N>) -> Self::Output {
        self - *rhs
    }
}

impl<K: Kind, const N: usize> SubAssign for Vector<K, N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<K: Kind, const N: usize> Neg for Vector<K, N> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.map(|v| -v)
    }
}

impl<K: Kind, const N: usize> Mul<FloatNum> for Vector<K, N> {
    type Output = Self;
    fn mul(self, rhs: FloatNum) -> Self::Output {
        self.map(|v| v * rhs)
    }
}

impl<K: Kind, const N: usize> Mul<Vector<K, N>> for FloatNum {
    type Output = Vector<K, N>;
    fn mul(self, rhs: Vector<K, N>) -> Self::Output {
        rhs * self
    }
}

impl<K: Kind, const N: usize> MulAssign<FloatNum> for Vector<K, N> {
    fn mul_assign(&mut self, rhs: FloatNum) {
        *self = *self * rhs;
    }
}

impl<K: Kind, const N: usize> Div<FloatNum> for Vector<K, N> {
    type Output = Self;
    fn div(self, rhs: FloatNum) -> Self::Output {
        self.map(|v| v / rhs)
    }
}

impl<K: Kind, const N: usize> Sum for Vector<K, N> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, cur| acc + cur)
    }
}

impl<'a, K: Kind, const N: usize> Sum<&'a Vector<K, N>> for Vector<K, N> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, cur| acc + cur)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{de, ser::SerializeSeq, Deserialize, Deserializer, Serialize, Serializer};

    use super::{FloatNum, Kind, Vector};

    impl<K: Kind, const N: usize> Serialize for Vector<K, N> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut seq = serializer.serialize_seq(Some(N))?;
            for element in self.elements() {
                seq.serialize_element(element)?;
            }
            seq.end()
        }
    }

    impl<'de, K: Kind, const N: usize> Deserialize<'de> for Vector<K, N> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let elements = Vec::<FloatNum>::deserialize(deserializer)?;
            Vector::try_from(elements).map_err(de::Error::custom)
        }
    }
}
