//! Group elements: points on the context's elliptic curve.

use core::fmt;

use alloc::{boxed::Box, string::String};

use elliptic_curve::{
    group::{Curve as _, Group},
    point::AffineCoordinates,
    rand_core::CryptoRngCore,
    sec1::{EncodedPoint, FromEncodedPoint, ModulusSize, ToEncodedPoint},
    subtle::{Choice, ConstantTimeEq},
    CurveArithmetic, FieldBytes, FieldBytesSize, ProjectivePoint,
};

use crate::{CurveContext, Error, Result, Scalar};

/// A point on the curve described by a [`CurveContext`].
///
/// Every element produced by a public constructor lies on the curve and in
/// the prime-order subgroup. Like [`Scalar`], group elements are immutable
/// values bound to their context; binary operations across contexts fail
/// with [`Error::CrossContextMismatch`].
#[derive(Clone, Copy)]
pub struct GroupElement<'c, C: CurveArithmetic> {
    pub(crate) point: ProjectivePoint<C>,
    pub(crate) context: &'c CurveContext<C>,
}

impl<'c, C: CurveArithmetic> GroupElement<'c, C> {
    /// Returns the context's fixed generator point.
    pub fn generator(context: &'c CurveContext<C>) -> Self {
        Self {
            point: *context.generator_point(),
            context,
        }
    }

    /// Returns the identity element (the point at infinity).
    pub fn identity(context: &'c CurveContext<C>) -> Self {
        Self {
            point: ProjectivePoint::<C>::identity(),
            context,
        }
    }

    /// Generates a random subgroup element as `generator * k` for a random
    /// non-zero scalar `k`, so the result is never the identity and subgroup
    /// membership holds by construction.
    pub fn random(context: &'c CurveContext<C>, rng: &mut impl CryptoRngCore) -> Result<Self> {
        Ok(Scalar::random(context, rng)?.to_point())
    }

    /// Computes `self + other` under the group law.
    ///
    /// The backend addition formulas are complete: adding a point to itself
    /// yields its double, and the identity acts as the neutral element.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_context(other)?;
        Ok(Self {
            point: self.point + other.point,
            context: self.context,
        })
    }

    /// Computes `self + self`.
    pub fn double(&self) -> Self {
        Self {
            point: self.point.double(),
            context: self.context,
        }
    }

    /// Computes `self * scalar` with the backend's scalar-multiplication
    /// ladder. Multiplying by zero yields the identity.
    pub fn mul(&self, scalar: &Scalar<'_, C>) -> Result<Self> {
        if !self.context.is_same(scalar.context) {
            return Err(Error::CrossContextMismatch);
        }

        Ok(Self {
            point: self.point * scalar.inner,
            context: self.context,
        })
    }

    /// Returns true for the identity element.
    pub fn is_identity(&self) -> Choice {
        self.point.is_identity()
    }

    /// Returns the affine x-coordinate as fixed-width big-endian bytes.
    ///
    /// The point at infinity has no affine coordinates; asking for them is
    /// reported as [`Error::PointNotSet`].
    pub fn x_coordinate(&self) -> Result<FieldBytes<C>> {
        if self.is_identity().into() {
            return Err(Error::PointNotSet);
        }

        Ok(self.point.to_affine().x())
    }

    fn check_same_context(&self, other: &Self) -> Result<()> {
        if self.context.is_same(other.context) {
            Ok(())
        } else {
            Err(Error::CrossContextMismatch)
        }
    }
}

impl<'c, C> GroupElement<'c, C>
where
    C: CurveArithmetic,
    C::AffinePoint: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    /// Deserializes a point from its SEC1 encoding (compressed,
    /// uncompressed, or identity form).
    ///
    /// Returns [`Error::InvalidEncoding`] if the bytes do not decode to a
    /// point on the context's curve.
    pub fn from_bytes(bytes: &[u8], context: &'c CurveContext<C>) -> Result<Self> {
        let encoded = EncodedPoint::<C>::from_bytes(bytes).map_err(|_| Error::InvalidEncoding)?;

        let affine = Option::<C::AffinePoint>::from(C::AffinePoint::from_encoded_point(&encoded))
            .ok_or(Error::InvalidEncoding)?;

        Ok(Self {
            point: affine.into(),
            context,
        })
    }

    /// Serializes the point in SEC1 form, compressed or uncompressed.
    pub fn to_encoded_point(&self, compress: bool) -> EncodedPoint<C> {
        self.point.to_affine().to_encoded_point(compress)
    }

    /// Serializes the point as canonical (compressed SEC1) bytes.
    pub fn to_bytes(&self) -> Box<[u8]> {
        self.to_encoded_point(true).to_bytes()
    }

    /// Serializes the canonical encoding as lowercase hexadecimal text.
    pub fn to_hex(&self) -> String {
        base16ct::lower::encode_string(&self.to_bytes())
    }
}

impl<'c, C: CurveArithmetic> ConstantTimeEq for GroupElement<'c, C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        let same_context = Choice::from((self.context.id() == other.context.id()) as u8);
        same_context & self.point.ct_eq(&other.point)
    }
}

impl<'c, C: CurveArithmetic> PartialEq for GroupElement<'c, C> {
    /// Two elements are equal iff they encode the same point under the same
    /// context. Points from different contexts are never equal.
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<'c, C: CurveArithmetic> Eq for GroupElement<'c, C> {}

impl<'c, C> fmt::Debug for GroupElement<'c, C>
where
    C: CurveArithmetic,
    C::AffinePoint: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GroupElement(0x{:x})", self)
    }
}

impl<'c, C> fmt::Display for GroupElement<'c, C>
where
    C: CurveArithmetic,
    C::AffinePoint: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl<'c, C> fmt::LowerHex for GroupElement<'c, C>
where
    C: CurveArithmetic,
    C::AffinePoint: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_bytes().iter() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::GroupElement;
    use crate::{CurveContext, Error};
    use k256::Secp256k1;

    #[test]
    fn identity_round_trips() {
        let ctx = CurveContext::<Secp256k1>::new().unwrap();
        let identity = GroupElement::identity(&ctx);

        let bytes = identity.to_bytes();
        let decoded = GroupElement::from_bytes(&bytes, &ctx).unwrap();
        assert_eq!(decoded, identity);
        assert!(bool::from(decoded.is_identity()));
    }

    #[test]
    fn identity_has_no_coordinates() {
        let ctx = CurveContext::<Secp256k1>::new().unwrap();
        let identity = GroupElement::identity(&ctx);
        assert_eq!(identity.x_coordinate().unwrap_err(), Error::PointNotSet);
    }
}
