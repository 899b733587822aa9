//! Scalar field arithmetic modulo the curve's group order.

use core::fmt;

use alloc::string::String;

use elliptic_curve::{
    bigint::NonZero,
    ops::Reduce,
    rand_core::CryptoRngCore,
    subtle::{Choice, ConstantTimeEq},
    CurveArithmetic, Field, FieldBytes, PrimeField,
};
use zeroize::Zeroize;

use crate::{CurveContext, Error, GroupElement, Result};

/// Number of draws [`Scalar::random`] attempts before treating the backend
/// RNG as faulty.
const RANDOM_RETRY_LIMIT: usize = 8;

/// An integer reduced modulo the group order of a [`CurveContext`]'s curve.
///
/// Scalars are immutable value types: arithmetic never mutates an operand
/// and always returns a freshly constructed result, reduced into
/// `[0, order)`. Every binary operation checks that both operands were
/// derived from the same context and fails with
/// [`Error::CrossContextMismatch`] otherwise.
#[derive(Clone, Copy)]
pub struct Scalar<'c, C: CurveArithmetic> {
    pub(crate) inner: C::Scalar,
    pub(crate) context: &'c CurveContext<C>,
}

impl<'c, C: CurveArithmetic> Scalar<'c, C> {
    /// Returns the additive identity.
    pub fn zero(context: &'c CurveContext<C>) -> Self {
        Self {
            inner: C::Scalar::ZERO,
            context,
        }
    }

    /// Returns the multiplicative identity.
    pub fn one(context: &'c CurveContext<C>) -> Self {
        Self {
            inner: C::Scalar::ONE,
            context,
        }
    }

    /// Generates a uniformly random scalar in `(0, order)`.
    ///
    /// Zero draws are rejected and resampled, so the result is always usable
    /// as a private key or blinding factor. The resampling loop is capped at
    /// a small retry limit; a generator that keeps producing zero is
    /// reported as [`Error::ArithmeticBackend`] rather than looped on
    /// forever.
    pub fn random(context: &'c CurveContext<C>, rng: &mut impl CryptoRngCore) -> Result<Self> {
        for _ in 0..RANDOM_RETRY_LIMIT {
            let candidate = C::Scalar::random(&mut *rng);
            if !bool::from(candidate.is_zero()) {
                return Ok(Self {
                    inner: candidate,
                    context,
                });
            }
        }

        Err(Error::ArithmeticBackend)
    }

    /// Converts an unsigned integer into a scalar.
    pub fn from_u64(n: u64, context: &'c CurveContext<C>) -> Self {
        Self {
            inner: C::Scalar::from(n),
            context,
        }
    }

    /// Parses a big-endian byte encoding of a scalar.
    ///
    /// The caller-supplied length is honored exactly: input longer than the
    /// curve's field size is rejected as [`Error::InvalidEncoding`], and
    /// shorter (minimal-length) input is left-padded with zeroes. A value
    /// outside `[0, order)` is likewise rejected rather than silently
    /// reduced; use [`Scalar::from_bytes_reduced`] when reduction is
    /// intended.
    pub fn from_bytes(bytes: &[u8], context: &'c CurveContext<C>) -> Result<Self> {
        let mut repr = FieldBytes::<C>::default();
        if bytes.len() > repr.len() {
            return Err(Error::InvalidEncoding);
        }

        let offset = repr.len() - bytes.len();
        repr[offset..].copy_from_slice(bytes);

        let inner =
            Option::<C::Scalar>::from(C::Scalar::from_repr(repr)).ok_or(Error::InvalidEncoding)?;

        Ok(Self { inner, context })
    }

    /// Interprets a fixed-width big-endian integer as a scalar, reducing it
    /// modulo the group order.
    pub fn from_bytes_reduced(bytes: &FieldBytes<C>, context: &'c CurveContext<C>) -> Self
    where
        C::Scalar: Reduce<C::Uint, Bytes = FieldBytes<C>>,
    {
        Self {
            inner: <C::Scalar as Reduce<C::Uint>>::reduce_bytes(bytes),
            context,
        }
    }

    /// Computes `self + other (mod order)`.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_context(other)?;
        Ok(Self {
            inner: self.inner + other.inner,
            context: self.context,
        })
    }

    /// Computes `self - other (mod order)`.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_same_context(other)?;
        Ok(Self {
            inner: self.inner - other.inner,
            context: self.context,
        })
    }

    /// Computes `self * other (mod order)`.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        self.check_same_context(other)?;
        Ok(Self {
            inner: self.inner * other.inner,
            context: self.context,
        })
    }

    /// Computes the multiplicative inverse of `self` modulo the group order.
    ///
    /// For the prime group orders in scope the only non-invertible residue
    /// is zero; the condition is still checked and reported as
    /// [`Error::NotInvertible`] rather than left undefined.
    pub fn invert(&self) -> Result<Self> {
        let inner = Option::<C::Scalar>::from(<C::Scalar as Field>::invert(&self.inner))
            .ok_or(Error::NotInvertible)?;

        Ok(Self {
            inner,
            context: self.context,
        })
    }

    /// Computes `self * other⁻¹ (mod order)`.
    pub fn div(&self, other: &Self) -> Result<Self> {
        self.check_same_context(other)?;
        self.mul(&other.invert()?)
    }

    /// Reduces the scalar's integer value by an arbitrary modulus.
    ///
    /// This is the general-purpose reduction, distinct from the order-bound
    /// field operations above. The result is returned as a raw integer: it
    /// is *not* validated against the group-order invariant and cannot be
    /// mistaken for a `Scalar`.
    pub fn reduce_by(&self, modulus: &NonZero<C::Uint>) -> C::Uint
    where
        C::Scalar: Into<C::Uint>,
    {
        self.to_uint() % *modulus
    }

    /// Returns the scalar's integer value.
    pub fn to_uint(&self) -> C::Uint
    where
        C::Scalar: Into<C::Uint>,
    {
        self.inner.into()
    }

    /// Serializes the scalar as canonical fixed-width big-endian bytes.
    pub fn to_bytes(&self) -> FieldBytes<C> {
        self.inner.to_repr()
    }

    /// Serializes the scalar as lowercase hexadecimal text.
    pub fn to_hex(&self) -> String {
        base16ct::lower::encode_string(&self.to_bytes())
    }

    /// Returns true if the scalar is zero.
    pub fn is_zero(&self) -> Choice {
        self.inner.is_zero()
    }

    /// Multiplies the context's generator by this scalar, e.g. to derive the
    /// public point of a secret key.
    pub fn to_point(&self) -> GroupElement<'c, C> {
        GroupElement {
            point: *self.context.generator_point() * self.inner,
            context: self.context,
        }
    }

    /// Computes `point * self`; commutative with
    /// [`GroupElement::mul`][`crate::GroupElement::mul`].
    pub fn mul_point<'p>(&self, point: &GroupElement<'p, C>) -> Result<GroupElement<'p, C>> {
        point.mul(self)
    }

    fn check_same_context(&self, other: &Self) -> Result<()> {
        if self.context.is_same(other.context) {
            Ok(())
        } else {
            Err(Error::CrossContextMismatch)
        }
    }
}

impl<'c, C: CurveArithmetic> ConstantTimeEq for Scalar<'c, C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        let same_context = Choice::from((self.context.id() == other.context.id()) as u8);
        same_context & self.inner.ct_eq(&other.inner)
    }
}

impl<'c, C: CurveArithmetic> PartialEq for Scalar<'c, C> {
    /// Value comparison. Scalars from different contexts are never equal;
    /// comparing them is well-defined rather than an error.
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<'c, C: CurveArithmetic> Eq for Scalar<'c, C> {}

impl<'c, C: CurveArithmetic> Zeroize for Scalar<'c, C> {
    fn zeroize(&mut self) {
        self.inner.zeroize();
    }
}

impl<'c, C: CurveArithmetic> fmt::Debug for Scalar<'c, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar(0x{:x})", self)
    }
}

impl<'c, C: CurveArithmetic> fmt::Display for Scalar<'c, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl<'c, C: CurveArithmetic> fmt::LowerHex for Scalar<'c, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_bytes().iter() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl<'c, C: CurveArithmetic> fmt::UpperHex for Scalar<'c, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_bytes().iter() {
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}
