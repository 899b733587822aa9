//! Hashing ordered sequences of group elements into challenge scalars.
//!
//! The mapping is deterministic and order-sensitive: each point contributes
//! its canonical compressed encoding, the encodings are concatenated in
//! argument order, and the concatenation is fed through the chosen digest.
//! Because the encodings are fixed-width per curve, concatenation is
//! injective and `hash([A, B]) != hash([B, A])` whenever `A != B` (up to
//! collisions in the underlying hash).

use digest::{Digest, Output, OutputSizeUser};

use elliptic_curve::{
    ops::Reduce,
    sec1::{FromEncodedPoint, ModulusSize, ToEncodedPoint},
    CurveArithmetic, FieldBytes, FieldBytesSize,
};

use crate::{CurveContext, Error, GroupElement, Result, Scalar};

/// Hashes the canonical encodings of `points`, in order, with the digest
/// `D`.
///
/// All points must share one context; mixing contexts is
/// [`Error::CrossContextMismatch`].
pub fn hash_points<C, D>(points: &[GroupElement<'_, C>]) -> Result<Output<D>>
where
    C: CurveArithmetic,
    C::AffinePoint: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
    D: Digest,
{
    if let Some((first, rest)) = points.split_first() {
        for point in rest {
            if !first.context.is_same(point.context) {
                return Err(Error::CrossContextMismatch);
            }
        }
    }

    let mut hasher = D::new();
    for point in points {
        hasher.update(point.to_encoded_point(true).as_bytes());
    }

    Ok(hasher.finalize())
}

/// Derives a challenge scalar from an ordered sequence of points: the
/// [`hash_points`] digest reduced modulo the group order.
///
/// The digest's output size must match the curve's field size (e.g. SHA-256
/// for a 256-bit curve). Every point must belong to `context`.
pub fn hash_to_scalar<'c, C, D>(
    points: &[GroupElement<'_, C>],
    context: &'c CurveContext<C>,
) -> Result<Scalar<'c, C>>
where
    C: CurveArithmetic,
    C::AffinePoint: FromEncodedPoint<C> + ToEncodedPoint<C>,
    C::Scalar: Reduce<C::Uint, Bytes = FieldBytes<C>>,
    FieldBytesSize<C>: ModulusSize,
    D: Digest + OutputSizeUser<OutputSize = FieldBytesSize<C>>,
{
    for point in points {
        if !context.is_same(point.context) {
            return Err(Error::CrossContextMismatch);
        }
    }

    let digest = hash_points::<C, D>(points)?;
    Ok(Scalar::from_bytes_reduced(&digest, context))
}
