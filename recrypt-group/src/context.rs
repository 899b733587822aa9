//! Curve contexts: the parameters shared by every scalar and group element.

use core::sync::atomic::{AtomicU64, Ordering};

use elliptic_curve::{bigint::NonZero, group::Group, CurveArithmetic, ProjectivePoint};

use crate::{Error, Result};

/// Source of process-unique context identifiers.
static NEXT_CONTEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Parameters of an active elliptic curve: the group order, the generator of
/// the prime-order subgroup, and a process-unique identity.
///
/// Every [`Scalar`][`crate::Scalar`] and [`GroupElement`][`crate::GroupElement`]
/// borrows the context it was derived from, so a context always outlives the
/// values built against it. Binary operations require both operands to come
/// from the same context; two independently constructed contexts are distinct
/// even when they describe the same curve.
///
/// A context is immutable once constructed and holds no backend working
/// state, so a single instance may be shared freely across threads.
#[derive(Debug)]
pub struct CurveContext<C: CurveArithmetic> {
    id: u64,
    order: NonZero<C::Uint>,
    generator: ProjectivePoint<C>,
}

impl<C: CurveArithmetic> CurveContext<C> {
    /// Establishes a context for the curve `C`.
    ///
    /// Returns [`Error::ContextInvalid`] if the backend cannot supply a
    /// non-zero group order or a non-identity generator. No context value
    /// exists past this check, so downstream factories never observe an
    /// invalid context.
    pub fn new() -> Result<Self> {
        let order =
            Option::<NonZero<C::Uint>>::from(NonZero::new(C::ORDER)).ok_or(Error::ContextInvalid)?;

        let generator = ProjectivePoint::<C>::generator();
        if generator.is_identity().into() {
            return Err(Error::ContextInvalid);
        }

        Ok(Self {
            id: NEXT_CONTEXT_ID.fetch_add(1, Ordering::Relaxed),
            order,
            generator,
        })
    }

    /// Returns the order of the prime-order subgroup, i.e. the modulus for
    /// all scalar arithmetic under this context.
    pub fn order(&self) -> &NonZero<C::Uint> {
        &self.order
    }

    pub(crate) fn generator_point(&self) -> &ProjectivePoint<C> {
        &self.generator
    }

    pub(crate) fn is_same(&self, other: &Self) -> bool {
        self.id == other.id
    }

    pub(crate) fn id(&self) -> u64 {
        self.id
    }
}
