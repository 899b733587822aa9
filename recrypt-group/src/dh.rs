//! Diffie-Hellman key agreement over a curve context.
//!
//! Both parties derive a scalar secret, publish `generator * secret`, and
//! combine their own secret with the other party's public point; the shared
//! secret is taken from the affine x-coordinate of the resulting point, as
//! in ECDH.
//!
//! ```
//! use rand_core::OsRng;
//! use recrypt_group::{diffie_hellman, CurveContext, Scalar};
//!
//! let ctx = CurveContext::<k256::Secp256k1>::new()?;
//!
//! let alice_secret = Scalar::random(&ctx, &mut OsRng)?;
//! let bob_secret = Scalar::random(&ctx, &mut OsRng)?;
//!
//! let alice_shared = diffie_hellman(&alice_secret, &bob_secret.to_point())?;
//! let bob_shared = diffie_hellman(&bob_secret, &alice_secret.to_point())?;
//!
//! assert_eq!(
//!     alice_shared.raw_secret_bytes(),
//!     bob_shared.raw_secret_bytes()
//! );
//! # Ok::<(), recrypt_group::Error>(())
//! ```

use elliptic_curve::{CurveArithmetic, FieldBytes};
use zeroize::Zeroize;

use crate::{GroupElement, Result, Scalar};

/// Shared secret value computed via Diffie-Hellman key agreement.
///
/// The secret bytes are wiped from memory on drop.
#[derive(Debug)]
pub struct SharedSecret<C: CurveArithmetic> {
    secret_bytes: FieldBytes<C>,
}

impl<C: CurveArithmetic> SharedSecret<C> {
    /// Returns the raw shared secret: the x-coordinate of the agreed curve
    /// point.
    ///
    /// Feed this through a key derivation function before using it as a
    /// symmetric key; the raw coordinate is not uniformly random.
    pub fn raw_secret_bytes(&self) -> &FieldBytes<C> {
        &self.secret_bytes
    }
}

impl<C: CurveArithmetic> Drop for SharedSecret<C> {
    fn drop(&mut self) {
        self.secret_bytes.as_mut_slice().zeroize()
    }
}

impl<C: CurveArithmetic> zeroize::ZeroizeOnDrop for SharedSecret<C> {}

/// Computes the shared secret `public * secret`.
///
/// Fails with [`crate::Error::CrossContextMismatch`] when the operands come
/// from different contexts, and with [`crate::Error::PointNotSet`] when the
/// agreed point is the identity (a degenerate public point or zero secret).
pub fn diffie_hellman<C>(
    secret: &Scalar<'_, C>,
    public: &GroupElement<'_, C>,
) -> Result<SharedSecret<C>>
where
    C: CurveArithmetic,
{
    let shared_point = public.mul(secret)?;
    let secret_bytes = shared_point.x_coordinate()?;

    Ok(SharedSecret { secret_bytes })
}
