//! Elliptic curve scalar and group arithmetic for Diffie-Hellman style key
//! agreement and the proxy re-encryption protocols built on top of it.
//!
//! This crate provides the arithmetic substrate only: finite-field
//! arithmetic modulo a curve's group order ([`Scalar`]), the elliptic curve
//! group law and scalar multiplication ([`GroupElement`]), and the
//! serialization and hash-of-points primitives needed to move values across
//! a wire or into other cryptographic constructions. Higher-level protocol
//! logic, key management, and transport are out of scope.
//!
//! All types are generic over a backend curve implementing
//! [`elliptic_curve::CurveArithmetic`], such as `k256` or `p256`; the
//! backend supplies the actual field and point computations, and any
//! conforming implementation may be substituted.
//!
//! Values are derived from an explicit [`CurveContext`] describing the
//! active curve, and borrow that context for their lifetime. Operands of
//! binary operations must share a context; mixing contexts is reported as
//! [`Error::CrossContextMismatch`] rather than silently computed.
//!
//! # Concurrency
//!
//! A [`CurveContext`] is immutable after construction and holds no backend
//! working state, so one context may be shared freely across threads. All
//! operations are synchronous, pure value transformations; randomness comes
//! from a caller-supplied RNG.
//!
//! # Usage
//!
//! Key agreement between two parties:
//!
//! ```
//! use rand_core::OsRng;
//! use recrypt_group::{CurveContext, GroupElement, Scalar};
//!
//! let ctx = CurveContext::<k256::Secp256k1>::new()?;
//!
//! // Alice
//! let alice_secret = Scalar::random(&ctx, &mut OsRng)?;
//! let alice_public = alice_secret.to_point();
//!
//! // Bob
//! let bob_secret = Scalar::random(&ctx, &mut OsRng)?;
//! let bob_public = bob_secret.to_point();
//!
//! // Each party combines its own secret with the other's public point and
//! // arrives at the same group element.
//! let alice_shared = bob_public.mul(&alice_secret)?;
//! let bob_shared = alice_public.mul(&bob_secret)?;
//! assert_eq!(alice_shared, bob_shared);
//!
//! // The canonical encoding round-trips for transport.
//! let wire = alice_shared.to_bytes();
//! assert_eq!(GroupElement::from_bytes(&wire, &ctx)?, alice_shared);
//! # Ok::<(), recrypt_group::Error>(())
//! ```
//!
//! # Minimum Supported Rust Version
//!
//! Rust **1.65** or higher.
//!
//! Minimum supported Rust version can be changed in the future, but it will
//! be done with a minor version bump.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo_small.png")]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

mod context;
mod error;
mod point;
mod scalar;

pub mod dh;
pub mod hash;

pub use crate::{
    context::CurveContext,
    dh::{diffie_hellman, SharedSecret},
    error::{Error, Result},
    hash::{hash_points, hash_to_scalar},
    point::GroupElement,
    scalar::Scalar,
};

pub use elliptic_curve;
