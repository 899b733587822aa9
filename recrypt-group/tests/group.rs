//! Group law, codec, and hashing tests.

use hex_literal::hex;
use k256::Secp256k1;
use rand_core::OsRng;
use recrypt_group::{hash_points, hash_to_scalar, CurveContext, Error, GroupElement, Scalar};
use sha2::Sha256;

/// SEC1 compressed encoding of the secp256k1 generator.
const GENERATOR_COMPRESSED: [u8; 33] =
    hex!("0279BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798");

fn context() -> CurveContext<Secp256k1> {
    CurveContext::new().unwrap()
}

#[test]
fn generator_has_known_encoding() {
    let ctx = context();
    let g = GroupElement::generator(&ctx);

    assert_eq!(g.to_bytes().as_ref(), &GENERATOR_COMPRESSED[..]);
    assert_eq!(g.x_coordinate().unwrap().as_slice(), &GENERATOR_COMPRESSED[1..]);
}

#[test]
fn identity_laws() {
    let ctx = context();
    let p = GroupElement::random(&ctx, &mut OsRng).unwrap();
    let identity = GroupElement::identity(&ctx);

    assert_eq!(p.add(&identity).unwrap(), p);
    assert_eq!(identity.add(&p).unwrap(), p);
    assert_eq!(p.mul(&Scalar::zero(&ctx)).unwrap(), identity);
    assert_eq!(p.mul(&Scalar::one(&ctx)).unwrap(), p);
    assert_eq!(identity.double(), identity);
}

#[test]
fn doubling_matches_addition_and_multiplication() {
    let ctx = context();
    let p = GroupElement::random(&ctx, &mut OsRng).unwrap();
    let two = Scalar::from_u64(2, &ctx);

    assert_eq!(p.add(&p).unwrap(), p.double());
    assert_eq!(p.mul(&two).unwrap(), p.double());
}

#[test]
fn addition_associates() {
    let ctx = context();
    let p = GroupElement::random(&ctx, &mut OsRng).unwrap();
    let q = GroupElement::random(&ctx, &mut OsRng).unwrap();
    let r = GroupElement::random(&ctx, &mut OsRng).unwrap();

    assert_eq!(
        p.add(&q).unwrap().add(&r).unwrap(),
        p.add(&q.add(&r).unwrap()).unwrap()
    );
    assert_eq!(p.add(&q).unwrap(), q.add(&p).unwrap());
}

#[test]
fn scalar_multiplication_commutes_with_scalar_form() {
    let ctx = context();
    let p = GroupElement::random(&ctx, &mut OsRng).unwrap();
    let k = Scalar::random(&ctx, &mut OsRng).unwrap();

    assert_eq!(p.mul(&k).unwrap(), k.mul_point(&p).unwrap());
}

#[test]
fn multiplying_by_reduced_order_yields_identity() {
    let ctx = context();
    let p = GroupElement::random(&ctx, &mut OsRng).unwrap();

    let order = hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141");
    let zero = Scalar::from_bytes_reduced(&order.into(), &ctx);

    assert_eq!(p.mul(&zero).unwrap(), GroupElement::identity(&ctx));
}

#[test]
fn encoding_round_trips() {
    let ctx = context();
    let p = GroupElement::random(&ctx, &mut OsRng).unwrap();

    // Compressed (canonical) form.
    assert_eq!(GroupElement::from_bytes(&p.to_bytes(), &ctx).unwrap(), p);

    // Uncompressed form decodes to the same point.
    let uncompressed = p.to_encoded_point(false);
    assert_eq!(uncompressed.as_bytes().len(), 65);
    assert_eq!(
        GroupElement::from_bytes(uncompressed.as_bytes(), &ctx).unwrap(),
        p
    );

    // Hex is the canonical bytes in text form.
    assert_eq!(p.to_hex(), format!("{:x}", p));
}

#[test]
fn invalid_encodings_are_rejected() {
    let ctx = context();

    // Unknown tag.
    assert_eq!(
        GroupElement::from_bytes(&[0x05; 33], &ctx).unwrap_err(),
        Error::InvalidEncoding
    );

    // Valid compressed tag, x-coordinate not on the curve.
    let mut bad = [0xff; 33];
    bad[0] = 0x02;
    assert_eq!(
        GroupElement::from_bytes(&bad, &ctx).unwrap_err(),
        Error::InvalidEncoding
    );

    // Truncated input.
    assert_eq!(
        GroupElement::from_bytes(&GENERATOR_COMPRESSED[..32], &ctx).unwrap_err(),
        Error::InvalidEncoding
    );
}

#[test]
fn random_points_are_distinct_subgroup_members() {
    let ctx = context();
    let p = GroupElement::random(&ctx, &mut OsRng).unwrap();
    let q = GroupElement::random(&ctx, &mut OsRng).unwrap();

    assert!(!bool::from(p.is_identity()));
    assert_ne!(p, q);
}

#[test]
fn cross_context_operations_fail() {
    let ctx_a = context();
    let ctx_b = context();

    let p = GroupElement::generator(&ctx_a);
    let q = GroupElement::generator(&ctx_b);
    let k = Scalar::from_u64(3, &ctx_b);

    assert_eq!(p.add(&q).unwrap_err(), Error::CrossContextMismatch);
    assert_eq!(p.mul(&k).unwrap_err(), Error::CrossContextMismatch);
    assert_ne!(p, q);
}

#[test]
fn hashing_is_order_sensitive() {
    let ctx = context();
    let a = GroupElement::random(&ctx, &mut OsRng).unwrap();
    let b = GroupElement::random(&ctx, &mut OsRng).unwrap();

    let ab = hash_points::<_, Sha256>(&[a, b]).unwrap();
    let ba = hash_points::<_, Sha256>(&[b, a]).unwrap();
    assert_ne!(ab, ba);

    let ab_scalar = hash_to_scalar::<_, Sha256>(&[a, b], &ctx).unwrap();
    let ba_scalar = hash_to_scalar::<_, Sha256>(&[b, a], &ctx).unwrap();
    assert_ne!(ab_scalar, ba_scalar);
}

#[test]
fn hash_to_scalar_is_deterministic() {
    let ctx = context();
    let a = GroupElement::random(&ctx, &mut OsRng).unwrap();
    let b = GroupElement::random(&ctx, &mut OsRng).unwrap();

    let once = hash_to_scalar::<_, Sha256>(&[a, b], &ctx).unwrap();
    let twice = hash_to_scalar::<_, Sha256>(&[a, b], &ctx).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn hash_to_scalar_rejects_foreign_context() {
    let ctx_a = context();
    let ctx_b = context();
    let p = GroupElement::generator(&ctx_a);

    assert_eq!(
        hash_to_scalar::<_, Sha256>(&[p], &ctx_b).unwrap_err(),
        Error::CrossContextMismatch
    );
}
