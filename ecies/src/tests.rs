use super::*;
use md5::{Digest, Md5};
use rand::SeedableRng;
use rand::TryRngCore;
use rand::rngs::StdRng;
use std::io;
use wcurve::dev::{p256, p521};
use wcurve::{Curve, CurveParams, CurvePoint, marshal, unmarshal};

/// Replays fixed byte strings, one per `try_fill_bytes` call, then fails.
struct ScriptedRng {
    draws: Vec<Vec<u8>>,
    calls: usize,
}

impl ScriptedRng {
    fn new(draws: Vec<Vec<u8>>) -> Self {
        ScriptedRng { draws, calls: 0 }
    }
}

impl TryRngCore for ScriptedRng {
    type Error = io::Error;

    fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
        Err(io::Error::other("not scripted"))
    }

    fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
        Err(io::Error::other("not scripted"))
    }

    fn try_fill_bytes(&mut self, dst: &mut [u8]) -> Result<(), Self::Error> {
        let draw = self
            .draws
            .get(self.calls)
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))?;
        dst.copy_from_slice(draw);
        self.calls += 1;
        Ok(())
    }
}

#[test]
fn test_generate_key_on_curve() {
    let curve = p521();
    let mut rng = StdRng::seed_from_u64(42);
    let (secret, public) = generate_key(&curve, &mut rng).expect("keygen");

    assert_eq!(secret.as_bytes().len(), 66);
    assert!(secret.as_bytes()[0] <= 1);
    assert!(curve.is_on_curve(&curve.params().g));
    assert!(curve.is_on_curve(&public));
    assert!(curve.is_on_curve(&curve.double(&public)));
    assert!(curve.is_on_curve(&curve.add(&curve.params().g, &public)));
    assert!(curve.is_on_curve(&curve.scalar_mult(&curve.params().g, &[1, 3, 4])));
    assert_eq!(secret.public_key(&curve), public);
}

#[test]
fn test_generate_key_draws_fresh_keys() {
    let curve = p256();
    let mut rng = StdRng::seed_from_u64(42);
    let (sk1, pk1) = generate_key(&curve, &mut rng).expect("keygen");
    let (sk2, pk2) = generate_key(&curve, &mut rng).expect("keygen");

    assert_ne!(sk1.as_bytes(), sk2.as_bytes());
    assert_ne!(pk1, pk2);
}

#[test]
fn test_generate_key_retries_on_infinity() {
    let curve = p256();
    // zero scalar, then the group order: both give the point at infinity
    let mut rng = ScriptedRng::new(vec![
        vec![0u8; 32],
        curve.n.to_bytes_be(),
        vec![0x01; 32],
    ]);
    let (secret, public) = generate_key(&curve, &mut rng).expect("keygen");

    assert_eq!(rng.calls, 3);
    assert_eq!(secret.as_bytes(), &[0x01; 32]);
    assert_eq!(public, curve.scalar_base_mult(&[0x01; 32]));
    assert!(curve.is_on_curve(&public));
}

#[test]
fn test_generate_key_masks_excess_bits() {
    let curve = p521();
    let mut rng = ScriptedRng::new(vec![vec![0xff; 66]]);
    let (secret, _) = generate_key(&curve, &mut rng).expect("keygen");

    assert_eq!(secret.as_bytes()[0], 0x01);
    assert!(secret.as_bytes()[1..].iter().all(|&b| b == 0xff));
}

#[test]
fn test_generate_key_propagates_rng_failure() {
    let curve = p256();
    let mut rng = ScriptedRng::new(vec![]);
    let err = generate_key(&curve, &mut rng).unwrap_err();
    assert_eq!(err, EciesError::RandomSource("script exhausted".to_string()));

    // a failure after an infinity draw is not retried either
    let mut rng = ScriptedRng::new(vec![vec![0u8; 32]]);
    assert!(matches!(
        generate_key(&curve, &mut rng),
        Err(EciesError::RandomSource(_))
    ));
    assert_eq!(rng.calls, 1);
}

#[test]
fn test_secret_key_debug_is_redacted() {
    let secret = SecretKey::from_bytes(&[0xab; 4]);
    let printed = format!("{secret:?}");
    assert!(!printed.contains("171"));
    assert!(!printed.to_lowercase().contains("ab"));
}

#[test]
fn test_public_key_serde() {
    let curve = p256();
    let mut rng = StdRng::seed_from_u64(7);
    let (_, public) = generate_key(&curve, &mut rng).expect("keygen");

    let bytes = bincode::serialize(&public).expect("serialize");
    let back: CurvePoint = bincode::deserialize(&bytes).expect("deserialize");
    assert_eq!(back, public);
}

// The protocol below only shows how the primitives compose; it is not part
// of the library.

const TAG_LEN: usize = 16;

fn shared_bits(curve: &CurveParams, shared: &CurvePoint) -> BitString {
    BitString::from_bytes(&marshal(curve, shared)[1..])
}

fn tag(curve: &CurveParams, shared: &CurvePoint, msg: &[u8]) -> Vec<u8> {
    let coords = &marshal(curve, shared)[1..];
    let (x2, y2) = coords.split_at(curve.byte_len());
    let mut hasher = Md5::new();
    hasher.update(x2);
    hasher.update(msg);
    hasher.update(y2);
    hasher.finalize().to_vec()
}

fn xor(a: &[u8], b: &[u8]) -> Vec<u8> {
    a.iter().zip(b).map(|(x, y)| x ^ y).collect()
}

fn encrypt(curve: &CurveParams, recipient: &CurvePoint, msg: &[u8], rng: &mut StdRng) -> Vec<u8> {
    loop {
        let (k, c1) = generate_key(curve, rng).expect("keygen");
        let shared = curve.scalar_mult(recipient, k.as_bytes());
        let stream = match kdf(&shared_bits(curve, &shared), msg.len() * 8) {
            Ok(stream) => stream,
            // pick another ephemeral scalar
            Err(EciesError::DegenerateOutput) => continue,
            Err(e) => panic!("kdf: {e}"),
        };

        let mut out = marshal(curve, &c1);
        out.extend(xor(msg, stream.as_bytes()));
        out.extend(tag(curve, &shared, msg));
        return out;
    }
}

fn decrypt(curve: &CurveParams, secret: &SecretKey, ciphertext: &[u8]) -> Option<Vec<u8>> {
    let c1_len = 1 + 2 * curve.byte_len();
    if ciphertext.len() <= c1_len + TAG_LEN {
        return None;
    }
    let (c1, rest) = ciphertext.split_at(c1_len);
    let (c2, c3) = rest.split_at(rest.len() - TAG_LEN);

    let c1 = unmarshal(curve, c1)?;
    if !curve.is_on_curve(&c1) {
        return None;
    }
    let shared = curve.scalar_mult(&c1, secret.as_bytes());
    let stream = kdf(&shared_bits(curve, &shared), c2.len() * 8).ok()?;
    let msg = xor(c2, stream.as_bytes());

    (tag(curve, &shared, &msg) == c3).then_some(msg)
}

#[test]
fn test_encrypt_decrypt_round_trip() {
    let curve = p521();
    let mut rng = StdRng::seed_from_u64(2024);
    let (secret, public) = generate_key(&curve, &mut rng).expect("keygen");

    let messages: [&[u8]; 3] = [b"x", b"xxx", b"a message longer than one 128-bit hash block"];
    for msg in messages {
        let ciphertext = encrypt(&curve, &public, msg, &mut rng);
        assert_eq!(ciphertext.len(), 133 + msg.len() + TAG_LEN);
        assert_eq!(decrypt(&curve, &secret, &ciphertext).as_deref(), Some(msg));
    }
}

#[test]
fn test_decrypt_rejects_tampering() {
    let curve = p256();
    let mut rng = StdRng::seed_from_u64(99);
    let (secret, public) = generate_key(&curve, &mut rng).expect("keygen");
    let ciphertext = encrypt(&curve, &public, b"attack at dawn", &mut rng);

    let mut flipped = ciphertext.clone();
    flipped[65] ^= 0x01;
    assert_eq!(decrypt(&curve, &secret, &flipped), None);

    let mut bad_tag = ciphertext.clone();
    bad_tag[0] = 0x02;
    assert_eq!(decrypt(&curve, &secret, &bad_tag), None);

    let mut off_curve = ciphertext.clone();
    off_curve[64] ^= 0x01;
    assert_eq!(decrypt(&curve, &secret, &off_curve), None);

    let (other, _) = generate_key(&curve, &mut rng).expect("keygen");
    assert_eq!(decrypt(&curve, &other, &ciphertext), None);
}
