//! Hybrid encryption built from key generation, scalar multiplication,
//! point encoding and the KDF.
//!
//! Ciphertext layout: `C1 || C2 || C3`, where `C1` is the encoded ephemeral
//! point, `C2` the message XORed with the KDF stream and `C3` an MD5 tag over
//! `x2 || M || y2`.

use ecies::{BitString, EciesError, SecretKey, generate_key, kdf};
use md5::{Digest, Md5};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wcurve::dev::p521;
use wcurve::{Curve, CurveParams, CurvePoint, marshal, unmarshal};

const TAG_LEN: usize = 16;

fn coordinates(curve: &CurveParams, point: &CurvePoint) -> Vec<u8> {
    marshal(curve, point)[1..].to_vec()
}

fn tag(curve: &CurveParams, shared: &CurvePoint, msg: &[u8]) -> Vec<u8> {
    let coords = coordinates(curve, shared);
    let (x2, y2) = coords.split_at(curve.byte_len());
    let mut hasher = Md5::new();
    hasher.update(x2);
    hasher.update(msg);
    hasher.update(y2);
    hasher.finalize().to_vec()
}

fn encrypt(
    curve: &CurveParams,
    recipient: &CurvePoint,
    msg: &[u8],
    rng: &mut StdRng,
) -> Result<Vec<u8>, EciesError> {
    loop {
        let (k, c1) = generate_key(curve, rng)?;
        let shared = curve.scalar_mult(recipient, k.as_bytes());
        let seed = BitString::from_bytes(&coordinates(curve, &shared));
        let stream = match kdf(&seed, msg.len() * 8) {
            Ok(stream) => stream,
            Err(EciesError::DegenerateOutput) => continue,
            Err(e) => return Err(e),
        };

        let mut out = marshal(curve, &c1);
        out.extend(msg.iter().zip(stream.as_bytes()).map(|(m, s)| m ^ s));
        out.extend(tag(curve, &shared, msg));
        return Ok(out);
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
    let seed = BitString::from_bytes(&coordinates(curve, &shared));
    let stream = kdf(&seed, c2.len() * 8).ok()?;
    let msg: Vec<u8> = c2.iter().zip(stream.as_bytes()).map(|(c, s)| c ^ s).collect();

    (tag(curve, &shared, &msg) == c3).then_some(msg)
}

fn main() {
    let curve = p521();
    let mut rng = StdRng::seed_from_u64(42);
    let (secret, public) = generate_key(&curve, &mut rng).expect("keygen");

    let public_bytes = bincode::serialize(&public).expect("serialize public key");
    let public2: CurvePoint = bincode::deserialize(&public_bytes).expect("deserialize public key");
    assert_eq!(public2, public);

    let msg = b"hello ecies";
    let ciphertext = encrypt(&curve, &public2, msg, &mut rng).expect("encrypt");
    let plaintext = decrypt(&curve, &secret, &ciphertext).expect("decrypt");
    assert_eq!(plaintext, msg);

    println!("ciphertext: {}", hex::encode(&ciphertext));
}
