use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Computes the BOS request signature.
///
/// The signed message is `timestamp`, `method`, `path` and `source_ip` joined
/// by CRLF, in that order. The result is the HMAC-SHA256 digest keyed with
/// `secret`, encoded as lowercase hex.
pub fn sign(timestamp: &str, method: &str, path: &str, source_ip: &str, secret: &str) -> String {
    let message = format!("{timestamp}\r\n{method}\r\n{path}\r\n{source_ip}");
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
