use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Signs and verifies access tokens.
///
/// Tokens are compact JWS strings (`header.payload.signature`) signed with
/// HS256 over a shared secret. The secret is injected at construction and
/// never leaves the codec. Encoding and decoding perform no I/O and keep no
/// per-call state.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenCodec {
    /// Create a new codec with a signing secret.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Load it from configuration or the environment, never from code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a token for `claims` that expires `ttl` from now.
    ///
    /// # Arguments
    /// * `claims` - Claims to embed (expiration is overwritten)
    /// * `ttl` - Token lifetime
    ///
    /// # Returns
    /// Compact token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Claims could not be serialized or signed
    pub fn encode(&self, claims: Claims, ttl: Duration) -> Result<String, TokenError> {
        self.sign(&claims.expiring_in(ttl))
    }

    /// Sign claims as they are, without touching their expiration.
    pub fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a token and return its claims.
    ///
    /// The signature is checked before anything in the payload is trusted.
    /// Expiration is enforced with zero leeway. The header has to parse
    /// before the signature can be checked, so an altered header usually
    /// surfaces as `Malformed` and only a header that still parses reports
    /// `InvalidSignature`. Either way the token is rejected.
    ///
    /// # Errors
    /// * `InvalidSignature` - Signature does not match header and payload
    /// * `Expired` - `exp` lies in the past
    /// * `Malformed` - Token cannot be parsed into the expected structure
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    const SECRET: &[u8] = b"my_secret_key_at_least_32_bytes_long!";

    fn flip_payload_char(token: &str) -> String {
        let first_dot = token.find('.').expect("token has a header segment");
        let index = first_dot + 5;
        let mut bytes = token.as_bytes().to_vec();
        bytes[index] = if bytes[index] == b'A' { b'B' } else { b'A' };
        String::from_utf8(bytes).expect("token is ascii")
    }

    #[test]
    fn test_encode_and_decode() {
        let codec = TokenCodec::new(SECRET);

        let token = codec
            .encode(Claims::new("a@x.com"), Duration::minutes(15))
            .expect("Failed to encode token");
        assert_eq!(token.split('.').count(), 3);

        let decoded = codec.decode(&token).expect("Failed to decode token");
        assert_eq!(decoded.subject(), "a@x.com");
        assert_eq!(decoded.expires_at() - decoded.issued_at(), 15 * 60);
    }

    #[test]
    fn test_decode_returns_signed_claims_unchanged() {
        let codec = TokenCodec::new(SECRET);
        let now = Utc::now().timestamp();
        let claims = Claims::new("a@x.com")
            .with_issued_at(now)
            .with_expiration(now + 60);

        let token = codec.sign(&claims).expect("Failed to sign token");

        assert_eq!(codec.decode(&token), Ok(claims));
    }

    #[test]
    fn test_decode_expired_token() {
        let codec = TokenCodec::new(SECRET);
        let now = Utc::now().timestamp();
        let claims = Claims::new("a@x.com")
            .with_issued_at(now - 120)
            .with_expiration(now - 10);

        let token = codec.sign(&claims).expect("Failed to sign token");

        assert_eq!(codec.decode(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let codec1 = TokenCodec::new(b"secret1_at_least_32_bytes_long_key!");
        let codec2 = TokenCodec::new(b"secret2_at_least_32_bytes_long_key!");

        let token = codec1
            .encode(Claims::new("a@x.com"), Duration::minutes(15))
            .expect("Failed to encode token");

        assert_eq!(codec2.decode(&token), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_decode_tampered_payload() {
        let codec = TokenCodec::new(SECRET);
        let token = codec
            .encode(Claims::new("a@x.com"), Duration::minutes(15))
            .expect("Failed to encode token");

        let tampered = flip_payload_char(&token);
        assert_ne!(tampered, token);

        assert_eq!(codec.decode(&tampered), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_decode_spliced_signature() {
        let codec = TokenCodec::new(SECRET);
        let alice = codec
            .encode(Claims::new("alice@x.com"), Duration::minutes(15))
            .expect("Failed to encode token");
        let mallory = codec
            .encode(Claims::new("mallory@x.com"), Duration::minutes(15))
            .expect("Failed to encode token");

        let (alice_message, _) = alice.rsplit_once('.').expect("three segments");
        let (_, mallory_signature) = mallory.rsplit_once('.').expect("three segments");
        let spliced = format!("{}.{}", alice_message, mallory_signature);

        assert_eq!(codec.decode(&spliced), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_decode_tampered_header() {
        let codec = TokenCodec::new(SECRET);
        let token = codec
            .encode(Claims::new("a@x.com"), Duration::minutes(15))
            .expect("Failed to encode token");

        // Garbled header bytes no longer parse.
        let mut bytes = token.as_bytes().to_vec();
        bytes[1] = if bytes[1] == b'A' { b'B' } else { b'A' };
        let garbled = String::from_utf8(bytes).expect("token is ascii");
        assert!(matches!(codec.decode(&garbled), Err(TokenError::Malformed(_))));

        // A header that still parses but differs breaks the signature.
        let mut other_header = Header::new(Algorithm::HS256);
        other_header.typ = Some("JOSE".to_string());
        let claims = Claims::new("a@x.com").expiring_in(Duration::minutes(15));
        let reheadered = encode(&other_header, &claims, &EncodingKey::from_secret(SECRET))
            .expect("Failed to encode token");

        let (other_header_segment, _) = reheadered.split_once('.').expect("three segments");
        let (_, payload_and_signature) = token.split_once('.').expect("three segments");
        let spliced = format!("{}.{}", other_header_segment, payload_and_signature);

        assert_eq!(codec.decode(&spliced), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_decode_malformed_token() {
        let codec = TokenCodec::new(SECRET);

        for token in ["", "invalid.token.here", "not-a-token", "a.b"] {
            let result = codec.decode(token);
            assert!(
                matches!(result, Err(TokenError::Malformed(_))),
                "expected Malformed for {:?}, got {:?}",
                token,
                result
            );
        }
    }

    #[test]
    fn test_decode_rejects_other_algorithm() {
        let codec = TokenCodec::new(SECRET);
        let claims = Claims::new("a@x.com").expiring_in(Duration::minutes(15));
        let token = encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .expect("Failed to encode token");

        assert!(matches!(codec.decode(&token), Err(TokenError::Malformed(_))));
    }
}
