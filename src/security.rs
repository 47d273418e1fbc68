use rand::RngCore;
use sha2::{Digest, Sha256};

/// Number of random bytes in a per-account salt
const SALT_BYTES: usize = 16;

/// Number of random bytes in a session token
const TOKEN_BYTES: usize = 32;

// =============================================================================
// Password Hashing
// =============================================================================

/// Generate a fresh hex-encoded salt for a new account
pub fn generate_salt() -> String {
    let mut bytes = [0u8; SALT_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Hash a password with a per-account salt
///
/// Computes `SHA256(salt || password)` and returns it hex-encoded. The salt
/// is stored next to the hash, so the same password hashes differently for
/// every account.
///
/// # Arguments
/// * `password` - The plaintext password from the entry form
/// * `salt` - The account's hex-encoded salt
pub fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Check a supplied password against a stored salt and hash
pub fn verify_password(password: &str, salt: &str, expected_hash: &str) -> bool {
    hash_password(password, salt) == expected_hash
}

// =============================================================================
// Session Tokens
// =============================================================================

/// Generate an opaque hex-encoded bearer token for a new session
pub fn generate_session_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

// =============================================================================
// Upload Payload Decoding
// =============================================================================

/// Simple base64 encoder
///
/// Encodes binary data to standard base64 (with + and /).
/// This is public for use in tests.
pub fn base64_encode(data: &[u8]) -> String {
    const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    let mut result = String::new();

    for chunk in data.chunks(3) {
        let b0 = chunk[0] as usize;
        let b1 = chunk.get(1).copied().unwrap_or(0) as usize;
        let b2 = chunk.get(2).copied().unwrap_or(0) as usize;

        result.push(ALPHABET[b0 >> 2] as char);
        result.push(ALPHABET[((b0 & 0x03) << 4) | (b1 >> 4)] as char);

        if chunk.len() > 1 {
            result.push(ALPHABET[((b1 & 0x0f) << 2) | (b2 >> 6)] as char);
        } else {
            result.push('=');
        }

        if chunk.len() > 2 {
            result.push(ALPHABET[b2 & 0x3f] as char);
        } else {
            result.push('=');
        }
    }

    result
}

/// Simple base64 decoder
///
/// Decodes standard base64 (with + and /) as well as URL-safe base64.
/// Used to validate the optional image payload on the classify endpoint;
/// the decoded bytes only feed the size check and the classifier strategy.
pub fn base64_decode(input: &str) -> Result<Vec<u8>, String> {
    // Handle padding
    let input = input.trim();

    // Convert URL-safe to standard base64
    let standard: String = input
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            c => c,
        })
        .collect();

    // Remove any whitespace
    let clean: String = standard.chars().filter(|c| !c.is_whitespace()).collect();

    // Add padding if needed
    let padded = match clean.len() % 4 {
        2 => format!("{}==", clean),
        3 => format!("{}=", clean),
        _ => clean,
    };

    // Decode
    let mut result = Vec::with_capacity(padded.len() * 3 / 4);
    let chars: Vec<char> = padded.chars().collect();

    for chunk in chars.chunks(4) {
        if chunk.len() != 4 {
            return Err("Invalid base64 length".to_string());
        }

        let values: Result<Vec<u8>, String> =
            chunk.iter().map(|&c| decode_base64_char(c)).collect();
        let values = values?;

        result.push((values[0] << 2) | (values[1] >> 4));
        if chunk[2] != '=' {
            result.push((values[1] << 4) | (values[2] >> 2));
        }
        if chunk[3] != '=' {
            result.push((values[2] << 6) | values[3]);
        }
    }

    Ok(result)
}

fn decode_base64_char(c: char) -> Result<u8, String> {
    match c {
        'A'..='Z' => Ok(c as u8 - b'A'),
        'a'..='z' => Ok(c as u8 - b'a' + 26),
        '0'..='9' => Ok(c as u8 - b'0' + 52),
        '+' => Ok(62),
        '/' => Ok(63),
        '=' => Ok(0), // Padding
        _ => Err(format!("Invalid base64 character: {}", c)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Password Hashing Tests
    // =========================================================================

    #[test]
    fn test_generate_salt_format() {
        let salt = generate_salt();

        // Hex-encoded 16 bytes
        assert_eq!(salt.len(), SALT_BYTES * 2);
        assert!(salt.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generate_salt_unique() {
        // Salts are random per account
        assert_ne!(generate_salt(), generate_salt());
    }

    #[test]
    fn test_hash_password_deterministic() {
        let hash1 = hash_password("pw1", "aabb");
        let hash2 = hash_password("pw1", "aabb");

        // Same inputs should produce same output
        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
        assert!(hash1.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_hash_password_salt_matters() {
        // Same password under different salts must differ
        assert_ne!(hash_password("pw1", "aabb"), hash_password("pw1", "ccdd"));
    }

    #[test]
    fn test_hash_password_password_matters() {
        assert_ne!(hash_password("pw1", "aabb"), hash_password("pw2", "aabb"));
    }

    #[test]
    fn test_verify_password() {
        let salt = generate_salt();
        let stored = hash_password("pw1", &salt);

        assert!(verify_password("pw1", &salt, &stored));
        assert!(!verify_password("pw2", &salt, &stored));
        assert!(!verify_password("", &salt, &stored));
    }

    // =========================================================================
    // Session Token Tests
    // =========================================================================

    #[test]
    fn test_generate_session_token_format() {
        let token = generate_session_token();

        assert_eq!(token.len(), TOKEN_BYTES * 2);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generate_session_token_unique() {
        assert_ne!(generate_session_token(), generate_session_token());
    }

    // =========================================================================
    // Base64 Tests
    // =========================================================================

    #[test]
    fn test_base64_roundtrip() {
        let data = b"fake image bytes";
        let decoded = base64_decode(&base64_encode(data)).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_base64_decode_simple() {
        // "Hello" in base64 is "SGVsbG8="
        let decoded = base64_decode("SGVsbG8=").unwrap();
        assert_eq!(decoded, b"Hello");
    }

    #[test]
    fn test_base64_decode_no_padding() {
        // Without padding should still work
        let decoded = base64_decode("SGVsbG8").unwrap();
        assert_eq!(decoded, b"Hello");
    }

    #[test]
    fn test_base64_decode_url_safe() {
        // URL-safe base64 uses - and _ instead of + and /
        let decoded = base64_decode("SGVs-G8_").unwrap();
        // The data decodes successfully with URL-safe chars converted
        assert!(!decoded.is_empty());
    }

    #[test]
    fn test_base64_decode_invalid_char() {
        let result = base64_decode("SGVs@G8!");
        assert!(result.is_err());
    }
}
