use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Durata del token: 1 ora. Nessun refresh: scaduto il token si rifà login.
const TOKEN_TTL_SECS: i64 = 3600;

/// Segreto condiviso fisso, sovrascrivibile da variabile d'ambiente.
fn jwt_secret() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|_| "ruplan_dev_secret_key".to_string())
}

/// Claims del token: la sola identità dell'utente, più la scadenza.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub id: String,
    pub exp: usize,
}

/// Hash della password con Argon2id e sale casuale. Ritorna la stringa in formato PHC
/// (es. `$argon2id$v=19$m=19456,t=2,p=1$...`) da salvare in users.password_hash.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verifica la password in chiaro contro un hash PHC salvato.
/// Ok(false) se non corrisponde, Err se l'hash salvato è malformato.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

fn unix_now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock before unix epoch")
        .as_secs() as i64
}

/// Emette un token firmato HS256 con scadenza a 1 ora.
pub fn issue_token(user_id: &str) -> Result<String, jsonwebtoken::errors::Error> {
    issue_token_with_ttl(user_id, TOKEN_TTL_SECS)
}

/// Variante con TTL esplicito in secondi (negativo = già scaduto, utile nei test).
pub fn issue_token_with_ttl(
    user_id: &str,
    ttl_secs: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        id: user_id.to_string(),
        exp: (unix_now() + ttl_secs) as usize,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret().as_bytes()),
    )
}

/// Decodifica un token verificandone firma e scadenza, e ritorna i claims.
/// Oggi nessun endpoint la invoca: i token sono emessi ma non controllati.
pub fn decode_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret().as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    /*
        Obiettivo test: l'hash è in formato PHC, salato (due hash della stessa
        password differiscono) e verificabile solo con la password giusta.
    */
    #[test]
    fn hash_and_verify_password() {
        let h1 = hash_password("segretissimo").expect("hash");
        let h2 = hash_password("segretissimo").expect("hash");

        assert!(h1.starts_with("$argon2"));
        assert_ne!(h1, h2, "il sale casuale deve cambiare l'hash");

        assert!(verify_password("segretissimo", &h1).expect("verify"));
        assert!(!verify_password("sbagliata", &h1).expect("verify"));
    }

    /*
        Obiettivo test: un hash salvato malformato è un errore, non un mismatch.
    */
    #[test]
    fn malformed_hash_is_error() {
        assert!(verify_password("qualsiasi", "non-un-hash-phc").is_err());
    }

    /*
        Obiettivo test: il token emesso si decodifica con il segreto condiviso
        e trasporta come unico claim l'id utente.
    */
    #[test]
    fn issue_and_decode_token() {
        let token = issue_token("55555555-5555-4555-8555-555555555555").expect("issue");
        let claims = decode_token(&token).expect("decode");
        assert_eq!(claims.id, "55555555-5555-4555-8555-555555555555");
    }

    /*
        Obiettivo test: un token oltre la scadenza viene rifiutato in decodifica.
        TTL -120s per stare oltre la tolleranza di default della validazione.
    */
    #[test]
    fn expired_token_is_rejected() {
        let token = issue_token_with_ttl("user-1", -120).expect("issue");
        assert!(decode_token(&token).is_err());
    }

    /*
        Obiettivo test: un token manomesso (firma non valida) viene rifiutato.
    */
    #[test]
    fn tampered_token_is_rejected() {
        let token = issue_token("user-1").expect("issue");
        let mut tampered = token.clone();
        tampered.pop();
        assert!(decode_token(&tampered).is_err());
    }
}
