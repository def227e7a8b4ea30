use uuid::Uuid;

pub const CODE_PREFIX: &str = "SPIN-";
const SUFFIX_LEN: usize = 8;

/// Spin code such as `SPIN-3FA85F64`: the prefix plus the first 8 hex
/// characters of a random v4 UUID, uppercased.
/// Uniqueness is enforced by the customers table, not here.
pub fn generate_code() -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    format!("{CODE_PREFIX}{}", uuid[..SUFFIX_LEN].to_ascii_uppercase())
}
