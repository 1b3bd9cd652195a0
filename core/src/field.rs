//! Field resolution tables.
//!
//! The source extracts are loosely typed: the same logical field appears
//! under different column names depending on which export produced the file.
//! Every logical field is resolved through an ordered alias list — the first
//! non-empty alias wins — via a single lookup function. Scoring code never
//! guesses keys inline.

use crate::dataset::Row;

/// Normalize a raw cell: strip a leading BOM, trim whitespace, strip one
/// layer of surrounding double quotes.
pub fn norm(value: &str) -> &str {
    let v = value.strip_prefix('\u{feff}').unwrap_or(value);
    let v = v.trim();
    let v = v.strip_prefix('"').unwrap_or(v);
    v.strip_suffix('"').unwrap_or(v)
}

/// The literal token `null` (any case) counts as an absent value.
fn is_null_token(value: &str) -> bool {
    value.eq_ignore_ascii_case("null")
}

/// Resolve a logical field: first alias whose normalized value is non-empty
/// and not the `null` token.
pub fn pick<'a>(row: &'a Row, aliases: &[&str]) -> &'a str {
    for key in aliases {
        if let Some(raw) = row.get(*key) {
            let value = norm(raw);
            if !value.is_empty() && !is_null_token(value) {
                return value;
            }
        }
    }
    ""
}

pub fn has_value(row: &Row, aliases: &[&str]) -> bool {
    !pick(row, aliases).is_empty()
}

/// Empty-collection tokens produced by array/json columns in the extracts.
pub fn is_empty_array_like(value: &str) -> bool {
    let v = value.trim();
    v.is_empty() || v == "[]" || v == "{}" || is_null_token(v)
}

// ── Alias tables ───────────────────────────────────────────────────────────

pub mod account {
    pub const ID: &[&str] = &["id", "account_id"];
    pub const EMAIL: &[&str] = &["email"];
    pub const FULL_NAME: &[&str] = &["full_name", "name"];
}

pub mod role {
    pub const ACCOUNT_ID: &[&str] = &["user_id", "account_id"];
    pub const ROLE: &[&str] = &["role"];
}

pub mod athlete {
    pub const ID: &[&str] = &["id", "athlete_id"];
    pub const ACCOUNT_ID: &[&str] = &["user_id", "account_id"];
    pub const PHOTO: &[&str] = &["foto_url", "foto", "photo_url", "avatar_url"];
    pub const BIO: &[&str] = &["bio", "biografia", "about"];
    pub const MODALITY: &[&str] = &["modalidade", "modalities", "sports"];
    pub const LEVEL: &[&str] = &["nivel", "level"];
    pub const STATE: &[&str] = &["state_id", "estado", "uf", "state"];
    pub const CITY: &[&str] = &["city_id", "cidade", "city"];
    pub const PHONE: &[&str] = &["telefone", "phone", "celular", "whatsapp"];
    pub const INSTAGRAM: &[&str] = &["instagram", "insta", "instagram_url"];
    pub const YOUTUBE: &[&str] = &["youtube", "youtube_url", "youtube_link", "youtubeChannel"];
    pub const TIKTOK: &[&str] = &["tiktok", "tiktok_url", "tiktok_link"];
    pub const LINKEDIN: &[&str] = &["linkedin", "linkedin_url", "linkedin_link"];
    pub const VALUES_DESCRIPTION: &[&str] = &["valores_descricao", "values_description"];
}

pub mod partner {
    pub const ACCOUNT_ID: &[&str] = &["user_id", "account_id"];
    pub const LOGO: &[&str] = &["logo_url", "logo"];
    pub const DESCRIPTION: &[&str] = &["descricao", "description"];
    pub const CITY: &[&str] = &["cidade", "city"];
    pub const STATE: &[&str] = &["estado", "uf", "state"];
    pub const CONTACT: &[&str] = &["contact", "contato"];
    pub const WEBSITE: &[&str] = &["website", "site"];
    pub const LINKEDIN: &[&str] = &["linkedin", "linkedin_url"];
    pub const INSTAGRAM: &[&str] = &["instagram", "instagram_url"];
    pub const DISPLAY_NAME: &[&str] = &["nome_fantasia", "display_name"];
    pub const USERNAME: &[&str] = &["username"];
    pub const ENTITY_KIND: &[&str] = &["tipo_entidade", "entity_type", "entity_kind"];
    pub const TAX_ID: &[&str] = &["cnpj", "tax_id"];
    pub const LEGAL_NAME: &[&str] = &["razao_social", "legal_name"];
    pub const PERSONAL_ID: &[&str] = &["cpf", "personal_id"];
}

pub mod fact {
    /// The foreign key every fact table carries.
    pub const FOREIGN_KEY: &[&str] = &["athlete_id"];
    /// Activation rows name their type under several historical columns.
    pub const ACTIVATION_TYPE: &[&str] =
        &["activation_type_id", "type_id", "ativacao_id", "activation_id"];
}
