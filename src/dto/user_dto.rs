use serde::Deserialize;
use validator::Validate;

/// Create body. No field is required; a well-formed `{}` yields a
/// zero-valued user. A client-sent `id` member is ignored; identifiers
/// are generated server-side.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserPayload {
    #[serde(default, rename = "companyname")]
    pub company_name: String,

    #[serde(default, deserialize_with = "trim_to_none")]
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[serde(default, rename = "isActive")]
    pub is_active: bool,
}

/// Partial update body: absent members leave the stored value untouched.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserPayload {
    #[serde(rename = "companyname")]
    pub company_name: Option<String>,

    #[serde(default, deserialize_with = "trim_to_none")]
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[serde(rename = "isActive")]
    pub is_active: Option<bool>,
}

// An empty or whitespace-only email counts as "not supplied", so it is
// neither validated nor, on update, written over the stored value.
fn trim_to_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }))
}
