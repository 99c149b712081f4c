use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

use crate::error::CoreError;

pub const DEFAULT_DOCUMENT_TYPE: &str = "NOTIFICAÇÃO";
pub const DEFAULT_NOTIFICATION_TYPE: &str = "N/A";
pub const DEFAULT_CITY: &str = "Taguatinga/DF";
pub const DEFAULT_APPEAL_URL: &str = "https://exemplo.com.br/recurso";
pub const DEFAULT_APPEAL_DAYS: u32 = 5;
pub const DEFAULT_SIGNER_NAME: &str = "Administração do Condomínio";
pub const DEFAULT_SIGNER_ROLE: &str = "Síndico";

/// Notification payload as received on the wire.
///
/// Every field is optional. Scalar text fields accept strings or numbers and
/// treat `null` as absent; defaults are applied by [`NotificationRequest::resolve`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotificationRequest {
    #[serde(
        default,
        rename = "numero",
        alias = "numero_notificacao",
        deserialize_with = "lenient_text"
    )]
    pub number: Option<String>,

    #[serde(default, rename = "data_emissao", deserialize_with = "lenient_text")]
    pub issue_date: Option<String>,

    #[serde(default, rename = "bloco", deserialize_with = "lenient_text")]
    pub block: Option<String>,

    #[serde(default, rename = "unidade", deserialize_with = "lenient_text")]
    pub unit: Option<String>,

    #[serde(default, rename = "tipo_notificacao", deserialize_with = "lenient_text")]
    pub notification_type: Option<String>,

    #[serde(default, rename = "assunto", deserialize_with = "lenient_text")]
    pub subject: Option<String>,

    #[serde(default, rename = "tipo_documento", deserialize_with = "lenient_text")]
    pub document_type: Option<String>,

    #[serde(default, rename = "cidade", deserialize_with = "lenient_text")]
    pub city: Option<String>,

    #[serde(default, rename = "fatos")]
    pub facts: Option<FactsInput>,

    #[serde(default, rename = "fundamentacao_legal", deserialize_with = "lenient_text")]
    pub legal_basis: Option<String>,

    #[serde(default, rename = "texto_descritivo", deserialize_with = "lenient_text")]
    pub description: Option<String>,

    #[serde(default, rename = "tipo_penalidade", deserialize_with = "lenient_text")]
    pub penalty_type: Option<String>,

    #[serde(default, rename = "valor_multa", deserialize_with = "lenient_text")]
    pub fine_amount: Option<String>,

    /// Must be a JSON array when present; entries are checked individually.
    #[serde(default, rename = "fotos_fatos")]
    pub photos: Option<Vec<Value>>,

    #[serde(default, rename = "url_recurso", deserialize_with = "lenient_text")]
    pub appeal_url: Option<String>,

    #[serde(default, rename = "prazo_recurso", deserialize_with = "lenient_days")]
    pub appeal_days: Option<u32>,

    #[serde(default, rename = "nome_assinatura", deserialize_with = "lenient_text")]
    pub signer_name: Option<String>,

    #[serde(default, rename = "cargo_assinatura", deserialize_with = "lenient_text")]
    pub signer_role: Option<String>,
}

/// `fatos` arrives either as a list of statements or as one block of text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FactsInput {
    /// Entries may be any JSON scalar; they are rendered as text.
    List(Vec<Value>),
    Text(String),
}

/// A notification with every default resolved, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub number: String,
    pub issue_date: Option<String>,
    pub block: String,
    pub unit: String,
    pub notification_type: String,
    pub subject: String,
    pub document_type: String,
    pub city: String,
    pub facts: Facts,
    pub legal_basis: Option<String>,
    pub description: Option<String>,
    pub penalty: Option<Penalty>,
    /// Base64 payloads in request order. Not yet decoded.
    pub photos: Vec<String>,
    pub appeal: AppealTerms,
    pub signature: Signature,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Facts {
    Numbered(Vec<String>),
    Text(String),
}

impl Facts {
    pub fn is_empty(&self) -> bool {
        match self {
            Facts::Numbered(items) => items.is_empty(),
            Facts::Text(text) => text.trim().is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Penalty {
    pub kind: String,
    pub fine_amount: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppealTerms {
    pub url: String,
    pub days: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Signature {
    pub name: String,
    pub role: String,
}

impl Notification {
    /// Parse and resolve a request body that has already been decoded as JSON.
    pub fn from_json(value: Value) -> Result<Self, CoreError> {
        if !value.is_object() {
            return Err(CoreError::NotAnObject(json_kind(&value)));
        }
        let request: NotificationRequest = serde_json::from_value(value)?;
        Ok(request.resolve())
    }

    /// Unit identifier shown in the metadata table: block followed by unit.
    pub fn unit_label(&self) -> String {
        format!("{}{}", self.block, self.unit)
    }

    /// Attachment name for the rendered PDF.
    pub fn file_name(&self) -> String {
        let number = self.number.trim();
        if number.is_empty() {
            return "notificacao_doc.pdf".to_string();
        }
        format!("notificacao_{}.pdf", number.replace('/', "-"))
    }
}

impl NotificationRequest {
    pub fn resolve(self) -> Notification {
        let facts = match self.facts {
            Some(FactsInput::List(items)) => {
                Facts::Numbered(items.into_iter().filter_map(fact_text).collect())
            }
            Some(FactsInput::Text(text)) => Facts::Text(text),
            None => Facts::Numbered(Vec::new()),
        };

        let photos = self
            .photos
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match entry {
                Value::String(encoded) => Some(encoded),
                other => {
                    tracing::warn!(
                        index,
                        kind = json_kind(&other),
                        "skipping photo entry that is not a base64 string"
                    );
                    None
                }
            })
            .collect();

        let penalty = non_blank(self.penalty_type).map(|kind| Penalty {
            kind,
            fine_amount: non_blank(self.fine_amount),
        });

        Notification {
            number: self.number.unwrap_or_default(),
            issue_date: non_blank(self.issue_date),
            block: self.block.unwrap_or_default(),
            unit: self.unit.unwrap_or_default(),
            notification_type: non_blank(self.notification_type)
                .unwrap_or_else(|| DEFAULT_NOTIFICATION_TYPE.to_string()),
            subject: self.subject.unwrap_or_default(),
            document_type: non_blank(self.document_type)
                .unwrap_or_else(|| DEFAULT_DOCUMENT_TYPE.to_string()),
            city: non_blank(self.city).unwrap_or_else(|| DEFAULT_CITY.to_string()),
            facts,
            legal_basis: non_blank(self.legal_basis),
            description: non_blank(self.description),
            penalty,
            photos,
            appeal: AppealTerms {
                url: non_blank(self.appeal_url).unwrap_or_else(|| DEFAULT_APPEAL_URL.to_string()),
                days: self.appeal_days.unwrap_or(DEFAULT_APPEAL_DAYS),
            },
            signature: Signature {
                name: non_blank(self.signer_name)
                    .unwrap_or_else(|| DEFAULT_SIGNER_NAME.to_string()),
                role: non_blank(self.signer_role)
                    .unwrap_or_else(|| DEFAULT_SIGNER_ROLE.to_string()),
            },
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// A single `fatos` entry as text. `null` entries are dropped; strings are
/// kept verbatim and any other value is written as its JSON text.
fn fact_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "expected a string or number, found {}",
            json_kind(&other)
        ))),
    }
}

fn lenient_days<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_u64()
            .and_then(|days| u32::try_from(days).ok())
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid appeal period: {n}"))),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => s
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("invalid appeal period: {s}"))),
        Some(other) => Err(de::Error::custom(format!(
            "expected a number of days, found {}",
            json_kind(&other)
        ))),
    }
}
