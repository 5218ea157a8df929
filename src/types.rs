//! Common datatypes for source articles and the flattened seed records

use std::fmt::Display;

use log::debug;
use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Unique identifier for an account, as found in `Compte.Oid`.
///
/// Wide enough to hold any JSON integer, signed or unsigned.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct AccountId(i128);

impl From<i64> for AccountId {
    fn from(account_id: i64) -> Self {
        Self(account_id.into())
    }
}

impl Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "id[{}]", self.0)
    }
}

/// The two families of accounting articles that feed the seed file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleKind {
    /// Expense articles, loaded from `article_depense.json`
    Depense,
    /// Revenue articles, loaded from `article_recette.json`
    Recette,
}

impl ArticleKind {
    /// Every kind, in the order their files are loaded
    pub const ALL: [ArticleKind; 2] = [ArticleKind::Depense, ArticleKind::Recette];

    /// Name of the file holding this kind of article, relative to the data directory
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            ArticleKind::Depense => "article_depense.json",
            ArticleKind::Recette => "article_recette.json",
        }
    }
}

impl Display for ArticleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArticleKind::Depense => f.write_str("expense"),
            ArticleKind::Recette => f.write_str("revenue"),
        }
    }
}

/// A whole input document: `{"datas": [...]}`.
///
/// A document without `datas` is treated as having no entries.
#[derive(Debug, Default, Deserialize)]
pub struct ArticleDocument {
    /// The entries of the document, in file order
    #[serde(default)]
    pub(crate) datas: Vec<SourceEntry>,
}

impl ArticleDocument {
    /// Returns the entries of this document, in file order
    #[must_use]
    #[inline]
    pub fn entries(&self) -> &[SourceEntry] {
        &self.datas
    }
}

/// One element of a `datas` array.
///
/// Missing or mistyped fields are replaced by their defaults while deserializing,
/// so every field is always populated once parsing succeeds.
///
/// A key repeated within the entry keeps its last value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    /// Short mnemonic label of the article
    pub(crate) mnem: String,
    /// The account this article refers to
    pub(crate) compte: Compte,
}

impl<'de> Deserialize<'de> for SourceEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut fields: Map<String, Value> = Map::deserialize(deserializer)?;
        let mnem = fields
            .remove("Mnem")
            .map(lenient_string)
            .unwrap_or_default();
        let compte = fields
            .remove("Compte")
            .map(lenient_compte)
            .transpose()
            .map_err(D::Error::custom)?
            .unwrap_or_default();
        Ok(Self { mnem, compte })
    }
}

impl SourceEntry {
    /// Returns the mnemonic label, empty when the source had none
    #[must_use]
    #[inline]
    pub fn mnem(&self) -> &str {
        &self.mnem
    }

    /// Returns the referenced account
    #[must_use]
    #[inline]
    pub fn compte(&self) -> &Compte {
        &self.compte
    }
}

/// Account reference nested in a [`SourceEntry`]
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct Compte {
    /// Account identifier, `0` when absent
    #[serde(rename = "Oid", default, deserialize_with = "deserialize_lenient_account_id")]
    pub(crate) oid: AccountId,
    /// Cerfa case code, empty when absent or falsy
    #[serde(rename = "Case", default, deserialize_with = "deserialize_case_code")]
    pub(crate) case: String,
}

impl Compte {
    /// Returns the account identifier
    #[must_use]
    #[inline]
    pub fn oid(&self) -> AccountId {
        self.oid
    }

    /// Returns the Cerfa case code
    #[must_use]
    #[inline]
    pub fn case(&self) -> &str {
        &self.case
    }
}

/// One element of the output seed file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedRecord {
    /// Identifier of the account
    #[serde(rename = "compteid")]
    pub(crate) account_id: AccountId,
    /// Mnemonic label of the article
    pub(crate) mnem: String,
    /// Cerfa case code of the account
    #[serde(rename = "caseCerfa")]
    pub(crate) case_cerfa: String,
}

impl SeedRecord {
    /// Returns the account identifier
    #[must_use]
    #[inline]
    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    /// Returns the mnemonic label
    #[must_use]
    #[inline]
    pub fn mnem(&self) -> &str {
        &self.mnem
    }

    /// Returns the Cerfa case code
    #[must_use]
    #[inline]
    pub fn case_cerfa(&self) -> &str {
        &self.case_cerfa
    }
}

/// Reduces a `Case` value to its code. Empty strings, `null`, `false`, zero and
/// containers all become the empty string.
fn normalize_case_code(value: Value) -> String {
    match value {
        Value::String(code) => code,
        Value::Number(number) if number.as_f64() == Some(0.0) => String::new(),
        Value::Number(number) => number.to_string(),
        Value::Bool(true) => "true".to_string(),
        Value::Bool(false) | Value::Null => String::new(),
        other => {
            debug!("Ignoring non-scalar case code {other}");
            String::new()
        }
    }
}

/// Helps [`serde`] read `Case` through [`normalize_case_code`]
fn deserialize_case_code<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(normalize_case_code)
}

/// Reads `Mnem`, falling back to an empty string for non-string values
fn lenient_string(value: Value) -> String {
    match value {
        Value::String(text) => text,
        other => {
            debug!("Replacing non-string label {other} with an empty string");
            String::new()
        }
    }
}

/// Helps [`serde`] read `Oid`. Integers and integral floats are kept, anything else is `0`.
fn deserialize_lenient_account_id<'de, D>(deserializer: D) -> Result<AccountId, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let account_id = match &value {
        Value::Number(number) => number
            .as_i64()
            .map(i128::from)
            .or_else(|| number.as_u64().map(i128::from))
            .or_else(|| {
                number
                    .as_f64()
                    .filter(|float| float.fract() == 0.0 && float.abs() < i64::MAX as f64)
                    .map(|float| float as i128)
            }),
        _ => None,
    };
    let account_id = account_id.map(AccountId).unwrap_or_else(|| {
        debug!("Replacing unusable account id {value} with 0");
        AccountId::default()
    });
    debug!("Read account {account_id}");
    Ok(account_id)
}

/// Reads `Compte`, falling back to an empty account for non-object values
fn lenient_compte(value: Value) -> Result<Compte, serde_json::Error> {
    match value {
        value @ Value::Object(_) => serde_json::from_value(value),
        other => {
            debug!("Replacing non-object account {other} with an empty account");
            Ok(Compte::default())
        }
    }
}
