//! Wire records for the pessoa registration resource.
//!
//! Field names follow the backend contract verbatim (`nome`, `telefone`,
//! `bairro`), so the structs serialize straight into the JSON bodies the
//! service expects.

use serde::{Deserialize, Serialize};

/// The person entity being managed: name plus nested contact and address.
///
/// `id` is assigned by the backend on creation and therefore absent from a
/// create submission; `skip_serializing_if` keeps it off the wire until the
/// backend has handed one out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pessoa {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub nome: String,
    /// Always present, even when empty: the forms are built with fixed
    /// nested groups, and responses that omit the object deserialize into
    /// the empty group rather than a missing one.
    #[serde(default)]
    pub contato: Contato,
    #[serde(default)]
    pub endereco: Endereco,
}

/// Nested contact record. Carries its own id once persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contato {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub telefone: String,
}

/// Nested address record. Carries its own id once persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Endereco {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub bairro: String,
}

impl Pessoa {
    /// Builds an unsaved record from the three user-entered fields.
    pub fn novo(
        nome: impl Into<String>,
        telefone: impl Into<String>,
        bairro: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            nome: nome.into(),
            contato: Contato {
                id: None,
                telefone: telefone.into(),
            },
            endereco: Endereco {
                id: None,
                bairro: bairro.into(),
            },
        }
    }
}
