//! Immutable form values for the create and edit screens.
//!
//! Each edit produces a new value through a pure update; nothing holds
//! shared mutable form state. The empty shape (`Default`) always carries
//! the nested contact and address groups, mirroring the fixed nested
//! groups the screens are built from.

use crate::model::{Contato, Endereco, Pessoa};

/// Nested contact group of the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContatoForm {
    pub id: Option<i64>,
    pub telefone: String,
}

/// Nested address group of the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnderecoForm {
    pub id: Option<i64>,
    pub bairro: String,
}

/// The full form value. The create screen leaves every id absent; the
/// edit screen carries the ids loaded from the backend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PessoaForm {
    pub id: Option<i64>,
    pub nome: String,
    pub contato: ContatoForm,
    pub endereco: EnderecoForm,
}

impl PessoaForm {
    /// Returns a new value with `nome` replaced.
    pub fn with_nome(mut self, nome: impl Into<String>) -> Self {
        self.nome = nome.into();
        self
    }

    /// Returns a new value with `contato.telefone` replaced.
    pub fn with_telefone(mut self, telefone: impl Into<String>) -> Self {
        self.contato.telefone = telefone.into();
        self
    }

    /// Returns a new value with `endereco.bairro` replaced.
    pub fn with_bairro(mut self, bairro: impl Into<String>) -> Self {
        self.endereco.bairro = bairro.into();
        self
    }

    /// Populates the form from a backend record.
    ///
    /// Top-level id, `nome`, `telefone` and `bairro` come from the record;
    /// nested ids are taken only when the record carries them, leaving
    /// prior values in place otherwise (partial patch).
    pub fn patch(mut self, pessoa: &Pessoa) -> Self {
        self.id = pessoa.id;
        self.nome = pessoa.nome.clone();
        if pessoa.contato.id.is_some() {
            self.contato.id = pessoa.contato.id;
        }
        self.contato.telefone = pessoa.contato.telefone.clone();
        if pessoa.endereco.id.is_some() {
            self.endereco.id = pessoa.endereco.id;
        }
        self.endereco.bairro = pessoa.endereco.bairro.clone();
        self
    }

    /// The submission record for this form value. Absent ids stay off the
    /// wire, so a create submission carries no id keys.
    pub fn to_pessoa(&self) -> Pessoa {
        Pessoa {
            id: self.id,
            nome: self.nome.clone(),
            contato: Contato {
                id: self.contato.id,
                telefone: self.contato.telefone.clone(),
            },
            endereco: Endereco {
                id: self.endereco.id,
                bairro: self.endereco.bairro.clone(),
            },
        }
    }
}
