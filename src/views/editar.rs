//! The edit view: loads a record into the form and submits updates.

use std::mem;
use std::sync::Arc;

use async_trait::async_trait;

use crate::client::PessoaClient;
use crate::error::{Error, Result};
use crate::form::PessoaForm;
use crate::notify::Notifier;
use crate::router::{Navigator, PESSOA_LISTAR, RouteParams};

use super::{substring, View};

/// Controller for `/pessoa/editar/:id`.
pub struct PessoaEditarView {
    client: PessoaClient,
    notifier: Arc<dyn Notifier>,
    navigator: Navigator,
    form: PessoaForm,
}

impl PessoaEditarView {
    pub fn new(client: PessoaClient, notifier: Arc<dyn Notifier>, navigator: Navigator) -> Self {
        Self {
            client,
            notifier,
            navigator,
            form: PessoaForm::default(),
        }
    }

    /// The current form value, including the ids loaded from the backend.
    pub fn form(&self) -> &PessoaForm {
        &self.form
    }

    pub fn set_nome(&mut self, nome: impl Into<String>) {
        self.form = mem::take(&mut self.form).with_nome(nome);
    }

    pub fn set_telefone(&mut self, telefone: impl Into<String>) {
        self.form = mem::take(&mut self.form).with_telefone(telefone);
    }

    pub fn set_bairro(&mut self, bairro: impl Into<String>) {
        self.form = mem::take(&mut self.form).with_bairro(bairro);
    }

    /// Masks the phone, writes it back and submits the update.
    ///
    /// A form that never loaded a record has no id and is rejected before
    /// any request. Success queues a navigation to the listing and leaves
    /// the form as submitted; failure alerts the normalized message.
    pub async fn save(&mut self) -> Result<()> {
        let formatted = formatar_telefone(&self.form.contato.telefone);
        self.form = mem::take(&mut self.form).with_telefone(formatted);
        let id = match self.form.id {
            Some(id) => id,
            None => {
                let err = Error::invalid_input("cannot update a pessoa without an id");
                self.notifier.alert(&err.display_message());
                return Err(err);
            }
        };
        match self.client.update(id, &self.form.to_pessoa()).await {
            Ok(_) => {
                self.navigator.go(PESSOA_LISTAR);
                Ok(())
            }
            Err(err) => {
                self.notifier.alert(&err.display_message());
                Err(err)
            }
        }
    }
}

#[async_trait]
impl View for PessoaEditarView {
    /// Loads the record named by the `:id` segment into the form. Without
    /// a usable id nothing is loaded and the form stays empty; a failed
    /// load is alerted and the form stays empty as well.
    async fn activate(&mut self, params: &RouteParams) -> Result<()> {
        let id = match params.get("id").and_then(|raw| raw.parse::<i64>().ok()) {
            Some(id) => id,
            None => {
                log::warn!("edit route without a usable id, nothing to load");
                return Ok(());
            }
        };
        match self.client.get_by_id(id).await {
            Ok(pessoa) => {
                self.form = mem::take(&mut self.form).patch(&pessoa);
                Ok(())
            }
            Err(err) => {
                self.notifier.alert(&err.display_message());
                Err(err)
            }
        }
    }
}

/// Masks a raw phone by length: ten digits as `(DD) NNNN-NNNN`, eleven as
/// `(DD) NNNNN-NNNN`, anything else unchanged. The pass-through arm keeps
/// an already masked value intact when a loaded record is re-saved.
fn formatar_telefone(value: &str) -> String {
    match value.chars().count() {
        10 => format!(
            "({}) {}-{}",
            substring(value, 0, 2),
            substring(value, 2, 6),
            substring(value, 6, 10)
        ),
        11 => format!(
            "({}) {}-{}",
            substring(value, 0, 2),
            substring(value, 2, 7),
            substring(value, 7, 11)
        ),
        _ => value.to_string(),
    }
}
