//! The creation view: an empty form, a phone mask and the submit flow.

use std::mem;
use std::sync::Arc;

use async_trait::async_trait;

use crate::client::PessoaClient;
use crate::error::Result;
use crate::form::PessoaForm;
use crate::notify::Notifier;
use crate::router::{Navigator, PESSOA_LISTAR, RouteParams};

use super::{substring, View};

/// Controller for `/pessoa/cadastrar`.
pub struct PessoaCadastrarView {
    client: PessoaClient,
    notifier: Arc<dyn Notifier>,
    navigator: Navigator,
    form: PessoaForm,
}

impl PessoaCadastrarView {
    pub fn new(client: PessoaClient, notifier: Arc<dyn Notifier>, navigator: Navigator) -> Self {
        Self {
            client,
            notifier,
            navigator,
            form: PessoaForm::default(),
        }
    }

    /// The current form value.
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

    /// Masks the phone, writes it back into the form and submits.
    ///
    /// Success resets the form to the empty shape and queues a navigation
    /// to the listing; failure alerts the normalized message and keeps the
    /// submitted values in the form for correction.
    pub async fn save(&mut self) -> Result<()> {
        let formatted = formatar_telefone(&self.form.contato.telefone);
        self.form = mem::take(&mut self.form).with_telefone(formatted);
        match self.client.create(&self.form.to_pessoa()).await {
            Ok(_) => {
                self.form = PessoaForm::default();
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
impl View for PessoaCadastrarView {
    /// The creation screen starts empty; activation loads nothing.
    async fn activate(&mut self, _params: &RouteParams) -> Result<()> {
        Ok(())
    }
}

/// Masks a raw phone as `(DD) NNNN-NNNN` for ten digits and as
/// `(DD) NNNNN-NNNN` otherwise. There is no pass-through arm: any other
/// length is still forced through the mobile-length slicing and comes
/// out malformed rather than unmasked.
fn formatar_telefone(value: &str) -> String {
    if value.chars().count() == 10 {
        format!(
            "({}) {}-{}",
            substring(value, 0, 2),
            substring(value, 2, 6),
            substring(value, 6, 10)
        )
    } else {
        format!(
            "({}) {}-{}",
            substring(value, 0, 2),
            substring(value, 2, 7),
            substring(value, 7, 11)
        )
    }
}
