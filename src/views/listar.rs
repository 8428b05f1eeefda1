//! The listing view: loads the collection and owns the delete flow.

use std::sync::Arc;

use async_trait::async_trait;

use crate::client::PessoaClient;
use crate::error::Result;
use crate::model::Pessoa;
use crate::notify::Notifier;
use crate::router::RouteParams;

use super::View;

/// Question asked before deleting a record.
pub const DELETE_CONFIRMATION: &str = "Deseja realmente deletar esta pessoa?";

/// Controller for `/pessoa/listar`.
pub struct PessoaListarView {
    client: PessoaClient,
    notifier: Arc<dyn Notifier>,
    pessoas: Vec<Pessoa>,
}

impl PessoaListarView {
    pub fn new(client: PessoaClient, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client,
            notifier,
            pessoas: Vec::new(),
        }
    }

    /// The rows to render, in backend order.
    pub fn pessoas(&self) -> &[Pessoa] {
        &self.pessoas
    }

    /// Replaces the collection with a fresh fetch. On failure the user is
    /// alerted and the collection is cleared: an errored listing renders
    /// nothing, not stale rows.
    pub async fn refresh(&mut self) -> Result<()> {
        match self.client.list().await {
            Ok(pessoas) => {
                self.pessoas = pessoas;
                Ok(())
            }
            Err(err) => {
                self.notifier.alert(&err.display_message());
                self.pessoas.clear();
                Err(err)
            }
        }
    }

    /// Asks for confirmation, then deletes and refreshes. Declining makes
    /// no backend call and leaves the collection untouched; a failed
    /// delete is alerted without refreshing.
    pub async fn delete(&mut self, id: i64) -> Result<()> {
        if !self.notifier.confirm(DELETE_CONFIRMATION) {
            return Ok(());
        }
        match self.client.delete_by_id(id).await {
            Ok(()) => self.refresh().await,
            Err(err) => {
                self.notifier.alert(&err.display_message());
                Err(err)
            }
        }
    }
}

#[async_trait]
impl View for PessoaListarView {
    async fn activate(&mut self, _params: &RouteParams) -> Result<()> {
        self.refresh().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::RecordingNotifier;

    #[tokio::test]
    async fn declined_confirmation_makes_no_backend_call() {
        // An unroutable address: any issued request would fail and alert.
        let client = PessoaClient::new("http://127.0.0.1:1", reqwest::Client::new());
        let notifier = Arc::new(RecordingNotifier::answering(false));
        let mut view = PessoaListarView::new(client, notifier.clone());

        view.delete(7).await.unwrap();

        assert_eq!(notifier.confirmations(), vec![DELETE_CONFIRMATION]);
        assert!(notifier.alerts().is_empty());
    }
}
