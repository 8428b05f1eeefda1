//! Client library for a Pessoa registration backend.
//!
//! Wraps the backend's remote operations in a [`PessoaClient`] and the
//! three screens of the registration app (listing, creation, edit) in
//! routed view controllers driven by a [`Router`].

pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod notify;
pub mod router;
pub mod views;

use std::sync::Arc;

use reqwest::Client;

use crate::client::PessoaClient;
use crate::config::ClientOptions;
use crate::error::Result;
use crate::notify::{ConsoleNotifier, Notifier};
use crate::router::{PESSOA_CADASTRAR, PESSOA_EDITAR, PESSOA_LISTAR, Router};
use crate::views::{PessoaCadastrarView, PessoaEditarView, PessoaListarView, PessoaView};

/// The main entry point: holds the shared HTTP client, the options and
/// the notifier, and builds the resource client and the routed views.
pub struct Cadastro {
    options: ClientOptions,
    http_client: Client,
    notifier: Arc<dyn Notifier>,
}

impl Cadastro {
    /// Creates a client for the backend at `base_url`.
    ///
    /// # Example
    ///
    /// ```
    /// use cadastro_pessoa::Cadastro;
    ///
    /// let cadastro = Cadastro::new("http://localhost:8080").unwrap();
    /// ```
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self::new_with_options(ClientOptions::new(base_url)?))
    }

    /// Creates a client with custom options.
    ///
    /// # Example
    ///
    /// ```
    /// use cadastro_pessoa::{config::ClientOptions, Cadastro};
    ///
    /// let options = ClientOptions::default().with_resource_path("/cadastro/pessoa");
    /// let cadastro = Cadastro::new_with_options(options);
    /// ```
    pub fn new_with_options(options: ClientOptions) -> Self {
        Self {
            options,
            http_client: Client::new(),
            notifier: Arc::new(ConsoleNotifier::new()),
        }
    }

    /// Replaces the notifier the views report through. The default is the
    /// console notifier.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// The resource client for the remote pessoa operations.
    pub fn pessoas(&self) -> PessoaClient {
        PessoaClient::from_options(&self.options, self.http_client.clone())
    }

    /// A router with the three application routes registered. Each route's
    /// factory captures its own clones of the client, the notifier and the
    /// router's navigator, so a view can only reach what its route needs.
    pub fn router(&self) -> Router<PessoaView> {
        let mut router = Router::new();
        let navigator = router.navigator();

        let client = self.pessoas();
        let notifier = self.notifier.clone();
        router.register(PESSOA_LISTAR, move || {
            PessoaView::Listar(PessoaListarView::new(client.clone(), notifier.clone()))
        });

        let client = self.pessoas();
        let notifier = self.notifier.clone();
        let nav = navigator.clone();
        router.register(PESSOA_CADASTRAR, move || {
            PessoaView::Cadastrar(PessoaCadastrarView::new(
                client.clone(),
                notifier.clone(),
                nav.clone(),
            ))
        });

        let client = self.pessoas();
        let notifier = self.notifier.clone();
        router.register(PESSOA_EDITAR, move || {
            PessoaView::Editar(PessoaEditarView::new(
                client.clone(),
                notifier.clone(),
                navigator.clone(),
            ))
        });

        router
    }
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::client::PessoaClient;
    pub use crate::config::ClientOptions;
    pub use crate::error::{Error, Result};
    pub use crate::model::Pessoa;
    pub use crate::Cadastro;
}
