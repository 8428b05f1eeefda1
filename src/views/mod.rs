//! View controllers for the three routes.
//!
//! Each controller owns a [`PessoaClient`](crate::client::PessoaClient)
//! and an `Arc<dyn Notifier>` for blocking user notifications; the create
//! and edit controllers also hold a [`Navigator`](crate::router::Navigator)
//! handle for their post-save redirect. All failure handling ends in the
//! controller: a normalized message is alerted at the point of failure
//! and the flow stops.

mod cadastrar;
mod editar;
mod listar;

pub use cadastrar::PessoaCadastrarView;
pub use editar::PessoaEditarView;
pub use listar::{DELETE_CONFIRMATION, PessoaListarView};

use async_trait::async_trait;

use crate::error::Result;
use crate::router::RouteParams;

/// A routed controller. The router calls `activate` with the parameters
/// captured from the path right after constructing the view.
#[async_trait]
pub trait View: Send {
    async fn activate(&mut self, params: &RouteParams) -> Result<()>;
}

/// The application's views, one variant per registered route.
pub enum PessoaView {
    Listar(PessoaListarView),
    Cadastrar(PessoaCadastrarView),
    Editar(PessoaEditarView),
}

#[async_trait]
impl View for PessoaView {
    async fn activate(&mut self, params: &RouteParams) -> Result<()> {
        match self {
            PessoaView::Listar(view) => view.activate(params).await,
            PessoaView::Cadastrar(view) => view.activate(params).await,
            PessoaView::Editar(view) => view.activate(params).await,
        }
    }
}

/// Character-position slice with clamped bounds: positions past the end
/// shorten the result instead of panicking, so the phone masks degrade
/// on short input rather than abort.
pub(crate) fn substring(value: &str, start: usize, end: usize) -> String {
    value
        .chars()
        .skip(start)
        .take(end.saturating_sub(start))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_slices_by_position() {
        assert_eq!(substring("1234567890", 0, 2), "12");
        assert_eq!(substring("1234567890", 2, 6), "3456");
        assert_eq!(substring("1234567890", 6, 10), "7890");
    }

    #[test]
    fn substring_clamps_out_of_range_bounds() {
        assert_eq!(substring("123", 0, 2), "12");
        assert_eq!(substring("123", 2, 7), "3");
        assert_eq!(substring("123", 5, 9), "");
        assert_eq!(substring("", 0, 2), "");
    }
}
