use clap::{Parser, Subcommand};

use cadastro_pessoa::config::ClientOptions;
use cadastro_pessoa::error::{Error, Result};
use cadastro_pessoa::model::Pessoa;
use cadastro_pessoa::router::{editar_path, PESSOA_CADASTRAR, PESSOA_LISTAR};
use cadastro_pessoa::views::PessoaView;
use cadastro_pessoa::Cadastro;

#[derive(Parser, Debug)]
#[clap(name = "cadastro", version)]
#[clap(about = "Terminal client for the pessoa registration backend", long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,

    /// Backend base URL. Falls back to CADASTRO_BASE_URL, then the default.
    #[clap(long)]
    base_url: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List all registered pessoas
    Listar,
    /// Register a new pessoa
    Cadastrar {
        #[clap(long)]
        nome: String,
        /// Raw phone digits, masked on save
        #[clap(long)]
        telefone: String,
        #[clap(long)]
        bairro: String,
    },
    /// Load a pessoa into the edit form, apply changes and save
    Editar {
        /// Id of the record to edit
        id: i64,
        #[clap(long)]
        nome: Option<String>,
        #[clap(long)]
        telefone: Option<String>,
        #[clap(long)]
        bairro: Option<String>,
    },
    /// Delete a pessoa after confirmation
    Deletar {
        /// Id of the record to delete
        id: i64,
    },
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let options = match cli.base_url {
        Some(base_url) => ClientOptions::new(&base_url)?,
        None => ClientOptions::from_env()?,
    };
    let cadastro = Cadastro::new_with_options(options);
    let mut router = cadastro.router();

    match cli.command {
        Commands::Listar => {
            router.navigate(PESSOA_LISTAR).await?;
        }
        Commands::Cadastrar {
            nome,
            telefone,
            bairro,
        } => {
            router.navigate(PESSOA_CADASTRAR).await?;
            let view = match router.outlet_mut() {
                Some(PessoaView::Cadastrar(view)) => view,
                _ => return Err(Error::general("creation route not installed")),
            };
            view.set_nome(nome);
            view.set_telefone(telefone);
            view.set_bairro(bairro);
            view.save().await?;
            router.process_pending().await?;
        }
        Commands::Editar {
            id,
            nome,
            telefone,
            bairro,
        } => {
            router.navigate(&editar_path(id)).await?;
            let view = match router.outlet_mut() {
                Some(PessoaView::Editar(view)) => view,
                _ => return Err(Error::general("edit route not installed")),
            };
            if let Some(nome) = nome {
                view.set_nome(nome);
            }
            if let Some(telefone) = telefone {
                view.set_telefone(telefone);
            }
            if let Some(bairro) = bairro {
                view.set_bairro(bairro);
            }
            view.save().await?;
            router.process_pending().await?;
        }
        Commands::Deletar { id } => {
            router.navigate(PESSOA_LISTAR).await?;
            let view = match router.outlet_mut() {
                Some(PessoaView::Listar(view)) => view,
                _ => return Err(Error::general("listing route not installed")),
            };
            view.delete(id).await?;
        }
    }

    if let Some(PessoaView::Listar(view)) = router.outlet() {
        print_pessoas(view.pessoas());
    }
    Ok(())
}

fn print_pessoas(pessoas: &[Pessoa]) {
    if pessoas.is_empty() {
        println!("Nenhuma pessoa cadastrada.");
        return;
    }
    println!("{:<6} {:<30} {:<18} {}", "id", "nome", "telefone", "bairro");
    for pessoa in pessoas {
        println!(
            "{:<6} {:<30} {:<18} {}",
            pessoa.id.map(|id| id.to_string()).unwrap_or_default(),
            pessoa.nome,
            pessoa.contato.telefone,
            pessoa.endereco.bairro
        );
    }
}

#[tokio::main]
async fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if let Err(err) = run().await {
        eprintln!("Error: {}", err.display_message());
        std::process::exit(1);
    }
}
