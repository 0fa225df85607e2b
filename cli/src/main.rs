//! `vocab` entry point: mount the word list, apply one action, print it.

mod cli;

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vocab_core::{ComponentError, ConfigError, Transport, UreqTransport, WordEntry, WordListComponent};

use cli::{Args, Command};

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Component(#[from] ComponentError),
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vocab_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    match run(&args, UreqTransport::new()) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    }
}

/// Run one command and return the rendered list.
fn run<T: Transport>(args: &Args, transport: T) -> Result<String, CliError> {
    let config = args.client_config()?;
    let mut component = WordListComponent::new(&config, transport);

    match &args.command {
        Command::List => component.mount()?,
        Command::More { pages } => {
            for _ in 0..*pages {
                if component.load_more()? == 0 {
                    break;
                }
            }
        }
        Command::Add {
            word,
            translation,
            description,
        } => {
            component.mount()?;
            component.set_new_word(WordEntry::draft(word.as_str(), translation.as_str(), description.as_str()));
            component.submit()?;
        }
        Command::Remove { id } => {
            component.mount()?;
            component.remove(*id)?;
        }
    }

    Ok(component.render().to_string())
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use super::*;

    fn start_server() -> SocketAddr {
        let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = std_listener.local_addr().unwrap();
        std_listener.set_nonblocking(true).unwrap();

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            rt.block_on(async {
                let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
                mock_server::run(listener).await
            })
            .unwrap();
        });

        addr
    }

    fn args(addr: SocketAddr, rest: &[&str]) -> Args {
        let base_url = format!("http://{addr}");
        let mut argv = vec!["vocab", "--base-url", base_url.as_str()];
        argv.extend_from_slice(rest);
        Args::parse_from(argv)
    }

    #[test]
    fn add_list_remove() {
        let addr = start_server();

        let out = run(&args(addr, &["add", "strom", "-t", "tree"]), UreqTransport::new()).unwrap();
        assert_eq!(out, "[x]     1  strom = tree\n");

        let out = run(&args(addr, &["list"]), UreqTransport::new()).unwrap();
        assert_eq!(out, "[x]     1  strom = tree\n");

        let out = run(&args(addr, &["remove", "1"]), UreqTransport::new()).unwrap();
        assert_eq!(out, "(no words)\n");
    }

    #[test]
    fn more_stops_at_empty_page() {
        let addr = start_server();
        for word in ["a", "b", "c"] {
            run(&args(addr, &["add", word]), UreqTransport::new()).unwrap();
        }

        let out = run(
            &args(addr, &["more", "--pages", "5", "--page-size", "2"]),
            UreqTransport::new(),
        )
        .unwrap();
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn empty_word_fails() {
        let addr = start_server();
        let err = run(&args(addr, &["add", " "]), UreqTransport::new()).unwrap_err();
        assert!(matches!(err, CliError::Component(ComponentError::Validation(_))));
    }

    #[test]
    fn bad_url_fails_before_any_request() {
        let args = Args::parse_from(["vocab", "--base-url", "ftp://nowhere", "list"]);
        let err = run(&args, UreqTransport::new()).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }
}
