use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use padron_app::config::StoreConfig;
use padron_app::controller::{Controller, SubmitOutcome};
use padron_app::session::{Mode, Session};
use padron_store::{RestStore, UserStore};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "padron=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = StoreConfig::from_env();
    tracing::info!(url = %config.url, collection = %config.collection, "Loaded store configuration");

    let store = RestStore::new(config.url, config.collection, config.token);
    let mut controller = Controller::new(store);

    // Initial mount: one full fetch. Afterwards the snapshot is only
    // reconciled locally; a failed load keeps the (empty) prior list.
    controller.load().await;

    run(&mut controller).await;
}

/// The terminal stand-in for the form page: a header per mode, the
/// inline error when set, and the registered-user list.
fn render(session: &Session) {
    match &session.mode {
        Mode::Create => println!("\n== Registrar Usuario =="),
        Mode::Editing { id } => println!("\n== Editar Usuario ({id}) =="),
    }
    if let Some(error) = &session.error {
        println!("error: {error}");
    }
    println!("-- Usuarios Registrados --");
    if session.list.is_empty() {
        println!("(ninguno)");
    }
    for record in &session.list {
        println!("{}  {} {}", record.id, record.nombre, record.apellido);
    }
}

fn print_help() {
    println!("commands: list | save | edit <id> | delete <id> | quit");
}

/// Prompt for one field. An empty line keeps the current draft value,
/// mirroring a pre-filled form input.
async fn prompt_field(
    lines: &mut Lines<BufReader<Stdin>>,
    label: &str,
    current: &str,
) -> Option<String> {
    print!("{label} [{current}]: ");
    std::io::stdout().flush().ok();
    let line = lines.next_line().await.ok().flatten()?;
    if line.is_empty() {
        Some(current.to_string())
    } else {
        Some(line)
    }
}

async fn run<S: UserStore>(controller: &mut Controller<S>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    render(&controller.session);
    print_help();

    loop {
        print!("> ");
        std::io::stdout().flush().ok();

        let Ok(Some(line)) = lines.next_line().await else {
            break;
        };
        let mut parts = line.split_whitespace();

        match (parts.next(), parts.next()) {
            (Some("list"), _) => {}

            (Some("save"), _) => {
                let draft = controller.session.draft.clone();
                let Some(nombre) = prompt_field(&mut lines, "Nombre", &draft.nombre).await
                else {
                    break;
                };
                let Some(apellido) =
                    prompt_field(&mut lines, "Apellido", &draft.apellido).await
                else {
                    break;
                };
                controller.session.draft.nombre = nombre;
                controller.session.draft.apellido = apellido;

                match controller.submit().await {
                    SubmitOutcome::Saved => {}
                    // The blocking-alert analog: the rejection message,
                    // shown before anything else happens.
                    SubmitOutcome::Rejected(err) => println!("!! {err}"),
                    // Already logged or set inline per the policy table.
                    SubmitOutcome::Failed => {}
                }
            }

            (Some("edit"), Some(id)) => {
                if !controller.edit(id) {
                    println!("no user with id {id}");
                }
            }

            (Some("delete"), Some(id)) => {
                controller.delete(id).await;
            }

            (Some("quit" | "exit"), _) => break,

            (None, _) => continue,

            _ => {
                print_help();
                continue;
            }
        }

        render(&controller.session);
    }
}
