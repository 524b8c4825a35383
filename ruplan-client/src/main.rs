use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use ruplan_client::{
    ApiClient, ClientError, Credentials, FileStore, Mode, SessionFlow, SessionState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Configurazione da env con default, come il server
    let base =
        std::env::var("RUPLAN_API_BASE").unwrap_or_else(|_| "http://127.0.0.1:3000".to_string());
    let data_dir = std::env::var("RUPLAN_DATA_DIR").unwrap_or_else(|_| ".ruplan".to_string());

    let mut flow = SessionFlow::new(FileStore::new(PathBuf::from(data_dir)), ApiClient::new(base));

    // all'avvio prova a ripristinare la sessione salvata
    if flow.restore().await {
        if let SessionState::Authenticated(user) = flow.state() {
            println!("Bentornato, {}!", user.name);
        }
        print_projects(&flow);
    }
    print_help();

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let trimmed = line.trim();
        let (cmd, rest) = match trimmed.split_once(' ') {
            Some((c, r)) => (c, r.trim()),
            None => (trimmed, ""),
        };
        match cmd {
            "" => {}
            "signup" => {
                // signup <nome...> <email> <password>
                let mut toks = rest.rsplitn(3, ' ');
                let password = toks.next().unwrap_or("").to_string();
                let email = toks.next().unwrap_or("").to_string();
                let name = toks.next().unwrap_or("").trim().to_string();
                flow.set_mode(Mode::Signup);
                match flow.submit(&Credentials { name, email, password }).await {
                    Ok(_) => println!("Registration Successful! Redirecting to Login..."),
                    Err(e) => alert(&e),
                }
            }
            "login" => {
                // login <email> <password>
                let (email, password) = match rest.split_once(' ') {
                    Some((e, p)) => (e.to_string(), p.trim().to_string()),
                    None => (rest.to_string(), String::new()),
                };
                flow.set_mode(Mode::Login);
                match flow
                    .submit(&Credentials { name: String::new(), email, password })
                    .await
                {
                    Ok(_) => {
                        if let SessionState::Authenticated(user) = flow.state() {
                            println!("Benvenuto, {}!", user.name);
                        }
                        print_projects(&flow);
                    }
                    Err(e) => alert(&e),
                }
            }
            "add" => {
                // add <titolo> [descrizione...]
                let (title, description) = match rest.split_once(' ') {
                    Some((t, d)) => (t, d.trim()),
                    None => (rest, ""),
                };
                match flow.add_project(title, description).await {
                    Ok(p) => println!("Aggiunto {} ({})", p.title, p.project_id),
                    Err(e) => alert(&e),
                }
            }
            "list" => print_projects(&flow),
            "del" => match flow.delete_project(rest).await {
                Ok(()) => print_projects(&flow),
                Err(e) => alert(&e),
            },
            "logout" => {
                flow.logout();
                println!("Sessione chiusa.");
            }
            "help" => print_help(),
            "quit" | "exit" => break,
            other => println!("Comando sconosciuto: {other} (prova 'help')"),
        }
    }

    Ok(())
}

/// L'equivalente dell'alert del browser: un messaggio, nessun retry.
fn alert(err: &ClientError) {
    println!("[!] {err}");
}

fn print_projects(flow: &SessionFlow<FileStore, ApiClient>) {
    if flow.current_user().is_none() {
        return;
    }
    if flow.projects().is_empty() {
        println!("Nessun progetto.");
        return;
    }
    println!("I MIEI PROGETTI:");
    for p in flow.projects() {
        match &p.description {
            Some(d) => println!("  {}  {} - {}", p.project_id, p.title, d),
            None => println!("  {}  {}", p.project_id, p.title),
        }
    }
}

fn print_help() {
    println!("Comandi:");
    println!("  signup <nome> <email> <password>");
    println!("  login <email> <password>");
    println!("  add <titolo> [descrizione]");
    println!("  list | del <id> | logout | quit");
}
