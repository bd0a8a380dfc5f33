use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use thriftstore_cli::create_admin;
use thriftstore_config::{StoreBackend, StoreConfig};
use thriftstore_db::DocumentStore;

#[derive(Parser)]
#[command(name = "thriftstore-cli")]
#[command(about = "Thrift Store CLI - Administrative tools for the Thrift Store API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grant the admin role to an account, creating it if needed
    CreateAdmin {
        /// Email address of the account
        #[arg(short = 'e', long)]
        email: String,

        /// Display name stored on the account
        #[arg(short = 'n', long)]
        name: Option<String>,
    },
    /// Apply pending database migrations
    Migrate,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    let store = match connect().await {
        Ok(store) => store,
        Err(message) => {
            eprintln!("❌ {}", message);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::CreateAdmin { email, name } => {
            handle_create_admin(&store, &email, name.as_deref()).await
        }
        // Migrations run as part of connecting.
        Commands::Migrate => println!("✅ Migrations applied"),
    }
}

async fn connect() -> Result<DocumentStore, String> {
    let config = StoreConfig::from_env().map_err(|e| e.to_string())?;

    let StoreBackend::Postgres = config.backend else {
        return Err("The CLI needs STORE_BACKEND=postgres".to_string());
    };
    let Some(database_url) = config.database_url.as_deref() else {
        return Err("DATABASE_URL must be set".to_string());
    };

    DocumentStore::connect(database_url, config.max_connections)
        .await
        .map_err(|e| format!("Failed to connect to database: {}", e))
}

async fn handle_create_admin(store: &DocumentStore, email: &str, name: Option<&str>) {
    match create_admin(store, email, name).await {
        Ok(outcome) => {
            if outcome.upserted_id.is_some() {
                println!("\n✅ Admin account created!");
            } else {
                println!("\n✅ Account promoted to admin!");
            }
            println!("   Email: {}", email);
        }
        Err(e) => {
            eprintln!("\n❌ Error creating admin: {}", e);
            std::process::exit(1);
        }
    }
}
