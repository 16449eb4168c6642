use clap::{Parser, Subcommand};
use finapi::{
    db,
    repositories::SqliteUserRepository,
    services::user_service::{CreateUserRequest, UserService},
};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "finapi-cli")]
#[command(about = "CLI tool for managing finapi users", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// User management commands
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    /// Create a new user
    Create {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// List all users
    List {
        /// Maximum number of users to display
        #[arg(short, long, default_value_t = 100)]
        limit: i64,

        /// Offset for pagination
        #[arg(short = 'o', long, default_value_t = 0)]
        offset: i64,
    },
}

fn get_password(prompt: &str) -> anyhow::Result<String> {
    use std::io::{self, Write};
    print!("{}: ", prompt);
    io::stdout().flush()?;

    Ok(rpassword::read_password()?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Connect to database
    let pool = db::create_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let repository = Arc::new(SqliteUserRepository::new(pool));
    let service = UserService::new(repository);

    let cli = Cli::parse();

    match cli.command {
        Commands::User { command } => match command {
            UserCommands::Create {
                name,
                email,
                password,
            } => {
                let password = match password {
                    Some(p) => p,
                    None => get_password("Password")?,
                };

                let user = service
                    .create_user(CreateUserRequest {
                        name,
                        email,
                        password,
                    })
                    .await?;

                println!("Created user {} <{}> ({})", user.name, user.email, user.id);
            }

            UserCommands::List { limit, offset } => {
                let users = service.list_users(limit, offset).await?;

                if users.is_empty() {
                    println!("No users found");
                } else {
                    for user in users {
                        println!("{}  {} <{}>", user.id, user.name, user.email);
                    }
                }
            }
        },
    }

    Ok(())
}
