use clap::Parser;

use userdir::api;

#[derive(Parser)]
#[clap(version = "0.1.0", author = "UserDir Contributors")]
enum Cli {
    /// Start the user directory service
    Serve {
        #[clap(short, long, default_value = "config.toml")]
        config: String,
    },
    /// Print the effective role -> permission table
    Roles {
        #[clap(short, long, default_value = "config.toml")]
        config: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli {
        Cli::Serve { config } => {
            println!("Starting user directory service with config: {}", config);
            api::start_service(config).await?;
        }
        Cli::Roles { config } => {
            let config = api::load_config(&config);
            let table = config.role_table();
            for def in table.definitions() {
                let mut permissions: Vec<_> =
                    table.permissions_of(def.code).into_iter().collect();
                permissions.sort();
                let permissions: Vec<&str> = permissions.iter().map(|p| p.as_str()).collect();
                println!("{:<10} {:<10} [{}]", def.code.as_str(), def.name, permissions.join(", "));
            }
        }
    }

    Ok(())
}
