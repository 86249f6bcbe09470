use clap::{Parser, Subcommand};
use reqwest::{Client, RequestBuilder};
use serde_json::{json, Map, Value};

#[derive(Parser)]
#[command(name = "products-cli")]
#[command(about = "Command-line client for the products API", long_about = None)]
struct Cli {
    /// Base URL of the product collection
    #[arg(short, long, default_value = "http://localhost:3000/products")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every product
    List,
    /// Show one product
    Get { id: String },
    /// Create a product
    Create { name: String, price: f64 },
    /// Replace name and price of a product
    Replace { id: String, name: String, price: f64 },
    /// Update only the given fields of a product
    Patch {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        price: Option<f64>,
    },
    /// Delete a product
    Delete { id: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = Client::new();
    let base = cli.url.trim_end_matches('/');

    let request = match cli.command {
        Commands::List => client.get(base),
        Commands::Get { id } => client.get(format!("{base}/{id}")),
        Commands::Create { name, price } => client
            .post(base)
            .json(&json!({ "name": name, "price": price })),
        Commands::Replace { id, name, price } => client
            .put(format!("{base}/{id}"))
            .json(&json!({ "name": name, "price": price })),
        Commands::Patch { id, name, price } => {
            let mut body = Map::new();
            if let Some(name) = name {
                body.insert("name".into(), Value::from(name));
            }
            if let Some(price) = price {
                body.insert("price".into(), Value::from(price));
            }
            client
                .patch(format!("{base}/{id}"))
                .json(&Value::Object(body))
        }
        Commands::Delete { id } => client.delete(format!("{base}/{id}")),
    };

    send(request).await
}

async fn send(request: RequestBuilder) -> Result<(), Box<dyn std::error::Error>> {
    let res = request.send().await?;
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
        match serde_json::from_str::<Value>(&text) {
            Ok(body) => eprintln!(
                "Message: {}",
                body.get("message").and_then(Value::as_str).unwrap_or(&text)
            ),
            Err(_) => eprintln!("Response: {}", text),
        }
        return Ok(());
    }

    if text.is_empty() {
        println!("{}", status);
        return Ok(());
    }

    let json: Value = serde_json::from_str(&text)?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
