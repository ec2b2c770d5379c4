//! Interactive session walkthrough against a public JSON API.
//!
//! Run with: `cargo run -p notebook-session-demo`

// Demo-specific lint allowances
#![allow(missing_docs)]
#![allow(clippy::print_stdout)]

use restbook::{RequestSettings, ResourceClient, display};

#[tokio::main]
async fn main() -> restbook::Result<()> {
    let settings = RequestSettings::builder()
        .base_url("https://jsonplaceholder.typicode.com")
        .resource_name("users")
        .header("Accept", "application/json")
        .build()?;

    let client = ResourceClient::new(settings);

    // Single record: render the raw response.
    let single = client.get().endpoint("1").send().await?;
    println!("{}", display::render(&single));

    // Listing: list-shaped JSON converts into a table.
    let listing = client.get().param("_limit", "5").send_table().await?;
    if let Some(table) = listing.table() {
        println!("{table}");
    } else {
        println!("response was not list-shaped");
    }

    // Write verb with a JSON payload.
    let created = client
        .post()
        .payload(&serde_json::json!({"name": "Ada Lovelace", "username": "ada"}))?
        .send()
        .await?;
    println!("created -> HTTP {}", created.status());

    Ok(())
}
