/*
[INPUT]:  Plasso space public key and member credentials
[OUTPUT]: Member handle and profile data printed to stdout
[POS]:    Examples - member login and profile lookup
[UPDATE]: When member endpoints change
*/

use plasso_client::*;
use tracing_subscriber::EnvFilter;

/// Example: member flow
///
/// 1. Create HTTP client
/// 2. Log the member in
/// 3. Fetch their profile over GraphQL
/// 4. Log out
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Plasso Member Example ===\n");

    let client = match PlassoClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created");

    let public_key = std::env::var("PLASSO_PUBLIC_KEY").unwrap_or_else(|_| "test".to_string());
    let email = std::env::var("PLASSO_EMAIL").unwrap_or_else(|_| "mike+1@plasso.com".to_string());
    let password = std::env::var("PLASSO_PASSWORD").unwrap_or_else(|_| "password".to_string());

    let member = match client
        .login(LoginRequest {
            public_key,
            email,
            password,
        })
        .await
    {
        Ok(member) => member,
        Err(e) => {
            eprintln!("Login failed: {}", e);
            return;
        }
    };
    println!("✓ Logged in");

    match client.member_data(&member).await {
        Ok(data) => {
            println!("  Id:    {}", data.id);
            println!("  Name:  {}", data.name);
            println!("  Plans: {}", data.plans.join(", "));
        }
        Err(e) => eprintln!("Failed to load member data: {}", e),
    }

    if let Err(e) = client.logout(member).await {
        eprintln!("Logout failed: {}", e);
        return;
    }
    println!("\n✓ Member example complete");
}
