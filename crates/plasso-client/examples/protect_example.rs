/*
[INPUT]:  Simulated incoming request (headers + URL)
[OUTPUT]: Access decision printed to stdout
[POS]:    Examples - guarding a member-only page
[UPDATE]: When guard rules change
*/

use plasso_client::*;
use reqwest::Url;
use reqwest::header::HeaderMap;

/// Example: what a web handler does with `SessionGuard`
///
/// Pass `?token=...` in the URL argument to simulate the redirect back from
/// the Plasso login page.
#[tokio::main]
async fn main() {
    let raw_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://shop.example/members".to_string());
    let url = match Url::parse(&raw_url) {
        Ok(url) => url,
        Err(e) => {
            eprintln!("Invalid URL {}: {}", raw_url, e);
            return;
        }
    };

    let client = match PlassoClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    let guard = SessionGuard::new(client);

    let outcome = guard
        .protect(&HeaderMap::new(), &url, |session| async move {
            format!("Welcome back, member {} (plan {})", session.id, session.plan_id)
        })
        .await;

    match outcome {
        Protected::Served { output, set_cookie } => {
            println!("200 OK: {}", output);
            if let Some(cookie) = set_cookie {
                println!("Set-Cookie: {}", cookie);
            }
        }
        Protected::Redirected(redirect) => {
            println!("302 Location: {}", redirect.location);
            if let Some(cookie) = redirect.set_cookie() {
                println!("Set-Cookie: {}", cookie);
            }
        }
    }
}
