/*
[INPUT]:  Request headers and URL, Plasso client for token validation
[OUTPUT]: Access decisions (granted session or redirect)
[POS]:    Auth layer - protects handlers behind a member login
[UPDATE]: When login/logout query parameters or redirect rules change
*/

use chrono::Duration;
use reqwest::Url;
use reqwest::header::HeaderMap;

use super::session::{SessionCookie, clear_cookie_header, has_session_cookie, read_cookie};
use crate::http::PlassoClient;
use crate::types::Session;

/// Query parameter carrying a fresh member token after login
pub const TOKEN_PARAM: &str = "token";
/// Query parameter signalling the member logged out
pub const LOGOUT_PARAM: &str = "logout";

const ROOT: &str = "/";
const DEFAULT_COOKIE_DAYS: i64 = 30;

/// Where to send a visitor that may not see the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub location: String,
    pub clear_cookie: bool,
}

impl Redirect {
    fn root(clear_cookie: bool) -> Self {
        Self {
            location: ROOT.to_string(),
            clear_cookie,
        }
    }

    /// `Set-Cookie` header to send along with the redirect, if any
    pub fn set_cookie(&self) -> Option<String> {
        self.clear_cookie.then(clear_cookie_header)
    }
}

/// Outcome of checking a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// Member is logged in. `set_cookie` is present when a new cookie must be stored.
    Granted {
        session: Session,
        set_cookie: Option<String>,
    },
    Redirect(Redirect),
}

/// Outcome of [`SessionGuard::protect`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Protected<R> {
    Served {
        output: R,
        set_cookie: Option<String>,
    },
    Redirected(Redirect),
}

/// Gatekeeper for pages that require a logged-in member
#[derive(Debug, Clone)]
pub struct SessionGuard {
    client: PlassoClient,
    cookie_max_age: Duration,
}

impl SessionGuard {
    /// Create a guard validating tokens through `client`
    pub fn new(client: PlassoClient) -> Self {
        Self {
            client,
            cookie_max_age: Duration::days(DEFAULT_COOKIE_DAYS),
        }
    }

    /// Override how long the session cookie lives
    pub fn with_cookie_max_age(mut self, max_age: Duration) -> Self {
        self.cookie_max_age = max_age;
        self
    }

    pub fn client(&self) -> &PlassoClient {
        &self.client
    }

    pub fn cookie_max_age(&self) -> Duration {
        self.cookie_max_age
    }

    /// Decide whether the request may proceed.
    ///
    /// 1. `?logout` clears the cookie and redirects to the space logout URL
    /// 2. `?token=` is validated and stored in a new cookie
    /// 3. an existing cookie is re-validated
    /// 4. anything else redirects to the root of the host, clearing an
    ///    undecodable cookie
    pub async fn check(&self, headers: &HeaderMap, url: &Url) -> Access {
        let cookie = read_cookie(headers);

        let mut logout = false;
        let mut token = None;
        for (key, value) in url.query_pairs() {
            match &*key {
                LOGOUT_PARAM => logout = true,
                TOKEN_PARAM => token = Some(value.into_owned()),
                _ => {}
            }
        }

        if logout {
            let location = cookie
                .map(|cookie| cookie.logout_url)
                .filter(|logout_url| !logout_url.is_empty())
                .unwrap_or_else(|| ROOT.to_string());
            tracing::debug!(%location, "member logged out");
            return Access::Redirect(Redirect {
                location,
                clear_cookie: true,
            });
        }

        if let Some(token) = token {
            return self.login_with_token(&token).await;
        }

        match cookie {
            Some(SessionCookie { token, .. }) => match self.client.member_session(&token).await {
                Ok(session) => Access::Granted {
                    session,
                    set_cookie: None,
                },
                Err(err) => {
                    tracing::warn!(error = %err, "session cookie rejected");
                    Access::Redirect(Redirect::root(true))
                }
            },
            // clear an undecodable cookie
            None => Access::Redirect(Redirect::root(has_session_cookie(headers))),
        }
    }

    /// Run `handler` only for logged-in members
    pub async fn protect<F, Fut, R>(&self, headers: &HeaderMap, url: &Url, handler: F) -> Protected<R>
    where
        F: FnOnce(Session) -> Fut,
        Fut: Future<Output = R>,
    {
        match self.check(headers, url).await {
            Access::Granted {
                session,
                set_cookie,
            } => Protected::Served {
                output: handler(session).await,
                set_cookie,
            },
            Access::Redirect(redirect) => Protected::Redirected(redirect),
        }
    }

    async fn login_with_token(&self, token: &str) -> Access {
        let session = match self.client.member_session(token).await {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!(error = %err, "login token rejected");
                return Access::Redirect(Redirect::root(true));
            }
        };

        match session.cookie().set_cookie_header(self.cookie_max_age) {
            Ok(set_cookie) => Access::Granted {
                session,
                set_cookie: Some(set_cookie),
            },
            Err(err) => {
                tracing::warn!(error = %err, "could not encode session cookie");
                Access::Redirect(Redirect::root(true))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::ClientConfig;
    use reqwest::header::{COOKIE, HeaderValue};
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn guard_with_member(server: &MockServer, token: &str) -> SessionGuard {
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(body_partial_json(serde_json::json!({"variables": {"token": token}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {
                    "member": {
                        "id": "mem_42",
                        "planId": 3,
                        "space": {"logoutUrl": "https://acme.test/bye"}
                    }
                }
            })))
            .mount(server)
            .await;

        let client = PlassoClient::with_config_and_base_urls(
            ClientConfig::default(),
            &server.uri(),
            &format!("{}/graphql", server.uri()),
        )
        .expect("client init");
        SessionGuard::new(client)
    }

    fn cookie_headers(token: &str) -> HeaderMap {
        let cookie = SessionCookie {
            token: token.to_string(),
            logout_url: "https://acme.test/bye".to_string(),
        };
        let mut headers = HeaderMap::new();
        let value = format!("plasso={}", cookie.encode().unwrap());
        headers.insert(COOKIE, HeaderValue::from_str(&value).unwrap());
        headers
    }

    fn url(raw: &str) -> Url {
        Url::parse(raw).unwrap()
    }

    #[tokio::test]
    async fn test_no_credentials_redirects_to_root() {
        let server = MockServer::start().await;
        let guard = guard_with_member(&server, "tok_member").await;

        let access = guard
            .check(&HeaderMap::new(), &url("https://shop.test/members"))
            .await;
        assert_eq!(access, Access::Redirect(Redirect::root(false)));
    }

    #[tokio::test]
    async fn test_token_param_grants_and_sets_cookie() {
        let server = MockServer::start().await;
        let guard = guard_with_member(&server, "tok_member").await;

        let access = guard
            .check(
                &HeaderMap::new(),
                &url("https://shop.test/members?token=tok_member"),
            )
            .await;

        match access {
            Access::Granted {
                session,
                set_cookie,
            } => {
                assert_eq!(session.id, "mem_42");
                assert_eq!(session.token, "tok_member");
                let header = set_cookie.expect("cookie should be set");
                let expected = session.cookie().encode().unwrap();
                assert!(header.starts_with(&format!("plasso={expected};")));
            }
            other => panic!("unexpected access: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_valid_cookie_grants_without_new_cookie() {
        let server = MockServer::start().await;
        let guard = guard_with_member(&server, "tok_member").await;

        let access = guard
            .check(&cookie_headers("tok_member"), &url("https://shop.test/members"))
            .await;

        match access {
            Access::Granted { set_cookie, .. } => assert!(set_cookie.is_none()),
            other => panic!("unexpected access: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_undecodable_cookie_redirects_and_clears() {
        let server = MockServer::start().await;
        let guard = guard_with_member(&server, "tok_member").await;

        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("theme=dark; plasso=%%%"));

        let access = guard
            .check(&headers, &url("https://shop.test/members"))
            .await;
        assert_eq!(access, Access::Redirect(Redirect::root(true)));
    }

    #[tokio::test]
    async fn test_rejected_cookie_redirects_and_clears() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .respond_with(ResponseTemplate::new(401).set_body_string("expired"))
            .mount(&server)
            .await;
        let client = PlassoClient::with_config_and_base_urls(
            ClientConfig::default(),
            &server.uri(),
            &format!("{}/graphql", server.uri()),
        )
        .unwrap();
        let guard = SessionGuard::new(client);

        let access = guard
            .check(&cookie_headers("tok_stale"), &url("https://shop.test/members"))
            .await;

        let Access::Redirect(redirect) = access else {
            panic!("expected redirect");
        };
        assert_eq!(redirect.location, "/");
        assert_eq!(redirect.set_cookie(), Some(clear_cookie_header()));
    }

    #[tokio::test]
    async fn test_logout_redirects_to_space_logout_url() {
        let server = MockServer::start().await;
        let guard = guard_with_member(&server, "tok_member").await;

        let access = guard
            .check(
                &cookie_headers("tok_member"),
                &url("https://shop.test/members?logout=1&token=tok_member"),
            )
            .await;

        assert_eq!(
            access,
            Access::Redirect(Redirect {
                location: "https://acme.test/bye".to_string(),
                clear_cookie: true,
            })
        );
    }

    #[tokio::test]
    async fn test_logout_without_cookie_goes_to_root() {
        let server = MockServer::start().await;
        let guard = guard_with_member(&server, "tok_member").await;

        let access = guard
            .check(&HeaderMap::new(), &url("https://shop.test/members?logout"))
            .await;
        assert_eq!(access, Access::Redirect(Redirect::root(true)));
    }

    #[tokio::test]
    async fn test_protect_runs_handler_only_when_granted() {
        let server = MockServer::start().await;
        let guard = guard_with_member(&server, "tok_member").await;

        let served = guard
            .protect(
                &cookie_headers("tok_member"),
                &url("https://shop.test/members"),
                |session| async move { format!("hello {}", session.id) },
            )
            .await;
        assert_eq!(
            served,
            Protected::Served {
                output: "hello mem_42".to_string(),
                set_cookie: None,
            }
        );

        let redirected = guard
            .protect(
                &HeaderMap::new(),
                &url("https://shop.test/members"),
                |session| async move { session.id },
            )
            .await;
        assert_eq!(redirected, Protected::Redirected(Redirect::root(false)));
    }
}
