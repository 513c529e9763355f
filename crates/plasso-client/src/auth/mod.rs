/*
[INPUT]:  Incoming request headers/URL and member sessions
[OUTPUT]: Session cookies and access decisions
[POS]:    Auth layer - cookie based protection of member-only pages
[UPDATE]: When the session cookie or guard rules change
*/

pub mod guard;
pub mod session;

pub use guard::{Access, LOGOUT_PARAM, Protected, Redirect, SessionGuard, TOKEN_PARAM};
pub use session::{SESSION_COOKIE, SessionCookie, clear_cookie_header, has_session_cookie, read_cookie};
