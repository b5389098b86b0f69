// /auth-portal/services/portal-service/src/api/views.rs

use crate::{
    api::routes::{LOGIN_PATH, LOGOUT_PATH, REGISTER_PATH},
    models::{CurrentUser, User},
    utils::escape_html,
};

// ── HTML Templates ────────────────────────────────────────────────────

fn base_style() -> &'static str {
    r#"
    body { font-family: sans-serif; background: #eee; padding: 1em; }
    nav, section { max-width: 960px; margin: 0 auto; background: #fff; padding: 0 1em; }
    nav { background: lightgray; display: flex; align-items: center; }
    nav h1 { flex: auto; margin: 0; }
    nav ul { display: flex; list-style: none; margin: 0; padding: 0; }
    nav ul li a, nav ul li span { display: block; padding: 0.5rem; }
    .flash { margin: 1em 0; padding: 1em; background: #cae6f6; border: 1px solid #377ba8; }
    form { display: flex; flex-direction: column; }
    label { font-weight: bold; margin-bottom: 0.5em; }
    input { margin-bottom: 1em; }
    "#
}

fn nav(current_user: &CurrentUser) -> String {
    match current_user.user() {
        Some(user) => format!(
            r#"<li><span>{username}</span></li>
      <li><a href="{logout}">Log Out</a></li>"#,
            username = escape_html(&user.username),
            logout = LOGOUT_PATH,
        ),
        None => format!(
            r#"<li><a href="{register}">Register</a></li>
      <li><a href="{login}">Log In</a></li>"#,
            register = REGISTER_PATH,
            login = LOGIN_PATH,
        ),
    }
}

fn layout(title: &str, current_user: &CurrentUser, error: Option<&str>, content: &str) -> String {
    let flash = error
        .map(|e| format!(r#"<div class="flash">{}</div>"#, escape_html(e)))
        .unwrap_or_default();

    format!(
        r#"<!doctype html>
<html lang="en"><head>
<meta charset="utf-8">
<title>{title} - Portal</title>
<style>{style}</style>
</head><body>
<nav>
  <h1><a href="/">Portal</a></h1>
  <ul>
      {nav}
  </ul>
</nav>
<section class="content">
  <header><h1>{title}</h1></header>
  {flash}
  {content}
</section>
</body></html>"#,
        title = escape_html(title),
        style = base_style(),
        nav = nav(current_user),
    )
}

/// Username is echoed back into the form, the password never is
fn credentials_form(action: &str, submit: &str, username: &str) -> String {
    format!(
        r#"<form method="post" action="{action}">
    <label for="username">Username</label>
    <input name="username" id="username" value="{username}" required>
    <label for="password">Password</label>
    <input type="password" name="password" id="password" required>
    <input type="submit" value="{submit}">
  </form>"#,
        username = escape_html(username),
    )
}

pub fn register_page(current_user: &CurrentUser, error: Option<&str>, username: &str) -> String {
    layout(
        "Register",
        current_user,
        error,
        &credentials_form(REGISTER_PATH, "Register", username),
    )
}

pub fn login_page(current_user: &CurrentUser, error: Option<&str>, username: &str) -> String {
    layout(
        "Log In",
        current_user,
        error,
        &credentials_form(LOGIN_PATH, "Log In", username),
    )
}

pub fn index_page(current_user: &CurrentUser) -> String {
    let content = match current_user.user() {
        Some(user) => format!(
            r#"<p>Welcome back, {}.</p>
  <p><a href="/profile">Your profile</a></p>"#,
            escape_html(&user.username)
        ),
        None => format!(
            r#"<p>You are not logged in.</p>
  <p><a href="{}">Log in</a> or <a href="{}">create an account</a>.</p>"#,
            LOGIN_PATH, REGISTER_PATH
        ),
    };

    layout("Home", current_user, None, &content)
}

pub fn profile_page(current_user: &CurrentUser, user: &User) -> String {
    let content = format!(
        r#"<dl>
    <dt>User ID</dt><dd>{id}</dd>
    <dt>Username</dt><dd>{username}</dd>
  </dl>"#,
        id = user.id,
        username = escape_html(&user.username),
    );

    layout("Profile", current_user, None, &content)
}
