//! Server-rendered HTML pages
//!
//! The pages are small enough that they are assembled by hand rather
//! than through a template engine. Everything user- or catalog-supplied
//! goes through [`escape_html`] before it reaches the page.

use crate::models::{favourite::Favourite, user::SessionClaims, volume::{VolumeDetails, VolumeSummary}};

use super::session::Flash;

const STYLE: &str = "\
body { font-family: sans-serif; max-width: 46rem; margin: 2rem auto; padding: 0 1rem; color: #222; }\n\
nav { border-bottom: 1px solid #ccc; padding-bottom: 0.5rem; margin-bottom: 1rem; }\n\
nav a { margin-right: 0.75rem; }\n\
nav .nav-user { float: right; color: #555; }\n\
.flash { padding: 0.5rem 0.75rem; border-radius: 4px; margin-bottom: 1rem; }\n\
.flash-error { background: #fde8e8; border: 1px solid #d9534f; }\n\
.flash-info { background: #e8f1fd; border: 1px solid #4a78d0; }\n\
form.stacked label { display: block; margin-bottom: 0.75rem; }\n\
form.stacked input { display: block; width: 100%; padding: 0.4rem; margin-top: 0.25rem; }\n\
ul.volumes li, ul.favourites li { margin-bottom: 0.75rem; }\n\
";

/// Escape text for interpolation into HTML content or attributes
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Common page frame: navigation, pending flash message, body
fn layout(title: &str, user: Option<&SessionClaims>, flash: Option<&Flash>, body: &str) -> String {
    let nav = match user {
        Some(user) => format!(
            r#"<span class="nav-user">Signed in as {}</span><a href="/">Home</a><a href="/search">Search</a><a href="/favourite">My favourites</a><a href="/logout">Log out</a>"#,
            escape_html(&user.name)
        ),
        None => r#"<a href="/">Home</a><a href="/login">Log in</a><a href="/signup">Sign up</a>"#
            .to_string(),
    };

    let flash_html = flash
        .map(|f| {
            format!(
                "<div class=\"flash flash-{}\">{}</div>\n",
                escape_html(&f.level),
                escape_html(&f.message)
            )
        })
        .unwrap_or_default();

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{} - Bookshelf</title>\n\
         <style>\n{}</style>\n\
         </head>\n\
         <body>\n\
         <nav>{}</nav>\n\
         {}<main>\n{}</main>\n\
         </body>\n\
         </html>\n",
        escape_html(title),
        STYLE,
        nav,
        flash_html,
        body
    )
}

/// Home page with the search box
pub fn home_page(user: Option<&SessionClaims>, flash: Option<&Flash>) -> String {
    let body = "<h1>Bookshelf</h1>\n\
        <p>Search the Google Books catalog and keep your favourite books in one place.</p>\n\
        <form method=\"post\" action=\"/\">\n\
        <input type=\"text\" name=\"query\" placeholder=\"Title, author or keyword\">\n\
        <button type=\"submit\">Search</button>\n\
        </form>\n";
    layout("Home", user, flash, body)
}

/// Signup form
pub fn signup_page(flash: Option<&Flash>) -> String {
    let body = "<h1>Sign up</h1>\n\
        <form class=\"stacked\" method=\"post\" action=\"/signup\">\n\
        <label>First name<input type=\"text\" name=\"first_name\"></label>\n\
        <label>Last name<input type=\"text\" name=\"last_name\"></label>\n\
        <label>Email<input type=\"email\" name=\"email\"></label>\n\
        <label>Password<input type=\"password\" name=\"password\"></label>\n\
        <label>Confirm password<input type=\"password\" name=\"confirm_password\"></label>\n\
        <button type=\"submit\">Create account</button>\n\
        </form>\n\
        <p>Already have an account? <a href=\"/login\">Log in</a></p>\n";
    layout("Sign up", None, flash, body)
}

/// Login form
pub fn login_page(flash: Option<&Flash>) -> String {
    let body = "<h1>Log in</h1>\n\
        <form class=\"stacked\" method=\"post\" action=\"/login\">\n\
        <label>Email<input type=\"email\" name=\"email\"></label>\n\
        <label>Password<input type=\"password\" name=\"password\"></label>\n\
        <button type=\"submit\">Log in</button>\n\
        </form>\n\
        <p>New here? <a href=\"/signup\">Sign up</a></p>\n";
    layout("Log in", None, flash, body)
}

/// Dedicated search page for logged-in users
pub fn search_page(user: &SessionClaims, flash: Option<&Flash>) -> String {
    let body = "<h1>Search books</h1>\n\
        <form method=\"post\" action=\"/search\">\n\
        <input type=\"text\" name=\"query\" placeholder=\"Title, author or keyword\">\n\
        <button type=\"submit\">Search</button>\n\
        </form>\n";
    layout("Search", Some(user), flash, body)
}

/// Search results list; each entry links to its detail page
pub fn results_page(user: Option<&SessionClaims>, volumes: &[VolumeSummary]) -> String {
    let mut body = String::from("<h1>Search results</h1>\n");

    if volumes.is_empty() {
        body.push_str("<p>No books matched your search.</p>\n");
    } else {
        body.push_str("<ul class=\"volumes\">\n");
        for volume in volumes {
            let title = volume.title.as_deref().unwrap_or("(untitled)");
            body.push_str(&format!(
                "<li><a href=\"/receive/{}\">{}</a>",
                escape_html(&volume.id),
                escape_html(title)
            ));
            if !volume.authors.is_empty() {
                body.push_str(&format!(" by {}", escape_html(&volume.authors.join(", "))));
            }
            body.push_str("</li>\n");
        }
        body.push_str("</ul>\n");
    }

    layout("Search results", user, None, &body)
}

/// Volume detail page with the save-to-favourites form
pub fn volume_page(
    user: Option<&SessionClaims>,
    details: &VolumeDetails,
    flash: Option<&Flash>,
) -> String {
    let title = details.title.as_deref().unwrap_or("(untitled)");
    let mut body = format!("<h1>{}</h1>\n", escape_html(title));

    if let Some(subtitle) = &details.subtitle {
        body.push_str(&format!("<h2>{}</h2>\n", escape_html(subtitle)));
    }
    if !details.authors.is_empty() {
        body.push_str(&format!(
            "<p><em>{}</em></p>\n",
            escape_html(&details.authors.join(", "))
        ));
    }
    if let Some(description) = &details.description {
        body.push_str(&format!("<p>{}</p>\n", escape_html(description)));
    }

    body.push_str(&format!(
        "<form method=\"post\" action=\"/receive/{}\">\n\
         <button type=\"submit\">Save to favourites</button>\n\
         </form>\n",
        escape_html(&details.id)
    ));

    layout(title, user, flash, &body)
}

/// The logged-in user's favourites list
pub fn favourites_page(
    user: &SessionClaims,
    favourites: &[Favourite],
    flash: Option<&Flash>,
) -> String {
    let mut body = String::from("<h1>My favourites</h1>\n");

    if favourites.is_empty() {
        body.push_str(
            "<p>No favourites yet. <a href=\"/search\">Find a book</a> to save one.</p>\n",
        );
    } else {
        body.push_str("<ul class=\"favourites\">\n");
        for favourite in favourites {
            body.push_str(&format!("<li><strong>{}</strong>", escape_html(&favourite.title)));
            if let Some(subtitle) = &favourite.subtitle {
                body.push_str(&format!("<br><em>{}</em>", escape_html(subtitle)));
            }
            if let Some(authors) = &favourite.authors {
                body.push_str(&format!("<br>{}", escape_html(authors)));
            }
            if let Some(description) = &favourite.description {
                body.push_str(&format!("<br>{}", escape_html(description)));
            }
            body.push_str("</li>\n");
        }
        body.push_str("</ul>\n");
    }

    layout("My favourites", Some(user), flash, &body)
}

/// Generic page for unexpected failures
pub fn error_page() -> String {
    layout(
        "Something went wrong",
        None,
        None,
        "<h1>Something went wrong</h1>\n\
         <p>An unexpected error occurred. Please try again later.</p>\n",
    )
}
