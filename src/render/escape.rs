// src/render/escape.rs
// =============================================================================
// HTML escaping for anything that came from the GitHub API.
//
// Every string that originates outside our program (repo names, descriptions,
// topics, URLs, profile bio...) passes through escape_html() before it is
// placed inside markup. Without it a repository description like
// `<script>...</script>` would be injected straight into the page.
//
// Rust concepts:
// - &str in, String out: we borrow the input and return a new owned string
// - String::replace: returns a fresh String for each replacement
// =============================================================================

// Escapes the five HTML-significant characters.
//
// The order matters: `&` is replaced first so the `&` characters introduced
// by the later replacements (`&lt;`, `&quot;`, ...) are not escaped again.
//
// Applying it twice double-escapes (`&` -> `&amp;` -> `&amp;amp;`). That is
// expected; callers escape exactly once, right before insertion.
//
// Example:
//   escape_html("<a href='x'>") -> "&lt;a href=&#039;x&#039;&gt;"
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}
