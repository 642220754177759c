#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! French Jokes page entry point; native builds only print how to serve it.

#[cfg(target_arch = "wasm32")]
fn main() {
    jokes_ui::run_app();
}

/// Usage text for native builds: the page only runs inside a browser.
#[cfg(not(target_arch = "wasm32"))]
fn native_notice() -> String {
    use jokes_ui::core::config::{JokeApiConfig, PAGE_TITLE};

    format!(
        "{PAGE_TITLE} runs in the browser only.\n\
         Serve it with `trunk serve crates/jokes-ui/index.html`; it loads jokes from {}.\n",
        JokeApiConfig::default().jokes_url()
    )
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), std::io::Error> {
    use std::io::{self, Write};

    io::stderr().lock().write_all(native_notice().as_bytes())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn notice_names_page_and_endpoint() {
        let notice = native_notice();
        assert!(notice.starts_with("French Jokes runs in the browser only."));
        assert!(notice.contains("trunk serve"));
        assert!(notice.contains("https://v2.jokeapi.dev/joke/"));
    }

    #[test]
    fn native_main_writes_notice() -> std::io::Result<()> {
        // Stub must finish cleanly without a browser.
        main()
    }
}
