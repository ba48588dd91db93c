use crate::templates::content::{BRAND, VINOTINTO};
use maud::{html, Markup, DOCTYPE};

/// Build a basic HTML error page
pub fn error_page(status: u16, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="utf-8";
                title { "Error " (status) " | " (BRAND) }
                style {
                    "body { font-family: system-ui, sans-serif; max-width: 720px; margin: 4rem auto; padding: 0 1rem; color: #2D2D2D; }"
                    "h1 { color: " (VINOTINTO) "; }"
                }
            }
            body {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "Volver al catálogo" } }
            }
        }
    }
}
