use crate::templates::content::{BRAND, VINOTINTO};
use maud::{html, Markup};

pub fn footer(year: i32) -> Markup {
    html! {
        footer class="text-white text-center py-8 px-4" style=(format!("background-color: {VINOTINTO}")) {
            p class="text-sm font-semibold tracking-wide" {
                "© " (year) " " (BRAND) " · Bogotá, Colombia"
            }
            p class="text-xs text-[#f5c6c6] mt-1" { "Plataforma inmobiliaria con respaldo jurídico" }
        }
    }
}
