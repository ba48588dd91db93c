use crate::templates::content::{VINOTINTO, WHATSAPP_URL};
use maud::{html, Markup};

pub fn hero() -> Markup {
    html! {
        section class="relative overflow-hidden py-24 sm:py-32 px-4" style=(format!("background-color: {VINOTINTO}")) {
            div class="relative max-w-4xl mx-auto text-center" {
                p class="text-sm uppercase tracking-[0.25em] text-[#f5c6c6] mb-4 font-semibold" {
                    "Plataforma Inmobiliaria con Respaldo Jurídico"
                }
                h2 class="text-4xl sm:text-5xl lg:text-6xl font-bold leading-tight mb-6 text-white" {
                    "Tu próximo hogar en Bogotá,"
                    br;
                    span class="italic" { "visto en 360°" }
                }
                p class="text-base sm:text-lg text-[#f5e0e3] max-w-xl mx-auto mb-10 leading-relaxed" {
                    "Explora cada rincón de tu futuro apartamento desde cualquier lugar. "
                    "Asesoría jurídica gratuita en cada negociación."
                }
                div class="flex flex-col sm:flex-row gap-4 justify-center" {
                    a href="#catalogo"
                        class="px-8 py-3.5 bg-white font-bold rounded-full shadow-lg text-base"
                        style=(format!("color: {VINOTINTO}"))
                    { "Ver Catálogo" }
                    a href=(WHATSAPP_URL) target="_blank" rel="noopener noreferrer"
                        class="px-8 py-3.5 border-2 border-white text-white font-semibold rounded-full text-base"
                    { "Hablar con un asesor" }
                }
            }
        }
    }
}
