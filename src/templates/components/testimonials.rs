use crate::templates::content::{Testimonial, GRIS_CARBON, TESTIMONIALS, VINOTINTO};
use maud::{html, Markup};

fn initial(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}

fn testimonial_card(t: &Testimonial) -> Markup {
    html! {
        blockquote class="bg-white/5 border border-white/10 rounded-2xl p-6 flex flex-col gap-4" {
            span class="text-3xl leading-none font-serif opacity-40" style=(format!("color: {VINOTINTO}")) { "“" }
            p class="text-gray-300 text-sm leading-relaxed -mt-4" { (t.text) }
            footer class="mt-auto flex items-center gap-3 pt-4 border-t border-white/10" {
                div class="w-10 h-10 rounded-full flex items-center justify-center text-white font-bold text-sm flex-shrink-0"
                    style=(format!("background-color: {VINOTINTO}"))
                { (initial(t.name)) }
                div {
                    p class="font-bold text-sm leading-tight text-[#f5c6c6]" { (t.name) }
                    p class="text-gray-500 text-xs" { (t.profile) }
                }
            }
        }
    }
}

pub fn testimonials() -> Markup {
    html! {
        section class="py-20 px-4" style=(format!("background-color: {GRIS_CARBON}")) {
            div class="max-w-7xl mx-auto" {
                div class="text-center mb-12" {
                    p class="text-xs uppercase tracking-[0.3em] text-gray-400 mb-3 font-semibold" { "Testimonios verificados" }
                    h3 class="text-3xl sm:text-4xl font-bold text-white mb-3" { "Confianza Buen Futuro" }
                    p class="text-gray-400 text-sm sm:text-base max-w-lg mx-auto" {
                        "Abogados, inversionistas y familias que confiaron en nosotros "
                        "para tomar la mejor decisión inmobiliaria."
                    }
                }
                div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-5" {
                    @for t in &TESTIMONIALS {
                        (testimonial_card(t))
                    }
                }
            }
        }
    }
}
