use crate::domain::logic::format_cop;
use crate::domain::Property;
use maud::{html, Markup};

fn format_area(area: f64) -> String {
    if area.fract() == 0.0 {
        format!("{area:.0}")
    } else {
        format!("{area:.1}")
    }
}

pub fn property_card(property: &Property, placeholder: &str) -> Markup {
    let has_specs =
        property.area_m2.is_some() || property.habitaciones.is_some() || property.banos.is_some();

    html! {
        article class="group flex flex-col bg-white rounded-2xl shadow-md overflow-hidden border border-gray-100" data-nid=(property.nid) {
            div class="relative h-52 w-full overflow-hidden bg-gray-100" {
                img src=(property.main_image(placeholder))
                    alt=(format!("Apartamento {} en {}", property.nid, property.barrio))
                    loading="lazy"
                    class="object-cover w-full h-full"
                    onerror=(format!("this.onerror=null;this.src='{placeholder}'"));
                @if let Some(estrato) = property.estrato {
                    span class="absolute top-3 left-3 bg-white/90 text-xs font-semibold px-2 py-1 rounded-full shadow" {
                        "Estrato " (estrato)
                    }
                }
                @if property.images.len() > 1 {
                    span class="absolute top-3 right-3 bg-black/60 text-white text-xs px-2 py-1 rounded-full" {
                        "📷 " (property.images.len())
                    }
                }
            }

            div class="flex flex-col flex-1 p-5 gap-3" {
                div class="flex items-start justify-between gap-2" {
                    div {
                        p class="text-xs text-gray-400 font-medium tracking-widest uppercase" { (property.nid) }
                        h2 class="text-lg font-bold leading-tight mt-0.5" { (property.barrio) }
                    }
                    div class="text-right shrink-0" {
                        p class="text-xs text-gray-400 uppercase tracking-wide" { "Precio" }
                        p class="text-base font-extrabold leading-tight" { (format_cop(property.precio)) }
                    }
                }

                @if let Some(descripcion) = &property.descripcion {
                    p class="text-sm text-gray-500 leading-relaxed line-clamp-2" { (descripcion) }
                }

                @if has_specs {
                    div class="flex flex-wrap gap-3 text-sm text-gray-600 border-t border-gray-100 pt-3" {
                        @if let Some(area) = property.area_m2 {
                            span { "📐 " (format_area(area)) " m²" }
                        }
                        @if let Some(hab) = property.habitaciones {
                            span { "🛏 " (hab) " hab." }
                        }
                        @if let Some(banos) = property.banos {
                            span { "🚿 " (banos) " baños" }
                        }
                    }
                }

                div class="flex items-center gap-2 border rounded-lg px-3 py-2 mt-auto" {
                    span class="text-lg leading-none" { "⚖️" }
                    p class="text-xs font-semibold leading-tight" {
                        "Respaldo Jurídico Incluido"
                        span class="block font-normal text-gray-500" { "Revisión de escrituras y contrato sin costo extra." }
                    }
                }

                @if let Some(tour) = &property.url_360 {
                    a href=(tour) target="_blank" rel="noopener noreferrer"
                        class="mt-1 w-full inline-flex items-center justify-center gap-2 text-white font-bold text-sm py-3 px-4 rounded-xl bg-[#800020]"
                    { "🔴 Ver Tour 360°" }
                } @else {
                    button disabled class="mt-1 w-full inline-flex items-center justify-center gap-2 bg-gray-200 text-gray-400 font-bold text-sm py-3 px-4 rounded-xl cursor-not-allowed" {
                        "Tour próximamente"
                    }
                }
            }
        }
    }
}
