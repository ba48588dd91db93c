// templates/pages/home.rs

use crate::domain::logic::CatalogFilters;
use crate::domain::Property;
use crate::templates::components::{filter_bar, footer, hero, property_card, testimonials};
use crate::templates::content::{GRIS_CARBON, PAGE_TITLE, VINOTINTO};
use crate::templates::site_layout;
use maud::{html, Markup};

pub struct HomeVm<'a> {
    pub properties: &'a [Property],
    pub filters: &'a CatalogFilters,
    pub placeholder: &'a str,
    pub year: i32,
}

fn empty_state() -> Markup {
    html! {
        div class="flex flex-col items-center justify-center py-20 text-center" {
            h3 class="text-lg font-bold mb-1" style=(format!("color: {GRIS_CARBON}")) { "No encontramos inmuebles" }
            p class="text-sm text-gray-400 max-w-sm mb-4" {
                "Intenta ajustar tu búsqueda o el rango de precios para ver más opciones."
            }
            a href="/#catalogo" class="inline-flex items-center gap-2 text-white text-sm font-semibold px-5 py-2.5 rounded-xl"
                style=(format!("background-color: {VINOTINTO}"))
            { "Ver todos los inmuebles" }
        }
    }
}

pub fn home_page(vm: &HomeVm) -> Markup {
    let filtered = vm.filters.apply(vm.properties);

    site_layout(
        PAGE_TITLE,
        html! {
            (hero())

            section id="catalogo" class="w-full max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12 scroll-mt-20" {
                div class="text-center mb-10" {
                    h1 class="text-3xl sm:text-4xl font-extrabold tracking-tight" style=(format!("color: {GRIS_CARBON}")) {
                        "Catálogo de Inmuebles"
                    }
                    p class="text-gray-500 text-base max-w-xl mx-auto" {
                        "Explora nuestra selección exclusiva con respaldo jurídico incluido."
                    }
                }

                (filter_bar(vm.filters, filtered.len()))

                @if filtered.is_empty() {
                    (empty_state())
                } @else {
                    div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6" {
                        @for property in &filtered {
                            (property_card(property, vm.placeholder))
                        }
                    }
                }
            }

            (testimonials())
            (footer(vm.year))
        },
    )
}
