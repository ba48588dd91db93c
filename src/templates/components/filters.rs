use crate::domain::logic::{results_summary, CatalogFilters, PRICE_RANGES};
use crate::templates::content::VINOTINTO;
use maud::{html, Markup};

/// Search box + price select. Submits as a plain GET so the page works without JS.
pub fn filter_bar(filters: &CatalogFilters, result_count: usize) -> Markup {
    html! {
        form method="get" action="/#catalogo" class="mb-8 rounded-2xl border border-gray-200 bg-white shadow-sm p-4 sm:p-5" {
            div class="flex flex-col sm:flex-row gap-3" {
                label class="sr-only" for="q" { "Buscar" }
                input type="text" id="q" name="q" value=(filters.query)
                    placeholder="Buscar por código o barrio…"
                    class="flex-1 px-4 py-3 rounded-xl border border-gray-200 bg-gray-50 text-sm text-gray-800";

                label class="sr-only" for="rango" { "Rango de precio" }
                select id="rango" name="rango" class="sm:w-56 px-4 py-3 rounded-xl border border-gray-200 bg-gray-50 text-sm text-gray-800" {
                    @for (i, range) in PRICE_RANGES.iter().enumerate() {
                        option value=(i) selected[i == filters.range_index] { (range.label) }
                    }
                }

                button type="submit" class="px-5 py-3 rounded-xl text-white text-sm font-semibold" style=(format!("background-color: {VINOTINTO}")) {
                    "Buscar"
                }
            }

            div class="flex items-center justify-between mt-3 pt-3 border-t border-gray-100" {
                p class="text-xs text-gray-400" id="result-summary" { (results_summary(result_count)) }
                @if filters.is_active() {
                    a href="/#catalogo" class="text-xs font-medium" style=(format!("color: {VINOTINTO}")) {
                        "✕ Limpiar filtros"
                    }
                }
            }
        }
    }
}
