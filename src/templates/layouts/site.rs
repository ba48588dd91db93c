use crate::templates::content::{BRAND, PAGE_DESCRIPTION, VINOTINTO, WHATSAPP_URL};
use maud::{html, Markup, DOCTYPE};

pub fn site_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(PAGE_DESCRIPTION);
                title { (title) }
                link rel="preconnect" href="https://fonts.googleapis.com";
                link rel="stylesheet" href="https://fonts.googleapis.com/css2?family=Playfair+Display:ital,wght@0,400;0,600;0,700;1,400&display=swap";
                script src="https://cdn.tailwindcss.com" {}
            }
            body class="min-h-screen bg-[#F9F9F9]" {
                header class="sticky top-0 z-40 bg-white/95 border-b border-gray-200 shadow-sm" {
                    div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between" {
                        a href="/" class="flex items-center gap-3" {
                            span class="w-3 h-8 rounded-full block" style=(format!("background-color: {VINOTINTO}")) {}
                            span class="text-2xl font-bold tracking-wide" style=(format!("color: {VINOTINTO}; font-family: 'Playfair Display', serif")) {
                                (BRAND)
                            }
                        }
                        a href=(WHATSAPP_URL) target="_blank" rel="noopener noreferrer"
                            class="hidden sm:flex items-center gap-2 px-5 py-2.5 bg-[#25D366] text-white font-semibold rounded-full shadow-md text-sm"
                        {
                            "Contáctanos"
                        }
                    }
                }
                main { (content) }
                a href=(WHATSAPP_URL) target="_blank" rel="noopener noreferrer"
                    class="fixed bottom-6 right-6 z-50 flex items-center justify-center w-14 h-14 bg-[#25D366] text-white rounded-full shadow-lg"
                    aria-label="Contactar por WhatsApp"
                {
                    "WA"
                }
            }
        }
    }
}
