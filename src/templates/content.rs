// Static copy for the catalog page.

pub const BRAND: &str = "Buen Futuro";
pub const VINOTINTO: &str = "#800020";
pub const GRIS_CARBON: &str = "#2D2D2D";

pub const PAGE_TITLE: &str = "Buen Futuro | Apartamentos en Bogotá con Tour 360°";
pub const PAGE_DESCRIPTION: &str = "Encuentra tu próximo hogar en Bogotá con recorridos virtuales 360°. Asesoría jurídica gratuita en cada negociación.";

pub const WHATSAPP_URL: &str = "https://wa.me/573108074915?text=Hola%2C%20me%20interesa%20conocer%20m%C3%A1s%20sobre%20los%20apartamentos%20disponibles.";

pub struct Testimonial {
    pub name: &'static str,
    pub profile: &'static str,
    pub text: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 7] = [
    Testimonial {
        name: "Dr. Carlos Mendoza",
        profile: "Abogado Corporativo",
        text: "La asesoría jurídica que recibí fue impecable. Entendí cada cláusula del contrato y me sentí completamente protegido en la negociación.",
    },
    Testimonial {
        name: "Valentina Ríos",
        profile: "Inversionista Inmobiliaria",
        text: "He comprado tres propiedades a través de Buen Futuro. El tour 360° me ahorra viajes innecesarios y la rentabilidad ha superado mis expectativas.",
    },
    Testimonial {
        name: "Familia Gutiérrez-Mora",
        profile: "Compradores de Primera Vivienda",
        text: "Éramos novatos comprando nuestro primer apartamento. Nos guiaron paso a paso, desde el tour virtual hasta la firma de escrituras.",
    },
    Testimonial {
        name: "Dra. Lucía Fernández",
        profile: "Abogada de Familia",
        text: "Como colega jurídica, valoro enormemente la transparencia en los títulos de propiedad. Aquí todo está en regla desde el primer día.",
    },
    Testimonial {
        name: "Roberto Salamanca",
        profile: "Inversionista Independiente",
        text: "El catálogo virtual 360° es una ventaja enorme. Pude comparar cinco apartamentos en una tarde sin salir de mi oficina en Medellín.",
    },
    Testimonial {
        name: "Andrés y Patricia Lozano",
        profile: "Familia en Crecimiento",
        text: "Encontramos el apartamento perfecto en Cedritos para nuestra familia. El acompañamiento post-venta también fue excelente.",
    },
    Testimonial {
        name: "Ing. Mauricio Triana",
        profile: "Empresario e Inversionista",
        text: "Seriedad, respaldo legal y tecnología de punta. Buen Futuro es sin duda la plataforma más confiable del mercado inmobiliario bogotano.",
    },
];
