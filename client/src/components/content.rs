//! Static copy for the landing page sections.
//!
//! Call-to-action labels double as the plan interest stored with each lead,
//! so they are kept here next to the copy that triggers them.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const BRAND: &str = "SosaPerera&Co";

pub const CTA_NAVBAR: &str = "Navbar CTA";
pub const CTA_LOGIN: &str = "Login Request";
pub const CTA_HERO_PRIMARY: &str = "Hero Principal";
pub const CTA_HERO_SECONDARY: &str = "Hero Secundario";
pub const CTA_FINAL: &str = "Final CTA";
pub const CTA_FINAL_FREE: &str = "Final CTA Free";

/// In-page anchor in the top navigation.
#[derive(Clone, Copy, Debug)]
pub struct NavLink {
    pub href: &'static str,
    pub text: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "#how-it-works", text: "Cómo funciona" },
    NavLink { href: "#benefits", text: "Beneficios" },
    NavLink { href: "#pricing", text: "Precios" },
];

pub const TRUST_BADGES: &[&str] = &[
    "Cumplimos estándares Meta & Google",
    "Tus datos están 100% seguros",
    "Cancela cuando quieras",
    "Sin contratos forzosos",
];

/// Icon glyph plus title and body text.
#[derive(Clone, Copy, Debug)]
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const PAIN_POINTS: &[Card] = &[
    Card {
        icon: "⏱",
        title: "No tienes tiempo",
        body: "Dirigir tu negocio te consume todo el día. No puedes estar pegado a la computadora aprendiendo marketing.",
    },
    Card {
        icon: "📈",
        title: "Es complicado",
        body: "Facebook Ads Manager parece cabina de avión. Un error y gastas presupuesto sin resultados.",
    },
    Card {
        icon: "📣",
        title: "Agencias costosas",
        body: "Contratar una agencia tradicional te cuesta más que la misma publicidad. Inviable para empezar.",
    },
];

/// Numbered step in "how it works".
#[derive(Clone, Copy, Debug)]
pub struct Step {
    pub num: &'static str,
    pub card: Card,
}

pub const STEPS: &[Step] = &[
    Step {
        num: "01",
        card: Card {
            icon: "▦",
            title: "Sube tus fotos o videos",
            body: "Toma una foto con tu celular o sube un video de tu producto o servicio. Sin ediciones complejas.",
        },
    },
    Step {
        num: "02",
        card: Card {
            icon: "🤖",
            title: "Nuestra IA publica sola",
            body: "El sistema redacta el texto, elige dónde publicar (Facebook, Instagram, Google) y lanza la campaña.",
        },
    },
    Step {
        num: "03",
        card: Card {
            icon: "💬",
            title: "Recibe clientes",
            body: "Tu teléfono empieza a sonar. Te llegan mensajes y reportes simples: 'hoy ganaste 5 clientes'.",
        },
    },
];

pub const BENEFITS: &[&str] = &[
    "Más clientes sin saber marketing",
    "Costo mensual muy accesible",
    "Todo se publica automático",
    "La IA ahorra tu presupuesto",
    "Reportes simples en español",
    "Ideal para negocios en Oaxaca",
];

/// `(icon, title)` for each business kind the product serves.
pub const USE_CASES: &[(&str, &str)] = &[
    ("🏬", "Tiendas y Ropa"),
    ("🍽", "Restaurantes"),
    ("🔧", "Talleres"),
    ("✂", "Estéticas"),
    ("🛍", "Comercio Local"),
    ("⚡", "Canchas Deportivas"),
];

/// One pricing tier. `name` is also the CTA label for its button.
#[derive(Clone, Copy, Debug)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub badge: Option<&'static str>,
}

impl Plan {
    /// Highlighted tiers carry a badge.
    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.badge.is_some()
    }
}

pub const PLAN_BUTTON_TEXT: &str = "Comenzar Ahora";

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Starter Ads",
        price: "$199",
        period: "MXN / mes",
        description: "Ideal para comenzar a anunciar sin complicaciones.",
        features: &[
            "Creación automática de campañas en Meta (Facebook + Instagram)",
            "Subida automática de anuncios",
            "Creatividades generadas con IA (hasta 5 por mes)",
            "Dashboard básico con métricas esenciales",
            "Categorización básica de leads",
            "Análisis simple de rendimiento",
            "Soporte estándar (24–48h)",
        ],
        badge: None,
    },
    Plan {
        name: "Smart Ads + IA",
        price: "$499",
        period: "MXN / mes",
        description: "Automatiza tus mensajes y mejora tus resultados con inteligencia artificial.",
        features: &[
            "Todo lo del Plan Starter",
            "IA contestando mensajes 24/7 (WhatsApp, Messenger, IG DM)",
            "Configuración personalizada de la IA",
            "Monitoreo automático de campañas",
            "Alertas de bajo rendimiento",
            "Análisis avanzado con IA experta en marketing",
            "Dashboard mejorado (costo por lead, embudo básico)",
            "Categorización avanzada de leads",
        ],
        badge: Some("Más Popular"),
    },
    Plan {
        name: "Performance Pro",
        price: "$999",
        period: "MXN / mes",
        description: "Tu publicidad en piloto automático en Meta + Google Ads.",
        features: &[
            "Todo lo del Plan Smart Ads",
            "Optimización automática de campañas en Meta",
            "Insights avanzados y recomendaciones accionables con IA",
            "Funnels completos (descubrimiento → conversión)",
            "Integración completa con Google Ads",
            "Campañas coordinadas multi-plataforma",
            "Dashboard pro con análisis profundo por segmento",
            "Reporte semanal automático",
            "Soporte prioritario",
        ],
        badge: None,
    },
];

pub const PRICING_GUARANTEES: &[&str] = &[
    "Cancelación en cualquier momento",
    "Sin contratos forzosos",
    "Ideal para PYMES",
];

pub const INSTAGRAM_URL: &str = "https://www.instagram.com/sosapereraco/";
pub const FOOTER_NOTE: &str = "© 2025 SosaPerera&Co Oaxaca. Hecho para PYMES.";
