use strum_macros::{Display, EnumIter, EnumString};

/// Requests the local matcher knows how to answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Intent {
    Greeting,
    RoomService,
    Wifi,
    Housekeeping,
    LateCheckout,
    LocalGuide,
    Facilities,
    Default,
}

/// Checked in order; the first intent with a matching keyword wins.
const PRIORITY: [Intent; 7] = [
    Intent::LateCheckout,
    Intent::RoomService,
    Intent::Wifi,
    Intent::Housekeeping,
    Intent::Facilities,
    Intent::LocalGuide,
    Intent::Greeting,
];

impl Intent {
    /// Keywords match whole words; a trailing `*` marks a stem matched at the
    /// start of a word, so `towel*` also hits `towels`.
    fn keywords(&self) -> &'static [&'static str] {
        match self {
            Intent::LateCheckout => &[
                "late checkout",
                "late check out",
                "checkout",
                "check out",
                "salida tard*",
                "depart tardif",
                "départ tardif",
                "المغادرة",
            ],
            Intent::RoomService => &[
                "room service",
                "menu",
                "menú",
                "food",
                "hungry",
                "order*",
                "pizza*",
                "burger*",
                "pasta",
                "dessert*",
                "servicio a la habitaci*",
                "comida*",
                "pedido*",
                "service en chambre",
                "repas",
                "nourriture",
                "خدمة الغرف",
                "طعام",
            ],
            Intent::Wifi => &[
                "wifi",
                "wi fi",
                "internet",
                "password*",
                "contraseña",
                "mot de passe",
                "واي فاي",
                "انترنت",
                "الإنترنت",
            ],
            Intent::Housekeeping => &[
                "housekeeping",
                "towel*",
                "clean*",
                "toiletr*",
                "soap",
                "shampoo*",
                "pillow*",
                "blanket*",
                "toalla*",
                "limpieza",
                "almohada*",
                "manta*",
                "ménage",
                "serviette*",
                "oreiller*",
                "couverture*",
                "nettoyage",
                "مناشف",
                "تنظيف",
            ],
            Intent::Facilities => &[
                "facilit*",
                "pool",
                "pools",
                "gym",
                "fitness",
                "spa",
                "business center",
                "instalaciones",
                "piscina",
                "gimnasio",
                "installations",
                "piscine",
                "salle de sport",
                "مرافق",
                "مسبح",
            ],
            Intent::LocalGuide => &[
                "local guide",
                "local",
                "nearby",
                "attraction*",
                "restaurant*",
                "museum*",
                "shopping",
                "sightseeing",
                "cerca",
                "atracci*",
                "museo*",
                "compras",
                "à proximité",
                "musée",
                "visiter",
                "معالم",
                "مطعم",
            ],
            Intent::Greeting => &[
                "hello",
                "hi",
                "hey",
                "good morning",
                "good evening",
                "hola",
                "buenos",
                "bonjour",
                "bonsoir",
                "salut",
                "مرحبا",
                "السلام",
            ],
            Intent::Default => &[],
        }
    }

    /// Picks the intent for a guest utterance
    pub fn classify(text: &str) -> Intent {
        let haystack = format!(" {} ", normalize(text));

        PRIORITY
            .into_iter()
            .find(|intent| {
                intent
                    .keywords()
                    .iter()
                    .any(|keyword| haystack.contains(&needle(keyword)))
            })
            .unwrap_or(Intent::Default)
    }
}

fn needle(keyword: &str) -> String {
    match keyword.strip_suffix('*') {
        Some(stem) => format!(" {}", normalize(stem)),
        None => format!(" {} ", normalize(keyword)),
    }
}

/// Lowercases and collapses punctuation, emoji and whitespace into single spaces
fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
