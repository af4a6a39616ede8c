//! Static lexicon tables
//!
//! Exclusion lists and term lexicons are configuration data, not logic.
//! They are versioned with the crate so the filter and classifier stay
//! reviewable independently of list edits.
//!
//! All lookups expect input already normalized with [`normalize`].

/// Place names the classifier must ignore even when tagged as a person.
/// Covers the administrative regions of the Distrito Federal plus common
/// address prefixes.
pub const IGNORED_PLACES: &[&str] = &[
    "plano piloto",
    "gama",
    "taguatinga",
    "brazlândia",
    "brazlandia",
    "sobradinho",
    "planaltina",
    "paranoá",
    "paranoa",
    "núcleo bandeirante",
    "ceilândia",
    "ceilandia",
    "guará",
    "guara",
    "cruzeiro",
    "samambaia",
    "santa maria",
    "são sebastião",
    "recanto das emas",
    "lago sul",
    "lago norte",
    "riacho fundo",
    "candangolândia",
    "águas claras",
    "aguas claras",
    "sudoeste",
    "octogonal",
    "varjão",
    "park way",
    "scia",
    "estrutural",
    "jardim botânico",
    "itapoã",
    "sia",
    "vicente pires",
    "fercal",
    "sol nascente",
    "arniqueira",
    "asa sul",
    "asa norte",
    "setor",
    "sqs",
    "sqn",
    "shis",
    "shin",
    "distrito federal",
    "brasília",
    "brasilia",
    "df",
    "norte",
    "sul",
    "leste",
    "oeste",
];

/// Organization names and org-noun markers the classifier must ignore.
pub const IGNORED_ORGS: &[&str] = &[
    "gdf",
    "cldf",
    "tcdf",
    "pcdf",
    "pmdf",
    "cbmdf",
    "detran",
    "detran-df",
    "der",
    "caesb",
    "neoenergia",
    "ceb",
    "novacap",
    "terracap",
    "codhab",
    "brb",
    "procon",
    "ses",
    "ses-df",
    "see",
    "see-df",
    "sef",
    "sefaz",
    "ssp",
    "ssp-df",
    "sedest",
    "agefis",
    "df legal",
    "slu",
    "adasa",
    "emater",
    "zoo",
    "metro",
    "metrô",
    "cgdf",
    "controladoria geral",
    "ouvidoria",
    "participa df",
    "participa-df",
    "tjdft",
    "mpdft",
    "stf",
    "stj",
    "tst",
    "tse",
    "mpu",
    "agu",
    "cgu",
    "tcu",
    "inss",
    "receita federal",
    "polícia federal",
    "policia federal",
    "secretaria",
    "ministério",
    "ministerio",
    "diretoria",
    "gerência",
    "gerencia",
    "coordenação",
    "coordenacao",
    "presidência",
    "presidencia",
    "agência",
    "agencia",
    "instituto",
    "fundação",
    "fundacao",
    "departamento",
    "defensoria pública",
    "ministério público",
    "conselho tutelar",
];

/// Legislative markers: a match right after one of these tokens is an
/// administrative citation, not a personal identifier.
pub const LEGAL_MARKERS: &[&str] = &["lei", "decreto", "portaria"];

/// Health-condition terms tagged SENSIVEL_SAUDE by the lexicon recognizer.
pub const HEALTH_TERMS: &[&str] = &[
    "hiv",
    "aids",
    "câncer",
    "cancer",
    "esquizofrenia",
    "autismo",
    "tumor",
    "depressão",
    "depressao",
];

/// Religion terms tagged SENSIVEL_RELIGIAO.
pub const RELIGION_TERMS: &[&str] = &[
    "umbanda",
    "candomblé",
    "candomble",
    "evangélico",
    "evangelico",
    "católico",
    "catolico",
    "espírita",
    "espirita",
    "judeu",
];

/// Ethnicity/race terms tagged SENSIVEL_RACA.
pub const ETHNICITY_TERMS: &[&str] = &["negro", "pardo", "indígena", "indigena", "quilombola"];

/// First-person declarative markers used by the contextual matcher
/// ("sou portador de...", "tenho...").
pub const DECLARATIVE_MARKERS: &[&str] = &[
    "eu",
    "meu",
    "minha",
    "sou",
    "tenho",
    "fui",
    "estou",
    "portador",
    "portadora",
];

/// Connectives allowed inside a capitalized name run ("Maria da Silva").
pub const NAME_CONNECTIVES: &[&str] = &["de", "da", "do", "das", "dos", "e"];

/// Case-fold and trim an entity text before any lexicon lookup.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Check if a normalized entity text is on either exclusion list.
pub fn is_excluded_name(normalized: &str) -> bool {
    IGNORED_PLACES.contains(&normalized) || IGNORED_ORGS.contains(&normalized)
}

/// Check if a normalized token is a legislative marker.
pub fn is_legal_marker(normalized: &str) -> bool {
    LEGAL_MARKERS.contains(&normalized)
}
