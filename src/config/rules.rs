//! Static name-normalization tables: token vocabulary, exception map and
//! permanent-employee roster. Loaded once, read-only; the engine never
//! mutates them.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Known name tokens produced by the biometric devices on site.
/// Segmentation consumes the longest matching entry first, so multi-word
/// compounds may appear alongside their components.
const VOCABULARY: &[&str] = &[
    "EMMANUEL",
    "MACALINAO",
    "ARBIE",
    "TALUCOD",
    "ESTRELLA",
    "JOMAR",
    "PIMENTEL",
    "KRIZ-TATUM OLAES LAPPAY", // single entry, device emits it unspaced
    "KATRINE",
    "NAVAJA",
    "MARIA",
    "KATRINA",
    "MALLILLIN",
    "MARICRIS",
    "PEREZ",
    "MARINEL",
    "MACARANAS",
    "MARY",
    "JANE",
    "TENORIO",
    "JOY",
    "MENGULLO",
    "MARK",
    "JEFFERSON",
    "CALUAG",
    "ROHN",
    "JERICHO",
    "DAYAP",
    "ROLANDO",
    "RIVERA",
    "RONA",
    "MAY",
    "MARIN",
    "STEPHANIE",
    "MAE",
    "VALIENTE",
    "SHARA",
    "BERMUDEZ",
    "RAMONA",
    "ALLAUIGAN",
    "DIANCIN",
    "ERA",
    "BABBLE",
    "CASTRO",
    "OFELIA",
    "SARDENIA",
    "CONAG",
    "REIZLE",
    "GACUSAN",
    "RENZ",
    "VIVIANNE",
    "VISPERAS",
    "CUNAN",
    "CYNTHIA",
    "MANANGU",
    "SAGUM",
    "KENNETH",
    "RODRIGUEZ",
    "ROL",
    "ARMANDO",
    "GUIAO",
    "SAWIT",
    "BHEBLIA",
    "PASAGDAN",
    "JETHRO",
    "TORRES",
    "CERVANTES",
    "AURORA",
    "CRISTOBAL",
    "AQUINO",
    "JOSE",
    "WILFREDO",
    "LUCAS",
    "DANIEL",
    "RABARA",
    "DOMINGO",
    "DAN",
    "SAYTONO",
    "JESSICA",
    "GARCIA",
    "WINLOVE",
    "BERNALES",
    "DENNIS",
    "HERNANDEZ",
    "LOPEZ",
    "CHRISTIAN",
    "O.",
    "SANTOS",
    "EDMAR",
    "A.",
    "GALLARDO",
    "MICHAEL",
    "ESPOIR",
    "JOVEN",
    "DONNA",
    "BRIONES",
    "PERLITA",
    "CAPARAS",
    "EDUARDO",
    "MANLUNAS",
    "ALEXANDRE",
    "JUSTIN",
    "REPIA",
    "JAN",
    "CAMPUED",
    "JUAN",
    "DELA",
    "CRUZ",
];

/// Malformed variants the devices truncate or mangle beyond what
/// segmentation can recover. Keys are compared space-insensitively.
const EXCEPTIONS: &[(&str, &str)] = &[
    ("KRIZ-TATUM OLAES LAPPAY", "KRIZ-TATUM OLAES LAPPAY"),
    ("APRIL LYNN ESPAYOS NAVA", "APRIL LYNN ESPAYOS NAVA"),
    ("JOANAH MARIE PESCADOR O", "JOANAH MARIE PESCADOR O"),
    ("LIBRADO F GELLEZ JR", "LIBRADO F GELLEZ JR"),
    ("MELVIN ARIMAGAO MASIN", "MELVIN ARIMAGAO MASIN"),
    ("MARIANNE PASCUAL GONZAL", "MARIANNE PASCUAL GONZALES"),
    ("MARICRIS ACOSTA GONZALE", "MARICRIS ACOSTA GONZALES"),
    ("TERESA DELA CRUZ PARAIS", "TERESA DELA CRUZ PARAISO"),
    ("THELMA BATARA CASTRICIO", "THELMA BATARA CASTRICIONES"),
    ("MA LEONORAJIMENEZ VALIE", "MA LEONORA JIMENEZ VALIENTE"),
    ("ARGENTINA SEBASTIAN ABE", "ARGENTINA SEBASTIAN ABERIN"),
];

/// Canonical names of employees on permanent status.
/// Everyone else defaults to job-order.
const PERMANENT: &[&str] = &[
    "DANIEL RABARA DOMINGO",
    "CYNTHIA MANANGU SAGUM",
    "AURORA CRISTOBAL AQUINO",
    "JOSE WILFREDO LUCAS",
    "PERLITA CAPARAS",
    "EDUARDO MANLUNAS",
];

/// Immutable rule tables injected into the normalizer and the ingest
/// pipeline. May be overridden wholesale from a YAML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameRules {
    pub vocabulary: Vec<String>,
    pub exceptions: Vec<(String, String)>,
    pub permanent: HashSet<String>,
}

impl Default for NameRules {
    fn default() -> Self {
        Self {
            vocabulary: VOCABULARY.iter().map(|s| s.to_string()).collect(),
            exceptions: EXCEPTIONS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            permanent: PERMANENT.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl NameRules {
    /// Load a full rule set from a YAML file.
    pub fn load_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("invalid rules file: {e}")))
    }

    pub fn is_permanent(&self, canonical_name: &str) -> bool {
        self.permanent.contains(canonical_name)
    }
}
