//! 植物目錄：季節×經驗等級的候選清單、伴生植物、照護說明與能力標籤。
//!
//! 目錄在啟動時建立一次，之後唯讀並以 `Arc` 共享給推薦引擎。
//! 內建資料來自 [`PlantCatalog::builtin`]，也可以從 TOML 檔案載入自訂目錄。

use crate::core::dedup::{contains_ignore_case, names_overlap};
use crate::domain::model::{ExperienceLevel, PlantTag, Season};
use crate::utils::error::{RecoError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

const DEFAULT_CARE: &str =
    "Surveillez l'arrosage et l'apparition de maladies ou ravageurs régulièrement.";

const DEFAULT_COMPANIONS: &[&str] = &[
    "Basilic",
    "Œillets d'Inde",
    "Souci",
    "Capucine",
    "Bourrache",
];

const BUILTIN_CANDIDATES: &[(Season, ExperienceLevel, &[&str])] = &[
    (
        Season::Spring,
        ExperienceLevel::Beginner,
        &["Radis", "Laitue", "Épinards", "Petits pois", "Oignons verts"],
    ),
    (
        Season::Spring,
        ExperienceLevel::Intermediate,
        &["Carottes", "Betteraves", "Oignons", "Pommes de terre précoces", "Chou-fleur"],
    ),
    (
        Season::Spring,
        ExperienceLevel::Expert,
        &[
            "Artichauts",
            "Asperges",
            "Aubergines (sous abri)",
            "Poivrons (sous abri)",
            "Tomates (sous abri)",
        ],
    ),
    (
        Season::Summer,
        ExperienceLevel::Beginner,
        &["Tomates cerises", "Concombres", "Courgettes", "Basilic", "Ciboulette"],
    ),
    (
        Season::Summer,
        ExperienceLevel::Intermediate,
        &["Aubergines", "Poivrons", "Haricots verts", "Maïs doux", "Tomates"],
    ),
    (
        Season::Summer,
        ExperienceLevel::Expert,
        &["Melons", "Pastèques", "Patates douces", "Okra", "Piments forts"],
    ),
    (
        Season::Autumn,
        ExperienceLevel::Beginner,
        &["Mâche", "Épinards", "Roquette", "Radis", "Laitue d'hiver"],
    ),
    (
        Season::Autumn,
        ExperienceLevel::Intermediate,
        &["Chou frisé", "Poireaux", "Fenouil", "Carottes d'hiver", "Navets"],
    ),
    (
        Season::Autumn,
        ExperienceLevel::Expert,
        &["Brocoli", "Choux de Bruxelles", "Céleri-rave", "Artichauts d'hiver", "Crosnes"],
    ),
    (
        Season::Winter,
        ExperienceLevel::Beginner,
        &["Ail", "Oignons verts", "Mâche", "Épinards d'hiver", "Ciboulette"],
    ),
    (
        Season::Winter,
        ExperienceLevel::Intermediate,
        &["Chou-fleur", "Chou", "Poireaux", "Navets d'hiver", "Carottes d'hiver"],
    ),
    (
        Season::Winter,
        ExperienceLevel::Expert,
        &["Endives", "Rhubarbe", "Choux frisés", "Panais", "Scorsonère"],
    ),
];

const BUILTIN_COMPANIONS: &[(&str, &[&str])] = &[
    ("Tomate", &["Basilic", "Œillets d'Inde", "Oignons", "Carottes"]),
    ("Carotte", &["Oignons", "Poireaux", "Romarin", "Sauge"]),
    ("Concombre", &["Tournesol", "Haricots", "Laitue", "Radis"]),
    ("Courgette", &["Capucine", "Haricots", "Maïs", "Menthe"]),
    ("Haricot", &["Carottes", "Concombres", "Fraises", "Maïs"]),
    ("Laitue", &["Carottes", "Fraises", "Oignons", "Radis"]),
    ("Oignon", &["Carottes", "Betteraves", "Tomates", "Laitue"]),
    ("Poivron", &["Basilic", "Oignons", "Carottes", "Tomates"]),
    ("Aubergine", &["Haricots", "Thym", "Capucine"]),
    ("Radis", &["Carottes", "Épinards", "Concombres", "Laitue"]),
];

const BUILTIN_CARE: &[(&str, &str)] = &[
    (
        "Tomate",
        "Arrosez régulièrement au pied sans mouiller le feuillage. Pincez les gourmands et tuteurez les tiges.",
    ),
    (
        "Carotte",
        "Maintenez le sol légèrement humide pour une bonne germination et un bon développement. Éclaircissez pour permettre un bon développement racinaire.",
    ),
    (
        "Concombre",
        "Arrosez abondamment par temps chaud et tuteurez pour gagner de l'espace. Récoltez régulièrement pour stimuler la production.",
    ),
    (
        "Courgette",
        "Arrosez au pied sans mouiller les feuilles pour éviter l'oïdium. Récoltez régulièrement pour prolonger la production.",
    ),
    (
        "Haricot",
        "Tuteurez les variétés grimpantes et arrosez en période de floraison. Récoltez régulièrement pour stimuler la production.",
    ),
    ("Laitue", "Arrosez régulièrement mais sans excès. Protégez des fortes chaleurs en été."),
    (
        "Radis",
        "Maintenez le sol frais et humide. Récoltez dès qu'ils atteignent leur taille normale pour éviter qu'ils deviennent creux ou piquants.",
    ),
];

const BUILTIN_TAGS: &[(&str, &[PlantTag])] = &[
    ("Tomate", &[PlantTag::Thirsty, PlantTag::Tall]),
    ("Concombre", &[PlantTag::Thirsty]),
    ("Courgette", &[PlantTag::Thirsty, PlantTag::Spreading]),
    ("Aubergine", &[PlantTag::Thirsty]),
    ("Poivron", &[PlantTag::Thirsty]),
    ("Romarin", &[PlantTag::DroughtTolerant]),
    ("Thym", &[PlantTag::DroughtTolerant]),
    ("Sauge", &[PlantTag::DroughtTolerant]),
    ("Lavande", &[PlantTag::DroughtTolerant]),
    ("Maïs", &[PlantTag::Tall]),
    ("Tournesol", &[PlantTag::Tall]),
    ("Haricot grimpant", &[PlantTag::Tall]),
    ("Potiron", &[PlantTag::Spreading]),
    ("Courge", &[PlantTag::Spreading]),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanionEntry {
    pub plant: String,
    pub companions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareEntry {
    pub plant: String,
    pub instructions: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagEntry {
    pub keyword: String,
    pub tags: Vec<PlantTag>,
}

/// TOML 目錄檔案的結構
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDefinition {
    pub default_care: Option<String>,
    pub default_companions: Option<Vec<String>>,
    /// season -> experience level -> plants
    pub candidates: BTreeMap<String, BTreeMap<String, Vec<String>>>,
    #[serde(default)]
    pub companions: Vec<CompanionEntry>,
    #[serde(default)]
    pub care: Vec<CareEntry>,
    #[serde(default)]
    pub tags: Vec<TagEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlantCatalog {
    candidates: BTreeMap<(Season, ExperienceLevel), Vec<String>>,
    companions: Vec<CompanionEntry>,
    care: Vec<CareEntry>,
    tags: Vec<TagEntry>,
    default_care: String,
    default_companions: Vec<String>,
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl PlantCatalog {
    /// 內建的法文目錄
    pub fn builtin() -> Self {
        let candidates = BUILTIN_CANDIDATES
            .iter()
            .map(|(season, level, plants)| ((*season, *level), to_strings(plants)))
            .collect();

        let companions = BUILTIN_COMPANIONS
            .iter()
            .map(|(plant, companions)| CompanionEntry {
                plant: plant.to_string(),
                companions: to_strings(companions),
            })
            .collect();

        let care = BUILTIN_CARE
            .iter()
            .map(|(plant, instructions)| CareEntry {
                plant: plant.to_string(),
                instructions: instructions.to_string(),
            })
            .collect();

        let tags = BUILTIN_TAGS
            .iter()
            .map(|(keyword, tags)| TagEntry {
                keyword: keyword.to_string(),
                tags: tags.to_vec(),
            })
            .collect();

        Self {
            candidates,
            companions,
            care,
            tags,
            default_care: DEFAULT_CARE.to_string(),
            default_companions: to_strings(DEFAULT_COMPANIONS),
        }
    }

    /// 從 TOML 檔案載入自訂目錄
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let definition: CatalogDefinition =
            toml::from_str(content).map_err(|e| RecoError::ConfigurationError {
                message: format!("Catalog TOML parsing error: {}", e),
            })?;
        Self::from_definition(definition)
    }

    /// 由定義建立目錄並檢查完整性；缺少任何季節×等級組合都會失敗
    pub fn from_definition(definition: CatalogDefinition) -> Result<Self> {
        let mut candidates = BTreeMap::new();
        for (season_key, levels) in definition.candidates {
            let season: Season = season_key.parse()?;
            for (level_key, plants) in levels {
                let level: ExperienceLevel = level_key.parse()?;
                candidates.insert((season, level), plants);
            }
        }

        let catalog = Self {
            candidates,
            companions: definition.companions,
            care: definition.care,
            tags: definition.tags,
            default_care: definition.default_care.unwrap_or_else(|| DEFAULT_CARE.to_string()),
            default_companions: definition
                .default_companions
                .unwrap_or_else(|| to_strings(DEFAULT_COMPANIONS)),
        };

        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<()> {
        for season in Season::ALL {
            for level in ExperienceLevel::ALL {
                match self.candidates.get(&(season, level)) {
                    Some(plants) if !plants.is_empty() => {}
                    Some(_) => {
                        return Err(RecoError::ConfigurationError {
                            message: format!("empty candidate list for {}/{}", season, level),
                        })
                    }
                    None => {
                        return Err(RecoError::ConfigurationError {
                            message: format!("no candidate list for {}/{}", season, level),
                        })
                    }
                }
            }
        }

        if self.default_companions.is_empty() {
            return Err(RecoError::ConfigurationError {
                message: "default_companions cannot be empty".to_string(),
            });
        }

        Ok(())
    }

    pub fn candidates_for(&self, season: Season, level: ExperienceLevel) -> Result<&[String]> {
        self.candidates
            .get(&(season, level))
            .map(Vec::as_slice)
            .ok_or_else(|| RecoError::ConfigurationError {
                message: format!("no candidate list for {}/{}", season, level),
            })
    }

    /// 第一個被植物名稱包含的目錄鍵勝出，例如 "Tomate cerise" 對應 "Tomate"
    pub fn companions_of(&self, plant: &str) -> &[String] {
        self.companions
            .iter()
            .find(|entry| contains_ignore_case(plant, &entry.plant))
            .map(|entry| entry.companions.as_slice())
            .unwrap_or(&[])
    }

    pub fn care_instructions_of(&self, plant: &str) -> &str {
        self.care
            .iter()
            .find(|entry| contains_ignore_case(plant, &entry.plant))
            .map(|entry| entry.instructions.as_str())
            .unwrap_or(&self.default_care)
    }

    pub fn tags_of(&self, plant: &str) -> BTreeSet<PlantTag> {
        self.tags
            .iter()
            .filter(|entry| names_overlap(plant, &entry.keyword))
            .flat_map(|entry| entry.tags.iter().copied())
            .collect()
    }

    pub fn is_in(&self, plant: &str, tag: PlantTag) -> bool {
        self.tags_of(plant).contains(&tag)
    }

    pub fn any_tagged<S: AsRef<str>>(&self, plants: &[S], tag: PlantTag) -> bool {
        plants.iter().any(|plant| self.is_in(plant.as_ref(), tag))
    }

    pub fn default_companions(&self) -> &[String] {
        &self.default_companions
    }

    #[cfg(test)]
    pub(crate) fn without_candidates(mut self, season: Season, level: ExperienceLevel) -> Self {
        self.candidates.remove(&(season, level));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_complete() {
        let catalog = PlantCatalog::builtin();
        assert!(catalog.validate().is_ok());

        for season in Season::ALL {
            for level in ExperienceLevel::ALL {
                assert_eq!(catalog.candidates_for(season, level).unwrap().len(), 5);
            }
        }
    }

    #[test]
    fn test_companions_match_by_containment() {
        let catalog = PlantCatalog::builtin();
        assert_eq!(
            catalog.companions_of("Tomate cerise"),
            &["Basilic", "Œillets d'Inde", "Oignons", "Carottes"]
        );
        assert_eq!(catalog.companions_of("carottes nantaises")[0], "Oignons");
        assert!(catalog.companions_of("Fraisier").is_empty());
    }

    #[test]
    fn test_first_matching_companion_key_wins() {
        let catalog = PlantCatalog::builtin();
        // "Laitue" 排在 "Radis" 之前
        assert_eq!(catalog.companions_of("Laitue et radis")[0], "Carottes");
        assert_eq!(catalog.companions_of("Laitue et radis")[1], "Fraises");
    }

    #[test]
    fn test_care_instructions_default_when_unknown() {
        let catalog = PlantCatalog::builtin();
        assert!(catalog.care_instructions_of("Tomate cerise").starts_with("Arrosez régulièrement"));
        assert_eq!(catalog.care_instructions_of("Fraisier"), DEFAULT_CARE);
    }

    #[test]
    fn test_carrot_care_text() {
        let catalog = PlantCatalog::builtin();
        assert_eq!(
            catalog.care_instructions_of("Carottes nantaises"),
            "Maintenez le sol légèrement humide pour une bonne germination et un bon développement. Éclaircissez pour permettre un bon développement racinaire."
        );
    }

    #[test]
    fn test_tags_use_bidirectional_containment() {
        let catalog = PlantCatalog::builtin();

        assert!(catalog.is_in("Tomate cerise", PlantTag::Thirsty));
        assert!(catalog.is_in("Tomate cerise", PlantTag::Tall));
        // 關鍵字包含植物名稱
        assert!(catalog.is_in("haricot", PlantTag::Tall));
        assert!(catalog.is_in("Thym citron", PlantTag::DroughtTolerant));
        assert!(!catalog.is_in("Laitue", PlantTag::Thirsty));

        let courgette = catalog.tags_of("Courgette ronde");
        assert!(courgette.contains(&PlantTag::Thirsty));
        assert!(courgette.contains(&PlantTag::Spreading));
    }

    #[test]
    fn test_catalog_from_toml() {
        let toml_content = r#"
default_companions = ["Souci"]

[candidates.printemps]
debutant = ["Radis"]
intermediaire = ["Carottes"]
expert = ["Asperges"]

[candidates."été"]
debutant = ["Courgettes"]
intermediaire = ["Tomates"]
expert = ["Melons"]

[candidates.automne]
debutant = ["Mâche"]
intermediaire = ["Poireaux"]
expert = ["Crosnes"]

[candidates.hiver]
debutant = ["Ail"]
intermediaire = ["Chou"]
expert = ["Panais"]

[[companions]]
plant = "Fraise"
companions = ["Ail", "Bourrache"]

[[tags]]
keyword = "Fraise"
tags = ["thirsty", "spreading"]
"#;

        let catalog = PlantCatalog::from_toml_str(toml_content).unwrap();
        assert_eq!(
            catalog.candidates_for(Season::Summer, ExperienceLevel::Expert).unwrap(),
            &["Melons"]
        );
        assert_eq!(catalog.companions_of("Fraise des bois"), &["Ail", "Bourrache"]);
        assert!(catalog.is_in("Fraise", PlantTag::Spreading));
        assert_eq!(catalog.default_companions(), &["Souci"]);
        assert_eq!(catalog.care_instructions_of("Fraise"), DEFAULT_CARE);
    }

    #[test]
    fn test_missing_season_level_pair_is_configuration_error() {
        let toml_content = r#"
[candidates.printemps]
debutant = ["Radis"]
"#;

        let err = PlantCatalog::from_toml_str(toml_content).unwrap_err();
        assert!(matches!(err, RecoError::ConfigurationError { .. }));
    }

    #[test]
    fn test_unknown_tag_is_configuration_error() {
        let toml_content = r#"
[candidates.printemps]
debutant = ["Radis"]

[[tags]]
keyword = "Radis"
tags = ["purple"]
"#;

        let err = PlantCatalog::from_toml_str(toml_content).unwrap_err();
        assert!(matches!(err, RecoError::ConfigurationError { .. }));
    }
}
