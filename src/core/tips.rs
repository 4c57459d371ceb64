use crate::domain::model::{CultivationType, ExperienceLevel, GardenProfile};
use chrono::{Datelike, NaiveDate};

const GENERAL_TIPS: &[&str] = &[
    "Pour économiser de l'espace, utilisez des tuteurs pour faire grimper vos plantes comme les haricots, concombres et tomates.",
    "Le paillage aide à réduire l'évaporation, limite les mauvaises herbes et enrichit progressivement le sol.",
    "Associez les tomates et le basilic : le basilic repousse certains insectes nuisibles et améliore le goût des tomates.",
    "Arrosez le matin tôt pour limiter l'évaporation et éviter les maladies fongiques.",
    "La rotation des cultures aide à prévenir les maladies et l'épuisement du sol.",
    "Les œillets d'Inde plantés dans le potager repoussent les nématodes et plusieurs insectes nuisibles.",
    "Récoltez vos légumes régulièrement pour encourager la production de nouveaux fruits.",
    "Les orties en purin font un excellent fertilisant naturel riche en azote.",
    "Les coccinelles sont des alliées précieuses contre les pucerons - attirez-les avec des fleurs comme les cosmos ou les soucis.",
];

const OPEN_GROUND_TIPS: &[&str] = &[
    "Travaillez votre sol à l'automne pour qu'il se décompacte naturellement pendant l'hiver.",
    "Un bon compost maison améliore considérablement la qualité de votre terre.",
    "Pensez à utiliser des engrais verts comme la moutarde ou la phacélie pour enrichir votre sol entre deux cultures.",
];

const CONTAINER_TIPS: &[&str] = &[
    "Vos bacs doivent avoir des trous de drainage pour éviter l'accumulation d'eau.",
    "Renouvelez partiellement le terreau de vos bacs chaque année pour maintenir sa fertilité.",
    "Dans des bacs, les plantes ont besoin d'être arrosées plus fréquemment qu'en pleine terre.",
];

const GREENHOUSE_TIPS: &[&str] = &[
    "N'oubliez pas d'aérer votre serre chaque jour, même en hiver, pour éviter l'humidité excessive.",
    "En été, un ombrage partiel de votre serre évitera la surchauffe de vos plantes.",
    "Dans une serre, surveillez particulièrement les invasions d'insectes qui peuvent se propager rapidement.",
];

const BEGINNER_TIPS: &[&str] = &[
    "Commencez par des légumes faciles comme les radis, la laitue et les courgettes.",
    "Tenez un journal de jardin pour noter vos observations et apprendre de vos expériences.",
    "N'hésitez pas à demander conseil à des jardiniers plus expérimentés ou à rejoindre un forum de jardinage.",
];

const INTERMEDIATE_TIPS: &[&str] = &[
    "Essayez de faire vos propres semis pour avoir plus de diversité et économiser.",
    "Expérimentez avec les cultures étagées pour optimiser votre espace.",
    "Les purins de plantes comme la consoude ou l'ortie font d'excellents engrais naturels.",
];

const EXPERT_TIPS: &[&str] = &[
    "Pensez à récolter et conserver vos propres graines pour les cultures de l'année suivante.",
    "Expérimentez avec la greffe pour certains légumes comme les tomates ou les aubergines.",
    "Créez votre propre calendrier de cultures adapté spécifiquement à votre microclimat.",
];

/// 每日一則園藝建議：一般建議 + 種植方式 + 經驗等級，依當天在年中的序數輪替
#[derive(Debug, Default, Clone, Copy)]
pub struct DailyTipSelector;

impl DailyTipSelector {
    pub fn new() -> Self {
        Self
    }

    pub fn pool_for(&self, profile: &GardenProfile) -> Vec<&'static str> {
        let culture: &[&str] = match profile.cultivation_type {
            CultivationType::OpenGround => OPEN_GROUND_TIPS,
            CultivationType::Container => CONTAINER_TIPS,
            CultivationType::Greenhouse => GREENHOUSE_TIPS,
            CultivationType::Unrecognized => &[],
        };
        let level: &[&str] = match profile.experience {
            ExperienceLevel::Beginner => BEGINNER_TIPS,
            ExperienceLevel::Intermediate => INTERMEDIATE_TIPS,
            ExperienceLevel::Expert => EXPERT_TIPS,
        };

        GENERAL_TIPS
            .iter()
            .chain(culture.iter())
            .chain(level.iter())
            .copied()
            .collect()
    }

    pub fn tip_of_the_day(&self, profile: &GardenProfile, date: NaiveDate) -> &'static str {
        let pool = self.pool_for(profile);
        // 一般建議永遠存在，pool 不會為空
        let index = (date.ordinal0() as usize) % pool.len();
        pool[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::IrrigationMethod;

    fn garden(cultivation: CultivationType, level: ExperienceLevel) -> GardenProfile {
        GardenProfile {
            region: "Bretagne".to_string(),
            surface_m2: 10.0,
            cultivation_type: cultivation,
            irrigation: IrrigationMethod::Manual,
            experience: level,
            plants: vec![],
        }
    }

    #[test]
    fn test_pool_combines_general_culture_and_level_tips() {
        let selector = DailyTipSelector::new();

        let pool = selector.pool_for(&garden(CultivationType::Greenhouse, ExperienceLevel::Expert));
        assert_eq!(pool.len(), GENERAL_TIPS.len() + 3 + 3);
        assert_eq!(pool[GENERAL_TIPS.len()], GREENHOUSE_TIPS[0]);
        assert_eq!(pool[pool.len() - 1], EXPERT_TIPS[2]);

        let pool = selector.pool_for(&garden(
            CultivationType::Unrecognized,
            ExperienceLevel::Beginner,
        ));
        assert_eq!(pool.len(), GENERAL_TIPS.len() + 3);
    }

    #[test]
    fn test_ladybird_tip_text() {
        assert_eq!(
            GENERAL_TIPS[8],
            "Les coccinelles sont des alliées précieuses contre les pucerons - attirez-les avec des fleurs comme les cosmos ou les soucis."
        );
    }

    #[test]
    fn test_tip_rotates_with_the_day_of_year() {
        let selector = DailyTipSelector::new();
        let profile = garden(CultivationType::Container, ExperienceLevel::Intermediate);
        let pool_len = selector.pool_for(&profile).len() as u32;

        let jan_1 = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let jan_2 = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        let wrapped = NaiveDate::from_yo_opt(2026, pool_len + 1).unwrap();

        assert_eq!(selector.tip_of_the_day(&profile, jan_1), GENERAL_TIPS[0]);
        assert_eq!(selector.tip_of_the_day(&profile, jan_2), GENERAL_TIPS[1]);
        assert_eq!(selector.tip_of_the_day(&profile, wrapped), GENERAL_TIPS[0]);
    }
}
