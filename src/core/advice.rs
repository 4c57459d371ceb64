use crate::core::catalog::PlantCatalog;
use crate::domain::model::{CultivationType, ExperienceLevel, IrrigationMethod, PlantTag, Season};

const NO_PLANTS_CARE: &str = "Lorsque vous ajouterez des plantes à votre potager, vous recevrez des conseils spécifiques pour leur entretien.";

const THIRSTY_WATERING: &str = " Certaines de vos plantes comme les tomates, concombres ou courgettes ont besoin d'un arrosage plus fréquent, surtout en période chaude.";
const DROUGHT_WATERING: &str = " Attention à ne pas trop arroser vos plantes aromatiques méditerranéennes qui préfèrent un sol sec.";

const TALL_SPACE: &str = " Placez vos plantes hautes (comme les tomates ou haricots grimpants) au nord de votre potager pour éviter qu'elles ne fassent de l'ombre aux autres cultures.";
const SPREADING_SPACE: &str = " Prévoyez suffisamment d'espace pour vos plantes coureuses comme les courgettes ou courges qui ont tendance à s'étaler.";

/// 依菜園屬性與目錄組合各主題的建議文字
pub struct AdviceSynthesizer<'a> {
    catalog: &'a PlantCatalog,
}

impl<'a> AdviceSynthesizer<'a> {
    pub fn new(catalog: &'a PlantCatalog) -> Self {
        Self { catalog }
    }

    pub fn watering_advice(&self, irrigation: IrrigationMethod, plants: &[String]) -> String {
        let mut advice = match irrigation {
            IrrigationMethod::Manual => "Pour votre arrosage manuel, privilégiez l'arrosage tôt le matin ou en soirée pour limiter l'évaporation. Arrosez au pied des plantes plutôt que sur les feuilles pour éviter les maladies fongiques.",
            IrrigationMethod::Automatic => "Votre système d'arrosage automatique est pratique, mais vérifiez régulièrement qu'il fonctionne correctement. Ajustez les horaires selon la saison : plus fréquent en été, moins en hiver.",
            IrrigationMethod::Drip => "Votre système de goutte à goutte est idéal pour économiser l'eau. Vérifiez régulièrement que chaque plante reçoit bien l'eau nécessaire et que les goutteurs ne sont pas bouchés.",
            IrrigationMethod::Unrecognized => "Adaptez votre arrosage en fonction de la saison et du type de plante. Testez l'humidité du sol en enfonçant votre doigt sur quelques centimètres : si c'est sec, arrosez.",
        }
        .to_string();

        if self.catalog.any_tagged(plants, PlantTag::Thirsty) {
            advice.push_str(THIRSTY_WATERING);
        }
        if self.catalog.any_tagged(plants, PlantTag::DroughtTolerant) {
            advice.push_str(DROUGHT_WATERING);
        }

        advice
    }

    /// 面積分三段：< 5、[5, 20)、>= 20 平方公尺
    pub fn space_advice(&self, surface_m2: f64, plants: &[String]) -> String {
        let mut advice = if surface_m2 < 5.0 {
            format!("Pour votre petit espace de {} m², privilégiez les plantes à croissance verticale comme les haricots grimpants ou les tomates à tuteurs. Utilisez des pots suspendus pour les herbes aromatiques.", surface_m2)
        } else if surface_m2 < 20.0 {
            format!("Avec une surface de {} m², vous pouvez planter une bonne variété de légumes. Pensez à la rotation des cultures pour maintenir la fertilité du sol et éviter les maladies.", surface_m2)
        } else {
            format!("Votre grande surface de {} m² vous permet de diviser votre potager en zones thématiques ou en planches de culture. Intégrez des fleurs pour attirer les pollinisateurs et des plantes compagnes pour repousser certains nuisibles.", surface_m2)
        };

        if self.catalog.any_tagged(plants, PlantTag::Tall) {
            advice.push_str(TALL_SPACE);
        }
        if self.catalog.any_tagged(plants, PlantTag::Spreading) {
            advice.push_str(SPREADING_SPACE);
        }

        advice
    }

    /// 未知的種植方式回傳空字串
    pub fn culture_advice(&self, cultivation: CultivationType) -> String {
        match cultivation {
            CultivationType::OpenGround => "Pour votre culture en pleine terre, améliorez votre sol avant chaque plantation avec du compost. Un bon paillage limitera la pousse des mauvaises herbes et conservera l'humidité du sol.",
            CultivationType::Container => "Pour votre culture en bac, assurez-vous d'avoir un bon drainage et utilisez un terreau de qualité adapté aux légumes. Renouvelez partiellement le terreau chaque année pour maintenir sa fertilité.",
            CultivationType::Greenhouse => "Pour votre culture sous serre, surveillez attentivement l'humidité et la température. Une aération régulière est essentielle pour éviter les maladies, et pensez à ombrager votre serre en été pour éviter la surchauffe.",
            CultivationType::Unrecognized => "",
        }
        .to_string()
    }

    pub fn experience_advice(&self, level: ExperienceLevel) -> String {
        match level {
            ExperienceLevel::Beginner => "En tant que débutant, commencez par des légumes faciles comme les radis, la laitue ou les courgettes. Prenez des notes sur vos succès et échecs pour apprendre de vos expériences.",
            ExperienceLevel::Intermediate => "Avec votre niveau intermédiaire, vous pouvez tenter des cultures un peu plus exigeantes comme les tomates ou les aubergines. Essayez quelques techniques avancées comme les associations de plantes bénéfiques.",
            ExperienceLevel::Expert => "Avec votre expertise, vous pouvez vous lancer dans des cultures plus délicates et techniques. Pensez à faire vos propres semis et peut-être même à récolter et conserver vos graines.",
        }
        .to_string()
    }

    pub fn plant_care_advice(&self, plants: &[String]) -> String {
        if plants.is_empty() {
            return NO_PLANTS_CARE.to_string();
        }

        plants
            .iter()
            .map(|plant| format!("{}: {}", plant, self.catalog.care_instructions_of(plant)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn seasonal_tips(&self, season: Season, recommended: &[String]) -> String {
        format!(
            "Nous sommes actuellement en {}, c'est le moment idéal pour planter : {}.",
            season,
            recommended.join(", ")
        )
    }

    pub fn general_advice(&self, region: &str) -> String {
        format!(
            "Pour votre potager en {}, observez régulièrement vos plantes pour détecter les problèmes dès leur apparition. Tenez un journal de jardin pour suivre ce qui fonctionne bien dans vos conditions spécifiques.",
            region
        )
    }
}
