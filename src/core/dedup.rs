/// 不分大小寫的子字串比對
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// 兩個名稱互為子字串（雙向、不分大小寫）即視為重疊，
/// 例如 "Tomate" 與 "Tomate cerise"
pub fn names_overlap(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

/// 移除與現有植物重疊的候選項目，保留原始順序
pub fn filter<S: AsRef<str>>(candidates: &[String], existing: &[S]) -> Vec<String> {
    candidates
        .iter()
        .filter(|candidate| {
            !existing
                .iter()
                .any(|plant| names_overlap(candidate, plant.as_ref()))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_filter_removes_overlaps_in_both_directions() {
        let candidates = names(&["Tomates cerises", "Concombres", "Courgettes", "Basilic"]);
        let existing = names(&["tomates", "Basilic thaï"]);

        let kept = filter(&candidates, &existing);
        assert_eq!(kept, names(&["Concombres", "Courgettes"]));
    }

    #[test]
    fn test_filter_preserves_order_with_no_existing_plants() {
        let candidates = names(&["Radis", "Laitue", "Épinards"]);
        let existing: Vec<String> = Vec::new();

        assert_eq!(filter(&candidates, &existing), candidates);
    }

    #[test]
    fn test_overlap_is_case_insensitive_with_accents() {
        assert!(names_overlap("ÉPINARDS d'hiver", "épinards"));
        assert!(!names_overlap("Mâche", "Mache"));
    }

    #[test]
    fn test_no_kept_candidate_overlaps_an_existing_plant() {
        let candidates = names(&[
            "Ail",
            "Oignons verts",
            "Mâche",
            "Épinards d'hiver",
            "Ciboulette",
        ]);
        let existing = names(&["oignon", "Épinards d'hiver bio", "Salade"]);

        let kept = filter(&candidates, &existing);
        for plant in &kept {
            for owned in &existing {
                assert!(!names_overlap(plant, owned), "{} overlaps {}", plant, owned);
            }
        }
        assert_eq!(kept, names(&["Ail", "Mâche", "Ciboulette"]));
    }
}
