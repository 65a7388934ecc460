//! Case files for detective adventures
//!
//! Each case bundles a hand-authored mansion map, the detective's
//! clue-to-suspect knowledge, and the suspect roster into one package the
//! investigation can open.

use crate::data::MansionMap;
use serde::{Deserialize, Serialize};

/// A complete case: the mansion, the clues, and who they point at
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseFile {
    pub id: String,
    pub title: String,
    pub synopsis: String,

    /// The mansion to explore
    pub map: MansionMap,

    /// Detective knowledge: (clue text, implicated suspect) pairs,
    /// loaded into the suspect table when the case opens
    pub knowledge: Vec<(String, String)>,

    /// Names shown in the accusation prompt (free text is still accepted)
    pub suspects: Vec<String>,
}

impl CaseFile {
    /// The built-in case: a poisoning at the Blackwood mansion
    pub fn final_judgment() -> Self {
        let mut map = MansionMap::new("Entrance Hall", None);

        let living = map.add_left(map.root(), "Living Room", None);
        let dining = map.add_right(
            map.root(),
            "Dining Room",
            Some("A wine glass that smells faintly of bitter almonds."),
        );
        map.add_left(
            living,
            "Library",
            Some("A receipt from a poison shop, dated yesterday."),
        );
        map.add_right(
            living,
            "Winter Garden",
            Some("Size 10 men's boot prints in the soft earth."),
        );
        let kitchen = map.add_right(
            dining,
            "Kitchen",
            Some("A chef's knife is missing from the block."),
        );
        map.add_left(
            kitchen,
            "Pantry",
            Some("A faint smell of bitter almonds in the air, like cyanide."),
        );

        let knowledge = vec![
            (
                "A receipt from a poison shop, dated yesterday.".to_string(),
                "Butler".to_string(),
            ),
            (
                "Size 10 men's boot prints in the soft earth.".to_string(),
                "Gardener".to_string(),
            ),
            (
                "A chef's knife is missing from the block.".to_string(),
                "Housekeeper".to_string(),
            ),
            (
                "A faint smell of bitter almonds in the air, like cyanide.".to_string(),
                "Butler".to_string(),
            ),
            (
                "A wine glass that smells faintly of bitter almonds.".to_string(),
                "Butler".to_string(),
            ),
        ];

        Self {
            id: "final-judgment".to_string(),
            title: "Detective Quest: The Final Judgment".to_string(),
            synopsis: "Lord Blackwood was found dead in his study last night. \
                       The staff swear they saw nothing. Explore the mansion, \
                       collect every clue you can find, and when you are ready, \
                       name the culprit. The court sustains an accusation only \
                       when at least two clues point the same way."
                .to_string(),
            map,
            knowledge,
            suspects: vec![
                "Butler".to_string(),
                "Gardener".to_string(),
                "Housekeeper".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_case_is_well_formed() {
        let case = CaseFile::final_judgment();
        assert_eq!(case.map.room_count(), 7);
        assert_eq!(case.knowledge.len(), 5);
        // every known clue names a rostered suspect
        for (_, suspect) in &case.knowledge {
            assert!(case.suspects.contains(suspect));
        }
    }

    #[test]
    fn case_is_winnable_along_the_right_wing() {
        // Dining Room, Kitchen, Pantry lie on one path and two of their
        // clues implicate the Butler.
        let case = CaseFile::final_judgment();
        let butler_clues = case
            .knowledge
            .iter()
            .filter(|(_, s)| s == "Butler")
            .count();
        assert!(butler_clues >= 2);
    }
}
