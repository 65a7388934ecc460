//! Core game logic and state management

pub mod scenario;

use crate::data::*;
use crate::{GameError, Result};
use chrono::{DateTime, Utc};
use scenario::CaseFile;
use serde::{Deserialize, Serialize};

/// Minimum number of clues that must implicate the accused for the
/// accusation to be sustained. A fixed rule of the court, not a setting.
pub const EVIDENCE_THRESHOLD: usize = 2;

/// Current phase of the investigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Walking the mansion, collecting clues
    Exploring,
    /// Clues on the table, waiting for the accusation
    Judging,
    /// Verdict delivered
    Done,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Exploring => "Exploring",
            Phase::Judging => "Judgment",
            Phase::Done => "Case Closed",
        }
    }
}

/// How the judgment came out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Enough clues implicated the accused; the case is won
    Sustained,
    /// The accused walks free
    InsufficientEvidence,
}

/// The outcome of the accusation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JudgmentReport {
    pub accused: String,
    pub match_count: usize,
    pub verdict: Verdict,
}

/// Session statistics
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CaseStats {
    pub rooms_entered: u32,
    pub clues_collected: u32,
    pub blocked_attempts: u32,
    pub invalid_choices: u32,
}

/// A message to display to the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMessage {
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    pub source: String,
    pub message: String,
}

impl GameMessage {
    pub fn info(source: &str, message: &str) -> Self {
        Self::alert(Severity::Info, source, message)
    }

    pub fn alert(severity: Severity, source: &str, message: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            severity,
            source: source.to_string(),
            message: message.to_string(),
        }
    }
}

/// The investigation: one detective, one case, one verdict
///
/// Owns the mansion map, the clue index, and the suspect table outright;
/// the three structures never share nodes (the clue index stores copies
/// of clue text, not references into rooms).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Investigation {
    /// Current phase
    pub phase: Phase,

    /// The case being worked
    pub case: CaseFile,

    /// Where the detective is standing
    current_room: RoomId,

    /// Every clue collected so far, sorted
    pub clues: ClueIndex,

    /// The detective's clue-to-suspect knowledge, read-only after setup
    pub suspects: SuspectLookup,

    /// Session statistics
    pub stats: CaseStats,

    /// Message log (for UI display)
    pub message_log: Vec<GameMessage>,

    /// Set once the accusation has been judged
    pub verdict: Option<JudgmentReport>,
}

impl Investigation {
    /// Open a case and step into the entrance
    pub fn new(case: CaseFile) -> Self {
        let mut suspects = SuspectLookup::new();
        for (clue, suspect) in &case.knowledge {
            suspects.insert(clue, suspect);
        }

        let current_room = case.map.root();
        let mut investigation = Self {
            phase: Phase::Exploring,
            case,
            current_room,
            clues: ClueIndex::new(),
            suspects,
            stats: CaseStats::default(),
            message_log: Vec::new(),
            verdict: None,
        };

        investigation.add_message(GameMessage::info(
            "Narrator",
            "Explore, collect clues, connect them to a suspect, and make your accusation.",
        ));
        let arrival = investigation.enter_current_room();
        for line in arrival {
            investigation.add_message(GameMessage::info("Mansion", &line));
        }
        investigation
    }

    /// Add a message to the log
    pub fn add_message(&mut self, message: GameMessage) {
        self.message_log.push(message);
    }

    fn log_lines(&mut self, severity: Severity, source: &str, lines: &[String]) {
        for line in lines {
            self.add_message(GameMessage::alert(severity, source, line));
        }
    }

    /// Name of the room the detective is standing in
    pub fn current_room_name(&self) -> &str {
        self.case.map.name(self.current_room)
    }

    /// Handle one exploration keystroke: `e` left, `d` right, `s` to
    /// end the exploration and move to judgment
    ///
    /// Blocked doors and unrecognized keys report a diagnostic and leave
    /// the state unchanged; there is no limit on steps and revisiting a
    /// room whose clue is already collected yields nothing new.
    pub fn step(&mut self, key: char) -> Result<Vec<String>> {
        if self.phase != Phase::Exploring {
            return Err(GameError::InvalidState(format!(
                "cannot explore during {}",
                self.phase.name()
            ))
            .into());
        }

        let lines = match key {
            'e' => self.walk(Direction::Left),
            'd' => self.walk(Direction::Right),
            's' => {
                self.phase = Phase::Judging;
                let mut lines = vec![
                    "You have gathered what you could and head to the main hall for the judgment."
                        .to_string(),
                ];
                lines.extend(self.clue_report());
                self.log_lines(Severity::Info, "Narrator", &lines);
                lines
            }
            other => {
                self.stats.invalid_choices += 1;
                let line = format!(">> Invalid choice: '{}'. Use e, d, or s.", other);
                self.add_message(GameMessage::alert(Severity::Low, "Mansion", &line));
                vec![line]
            }
        };
        Ok(lines)
    }

    fn walk(&mut self, direction: Direction) -> Vec<String> {
        let next = match direction {
            Direction::Left => self.case.map.left(self.current_room),
            Direction::Right => self.case.map.right(self.current_room),
        };
        match next {
            Some(room) => {
                self.current_room = room;
                let lines = self.enter_current_room();
                for line in &lines {
                    self.add_message(GameMessage::info("Mansion", line));
                }
                lines
            }
            None => {
                self.stats.blocked_attempts += 1;
                let line = format!(">> The way {} is blocked.", direction);
                self.add_message(GameMessage::alert(Severity::Low, "Mansion", &line));
                vec![line]
            }
        }
    }

    /// Announce the current room and collect its clue, if it still has one
    fn enter_current_room(&mut self) -> Vec<String> {
        self.stats.rooms_entered += 1;
        let mut lines = vec![format!("You are in: {}", self.current_room_name())];
        if let Some(clue) = self.case.map.collect_clue(self.current_room) {
            lines.push(format!(">> Clue found: {}", clue));
            if self.clues.insert(&clue) {
                self.stats.clues_collected += 1;
            }
        }
        lines
    }

    /// The sorted clue listing shown at judgment time
    pub fn clue_report(&self) -> Vec<String> {
        let mut lines = vec!["--- CLUES COLLECTED ---".to_string()];
        if self.clues.is_empty() {
            lines.push("No clues were found.".to_string());
        } else {
            for clue in self.clues.iter() {
                lines.push(format!("- {}", clue));
            }
        }
        lines
    }

    /// Judge the accusation and close the case
    ///
    /// Counts the collected clues whose known suspect matches the accused
    /// name exactly (case-sensitive). At least [`EVIDENCE_THRESHOLD`]
    /// matches sustain the accusation; anything less frees the suspect.
    pub fn accuse(&mut self, accused: &str) -> Result<Vec<String>> {
        if self.phase != Phase::Judging {
            return Err(GameError::InvalidState(format!(
                "cannot accuse during {}",
                self.phase.name()
            ))
            .into());
        }

        let match_count = self
            .clues
            .count_matching(|clue| self.suspects.lookup(clue) == Some(accused));
        let verdict = if match_count >= EVIDENCE_THRESHOLD {
            Verdict::Sustained
        } else {
            Verdict::InsufficientEvidence
        };

        let mut lines = vec![
            "--- THE VERDICT ---".to_string(),
            format!(
                "You accuse {}. The accusation is supported by {} clue(s).",
                accused, match_count
            ),
        ];
        match verdict {
            Verdict::Sustained => {
                lines.push("Damning evidence! The suspect confesses. Case closed!".to_string());
                lines.push("CONGRATULATIONS, DETECTIVE!".to_string());
                self.log_lines(Severity::Critical, "Court", &lines);
            }
            Verdict::InsufficientEvidence => {
                lines.push(
                    "The evidence is insufficient. The suspect walks free for lack of proof."
                        .to_string(),
                );
                lines.push("You failed to solve the case.".to_string());
                self.log_lines(Severity::High, "Court", &lines);
            }
        }

        self.verdict = Some(JudgmentReport {
            accused: accused.to_string(),
            match_count,
            verdict,
        });
        self.phase = Phase::Done;
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_case() -> Investigation {
        Investigation::new(CaseFile::final_judgment())
    }

    #[test]
    fn starts_exploring_at_the_entrance() {
        let investigation = open_case();
        assert_eq!(investigation.phase, Phase::Exploring);
        assert_eq!(investigation.current_room_name(), "Entrance Hall");
        assert!(investigation.clues.is_empty());
    }

    #[test]
    fn blocked_door_reports_and_stays() {
        let mut investigation = open_case();
        // Entrance Hall -> Living Room -> Library is a leaf
        investigation.step('e').unwrap();
        investigation.step('e').unwrap();
        assert_eq!(investigation.current_room_name(), "Library");
        let lines = investigation.step('e').unwrap();
        assert_eq!(lines, vec![">> The way left is blocked.".to_string()]);
        assert_eq!(investigation.current_room_name(), "Library");
        assert_eq!(investigation.stats.blocked_attempts, 1);
    }

    #[test]
    fn invalid_key_reports_and_stays() {
        let mut investigation = open_case();
        let lines = investigation.step('x').unwrap();
        assert!(lines[0].contains("Invalid choice"));
        assert_eq!(investigation.phase, Phase::Exploring);
        assert_eq!(investigation.current_room_name(), "Entrance Hall");
        assert_eq!(investigation.stats.invalid_choices, 1);
    }

    #[test]
    fn clue_is_collected_on_entry_and_only_once() {
        let mut investigation = open_case();
        let lines = investigation.step('e').unwrap();
        assert_eq!(lines, vec!["You are in: Living Room".to_string()]);
        let lines = investigation.step('e').unwrap();
        assert_eq!(lines[0], "You are in: Library");
        assert!(lines[1].starts_with(">> Clue found:"));
        assert_eq!(investigation.clues.len(), 1);
        assert_eq!(investigation.stats.clues_collected, 1);
    }

    #[test]
    fn exit_moves_to_judgment_with_sorted_report() {
        let mut investigation = open_case();
        investigation.step('e').unwrap();
        investigation.step('e').unwrap();
        let lines = investigation.step('s').unwrap();
        assert_eq!(investigation.phase, Phase::Judging);
        assert!(lines.iter().any(|l| l == "--- CLUES COLLECTED ---"));
        assert!(lines
            .iter()
            .any(|l| l.contains("receipt from a poison shop")));
    }

    #[test]
    fn stepping_after_exploration_is_an_error() {
        let mut investigation = open_case();
        investigation.step('s').unwrap();
        assert!(investigation.step('e').is_err());
    }

    #[test]
    fn accusing_while_exploring_is_an_error() {
        let mut investigation = open_case();
        assert!(investigation.accuse("Butler").is_err());
    }

    #[test]
    fn one_matching_clue_is_not_enough() {
        let mut investigation = open_case();
        // left wing: Library holds the poison receipt (Butler)
        investigation.step('e').unwrap();
        investigation.step('e').unwrap();
        investigation.step('s').unwrap();
        let report = investigation.accuse("Butler").unwrap();
        assert!(report.iter().any(|l| l.contains("1 clue(s)")));
        let verdict = investigation.verdict.as_ref().unwrap();
        assert_eq!(verdict.match_count, 1);
        assert_eq!(verdict.verdict, Verdict::InsufficientEvidence);
    }

    #[test]
    fn two_matching_clues_sustain_the_accusation() {
        let mut investigation = open_case();
        // right wing sweep: Dining Room (wine glass, Butler), Kitchen
        // (knife, Housekeeper), Pantry (bitter almonds, Butler)
        investigation.step('d').unwrap();
        investigation.step('d').unwrap();
        investigation.step('e').unwrap();
        assert_eq!(investigation.current_room_name(), "Pantry");
        investigation.step('s').unwrap();
        let report = investigation.accuse("Butler").unwrap();
        assert!(report.iter().any(|l| l.contains("2 clue(s)")));
        let verdict = investigation.verdict.as_ref().unwrap();
        assert_eq!(verdict.verdict, Verdict::Sustained);
        assert_eq!(investigation.phase, Phase::Done);
    }

    #[test]
    fn zero_clue_accusation_is_safe() {
        let mut investigation = open_case();
        investigation.step('s').unwrap();
        let lines = investigation.accuse("Butler").unwrap();
        assert!(lines.iter().any(|l| l.contains("0 clue(s)")));
        let verdict = investigation.verdict.as_ref().unwrap();
        assert_eq!(verdict.match_count, 0);
        assert_eq!(verdict.verdict, Verdict::InsufficientEvidence);
        assert_eq!(investigation.phase, Phase::Done);
    }

    #[test]
    fn unknown_suspect_scores_zero() {
        let mut investigation = open_case();
        investigation.step('e').unwrap();
        investigation.step('e').unwrap();
        investigation.step('s').unwrap();
        investigation.accuse("Chauffeur").unwrap();
        assert_eq!(investigation.verdict.as_ref().unwrap().match_count, 0);
    }
}
