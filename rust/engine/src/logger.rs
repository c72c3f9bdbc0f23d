use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// The outcome recorded for one role on one turn. Exactly one of these is
/// appended per role per turn, in turn order.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionOutcome {
    /// The strategy declined to act this turn
    NotAttempted,
    /// The strategy acted but a King blocked the action
    AttemptedButFailed,
    /// The action went through
    Succeeded,
}

/// One completed game as it lands in the JSONL log.
///
/// Scores are always present in practice; the remaining fields are only
/// written when full logging is requested, and stay `None` when a record is
/// read back from a scores-only log.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Sequential identifier, offset by any records already present in the
    /// destination; never reused within one destination
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dealer_score: Option<u32>,
    /// Final hand, one card per turn
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_cards: Option<Vec<Card>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dealer_cards: Option<Vec<Card>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_history: Option<Vec<ActionOutcome>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dealer_history: Option<Vec<ActionOutcome>>,
    /// The deck as the game saw it: the starting stack order without
    /// replacement, or the audit log of every sampled value with it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deck: Option<Vec<Card>>,
    /// Timestamp when the record was written (RFC3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts: Option<String>,
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Appends completed games to a JSONL destination, one record per line.
///
/// Opening an existing destination counts its records and continues the id
/// sequence from there, so ids stay monotonically increasing across
/// repeated runs against the same file.
pub struct GameLogger {
    writer: BufWriter<File>,
    offset: u64,
    seq: u64,
}

impl GameLogger {
    pub fn open<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let offset = match File::open(&path) {
            Ok(f) => BufReader::new(f)
                .lines()
                .map_while(Result::ok)
                .filter(|l| !l.trim().is_empty())
                .count() as u64,
            Err(_) => 0,
        };
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: BufWriter::new(f),
            offset,
            seq: 0,
        })
    }

    /// The id the next appended record will carry.
    pub fn next_id(&self) -> u64 {
        self.offset + self.seq
    }

    /// Assigns the next id, injects a timestamp if the record has none, and
    /// writes the record as one JSON line. Returns the assigned id.
    pub fn append(&mut self, mut record: GameRecord) -> std::io::Result<u64> {
        record.id = self.offset + self.seq;
        self.seq += 1;
        if record.ts.is_none() {
            record.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&record).map_err(std::io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(record.id)
    }
}

/// Replays a JSONL destination back into structured records. Blank lines
/// are skipped; a malformed line is an error (tolerant readers parse line
/// by line themselves).
pub fn read_records<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<GameRecord>> {
    let contents = std::fs::read_to_string(path)?;
    contents
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).map_err(std::io::Error::other))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score_record(player: u32, dealer: u32) -> GameRecord {
        GameRecord {
            id: 0,
            player_score: Some(player),
            dealer_score: Some(dealer),
            player_cards: None,
            dealer_cards: None,
            player_history: None,
            dealer_history: None,
            deck: None,
            ts: None,
        }
    }

    #[test]
    fn ids_are_sequential_from_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.jsonl");
        let mut logger = GameLogger::open(&path).unwrap();
        assert_eq!(logger.append(score_record(85, 91)).unwrap(), 0);
        assert_eq!(logger.append(score_record(91, 85)).unwrap(), 1);
    }

    #[test]
    fn reopening_offsets_ids_by_existing_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.jsonl");
        {
            let mut logger = GameLogger::open(&path).unwrap();
            logger.append(score_record(1, 2)).unwrap();
            logger.append(score_record(3, 4)).unwrap();
        }
        let mut logger = GameLogger::open(&path).unwrap();
        assert_eq!(logger.next_id(), 2);
        assert_eq!(logger.append(score_record(5, 6)).unwrap(), 2);

        let records = read_records(&path).unwrap();
        let ids: Vec<u64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn scores_only_records_omit_optional_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.jsonl");
        GameLogger::open(&path)
            .unwrap()
            .append(score_record(85, 91))
            .unwrap();
        let line = std::fs::read_to_string(&path).unwrap();
        assert!(line.contains("\"player_score\":85"));
        assert!(!line.contains("player_cards"));
        assert!(!line.contains("deck"));
    }

    #[test]
    fn records_round_trip_through_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.jsonl");
        let mut rec = score_record(85, 91);
        rec.player_history = Some(vec![
            ActionOutcome::AttemptedButFailed,
            ActionOutcome::NotAttempted,
            ActionOutcome::Succeeded,
        ]);
        rec.ts = Some("2026-01-01T00:00:00Z".to_string());
        GameLogger::open(&path).unwrap().append(rec.clone()).unwrap();

        let line = std::fs::read_to_string(&path).unwrap();
        assert!(line.contains("ATTEMPTED_BUT_FAILED"));

        let back = read_records(&path).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back[0], rec);
    }
}
