use std::collections::BTreeMap;
use std::path::Path;

use tracing::warn;

use crate::core::{Result, SOLUTION_MEMBER_NAME};
use crate::solution::StepSolution;
use crate::storage::{read_compressed, write_compressed};

/// Best known solutions, keyed by pack file and then by level index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolutionStore {
    packs: BTreeMap<String, BTreeMap<String, StepSolution>>,
}

impl SolutionStore {
    pub fn new() -> SolutionStore {
        SolutionStore::default()
    }

    pub fn get(&self, pack: &str, level: usize) -> Option<&StepSolution> {
        self.packs.get(pack)?.get(&level.to_string())
    }

    pub fn insert(&mut self, pack: &str, level: usize, solution: StepSolution) {
        self.packs.entry(pack.to_string()).or_default().insert(level.to_string(), solution);
    }

    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }

    /// Missing or unreadable files load as an empty store.
    pub fn load(path: &Path) -> SolutionStore {
        match SolutionStore::try_load(path) {
            Ok(store) => store,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "solution store unreadable, starting empty");
                SolutionStore::new()
            }
        }
    }

    fn try_load(path: &Path) -> Result<SolutionStore> {
        match read_compressed(path)? {
            Some(text) => SolutionStore::from_json(&text),
            None => Ok(SolutionStore::new()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        write_compressed(path, SOLUTION_MEMBER_NAME, &self.to_pretty_json()?)
    }

    pub fn from_json(text: &str) -> Result<SolutionStore> {
        Ok(SolutionStore { packs: serde_json::from_str(text)? })
    }

    /// JSON laid out for line based diffs: a blank line between packs,
    /// one line per level key and one line per grid row.
    pub fn to_pretty_json(&self) -> Result<String> {
        let mut out = String::from("{");
        for (pack_index, (pack, levels)) in self.packs.iter().enumerate() {
            out.push_str(if pack_index == 0 { "\n" } else { ",\n\n" });
            out.push_str(&serde_json::to_string(pack)?);
            out.push_str(": {");
            for (level_index, (level, solution)) in levels.iter().enumerate() {
                if level_index > 0 {
                    out.push(',');
                }
                out.push_str("\n    ");
                out.push_str(&serde_json::to_string(level)?);
                out.push_str(": [[");
                for (row_index, row) in solution.initial.rows().iter().enumerate() {
                    if row_index > 0 {
                        out.push(',');
                    }
                    out.push_str("\n        ");
                    out.push_str(&serde_json::to_string(row)?);
                }
                out.push_str("\n        ], ");
                out.push_str(&serde_json::to_string(&solution.moves)?);
                out.push(']');
            }
            out.push_str("\n}");
        }
        out.push_str("\n}\n");
        Ok(out)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::Grid;

    fn solution(moves: &str) -> StepSolution {
        StepSolution { initial: Grid::from_rows(&["#####", "#@$.#", "#####"]).unwrap(), moves: moves.into() }
    }

    #[test]
    fn pretty_json_puts_each_row_on_its_own_line() {
        let mut store = SolutionStore::new();
        store.insert("b.txt", 0, solution(">"));
        store.insert("a.txt", 10, solution(">"));
        store.insert("a.txt", 2, solution("><>"));

        let expected = r######"{
"a.txt": {
    "10": [[
        "#####",
        "#@$.#",
        "#####"
        ], ">"],
    "2": [[
        "#####",
        "#@$.#",
        "#####"
        ], "><>"]
},

"b.txt": {
    "0": [[
        "#####",
        "#@$.#",
        "#####"
        ], ">"]
}
}
"######;
        assert_eq!(store.to_pretty_json().unwrap(), expected);
        assert_eq!(SolutionStore::from_json(expected).unwrap(), store);
    }

    #[test]
    fn empty_store_writes_valid_json() {
        let text = SolutionStore::new().to_pretty_json().unwrap();
        assert!(SolutionStore::from_json(&text).unwrap().is_empty());
    }
}
