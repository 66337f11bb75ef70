/// File name of the resumable session snapshot inside the storage root.
pub const SAVE_FILE_NAME: &str = "sokoban.current.zip";
/// File name of the best-known solution database inside the storage root.
pub const SOLUTION_FILE_NAME: &str = "sokoban.solutions.zip";

/// Name of the single JSON member inside each compressed file.
pub const SAVE_MEMBER_NAME: &str = "current.json";
pub const SOLUTION_MEMBER_NAME: &str = "solutions.json";

pub const LEVEL_PACK_EXTENSION: &str = ".txt";

/// Shown instead of a play time before the first move of a level.
pub const NO_TIME: &str = "--:--:--";
