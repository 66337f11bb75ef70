#[cfg(test)]
mod test {
    use Direction::*;
    use crate::core::*;
    use crate::solution::*;
    use crate::test::test_util::{parse_level, GameTestState};

    const LEVEL: &str = r#"
#######
#     #
#@$ . #
#  $. #
#######
"#;

    /// Plays `directions` from `level`, recording a frame before the first move and after each one.
    fn play_frames(level: &str, directions: &[Direction]) -> Vec<Frame> {
        let mut game = GameTestState::new(level);
        let mut frames = vec![Frame::new(game.grid.clone(), 0)];
        for &direction in directions {
            game.assert_move(direction);
            frames.push(Frame::new(game.grid.clone(), game.pushes));
        }
        frames
    }

    #[test]
    fn compress_emits_one_symbol_per_move() {
        let frames = play_frames(LEVEL, &[Right, Right, Up, Left, Down, Down, Right]);
        let solution = compress(&frames).unwrap();

        assert_eq!(solution.moves, ">>^<vv>");
        assert!(frames.last().unwrap().grid.is_won());
        assert_eq!(solution.move_count(), frames.len() - 1);
        assert_eq!(solution.initial, frames[0].grid);
    }

    #[test]
    fn expand_reproduces_compressed_frames() {
        let frames = play_frames(LEVEL, &[Right, Right, Up, Left, Left, Down, Down, Right, Right]);

        let expanded = expand(&compress(&frames).unwrap()).unwrap();

        assert_eq!(expanded, frames);
    }

    #[test]
    fn expand_counts_pushes_cumulatively() {
        let solution = StepSolution { initial: parse_level(LEVEL), moves: ">>^".into() };
        let frames = expand(&solution).unwrap();

        let pushes: Vec<usize> = frames.iter().map(|f| f.pushes).collect();
        assert_eq!(pushes, vec![0, 1, 2, 2]);
    }

    #[test]
    fn single_frame_compresses_to_no_moves() {
        let frames = play_frames(LEVEL, &[]);
        let solution = compress(&frames).unwrap();

        assert_eq!(solution.moves, "");
        assert_eq!(expand(&solution).unwrap(), frames);
    }

    #[test]
    fn compress_rejects_frames_that_skip_cells() {
        let mut frames = play_frames(LEVEL, &[Up, Right, Right]);
        frames.remove(2);

        assert!(matches!(compress(&frames), Err(SokobanError::InvalidFrames { index: 2, .. })));
        assert!(matches!(compress(&[]), Err(SokobanError::InvalidFrames { index: 0, .. })));
    }

    #[test]
    fn compress_rejects_standing_still() {
        let mut frames = play_frames(LEVEL, &[Up]);
        frames.push(frames[1].clone());

        assert!(matches!(compress(&frames), Err(SokobanError::InvalidFrames { index: 2, .. })));
    }

    #[test]
    fn expand_rejects_unknown_or_blocked_steps() {
        let initial = parse_level(LEVEL);

        let unknown = StepSolution { initial: initial.clone(), moves: ">x".into() };
        assert!(matches!(expand(&unknown), Err(SokobanError::InvalidSolution { index: 1, step: 'x' })));

        let blocked = StepSolution { initial, moves: "^^".into() };
        assert!(matches!(expand(&blocked), Err(SokobanError::InvalidSolution { index: 1, step: '^' })));
    }
}
