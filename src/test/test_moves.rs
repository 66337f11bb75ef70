mod test {
    use Direction::*;
    use crate::core::*;
    use crate::test::test_util::GameTestState;

    #[test]
    fn when_move_right_observes_move_right(){
        let level = r#"
#@ $.#
"#;
        let mut game = GameTestState::new(level);
        let change = game.assert_move(Right);

        let expected_level = r#"
# @$.#
"#;
        game.assert_matches(expected_level);
        assert_eq!(change, GameChangeType::PlayerMove);
        assert_eq!(game.pushes, 0);
    }

    #[test]
    fn when_push_pushes(){
        let level = r#"
#@$ .#
"#;
        let mut game = GameTestState::new(level);
        let change = game.assert_move(Right);

        let expected_level = r#"
# @$.#
"#;
        game.assert_matches(expected_level);
        assert_eq!(change, GameChangeType::PlayerAndBoxMove);
        assert_eq!(game.pushes, 1);
    }

    #[test]
    fn when_push_onto_target_level_is_won(){
        let mut game = GameTestState::new(r#"
#####
#@$.#
#####
"#);
        game.assert_move(Right);

        game.assert_matches(r#"
#####
# @*#
#####
"#);
        assert!(game.grid.is_won());
        assert_eq!(game.pushes, 1);
    }

    #[test]
    fn when_player_walks_over_target_target_remains(){
        let mut game = GameTestState::new(r#"
#@.  #
#   $#
######
"#);
        game.assert_move(Right);
        game.assert_matches(r#"
# +  #
#   $#
######
"#);
        game.assert_move(Right);
        game.assert_matches(r#"
# .@ #
#   $#
######
"#);
    }

    #[test]
    fn when_crate_pushed_off_target_target_remains(){
        let mut game = GameTestState::new(r#"
#@*  .#
#  $  #
#######
"#);
        game.assert_move(Right);
        game.assert_matches(r#"
# +$ .#
#  $  #
#######
"#);
        assert!(!game.grid.is_won());
    }

    fn assert_rejected(level: &str, direction: Direction) {
        let mut game = GameTestState::new(level);
        let before = game.grid.clone();
        assert_eq!(game.try_move(direction), None, "expected {:?} to be rejected in\n{}", direction, level);
        assert_eq!(game.grid, before);
        assert_eq!(game.pushes, 0);
    }

    #[test]
    fn when_block_pushed_into_block_nothing_changes(){
        assert_rejected(r#"
#@$$..#
"#, Right);
    }

    #[test]
    fn when_walking_into_wall_nothing_changes(){
        assert_rejected(r#"
#@$.#
"#, Left);
        assert_rejected(r#"
#@$.#
"#, Up);
    }

    #[test]
    fn when_block_pushed_into_wall_nothing_changes(){
        assert_rejected(r#"
#. @$#
"#, Right);
    }

    #[test]
    fn when_moving_off_grid_nothing_changes(){
        assert_rejected(r#"
@$.
"#, Left);
        assert_rejected(r#"
@$.
"#, Down);
        assert_rejected(r#"
.@$
"#, Right);
    }

    #[test]
    fn when_player_moves_back_grid_is_equal(){
        let level = r#"
#@ $.#
"#;
        let mut game = GameTestState::new(level);
        let original = game.grid.clone();
        game.assert_move(Right);
        assert_ne!(original, game.grid);
        game.assert_move(Left);

        game.assert_matches(level);
        assert_eq!(original, game.grid);
        assert_eq!(original.find_player(), game.grid.find_player());
    }

    #[test]
    fn when_blocks_swap_grid_remains_equal(){
        let level = r#"
#    #
#@$ .#
# $ .#
#    #
"#;
        let mut game = GameTestState::new(level);
        let original = game.grid.clone();
        game.assert_moves(&[
            Right, Left,
            Down, Down,
            Right, Up,
            Right, Right, Up, Up,
            Left, Down, Right, Down, Left,]);
        game.assert_matches(r#"
#    #
# $ .#
# $@.#
#    #
"#);
        game.assert_moves(&[
            Down, Left, Left, Up, Up,]);

        game.assert_matches(level);
        assert_eq!(original, game.grid);
    }
}
