#[cfg(test)]
mod test {
    use crate::test::test_util::parse_level;

    fn assert_deadlock(expected: bool, level: &str) {
        let grid = parse_level(level);
        let deadlock = grid.is_deadlock();

        assert_eq!(expected, deadlock, "Expected deadlock {:?} but found {:?}, for level: {}", expected, deadlock, level);
    }

    #[test]
    fn crate_walled_in_square_is_deadlock() {
        assert_deadlock(true, r#"
####
##$#
#@.#
####
"#);
    }

    #[test]
    fn crate_on_target_walled_in_square_is_not_deadlock() {
        assert_deadlock(false, r#"
####
##*#
#@ #
####
"#);
    }

    #[test]
    fn crate_in_room_corner_is_deadlock() {
        assert_deadlock(true, r#"
####
#@$#
#. #
####
"#);
        assert_deadlock(true, r#"
####
#@ #
#.$#
####
"#);
        assert_deadlock(true, r#"
####
#@.#
#$ #
####
"#);
    }

    #[test]
    fn crate_between_two_walls_with_open_diagonal_is_deadlock() {
        assert_deadlock(true, r#"
 #  
#$.@
"#);
    }

    #[test]
    fn crate_square_is_deadlock() {
        assert_deadlock(true, r#"
######
#@$$ #
# $$ #
#....#
######
"#);
    }

    #[test]
    fn player_does_not_close_a_square() {
        assert_deadlock(false, r#"
#####
#@$.#
#####
"#);
    }

    #[test]
    fn crate_along_wall_without_target_is_missed() {
        // Really stuck, but neither the corner nor the square rule sees it.
        assert_deadlock(false, r#"
######
# $  #
#@  .#
######
"#);
    }

    #[test]
    fn won_only_when_every_crate_is_on_a_target() {
        assert!(!parse_level(r#"
#######
#@*$ .#
#######
"#).is_won());
        assert!(parse_level(r#"
######
#@** #
######
"#).is_won());
    }
}
