#[cfg(test)]
mod test {
    use crate::core::SokobanError;
    use crate::level_pack::*;
    use crate::test::test_util::{build_archive, parse_level};

    const DEMO: &str = ";Demo\n;L1\n#####\n#@$.#\n#####\n";

    const MIXED: &str = r#"; Mixed bag

rows before any level name are ignored
;  First
#####
#@$.#
#####

; Unknown symbol
#####
#@$X#
#####
; Two players
######
#@$.@#
######
; Already solved
#####
#@ *#
#####
;
#####
#@$.#
#####
;Last

  #####
  #@$.#
  #####
"#;

    fn names(levels: &[Level]) -> Vec<&str> {
        levels.iter().map(|l| l.name.as_str()).collect()
    }

    #[test]
    fn demo_pack_parses_to_single_level() {
        let pack = parse_pack("demo.txt", DEMO).unwrap();

        assert_eq!(pack.title, "Demo");
        assert_eq!(pack.file, "demo.txt");
        assert_eq!(names(&pack.levels), vec!["L1"]);
        assert_eq!(pack.levels[0].grid, parse_level("#####\n#@$.#\n#####"));
    }

    #[test]
    fn broken_levels_are_dropped_without_losing_the_rest() {
        let levels = parse_levels("mixed.txt", MIXED).unwrap();

        assert_eq!(names(&levels), vec!["First", "Last"]);
        assert_eq!(levels[1].grid.width(), 7);
        assert_eq!(levels[1].grid.rows()[1], "  #@$.#");
    }

    #[test]
    fn metadata_counts_every_section() {
        let metadata = scan_metadata("mixed.txt", MIXED).unwrap();

        assert_eq!(metadata.title, "Mixed bag");
        assert_eq!(metadata.level_count, 6);
    }

    #[test]
    fn missing_header_rejects_whole_pack() {
        let result = parse_levels("bad.txt", "#####\n#@$.#\n#####\n");
        assert!(matches!(result, Err(SokobanError::MalformedPack { ref file, .. }) if file == "bad.txt"));
    }

    #[test]
    fn archive_lists_packs_in_archive_order() {
        let archive = build_archive(&[
            ("b.txt", DEMO),
            ("readme.md", "not a pack"),
            ("broken.txt", "no header here\n"),
            ("a.txt", MIXED),
        ]);

        assert_eq!(archive.members(), &["b.txt", "broken.txt", "a.txt"]);

        let catalog = archive.catalog();
        let files: Vec<&str> = catalog.iter().map(|m| m.file.as_str()).collect();
        assert_eq!(files, vec!["b.txt", "a.txt"]);
        assert_eq!(catalog[1].title, "Mixed bag");

        let pack = archive.load_pack("a.txt").unwrap();
        assert_eq!(pack.levels.len(), 2);
    }

    #[test]
    fn archive_reads_from_many_threads() {
        let archive = build_archive(&[("demo.txt", DEMO), ("mixed.txt", MIXED)]);

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|n| {
                    let archive = &archive;
                    scope.spawn(move || {
                        let member = &archive.members()[n % 2];
                        archive.load_pack(member).unwrap().levels.len()
                    })
                })
                .collect();
            let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
            assert_eq!(counts, vec![1, 2, 1, 2]);
        });
    }
}
