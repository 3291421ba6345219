#[cfg(test)]
mod tests {
    use std::fs;
    use std::fs::File;
    use std::io::BufReader;
    use std::path::{Path, PathBuf};

    use float_cmp::approx_eq;
    use test_case::test_case;

    use sheet_nest::io::export;
    use sheet_nest::io::svg::sheet_to_svg;
    use sheet_nest::normalize::expand;
    use sheet_nest_cli::config::NestCliConfig;
    use sheet_nest_cli::io;
    use sheet_nest_cli::io::output::NestOutput;
    use sheet_nest_cli::solve;

    fn output_folder(name: &str) -> PathBuf {
        let folder = std::env::temp_dir().join(format!("sheet-nest-cli-{name}"));
        fs::create_dir_all(&folder).unwrap();
        folder
    }

    #[test_case("../assets/kitchen.json", false; "kitchen")]
    #[test_case("../assets/kitchen.json", true; "kitchen explored")]
    #[test_case("../assets/shelving.json", false; "shelving")]
    #[test_case("../assets/shelving.json", true; "shelving explored")]
    #[test_case("../assets/signage.json", false; "signage")]
    #[test_case("../assets/signage.json", true; "signage explored")]
    fn test_instance(instance_path: &str, explore_strategies: bool) {
        let instance = io::read_instance(Path::new(instance_path)).unwrap();
        let config = NestCliConfig {
            explore_strategies,
            ..NestCliConfig::default()
        };
        let (strategy, nesting) = solve(&instance, &config).unwrap();
        let result = &nesting.result;
        if !explore_strategies {
            assert_eq!(strategy, instance.sheet.sort_strategy);
        }

        let n_pieces = expand(&instance.parts).pieces.len();
        assert_eq!(result.placed_count() + result.unplaced_piece_count, n_pieces);

        let sheet = &instance.sheet;
        for s in &result.sheets {
            assert!(!s.placements.is_empty());
            for p in &s.placements {
                assert!(p.x >= sheet.margin && p.y >= sheet.margin);
                assert!(p.x + p.width <= sheet.sheet_width - sheet.margin + 1e-6);
                assert!(p.y + p.height <= sheet.sheet_height - sheet.margin + 1e-6);
            }
        }

        let solution = export(&nesting, strategy);
        assert_eq!(solution.sheets.len(), solution.sheet_count);
        let wasted: f64 = solution.sheets.iter().map(|s| s.wasted_area).sum();
        assert!(approx_eq!(f64, wasted, solution.total_wasted_area, epsilon = 1e-6));
    }

    #[test]
    fn unplaceable_and_invalid_parts_are_reported() {
        let instance = io::read_instance(Path::new("../assets/signage.json")).unwrap();
        let (_, nesting) = solve(&instance, &NestCliConfig::default()).unwrap();

        assert_eq!(nesting.result.unplaceable, ["banner"]);
        assert_eq!(nesting.result.unplaced_piece_count, 1);
        let invalid = nesting.invalid.iter().map(|ip| ip.id.as_str()).collect::<Vec<_>>();
        assert_eq!(invalid, ["placeholder"]);
    }

    #[test]
    fn exploring_is_never_worse_than_the_configured_strategy() {
        for path in ["../assets/kitchen.json", "../assets/shelving.json", "../assets/signage.json"] {
            let instance = io::read_instance(Path::new(path)).unwrap();
            let (_, fixed) = solve(&instance, &NestCliConfig::default()).unwrap();
            let explore = NestCliConfig {
                explore_strategies: true,
                ..NestCliConfig::default()
            };
            let (_, best) = solve(&instance, &explore).unwrap();

            let key = |r: &sheet_nest::NestingResult| (r.unplaced_piece_count, r.sheet_count());
            assert!(key(&best.result) <= key(&fixed.result));
        }
    }

    #[test]
    fn config_file_is_parsed() {
        let config = io::read_config(Some(Path::new("../assets/config.json"))).unwrap();
        assert!(config.explore_strategies);
        assert!(config.svg_draw_options.spacing);
        assert_eq!(config.svg_draw_options.theme.stroke_width_multiplier, 2.0);

        assert_eq!(io::read_config(None).unwrap(), NestCliConfig::default());
        assert!(io::read_config(Some(Path::new("../assets/missing.json"))).is_err());
    }

    #[test]
    fn solution_files_are_written() {
        let instance = io::read_instance(Path::new("../assets/shelving.json")).unwrap();
        let config = NestCliConfig::default();
        let (strategy, nesting) = solve(&instance, &config).unwrap();
        let folder = output_folder("shelving");

        let output = NestOutput {
            instance: instance.clone(),
            solution: export(&nesting, strategy),
            config,
        };
        let json_path = folder.join("sol_shelving.json");
        io::write_json(&output, &json_path).unwrap();

        let reader = BufReader::new(File::open(&json_path).unwrap());
        let read_back: NestOutput = serde_json::from_reader(reader).unwrap();
        assert_eq!(read_back.instance.name, "shelving");
        assert_eq!(read_back.instance.parts, instance.parts);
        assert_eq!(read_back.solution.sheet_count, output.solution.sheet_count);
        assert_eq!(read_back.config, config);

        for (i, sheet) in nesting.result.sheets.iter().enumerate() {
            let svg_path = folder.join(format!("sol_shelving_{i}.svg"));
            let svg = sheet_to_svg(sheet, &instance.sheet, config.svg_draw_options, "shelving");
            io::write_svg(&svg, &svg_path).unwrap();
            let content = fs::read_to_string(&svg_path).unwrap();
            assert!(content.contains("<svg"));
        }
    }
}
