use std::fs;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::info;
use sheet_nest::io::export;
use sheet_nest::io::svg::sheet_to_svg;
use sheet_nest_cli::io::cli::Cli;
use sheet_nest_cli::io::output::NestOutput;
use sheet_nest_cli::{EPOCH, io, solve};
use thousands::Separable;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = io::read_config(args.config_file.as_deref())?;
    info!("Successfully parsed NestCliConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("invalid input file name: {}", args.input_file.display()))?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let instance = io::read_instance(&args.input_file)?;
    info!(
        "[MAIN] nesting {:?}: {} parts on {} x {} sheets",
        instance.name,
        instance.parts.len().separate_with_commas(),
        instance.sheet.sheet_width,
        instance.sheet.sheet_height
    );

    let (strategy, nesting) = solve(&instance, &config)?;
    let result = &nesting.result;
    info!(
        "[MAIN] {} pieces placed on {} sheets ({strategy}), efficiency {:.1}%, wasted area {} mm2, {} unplaced, took {:?}",
        result.placed_count().separate_with_commas(),
        result.sheet_count(),
        result.total_efficiency * 100.0,
        (result.total_wasted_area.round() as u64).separate_with_commas(),
        result.unplaced_piece_count.separate_with_commas(),
        EPOCH.elapsed()
    );

    {
        let output = NestOutput {
            solution: export(&nesting, strategy),
            instance: instance.clone(),
            config,
        };

        let solution_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.json"));

        io::write_json(&output, &solution_path)?;
    }

    {
        let sheet_config = instance.sheet.with_sort_strategy(strategy);
        for (i, sheet) in result.sheets.iter().enumerate() {
            let svg_path = args
                .solution_folder
                .join(format!("sol_{input_file_stem}_{i}.svg"));
            let title = format!("{} - sheet {i}", instance.name);
            let svg = sheet_to_svg(sheet, &sheet_config, config.svg_draw_options, &title);

            io::write_svg(&svg, &svg_path)?;
        }
    }

    Ok(())
}
