use std::sync::LazyLock;
use std::time::Instant;

use anyhow::Result;
use log::info;
use sheet_nest::io::ext_repr::ExtNestInstance;
use sheet_nest::normalize::expand;
use sheet_nest::{PartsNesting, SortStrategy, nest_best, nest_parts};

use crate::config::NestCliConfig;

pub mod config;
pub mod io;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Nests the parts of `instance`, either with the sort strategy of its sheet or, when
/// [`NestCliConfig::explore_strategies`] is set, with the best of all strategies.
/// Returns the strategy that produced the nesting.
pub fn solve(
    instance: &ExtNestInstance,
    config: &NestCliConfig,
) -> Result<(SortStrategy, PartsNesting)> {
    match config.explore_strategies {
        false => {
            let strategy = instance.sheet.sort_strategy;
            let nesting = nest_parts(&instance.parts, &instance.sheet)?;
            Ok((strategy, nesting))
        }
        true => {
            let normalized = expand(&instance.parts);
            let (strategy, result) = nest_best(&normalized.pieces, &instance.sheet)?;
            info!("[SOLVE] best sort strategy: {strategy}");
            let nesting = PartsNesting {
                invalid: normalized.invalid,
                result,
            };
            Ok((strategy, nesting))
        }
    }
}
