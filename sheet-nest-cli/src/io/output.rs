use crate::config::NestCliConfig;
use serde::{Deserialize, Serialize};
use sheet_nest::io::ext_repr::{ExtNestInstance, ExtNestSolution};

/// Everything written to `sol_{name}.json`: the instance, its solution and the config used
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NestOutput {
    #[serde(flatten)]
    pub instance: ExtNestInstance,
    pub solution: ExtNestSolution,
    pub config: NestCliConfig,
}
