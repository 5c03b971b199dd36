//! E-learning - Entity Store CLI
//!
//! 受講者・教師・科目をJSONコレクションとして管理

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use elearning::adapter::config::Config;
use elearning::driver::{Args, ELearningWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration
    let mut config = Config::load_or_default(&args.config)?;
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }

    let workflow = ELearningWorkflow::new(config);

    workflow.execute(args.command)
}
