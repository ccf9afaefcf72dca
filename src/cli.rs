// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::Parser;

use crate::cmd::check::check_catalog;
use crate::cmd::reset::reset_progress;
use crate::cmd::stats::StatsFormat;
use crate::cmd::stats::print_progress_stats;
use crate::config::Config;
use crate::error::Fallible;
use crate::server::server::start_server;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Serve the tutorial on localhost.
    Serve {
        /// Port to listen on.
        #[arg(long)]
        port: Option<u16>,
        /// Directory where progress is stored.
        #[arg(long)]
        state_dir: Option<String>,
        /// Don't open the browser.
        #[arg(long)]
        no_open: bool,
    },
    /// Validate the lesson catalog.
    Check,
    /// Print completion statistics.
    Stats {
        /// Directory where progress is stored.
        #[arg(long)]
        state_dir: Option<String>,
        /// Output format.
        #[arg(long, default_value_t = StatsFormat::Text)]
        format: StatsFormat,
    },
    /// Clear saved progress.
    Reset {
        /// Directory where progress is stored.
        #[arg(long)]
        state_dir: Option<String>,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Serve {
            port,
            state_dir,
            no_open,
        } => {
            let config = Config::load(port, state_dir, no_open)?;
            start_server(config).await
        }
        Command::Check => check_catalog(),
        Command::Stats { state_dir, format } => {
            let config = Config::load(None, state_dir, true)?;
            print_progress_stats(&config.state_dir, format)
        }
        Command::Reset { state_dir } => {
            let config = Config::load(None, state_dir, true)?;
            reset_progress(&config.state_dir)
        }
    }
}
