//! rTrainer main entrypoint.

use rtrainer::run;
use rtrainer::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
