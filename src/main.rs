//! rgiras main entrypoint.

use rgiras::run;
use rgiras::ui::messages::report;

fn main() {
    if let Err(e) = run() {
        report(&e);
        std::process::exit(1);
    }
}
