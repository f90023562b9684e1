use crate::cli::Cli;
use crate::display::Display;

pub struct App {
    pub cli: Cli,
    pub display: Display,
}

impl App {
    pub fn new(cli: Cli) -> Self {
        let unformatted = cli.unformatted;

        App {
            cli,
            display: Display::new(unformatted),
        }
    }
}
